use crate::command::{Command, CommandResult, Invocation, Outcome, SpecialAction};
use crate::context::SessionContext;
use crate::render::Line;

/// website
/// Hands the visitor over to the traditional scrolling site.
pub struct WebsiteCommand;

impl Command for WebsiteCommand {
    fn summary(&self) -> &'static str {
        "Switch to the website interface"
    }

    fn execute(&self, _inv: &Invocation, _ctx: &mut SessionContext) -> CommandResult {
        let mut out = Outcome::none();
        out.push(Line::success("Switching to traditional website interface..."));
        out.push(Line::info("Redirecting in 2 seconds..."));
        out.action = Some(SpecialAction::Navigate {
            url: "./index.html".to_string(),
            delay_ms: 2000,
        });
        Ok(out)
    }
}
