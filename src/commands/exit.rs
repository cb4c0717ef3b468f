use crate::command::{Command, CommandResult, Invocation, Outcome, SpecialAction};
use crate::context::SessionContext;
use crate::render::Line;

const FAREWELL_URL: &str = "https://github.com/Sithukyaw666";
const FAREWELL_DELAY_MS: u32 = 3000;

/// exit
/// Says goodbye, then the session schedules the navigation and stops
/// accepting input.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn summary(&self) -> &'static str {
        "Close the terminal"
    }

    fn execute(&self, _inv: &Invocation, _ctx: &mut SessionContext) -> CommandResult {
        let mut out = Outcome::none();
        out.push(Line::success(
            "Goodbye! Thanks for visiting my terminal portfolio.",
        ));
        out.push(Line::info("Closing connection in 3 seconds..."));
        out.action = Some(SpecialAction::Navigate {
            url: FAREWELL_URL.to_string(),
            delay_ms: FAREWELL_DELAY_MS,
        });
        Ok(out)
    }
}
