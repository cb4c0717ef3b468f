use chrono::Local;

use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::context::SessionContext;
use crate::render::Line;

pub struct DateCommand;

impl Command for DateCommand {
    fn summary(&self) -> &'static str {
        "Show current date and time"
    }

    fn execute(&self, _inv: &Invocation, _ctx: &mut SessionContext) -> CommandResult {
        let mut out = Outcome::none();
        out.push(Line::plain(
            Local::now().format("%a %b %e %H:%M:%S %Z %Y").to_string(),
        ));
        Ok(out)
    }
}
