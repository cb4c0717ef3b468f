use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::context::SessionContext;
use crate::render::Line;

pub struct UptimeCommand;

impl Command for UptimeCommand {
    fn summary(&self) -> &'static str {
        "Show session uptime"
    }

    fn execute(&self, _inv: &Invocation, ctx: &mut SessionContext) -> CommandResult {
        let total = ctx.uptime_seconds();
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;
        let mut out = Outcome::none();
        out.push(Line::plain(format!("up {}h {}m {}s", hours, minutes, seconds)));
        Ok(out)
    }
}
