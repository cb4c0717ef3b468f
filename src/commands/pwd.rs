use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::context::SessionContext;
use crate::render::Line;

/// pwd
/// The path label is decorative - there is no directory hierarchy behind
/// it.
pub struct PwdCommand;

impl Command for PwdCommand {
    fn summary(&self) -> &'static str {
        "Print working directory"
    }

    fn execute(&self, _inv: &Invocation, ctx: &mut SessionContext) -> CommandResult {
        let mut out = Outcome::none();
        out.push(Line::plain(ctx.path.clone()));
        Ok(out)
    }
}
