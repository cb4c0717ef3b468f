use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::context::SessionContext;
use crate::render::Line;

/// sudo <...>
/// Always denied. There is nothing to elevate to.
pub struct SudoCommand;

impl Command for SudoCommand {
    fn summary(&self) -> &'static str {
        "Run a command as root (good luck)"
    }

    fn execute(&self, _inv: &Invocation, _ctx: &mut SessionContext) -> CommandResult {
        Ok(Outcome::lines(vec![
            Line::warning("Nice try! But this is a portfolio, not a real terminal. 😄").into(),
            Line::error("sudo access denied: insufficient coffee levels").into(),
        ]))
    }
}
