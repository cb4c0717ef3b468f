use crate::command::{Command, CommandResult, Invocation, Outcome, SpecialAction};
use crate::context::SessionContext;

/// clear
/// Empties the output sink. Registered under `cls` as well.
pub struct ClearCommand;

impl Command for ClearCommand {
    fn summary(&self) -> &'static str {
        "Clear the terminal screen"
    }

    fn manual(&self) -> Option<&'static str> {
        Some("Usage: clear\nClear the terminal screen.")
    }

    fn execute(&self, _inv: &Invocation, _ctx: &mut SessionContext) -> CommandResult {
        Ok(Outcome::action(SpecialAction::ClearScreen))
    }
}
