use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::context::SessionContext;
use crate::error::ShellError;
use crate::markdown;

/// about
/// Shortcut for `cat about.md`.
pub struct AboutCommand;

impl Command for AboutCommand {
    fn summary(&self) -> &'static str {
        "About me"
    }

    fn execute(&self, _inv: &Invocation, ctx: &mut SessionContext) -> CommandResult {
        let file = ctx
            .vfs
            .get("about.md")
            .ok_or_else(|| ShellError::FileNotFound("about.md".to_string()))?;
        let mut out = Outcome::none();
        for line in markdown::render(&file.content) {
            out.push(line);
        }
        Ok(out)
    }
}
