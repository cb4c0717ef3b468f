use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::context::SessionContext;
use crate::render::Line;

/// echo [TEXT]...
/// Arguments rejoined with single spaces.
pub struct EchoCommand;

impl Command for EchoCommand {
    fn summary(&self) -> &'static str {
        "Write arguments to the output"
    }

    fn execute(&self, inv: &Invocation, _ctx: &mut SessionContext) -> CommandResult {
        let mut out = Outcome::none();
        out.push(Line::plain(inv.args.join(" ")));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderable;

    #[test]
    fn arguments_are_rejoined_with_single_spaces() {
        let mut ctx = SessionContext::new();
        let inv = Invocation::parse("echo hello   world").unwrap();
        let out = EchoCommand.execute(&inv, &mut ctx).unwrap();
        match &out.renderables[0] {
            Renderable::Text(l) => assert_eq!(l.text, "hello world"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
