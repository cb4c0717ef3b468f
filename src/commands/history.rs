use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::context::SessionContext;
use crate::render::Line;

/// history
/// Past command lines, 1-indexed, oldest first. The in-flight `history`
/// line is appended after dispatch, so it never lists itself.
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn summary(&self) -> &'static str {
        "Show command history"
    }

    fn manual(&self) -> Option<&'static str> {
        Some("Usage: history\nShow command history.")
    }

    fn execute(&self, _inv: &Invocation, ctx: &mut SessionContext) -> CommandResult {
        if ctx.history.is_empty() {
            let mut out = Outcome::none();
            out.push(Line::info("No commands in history."));
            return Ok(out);
        }
        Ok(Outcome::lines(
            ctx.history
                .entries()
                .iter()
                .enumerate()
                .map(|(i, cmd)| Line::plain(format!("{:>4}: {}", i + 1, cmd)).into())
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderable;

    #[test]
    fn entries_are_one_indexed_in_order() {
        let mut ctx = SessionContext::new();
        ctx.history.append("ls");
        ctx.history.append("cat about.md");
        let inv = Invocation::parse("history").unwrap();
        let out = HistoryCommand.execute(&inv, &mut ctx).unwrap();
        let texts: Vec<_> = out
            .renderables
            .iter()
            .map(|r| match r {
                Renderable::Text(l) => l.text.clone(),
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert_eq!(texts, vec!["   1: ls", "   2: cat about.md"]);
    }

    #[test]
    fn empty_history_says_so() {
        let mut ctx = SessionContext::new();
        let inv = Invocation::parse("history").unwrap();
        let out = HistoryCommand.execute(&inv, &mut ctx).unwrap();
        match &out.renderables[0] {
            Renderable::Text(l) => assert_eq!(l.text, "No commands in history."),
            other => panic!("unexpected {:?}", other),
        }
    }
}
