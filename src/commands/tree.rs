use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::context::SessionContext;
use crate::render::Line;

pub struct TreeCommand;

impl Command for TreeCommand {
    fn summary(&self) -> &'static str {
        "List files as a tree"
    }

    fn execute(&self, _inv: &Invocation, ctx: &mut SessionContext) -> CommandResult {
        let mut out = Outcome::none();
        out.push(Line::info("."));
        let files = ctx.vfs.list();
        for (i, file) in files.iter().enumerate() {
            let prefix = if i + 1 == files.len() {
                "└── "
            } else {
                "├── "
            };
            out.push(Line::plain(format!("{}{}", prefix, file.name)));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderable;

    #[test]
    fn last_entry_gets_the_corner_prefix() {
        let mut ctx = SessionContext::new();
        let inv = Invocation::parse("tree").unwrap();
        let out = TreeCommand.execute(&inv, &mut ctx).unwrap();
        let last = match out.renderables.last().unwrap() {
            Renderable::Text(l) => &l.text,
            other => panic!("unexpected {:?}", other),
        };
        assert!(last.starts_with("└── "));
        assert!(last.ends_with("readme.md"));
    }
}
