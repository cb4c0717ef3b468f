use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::context::SessionContext;
use crate::render::{Block, FileEntry, Line};

/// ls
/// File count header plus the listing block. Registered under `dir` too.
pub struct LsCommand;

impl Command for LsCommand {
    fn summary(&self) -> &'static str {
        "List files in the current directory"
    }

    fn manual(&self) -> Option<&'static str> {
        Some("Usage: ls\nList files and directories in the current location.")
    }

    fn execute(&self, _inv: &Invocation, ctx: &mut SessionContext) -> CommandResult {
        let mut out = Outcome::none();
        out.push(Line::info(format!("total {}", ctx.vfs.len())));
        out.push(Block::FileListing {
            entries: ctx
                .vfs
                .list()
                .iter()
                .map(|f| FileEntry {
                    name: f.name.to_string(),
                    kind: f.kind,
                    size: f.size.to_string(),
                    modified: f.modified.to_string(),
                })
                .collect(),
        });
        Ok(out)
    }
}
