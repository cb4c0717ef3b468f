use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::content;
use crate::context::SessionContext;
use crate::render::Block;

pub struct ContactCommand;

impl Command for ContactCommand {
    fn summary(&self) -> &'static str {
        "Show contact information"
    }

    fn manual(&self) -> Option<&'static str> {
        Some("Usage: contact\nShow contact information.")
    }

    fn execute(&self, _inv: &Invocation, _ctx: &mut SessionContext) -> CommandResult {
        let mut out = Outcome::none();
        out.push(Block::ContactCard {
            channels: content::contact_channels(),
        });
        Ok(out)
    }
}
