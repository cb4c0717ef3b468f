use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::context::SessionContext;
use crate::error::ShellError;
use crate::render::Line;

/// help [COMMAND]
/// No argument: the full command list. With an argument: that command's
/// manual text, or the "No manual entry" line when it has none.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn summary(&self) -> &'static str {
        "Show available commands"
    }

    fn execute(&self, inv: &Invocation, ctx: &mut SessionContext) -> CommandResult {
        let registry = ctx
            .registry
            .clone()
            .ok_or_else(|| ShellError::Handler("command registry not attached".to_string()))?;

        let mut out = Outcome::none();

        if let Some(name) = inv.args.first() {
            let name = name.to_lowercase();
            match registry.manual_for(&name) {
                Some(manual) => {
                    for line in manual.lines() {
                        out.push(Line::info(line));
                    }
                }
                None => out.push(Line::error(format!("No manual entry for {}", name))),
            }
            return Ok(out);
        }

        out.push(Line::info("Available commands:"));
        out.push(Line::plain(""));
        for (name, summary) in registry.listing() {
            out.push(Line::plain(format!("  {:<10} - {}", name, summary)));
        }
        out.push(Line::plain(""));
        out.push(Line::info("Use 'help <command>' for details on a command."));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandRegistry;
    use crate::render::Renderable;
    use std::sync::Arc;

    fn ctx() -> SessionContext {
        let mut ctx = SessionContext::new();
        ctx.registry = Some(Arc::new(CommandRegistry::default_commands()));
        ctx
    }

    fn texts(outcome: &Outcome) -> Vec<String> {
        outcome
            .renderables
            .iter()
            .filter_map(|r| match r {
                Renderable::Text(line) => Some(line.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bare_help_lists_every_canonical_command() {
        let mut ctx = ctx();
        let inv = Invocation::parse("help").unwrap();
        let out = HelpCommand.execute(&inv, &mut ctx).unwrap();
        let joined = texts(&out).join("\n");
        for name in ["cat", "theme", "neofetch", "website"] {
            assert!(joined.contains(name), "listing missing {name}");
        }
    }

    #[test]
    fn help_with_known_topic_prints_its_manual() {
        let mut ctx = ctx();
        let inv = Invocation::parse("help theme").unwrap();
        let out = HelpCommand.execute(&inv, &mut ctx).unwrap();
        assert!(texts(&out)[0].contains("Usage: theme"));
    }

    #[test]
    fn help_with_unknown_topic_reports_no_manual() {
        let mut ctx = ctx();
        let inv = Invocation::parse("help frobnicate").unwrap();
        let out = HelpCommand.execute(&inv, &mut ctx).unwrap();
        assert_eq!(texts(&out), vec!["No manual entry for frobnicate"]);
    }
}
