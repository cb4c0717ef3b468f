use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::context::SessionContext;
use crate::error::ShellError;
use crate::render::Line;
use crate::theme::Theme;

/// theme [name]
/// No argument reports the current theme and the valid set. A valid name
/// switches the theme (the session notices the change and applies it to
/// the display surface); an invalid name is rejected and nothing changes.
pub struct ThemeCommand;

impl Command for ThemeCommand {
    fn summary(&self) -> &'static str {
        "Change the terminal theme"
    }

    fn manual(&self) -> Option<&'static str> {
        Some("Usage: theme [mocha|latte|frappe|macchiato]\nChange the terminal theme (Catppuccin flavors).")
    }

    fn execute(&self, inv: &Invocation, ctx: &mut SessionContext) -> CommandResult {
        let mut out = Outcome::none();

        let Some(name) = inv.args.first() else {
            out.push(Line::info(format!("Current theme: {}", ctx.theme)));
            out.push(Line::info(format!("Available themes: {}", Theme::list())));
            return Ok(out);
        };

        let theme = Theme::from_name(name).ok_or_else(|| {
            ShellError::invalid(format!("Invalid theme. Available: {}", Theme::list()))
        })?;

        ctx.theme = theme;
        out.push(Line::success(format!("Theme changed to: {}", theme)));
        Ok(out)
    }
}
