use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::context::SessionContext;
use crate::render::Line;

const INNER_WIDTH: usize = 61;

pub struct NeofetchCommand;

fn edge(left: char, right: char) -> String {
    let mut s = String::with_capacity(INNER_WIDTH + 2);
    s.push(left);
    for _ in 0..INNER_WIDTH {
        s.push('─');
    }
    s.push(right);
    s
}

fn row(text: &str) -> String {
    format!("│ {:<width$} │", text, width = INNER_WIDTH - 2)
}

fn centered(text: &str) -> String {
    format!("│{:^width$}│", text, width = INNER_WIDTH)
}

impl Command for NeofetchCommand {
    fn summary(&self) -> &'static str {
        "Show system information"
    }

    fn execute(&self, _inv: &Invocation, ctx: &mut SessionContext) -> CommandResult {
        let lines = vec![
            edge('╭', '╮'),
            centered("STK Terminal v2.1"),
            edge('├', '┤'),
            row("OS: Fedora Linux (Terminal Simulation)"),
            row("Shell: Cyberpunk Terminal v2.1"),
            row(&format!("Theme: {}", ctx.theme)),
            row(&format!("Uptime: {}s", ctx.uptime_seconds())),
            row(&format!("User: {}@{}", ctx.user, ctx.host)),
            row(&format!("Directory: {}", ctx.path)),
            edge('╰', '╯'),
        ];
        Ok(Outcome::lines(
            lines.into_iter().map(|l| Line::info(l).into()).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderable;

    #[test]
    fn panel_rows_share_one_width() {
        let mut ctx = SessionContext::new();
        let inv = Invocation::parse("neofetch").unwrap();
        let out = NeofetchCommand.execute(&inv, &mut ctx).unwrap();
        let widths: Vec<usize> = out
            .renderables
            .iter()
            .map(|r| match r {
                Renderable::Text(l) => l.text.chars().count(),
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }
}
