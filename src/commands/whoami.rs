use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::context::SessionContext;
use crate::render::Line;

pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn summary(&self) -> &'static str {
        "Display current user information"
    }

    fn manual(&self) -> Option<&'static str> {
        Some("Usage: whoami\nDisplay current user information.")
    }

    fn execute(&self, _inv: &Invocation, ctx: &mut SessionContext) -> CommandResult {
        Ok(Outcome::lines(vec![
            Line::plain(ctx.user.clone()).into(),
            Line::plain("").into(),
            Line::info("User: Sithu Kyaw").into(),
            Line::info("Role: [PROFESSIONAL TRASH]").into(),
            Line::success("Status: ONLINE_AND_CONFUSED").into(),
            Line::info("Shell: /bin/bash").into(),
            Line::info("Home: /home/stk").into(),
        ]))
    }
}
