use std::collections::BTreeMap;
use std::sync::Arc;

use crate::context::SessionContext;
use crate::error::ShellError;
use crate::render::Renderable;

pub type CommandResult = Result<Outcome, ShellError>;

/// One parsed input line. The command token is lowercased for lookup;
/// arguments keep the case the user typed, and `raw` keeps the original
/// line for anything spacing-sensitive.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub name: String,
    pub args: Vec<String>,
    pub raw: String,
}

impl Invocation {
    /// Whitespace tokenization. Returns None for blank input (a no-op,
    /// not an error).
    pub fn parse(line: &str) -> Option<Invocation> {
        let raw = line.trim();
        let mut parts = raw.split_whitespace();
        let name = parts.next()?.to_lowercase();
        Some(Invocation {
            name,
            args: parts.map(str::to_string).collect(),
            raw: raw.to_string(),
        })
    }
}

/// Side effects a handler asks the session to perform against the sink,
/// scheduler, or navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialAction {
    ClearScreen,
    Navigate { url: String, delay_ms: u32 },
}

/// What one command execution produced: zero or more renderables plus an
/// optional side effect. This is the single contract every handler meets.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    pub renderables: Vec<Renderable>,
    pub action: Option<SpecialAction>,
}

impl Outcome {
    pub fn none() -> Outcome {
        Outcome::default()
    }

    pub fn lines(renderables: Vec<Renderable>) -> Outcome {
        Outcome {
            renderables,
            action: None,
        }
    }

    pub fn action(action: SpecialAction) -> Outcome {
        Outcome {
            renderables: Vec::new(),
            action: Some(action),
        }
    }

    pub fn push(&mut self, renderable: impl Into<Renderable>) {
        self.renderables.push(renderable.into());
    }
}

pub trait Command {
    /// One-line description shown by `help` with no arguments.
    fn summary(&self) -> &'static str;

    /// Manual text shown by `help <cmd>`; commands without one get the
    /// "No manual entry" response.
    fn manual(&self) -> Option<&'static str> {
        None
    }

    fn execute(&self, inv: &Invocation, ctx: &mut SessionContext) -> CommandResult;
}

pub struct CommandRegistry {
    // BTreeMap so name iteration (suggestions, help) is deterministic
    commands: BTreeMap<&'static str, Arc<dyn Command + Send + Sync>>,
    // registration order of canonical names, for the help listing
    canonical: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
            canonical: Vec::new(),
        }
    }

    pub fn register(&mut self, name: &'static str, cmd: Arc<dyn Command + Send + Sync>) {
        self.canonical.push(name);
        self.commands.insert(name, cmd);
    }

    /// Register an extra name for an already-registered command (`man`,
    /// `cls`, `dir`, `resume`). Aliases resolve but do not show up as
    /// separate help entries.
    pub fn register_alias(&mut self, alias: &'static str, target: &str) {
        if let Some(cmd) = self.commands.get(target).cloned() {
            self.commands.insert(alias, cmd);
        }
    }

    pub fn resolve(&self, name: &str) -> Option<&Arc<dyn Command + Send + Sync>> {
        self.commands.get(name)
    }

    /// Every name the registry answers to, aliases included, sorted.
    pub fn names(&self) -> Vec<String> {
        self.commands.keys().map(|k| k.to_string()).collect()
    }

    /// (name, summary) pairs in registration order, canonical names only.
    pub fn listing(&self) -> Vec<(&'static str, &'static str)> {
        self.canonical
            .iter()
            .filter_map(|name| self.commands.get(name).map(|cmd| (*name, cmd.summary())))
            .collect()
    }

    pub fn manual_for(&self, name: &str) -> Option<&'static str> {
        self.resolve(name).and_then(|cmd| cmd.manual())
    }

    pub fn default_commands() -> Self {
        let mut reg = Self::new();
        reg.register("help", Arc::new(crate::commands::help::HelpCommand));
        reg.register("clear", Arc::new(crate::commands::clear::ClearCommand));
        reg.register("ls", Arc::new(crate::commands::ls::LsCommand));
        reg.register("cat", Arc::new(crate::commands::cat::CatCommand));
        reg.register("whoami", Arc::new(crate::commands::whoami::WhoamiCommand));
        reg.register("about", Arc::new(crate::commands::about::AboutCommand));
        reg.register("contact", Arc::new(crate::commands::contact::ContactCommand));
        reg.register("skills", Arc::new(crate::commands::skills::SkillsCommand));
        reg.register("cv", Arc::new(crate::commands::cv::CvCommand));
        reg.register("history", Arc::new(crate::commands::history::HistoryCommand));
        reg.register("theme", Arc::new(crate::commands::theme::ThemeCommand));
        reg.register("pwd", Arc::new(crate::commands::pwd::PwdCommand));
        reg.register("date", Arc::new(crate::commands::date::DateCommand));
        reg.register("uptime", Arc::new(crate::commands::uptime::UptimeCommand));
        reg.register("neofetch", Arc::new(crate::commands::neofetch::NeofetchCommand));
        reg.register("exit", Arc::new(crate::commands::exit::ExitCommand));
        reg.register("sudo", Arc::new(crate::commands::sudo::SudoCommand));
        reg.register("echo", Arc::new(crate::commands::echo::EchoCommand));
        reg.register("tree", Arc::new(crate::commands::tree::TreeCommand));
        reg.register("website", Arc::new(crate::commands::website::WebsiteCommand));
        reg.register_alias("man", "help");
        reg.register_alias("cls", "clear");
        reg.register_alias("dir", "ls");
        reg.register_alias("resume", "cv");
        reg
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::default_commands()
    }
}

/// Resolve and run one parsed invocation. Unknown names surface as
/// `ShellError::UnknownCommand`; handler failures come back as their own
/// taxonomy variants and never propagate further than the caller.
pub fn dispatch(
    inv: &Invocation,
    ctx: &mut SessionContext,
    registry: &CommandRegistry,
) -> CommandResult {
    match registry.resolve(&inv.name) {
        Some(cmd) => cmd.execute(inv, ctx),
        None => Err(ShellError::UnknownCommand(inv.name.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lowercases_command_but_not_args() {
        let inv = Invocation::parse("  CAT About.md  ").unwrap();
        assert_eq!(inv.name, "cat");
        assert_eq!(inv.args, vec!["About.md"]);
        assert_eq!(inv.raw, "CAT About.md");
    }

    #[test]
    fn parse_blank_is_none() {
        assert!(Invocation::parse("   ").is_none());
        assert!(Invocation::parse("").is_none());
    }

    #[test]
    fn aliases_resolve_to_the_same_command() {
        let reg = CommandRegistry::default_commands();
        let help = reg.resolve("help").unwrap();
        let man = reg.resolve("man").unwrap();
        assert!(Arc::ptr_eq(help, man));
    }

    #[test]
    fn names_include_aliases() {
        let reg = CommandRegistry::default_commands();
        let names = reg.names();
        for expected in ["cls", "dir", "man", "resume", "neofetch", "website"] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
    }

    #[test]
    fn listing_skips_aliases() {
        let reg = CommandRegistry::default_commands();
        let listing = reg.listing();
        assert!(listing.iter().any(|(n, _)| *n == "help"));
        assert!(!listing.iter().any(|(n, _)| *n == "man"));
    }

    #[test]
    fn dispatch_reports_unknown_command() {
        let reg = CommandRegistry::default_commands();
        let mut ctx = SessionContext::new();
        let inv = Invocation::parse("frobnicate now").unwrap();
        let err = dispatch(&inv, &mut ctx, &reg).unwrap_err();
        assert_eq!(err, ShellError::UnknownCommand("frobnicate".into()));
    }

    #[test]
    fn dispatch_is_case_insensitive_on_the_command() {
        let reg = CommandRegistry::default_commands();
        let mut ctx = SessionContext::new();
        let inv = Invocation::parse("ECHO hi").unwrap();
        assert!(dispatch(&inv, &mut ctx, &reg).is_ok());
    }
}
