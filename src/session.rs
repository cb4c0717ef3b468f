//! One shell session per page load: boot sequence, dispatch loop, history
//! recall, live suggestions, and the timed-step plumbing for anything
//! deferred.

use std::sync::Arc;

use crate::command::{dispatch, CommandRegistry, Invocation, Outcome, SpecialAction};
use crate::context::SessionContext;
use crate::error::ShellError;
use crate::render::{
    Block, GraphRenderer, Line, Navigator, OutputSink, Renderable, ThemeSurface,
};
use crate::schedule::{Scheduler, StepAction, TimerHandle};
use crate::suggest::{Completion, SuggestionEngine};
use crate::theme::Theme;

const BOOT_INITIAL_DELAY_MS: u32 = 500;
const BOOT_STEP_DELAY_MS: u32 = 300;

const BOOT_LINES: [&str; 8] = [
    "System initialized successfully...",
    "Loading user profile...",
    "Mounting virtual file system...",
    "Starting portfolio services...",
    "",
    "Welcome to STK Terminal Portfolio v2.1",
    "Type \"help\" for available commands.",
    "",
];

// live dropdown only shows usefully small candidate sets
const MAX_LIVE_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Playing the welcome script; input is dropped, not buffered.
    Booting,
    Ready,
    /// A delayed navigation is pending (or done); no further input.
    Closing,
}

pub struct ShellSession {
    ctx: SessionContext,
    registry: Arc<CommandRegistry>,
    engine: SuggestionEngine,
    scheduler: Scheduler,
    phase: SessionPhase,
    boot_started: bool,
    sink: Box<dyn OutputSink>,
    display: Box<dyn ThemeSurface>,
    navigator: Box<dyn Navigator>,
    graph: Option<Box<dyn GraphRenderer>>,
}

impl ShellSession {
    pub fn new(
        sink: Box<dyn OutputSink>,
        display: Box<dyn ThemeSurface>,
        navigator: Box<dyn Navigator>,
        graph: Option<Box<dyn GraphRenderer>>,
    ) -> Self {
        let registry = Arc::new(CommandRegistry::default_commands());
        let mut ctx = SessionContext::new();
        ctx.registry = Some(registry.clone());
        ctx.graph_available = graph.is_some();
        let engine = SuggestionEngine::new(registry.names(), ctx.vfs.names());
        Self {
            ctx,
            registry,
            engine,
            scheduler: Scheduler::new(),
            phase: SessionPhase::Booting,
            boot_started: false,
            sink,
            display,
            navigator,
            graph,
        }
    }

    /// Restore a persisted theme before the first paint. Applies it to the
    /// display surface so page and report agree from the start.
    pub fn restore_theme(&mut self, theme: Theme) {
        self.ctx.theme = theme;
        self.display.set_theme(theme);
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn theme(&self) -> Theme {
        self.ctx.theme
    }

    /// Queue the first boot message. Safe to call more than once; only the
    /// first call does anything.
    pub fn start(&mut self) {
        if std::mem::replace(&mut self.boot_started, true) {
            return;
        }
        self.scheduler
            .schedule(BOOT_INITIAL_DELAY_MS, StepAction::Boot(0));
    }

    /// Next scheduled step the host should arm a real timer for.
    pub fn next_armed(&mut self) -> Option<(TimerHandle, u32)> {
        self.scheduler.next_unarmed()
    }

    /// A timer fired. Stale handles (after teardown) claim nothing and
    /// fall through - that is the teardown guarantee.
    pub fn fire(&mut self, handle: TimerHandle) {
        match self.scheduler.claim(handle) {
            Some(StepAction::Boot(index)) => {
                self.sink
                    .append(Line::info(BOOT_LINES[index]).into());
                self.sink.scroll_to_end();
                if index + 1 < BOOT_LINES.len() {
                    self.scheduler
                        .schedule(BOOT_STEP_DELAY_MS, StepAction::Boot(index + 1));
                } else {
                    self.phase = SessionPhase::Ready;
                }
            }
            Some(StepAction::Navigate(url)) => {
                self.navigator.navigate_to(&url);
            }
            None => {}
        }
    }

    /// Drain every pending step immediately. Used by the native REPL and
    /// tests, where real timers would only slow things down.
    pub fn fast_forward(&mut self) {
        while let Some((handle, _delay)) = self.next_armed() {
            self.fire(handle);
        }
    }

    /// One full command round trip: echo, dispatch, render, record.
    pub fn submit(&mut self, line: &str) {
        if self.phase != SessionPhase::Ready {
            return;
        }
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        self.sink.append(
            Block::CommandEcho {
                prompt: self.ctx.prompt(),
                command: line.to_string(),
            }
            .into(),
        );

        // parse always succeeds here; blank lines returned above
        if let Some(inv) = Invocation::parse(line) {
            let theme_before = self.ctx.theme;
            match dispatch(&inv, &mut self.ctx, &self.registry) {
                Ok(outcome) => {
                    if self.ctx.theme != theme_before {
                        self.display.set_theme(self.ctx.theme);
                    }
                    self.apply(outcome);
                }
                Err(err) => self.report(err),
            }
        }

        self.ctx.history.append(line);
        self.sink.scroll_to_end();
    }

    fn apply(&mut self, outcome: Outcome) {
        for renderable in outcome.renderables {
            // the graph collaborator draws into the container after the
            // sink has created it
            let graph_payload = match &renderable {
                Renderable::Block(Block::SkillGraph {
                    container_id,
                    nodes,
                    edges,
                }) => Some((container_id.clone(), nodes.clone(), edges.clone())),
                _ => None,
            };
            self.sink.append(renderable);
            if let (Some((container_id, nodes, edges)), Some(graph)) =
                (graph_payload, self.graph.as_ref())
            {
                graph.render(&nodes, &edges, &container_id);
            }
        }

        match outcome.action {
            Some(SpecialAction::ClearScreen) => self.sink.clear(),
            Some(SpecialAction::Navigate { url, delay_ms }) => {
                self.phase = SessionPhase::Closing;
                self.scheduler.schedule(delay_ms, StepAction::Navigate(url));
            }
            None => {}
        }
    }

    fn report(&mut self, err: ShellError) {
        let hint = matches!(err, ShellError::UnknownCommand(_));
        self.sink.append(Line::error(err.to_string()).into());
        if hint {
            self.sink
                .append(Line::info("Type 'help' to see available commands.").into());
        }
    }

    /// Candidates for the dropdown, re-evaluated per keystroke. Empty
    /// input or an unhelpfully large match set shows nothing.
    pub fn live_suggestions(&self, input: &str) -> Vec<String> {
        if input.is_empty() {
            return Vec::new();
        }
        let matches = self.engine.suggest(input);
        if matches.is_empty() || matches.len() >= MAX_LIVE_SUGGESTIONS {
            return Vec::new();
        }
        matches
    }

    /// Explicit Tab completion; unlike the dropdown this fills the input
    /// on an unambiguous match.
    pub fn complete(&self, line: &str) -> Completion {
        self.engine.complete(line)
    }

    /// Arrow-key history navigation. None when there is nothing to recall.
    pub fn recall(&mut self, direction: i32) -> Option<String> {
        if self.ctx.history.is_empty() {
            return None;
        }
        Some(self.ctx.history.recall(direction))
    }

    /// Ctrl-C affordance: echo `^C`, touch nothing else.
    pub fn interrupt(&mut self) {
        self.sink.append(Line::warning("^C").into());
        self.sink.scroll_to_end();
    }

    /// Tear the session down: every outstanding timer handle goes stale.
    pub fn close(&mut self) {
        self.scheduler.cancel_all();
        self.phase = SessionPhase::Closing;
    }

    pub fn is_idle(&self) -> bool {
        self.scheduler.is_idle()
    }

    pub fn history_entries(&self) -> &[String] {
        self.ctx.history.entries()
    }
}
