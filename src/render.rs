//! The uniform result contract between command handlers and the display,
//! plus the traits the session talks to the outside world through. The
//! core never touches the DOM; it appends `Renderable`s to an
//! `OutputSink` and lets the host decide what that means.

use serde::Serialize;

use crate::theme::Theme;
use crate::vfs::FileKind;

/// Style tag carried by every text line, mapped by the host onto its
/// output-line CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Plain,
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub text: String,
    pub style: Style,
}

impl Line {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Line {
            text: text.into(),
            style,
        }
    }
    pub fn plain(text: impl Into<String>) -> Self {
        Line::new(text, Style::Plain)
    }
    pub fn info(text: impl Into<String>) -> Self {
        Line::new(text, Style::Info)
    }
    pub fn success(text: impl Into<String>) -> Self {
        Line::new(text, Style::Success)
    }
    pub fn warning(text: impl Into<String>) -> Self {
        Line::new(text, Style::Warning)
    }
    pub fn error(text: impl Into<String>) -> Self {
        Line::new(text, Style::Error)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub kind: FileKind,
    pub size: String,
    pub modified: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillBar {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<SkillBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub group: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

/// Structured payloads the sink renders as something richer than a text
/// line (the source page built DOM fragments for these).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    CommandEcho {
        prompt: String,
        command: String,
    },
    FileListing {
        entries: Vec<FileEntry>,
    },
    ContactCard {
        channels: Vec<ContactChannel>,
    },
    SkillChart {
        categories: Vec<SkillCategory>,
    },
    /// Rendered by the optional graph collaborator into `container_id`.
    SkillGraph {
        container_id: String,
        nodes: Vec<GraphNode>,
        edges: Vec<GraphEdge>,
    },
}

/// What a handler hands back for display: styled text or a structured
/// block. A handler with nothing to show returns an `Outcome` with an
/// empty renderable list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Renderable {
    Text(Line),
    Block(Block),
}

impl From<Line> for Renderable {
    fn from(line: Line) -> Self {
        Renderable::Text(line)
    }
}

impl From<Block> for Renderable {
    fn from(block: Block) -> Self {
        Renderable::Block(block)
    }
}

/// Where command output goes. The DOM sink appends `.output-line`
/// elements; the test sink records; the REPL prints.
pub trait OutputSink {
    fn append(&mut self, renderable: Renderable);
    fn clear(&mut self);
    fn scroll_to_end(&mut self);
}

/// Cosmetic theme application. Has no effect on command semantics beyond
/// what `theme` reports back.
pub trait ThemeSurface {
    fn set_theme(&self, theme: Theme);
}

/// Invoked by `exit`/`website` after their scheduled delay.
pub trait Navigator {
    fn navigate_to(&self, url: &str);
}

/// Optional force-graph collaborator for `skills --view=graph`. When the
/// session has none, the command falls back to the plain chart.
pub trait GraphRenderer {
    fn render(&self, nodes: &[GraphNode], edges: &[GraphEdge], container_id: &str);
}
