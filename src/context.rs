use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::command::CommandRegistry;
use crate::history::HistoryBuffer;
use crate::theme::Theme;
use crate::vfs::VirtualFileSystem;

/// Mutable per-session state, owned by the `ShellSession` and passed by
/// `&mut` into every handler. One instance per page load; nothing here is
/// global or shared.
pub struct SessionContext {
    pub vfs: VirtualFileSystem,
    pub theme: Theme,
    pub history: HistoryBuffer,
    // decorative identity - there is no real user model
    pub user: String,
    pub host: String,
    pub path: String,
    pub started: DateTime<Local>,
    /// Whether the optional graph collaborator is present; set once by the
    /// session at construction.
    pub graph_available: bool,
    // handed out by the session so `help` can read the listing
    pub registry: Option<Arc<CommandRegistry>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::with_vfs(VirtualFileSystem::portfolio())
    }

    pub fn with_vfs(vfs: VirtualFileSystem) -> Self {
        Self {
            vfs,
            theme: Theme::default(),
            history: HistoryBuffer::new(),
            user: "guest".to_string(),
            host: "fedora".to_string(),
            path: "~".to_string(),
            started: Local::now(),
            graph_available: false,
            registry: None,
        }
    }

    /// "guest@fedora:~$ " - echoed in front of every submitted line.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$ ", self.user, self.host, self.path)
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Local::now() - self.started).num_seconds().max(0)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
