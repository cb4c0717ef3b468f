use thiserror::Error;

/// Everything that can go wrong during one command invocation.
///
/// Errors never abort the session - the dispatch boundary in
/// `session.rs` turns each variant into user-visible output and moves on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("command not found: {0}")]
    UnknownCommand(String),

    #[error("cat: {0}: No such file or directory")]
    FileNotFound(String),

    #[error("{0}")]
    InvalidArgument(String),

    // catch-all for unexpected failures inside a handler body
    #[error("Error executing command: {0}")]
    Handler(String),
}

impl ShellError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ShellError::InvalidArgument(msg.into())
    }
}
