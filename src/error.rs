use thiserror::Error;

/// Unified error type for gitflow-release operations
#[derive(Error, Debug)]
pub enum GitFlowError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Project error: {0}")]
    Project(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gitflow-release
pub type Result<T> = std::result::Result<T, GitFlowError>;

impl GitFlowError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitFlowError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        GitFlowError::Version(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        GitFlowError::Branch(msg.into())
    }

    /// Create a project error with context
    pub fn project(msg: impl Into<String>) -> Self {
        GitFlowError::Project(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        GitFlowError::Remote(msg.into())
    }

    /// Create a prompt error with context
    pub fn prompt(msg: impl Into<String>) -> Self {
        GitFlowError::Prompt(msg.into())
    }

    /// Create a precondition error with context
    pub fn precondition(msg: impl Into<String>) -> Self {
        GitFlowError::Precondition(msg.into())
    }
}
