use thiserror::Error;

/// Errors produced while drawing a render tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The tree or target width cannot be drawn as requested.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl RenderError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        RenderError::InvalidArgument(msg.into())
    }
}
