use thiserror::Error;

/// Reasons the controller rejects a round of operator input.
///
/// These surface verbatim as [`Transition::Reject`](crate::command::Transition)
/// messages; nothing here ever aborts the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unrecognized command")]
    Unrecognized,
    #[error("authentication failed")]
    AuthenticationFailed,
    #[error("no login in progress")]
    NotAtLogin,
}
