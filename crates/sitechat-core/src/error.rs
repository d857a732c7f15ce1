//! Errors raised for malformed caller input.
//!
//! Failures of collaborators (store, search, generation) never surface as
//! errors; they are absorbed into empty results or answer text. Only the
//! variants below propagate to the caller.

/// Rejected caller input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("query must not be empty")]
    EmptyQuery,

    #[error("unknown history role '{role}' (expected user or bot)")]
    UnknownRole { role: String },
}
