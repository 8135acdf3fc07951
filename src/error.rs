//! Error type shared by the sorting entry points and [`GapSequence`](crate::core::GapSequence) parsing.

use thiserror::Error;

/// Errors reported by `gapsort`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A sort was requested without an input slice.
    #[error("invalid argument: input sequence is absent")]
    MissingInput,

    /// A gap sequence name did not match any known sequence.
    #[error("unknown gap sequence `{0}` (expected one of: shell, knuth, sedgewick)")]
    UnknownGapSequence(String),
}

pub type Result<T> = std::result::Result<T, Error>;
