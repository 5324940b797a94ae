//! Error types returned by the decoder.

use std::io;
use thiserror::Error;

/// Structural problems found while decoding a splice buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("not a recognized pattern file")]
    NotSplice,

    #[error("malformed version field")]
    MalformedVersion,

    /// A field did not fit in the buffer (or past the declared payload).
    /// `offset` is where the field starts.
    #[error("truncated record")]
    Truncated { offset: usize },
}

/// Possible errors when loading a pattern from storage.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Format(#[from] FormatError),
}
