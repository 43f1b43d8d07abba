use thiserror::Error;

/// Recoverable failures reported while interpreting an escape sequence.
///
/// None of these are fatal: the caller is expected to replay
/// [`Interpreter::take_buffered_literal`](crate::Interpreter::take_buffered_literal)
/// as plain text and then call [`Interpreter::reset`](crate::Interpreter::reset).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// `ESC` was followed by something other than `[`.
    #[error("not a CSI escape sequence")]
    NotCsiSequence,

    /// Unsupported final byte, non-numeric parameter or unsupported mode.
    #[error("CSI escape sequence parsing error")]
    CsiParseError,

    /// Too many parameters, or a single parameter grew too long.
    #[error("CSI escape sequence is too long")]
    SequenceTooLong,
}

pub type Result<T> = std::result::Result<T, Error>;
