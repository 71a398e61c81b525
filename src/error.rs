use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CodecError {
    /// The byte sequence handed to the codec does not have exactly the
    /// byte width of the integer type being decoded (or encoded into).
    #[error("byte length mismatch: expected {expected} bytes, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

pub type Result<T, E = CodecError> = core::result::Result<T, E>;
