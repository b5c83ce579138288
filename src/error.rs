//! Error types for the LDPC decoder's length-checked entry points.

use snafu::Snafu;

/// Errors returned by the public decoding API when a caller-supplied slice
/// has the wrong length. Never constructed mid-algorithm; `check` and
/// `crc14` remain infallible and assert on misuse instead, since they are
/// internal collaborator contracts rather than public validation boundaries.
#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum LdpcError {
    #[snafu(display("LLR slice has length {actual}, expected {expected}"))]
    WrongLlrLength { expected: usize, actual: usize },

    #[snafu(display("AP mask has length {actual}, expected {expected}"))]
    WrongMaskLength { expected: usize, actual: usize },

    #[snafu(display("hard-decision codeword has length {actual}, expected {expected}"))]
    WrongMessageLength { expected: usize, actual: usize },
}
