// Error taxonomy shared by the compiler and the binary verifier.
//
// All errors are terminal for the call that produced them: compilation
// and verification are all-or-nothing, with no partial output.

use thiserror::Error;

use super::varint::VarIntError;

/// Errors produced when compiling or verifying a multiaddr.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MultiaddrError {
    /// A `/`-segment does not match any protocol descriptor.
    #[error("unknown protocol: {0}")]
    UnknownProtocol(String),

    /// A required argument is missing or a sub-field failed to parse.
    #[error("malformed address: {0}")]
    MalformedAddress(String),

    /// A varint in binary input is truncated or exceeds 64 bits.
    #[error("invalid varint in multiaddr bytes")]
    InvalidVarint,

    /// A decoded protocol code has no descriptor.
    #[error("unknown protocol code: {0}")]
    UnknownProtocolCode(u64),

    /// A payload extends past the end of the binary input.
    #[error("truncated multiaddr: payload extends past end of input")]
    Truncated,
}

impl From<VarIntError> for MultiaddrError {
    fn from(_: VarIntError) -> Self {
        MultiaddrError::InvalidVarint
    }
}
