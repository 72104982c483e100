use std::io;

/// Errors surfaced while encoding or decoding XDR values.
///
/// All of these are deterministic: retrying the same input yields the same
/// failure, and a failure never leaves a partially mutated value behind.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("xdr value invalid")]
    Invalid,
    #[error("unknown union discriminant {0}")]
    UnknownDiscriminant(i32),
    #[error("declared length {len} exceeds maximum {max}")]
    LengthExceedsMax { len: u32, max: u32 },
    #[error("collection is at its maximum length {max}")]
    Overflow { max: u32 },
    #[error("non-zero padding byte")]
    NonZeroPadding,
    #[error("string is not valid utf-8")]
    InvalidUtf8(#[from] core::str::Utf8Error),
    #[error("invalid hex")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("invalid base64")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("depth limit exceeded")]
    DepthLimitExceeded,
    #[error("length limit exceeded")]
    LengthLimitExceeded,
    #[error(transparent)]
    Io(#[from] io::Error),
}
