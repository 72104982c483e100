//! Reading and writing of the XDR wire format used by the Stellar network:
//! big-endian words, 4-byte alignment, count-prefixed bounded sequences,
//! discriminant-prefixed unions, and presence-flagged optionals.
//!
//! Decoding is admission-controlled twice over: every bounded container
//! checks its declared length against its type-level maximum before reading
//! a single element, and the whole read passes through the [`Limits`]
//! depth/byte budgets so a hostile stream cannot exhaust the stack or
//! memory through nesting alone.

mod codec;
mod error;
mod limits;
mod scalar;
mod str_m;
mod vec_m;

pub use codec::{ReadXdr, WriteXdr};
pub(crate) use codec::xdr_struct;
pub use error::Error;
pub use limits::{Limited, Limits, DEFAULT_DEPTH_LIMIT, DEFAULT_LEN_LIMIT};
pub use scalar::{ExtensionPoint, Hash, PoolId, SequenceNumber, TimePoint, Uint256};
pub use str_m::{BytesM, StringM};
pub use vec_m::VecM;

pub type Result<T> = core::result::Result<T, Error>;
