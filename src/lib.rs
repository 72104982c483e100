#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_panics_doc
)]
//! Operation model and XDR encoding for the Stellar network.
//!
//! This crate models the individual ledger-mutating instructions a
//! transaction carries, bundles them into the ordered, length-bounded
//! lists the protocol requires, and reads/writes the canonical XDR
//! interchange format shared with the network. Transaction envelope
//! assembly, signing and submission live in the consuming tools.

pub mod account;
pub mod asset;
pub mod claim;
pub mod ledger;
pub mod meta;
pub mod operation;
pub mod xdr;

pub use account::{AccountId, MuxedAccount};
pub use meta::{OperationMeta, OperationMetaList, MAX_OPS_META_PER_TX};
pub use operation::{Operation, OperationBody, OperationList, ThresholdLevel, MAX_OPS_PER_TX};

/// One lumen, in stroops.
pub const ONE_XLM: i64 = 10_000_000;

pub type String32 = xdr::StringM<32>;
pub type String64 = xdr::StringM<64>;
pub type DataValue = xdr::BytesM<64>;
