//! Operations: the individual ledger-mutating instructions carried inside
//! a transaction, and the bounded list they travel in.

mod body;
pub mod build;

use serde::{Deserialize, Serialize};

pub use body::{
    AllowTrustOp, BeginSponsoringFutureReservesOp, BumpSequenceOp, ChangeTrustOp,
    ClaimClaimableBalanceOp, ClawbackClaimableBalanceOp, ClawbackOp, CreateAccountOp,
    CreateClaimableBalanceOp, CreatePassiveSellOfferOp, LiquidityPoolDepositOp,
    LiquidityPoolWithdrawOp, ManageBuyOfferOp, ManageDataOp, ManageSellOfferOp, OperationBody,
    OperationType, PathPaymentStrictReceiveOp, PathPaymentStrictSendOp, PaymentOp,
    RevokeSponsorshipOp, RevokeSponsorshipOpSigner, SetOptionsOp, SetTrustLineFlagsOp,
    MAX_CLAIMANTS, MAX_PATH_LENGTH,
};

use crate::account::MuxedAccount;
use crate::xdr::{xdr_struct, VecM};

use build::BuildOperation;

/// Maximum operations in one transaction. Shared with transaction assembly;
/// must match the network exactly.
pub const MAX_OPS_PER_TX: u32 = 100;

/// The ordered operation sequence a transaction carries. Order is execution
/// order on the ledger.
pub type OperationList = VecM<Operation, { MAX_OPS_PER_TX }>;

/// The authorization-weight class an operation falls in. Which class an
/// operation kind belongs to is fixed by the protocol; transaction assembly
/// uses it to decide which signers must approve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ThresholdLevel {
    Low,
    Medium,
    High,
}

/// A single ledger-mutating instruction: an optional source-account
/// override and the kind-specific body. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Operation {
    pub source_account: Option<MuxedAccount>,
    pub body: OperationBody,
}

xdr_struct!(Operation {
    source_account,
    body,
});

impl Operation {
    /// Builds an operation with no source override; the transaction's
    /// source account pays for and authorizes it.
    pub fn new(op: impl BuildOperation) -> Self {
        Self {
            source_account: None,
            body: op.build_body(),
        }
    }

    /// Builds an operation sourced from `source` instead of the
    /// transaction's source account.
    pub fn with_source(source: impl Into<MuxedAccount>, op: impl BuildOperation) -> Self {
        Self {
            source_account: Some(source.into()),
            body: op.build_body(),
        }
    }

    pub fn body(&self) -> &OperationBody {
        &self.body
    }

    /// The authorization category of this operation's kind.
    pub const fn threshold(&self) -> ThresholdLevel {
        self.body.threshold()
    }

    /// Whether the payload satisfies the value constraints the network will
    /// apply. Pure and idempotent.
    pub fn is_ready(&self) -> bool {
        self.body.is_ready()
    }
}
