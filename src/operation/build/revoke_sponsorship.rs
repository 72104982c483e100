use crate::account::{AccountId, SignerKey};
use crate::ledger::LedgerKey;
use crate::operation::{OperationBody, RevokeSponsorshipOp, RevokeSponsorshipOpSigner};

pub struct RevokeSponsorship(RevokeSponsorshipOp);

impl RevokeSponsorship {
    /// Revokes the sponsorship of the entry the key names.
    pub fn ledger_entry(key: LedgerKey) -> Self {
        Self(RevokeSponsorshipOp::LedgerEntry(key))
    }

    /// Revokes the sponsorship of one signer on the given account.
    pub fn signer(account_id: impl Into<AccountId>, signer_key: SignerKey) -> Self {
        Self(RevokeSponsorshipOp::Signer(RevokeSponsorshipOpSigner {
            account_id: account_id.into(),
            signer_key,
        }))
    }
}

impl super::BuildOperation for RevokeSponsorship {
    fn build_body(self) -> OperationBody {
        OperationBody::RevokeSponsorship(self.0)
    }
}
