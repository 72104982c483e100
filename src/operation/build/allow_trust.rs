use crate::account::AccountId;
use crate::asset::{AssetCode, TrustLineFlags};
use crate::operation::{AllowTrustOp, OperationBody};

pub struct AllowTrust(AllowTrustOp);

impl AllowTrust {
    pub fn new(trustor: impl Into<AccountId>, asset: AssetCode) -> Self {
        Self(AllowTrustOp {
            trustor: trustor.into(),
            asset,
            authorize: 0,
        })
    }

    fn set_authorize(mut self, trust_flag: TrustLineFlags) -> Self {
        self.0.authorize |= trust_flag as u32;
        self
    }

    #[must_use]
    pub fn set_authorized(self) -> Self {
        self.set_authorize(TrustLineFlags::AuthorizedFlag)
    }

    #[must_use]
    pub fn set_authorized_to_maintain_liabilities(self) -> Self {
        self.set_authorize(TrustLineFlags::AuthorizedToMaintainLiabilitiesFlag)
    }

    #[must_use]
    pub fn set_trustline_clawback_enabled(self) -> Self {
        self.set_authorize(TrustLineFlags::TrustlineClawbackEnabledFlag)
    }
}

impl super::BuildOperation for AllowTrust {
    fn build_body(self) -> OperationBody {
        OperationBody::AllowTrust(self.0)
    }
}
