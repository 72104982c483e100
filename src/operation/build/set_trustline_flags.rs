use crate::account::AccountId;
use crate::asset::{Asset, TrustLineFlags};
use crate::operation::{OperationBody, SetTrustLineFlagsOp};

pub struct SetTrustLineFlags(SetTrustLineFlagsOp);

impl SetTrustLineFlags {
    pub fn new(trustor: impl Into<AccountId>, asset: Asset) -> Self {
        Self(SetTrustLineFlagsOp {
            trustor: trustor.into(),
            asset,
            clear_flags: 0,
            set_flags: 0,
        })
    }

    fn set_clear_flags(mut self, trust_flag: TrustLineFlags) -> Self {
        self.0.clear_flags |= trust_flag as u32;
        self
    }

    fn set_set_flags(mut self, trust_flag: TrustLineFlags) -> Self {
        self.0.set_flags |= trust_flag as u32;
        self
    }

    #[must_use]
    pub fn set_authorized(self) -> Self {
        self.set_set_flags(TrustLineFlags::AuthorizedFlag)
    }

    #[must_use]
    pub fn set_authorized_to_maintain_liabilities(self) -> Self {
        self.set_set_flags(TrustLineFlags::AuthorizedToMaintainLiabilitiesFlag)
    }

    #[must_use]
    pub fn set_trustline_clawback_enabled(self) -> Self {
        self.set_set_flags(TrustLineFlags::TrustlineClawbackEnabledFlag)
    }

    #[must_use]
    pub fn clear_authorized(self) -> Self {
        self.set_clear_flags(TrustLineFlags::AuthorizedFlag)
    }

    #[must_use]
    pub fn clear_authorized_to_maintain_liabilities(self) -> Self {
        self.set_clear_flags(TrustLineFlags::AuthorizedToMaintainLiabilitiesFlag)
    }

    #[must_use]
    pub fn clear_trustline_clawback_enabled(self) -> Self {
        self.set_clear_flags(TrustLineFlags::TrustlineClawbackEnabledFlag)
    }
}

impl super::BuildOperation for SetTrustLineFlags {
    fn build_body(self) -> OperationBody {
        OperationBody::SetTrustLineFlags(self.0)
    }
}
