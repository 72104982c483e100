use crate::account::{AccountFlags, AccountId, Signer};
use crate::operation::{OperationBody, SetOptionsOp};
use crate::String32;

pub struct SetOptions(SetOptionsOp);

impl Default for SetOptions {
    fn default() -> Self {
        Self(SetOptionsOp {
            inflation_dest: None,
            clear_flags: None,
            set_flags: None,
            master_weight: None,
            low_threshold: None,
            med_threshold: None,
            high_threshold: None,
            home_domain: None,
            signer: None,
        })
    }
}

impl SetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set_inflation_dest(mut self, inflation_dest: impl Into<AccountId>) -> Self {
        self.0.inflation_dest = Some(inflation_dest.into());
        self
    }

    fn set_flag(mut self, flag: AccountFlags) -> Self {
        let flags = self.0.set_flags.unwrap_or(0);
        self.0.set_flags = Some(flags | flag as u32);
        self
    }

    fn clear_flag(mut self, flag: AccountFlags) -> Self {
        let flags = self.0.clear_flags.unwrap_or(0);
        self.0.clear_flags = Some(flags | flag as u32);
        self
    }

    #[must_use]
    pub fn set_required_flag(self) -> Self {
        self.set_flag(AccountFlags::RequiredFlag)
    }

    #[must_use]
    pub fn set_revocable_flag(self) -> Self {
        self.set_flag(AccountFlags::RevocableFlag)
    }

    #[must_use]
    pub fn set_immutable_flag(self) -> Self {
        self.set_flag(AccountFlags::ImmutableFlag)
    }

    #[must_use]
    pub fn set_clawback_enabled_flag(self) -> Self {
        self.set_flag(AccountFlags::ClawbackEnabledFlag)
    }

    #[must_use]
    pub fn clear_required_flag(self) -> Self {
        self.clear_flag(AccountFlags::RequiredFlag)
    }

    #[must_use]
    pub fn clear_revocable_flag(self) -> Self {
        self.clear_flag(AccountFlags::RevocableFlag)
    }

    #[must_use]
    pub fn clear_immutable_flag(self) -> Self {
        self.clear_flag(AccountFlags::ImmutableFlag)
    }

    #[must_use]
    pub fn clear_clawback_enabled_flag(self) -> Self {
        self.clear_flag(AccountFlags::ClawbackEnabledFlag)
    }

    #[must_use]
    pub fn set_master_weight(mut self, weight: u32) -> Self {
        self.0.master_weight = Some(weight);
        self
    }

    #[must_use]
    pub fn set_low_threshold(mut self, threshold: u32) -> Self {
        self.0.low_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn set_med_threshold(mut self, threshold: u32) -> Self {
        self.0.med_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn set_high_threshold(mut self, threshold: u32) -> Self {
        self.0.high_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn set_home_domain(mut self, home_domain: String32) -> Self {
        self.0.home_domain = Some(home_domain);
        self
    }

    /// Adds or updates a signer; weight 0 removes it.
    #[must_use]
    pub fn set_signer(mut self, signer: Signer) -> Self {
        self.0.signer = Some(signer);
        self
    }
}

impl super::BuildOperation for SetOptions {
    fn build_body(self) -> OperationBody {
        OperationBody::SetOptions(self.0)
    }
}
