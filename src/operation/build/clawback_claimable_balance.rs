use crate::claim::ClaimableBalanceId;
use crate::operation::{ClawbackClaimableBalanceOp, OperationBody};

pub struct ClawbackClaimableBalance(ClawbackClaimableBalanceOp);

impl ClawbackClaimableBalance {
    pub fn new(balance_id: ClaimableBalanceId) -> Self {
        Self(ClawbackClaimableBalanceOp { balance_id })
    }
}

impl super::BuildOperation for ClawbackClaimableBalance {
    fn build_body(self) -> OperationBody {
        OperationBody::ClawbackClaimableBalance(self.0)
    }
}
