use crate::claim::ClaimableBalanceId;
use crate::operation::{ClaimClaimableBalanceOp, OperationBody};

pub struct ClaimClaimableBalance(ClaimClaimableBalanceOp);

impl ClaimClaimableBalance {
    pub fn new(balance_id: ClaimableBalanceId) -> Self {
        Self(ClaimClaimableBalanceOp { balance_id })
    }
}

impl super::BuildOperation for ClaimClaimableBalance {
    fn build_body(self) -> OperationBody {
        OperationBody::ClaimClaimableBalance(self.0)
    }
}
