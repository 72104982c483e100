use crate::account::MuxedAccount;
use crate::asset::Asset;
use crate::operation::{ClawbackOp, OperationBody};

pub struct Clawback(ClawbackOp);

impl Clawback {
    pub fn new(asset: Asset, from: impl Into<MuxedAccount>, amount: i64) -> Self {
        Self(ClawbackOp {
            asset,
            from: from.into(),
            amount,
        })
    }
}

impl super::BuildOperation for Clawback {
    fn build_body(self) -> OperationBody {
        OperationBody::Clawback(self.0)
    }
}
