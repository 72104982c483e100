use crate::account::MuxedAccount;
use crate::asset::Asset;
use crate::operation::{OperationBody, PaymentOp};

pub struct Payment(PaymentOp);

impl Payment {
    pub fn new(destination: impl Into<MuxedAccount>, asset: Asset, amount: i64) -> Self {
        Self(PaymentOp {
            destination: destination.into(),
            asset,
            amount,
        })
    }
}

impl super::BuildOperation for Payment {
    fn build_body(self) -> OperationBody {
        OperationBody::Payment(self.0)
    }
}
