use crate::account::AccountId;
use crate::operation::{BeginSponsoringFutureReservesOp, OperationBody};

pub struct BeginSponsoringFutureReserves(BeginSponsoringFutureReservesOp);

impl BeginSponsoringFutureReserves {
    pub fn new(sponsored_id: impl Into<AccountId>) -> Self {
        Self(BeginSponsoringFutureReservesOp {
            sponsored_id: sponsored_id.into(),
        })
    }
}

impl super::BuildOperation for BeginSponsoringFutureReserves {
    fn build_body(self) -> OperationBody {
        OperationBody::BeginSponsoringFutureReserves(self.0)
    }
}
