use crate::asset::{Asset, Price};
use crate::operation::{CreatePassiveSellOfferOp, OperationBody};

pub struct CreatePassiveSellOffer(CreatePassiveSellOfferOp);

impl CreatePassiveSellOffer {
    pub fn new(selling: Asset, buying: Asset, amount: i64, price: Price) -> Self {
        Self(CreatePassiveSellOfferOp {
            selling,
            buying,
            amount,
            price,
        })
    }
}

impl super::BuildOperation for CreatePassiveSellOffer {
    fn build_body(self) -> OperationBody {
        OperationBody::CreatePassiveSellOffer(self.0)
    }
}
