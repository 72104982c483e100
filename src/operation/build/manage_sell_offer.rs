use crate::asset::{Asset, Price};
use crate::operation::{ManageSellOfferOp, OperationBody};

pub struct ManageSellOffer(ManageSellOfferOp);

impl ManageSellOffer {
    /// Creates a new offer. Offer id 0 creates; a non-zero id updates or,
    /// with amount 0, deletes that offer.
    pub fn new(selling: Asset, buying: Asset, amount: i64, price: Price) -> Self {
        Self(ManageSellOfferOp {
            selling,
            buying,
            amount,
            price,
            offer_id: 0,
        })
    }

    #[must_use]
    pub fn set_offer_id(mut self, offer_id: i64) -> Self {
        self.0.offer_id = offer_id;
        self
    }
}

impl super::BuildOperation for ManageSellOffer {
    fn build_body(self) -> OperationBody {
        OperationBody::ManageSellOffer(self.0)
    }
}
