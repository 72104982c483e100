use crate::asset::{Asset, Price};
use crate::operation::{ManageBuyOfferOp, OperationBody};

pub struct ManageBuyOffer(ManageBuyOfferOp);

impl ManageBuyOffer {
    /// Creates a new offer. Offer id 0 creates; a non-zero id updates or,
    /// with amount 0, deletes that offer.
    pub fn new(selling: Asset, buying: Asset, buy_amount: i64, price: Price) -> Self {
        Self(ManageBuyOfferOp {
            selling,
            buying,
            buy_amount,
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

impl super::BuildOperation for ManageBuyOffer {
    fn build_body(self) -> OperationBody {
        OperationBody::ManageBuyOffer(self.0)
    }
}
