use crate::asset::Asset;
use crate::claim::Claimant;
use crate::operation::{CreateClaimableBalanceOp, OperationBody, MAX_CLAIMANTS};
use crate::xdr::{self, VecM};

pub struct CreateClaimableBalance(CreateClaimableBalanceOp);

impl CreateClaimableBalance {
    pub fn new(asset: Asset, amount: i64) -> Self {
        Self(CreateClaimableBalanceOp {
            asset,
            amount,
            claimants: VecM::default(),
        })
    }

    /// Appends a claimant; at most [`MAX_CLAIMANTS`] fit on one balance.
    pub fn add_claimant(mut self, claimant: Claimant) -> Result<Self, xdr::Error> {
        self.0.claimants.push(claimant)?;
        Ok(self)
    }

    #[must_use]
    pub fn set_claimants(mut self, claimants: VecM<Claimant, { MAX_CLAIMANTS }>) -> Self {
        self.0.claimants = claimants;
        self
    }
}

impl super::BuildOperation for CreateClaimableBalance {
    fn build_body(self) -> OperationBody {
        OperationBody::CreateClaimableBalance(self.0)
    }
}
