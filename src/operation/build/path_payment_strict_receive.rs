use crate::account::MuxedAccount;
use crate::asset::Asset;
use crate::operation::{OperationBody, PathPaymentStrictReceiveOp, MAX_PATH_LENGTH};
use crate::xdr::{self, VecM};

pub struct PathPaymentStrictReceive(PathPaymentStrictReceiveOp);

impl PathPaymentStrictReceive {
    pub fn new(
        destination: impl Into<MuxedAccount>,
        send_asset: Asset,
        send_max: i64,
        dest_asset: Asset,
        dest_amount: i64,
    ) -> Self {
        Self(PathPaymentStrictReceiveOp {
            send_asset,
            send_max,
            destination: destination.into(),
            dest_asset,
            dest_amount,
            path: VecM::default(),
        })
    }

    #[must_use]
    pub fn set_path(mut self, path: VecM<Asset, { MAX_PATH_LENGTH }>) -> Self {
        self.0.path = path;
        self
    }

    /// Appends one hop; at most [`MAX_PATH_LENGTH`] hops fit.
    pub fn add_path_asset(mut self, asset: Asset) -> Result<Self, xdr::Error> {
        self.0.path.push(asset)?;
        Ok(self)
    }
}

impl super::BuildOperation for PathPaymentStrictReceive {
    fn build_body(self) -> OperationBody {
        OperationBody::PathPaymentStrictReceive(self.0)
    }
}
