use crate::account::MuxedAccount;
use crate::asset::Asset;
use crate::operation::{OperationBody, PathPaymentStrictSendOp, MAX_PATH_LENGTH};
use crate::xdr::{self, VecM};

pub struct PathPaymentStrictSend(PathPaymentStrictSendOp);

impl PathPaymentStrictSend {
    pub fn new(
        destination: impl Into<MuxedAccount>,
        send_asset: Asset,
        send_amount: i64,
        dest_asset: Asset,
        dest_min: i64,
    ) -> Self {
        Self(PathPaymentStrictSendOp {
            send_asset,
            send_amount,
            destination: destination.into(),
            dest_asset,
            dest_min,
            path: VecM::default(),
        })
    }

    #[must_use]
    pub fn set_path(mut self, path: VecM<Asset, { MAX_PATH_LENGTH }>) -> Self {
        self.0.path = path;
        self
    }

    pub fn add_path_asset(mut self, asset: Asset) -> Result<Self, xdr::Error> {
        self.0.path.push(asset)?;
        Ok(self)
    }
}

impl super::BuildOperation for PathPaymentStrictSend {
    fn build_body(self) -> OperationBody {
        OperationBody::PathPaymentStrictSend(self.0)
    }
}
