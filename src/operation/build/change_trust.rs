use crate::asset::ChangeTrustAsset;
use crate::operation::{ChangeTrustOp, OperationBody};

pub struct ChangeTrust(ChangeTrustOp);

impl ChangeTrust {
    /// Creates a new `ChangeTrustOp` builder with the given asset.
    /// if limit is set to 0, deletes the trust line
    pub fn new(line: ChangeTrustAsset, limit: i64) -> Self {
        Self(ChangeTrustOp { line, limit })
    }
}

impl super::BuildOperation for ChangeTrust {
    fn build_body(self) -> OperationBody {
        OperationBody::ChangeTrust(self.0)
    }
}
