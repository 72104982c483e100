use crate::operation::{BumpSequenceOp, OperationBody};
use crate::xdr::SequenceNumber;

pub struct BumpSequence(BumpSequenceOp);

impl BumpSequence {
    pub fn new(bump_to: impl Into<SequenceNumber>) -> Self {
        Self(BumpSequenceOp {
            bump_to: bump_to.into(),
        })
    }
}

impl super::BuildOperation for BumpSequence {
    fn build_body(self) -> OperationBody {
        OperationBody::BumpSequence(self.0)
    }
}
