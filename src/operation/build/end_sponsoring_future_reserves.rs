use crate::operation::OperationBody;

pub struct EndSponsoringFutureReserves;

impl EndSponsoringFutureReserves {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for EndSponsoringFutureReserves {
    fn default() -> Self {
        Self::new()
    }
}

impl super::BuildOperation for EndSponsoringFutureReserves {
    fn build_body(self) -> OperationBody {
        OperationBody::EndSponsoringFutureReserves
    }
}
