use crate::operation::OperationBody;

pub struct Inflation;

impl Inflation {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for Inflation {
    fn default() -> Self {
        Self::new()
    }
}

impl super::BuildOperation for Inflation {
    fn build_body(self) -> OperationBody {
        OperationBody::Inflation
    }
}
