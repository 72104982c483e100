use crate::account::MuxedAccount;
use crate::operation::OperationBody;

pub struct AccountMerge(MuxedAccount);

impl AccountMerge {
    pub fn new(account: impl Into<MuxedAccount>) -> Self {
        Self(account.into())
    }
}

impl super::BuildOperation for AccountMerge {
    fn build_body(self) -> OperationBody {
        OperationBody::AccountMerge(self.0)
    }
}
