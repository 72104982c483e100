use crate::account::AccountId;
use crate::operation::{CreateAccountOp, OperationBody};
use crate::ONE_XLM;

pub struct CreateAccount(CreateAccountOp);

impl CreateAccount {
    /// Creates a new `CreateAccountOp` builder with the given destination
    /// and starting balance. The starting balance defaults to 1 XLM.
    pub fn new(destination: impl Into<AccountId>, starting_balance: Option<i64>) -> Self {
        Self(CreateAccountOp {
            destination: destination.into(),
            starting_balance: starting_balance.unwrap_or(ONE_XLM),
        })
    }
}

impl super::BuildOperation for CreateAccount {
    fn build_body(self) -> OperationBody {
        OperationBody::CreateAccount(self.0)
    }
}
