use crate::operation::{LiquidityPoolWithdrawOp, OperationBody};
use crate::xdr::PoolId;

pub struct LiquidityPoolWithdraw(LiquidityPoolWithdrawOp);

impl LiquidityPoolWithdraw {
    pub fn new(
        liquidity_pool_id: PoolId,
        amount: i64,
        min_amount_a: i64,
        min_amount_b: i64,
    ) -> Self {
        Self(LiquidityPoolWithdrawOp {
            liquidity_pool_id,
            amount,
            min_amount_a,
            min_amount_b,
        })
    }
}

impl super::BuildOperation for LiquidityPoolWithdraw {
    fn build_body(self) -> OperationBody {
        OperationBody::LiquidityPoolWithdraw(self.0)
    }
}
