use crate::asset::Price;
use crate::operation::{LiquidityPoolDepositOp, OperationBody};
use crate::xdr::PoolId;

pub struct LiquidityPoolDeposit(LiquidityPoolDepositOp);

impl LiquidityPoolDeposit {
    pub fn new(
        liquidity_pool_id: PoolId,
        max_amount_a: i64,
        max_amount_b: i64,
        min_price: Price,
        max_price: Price,
    ) -> Self {
        Self(LiquidityPoolDepositOp {
            liquidity_pool_id,
            max_amount_a,
            max_amount_b,
            min_price,
            max_price,
        })
    }
}

impl super::BuildOperation for LiquidityPoolDeposit {
    fn build_body(self) -> OperationBody {
        OperationBody::LiquidityPoolDeposit(self.0)
    }
}
