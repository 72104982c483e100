//! Builders for each operation kind. Each builder validates its inputs at
//! construction and converts into the wire body via [`BuildOperation`].

mod account_merge;
mod allow_trust;
mod begin_sponsoring_future_reserves;
mod bump_sequence;
mod change_trust;
mod claim_claimable_balance;
mod clawback;
mod clawback_claimable_balance;
mod create_account;
mod create_claimable_balance;
mod create_passive_sell_offer;
mod end_sponsoring_future_reserves;
mod inflation;
mod liquidity_pool_deposit;
mod liquidity_pool_withdraw;
mod manage_buy_offer;
mod manage_data;
mod manage_sell_offer;
mod path_payment_strict_receive;
mod path_payment_strict_send;
mod payment;
mod revoke_sponsorship;
mod set_options;
mod set_trustline_flags;

pub use account_merge::AccountMerge;
pub use allow_trust::AllowTrust;
pub use begin_sponsoring_future_reserves::BeginSponsoringFutureReserves;
pub use bump_sequence::BumpSequence;
pub use change_trust::ChangeTrust;
pub use claim_claimable_balance::ClaimClaimableBalance;
pub use clawback::Clawback;
pub use clawback_claimable_balance::ClawbackClaimableBalance;
pub use create_account::CreateAccount;
pub use create_claimable_balance::CreateClaimableBalance;
pub use create_passive_sell_offer::CreatePassiveSellOffer;
pub use end_sponsoring_future_reserves::EndSponsoringFutureReserves;
pub use inflation::Inflation;
pub use liquidity_pool_deposit::LiquidityPoolDeposit;
pub use liquidity_pool_withdraw::LiquidityPoolWithdraw;
pub use manage_buy_offer::ManageBuyOffer;
pub use manage_data::ManageData;
pub use manage_sell_offer::ManageSellOffer;
pub use path_payment_strict_receive::PathPaymentStrictReceive;
pub use path_payment_strict_send::PathPaymentStrictSend;
pub use payment::Payment;
pub use revoke_sponsorship::RevokeSponsorship;
pub use set_options::SetOptions;
pub use set_trustline_flags::SetTrustLineFlags;

use super::OperationBody;

/// Conversion of a kind-specific builder into the wire body it produces.
pub trait BuildOperation {
    fn build_body(self) -> OperationBody;
}
