//! The operation body union: one variant per operation kind, each carrying
//! its kind-specific payload (or nothing). Adding a kind means adding a
//! variant here; the exhaustive matches below make the compiler walk every
//! consumer (codec, threshold table, readiness check) in lockstep.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use super::ThresholdLevel;
use crate::account::{AccountId, MuxedAccount, Signer, SignerKey};
use crate::asset::{Asset, AssetCode, ChangeTrustAsset, Price};
use crate::claim::{ClaimableBalanceId, Claimant};
use crate::ledger::LedgerKey;
use crate::xdr::{self, xdr_struct, Limited, PoolId, ReadXdr, SequenceNumber, VecM, WriteXdr};
use crate::{DataValue, String32, String64};

/// Maximum intermediate hops in a path payment.
pub const MAX_PATH_LENGTH: u32 = 5;

/// Maximum claimants on one claimable balance.
pub const MAX_CLAIMANTS: u32 = 10;

/// The kind tag of an operation, as it appears on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum OperationType {
    CreateAccount = 0,
    Payment = 1,
    PathPaymentStrictReceive = 2,
    ManageSellOffer = 3,
    CreatePassiveSellOffer = 4,
    SetOptions = 5,
    ChangeTrust = 6,
    AllowTrust = 7,
    AccountMerge = 8,
    Inflation = 9,
    ManageData = 10,
    BumpSequence = 11,
    ManageBuyOffer = 12,
    PathPaymentStrictSend = 13,
    CreateClaimableBalance = 14,
    ClaimClaimableBalance = 15,
    BeginSponsoringFutureReserves = 16,
    EndSponsoringFutureReserves = 17,
    RevokeSponsorship = 18,
    Clawback = 19,
    ClawbackClaimableBalance = 20,
    SetTrustLineFlags = 21,
    LiquidityPoolDeposit = 22,
    LiquidityPoolWithdraw = 23,
}

impl OperationType {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateAccount => "create_account",
            Self::Payment => "payment",
            Self::PathPaymentStrictReceive => "path_payment_strict_receive",
            Self::ManageSellOffer => "manage_sell_offer",
            Self::CreatePassiveSellOffer => "create_passive_sell_offer",
            Self::SetOptions => "set_options",
            Self::ChangeTrust => "change_trust",
            Self::AllowTrust => "allow_trust",
            Self::AccountMerge => "account_merge",
            Self::Inflation => "inflation",
            Self::ManageData => "manage_data",
            Self::BumpSequence => "bump_sequence",
            Self::ManageBuyOffer => "manage_buy_offer",
            Self::PathPaymentStrictSend => "path_payment_strict_send",
            Self::CreateClaimableBalance => "create_claimable_balance",
            Self::ClaimClaimableBalance => "claim_claimable_balance",
            Self::BeginSponsoringFutureReserves => "begin_sponsoring_future_reserves",
            Self::EndSponsoringFutureReserves => "end_sponsoring_future_reserves",
            Self::RevokeSponsorship => "revoke_sponsorship",
            Self::Clawback => "clawback",
            Self::ClawbackClaimableBalance => "clawback_claimable_balance",
            Self::SetTrustLineFlags => "set_trustline_flags",
            Self::LiquidityPoolDeposit => "liquidity_pool_deposit",
            Self::LiquidityPoolWithdraw => "liquidity_pool_withdraw",
        }
    }
}

impl TryFrom<i32> for OperationType {
    type Error = xdr::Error;

    fn try_from(d: i32) -> xdr::Result<Self> {
        match d {
            0 => Ok(Self::CreateAccount),
            1 => Ok(Self::Payment),
            2 => Ok(Self::PathPaymentStrictReceive),
            3 => Ok(Self::ManageSellOffer),
            4 => Ok(Self::CreatePassiveSellOffer),
            5 => Ok(Self::SetOptions),
            6 => Ok(Self::ChangeTrust),
            7 => Ok(Self::AllowTrust),
            8 => Ok(Self::AccountMerge),
            9 => Ok(Self::Inflation),
            10 => Ok(Self::ManageData),
            11 => Ok(Self::BumpSequence),
            12 => Ok(Self::ManageBuyOffer),
            13 => Ok(Self::PathPaymentStrictSend),
            14 => Ok(Self::CreateClaimableBalance),
            15 => Ok(Self::ClaimClaimableBalance),
            16 => Ok(Self::BeginSponsoringFutureReserves),
            17 => Ok(Self::EndSponsoringFutureReserves),
            18 => Ok(Self::RevokeSponsorship),
            19 => Ok(Self::Clawback),
            20 => Ok(Self::ClawbackClaimableBalance),
            21 => Ok(Self::SetTrustLineFlags),
            22 => Ok(Self::LiquidityPoolDeposit),
            23 => Ok(Self::LiquidityPoolWithdraw),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        }
    }
}

impl ReadXdr for OperationType {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        i32::read_xdr(r)?.try_into()
    }
}

impl WriteXdr for OperationType {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        (*self as i32).write_xdr(w)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CreateAccountOp {
    pub destination: AccountId,
    pub starting_balance: i64,
}

xdr_struct!(CreateAccountOp {
    destination,
    starting_balance,
});

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PaymentOp {
    pub destination: MuxedAccount,
    pub asset: Asset,
    pub amount: i64,
}

xdr_struct!(PaymentOp {
    destination,
    asset,
    amount,
});

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PathPaymentStrictReceiveOp {
    pub send_asset: Asset,
    pub send_max: i64,
    pub destination: MuxedAccount,
    pub dest_asset: Asset,
    pub dest_amount: i64,
    pub path: VecM<Asset, { MAX_PATH_LENGTH }>,
}

xdr_struct!(PathPaymentStrictReceiveOp {
    send_asset,
    send_max,
    destination,
    dest_asset,
    dest_amount,
    path,
});

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PathPaymentStrictSendOp {
    pub send_asset: Asset,
    pub send_amount: i64,
    pub destination: MuxedAccount,
    pub dest_asset: Asset,
    pub dest_min: i64,
    pub path: VecM<Asset, { MAX_PATH_LENGTH }>,
}

xdr_struct!(PathPaymentStrictSendOp {
    send_asset,
    send_amount,
    destination,
    dest_asset,
    dest_min,
    path,
});

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ManageSellOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
    pub offer_id: i64,
}

xdr_struct!(ManageSellOfferOp {
    selling,
    buying,
    amount,
    price,
    offer_id,
});

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ManageBuyOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub buy_amount: i64,
    pub price: Price,
    pub offer_id: i64,
}

xdr_struct!(ManageBuyOfferOp {
    selling,
    buying,
    buy_amount,
    price,
    offer_id,
});

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CreatePassiveSellOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
}

xdr_struct!(CreatePassiveSellOfferOp {
    selling,
    buying,
    amount,
    price,
});

#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SetOptionsOp {
    pub inflation_dest: Option<AccountId>,
    pub clear_flags: Option<u32>,
    pub set_flags: Option<u32>,
    pub master_weight: Option<u32>,
    pub low_threshold: Option<u32>,
    pub med_threshold: Option<u32>,
    pub high_threshold: Option<u32>,
    pub home_domain: Option<String32>,
    pub signer: Option<Signer>,
}

xdr_struct!(SetOptionsOp {
    inflation_dest,
    clear_flags,
    set_flags,
    master_weight,
    low_threshold,
    med_threshold,
    high_threshold,
    home_domain,
    signer,
});

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChangeTrustOp {
    pub line: ChangeTrustAsset,
    pub limit: i64,
}

xdr_struct!(ChangeTrustOp { line, limit });

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AllowTrustOp {
    pub trustor: AccountId,
    pub asset: AssetCode,
    pub authorize: u32,
}

xdr_struct!(AllowTrustOp {
    trustor,
    asset,
    authorize,
});

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ManageDataOp {
    pub data_name: String64,
    pub data_value: Option<DataValue>,
}

xdr_struct!(ManageDataOp {
    data_name,
    data_value,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BumpSequenceOp {
    pub bump_to: SequenceNumber,
}

xdr_struct!(BumpSequenceOp { bump_to });

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CreateClaimableBalanceOp {
    pub asset: Asset,
    pub amount: i64,
    pub claimants: VecM<Claimant, { MAX_CLAIMANTS }>,
}

xdr_struct!(CreateClaimableBalanceOp {
    asset,
    amount,
    claimants,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClaimClaimableBalanceOp {
    pub balance_id: ClaimableBalanceId,
}

xdr_struct!(ClaimClaimableBalanceOp { balance_id });

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BeginSponsoringFutureReservesOp {
    pub sponsored_id: AccountId,
}

xdr_struct!(BeginSponsoringFutureReservesOp { sponsored_id });

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RevokeSponsorshipOpSigner {
    pub account_id: AccountId,
    pub signer_key: SignerKey,
}

xdr_struct!(RevokeSponsorshipOpSigner {
    account_id,
    signer_key,
});

const REVOKE_SPONSORSHIP_LEDGER_ENTRY: i32 = 0;
const REVOKE_SPONSORSHIP_SIGNER: i32 = 1;

/// What a revoke-sponsorship operation targets: a whole ledger entry, or a
/// single signer on an account.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RevokeSponsorshipOp {
    LedgerEntry(LedgerKey),
    Signer(RevokeSponsorshipOpSigner),
}

impl ReadXdr for RevokeSponsorshipOp {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            REVOKE_SPONSORSHIP_LEDGER_ENTRY => Ok(Self::LedgerEntry(LedgerKey::read_xdr(r)?)),
            REVOKE_SPONSORSHIP_SIGNER => Ok(Self::Signer(RevokeSponsorshipOpSigner::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for RevokeSponsorshipOp {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::LedgerEntry(k) => {
                REVOKE_SPONSORSHIP_LEDGER_ENTRY.write_xdr(w)?;
                k.write_xdr(w)
            }
            Self::Signer(s) => {
                REVOKE_SPONSORSHIP_SIGNER.write_xdr(w)?;
                s.write_xdr(w)
            }
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClawbackOp {
    pub asset: Asset,
    pub from: MuxedAccount,
    pub amount: i64,
}

xdr_struct!(ClawbackOp {
    asset,
    from,
    amount,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClawbackClaimableBalanceOp {
    pub balance_id: ClaimableBalanceId,
}

xdr_struct!(ClawbackClaimableBalanceOp { balance_id });

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SetTrustLineFlagsOp {
    pub trustor: AccountId,
    pub asset: Asset,
    pub clear_flags: u32,
    pub set_flags: u32,
}

xdr_struct!(SetTrustLineFlagsOp {
    trustor,
    asset,
    clear_flags,
    set_flags,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LiquidityPoolDepositOp {
    pub liquidity_pool_id: PoolId,
    pub max_amount_a: i64,
    pub max_amount_b: i64,
    pub min_price: Price,
    pub max_price: Price,
}

xdr_struct!(LiquidityPoolDepositOp {
    liquidity_pool_id,
    max_amount_a,
    max_amount_b,
    min_price,
    max_price,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LiquidityPoolWithdrawOp {
    pub liquidity_pool_id: PoolId,
    pub amount: i64,
    pub min_amount_a: i64,
    pub min_amount_b: i64,
}

xdr_struct!(LiquidityPoolWithdrawOp {
    liquidity_pool_id,
    amount,
    min_amount_a,
    min_amount_b,
});

/// The payload union of an operation. `AccountMerge` carries its
/// destination directly; `Inflation` and `EndSponsoringFutureReserves`
/// carry nothing.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OperationBody {
    CreateAccount(CreateAccountOp),
    Payment(PaymentOp),
    PathPaymentStrictReceive(PathPaymentStrictReceiveOp),
    ManageSellOffer(ManageSellOfferOp),
    CreatePassiveSellOffer(CreatePassiveSellOfferOp),
    SetOptions(SetOptionsOp),
    ChangeTrust(ChangeTrustOp),
    AllowTrust(AllowTrustOp),
    AccountMerge(MuxedAccount),
    Inflation,
    ManageData(ManageDataOp),
    BumpSequence(BumpSequenceOp),
    ManageBuyOffer(ManageBuyOfferOp),
    PathPaymentStrictSend(PathPaymentStrictSendOp),
    CreateClaimableBalance(CreateClaimableBalanceOp),
    ClaimClaimableBalance(ClaimClaimableBalanceOp),
    BeginSponsoringFutureReserves(BeginSponsoringFutureReservesOp),
    EndSponsoringFutureReserves,
    RevokeSponsorship(RevokeSponsorshipOp),
    Clawback(ClawbackOp),
    ClawbackClaimableBalance(ClawbackClaimableBalanceOp),
    SetTrustLineFlags(SetTrustLineFlagsOp),
    LiquidityPoolDeposit(LiquidityPoolDepositOp),
    LiquidityPoolWithdraw(LiquidityPoolWithdrawOp),
}

fn price_in_range(p: Price) -> bool {
    p.n > 0 && p.d > 0
}

const WEIGHT_MAX: u32 = 255;
const TRUST_LINE_FLAGS_MASK: u32 = 0b111;

impl OperationBody {
    /// The wire discriminant of this body.
    pub const fn discriminant(&self) -> OperationType {
        match self {
            Self::CreateAccount(_) => OperationType::CreateAccount,
            Self::Payment(_) => OperationType::Payment,
            Self::PathPaymentStrictReceive(_) => OperationType::PathPaymentStrictReceive,
            Self::ManageSellOffer(_) => OperationType::ManageSellOffer,
            Self::CreatePassiveSellOffer(_) => OperationType::CreatePassiveSellOffer,
            Self::SetOptions(_) => OperationType::SetOptions,
            Self::ChangeTrust(_) => OperationType::ChangeTrust,
            Self::AllowTrust(_) => OperationType::AllowTrust,
            Self::AccountMerge(_) => OperationType::AccountMerge,
            Self::Inflation => OperationType::Inflation,
            Self::ManageData(_) => OperationType::ManageData,
            Self::BumpSequence(_) => OperationType::BumpSequence,
            Self::ManageBuyOffer(_) => OperationType::ManageBuyOffer,
            Self::PathPaymentStrictSend(_) => OperationType::PathPaymentStrictSend,
            Self::CreateClaimableBalance(_) => OperationType::CreateClaimableBalance,
            Self::ClaimClaimableBalance(_) => OperationType::ClaimClaimableBalance,
            Self::BeginSponsoringFutureReserves(_) => OperationType::BeginSponsoringFutureReserves,
            Self::EndSponsoringFutureReserves => OperationType::EndSponsoringFutureReserves,
            Self::RevokeSponsorship(_) => OperationType::RevokeSponsorship,
            Self::Clawback(_) => OperationType::Clawback,
            Self::ClawbackClaimableBalance(_) => OperationType::ClawbackClaimableBalance,
            Self::SetTrustLineFlags(_) => OperationType::SetTrustLineFlags,
            Self::LiquidityPoolDeposit(_) => OperationType::LiquidityPoolDeposit,
            Self::LiquidityPoolWithdraw(_) => OperationType::LiquidityPoolWithdraw,
        }
    }

    /// The authorization category the protocol assigns to this kind. Fixed
    /// per variant tag; `SetOptions` is classified at its worst case.
    pub const fn threshold(&self) -> ThresholdLevel {
        match self {
            Self::AllowTrust(_)
            | Self::SetTrustLineFlags(_)
            | Self::BumpSequence(_)
            | Self::ClaimClaimableBalance(_) => ThresholdLevel::Low,
            Self::AccountMerge(_) | Self::SetOptions(_) => ThresholdLevel::High,
            Self::CreateAccount(_)
            | Self::Payment(_)
            | Self::PathPaymentStrictReceive(_)
            | Self::ManageSellOffer(_)
            | Self::CreatePassiveSellOffer(_)
            | Self::ChangeTrust(_)
            | Self::Inflation
            | Self::ManageData(_)
            | Self::ManageBuyOffer(_)
            | Self::PathPaymentStrictSend(_)
            | Self::CreateClaimableBalance(_)
            | Self::BeginSponsoringFutureReserves(_)
            | Self::EndSponsoringFutureReserves
            | Self::RevokeSponsorship(_)
            | Self::Clawback(_)
            | Self::ClawbackClaimableBalance(_)
            | Self::LiquidityPoolDeposit(_)
            | Self::LiquidityPoolWithdraw(_) => ThresholdLevel::Medium,
        }
    }

    /// Whether the payload's value constraints hold. Field presence is
    /// already guaranteed by the type; this checks the residual rules the
    /// network applies (positive amounts, in-range weights, usable prices).
    pub fn is_ready(&self) -> bool {
        match self {
            Self::CreateAccount(op) => op.starting_balance >= 0,
            Self::Payment(op) => op.amount > 0,
            Self::PathPaymentStrictReceive(op) => op.send_max > 0 && op.dest_amount > 0,
            Self::ManageSellOffer(op) => op.amount >= 0 && price_in_range(op.price),
            Self::CreatePassiveSellOffer(op) => op.amount > 0 && price_in_range(op.price),
            Self::SetOptions(op) => {
                let weight_ok = |w: Option<u32>| w.map_or(true, |w| w <= WEIGHT_MAX);
                weight_ok(op.master_weight)
                    && weight_ok(op.low_threshold)
                    && weight_ok(op.med_threshold)
                    && weight_ok(op.high_threshold)
                    && op.signer.as_ref().map_or(true, |s| s.weight <= WEIGHT_MAX)
            }
            Self::ChangeTrust(op) => op.limit >= 0,
            Self::AllowTrust(op) => op.authorize & !TRUST_LINE_FLAGS_MASK == 0,
            Self::AccountMerge(_) => true,
            Self::Inflation => true,
            Self::ManageData(op) => !op.data_name.is_empty(),
            Self::BumpSequence(op) => op.bump_to.0 >= 0,
            Self::ManageBuyOffer(op) => op.buy_amount >= 0 && price_in_range(op.price),
            Self::PathPaymentStrictSend(op) => op.send_amount > 0 && op.dest_min > 0,
            Self::CreateClaimableBalance(op) => op.amount > 0 && !op.claimants.is_empty(),
            Self::ClaimClaimableBalance(_) => true,
            Self::BeginSponsoringFutureReserves(_) => true,
            Self::EndSponsoringFutureReserves => true,
            Self::RevokeSponsorship(_) => true,
            Self::Clawback(op) => op.amount > 0,
            Self::ClawbackClaimableBalance(_) => true,
            Self::SetTrustLineFlags(op) => {
                op.clear_flags & !TRUST_LINE_FLAGS_MASK == 0
                    && op.set_flags & !TRUST_LINE_FLAGS_MASK == 0
                    && op.clear_flags & op.set_flags == 0
            }
            Self::LiquidityPoolDeposit(op) => {
                op.max_amount_a > 0
                    && op.max_amount_b > 0
                    && price_in_range(op.min_price)
                    && price_in_range(op.max_price)
            }
            Self::LiquidityPoolWithdraw(op) => {
                op.amount > 0 && op.min_amount_a >= 0 && op.min_amount_b >= 0
            }
        }
    }
}

impl ReadXdr for OperationBody {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match OperationType::read_xdr(r)? {
            OperationType::CreateAccount => Ok(Self::CreateAccount(CreateAccountOp::read_xdr(r)?)),
            OperationType::Payment => Ok(Self::Payment(PaymentOp::read_xdr(r)?)),
            OperationType::PathPaymentStrictReceive => Ok(Self::PathPaymentStrictReceive(
                PathPaymentStrictReceiveOp::read_xdr(r)?,
            )),
            OperationType::ManageSellOffer => {
                Ok(Self::ManageSellOffer(ManageSellOfferOp::read_xdr(r)?))
            }
            OperationType::CreatePassiveSellOffer => Ok(Self::CreatePassiveSellOffer(
                CreatePassiveSellOfferOp::read_xdr(r)?,
            )),
            OperationType::SetOptions => Ok(Self::SetOptions(SetOptionsOp::read_xdr(r)?)),
            OperationType::ChangeTrust => Ok(Self::ChangeTrust(ChangeTrustOp::read_xdr(r)?)),
            OperationType::AllowTrust => Ok(Self::AllowTrust(AllowTrustOp::read_xdr(r)?)),
            OperationType::AccountMerge => Ok(Self::AccountMerge(MuxedAccount::read_xdr(r)?)),
            OperationType::Inflation => Ok(Self::Inflation),
            OperationType::ManageData => Ok(Self::ManageData(ManageDataOp::read_xdr(r)?)),
            OperationType::BumpSequence => Ok(Self::BumpSequence(BumpSequenceOp::read_xdr(r)?)),
            OperationType::ManageBuyOffer => {
                Ok(Self::ManageBuyOffer(ManageBuyOfferOp::read_xdr(r)?))
            }
            OperationType::PathPaymentStrictSend => Ok(Self::PathPaymentStrictSend(
                PathPaymentStrictSendOp::read_xdr(r)?,
            )),
            OperationType::CreateClaimableBalance => Ok(Self::CreateClaimableBalance(
                CreateClaimableBalanceOp::read_xdr(r)?,
            )),
            OperationType::ClaimClaimableBalance => Ok(Self::ClaimClaimableBalance(
                ClaimClaimableBalanceOp::read_xdr(r)?,
            )),
            OperationType::BeginSponsoringFutureReserves => Ok(Self::BeginSponsoringFutureReserves(
                BeginSponsoringFutureReservesOp::read_xdr(r)?,
            )),
            OperationType::EndSponsoringFutureReserves => Ok(Self::EndSponsoringFutureReserves),
            OperationType::RevokeSponsorship => {
                Ok(Self::RevokeSponsorship(RevokeSponsorshipOp::read_xdr(r)?))
            }
            OperationType::Clawback => Ok(Self::Clawback(ClawbackOp::read_xdr(r)?)),
            OperationType::ClawbackClaimableBalance => Ok(Self::ClawbackClaimableBalance(
                ClawbackClaimableBalanceOp::read_xdr(r)?,
            )),
            OperationType::SetTrustLineFlags => {
                Ok(Self::SetTrustLineFlags(SetTrustLineFlagsOp::read_xdr(r)?))
            }
            OperationType::LiquidityPoolDeposit => Ok(Self::LiquidityPoolDeposit(
                LiquidityPoolDepositOp::read_xdr(r)?,
            )),
            OperationType::LiquidityPoolWithdraw => Ok(Self::LiquidityPoolWithdraw(
                LiquidityPoolWithdrawOp::read_xdr(r)?,
            )),
        })
    }
}

impl WriteXdr for OperationBody {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| {
            self.discriminant().write_xdr(w)?;
            match self {
                Self::CreateAccount(op) => op.write_xdr(w),
                Self::Payment(op) => op.write_xdr(w),
                Self::PathPaymentStrictReceive(op) => op.write_xdr(w),
                Self::ManageSellOffer(op) => op.write_xdr(w),
                Self::CreatePassiveSellOffer(op) => op.write_xdr(w),
                Self::SetOptions(op) => op.write_xdr(w),
                Self::ChangeTrust(op) => op.write_xdr(w),
                Self::AllowTrust(op) => op.write_xdr(w),
                Self::AccountMerge(dest) => dest.write_xdr(w),
                Self::Inflation => Ok(()),
                Self::ManageData(op) => op.write_xdr(w),
                Self::BumpSequence(op) => op.write_xdr(w),
                Self::ManageBuyOffer(op) => op.write_xdr(w),
                Self::PathPaymentStrictSend(op) => op.write_xdr(w),
                Self::CreateClaimableBalance(op) => op.write_xdr(w),
                Self::ClaimClaimableBalance(op) => op.write_xdr(w),
                Self::BeginSponsoringFutureReserves(op) => op.write_xdr(w),
                Self::EndSponsoringFutureReserves => Ok(()),
                Self::RevokeSponsorship(op) => op.write_xdr(w),
                Self::Clawback(op) => op.write_xdr(w),
                Self::ClawbackClaimableBalance(op) => op.write_xdr(w),
                Self::SetTrustLineFlags(op) => op.write_xdr(w),
                Self::LiquidityPoolDeposit(op) => op.write_xdr(w),
                Self::LiquidityPoolWithdraw(op) => op.write_xdr(w),
            }
        })
    }
}
