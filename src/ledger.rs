//! Ledger entry wire shapes: the keys that name entries and the entry
//! bodies themselves, as they appear in entry-change streams decoded from
//! ledger responses. This module carries no ledger semantics; state
//! transitions happen on the network, clients only decode the results.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::account::{AccountId, Signer, Thresholds};
use crate::asset::{Asset, LiquidityPoolConstantProductParameters, Price, TrustLineAsset};
use crate::claim::{ClaimableBalanceId, Claimant};
use crate::xdr::{
    self, xdr_struct, ExtensionPoint, Limited, PoolId, ReadXdr, SequenceNumber, TimePoint, VecM,
    WriteXdr,
};
use crate::{DataValue, String32, String64};

/// Maximum signers attached to one account.
pub const MAX_SIGNERS: u32 = 20;

const LEDGER_ENTRY_TYPE_ACCOUNT: i32 = 0;
const LEDGER_ENTRY_TYPE_TRUSTLINE: i32 = 1;
const LEDGER_ENTRY_TYPE_OFFER: i32 = 2;
const LEDGER_ENTRY_TYPE_DATA: i32 = 3;
const LEDGER_ENTRY_TYPE_CLAIMABLE_BALANCE: i32 = 4;
const LEDGER_ENTRY_TYPE_LIQUIDITY_POOL: i32 = 5;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LedgerKeyAccount {
    pub account_id: AccountId,
}

xdr_struct!(LedgerKeyAccount { account_id });

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LedgerKeyTrustLine {
    pub account_id: AccountId,
    pub asset: TrustLineAsset,
}

xdr_struct!(LedgerKeyTrustLine { account_id, asset });

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LedgerKeyOffer {
    pub seller_id: AccountId,
    pub offer_id: i64,
}

xdr_struct!(LedgerKeyOffer { seller_id, offer_id });

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LedgerKeyData {
    pub account_id: AccountId,
    pub data_name: String64,
}

xdr_struct!(LedgerKeyData {
    account_id,
    data_name,
});

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LedgerKeyClaimableBalance {
    pub balance_id: ClaimableBalanceId,
}

xdr_struct!(LedgerKeyClaimableBalance { balance_id });

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LedgerKeyLiquidityPool {
    pub liquidity_pool_id: PoolId,
}

xdr_struct!(LedgerKeyLiquidityPool { liquidity_pool_id });

/// Names a single ledger entry of any kind.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LedgerKey {
    Account(LedgerKeyAccount),
    Trustline(LedgerKeyTrustLine),
    Offer(LedgerKeyOffer),
    Data(LedgerKeyData),
    ClaimableBalance(LedgerKeyClaimableBalance),
    LiquidityPool(LedgerKeyLiquidityPool),
}

impl ReadXdr for LedgerKey {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            LEDGER_ENTRY_TYPE_ACCOUNT => Ok(Self::Account(LedgerKeyAccount::read_xdr(r)?)),
            LEDGER_ENTRY_TYPE_TRUSTLINE => Ok(Self::Trustline(LedgerKeyTrustLine::read_xdr(r)?)),
            LEDGER_ENTRY_TYPE_OFFER => Ok(Self::Offer(LedgerKeyOffer::read_xdr(r)?)),
            LEDGER_ENTRY_TYPE_DATA => Ok(Self::Data(LedgerKeyData::read_xdr(r)?)),
            LEDGER_ENTRY_TYPE_CLAIMABLE_BALANCE => Ok(Self::ClaimableBalance(
                LedgerKeyClaimableBalance::read_xdr(r)?,
            )),
            LEDGER_ENTRY_TYPE_LIQUIDITY_POOL => {
                Ok(Self::LiquidityPool(LedgerKeyLiquidityPool::read_xdr(r)?))
            }
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for LedgerKey {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::Account(k) => {
                LEDGER_ENTRY_TYPE_ACCOUNT.write_xdr(w)?;
                k.write_xdr(w)
            }
            Self::Trustline(k) => {
                LEDGER_ENTRY_TYPE_TRUSTLINE.write_xdr(w)?;
                k.write_xdr(w)
            }
            Self::Offer(k) => {
                LEDGER_ENTRY_TYPE_OFFER.write_xdr(w)?;
                k.write_xdr(w)
            }
            Self::Data(k) => {
                LEDGER_ENTRY_TYPE_DATA.write_xdr(w)?;
                k.write_xdr(w)
            }
            Self::ClaimableBalance(k) => {
                LEDGER_ENTRY_TYPE_CLAIMABLE_BALANCE.write_xdr(w)?;
                k.write_xdr(w)
            }
            Self::LiquidityPool(k) => {
                LEDGER_ENTRY_TYPE_LIQUIDITY_POOL.write_xdr(w)?;
                k.write_xdr(w)
            }
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Liabilities {
    pub buying: i64,
    pub selling: i64,
}

xdr_struct!(Liabilities { buying, selling });

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountEntryExtensionV3 {
    pub ext: ExtensionPoint,
    pub seq_ledger: u32,
    pub seq_time: TimePoint,
}

xdr_struct!(AccountEntryExtensionV3 {
    ext,
    seq_ledger,
    seq_time,
});

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AccountEntryExtensionV2Ext {
    V0,
    V3(AccountEntryExtensionV3),
}

impl ReadXdr for AccountEntryExtensionV2Ext {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            0 => Ok(Self::V0),
            3 => Ok(Self::V3(AccountEntryExtensionV3::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for AccountEntryExtensionV2Ext {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::V0 => 0i32.write_xdr(w),
            Self::V3(v3) => {
                3i32.write_xdr(w)?;
                v3.write_xdr(w)
            }
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountEntryExtensionV2 {
    pub num_sponsored: u32,
    pub num_sponsoring: u32,
    pub signer_sponsoring_ids: VecM<Option<AccountId>, { MAX_SIGNERS }>,
    pub ext: AccountEntryExtensionV2Ext,
}

xdr_struct!(AccountEntryExtensionV2 {
    num_sponsored,
    num_sponsoring,
    signer_sponsoring_ids,
    ext,
});

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AccountEntryExtensionV1Ext {
    V0,
    V2(AccountEntryExtensionV2),
}

impl ReadXdr for AccountEntryExtensionV1Ext {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            0 => Ok(Self::V0),
            2 => Ok(Self::V2(AccountEntryExtensionV2::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for AccountEntryExtensionV1Ext {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::V0 => 0i32.write_xdr(w),
            Self::V2(v2) => {
                2i32.write_xdr(w)?;
                v2.write_xdr(w)
            }
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountEntryExtensionV1 {
    pub liabilities: Liabilities,
    pub ext: AccountEntryExtensionV1Ext,
}

xdr_struct!(AccountEntryExtensionV1 { liabilities, ext });

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AccountEntryExt {
    V0,
    V1(AccountEntryExtensionV1),
}

impl ReadXdr for AccountEntryExt {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            0 => Ok(Self::V0),
            1 => Ok(Self::V1(AccountEntryExtensionV1::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for AccountEntryExt {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::V0 => 0i32.write_xdr(w),
            Self::V1(v1) => {
                1i32.write_xdr(w)?;
                v1.write_xdr(w)
            }
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountEntry {
    pub account_id: AccountId,
    pub balance: i64,
    pub seq_num: SequenceNumber,
    pub num_sub_entries: u32,
    pub inflation_dest: Option<AccountId>,
    pub flags: u32,
    pub home_domain: String32,
    pub thresholds: Thresholds,
    pub signers: VecM<Signer, { MAX_SIGNERS }>,
    pub ext: AccountEntryExt,
}

xdr_struct!(AccountEntry {
    account_id,
    balance,
    seq_num,
    num_sub_entries,
    inflation_dest,
    flags,
    home_domain,
    thresholds,
    signers,
    ext,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrustLineEntryExtensionV2Ext {
    V0,
}

impl ReadXdr for TrustLineEntryExtensionV2Ext {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            0 => Ok(Self::V0),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for TrustLineEntryExtensionV2Ext {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::V0 => 0i32.write_xdr(w),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TrustLineEntryExtensionV2 {
    pub liquidity_pool_use_count: i32,
    pub ext: TrustLineEntryExtensionV2Ext,
}

xdr_struct!(TrustLineEntryExtensionV2 {
    liquidity_pool_use_count,
    ext,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrustLineEntryV1Ext {
    V0,
    V2(TrustLineEntryExtensionV2),
}

impl ReadXdr for TrustLineEntryV1Ext {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            0 => Ok(Self::V0),
            2 => Ok(Self::V2(TrustLineEntryExtensionV2::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for TrustLineEntryV1Ext {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::V0 => 0i32.write_xdr(w),
            Self::V2(v2) => {
                2i32.write_xdr(w)?;
                v2.write_xdr(w)
            }
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TrustLineEntryV1 {
    pub liabilities: Liabilities,
    pub ext: TrustLineEntryV1Ext,
}

xdr_struct!(TrustLineEntryV1 { liabilities, ext });

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrustLineEntryExt {
    V0,
    V1(TrustLineEntryV1),
}

impl ReadXdr for TrustLineEntryExt {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            0 => Ok(Self::V0),
            1 => Ok(Self::V1(TrustLineEntryV1::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for TrustLineEntryExt {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::V0 => 0i32.write_xdr(w),
            Self::V1(v1) => {
                1i32.write_xdr(w)?;
                v1.write_xdr(w)
            }
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TrustLineEntry {
    pub account_id: AccountId,
    pub asset: TrustLineAsset,
    pub balance: i64,
    pub limit: i64,
    pub flags: u32,
    pub ext: TrustLineEntryExt,
}

xdr_struct!(TrustLineEntry {
    account_id,
    asset,
    balance,
    limit,
    flags,
    ext,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum OfferEntryFlags {
    PassiveFlag = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OfferEntryExt {
    V0,
}

impl ReadXdr for OfferEntryExt {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            0 => Ok(Self::V0),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for OfferEntryExt {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::V0 => 0i32.write_xdr(w),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OfferEntry {
    pub seller_id: AccountId,
    pub offer_id: i64,
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
    pub flags: u32,
    pub ext: OfferEntryExt,
}

xdr_struct!(OfferEntry {
    seller_id,
    offer_id,
    selling,
    buying,
    amount,
    price,
    flags,
    ext,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DataEntryExt {
    V0,
}

impl ReadXdr for DataEntryExt {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            0 => Ok(Self::V0),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for DataEntryExt {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::V0 => 0i32.write_xdr(w),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DataEntry {
    pub account_id: AccountId,
    pub data_name: String64,
    pub data_value: DataValue,
    pub ext: DataEntryExt,
}

xdr_struct!(DataEntry {
    account_id,
    data_name,
    data_value,
    ext,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ClaimableBalanceFlags {
    ClawbackEnabledFlag = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClaimableBalanceEntryExtensionV1Ext {
    V0,
}

impl ReadXdr for ClaimableBalanceEntryExtensionV1Ext {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            0 => Ok(Self::V0),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for ClaimableBalanceEntryExtensionV1Ext {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::V0 => 0i32.write_xdr(w),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClaimableBalanceEntryExtensionV1 {
    pub ext: ClaimableBalanceEntryExtensionV1Ext,
    pub flags: u32,
}

xdr_struct!(ClaimableBalanceEntryExtensionV1 { ext, flags });

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClaimableBalanceEntryExt {
    V0,
    V1(ClaimableBalanceEntryExtensionV1),
}

impl ReadXdr for ClaimableBalanceEntryExt {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            0 => Ok(Self::V0),
            1 => Ok(Self::V1(ClaimableBalanceEntryExtensionV1::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for ClaimableBalanceEntryExt {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::V0 => 0i32.write_xdr(w),
            Self::V1(v1) => {
                1i32.write_xdr(w)?;
                v1.write_xdr(w)
            }
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClaimableBalanceEntry {
    pub balance_id: ClaimableBalanceId,
    pub claimants: VecM<Claimant, 10>,
    pub asset: Asset,
    pub amount: i64,
    pub ext: ClaimableBalanceEntryExt,
}

xdr_struct!(ClaimableBalanceEntry {
    balance_id,
    claimants,
    asset,
    amount,
    ext,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LiquidityPoolEntryConstantProduct {
    pub params: LiquidityPoolConstantProductParameters,
    pub reserve_a: i64,
    pub reserve_b: i64,
    pub total_pool_shares: i64,
    pub pool_shares_trust_line_count: i64,
}

xdr_struct!(LiquidityPoolEntryConstantProduct {
    params,
    reserve_a,
    reserve_b,
    total_pool_shares,
    pool_shares_trust_line_count,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LiquidityPoolEntryBody {
    LiquidityPoolConstantProduct(LiquidityPoolEntryConstantProduct),
}

impl ReadXdr for LiquidityPoolEntryBody {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            0 => Ok(Self::LiquidityPoolConstantProduct(
                LiquidityPoolEntryConstantProduct::read_xdr(r)?,
            )),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for LiquidityPoolEntryBody {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::LiquidityPoolConstantProduct(cp) => {
                0i32.write_xdr(w)?;
                cp.write_xdr(w)
            }
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LiquidityPoolEntry {
    pub liquidity_pool_id: PoolId,
    pub body: LiquidityPoolEntryBody,
}

xdr_struct!(LiquidityPoolEntry {
    liquidity_pool_id,
    body,
});

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LedgerEntryData {
    Account(AccountEntry),
    Trustline(TrustLineEntry),
    Offer(OfferEntry),
    Data(DataEntry),
    ClaimableBalance(ClaimableBalanceEntry),
    LiquidityPool(LiquidityPoolEntry),
}

impl ReadXdr for LedgerEntryData {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            LEDGER_ENTRY_TYPE_ACCOUNT => Ok(Self::Account(AccountEntry::read_xdr(r)?)),
            LEDGER_ENTRY_TYPE_TRUSTLINE => Ok(Self::Trustline(TrustLineEntry::read_xdr(r)?)),
            LEDGER_ENTRY_TYPE_OFFER => Ok(Self::Offer(OfferEntry::read_xdr(r)?)),
            LEDGER_ENTRY_TYPE_DATA => Ok(Self::Data(DataEntry::read_xdr(r)?)),
            LEDGER_ENTRY_TYPE_CLAIMABLE_BALANCE => {
                Ok(Self::ClaimableBalance(ClaimableBalanceEntry::read_xdr(r)?))
            }
            LEDGER_ENTRY_TYPE_LIQUIDITY_POOL => {
                Ok(Self::LiquidityPool(LiquidityPoolEntry::read_xdr(r)?))
            }
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for LedgerEntryData {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::Account(e) => {
                LEDGER_ENTRY_TYPE_ACCOUNT.write_xdr(w)?;
                e.write_xdr(w)
            }
            Self::Trustline(e) => {
                LEDGER_ENTRY_TYPE_TRUSTLINE.write_xdr(w)?;
                e.write_xdr(w)
            }
            Self::Offer(e) => {
                LEDGER_ENTRY_TYPE_OFFER.write_xdr(w)?;
                e.write_xdr(w)
            }
            Self::Data(e) => {
                LEDGER_ENTRY_TYPE_DATA.write_xdr(w)?;
                e.write_xdr(w)
            }
            Self::ClaimableBalance(e) => {
                LEDGER_ENTRY_TYPE_CLAIMABLE_BALANCE.write_xdr(w)?;
                e.write_xdr(w)
            }
            Self::LiquidityPool(e) => {
                LEDGER_ENTRY_TYPE_LIQUIDITY_POOL.write_xdr(w)?;
                e.write_xdr(w)
            }
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LedgerEntryExtensionV1Ext {
    V0,
}

impl ReadXdr for LedgerEntryExtensionV1Ext {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            0 => Ok(Self::V0),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for LedgerEntryExtensionV1Ext {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::V0 => 0i32.write_xdr(w),
        })
    }
}

/// Sponsorship marker attached to entries created under a sponsor.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LedgerEntryExtensionV1 {
    pub sponsoring_id: Option<AccountId>,
    pub ext: LedgerEntryExtensionV1Ext,
}

xdr_struct!(LedgerEntryExtensionV1 { sponsoring_id, ext });

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LedgerEntryExt {
    V0,
    V1(LedgerEntryExtensionV1),
}

impl ReadXdr for LedgerEntryExt {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            0 => Ok(Self::V0),
            1 => Ok(Self::V1(LedgerEntryExtensionV1::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for LedgerEntryExt {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::V0 => 0i32.write_xdr(w),
            Self::V1(v1) => {
                1i32.write_xdr(w)?;
                v1.write_xdr(w)
            }
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub last_modified_ledger_seq: u32,
    pub data: LedgerEntryData,
    pub ext: LedgerEntryExt,
}

xdr_struct!(LedgerEntry {
    last_modified_ledger_seq,
    data,
    ext,
});

const LEDGER_ENTRY_CHANGE_CREATED: i32 = 0;
const LEDGER_ENTRY_CHANGE_UPDATED: i32 = 1;
const LEDGER_ENTRY_CHANGE_REMOVED: i32 = 2;
const LEDGER_ENTRY_CHANGE_STATE: i32 = 3;

/// One effect an operation had on the ledger, as reported back by the
/// network.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LedgerEntryChange {
    Created(LedgerEntry),
    Updated(LedgerEntry),
    Removed(LedgerKey),
    State(LedgerEntry),
}

impl ReadXdr for LedgerEntryChange {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            LEDGER_ENTRY_CHANGE_CREATED => Ok(Self::Created(LedgerEntry::read_xdr(r)?)),
            LEDGER_ENTRY_CHANGE_UPDATED => Ok(Self::Updated(LedgerEntry::read_xdr(r)?)),
            LEDGER_ENTRY_CHANGE_REMOVED => Ok(Self::Removed(LedgerKey::read_xdr(r)?)),
            LEDGER_ENTRY_CHANGE_STATE => Ok(Self::State(LedgerEntry::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for LedgerEntryChange {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::Created(e) => {
                LEDGER_ENTRY_CHANGE_CREATED.write_xdr(w)?;
                e.write_xdr(w)
            }
            Self::Updated(e) => {
                LEDGER_ENTRY_CHANGE_UPDATED.write_xdr(w)?;
                e.write_xdr(w)
            }
            Self::Removed(k) => {
                LEDGER_ENTRY_CHANGE_REMOVED.write_xdr(w)?;
                k.write_xdr(w)
            }
            Self::State(e) => {
                LEDGER_ENTRY_CHANGE_STATE.write_xdr(w)?;
                e.write_xdr(w)
            }
        })
    }
}

pub type LedgerEntryChanges = VecM<LedgerEntryChange>;

#[cfg(test)]
mod test {
    use super::*;
    use crate::xdr::{Limits, Uint256};

    fn account_id(byte: u8) -> AccountId {
        AccountId(crate::account::PublicKey::PublicKeyTypeEd25519(Uint256(
            [byte; 32],
        )))
    }

    #[test]
    fn ledger_key_round_trip() {
        let key = LedgerKey::Data(LedgerKeyData {
            account_id: account_id(4),
            data_name: "config".parse().unwrap(),
        });
        let bytes = key.to_xdr(Limits::default()).unwrap();
        assert_eq!(LedgerKey::from_xdr(&bytes, Limits::default()).unwrap(), key);
    }

    #[test]
    fn entry_change_stream_round_trip() {
        let entry = LedgerEntry {
            last_modified_ledger_seq: 123,
            data: LedgerEntryData::Trustline(TrustLineEntry {
                account_id: account_id(7),
                asset: TrustLineAsset::Native,
                balance: 100,
                limit: i64::MAX,
                flags: 1,
                ext: TrustLineEntryExt::V0,
            }),
            ext: LedgerEntryExt::V0,
        };
        let changes: LedgerEntryChanges = vec![
            LedgerEntryChange::Created(entry.clone()),
            LedgerEntryChange::Removed(LedgerKey::Account(LedgerKeyAccount {
                account_id: account_id(7),
            })),
        ]
        .try_into()
        .unwrap();
        let bytes = changes.to_xdr(Limits::default()).unwrap();
        let back = LedgerEntryChanges::from_xdr(&bytes, Limits::default()).unwrap();
        assert_eq!(back, changes);
    }

    #[test]
    fn sponsored_account_entry_round_trip() {
        let entry = LedgerEntry {
            last_modified_ledger_seq: 900,
            data: LedgerEntryData::Account(AccountEntry {
                account_id: account_id(1),
                balance: 5_0000000,
                seq_num: SequenceNumber(42),
                num_sub_entries: 1,
                inflation_dest: None,
                flags: 0,
                home_domain: "example.com".parse().unwrap(),
                thresholds: Thresholds([1, 0, 1, 1]),
                signers: VecM::default(),
                ext: AccountEntryExt::V1(AccountEntryExtensionV1 {
                    liabilities: Liabilities {
                        buying: 0,
                        selling: 10,
                    },
                    ext: AccountEntryExtensionV1Ext::V2(AccountEntryExtensionV2 {
                        num_sponsored: 1,
                        num_sponsoring: 0,
                        signer_sponsoring_ids: vec![Some(account_id(2)), None].try_into().unwrap(),
                        ext: AccountEntryExtensionV2Ext::V0,
                    }),
                }),
            }),
            ext: LedgerEntryExt::V1(LedgerEntryExtensionV1 {
                sponsoring_id: Some(account_id(2)),
                ext: LedgerEntryExtensionV1Ext::V0,
            }),
        };
        let bytes = entry.to_xdr(Limits::default()).unwrap();
        let back = LedgerEntry::from_xdr(&bytes, Limits::default()).unwrap();
        assert_eq!(back, entry);
    }
}
