//! Assets as they appear on the wire: the native lumen, alphanumeric
//! credit assets issued by an account, and the pool-share forms used by
//! trust lines. The string form is `native` or `CODE:ISSUER`.

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::xdr::{self, xdr_struct, Limited, PoolId, ReadXdr, WriteXdr};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("cannot parse asset: {asset}")]
    CannotParseAsset { asset: String },
    #[error("invalid asset code: {asset}")]
    InvalidAssetCode { asset: String },
    #[error(transparent)]
    Account(#[from] crate::account::Error),
}

const ASSET_TYPE_NATIVE: i32 = 0;
const ASSET_TYPE_CREDIT_ALPHANUM4: i32 = 1;
const ASSET_TYPE_CREDIT_ALPHANUM12: i32 = 2;
const ASSET_TYPE_POOL_SHARE: i32 = 3;

/// Fee charged by constant-product liquidity pools, in basis points.
pub const LIQUIDITY_POOL_FEE_V18: i32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetCode4(pub [u8; 4]);

impl ReadXdr for AssetCode4 {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        Ok(Self(<[u8; 4]>::read_xdr(r)?))
    }
}

impl WriteXdr for AssetCode4 {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        self.0.write_xdr(w)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetCode12(pub [u8; 12]);

impl ReadXdr for AssetCode12 {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        Ok(Self(<[u8; 12]>::read_xdr(r)?))
    }
}

impl WriteXdr for AssetCode12 {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        self.0.write_xdr(w)
    }
}

fn code_to_str(code: &[u8]) -> String {
    let end = code.iter().position(|b| *b == 0).unwrap_or(code.len());
    String::from_utf8_lossy(&code[..end]).into_owned()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AlphaNum4 {
    pub asset_code: AssetCode4,
    pub issuer: AccountId,
}

xdr_struct!(AlphaNum4 { asset_code, issuer });

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AlphaNum12 {
    pub asset_code: AssetCode12,
    pub issuer: AccountId,
}

xdr_struct!(AlphaNum12 { asset_code, issuer });

/// An asset reference: the native lumen or an issued credit asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Asset {
    Native,
    CreditAlphanum4(AlphaNum4),
    CreditAlphanum12(AlphaNum12),
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => f.write_str("native"),
            Self::CreditAlphanum4(a) => {
                write!(f, "{}:{}", code_to_str(&a.asset_code.0), a.issuer)
            }
            Self::CreditAlphanum12(a) => {
                write!(f, "{}:{}", code_to_str(&a.asset_code.0), a.issuer)
            }
        }
    }
}

impl FromStr for Asset {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_asset(value)
    }
}

impl ReadXdr for Asset {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            ASSET_TYPE_NATIVE => Ok(Self::Native),
            ASSET_TYPE_CREDIT_ALPHANUM4 => Ok(Self::CreditAlphanum4(AlphaNum4::read_xdr(r)?)),
            ASSET_TYPE_CREDIT_ALPHANUM12 => Ok(Self::CreditAlphanum12(AlphaNum12::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for Asset {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::Native => ASSET_TYPE_NATIVE.write_xdr(w),
            Self::CreditAlphanum4(a) => {
                ASSET_TYPE_CREDIT_ALPHANUM4.write_xdr(w)?;
                a.write_xdr(w)
            }
            Self::CreditAlphanum12(a) => {
                ASSET_TYPE_CREDIT_ALPHANUM12.write_xdr(w)?;
                a.write_xdr(w)
            }
        })
    }
}

/// A bare asset code, as carried by trust authorization operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AssetCode {
    CreditAlphanum4(AssetCode4),
    CreditAlphanum12(AssetCode12),
}

impl FromStr for AssetCode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_asset_code(value)
    }
}

impl ReadXdr for AssetCode {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            ASSET_TYPE_CREDIT_ALPHANUM4 => Ok(Self::CreditAlphanum4(AssetCode4::read_xdr(r)?)),
            ASSET_TYPE_CREDIT_ALPHANUM12 => Ok(Self::CreditAlphanum12(AssetCode12::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for AssetCode {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::CreditAlphanum4(c) => {
                ASSET_TYPE_CREDIT_ALPHANUM4.write_xdr(w)?;
                c.write_xdr(w)
            }
            Self::CreditAlphanum12(c) => {
                ASSET_TYPE_CREDIT_ALPHANUM12.write_xdr(w)?;
                c.write_xdr(w)
            }
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LiquidityPoolConstantProductParameters {
    pub asset_a: Asset,
    pub asset_b: Asset,
    pub fee: i32,
}

xdr_struct!(LiquidityPoolConstantProductParameters {
    asset_a,
    asset_b,
    fee,
});

const LIQUIDITY_POOL_CONSTANT_PRODUCT: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LiquidityPoolParameters {
    LiquidityPoolConstantProduct(LiquidityPoolConstantProductParameters),
}

impl ReadXdr for LiquidityPoolParameters {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            LIQUIDITY_POOL_CONSTANT_PRODUCT => Ok(Self::LiquidityPoolConstantProduct(
                LiquidityPoolConstantProductParameters::read_xdr(r)?,
            )),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for LiquidityPoolParameters {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::LiquidityPoolConstantProduct(p) => {
                LIQUIDITY_POOL_CONSTANT_PRODUCT.write_xdr(w)?;
                p.write_xdr(w)
            }
        })
    }
}

/// The asset a trust line is held against; pool-share trust lines refer to
/// an existing pool by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrustLineAsset {
    Native,
    CreditAlphanum4(AlphaNum4),
    CreditAlphanum12(AlphaNum12),
    PoolShare(PoolId),
}

impl From<Asset> for TrustLineAsset {
    fn from(asset: Asset) -> Self {
        match asset {
            Asset::Native => Self::Native,
            Asset::CreditAlphanum4(a) => Self::CreditAlphanum4(a),
            Asset::CreditAlphanum12(a) => Self::CreditAlphanum12(a),
        }
    }
}

impl ReadXdr for TrustLineAsset {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            ASSET_TYPE_NATIVE => Ok(Self::Native),
            ASSET_TYPE_CREDIT_ALPHANUM4 => Ok(Self::CreditAlphanum4(AlphaNum4::read_xdr(r)?)),
            ASSET_TYPE_CREDIT_ALPHANUM12 => Ok(Self::CreditAlphanum12(AlphaNum12::read_xdr(r)?)),
            ASSET_TYPE_POOL_SHARE => Ok(Self::PoolShare(PoolId::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for TrustLineAsset {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::Native => ASSET_TYPE_NATIVE.write_xdr(w),
            Self::CreditAlphanum4(a) => {
                ASSET_TYPE_CREDIT_ALPHANUM4.write_xdr(w)?;
                a.write_xdr(w)
            }
            Self::CreditAlphanum12(a) => {
                ASSET_TYPE_CREDIT_ALPHANUM12.write_xdr(w)?;
                a.write_xdr(w)
            }
            Self::PoolShare(id) => {
                ASSET_TYPE_POOL_SHARE.write_xdr(w)?;
                id.write_xdr(w)
            }
        })
    }
}

/// The asset named by a change-trust operation; pool-share lines are
/// opened against the pool's parameters rather than an id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChangeTrustAsset {
    Native,
    CreditAlphanum4(AlphaNum4),
    CreditAlphanum12(AlphaNum12),
    LiquidityPool(LiquidityPoolParameters),
}

impl From<Asset> for ChangeTrustAsset {
    fn from(asset: Asset) -> Self {
        match asset {
            Asset::Native => Self::Native,
            Asset::CreditAlphanum4(a) => Self::CreditAlphanum4(a),
            Asset::CreditAlphanum12(a) => Self::CreditAlphanum12(a),
        }
    }
}

impl ReadXdr for ChangeTrustAsset {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            ASSET_TYPE_NATIVE => Ok(Self::Native),
            ASSET_TYPE_CREDIT_ALPHANUM4 => Ok(Self::CreditAlphanum4(AlphaNum4::read_xdr(r)?)),
            ASSET_TYPE_CREDIT_ALPHANUM12 => Ok(Self::CreditAlphanum12(AlphaNum12::read_xdr(r)?)),
            ASSET_TYPE_POOL_SHARE => Ok(Self::LiquidityPool(LiquidityPoolParameters::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for ChangeTrustAsset {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::Native => ASSET_TYPE_NATIVE.write_xdr(w),
            Self::CreditAlphanum4(a) => {
                ASSET_TYPE_CREDIT_ALPHANUM4.write_xdr(w)?;
                a.write_xdr(w)
            }
            Self::CreditAlphanum12(a) => {
                ASSET_TYPE_CREDIT_ALPHANUM12.write_xdr(w)?;
                a.write_xdr(w)
            }
            Self::LiquidityPool(p) => {
                ASSET_TYPE_POOL_SHARE.write_xdr(w)?;
                p.write_xdr(w)
            }
        })
    }
}

/// A rational price, numerator over denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    pub n: i32,
    pub d: i32,
}

xdr_struct!(Price { n, d });

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum TrustLineFlags {
    AuthorizedFlag = 1,
    AuthorizedToMaintainLiabilitiesFlag = 2,
    TrustlineClawbackEnabledFlag = 4,
}

fn parse_code(code: &str, asset: &str) -> Result<(usize, [u8; 12]), Error> {
    let re = Regex::new("^[[:alnum:]]{1,12}$").unwrap();
    if !re.is_match(code) {
        return Err(Error::InvalidAssetCode {
            asset: asset.to_string(),
        });
    }
    let mut buf = [0u8; 12];
    buf[..code.len()].copy_from_slice(code.as_bytes());
    Ok((code.len(), buf))
}

fn parse_asset(str: &str) -> Result<Asset, Error> {
    if str == "native" {
        return Ok(Asset::Native);
    }
    let split: Vec<&str> = str.splitn(2, ':').collect();
    if split.len() != 2 {
        return Err(Error::CannotParseAsset {
            asset: str.to_string(),
        });
    }
    let (len, buf) = parse_code(split[0], str)?;
    let issuer: AccountId = split[1].parse()?;
    if len <= 4 {
        let mut asset_code = [0u8; 4];
        asset_code.copy_from_slice(&buf[..4]);
        Ok(Asset::CreditAlphanum4(AlphaNum4 {
            asset_code: AssetCode4(asset_code),
            issuer,
        }))
    } else {
        Ok(Asset::CreditAlphanum12(AlphaNum12 {
            asset_code: AssetCode12(buf),
            issuer,
        }))
    }
}

fn parse_asset_code(str: &str) -> Result<AssetCode, Error> {
    let (len, buf) = parse_code(str, str)?;
    if len <= 4 {
        let mut asset_code = [0u8; 4];
        asset_code.copy_from_slice(&buf[..4]);
        Ok(AssetCode::CreditAlphanum4(AssetCode4(asset_code)))
    } else {
        Ok(AssetCode::CreditAlphanum12(AssetCode12(buf)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::xdr::Limits;

    fn issuer() -> String {
        stellar_strkey::ed25519::PublicKey([3u8; 32]).to_string()
    }

    #[test]
    fn native() {
        let asset: Asset = "native".parse().unwrap();
        assert_eq!(asset, Asset::Native);
        assert_eq!(asset.to_string(), "native");
        assert_eq!(asset.to_xdr(Limits::default()).unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn alphanum4() {
        let s = format!("USDC:{}", issuer());
        let asset: Asset = s.parse().unwrap();
        match &asset {
            Asset::CreditAlphanum4(a) => assert_eq!(&a.asset_code.0, b"USDC"),
            _ => panic!("wrong variant"),
        }
        assert_eq!(asset.to_string(), s);
    }

    #[test]
    fn alphanum12() {
        let s = format!("LONGCODE12:{}", issuer());
        let asset: Asset = s.parse().unwrap();
        match &asset {
            Asset::CreditAlphanum12(a) => {
                assert_eq!(&a.asset_code.0[..10], b"LONGCODE12");
                assert_eq!(&a.asset_code.0[10..], [0, 0]);
            }
            _ => panic!("wrong variant"),
        }
        assert_eq!(asset.to_string(), s);
    }

    #[test]
    fn malformed() {
        assert!(matches!(
            "USDC".parse::<Asset>(),
            Err(Error::CannotParseAsset { .. })
        ));
        assert!(matches!(
            format!("US DC:{}", issuer()).parse::<Asset>(),
            Err(Error::InvalidAssetCode { .. })
        ));
        assert!(matches!(
            format!("WAYTOOLONGCODE:{}", issuer()).parse::<Asset>(),
            Err(Error::InvalidAssetCode { .. })
        ));
        assert!(matches!(
            "USDC:GNOTANISSUER".parse::<Asset>(),
            Err(Error::Account(_))
        ));
    }

    #[test]
    fn asset_round_trip() {
        let asset: Asset = format!("EUR:{}", issuer()).parse().unwrap();
        let bytes = asset.to_xdr(Limits::default()).unwrap();
        let back = Asset::from_xdr(&bytes, Limits::default()).unwrap();
        assert_eq!(back, asset);
    }
}
