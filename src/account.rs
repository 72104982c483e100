//! Account identifiers: plain ed25519 public keys and muxed accounts that
//! carry a routing sub-identifier alongside the base key. String forms are
//! strkeys (`G...` / `M...`); parsing and display go through
//! `stellar-strkey`.

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::xdr::{self, xdr_struct, BytesM, Limited, ReadXdr, Uint256, WriteXdr};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("cannot parse account id: {account_id}")]
    CannotParseAccountId { account_id: String },
    #[error("cannot parse muxed account: {address}")]
    CannotParseMuxedAccount { address: String },
}

const KEY_TYPE_ED25519: i32 = 0;
const KEY_TYPE_MUXED_ED25519: i32 = 0x100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PublicKey {
    PublicKeyTypeEd25519(Uint256),
}

impl ReadXdr for PublicKey {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            KEY_TYPE_ED25519 => Ok(Self::PublicKeyTypeEd25519(Uint256::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for PublicKey {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::PublicKeyTypeEd25519(k) => {
                KEY_TYPE_ED25519.write_xdr(w)?;
                k.write_xdr(w)
            }
        })
    }
}

/// An account identifier: currently always an ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(pub PublicKey);

impl AccountId {
    pub fn ed25519(&self) -> &Uint256 {
        let PublicKey::PublicKeyTypeEd25519(k) = &self.0;
        k
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let PublicKey::PublicKeyTypeEd25519(k) = &self.0;
        fmt::Display::fmt(&stellar_strkey::ed25519::PublicKey(k.0), f)
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({self})")
    }
}

impl FromStr for AccountId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = stellar_strkey::ed25519::PublicKey::from_str(s).map_err(|_| {
            Error::CannotParseAccountId {
                account_id: s.to_string(),
            }
        })?;
        Ok(key.into())
    }
}

impl From<stellar_strkey::ed25519::PublicKey> for AccountId {
    fn from(key: stellar_strkey::ed25519::PublicKey) -> Self {
        AccountId(PublicKey::PublicKeyTypeEd25519(Uint256(key.0)))
    }
}

impl From<&stellar_strkey::ed25519::PublicKey> for AccountId {
    fn from(key: &stellar_strkey::ed25519::PublicKey) -> Self {
        AccountId(PublicKey::PublicKeyTypeEd25519(Uint256(key.0)))
    }
}

impl ReadXdr for AccountId {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        Ok(Self(PublicKey::read_xdr(r)?))
    }
}

impl WriteXdr for AccountId {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        self.0.write_xdr(w)
    }
}

impl Serialize for AccountId {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The muxed form of an ed25519 account: the base key plus a 64-bit
/// sub-account identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MuxedAccountMed25519 {
    pub id: u64,
    pub ed25519: Uint256,
}

xdr_struct!(MuxedAccountMed25519 { id, ed25519 });

/// An account reference as it appears in operations: either a bare ed25519
/// key or a muxed key carrying a sub-account identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MuxedAccount {
    Ed25519(Uint256),
    MuxedEd25519(MuxedAccountMed25519),
}

impl MuxedAccount {
    /// The underlying account id, with any sub-account identifier dropped.
    pub fn account_id(&self) -> AccountId {
        match self {
            Self::Ed25519(k) => AccountId(PublicKey::PublicKeyTypeEd25519(*k)),
            Self::MuxedEd25519(m) => AccountId(PublicKey::PublicKeyTypeEd25519(m.ed25519)),
        }
    }
}

impl fmt::Display for MuxedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ed25519(k) => fmt::Display::fmt(&stellar_strkey::ed25519::PublicKey(k.0), f),
            Self::MuxedEd25519(m) => fmt::Display::fmt(
                &stellar_strkey::ed25519::MuxedAccount {
                    ed25519: m.ed25519.0,
                    id: m.id,
                },
                f,
            ),
        }
    }
}

impl fmt::Debug for MuxedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MuxedAccount({self})")
    }
}

impl FromStr for MuxedAccount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(key) = stellar_strkey::ed25519::PublicKey::from_str(s) {
            return Ok(Self::Ed25519(Uint256(key.0)));
        }
        if let Ok(key) = stellar_strkey::ed25519::MuxedAccount::from_str(s) {
            return Ok(Self::MuxedEd25519(MuxedAccountMed25519 {
                id: key.id,
                ed25519: Uint256(key.ed25519),
            }));
        }
        Err(Error::CannotParseMuxedAccount {
            address: s.to_string(),
        })
    }
}

impl From<AccountId> for MuxedAccount {
    fn from(account_id: AccountId) -> Self {
        let PublicKey::PublicKeyTypeEd25519(k) = account_id.0;
        Self::Ed25519(k)
    }
}

impl From<stellar_strkey::ed25519::PublicKey> for MuxedAccount {
    fn from(key: stellar_strkey::ed25519::PublicKey) -> Self {
        Self::Ed25519(Uint256(key.0))
    }
}

impl From<&stellar_strkey::ed25519::PublicKey> for MuxedAccount {
    fn from(key: &stellar_strkey::ed25519::PublicKey) -> Self {
        Self::Ed25519(Uint256(key.0))
    }
}

impl From<stellar_strkey::ed25519::MuxedAccount> for MuxedAccount {
    fn from(key: stellar_strkey::ed25519::MuxedAccount) -> Self {
        Self::MuxedEd25519(MuxedAccountMed25519 {
            id: key.id,
            ed25519: Uint256(key.ed25519),
        })
    }
}

impl From<&ed25519_dalek::VerifyingKey> for MuxedAccount {
    fn from(key: &ed25519_dalek::VerifyingKey) -> Self {
        Self::Ed25519(Uint256(key.to_bytes()))
    }
}

impl From<ed25519_dalek::VerifyingKey> for MuxedAccount {
    fn from(key: ed25519_dalek::VerifyingKey) -> Self {
        (&key).into()
    }
}

impl From<&ed25519_dalek::SigningKey> for MuxedAccount {
    fn from(key: &ed25519_dalek::SigningKey) -> Self {
        key.verifying_key().into()
    }
}

impl From<ed25519_dalek::SigningKey> for MuxedAccount {
    fn from(key: ed25519_dalek::SigningKey) -> Self {
        key.verifying_key().into()
    }
}

impl ReadXdr for MuxedAccount {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            KEY_TYPE_ED25519 => Ok(Self::Ed25519(Uint256::read_xdr(r)?)),
            KEY_TYPE_MUXED_ED25519 => Ok(Self::MuxedEd25519(MuxedAccountMed25519::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for MuxedAccount {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::Ed25519(k) => {
                KEY_TYPE_ED25519.write_xdr(w)?;
                k.write_xdr(w)
            }
            Self::MuxedEd25519(m) => {
                KEY_TYPE_MUXED_ED25519.write_xdr(w)?;
                m.write_xdr(w)
            }
        })
    }
}

impl Serialize for MuxedAccount {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MuxedAccount {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Account master-weight/threshold bytes: master, low, medium, high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Thresholds(pub [u8; 4]);

impl ReadXdr for Thresholds {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        Ok(Self(<[u8; 4]>::read_xdr(r)?))
    }
}

impl WriteXdr for Thresholds {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        self.0.write_xdr(w)
    }
}

const SIGNER_KEY_TYPE_ED25519: i32 = 0;
const SIGNER_KEY_TYPE_PRE_AUTH_TX: i32 = 1;
const SIGNER_KEY_TYPE_HASH_X: i32 = 2;
const SIGNER_KEY_TYPE_ED25519_SIGNED_PAYLOAD: i32 = 3;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SignerKeyEd25519SignedPayload {
    pub ed25519: Uint256,
    pub payload: BytesM<64>,
}

xdr_struct!(SignerKeyEd25519SignedPayload { ed25519, payload });

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SignerKey {
    Ed25519(Uint256),
    PreAuthTx(Uint256),
    HashX(Uint256),
    Ed25519SignedPayload(SignerKeyEd25519SignedPayload),
}

impl ReadXdr for SignerKey {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            SIGNER_KEY_TYPE_ED25519 => Ok(Self::Ed25519(Uint256::read_xdr(r)?)),
            SIGNER_KEY_TYPE_PRE_AUTH_TX => Ok(Self::PreAuthTx(Uint256::read_xdr(r)?)),
            SIGNER_KEY_TYPE_HASH_X => Ok(Self::HashX(Uint256::read_xdr(r)?)),
            SIGNER_KEY_TYPE_ED25519_SIGNED_PAYLOAD => Ok(Self::Ed25519SignedPayload(
                SignerKeyEd25519SignedPayload::read_xdr(r)?,
            )),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for SignerKey {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::Ed25519(k) => {
                SIGNER_KEY_TYPE_ED25519.write_xdr(w)?;
                k.write_xdr(w)
            }
            Self::PreAuthTx(k) => {
                SIGNER_KEY_TYPE_PRE_AUTH_TX.write_xdr(w)?;
                k.write_xdr(w)
            }
            Self::HashX(k) => {
                SIGNER_KEY_TYPE_HASH_X.write_xdr(w)?;
                k.write_xdr(w)
            }
            Self::Ed25519SignedPayload(p) => {
                SIGNER_KEY_TYPE_ED25519_SIGNED_PAYLOAD.write_xdr(w)?;
                p.write_xdr(w)
            }
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Signer {
    pub key: SignerKey,
    pub weight: u32,
}

xdr_struct!(Signer { key, weight });

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum AccountFlags {
    RequiredFlag = 1,
    RevocableFlag = 2,
    ImmutableFlag = 4,
    ClawbackEnabledFlag = 8,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::xdr::Limits;

    #[test]
    fn account_id_strkey_round_trip() {
        let key = stellar_strkey::ed25519::PublicKey([7u8; 32]);
        let s = key.to_string();
        let account: AccountId = s.parse().unwrap();
        assert_eq!(account.ed25519().0, [7u8; 32]);
        assert_eq!(account.to_string(), s);
    }

    #[test]
    fn muxed_account_strkey_round_trip() {
        let addr = "MA3D5KRYM6CB7OWQ6TWYRR3Z4T7GNZLKERYNZGGA5SOAOPIFY6YQGAAAAAAAAAPCICBKU";
        let account: MuxedAccount = addr.parse().unwrap();
        assert!(matches!(account, MuxedAccount::MuxedEd25519(_)));
        assert_eq!(account.to_string(), addr);
    }

    #[test]
    fn malformed_address_rejected() {
        let err = "not-an-address".parse::<MuxedAccount>().unwrap_err();
        assert!(matches!(err, Error::CannotParseMuxedAccount { .. }));
        assert!("not-an-address".parse::<AccountId>().is_err());
    }

    #[test]
    fn muxed_wire_form() {
        let account = MuxedAccount::Ed25519(Uint256([1u8; 32]));
        let bytes = account.to_xdr(Limits::default()).unwrap();
        assert_eq!(bytes.len(), 36);
        assert_eq!(&bytes[..4], [0, 0, 0, 0]);

        let muxed = MuxedAccount::MuxedEd25519(MuxedAccountMed25519 {
            id: 2,
            ed25519: Uint256([1u8; 32]),
        });
        let bytes = muxed.to_xdr(Limits::default()).unwrap();
        assert_eq!(bytes.len(), 48);
        // KEY_TYPE_MUXED_ED25519 then the 64-bit id
        assert_eq!(&bytes[..12], [0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2]);
        let back = MuxedAccount::from_xdr(&bytes, Limits::default()).unwrap();
        assert_eq!(back, muxed);
    }

    #[test]
    fn account_id_drops_the_mux() {
        let muxed = MuxedAccount::MuxedEd25519(MuxedAccountMed25519 {
            id: 9,
            ed25519: Uint256([5u8; 32]),
        });
        assert_eq!(muxed.account_id().ed25519().0, [5u8; 32]);
    }
}
