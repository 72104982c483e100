use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Error, Limited, ReadXdr, Result, WriteXdr};

/// A 32-byte hash, displayed as lowercase hex.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash(pub [u8; 32]);

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({self})")
    }
}

impl FromStr for Hash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut arr = [0u8; 32];
        hex::decode_to_slice(s, &mut arr)?;
        Ok(Self(arr))
    }
}

impl ReadXdr for Hash {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        Ok(Self(<[u8; 32]>::read_xdr(r)?))
    }
}

impl WriteXdr for Hash {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        self.0.write_xdr(w)
    }
}

impl Serialize for Hash {
    fn serialize<S: serde::Serializer>(&self, s: S) -> core::result::Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A 256-bit value, raw 32 bytes on the wire.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint256(pub [u8; 32]);

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint256({self})")
    }
}

impl From<[u8; 32]> for Uint256 {
    fn from(b: [u8; 32]) -> Self {
        Self(b)
    }
}

impl ReadXdr for Uint256 {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        Ok(Self(<[u8; 32]>::read_xdr(r)?))
    }
}

impl WriteXdr for Uint256 {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        self.0.write_xdr(w)
    }
}

impl Serialize for Uint256 {
    fn serialize<S: serde::Serializer>(&self, s: S) -> core::result::Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Uint256 {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        let mut arr = [0u8; 32];
        hex::decode_to_slice(&s, &mut arr).map_err(serde::de::Error::custom)?;
        Ok(Self(arr))
    }
}

/// An account sequence number.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SequenceNumber(pub i64);

impl From<i64> for SequenceNumber {
    fn from(n: i64) -> Self {
        Self(n)
    }
}

impl ReadXdr for SequenceNumber {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        Ok(Self(i64::read_xdr(r)?))
    }
}

impl WriteXdr for SequenceNumber {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        self.0.write_xdr(w)
    }
}

/// Seconds since the Unix epoch.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimePoint(pub u64);

impl ReadXdr for TimePoint {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        Ok(Self(u64::read_xdr(r)?))
    }
}

impl WriteXdr for TimePoint {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        self.0.write_xdr(w)
    }
}

/// A liquidity pool identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PoolId(pub Hash);

impl ReadXdr for PoolId {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        Ok(Self(Hash::read_xdr(r)?))
    }
}

impl WriteXdr for PoolId {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        self.0.write_xdr(w)
    }
}

/// Reserved extension slot carried by several wire structures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExtensionPoint {
    V0,
}

impl ReadXdr for ExtensionPoint {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            0 => Ok(Self::V0),
            d => Err(Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for ExtensionPoint {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        w.with_limited_depth(|w| match self {
            Self::V0 => 0i32.write_xdr(w),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::xdr::Limits;

    #[test]
    fn hash_hex_round_trip() {
        let h: Hash = "0101010101010101010101010101010101010101010101010101010101010101"
            .parse()
            .unwrap();
        assert_eq!(h, Hash([1u8; 32]));
        assert_eq!(
            h.to_string(),
            "0101010101010101010101010101010101010101010101010101010101010101"
        );
    }

    #[test]
    fn uint256_is_raw_bytes_on_the_wire() {
        let v = Uint256([9u8; 32]);
        let bytes = v.to_xdr(Limits::default()).unwrap();
        assert_eq!(bytes, [9u8; 32]);
    }
}
