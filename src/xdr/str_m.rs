use std::fmt;
use std::io::{Read, Write};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::codec::{read_padding, write_padding};
use super::{Error, Limited, ReadXdr, Result, WriteXdr};

/// A variable-length byte string with a type-level maximum length
/// (`opaque<n>` on the wire). Padded to 4-byte alignment; padding must be
/// zero on decode.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BytesM<const MAX: u32 = { u32::MAX }>(Vec<u8>);

impl<const MAX: u32> BytesM<MAX> {
    pub const MAX_LEN: usize = MAX as usize;

    pub const fn max_len() -> usize {
        MAX as usize
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        bytes.try_into()
    }
}

impl<const MAX: u32> fmt::Display for BytesM<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl<const MAX: u32> fmt::Debug for BytesM<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BytesM({self})")
    }
}

impl<const MAX: u32> Deref for BytesM<MAX> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const MAX: u32> AsRef<[u8]> for BytesM<MAX> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const MAX: u32> TryFrom<Vec<u8>> for BytesM<MAX> {
    type Error = Error;

    fn try_from(v: Vec<u8>) -> Result<Self> {
        if v.len() > Self::MAX_LEN {
            return Err(Error::Overflow { max: MAX });
        }
        Ok(Self(v))
    }
}

impl<const MAX: u32> TryFrom<&[u8]> for BytesM<MAX> {
    type Error = Error;

    fn try_from(v: &[u8]) -> Result<Self> {
        v.to_vec().try_into()
    }
}

impl<const MAX: u32> FromStr for BytesM<MAX> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl<const MAX: u32> ReadXdr for BytesM<MAX> {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        let len = u32::read_xdr(r)?;
        if len > MAX {
            tracing::debug!(len, max = MAX, "rejecting oversized opaque");
            return Err(Error::LengthExceedsMax { len, max: MAX });
        }
        let len = len as usize;
        r.consume_len(len)?;
        let mut vec = vec![0u8; len];
        r.inner.read_exact(&mut vec)?;
        read_padding(r, len)?;
        Ok(Self(vec))
    }
}

impl<const MAX: u32> WriteXdr for BytesM<MAX> {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        let len = u32::try_from(self.0.len()).map_err(|_| Error::Overflow { max: MAX })?;
        len.write_xdr(w)?;
        w.consume_len(self.0.len())?;
        w.inner.write_all(&self.0)?;
        write_padding(w, self.0.len())
    }
}

impl<const MAX: u32> Serialize for BytesM<MAX> {
    fn serialize<S: serde::Serializer>(&self, s: S) -> core::result::Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de, const MAX: u32> Deserialize<'de> for BytesM<MAX> {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// A variable-length string with a type-level maximum length (`string<n>`
/// on the wire). Stored as raw bytes; the protocol does not require UTF-8,
/// so conversion to `str` is fallible and explicit.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringM<const MAX: u32 = { u32::MAX }>(Vec<u8>);

impl<const MAX: u32> StringM<MAX> {
    pub const MAX_LEN: usize = MAX as usize;

    pub const fn max_len() -> usize {
        MAX as usize
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    pub fn to_utf8_string(&self) -> Result<String> {
        let s = core::str::from_utf8(&self.0)?;
        Ok(s.to_owned())
    }

    pub fn to_utf8_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

impl<const MAX: u32> fmt::Display for StringM<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_utf8_string_lossy())
    }
}

impl<const MAX: u32> fmt::Debug for StringM<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringM({self})")
    }
}

impl<const MAX: u32> Deref for StringM<MAX> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const MAX: u32> TryFrom<Vec<u8>> for StringM<MAX> {
    type Error = Error;

    fn try_from(v: Vec<u8>) -> Result<Self> {
        if v.len() > Self::MAX_LEN {
            return Err(Error::Overflow { max: MAX });
        }
        Ok(Self(v))
    }
}

impl<const MAX: u32> TryFrom<&str> for StringM<MAX> {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.as_bytes().to_vec().try_into()
    }
}

impl<const MAX: u32> FromStr for StringM<MAX> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.try_into()
    }
}

impl<const MAX: u32> ReadXdr for StringM<MAX> {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        let len = u32::read_xdr(r)?;
        if len > MAX {
            tracing::debug!(len, max = MAX, "rejecting oversized string");
            return Err(Error::LengthExceedsMax { len, max: MAX });
        }
        let len = len as usize;
        r.consume_len(len)?;
        let mut vec = vec![0u8; len];
        r.inner.read_exact(&mut vec)?;
        read_padding(r, len)?;
        Ok(Self(vec))
    }
}

impl<const MAX: u32> WriteXdr for StringM<MAX> {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        let len = u32::try_from(self.0.len()).map_err(|_| Error::Overflow { max: MAX })?;
        len.write_xdr(w)?;
        w.consume_len(self.0.len())?;
        w.inner.write_all(&self.0)?;
        write_padding(w, self.0.len())
    }
}

impl<const MAX: u32> Serialize for StringM<MAX> {
    fn serialize<S: serde::Serializer>(&self, s: S) -> core::result::Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de, const MAX: u32> Deserialize<'de> for StringM<MAX> {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.as_str().try_into().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::xdr::Limits;

    #[test]
    fn string_at_and_over_bound() {
        assert!(StringM::<4>::from_str("abcd").is_ok());
        assert!(matches!(
            StringM::<4>::from_str("abcde"),
            Err(Error::Overflow { max: 4 })
        ));
    }

    #[test]
    fn string_round_trip_with_padding() {
        let s = StringM::<32>::from_str("stellar").unwrap();
        let bytes = s.to_xdr(Limits::default()).unwrap();
        // 7 bytes of content, one zero pad byte
        assert_eq!(hex::encode(&bytes), "000000077374656c6c617200");
        let back = StringM::<32>::from_xdr(&bytes, Limits::default()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn nonzero_padding_rejected() {
        let bytes = hex::decode("000000077374656c6c617201").unwrap();
        assert!(matches!(
            StringM::<32>::from_xdr(&bytes, Limits::default()),
            Err(Error::NonZeroPadding)
        ));
    }

    #[test]
    fn bytes_hex_display_and_parse() {
        let b = BytesM::<8>::from_hex("deadbeef").unwrap();
        assert_eq!(b.to_string(), "deadbeef");
        assert_eq!(b.len(), 4);
        assert!(matches!(
            BytesM::<2>::from_hex("deadbeef"),
            Err(Error::Overflow { max: 2 })
        ));
    }

    #[test]
    fn oversized_declared_length_rejected() {
        let bytes = hex::decode("00000041").unwrap();
        assert!(matches!(
            BytesM::<64>::from_xdr(&bytes, Limits::default()),
            Err(Error::LengthExceedsMax { len: 65, max: 64 })
        ));
    }
}
