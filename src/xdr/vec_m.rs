use std::io::{Read, Write};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::{Error, Limited, ReadXdr, Result, WriteXdr};

/// A variable-length sequence with a type-level maximum element count.
///
/// This is the wire protocol's bounded list. The bound is enforced at every
/// boundary: growing the collection, converting from unbounded containers,
/// and reading a count prefix off the wire. A count prefix over the bound is
/// rejected before any element is read or memory reserved.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VecM<T, const MAX: u32 = { u32::MAX }>(Vec<T>);

impl<T, const MAX: u32> Default for VecM<T, MAX> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T, const MAX: u32> VecM<T, MAX> {
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

    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    /// Appends an element. Fails when the list is already at its maximum
    /// length; the bound is checked before any mutation, so a failed append
    /// leaves the list untouched.
    pub fn push(&mut self, t: T) -> Result<()> {
        if self.0.len() >= Self::MAX_LEN {
            return Err(Error::Overflow { max: MAX });
        }
        self.0.push(t);
        Ok(())
    }
}

impl<T: Clone, const MAX: u32> VecM<T, MAX> {
    pub fn to_vec(&self) -> Vec<T> {
        self.0.clone()
    }
}

impl<T, const MAX: u32> Deref for VecM<T, MAX> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T, const MAX: u32> AsRef<[T]> for VecM<T, MAX> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const MAX: u32> TryFrom<Vec<T>> for VecM<T, MAX> {
    type Error = Error;

    fn try_from(v: Vec<T>) -> Result<Self> {
        if v.len() > Self::MAX_LEN {
            return Err(Error::Overflow { max: MAX });
        }
        Ok(Self(v))
    }
}

impl<T: Clone, const MAX: u32> TryFrom<&[T]> for VecM<T, MAX> {
    type Error = Error;

    fn try_from(v: &[T]) -> Result<Self> {
        v.to_vec().try_into()
    }
}

impl<T, const MAX: u32, const N: usize> TryFrom<[T; N]> for VecM<T, MAX> {
    type Error = Error;

    fn try_from(v: [T; N]) -> Result<Self> {
        Vec::from(v).try_into()
    }
}

impl<T, const MAX: u32> From<VecM<T, MAX>> for Vec<T> {
    fn from(v: VecM<T, MAX>) -> Self {
        v.0
    }
}

impl<T, const MAX: u32> IntoIterator for VecM<T, MAX> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const MAX: u32> IntoIterator for &'a VecM<T, MAX> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: ReadXdr, const MAX: u32> ReadXdr for VecM<T, MAX> {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        r.with_limited_depth(|r| {
            let len = u32::read_xdr(r)?;
            if len > MAX {
                tracing::debug!(len, max = MAX, "rejecting oversized sequence");
                return Err(Error::LengthExceedsMax { len, max: MAX });
            }
            // Elements are read one at a time so a lying count prefix can
            // never drive an allocation; a short stream fails on read.
            let mut vec = Vec::new();
            for _ in 0..len {
                vec.push(T::read_xdr(r)?);
            }
            Ok(Self(vec))
        })
    }
}

impl<T: WriteXdr, const MAX: u32> WriteXdr for VecM<T, MAX> {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        w.with_limited_depth(|w| {
            let len = u32::try_from(self.0.len()).map_err(|_| Error::Overflow { max: MAX })?;
            len.write_xdr(w)?;
            for t in &self.0 {
                t.write_xdr(w)?;
            }
            Ok(())
        })
    }
}

impl<T: Serialize, const MAX: u32> Serialize for VecM<T, MAX> {
    fn serialize<S: serde::Serializer>(&self, s: S) -> core::result::Result<S::Ok, S::Error> {
        self.0.serialize(s)
    }
}

impl<'de, T: Deserialize<'de>, const MAX: u32> Deserialize<'de> for VecM<T, MAX> {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> core::result::Result<Self, D::Error> {
        let v = Vec::<T>::deserialize(d)?;
        v.try_into().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::xdr::Limits;

    #[test]
    fn empty_is_zero_length_and_encodable() {
        let v: VecM<u32, 3> = VecM::default();
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
        assert_eq!(v.to_xdr(Limits::default()).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn push_checks_bound_before_mutation() {
        let mut v: VecM<u32, 2> = VecM::default();
        v.push(1).unwrap();
        v.push(2).unwrap();
        let err = v.push(3).unwrap_err();
        assert!(matches!(err, Error::Overflow { max: 2 }));
        assert_eq!(v.as_slice(), [1, 2]);
    }

    #[test]
    fn try_from_over_bound_fails() {
        let res: Result<VecM<u32, 2>> = vec![1, 2, 3].try_into();
        assert!(matches!(res, Err(Error::Overflow { max: 2 })));
    }

    #[test]
    fn round_trip() {
        let v: VecM<u32, 8> = vec![7, 8, 9].try_into().unwrap();
        let bytes = v.to_xdr(Limits::default()).unwrap();
        assert_eq!(
            hex::encode(&bytes),
            "00000003000000070000000800000009"
        );
        let back = VecM::<u32, 8>::from_xdr(&bytes, Limits::default()).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn oversized_count_prefix_rejected() {
        // count=4 over a max of 3, with enough trailing bytes for 4 elements
        let mut bytes = vec![0, 0, 0, 4];
        bytes.extend_from_slice(&[0u8; 16]);
        let res = VecM::<u32, 3>::from_xdr(&bytes, Limits::default());
        assert!(matches!(res, Err(Error::LengthExceedsMax { len: 4, max: 3 })));
    }

    #[test]
    fn short_stream_fails() {
        let bytes = [0, 0, 0, 2, 0, 0, 0, 1];
        let res = VecM::<u32, 8>::from_xdr(bytes, Limits::default());
        assert!(matches!(res, Err(Error::Io(_))));
    }
}
