use std::io::{Cursor, Read, Write};

use super::{Error, Limited, Limits, Result};

/// Decoding of a value from its XDR form.
pub trait ReadXdr: Sized {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self>;

    /// Reads a value and requires the stream to end with it. Trailing bytes
    /// mean the caller framed the value wrong or the stream is corrupt, and
    /// are rejected rather than silently ignored.
    fn read_xdr_to_end<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        let v = Self::read_xdr(r)?;
        let mut rest = [0u8; 1];
        if r.inner.read(&mut rest)? == 0 {
            Ok(v)
        } else {
            Err(Error::Invalid)
        }
    }

    fn from_xdr(bytes: impl AsRef<[u8]>, limits: Limits) -> Result<Self> {
        let mut r = Limited::new(Cursor::new(bytes.as_ref()), limits);
        Self::read_xdr_to_end(&mut r)
    }

    fn from_xdr_base64(b64: impl AsRef<str>, limits: Limits) -> Result<Self> {
        let bytes = base64::decode(b64.as_ref())?;
        Self::from_xdr(bytes, limits)
    }
}

/// Encoding of a value to its XDR form. Deterministic: equal values always
/// produce identical bytes.
pub trait WriteXdr {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()>;

    fn to_xdr(&self, limits: Limits) -> Result<Vec<u8>> {
        let mut w = Limited::new(Vec::new(), limits);
        self.write_xdr(&mut w)?;
        Ok(w.inner)
    }

    fn to_xdr_base64(&self, limits: Limits) -> Result<String> {
        Ok(base64::encode(self.to_xdr(limits)?))
    }
}

impl ReadXdr for u32 {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        let mut b = [0u8; 4];
        r.consume_len(4)?;
        r.inner.read_exact(&mut b)?;
        Ok(u32::from_be_bytes(b))
    }
}

impl WriteXdr for u32 {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        w.consume_len(4)?;
        w.inner.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl ReadXdr for i32 {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        let mut b = [0u8; 4];
        r.consume_len(4)?;
        r.inner.read_exact(&mut b)?;
        Ok(i32::from_be_bytes(b))
    }
}

impl WriteXdr for i32 {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        w.consume_len(4)?;
        w.inner.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl ReadXdr for u64 {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        let mut b = [0u8; 8];
        r.consume_len(8)?;
        r.inner.read_exact(&mut b)?;
        Ok(u64::from_be_bytes(b))
    }
}

impl WriteXdr for u64 {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        w.consume_len(8)?;
        w.inner.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl ReadXdr for i64 {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        let mut b = [0u8; 8];
        r.consume_len(8)?;
        r.inner.read_exact(&mut b)?;
        Ok(i64::from_be_bytes(b))
    }
}

impl WriteXdr for i64 {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        w.consume_len(8)?;
        w.inner.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl ReadXdr for bool {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        match u32::read_xdr(r)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::Invalid),
        }
    }
}

impl WriteXdr for bool {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        u32::from(*self).write_xdr(w)
    }
}

impl<T: ReadXdr> ReadXdr for Option<T> {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        r.with_limited_depth(|r| match u32::read_xdr(r)? {
            0 => Ok(None),
            1 => Ok(Some(T::read_xdr(r)?)),
            _ => Err(Error::Invalid),
        })
    }
}

impl<T: WriteXdr> WriteXdr for Option<T> {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        w.with_limited_depth(|w| match self {
            None => 0u32.write_xdr(w),
            Some(t) => {
                1u32.write_xdr(w)?;
                t.write_xdr(w)
            }
        })
    }
}

impl<T: ReadXdr> ReadXdr for Box<T> {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        Ok(Box::new(T::read_xdr(r)?))
    }
}

impl<T: WriteXdr> WriteXdr for Box<T> {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        T::write_xdr(self, w)
    }
}

const fn pad_of(len: usize) -> usize {
    (4 - len % 4) % 4
}

impl<const N: usize> ReadXdr for [u8; N] {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> Result<Self> {
        let mut arr = [0u8; N];
        r.consume_len(N)?;
        r.inner.read_exact(&mut arr)?;
        let pad = pad_of(N);
        if pad > 0 {
            let mut p = [0u8; 3];
            r.consume_len(pad)?;
            r.inner.read_exact(&mut p[..pad])?;
            if p[..pad].iter().any(|b| *b != 0) {
                return Err(Error::NonZeroPadding);
            }
        }
        Ok(arr)
    }
}

impl<const N: usize> WriteXdr for [u8; N] {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> Result<()> {
        w.consume_len(N)?;
        w.inner.write_all(self)?;
        let pad = pad_of(N);
        if pad > 0 {
            w.consume_len(pad)?;
            w.inner.write_all(&[0u8; 3][..pad])?;
        }
        Ok(())
    }
}

pub(crate) fn read_padding<R: Read>(r: &mut Limited<R>, len: usize) -> Result<()> {
    let pad = pad_of(len);
    if pad > 0 {
        let mut p = [0u8; 3];
        r.consume_len(pad)?;
        r.inner.read_exact(&mut p[..pad])?;
        if p[..pad].iter().any(|b| *b != 0) {
            return Err(Error::NonZeroPadding);
        }
    }
    Ok(())
}

pub(crate) fn write_padding<W: Write>(w: &mut Limited<W>, len: usize) -> Result<()> {
    let pad = pad_of(len);
    if pad > 0 {
        w.consume_len(pad)?;
        w.inner.write_all(&[0u8; 3][..pad])?;
    }
    Ok(())
}

/// Implements the codec pair for a struct whose fields encode in
/// declaration order.
macro_rules! xdr_struct {
    ($t:ident { $($f:ident),* $(,)? }) => {
        impl $crate::xdr::ReadXdr for $t {
            fn read_xdr<R: std::io::Read>(
                r: &mut $crate::xdr::Limited<R>,
            ) -> $crate::xdr::Result<Self> {
                r.with_limited_depth(|r| {
                    Ok(Self {
                        $($f: $crate::xdr::ReadXdr::read_xdr(r)?,)*
                    })
                })
            }
        }

        impl $crate::xdr::WriteXdr for $t {
            fn write_xdr<W: std::io::Write>(
                &self,
                w: &mut $crate::xdr::Limited<W>,
            ) -> $crate::xdr::Result<()> {
                w.with_limited_depth(|w| {
                    $($crate::xdr::WriteXdr::write_xdr(&self.$f, w)?;)*
                    Ok(())
                })
            }
        }
    };
}
pub(crate) use xdr_struct;

#[cfg(test)]
mod test {
    use super::*;

    fn round_trip<T: ReadXdr + WriteXdr + PartialEq + std::fmt::Debug>(v: &T, hex: &str) {
        let bytes = v.to_xdr(Limits::default()).unwrap();
        assert_eq!(hex::encode(&bytes), hex);
        let back = T::from_xdr(&bytes, Limits::default()).unwrap();
        assert_eq!(&back, v);
    }

    #[test]
    fn ints() {
        round_trip(&5u32, "00000005");
        round_trip(&-1i32, "ffffffff");
        round_trip(&1000i64, "00000000000003e8");
        round_trip(&u64::MAX, "ffffffffffffffff");
    }

    #[test]
    fn bools_and_options() {
        round_trip(&true, "00000001");
        round_trip(&Some(7u32), "0000000100000007");
        round_trip(&None::<u32>, "00000000");
        assert!(matches!(
            bool::from_xdr([0, 0, 0, 2], Limits::default()),
            Err(Error::Invalid)
        ));
    }

    #[test]
    fn fixed_opaque_pads_to_word() {
        round_trip(&[1u8, 2, 3, 4, 5], "0102030405000000");
        assert!(matches!(
            <[u8; 5]>::from_xdr(hex::decode("0102030405000001").unwrap(), Limits::default()),
            Err(Error::NonZeroPadding)
        ));
    }

    #[test]
    fn trailing_bytes_rejected() {
        assert!(matches!(
            u32::from_xdr([0, 0, 0, 1, 0], Limits::default()),
            Err(Error::Invalid)
        ));
    }

    #[test]
    fn byte_budget_enforced() {
        assert!(matches!(
            u64::from_xdr([0u8; 8], Limits::len(4)),
            Err(Error::LengthLimitExceeded)
        ));
    }
}
