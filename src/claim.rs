//! Claimable-balance wire types: balance identifiers, claimants, and the
//! recursive predicate language that gates a claim.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::xdr::{self, xdr_struct, Hash, Limited, ReadXdr, VecM, WriteXdr};

const CLAIMABLE_BALANCE_ID_TYPE_V0: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClaimableBalanceId {
    ClaimableBalanceIdTypeV0(Hash),
}

impl ReadXdr for ClaimableBalanceId {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            CLAIMABLE_BALANCE_ID_TYPE_V0 => Ok(Self::ClaimableBalanceIdTypeV0(Hash::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for ClaimableBalanceId {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::ClaimableBalanceIdTypeV0(h) => {
                CLAIMABLE_BALANCE_ID_TYPE_V0.write_xdr(w)?;
                h.write_xdr(w)
            }
        })
    }
}

const CLAIM_PREDICATE_UNCONDITIONAL: i32 = 0;
const CLAIM_PREDICATE_AND: i32 = 1;
const CLAIM_PREDICATE_OR: i32 = 2;
const CLAIM_PREDICATE_NOT: i32 = 3;
const CLAIM_PREDICATE_BEFORE_ABSOLUTE_TIME: i32 = 4;
const CLAIM_PREDICATE_BEFORE_RELATIVE_TIME: i32 = 5;

/// When a claimable balance may be claimed. And/or take at most two
/// sub-predicates; decoding relies on the read depth budget to stop
/// hostile nesting.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClaimPredicate {
    Unconditional,
    And(VecM<ClaimPredicate, 2>),
    Or(VecM<ClaimPredicate, 2>),
    Not(Option<Box<ClaimPredicate>>),
    BeforeAbsoluteTime(i64),
    BeforeRelativeTime(i64),
}

impl ReadXdr for ClaimPredicate {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            CLAIM_PREDICATE_UNCONDITIONAL => Ok(Self::Unconditional),
            CLAIM_PREDICATE_AND => Ok(Self::And(VecM::read_xdr(r)?)),
            CLAIM_PREDICATE_OR => Ok(Self::Or(VecM::read_xdr(r)?)),
            CLAIM_PREDICATE_NOT => Ok(Self::Not(Option::read_xdr(r)?)),
            CLAIM_PREDICATE_BEFORE_ABSOLUTE_TIME => Ok(Self::BeforeAbsoluteTime(i64::read_xdr(r)?)),
            CLAIM_PREDICATE_BEFORE_RELATIVE_TIME => Ok(Self::BeforeRelativeTime(i64::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for ClaimPredicate {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::Unconditional => CLAIM_PREDICATE_UNCONDITIONAL.write_xdr(w),
            Self::And(ps) => {
                CLAIM_PREDICATE_AND.write_xdr(w)?;
                ps.write_xdr(w)
            }
            Self::Or(ps) => {
                CLAIM_PREDICATE_OR.write_xdr(w)?;
                ps.write_xdr(w)
            }
            Self::Not(p) => {
                CLAIM_PREDICATE_NOT.write_xdr(w)?;
                p.write_xdr(w)
            }
            Self::BeforeAbsoluteTime(t) => {
                CLAIM_PREDICATE_BEFORE_ABSOLUTE_TIME.write_xdr(w)?;
                t.write_xdr(w)
            }
            Self::BeforeRelativeTime(t) => {
                CLAIM_PREDICATE_BEFORE_RELATIVE_TIME.write_xdr(w)?;
                t.write_xdr(w)
            }
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClaimantV0 {
    pub destination: AccountId,
    pub predicate: ClaimPredicate,
}

xdr_struct!(ClaimantV0 {
    destination,
    predicate,
});

const CLAIMANT_TYPE_V0: i32 = 0;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Claimant {
    ClaimantTypeV0(ClaimantV0),
}

impl Claimant {
    pub fn new(destination: AccountId, predicate: ClaimPredicate) -> Self {
        Self::ClaimantTypeV0(ClaimantV0 {
            destination,
            predicate,
        })
    }
}

impl ReadXdr for Claimant {
    fn read_xdr<R: Read>(r: &mut Limited<R>) -> xdr::Result<Self> {
        r.with_limited_depth(|r| match i32::read_xdr(r)? {
            CLAIMANT_TYPE_V0 => Ok(Self::ClaimantTypeV0(ClaimantV0::read_xdr(r)?)),
            d => Err(xdr::Error::UnknownDiscriminant(d)),
        })
    }
}

impl WriteXdr for Claimant {
    fn write_xdr<W: Write>(&self, w: &mut Limited<W>) -> xdr::Result<()> {
        w.with_limited_depth(|w| match self {
            Self::ClaimantTypeV0(c) => {
                CLAIMANT_TYPE_V0.write_xdr(w)?;
                c.write_xdr(w)
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::xdr::{Error, Limits, WriteXdr};

    #[test]
    fn predicate_round_trip() {
        let p = ClaimPredicate::And(
            vec![
                ClaimPredicate::BeforeAbsoluteTime(1_700_000_000),
                ClaimPredicate::Not(Some(Box::new(ClaimPredicate::BeforeRelativeTime(3600)))),
            ]
            .try_into()
            .unwrap(),
        );
        let bytes = p.to_xdr(Limits::default()).unwrap();
        let back = ClaimPredicate::from_xdr(&bytes, Limits::default()).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn and_arity_is_bounded() {
        let res: Result<VecM<ClaimPredicate, 2>, _> = vec![
            ClaimPredicate::Unconditional,
            ClaimPredicate::Unconditional,
            ClaimPredicate::Unconditional,
        ]
        .try_into();
        assert!(matches!(res, Err(Error::Overflow { max: 2 })));
    }

    #[test]
    fn nesting_bomb_hits_depth_budget() {
        // 600 levels of NOT(present) followed by UNCONDITIONAL; the default
        // depth budget gives out long before the stream does
        let mut bytes = Vec::new();
        for _ in 0..600 {
            bytes.extend_from_slice(&[0, 0, 0, 3, 0, 0, 0, 1]);
        }
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        let res = ClaimPredicate::from_xdr(&bytes, Limits::default());
        assert!(matches!(res, Err(Error::DepthLimitExceeded)));
    }

    #[test]
    fn unknown_predicate_tag_rejected() {
        let res = ClaimPredicate::from_xdr([0, 0, 0, 9], Limits::default());
        assert!(matches!(res, Err(Error::UnknownDiscriminant(9))));
    }
}
