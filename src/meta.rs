//! Per-operation execution metadata, decoded from ledger responses. Clients
//! never construct these by hand; they arrive on the wire after a
//! transaction is applied and report what each operation changed.

use serde::{Deserialize, Serialize};

use crate::ledger::LedgerEntryChanges;
use crate::xdr::{xdr_struct, VecM};

/// Maximum metadata entries reported per transaction. Metadata is produced
/// one entry per applied operation, but the bound is declared independently
/// of [`crate::operation::MAX_OPS_PER_TX`] so the two can be versioned
/// apart by the protocol.
pub const MAX_OPS_META_PER_TX: u32 = 100;

/// The effects one applied operation had on the ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OperationMeta {
    pub changes: LedgerEntryChanges,
}

xdr_struct!(OperationMeta { changes });

/// Execution metadata for every operation of an applied transaction, in
/// the same order the operations executed.
pub type OperationMetaList = VecM<OperationMeta, { MAX_OPS_META_PER_TX }>;

#[cfg(test)]
mod test {
    use super::*;
    use crate::xdr::{Error, Limits, ReadXdr, WriteXdr};

    #[test]
    fn list_maximum_is_the_protocol_constant() {
        assert_eq!(OperationMetaList::max_len(), MAX_OPS_META_PER_TX as usize);
    }

    #[test]
    fn empty_meta_round_trips() {
        let meta = OperationMeta::default();
        let bytes = meta.to_xdr(Limits::default()).unwrap();
        // a single zero count for the empty change list
        assert_eq!(bytes, [0, 0, 0, 0]);
        let back = OperationMeta::from_xdr(&bytes, Limits::default()).unwrap();
        assert_eq!(back, meta);
    }

    #[test]
    fn oversized_meta_count_rejected() {
        let mut bytes = vec![0, 0, 0, 101];
        bytes.extend_from_slice(&[0u8; 8]);
        let res = OperationMetaList::from_xdr(&bytes, Limits::default());
        assert!(matches!(
            res,
            Err(Error::LengthExceedsMax { len: 101, max: 100 })
        ));
    }
}
