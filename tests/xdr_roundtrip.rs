use stellar_base::account::{MuxedAccount, MuxedAccountMed25519};
use stellar_base::asset::Asset;
use stellar_base::claim::{ClaimPredicate, Claimant};
use stellar_base::operation::{build, OperationList, MAX_OPS_PER_TX};
use stellar_base::xdr::{Error, Limits, ReadXdr, Uint256, VecM, WriteXdr};
use stellar_base::{Operation, OperationMetaList, MAX_OPS_META_PER_TX};

fn address(byte: u8) -> String {
    stellar_strkey::ed25519::PublicKey([byte; 32]).to_string()
}

fn muxed(byte: u8) -> MuxedAccount {
    address(byte).parse().unwrap()
}

fn usdc() -> Asset {
    format!("USDC:{}", address(9)).parse().unwrap()
}

#[test]
fn list_maxima_are_the_protocol_constants() {
    assert_eq!(OperationList::max_len(), MAX_OPS_PER_TX as usize);
    assert_eq!(OperationMetaList::max_len(), MAX_OPS_META_PER_TX as usize);
}

#[test]
fn empty_list_encodes_to_a_zero_count() {
    let list = OperationList::default();
    assert_eq!(list.to_xdr_base64(Limits::default()).unwrap(), "AAAAAA==");
    let back =
        OperationList::from_xdr_base64("AAAAAA==", Limits::default()).unwrap();
    assert!(back.is_empty());
    assert_eq!(back, list);
}

#[test]
fn operation_list_round_trips_in_order() {
    let ops = vec![
        Operation::new(build::Payment::new(muxed(1), usdc(), 123)),
        Operation::with_source(muxed(2), build::AccountMerge::new(muxed(3))),
        Operation::new(
            build::ManageData::new("config")
                .unwrap()
                .set_data_value(b"v1")
                .unwrap(),
        ),
        Operation::new(
            build::CreateClaimableBalance::new(usdc(), 77)
                .add_claimant(Claimant::new(
                    address(4).parse().unwrap(),
                    ClaimPredicate::Not(Some(Box::new(ClaimPredicate::BeforeRelativeTime(60)))),
                ))
                .unwrap(),
        ),
        Operation::new(
            build::PathPaymentStrictReceive::new(muxed(5), Asset::Native, 50, usdc(), 10)
                .add_path_asset(usdc())
                .unwrap(),
        ),
        Operation::new(build::EndSponsoringFutureReserves::new()),
    ];
    let list: OperationList = ops.clone().try_into().unwrap();

    let bytes = list.to_xdr(Limits::default()).unwrap();
    let back = OperationList::from_xdr(&bytes, Limits::default()).unwrap();

    assert_eq!(back, list);
    assert_eq!(back.len(), ops.len());
    // encoding is deterministic
    assert_eq!(bytes, list.to_xdr(Limits::default()).unwrap());
}

#[test]
fn full_list_accepts_no_more() {
    let op = Operation::new(build::Inflation::new());
    let mut list = OperationList::default();
    for _ in 0..MAX_OPS_PER_TX {
        list.push(op.clone()).unwrap();
    }
    let err = list.push(op).unwrap_err();
    assert!(matches!(err, Error::Overflow { max: MAX_OPS_PER_TX }));
    assert_eq!(list.len(), MAX_OPS_PER_TX as usize);

    let res: Result<OperationList, _> =
        vec![Operation::new(build::Inflation::new()); 101].try_into();
    assert!(matches!(res, Err(Error::Overflow { .. })));
}

#[test]
fn oversized_declared_count_is_a_protocol_violation() {
    // count prefix of 101 followed by enough bytes for many unit operations
    let mut bytes = vec![0, 0, 0, 101];
    for _ in 0..101 {
        // no source account, inflation body
        bytes.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 9]);
    }
    let res = OperationList::from_xdr(&bytes, Limits::default());
    assert!(matches!(
        res,
        Err(Error::LengthExceedsMax { len: 101, max: MAX_OPS_PER_TX })
    ));
}

#[test]
fn unknown_operation_discriminant_rejected() {
    // no source account, then discriminant 99
    let bytes = [0, 0, 0, 0, 0, 0, 0, 99];
    let res = Operation::from_xdr(bytes, Limits::default());
    assert!(matches!(res, Err(Error::UnknownDiscriminant(99))));
}

#[test]
fn trailing_bytes_rejected() {
    let op = Operation::new(build::Inflation::new());
    let mut bytes = op.to_xdr(Limits::default()).unwrap();
    bytes.push(0);
    assert!(matches!(
        Operation::from_xdr(&bytes, Limits::default()),
        Err(Error::Invalid)
    ));
}

#[test]
fn payment_known_bytes() {
    let destination = MuxedAccount::Ed25519(Uint256([0x11; 32]));
    let op = Operation::new(build::Payment::new(destination, Asset::Native, 1000));
    let bytes = op.to_xdr(Limits::default()).unwrap();
    let expected = format!(
        "00000000000000010000000011{}0000000000000000000003e8",
        "11".repeat(31)
    );
    assert_eq!(hex::encode(&bytes), expected);
    let back = Operation::from_xdr(&bytes, Limits::default()).unwrap();
    assert_eq!(back, op);
}

#[test]
fn account_merge_known_bytes() {
    let destination = MuxedAccount::MuxedEd25519(MuxedAccountMed25519 {
        id: 1,
        ed25519: Uint256([0x22; 32]),
    });
    let op = Operation::new(build::AccountMerge::new(destination));
    let bytes = op.to_xdr(Limits::default()).unwrap();
    let expected = format!(
        "000000000000000800000100000000000000000122{}",
        "22".repeat(31)
    );
    assert_eq!(hex::encode(&bytes), expected);
}

#[test]
fn unit_bodies_carry_no_payload_bytes() {
    let op = Operation::new(build::EndSponsoringFutureReserves::new());
    let bytes = op.to_xdr(Limits::default()).unwrap();
    // optional-source flag and the discriminant, nothing else
    assert_eq!(hex::encode(&bytes), "0000000000000011");
}

#[test]
fn path_is_bounded_at_five_hops() {
    let mut builder =
        build::PathPaymentStrictReceive::new(muxed(1), Asset::Native, 50, usdc(), 10);
    for _ in 0..5 {
        builder = builder.add_path_asset(usdc()).unwrap();
    }
    assert!(matches!(
        builder.add_path_asset(usdc()),
        Err(Error::Overflow { max: 5 })
    ));
}

#[test]
fn operations_serialize_addresses_as_strkeys() {
    let op = Operation::with_source(muxed(2), build::Payment::new(muxed(1), Asset::Native, 5));
    let json = serde_json::to_value(&op).unwrap();
    assert_eq!(json["source_account"], address(2));
    assert_eq!(json["body"]["Payment"]["destination"], address(1));

    let back: Operation = serde_json::from_value(json).unwrap();
    assert_eq!(back, op);
}

#[test]
fn json_cannot_smuggle_an_oversized_list() {
    let over: Vec<u32> = (0..4).collect();
    let json = serde_json::to_string(&over).unwrap();
    let res: Result<VecM<u32, 3>, _> = serde_json::from_str(&json);
    assert!(res.is_err());
}
