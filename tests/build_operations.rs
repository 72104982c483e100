use stellar_base::account::{AccountId, MuxedAccount, Signer, SignerKey};
use stellar_base::asset::{Asset, AssetCode, ChangeTrustAsset, Price};
use stellar_base::claim::{ClaimPredicate, ClaimableBalanceId, Claimant};
use stellar_base::ledger::{LedgerKey, LedgerKeyAccount};
use stellar_base::operation::{build, OperationBody, ThresholdLevel};
use stellar_base::xdr::{Hash, PoolId, Uint256};
use stellar_base::Operation;

fn address(byte: u8) -> String {
    stellar_strkey::ed25519::PublicKey([byte; 32]).to_string()
}

fn account(byte: u8) -> AccountId {
    address(byte).parse().unwrap()
}

fn muxed(byte: u8) -> MuxedAccount {
    address(byte).parse().unwrap()
}

fn usdc() -> Asset {
    format!("USDC:{}", address(9)).parse().unwrap()
}

#[test]
fn account_merge_with_same_source_and_destination() {
    let addr = address(0x20);
    let source: MuxedAccount = addr.parse().unwrap();
    let destination: MuxedAccount = addr.parse().unwrap();

    let op = Operation::with_source(source, build::AccountMerge::new(destination));

    assert!(op.is_ready());
    assert_eq!(op.threshold(), ThresholdLevel::High);
    match op.body() {
        OperationBody::AccountMerge(dest) => assert_eq!(dest, &destination),
        body => panic!("unexpected body {body:?}"),
    }
    assert_eq!(op.source_account, Some(destination));
}

#[test]
fn end_sponsoring_future_reserves_with_only_a_source() {
    let op = Operation::with_source(muxed(0x21), build::EndSponsoringFutureReserves::new());

    assert!(op.is_ready());
    assert_eq!(op.threshold(), ThresholdLevel::Medium);
    assert!(matches!(
        op.body(),
        OperationBody::EndSponsoringFutureReserves
    ));
}

#[test]
fn every_kind_builds_ready_with_its_fixed_threshold() {
    let pool = PoolId(Hash([8u8; 32]));
    let balance_id = ClaimableBalanceId::ClaimableBalanceIdTypeV0(Hash([6u8; 32]));
    let cases: Vec<(Operation, ThresholdLevel)> = vec![
        (
            Operation::new(build::CreateAccount::new(account(1), None)),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(build::Payment::new(muxed(1), usdc(), 100)),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(
                build::PathPaymentStrictReceive::new(muxed(1), Asset::Native, 50, usdc(), 10)
                    .add_path_asset(usdc())
                    .unwrap(),
            ),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(build::ManageSellOffer::new(
                Asset::Native,
                usdc(),
                100,
                Price { n: 1, d: 2 },
            )),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(build::CreatePassiveSellOffer::new(
                Asset::Native,
                usdc(),
                100,
                Price { n: 3, d: 1 },
            )),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(
                build::SetOptions::new()
                    .set_master_weight(10)
                    .set_home_domain("example.com".parse().unwrap())
                    .set_signer(Signer {
                        key: SignerKey::Ed25519(Uint256([2u8; 32])),
                        weight: 1,
                    }),
            ),
            ThresholdLevel::High,
        ),
        (
            Operation::new(build::ChangeTrust::new(
                ChangeTrustAsset::from(usdc()),
                i64::MAX,
            )),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(
                build::AllowTrust::new(account(1), "USDC".parse::<AssetCode>().unwrap())
                    .set_authorized(),
            ),
            ThresholdLevel::Low,
        ),
        (
            Operation::new(build::AccountMerge::new(muxed(1))),
            ThresholdLevel::High,
        ),
        (
            Operation::new(build::Inflation::new()),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(
                build::ManageData::new("config")
                    .unwrap()
                    .set_data_value(b"v1")
                    .unwrap(),
            ),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(build::BumpSequence::new(99)),
            ThresholdLevel::Low,
        ),
        (
            Operation::new(build::ManageBuyOffer::new(
                Asset::Native,
                usdc(),
                7,
                Price { n: 1, d: 1 },
            )),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(build::PathPaymentStrictSend::new(
                muxed(1),
                Asset::Native,
                50,
                usdc(),
                10,
            )),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(
                build::CreateClaimableBalance::new(usdc(), 500)
                    .add_claimant(Claimant::new(account(2), ClaimPredicate::Unconditional))
                    .unwrap(),
            ),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(build::ClaimClaimableBalance::new(balance_id)),
            ThresholdLevel::Low,
        ),
        (
            Operation::new(build::BeginSponsoringFutureReserves::new(account(3))),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(build::EndSponsoringFutureReserves::new()),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(build::RevokeSponsorship::ledger_entry(LedgerKey::Account(
                LedgerKeyAccount {
                    account_id: account(4),
                },
            ))),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(build::Clawback::new(usdc(), muxed(5), 10)),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(build::ClawbackClaimableBalance::new(balance_id)),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(build::SetTrustLineFlags::new(account(1), usdc()).set_authorized()),
            ThresholdLevel::Low,
        ),
        (
            Operation::new(build::LiquidityPoolDeposit::new(
                pool,
                100,
                200,
                Price { n: 1, d: 2 },
                Price { n: 2, d: 1 },
            )),
            ThresholdLevel::Medium,
        ),
        (
            Operation::new(build::LiquidityPoolWithdraw::new(pool, 50, 1, 1)),
            ThresholdLevel::Medium,
        ),
    ];

    for (op, expected) in &cases {
        assert!(
            op.is_ready(),
            "{} not ready",
            op.body().discriminant().name()
        );
        assert_eq!(
            op.threshold(),
            *expected,
            "wrong threshold for {}",
            op.body().discriminant().name()
        );
        assert!(op.source_account.is_none());
    }
}

#[test]
fn value_constraints_gate_readiness() {
    // zero-amount payment
    let op = Operation::new(build::Payment::new(muxed(1), Asset::Native, 0));
    assert!(!op.is_ready());

    // degenerate price
    let op = Operation::new(build::ManageSellOffer::new(
        Asset::Native,
        usdc(),
        10,
        Price { n: 1, d: 0 },
    ));
    assert!(!op.is_ready());

    // claimable balance without claimants
    let op = Operation::new(build::CreateClaimableBalance::new(usdc(), 10));
    assert!(!op.is_ready());

    // out-of-range signer weight
    let op = Operation::new(build::SetOptions::new().set_master_weight(256));
    assert!(!op.is_ready());
}

#[test]
fn malformed_inputs_fail_at_construction() {
    assert!("GBADADDRESS".parse::<MuxedAccount>().is_err());
    assert!("".parse::<AccountId>().is_err());
    assert!("not an asset".parse::<Asset>().is_err());
    // 65-byte name over the 64-byte bound
    assert!(build::ManageData::new(&"n".repeat(65)).is_err());
    // 65-byte value over the 64-byte bound
    assert!(build::ManageData::new("name")
        .unwrap()
        .set_data_value(&[0u8; 65])
        .is_err());
}

#[test]
fn source_override_accepts_muxed_strkeys() {
    let addr = "MA3D5KRYM6CB7OWQ6TWYRR3Z4T7GNZLKERYNZGGA5SOAOPIFY6YQGAAAAAAAAAPCICBKU";
    let source: MuxedAccount = addr.parse().unwrap();
    let op = Operation::with_source(source, build::Inflation::new());
    assert_eq!(op.source_account.unwrap().to_string(), addr);
}
