//! Property tests for the message encoders
//!
//! Determinism, bound checks, slot ordering and limit order direction
//! symmetry, checked against the reference pair hash and a counting hash.

use std::cell::Cell;

use messages::{MessageEncoder, Sha256PairHash};
use num_bigint::{BigInt, Sign};
use proptest::prelude::*;
use types::field::FieldElement;
use types::params::{
    ConditionalTransferParams, LimitOrderParams, TransferParams, WithdrawalParams,
};

/// Uniform value in `[0, 2^bits)` for `bits <= 256`.
fn below_pow2(bits: u32) -> impl Strategy<Value = BigInt> {
    any::<[u8; 32]>().prop_map(move |bytes| BigInt::from_bytes_be(Sign::Plus, &bytes) >> (256 - bits))
}

fn pow2(bits: u32) -> BigInt {
    BigInt::from(1) << bits
}

fn withdrawal_strategy() -> impl Strategy<Value = WithdrawalParams> {
    (
        below_pow2(250),
        any::<u64>(),
        any::<u32>(),
        any::<u32>(),
        any::<u64>(),
    )
        .prop_map(|(asset, position, nonce, expiration, amount)| WithdrawalParams {
            asset_id_collateral: asset,
            position_id: BigInt::from(position),
            nonce: BigInt::from(nonce),
            expiration_timestamp: BigInt::from(expiration),
            amount: BigInt::from(amount),
        })
}

fn transfer_strategy() -> impl Strategy<Value = TransferParams> {
    (
        (below_pow2(250), below_pow2(250), below_pow2(251)),
        (any::<u64>(), any::<u64>(), any::<u64>()),
        (any::<u32>(), any::<u64>(), any::<u64>(), any::<u32>()),
    )
        .prop_map(
            |((asset, fee, key), (sender, receiver, fee_position), (nonce, amount, max_fee, expiration))| {
                TransferParams {
                    asset_id: asset,
                    asset_id_fee: fee,
                    receiver_public_key: key,
                    sender_position_id: BigInt::from(sender),
                    receiver_position_id: BigInt::from(receiver),
                    src_fee_position_id: BigInt::from(fee_position),
                    nonce: BigInt::from(nonce),
                    amount: BigInt::from(amount),
                    max_amount_fee: BigInt::from(max_fee),
                    expiration_timestamp: BigInt::from(expiration),
                }
            },
        )
}

fn limit_order_strategy() -> impl Strategy<Value = LimitOrderParams> {
    (
        (below_pow2(128), below_pow2(128), below_pow2(250), any::<bool>()),
        (any::<u64>(), any::<u64>(), any::<u64>()),
        (any::<u32>(), any::<u64>(), any::<u32>()),
    )
        .prop_map(
            |((synthetic, collateral, fee, buying), (amount_syn, amount_col, max_fee), (nonce, position, expiration))| {
                LimitOrderParams {
                    asset_id_synthetic: synthetic,
                    asset_id_collateral: collateral,
                    is_buying_synthetic: buying,
                    asset_id_fee: fee,
                    amount_synthetic: BigInt::from(amount_syn),
                    amount_collateral: BigInt::from(amount_col),
                    max_amount_fee: BigInt::from(max_fee),
                    nonce: BigInt::from(nonce),
                    position_id: BigInt::from(position),
                    expiration_timestamp: BigInt::from(expiration),
                }
            },
        )
}

/// Set one withdrawal field by its wire name.
fn set_withdrawal_field(params: &mut WithdrawalParams, name: &str, value: BigInt) {
    match name {
        "assetIdCollateral" => params.asset_id_collateral = value,
        "positionId" => params.position_id = value,
        "nonce" => params.nonce = value,
        "expirationTimestamp" => params.expiration_timestamp = value,
        "amount" => params.amount = value,
        other => panic!("unknown field {other}"),
    }
}

fn set_transfer_field(params: &mut TransferParams, name: &str, value: BigInt) {
    match name {
        "assetId" => params.asset_id = value,
        "assetIdFee" => params.asset_id_fee = value,
        "receiverPublicKey" => params.receiver_public_key = value,
        "senderPositionId" => params.sender_position_id = value,
        "receiverPositionId" => params.receiver_position_id = value,
        "srcFeePositionId" => params.src_fee_position_id = value,
        "nonce" => params.nonce = value,
        "amount" => params.amount = value,
        "maxAmountFee" => params.max_amount_fee = value,
        "expirationTimestamp" => params.expiration_timestamp = value,
        other => panic!("unknown field {other}"),
    }
}

fn set_limit_order_field(params: &mut LimitOrderParams, name: &str, value: BigInt) {
    match name {
        "assetIdSynthetic" => params.asset_id_synthetic = value,
        "assetIdCollateral" => params.asset_id_collateral = value,
        "assetIdFee" => params.asset_id_fee = value,
        "amountSynthetic" => params.amount_synthetic = value,
        "amountCollateral" => params.amount_collateral = value,
        "maxAmountFee" => params.max_amount_fee = value,
        "nonce" => params.nonce = value,
        "positionId" => params.position_id = value,
        "expirationTimestamp" => params.expiration_timestamp = value,
        other => panic!("unknown field {other}"),
    }
}

const WITHDRAWAL_BOUNDS: &[(&str, u32)] = &[
    ("assetIdCollateral", 250),
    ("positionId", 64),
    ("nonce", 32),
    ("expirationTimestamp", 32),
    ("amount", 64),
];

const TRANSFER_BOUNDS: &[(&str, u32)] = &[
    ("assetId", 250),
    ("assetIdFee", 250),
    ("receiverPublicKey", 251),
    ("senderPositionId", 64),
    ("receiverPositionId", 64),
    ("srcFeePositionId", 64),
    ("nonce", 32),
    ("amount", 64),
    ("maxAmountFee", 64),
    ("expirationTimestamp", 32),
];

const LIMIT_ORDER_BOUNDS: &[(&str, u32)] = &[
    ("assetIdSynthetic", 128),
    ("assetIdCollateral", 250),
    ("assetIdFee", 250),
    ("amountSynthetic", 64),
    ("amountCollateral", 64),
    ("maxAmountFee", 64),
    ("nonce", 32),
    ("positionId", 64),
    ("expirationTimestamp", 32),
];

fn sample_transfer() -> TransferParams {
    TransferParams {
        asset_id: BigInt::from(1),
        asset_id_fee: BigInt::from(2),
        receiver_public_key: BigInt::from(3),
        sender_position_id: BigInt::from(4),
        receiver_position_id: BigInt::from(5),
        src_fee_position_id: BigInt::from(6),
        nonce: BigInt::from(7),
        amount: BigInt::from(8),
        max_amount_fee: BigInt::from(9),
        expiration_timestamp: BigInt::from(10),
    }
}

#[test]
fn test_withdrawal_field_bounds() {
    let encoder = MessageEncoder::new(Sha256PairHash);
    for &(name, bits) in WITHDRAWAL_BOUNDS {
        let mut params = WithdrawalParams {
            asset_id_collateral: BigInt::from(1),
            position_id: BigInt::from(1),
            nonce: BigInt::from(0),
            expiration_timestamp: BigInt::from(0),
            amount: BigInt::from(0),
        };

        set_withdrawal_field(&mut params, name, BigInt::from(0));
        assert!(encoder.withdrawal(&params).is_ok(), "{name} at low");

        set_withdrawal_field(&mut params, name, pow2(bits) - 1);
        assert!(encoder.withdrawal(&params).is_ok(), "{name} at high - 1");

        set_withdrawal_field(&mut params, name, pow2(bits));
        assert_eq!(encoder.withdrawal(&params).unwrap_err().field(), name);

        set_withdrawal_field(&mut params, name, BigInt::from(-1));
        assert_eq!(encoder.withdrawal(&params).unwrap_err().field(), name);
    }
}

#[test]
fn test_transfer_field_bounds() {
    let encoder = MessageEncoder::new(Sha256PairHash);
    for &(name, bits) in TRANSFER_BOUNDS {
        let mut params = sample_transfer();

        set_transfer_field(&mut params, name, BigInt::from(0));
        assert!(encoder.transfer(&params).is_ok(), "{name} at low");

        set_transfer_field(&mut params, name, pow2(bits) - 1);
        assert!(encoder.transfer(&params).is_ok(), "{name} at high - 1");

        set_transfer_field(&mut params, name, pow2(bits));
        assert_eq!(encoder.transfer(&params).unwrap_err().field(), name);

        set_transfer_field(&mut params, name, BigInt::from(-1));
        assert_eq!(encoder.transfer(&params).unwrap_err().field(), name);
    }
}

#[test]
fn test_limit_order_field_bounds() {
    let encoder = MessageEncoder::new(Sha256PairHash);
    for is_buying_synthetic in [true, false] {
        for &(name, bits) in LIMIT_ORDER_BOUNDS {
            let mut params = LimitOrderParams {
                asset_id_synthetic: BigInt::from(11),
                asset_id_collateral: BigInt::from(22),
                is_buying_synthetic,
                asset_id_fee: BigInt::from(33),
                amount_synthetic: BigInt::from(1),
                amount_collateral: BigInt::from(2),
                max_amount_fee: BigInt::from(3),
                nonce: BigInt::from(4),
                position_id: BigInt::from(5),
                expiration_timestamp: BigInt::from(6),
            };

            set_limit_order_field(&mut params, name, BigInt::from(0));
            assert!(encoder.limit_order(&params).is_ok(), "{name} at low");

            set_limit_order_field(&mut params, name, pow2(bits) - 1);
            assert!(encoder.limit_order(&params).is_ok(), "{name} at high - 1");

            set_limit_order_field(&mut params, name, pow2(bits));
            assert_eq!(encoder.limit_order(&params).unwrap_err().field(), name);

            set_limit_order_field(&mut params, name, BigInt::from(-1));
            assert_eq!(encoder.limit_order(&params).unwrap_err().field(), name);
        }
    }
}

#[test]
fn test_condition_bounds() {
    let encoder = MessageEncoder::new(Sha256PairHash);
    let mut params = ConditionalTransferParams {
        transfer: sample_transfer(),
        condition: BigInt::from(0),
    };
    assert!(encoder.conditional_transfer(&params).is_ok());

    // wider than the 250-bit asset ids
    params.condition = pow2(251) - 1;
    assert!(encoder.conditional_transfer(&params).is_ok());

    params.condition = pow2(251);
    assert_eq!(
        encoder.conditional_transfer(&params).unwrap_err().field(),
        "condition"
    );

    params.condition = BigInt::from(-1);
    assert_eq!(
        encoder.conditional_transfer(&params).unwrap_err().field(),
        "condition"
    );
}

proptest! {
    #[test]
    fn prop_withdrawal_deterministic(params in withdrawal_strategy()) {
        let first = MessageEncoder::new(Sha256PairHash).withdrawal(&params).unwrap();
        let second = MessageEncoder::new(Sha256PairHash).withdrawal(&params.clone()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_transfer_deterministic(params in transfer_strategy()) {
        let encoder = MessageEncoder::new(Sha256PairHash);
        prop_assert_eq!(encoder.transfer(&params).unwrap(), encoder.transfer(&params).unwrap());
    }

    #[test]
    fn prop_transfer_positions_are_ordered(params in transfer_strategy()) {
        prop_assume!(params.sender_position_id != params.receiver_position_id);
        let encoder = MessageEncoder::new(Sha256PairHash);

        let mut swapped = params.clone();
        std::mem::swap(&mut swapped.sender_position_id, &mut swapped.receiver_position_id);
        prop_assert_ne!(encoder.transfer(&params).unwrap(), encoder.transfer(&swapped).unwrap());
    }

    #[test]
    fn prop_withdrawal_amount_and_position_are_ordered(params in withdrawal_strategy()) {
        prop_assume!(params.position_id != params.amount);
        let encoder = MessageEncoder::new(Sha256PairHash);

        let mut swapped = params.clone();
        std::mem::swap(&mut swapped.position_id, &mut swapped.amount);
        prop_assert_ne!(encoder.withdrawal(&params).unwrap(), encoder.withdrawal(&swapped).unwrap());
    }

    #[test]
    fn prop_limit_order_direction_symmetry(params in limit_order_strategy()) {
        let encoder = MessageEncoder::new(Sha256PairHash);

        // Selling X for Y hashes the same as buying Y with X.
        let mut mirrored = params.clone();
        mirrored.is_buying_synthetic = !params.is_buying_synthetic;
        std::mem::swap(&mut mirrored.asset_id_synthetic, &mut mirrored.asset_id_collateral);
        std::mem::swap(&mut mirrored.amount_synthetic, &mut mirrored.amount_collateral);

        prop_assert_eq!(
            encoder.limit_order(&params).unwrap(),
            encoder.limit_order(&mirrored).unwrap()
        );
    }

    #[test]
    fn prop_range_error_skips_hashing(params in transfer_strategy(), idx in 0..TRANSFER_BOUNDS.len()) {
        let calls = Cell::new(0usize);
        let counter = |_: &FieldElement, _: &FieldElement| {
            calls.set(calls.get() + 1);
            FieldElement::zero()
        };
        let encoder = MessageEncoder::new(counter);

        let (name, bits) = TRANSFER_BOUNDS[idx];
        let mut params = params;
        set_transfer_field(&mut params, name, pow2(bits));

        let conditional = ConditionalTransferParams {
            transfer: params.clone(),
            condition: BigInt::from(1),
        };
        prop_assert!(encoder.transfer(&params).is_err());
        prop_assert!(encoder.conditional_transfer(&conditional).is_err());
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn prop_hash_call_counts(
        withdrawal in withdrawal_strategy(),
        transfer in transfer_strategy(),
        order in limit_order_strategy(),
    ) {
        let calls = Cell::new(0usize);
        let counter = |a: &FieldElement, _: &FieldElement| {
            calls.set(calls.get() + 1);
            a.clone()
        };
        let encoder = MessageEncoder::new(counter);

        encoder.withdrawal(&withdrawal).unwrap();
        prop_assert_eq!(calls.replace(0), 1);

        encoder.transfer(&transfer).unwrap();
        prop_assert_eq!(calls.replace(0), 4);

        let conditional = ConditionalTransferParams { transfer, condition: BigInt::from(0) };
        encoder.conditional_transfer(&conditional).unwrap();
        prop_assert_eq!(calls.replace(0), 5);

        encoder.limit_order(&order).unwrap();
        prop_assert_eq!(calls.replace(0), 4);
    }

    #[test]
    fn prop_hash_is_in_field(order in limit_order_strategy()) {
        let hash = MessageEncoder::new(Sha256PairHash).limit_order(&order).unwrap();
        prop_assert!(hash.as_field_element().bits() <= 250);
    }
}
