//! Cross-crate ECDH tests against the known-answer vectors

use wsnkey_algorithms::{Bignum, EllipticCurvePoint, CURVE_ORDER};
use wsnkey_api::{Result as ApiResult, Serialize};
use wsnkey_exchange::ecdh::{DiffieHellman, PUBLIC_KEY_SIZE, SECRET_SIZE};
use wsnkey_tests::seeded_rng;
use wsnkey_tests::vectors::{le_bignum, point, scalar, ECDH_VECTORS, SCALAR_MULTIPLES};

#[test]
fn test_wire_sizes() {
    assert_eq!(SECRET_SIZE, 16);
    assert_eq!(PUBLIC_KEY_SIZE, 32);
}

#[test]
fn test_agreement_over_fifty_trials() {
    let mut rng = seeded_rng(50);
    for trial in 0..50 {
        let alice = DiffieHellman::new(&mut rng);
        let bob = DiffieHellman::new(&mut rng);
        assert_eq!(
            alice.shared_key(&bob.public_key()),
            bob.shared_key(&alice.public_key()),
            "peers disagree in trial {}",
            trial
        );
    }
}

#[test]
fn test_known_answer_exchanges() -> ApiResult<()> {
    let base = EllipticCurvePoint::base_point();
    for v in ECDH_VECTORS {
        let a = DiffieHellman::from_private_key(base, &scalar(v.private_a));
        let b = DiffieHellman::from_private_key(base, &scalar(v.private_b));

        assert_eq!(a.public_key(), point(v.public_a));
        assert_eq!(b.public_key(), point(v.public_b));

        let expected = le_bignum(v.shared);
        assert_eq!(a.shared_key(&b.public_key()), expected);
        assert_eq!(b.shared_key_from_bytes(&a.public_key_bytes())?, expected);
    }
    Ok(())
}

#[test]
fn test_scalar_multiples_of_base() {
    let base = EllipticCurvePoint::base_point();
    for (k, expected) in SCALAR_MULTIPLES {
        assert_eq!(base * scalar(k), point(expected), "k = {}", k);
    }
}

#[test]
fn test_scalar_inverse_round_trip() -> ApiResult<()> {
    // Literal base point bytes as carried on the wire
    let base = point(
        "865B2CA57C60280C2D9B898B52F71F16837AEDDD92A22DC013EBAF5B39C85ACF",
    );
    assert_eq!(base, EllipticCurvePoint::base_point());

    let mut rng = seeded_rng(1);
    for _ in 0..10 {
        let a = Bignum::random(&mut rng);
        let ecp = base * &a;
        let a_inv = a.invert_modulo(&CURVE_ORDER)?;
        assert_eq!(ecp * &a_inv, base);
    }
    Ok(())
}

#[test]
fn test_field_inverse_consistency() -> ApiResult<()> {
    let mut rng = seeded_rng(2);
    for _ in 0..50 {
        let a = Bignum::random(&mut rng);
        if a.reduce().is_zero() {
            continue;
        }
        let inv = a.invert()?;
        assert_eq!(inv, a.invert_special()?);
        assert_eq!(a * inv, Bignum::ONE);
    }
    Ok(())
}

#[test]
fn test_public_key_serialization() -> ApiResult<()> {
    let mut rng = seeded_rng(3);
    let node = DiffieHellman::new(&mut rng);
    let bytes = Serialize::to_bytes(&node.public_key());
    assert_eq!(bytes.len(), PUBLIC_KEY_SIZE);
    assert_eq!(<EllipticCurvePoint as Serialize>::from_bytes(&bytes)?, node.public_key());
    Ok(())
}

#[test]
fn test_truncated_public_key_is_rejected() {
    let mut rng = seeded_rng(4);
    let alice = DiffieHellman::new(&mut rng);
    let bob = DiffieHellman::new(&mut rng);
    let err = alice
        .shared_key_from_bytes(&bob.public_key_bytes()[..20])
        .unwrap_err();
    let api: wsnkey_api::Error = err.into();
    assert!(matches!(
        api,
        wsnkey_api::Error::InvalidLength {
            expected: 32,
            actual: 20,
            ..
        }
    ));
}
