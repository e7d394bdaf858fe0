//! Property-based tests for the field, the curve and both key agreements

use proptest::prelude::*;
use wsnkey_algorithms::{Bignum, EllipticCurvePoint, CURVE_ORDER, MODULUS};
use wsnkey_exchange::gdh::{gcd, mod_exp, mod_inv, run_chain, GroupDiffieHellman, Parameters};
use wsnkey_exchange::DiffieHellman;

fn bignum() -> impl Strategy<Value = Bignum> {
    any::<[u8; 16]>().prop_map(|b| Bignum::from_le_bytes(&b))
}

fn nonzero_field_element() -> impl Strategy<Value = Bignum> {
    bignum().prop_filter("nonzero mod p", |n| !n.reduce().is_zero())
}

/// Exponent in (1, q − 1) coprime with q − 1 under the default parameters
fn gdh_exponent() -> impl Strategy<Value = u64> {
    let order = Parameters::default().order();
    // q − 2 is always coprime with q − 1, so the upward search stops in range
    (2..order).prop_map(move |mut k| {
        while gcd(k, order) != 1 {
            k += 1;
        }
        k
    })
}

proptest! {
    #[test]
    fn wrapping_add_sub_inverse(a in bignum(), b in bignum()) {
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn field_mul_commutes_and_is_reduced(a in bignum(), b in bignum()) {
        let ab = a * b;
        prop_assert_eq!(ab, b * a);
        prop_assert!(ab < MODULUS);
    }

    #[test]
    fn field_mul_distributes(a in bignum(), b in bignum(), c in bignum()) {
        prop_assert_eq!(a * b.add_mod(&c), (a * b).add_mod(&(a * c)));
    }

    #[test]
    fn inverses_agree(a in nonzero_field_element()) {
        let inv = a.invert().unwrap();
        prop_assert_eq!(inv, a.invert_special().unwrap());
        prop_assert_eq!(a * inv, Bignum::ONE);
    }

    #[test]
    fn ordering_matches_big_endian_bytes(a in bignum(), b in bignum()) {
        prop_assert_eq!(a.cmp(&b), a.to_be_bytes().cmp(&b.to_be_bytes()));
    }

    #[test]
    fn mod_exp_composition(e1 in 0u64..1 << 40, e2 in 0u64..1 << 40) {
        let q = Parameters::default().modulus();
        let e = ((e1 as u128 * e2 as u128) % (q as u128 - 1)) as u64;
        prop_assert_eq!(mod_exp(mod_exp(7, e1, q), e2, q), mod_exp(7, e, q));
    }

    #[test]
    fn mod_inv_is_inverse(a in 1u64..u32::MAX as u64, m in 3u64..u32::MAX as u64) {
        match mod_inv(a, m) {
            Ok(inv) => prop_assert_eq!((a as u128 * inv as u128) % m as u128, 1),
            Err(_) => prop_assert_ne!(gcd(a, m), 1),
        }
    }

    #[test]
    fn gdh_chain_agrees(
        gateway in gdh_exponent(),
        exponents in prop::collection::vec(gdh_exponent(), 1..6),
    ) {
        let parameters = Parameters::default();
        let gateway = GroupDiffieHellman::from_private_key(parameters, gateway).unwrap();
        let group: Vec<_> = exponents
            .iter()
            .map(|&k| GroupDiffieHellman::from_private_key(parameters, k).unwrap())
            .collect();
        prop_assert!(run_chain(&gateway, &group).unwrap().is_consistent());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn ecdh_agrees(a in bignum(), b in bignum()) {
        let base = EllipticCurvePoint::base_point();
        let alice = DiffieHellman::from_private_key(base, &a);
        let bob = DiffieHellman::from_private_key(base, &b);
        prop_assert_eq!(
            alice.shared_key(&bob.public_key()),
            bob.shared_key(&alice.public_key())
        );
    }

    #[test]
    fn scalar_inverse_round_trip(a in bignum()) {
        let base = EllipticCurvePoint::base_point();
        if let Ok(a_inv) = a.invert_modulo(&CURVE_ORDER) {
            prop_assert_eq!((base * &a) * &a_inv, base);
        }
    }

    #[test]
    fn scalar_multiplication_stays_on_curve(k in bignum()) {
        let p = EllipticCurvePoint::base_point() * &k;
        prop_assert!(p.is_on_curve());
    }
}
