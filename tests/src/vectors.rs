//! Known-answer vectors for secp128r1 ECDH and default-parameter GDH
//!
//! Scalars are big-endian hex; points and shared keys are in wire order
//! (little-endian hex).

use wsnkey_algorithms::{Bignum, EllipticCurvePoint, BIGNUM_SIZE};

/// One ECDH exchange between two fixed private keys
pub struct EcdhVector {
    pub private_a: &'static str,
    pub private_b: &'static str,
    pub public_a: &'static str,
    pub public_b: &'static str,
    pub shared: &'static str,
}

pub const ECDH_VECTORS: &[EcdhVector] = &[EcdhVector {
    private_a: "0123456789abcdeffedcba9876543210",
    private_b: "00112233445566778899aabbccddeeff",
    public_a: "4DDAA309587D954907C24FB9A81D691DE3393BD78C4C11C33509580F3915FAE4",
    public_b: "D17B91A13A9FAE3788EDFAA5B0396498814F5156D6A1931228E2A253C17296F1",
    shared: "0A83358C92A03031367BB6A792F68E9E",
}];

/// k·G for small and structured scalars
pub const SCALAR_MULTIPLES: &[(&str, &str)] = &[
    (
        "2",
        "7EA953E74BB89D19DB7121B9C6A05181957E5B27A9958383AECA55945553D803",
    ),
    (
        "3",
        "3B4B308A623B42AA232F9442F532D60A1FC4CD9B67B4E45188E7C421E47EA67A",
    ),
    (
        "deadbeef",
        "A17ED965E8596EB3F674736FC14DC1014995E59A999A0A115C2C74C288EF2AAC",
    ),
    (
        "ffffffffffffffffffffffffffffffff",
        "B29DD75D0D9AB6FADDA89A66AF09FBE5AA23EDAC6806FCEF4C0CC6CD961DF594",
    ),
];

/// A GDH run with default parameters: member exponents in chain order,
/// the gateway exponent, the chain values and the agreed key
pub struct GdhVector {
    pub members: &'static [u64],
    pub gateway: u64,
    pub round_keys: &'static [u64],
    pub group_key: u64,
}

pub const GDH_VECTORS: &[GdhVector] = &[
    GdhVector {
        members: &[123_456_791, 5, 7_654_321],
        gateway: 98_765_441,
        round_keys: &[386_538_277, 355_137_240, 663_227_097],
        group_key: 343_529_183,
    },
    GdhVector {
        members: &[7_654_321],
        gateway: 98_765_441,
        round_keys: &[138_697_919],
        group_key: 197_088_968,
    },
];

/// Parse a big-endian hex scalar
pub fn scalar(hex_be: &str) -> Bignum {
    Bignum::from_be_hex(hex_be).expect("valid scalar hex")
}

/// Parse a little-endian hex field element
pub fn le_bignum(hex_le: &str) -> Bignum {
    let mut buf = [0u8; BIGNUM_SIZE];
    hex::decode_to_slice(hex_le, &mut buf).expect("valid field element hex");
    Bignum::from_le_bytes(&buf)
}

/// Parse an X ∥ Y wire-form point
pub fn point(hex_le: &str) -> EllipticCurvePoint {
    let bytes = hex::decode(hex_le).expect("valid point hex");
    EllipticCurvePoint::from_xy_bytes(&bytes).expect("32-byte point")
}
