//! Key generation tests.

use primecurve::{p384, p521, CurveParams, SecretKey};
use rand_core::OsRng;

fn curves() -> [&'static CurveParams; 2] {
    [p384(), p521()]
}

#[test]
fn generated_scalar_is_in_range() {
    for curve in curves() {
        let n = curve.order();
        let byte_len = ((n.bits() + 7) / 8) as usize;

        for _ in 0..4 {
            let key = SecretKey::random(curve, &mut OsRng).unwrap();

            assert_eq!(key.as_bytes().len(), byte_len);

            let scalar = n.from_be_bytes(key.as_bytes()).unwrap();
            assert!(scalar < *n.as_nat());
            assert!(scalar > n.zero());
        }
    }
}

#[test]
fn public_point_matches_the_secret_scalar() {
    for curve in curves() {
        let key = SecretKey::random(curve, &mut OsRng).unwrap();

        assert!(curve.is_on_curve(key.public_point()));
        assert_eq!(
            key.public_point(),
            &curve.scalar_base_mul(key.as_bytes())
        );
    }
}

#[test]
fn p521_scalars_have_their_excess_bits_masked() {
    // 521 % 8 == 1: only the lowest bit of the leading byte may survive.
    for _ in 0..8 {
        let key = SecretKey::random(p521(), &mut OsRng).unwrap();
        assert!(key.as_bytes()[0] <= 0x01);
    }
}

#[test]
fn debug_output_hides_the_scalar() {
    let key = SecretKey::random(p384(), &mut OsRng).unwrap();
    assert_eq!(format!("{:?}", key), "SecretKey { .. }");
}
