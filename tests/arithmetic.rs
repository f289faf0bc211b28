//! Group-law tests over the built-in curves.

use primecurve::{p384, p521, AffinePoint, BoxedUint, CurveParams};
use proptest::prelude::*;

fn curves() -> [&'static CurveParams; 2] {
    [p384(), p521()]
}

/// `k * G` for a one-byte scalar.
fn small_mul(curve: &CurveParams, k: u8) -> AffinePoint {
    curve.scalar_base_mul(&[k])
}

#[test]
fn generator_is_on_curve() {
    for curve in curves() {
        assert!(curve.is_on_curve(&curve.generator()));
    }
}

#[test]
fn identity_is_not_on_curve() {
    for curve in curves() {
        assert!(!curve.is_on_curve(&AffinePoint::Identity));
    }
}

#[test]
fn identity_addition() {
    for curve in curves() {
        let generator = curve.generator();

        assert_eq!(curve.add(&generator, &AffinePoint::Identity), generator);
        assert_eq!(curve.add(&AffinePoint::Identity, &generator), generator);
        assert_eq!(
            curve.add(&AffinePoint::Identity, &AffinePoint::Identity),
            AffinePoint::Identity
        );
        assert_eq!(curve.double(&AffinePoint::Identity), AffinePoint::Identity);
    }
}

#[test]
fn addition_commutes() {
    for curve in curves() {
        let a = curve.generator();
        let b = curve.double(&a);

        let ab = curve.add(&a, &b);
        assert_eq!(ab, curve.add(&b, &a));
        assert!(curve.is_on_curve(&ab));
    }
}

#[test]
fn addition_associates() {
    for curve in curves() {
        let a = curve.generator();
        let b = curve.double(&a);
        let c = curve.double(&b);

        assert_eq!(
            curve.add(&curve.add(&a, &b), &c),
            curve.add(&a, &curve.add(&b, &c))
        );
    }
}

#[test]
fn doubling_matches_self_addition() {
    for curve in curves() {
        let a = curve.generator();
        assert_eq!(curve.double(&a), curve.add(&a, &a));

        let b = small_mul(curve, 3);
        assert_eq!(curve.double(&b), curve.add(&b, &b));
    }
}

#[test]
fn inverse_points_sum_to_the_identity() {
    for curve in curves() {
        let generator = curve.generator();
        let p = curve.field_modulus();

        let negated = AffinePoint::from_coordinates(
            generator.x().unwrap().clone(),
            p.neg(generator.y().unwrap()),
        );

        assert!(curve.is_on_curve(&negated));
        assert_eq!(curve.add(&generator, &negated), AffinePoint::Identity);
    }
}

#[test]
fn zero_scalar_returns_the_identity() {
    for curve in curves() {
        let zeroes = vec![0u8; curve.field_byte_len()];
        assert_eq!(
            curve.scalar_base_mul(&zeroes),
            AffinePoint::Identity
        );
        assert_eq!(curve.scalar_base_mul(&[]), AffinePoint::Identity);
    }
}

#[test]
fn small_scalars_match_repeated_addition() {
    for curve in curves() {
        let generator = curve.generator();
        let mut sum = generator.clone();

        for k in 2u8..=20 {
            sum = curve.add(&sum, &generator);
            assert_eq!(small_mul(curve, k), sum);
            assert!(curve.is_on_curve(&sum));
        }
    }
}

#[test]
fn order_times_generator_is_the_identity() {
    for curve in curves() {
        let order = curve.order().as_nat().to_be_bytes();
        assert_eq!(curve.scalar_base_mul(&order), AffinePoint::Identity);
    }
}

#[test]
fn order_minus_one_times_generator_negates_the_generator() {
    for curve in curves() {
        let n = curve.order();
        let p = curve.field_modulus();
        let generator = curve.generator();

        let k = n
            .as_nat()
            .wrapping_sub(&BoxedUint::one_with_precision(n.bits_precision()));
        let point = curve.scalar_base_mul(&k.to_be_bytes());

        assert_eq!(point.x(), generator.x());
        assert_eq!(point.y().unwrap(), &p.neg(generator.y().unwrap()));
    }
}

#[test]
fn scalar_mul_of_the_identity_is_the_identity() {
    for curve in curves() {
        assert_eq!(
            curve.scalar_mul(&AffinePoint::Identity, &[0x17, 0x2a]),
            AffinePoint::Identity
        );
    }
}

/// Big-endian bytes of `(k1 + k2) mod n`.
fn scalar_sum_bytes(curve: &CurveParams, k1: &[u8], k2: &[u8]) -> Vec<u8> {
    let n = curve.order();
    let a = n.reduce(&n.from_be_bytes(k1).unwrap());
    let b = n.reduce(&n.from_be_bytes(k2).unwrap());
    n.add(&a, &b).to_be_bytes().to_vec()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn scalar_mul_distributes_over_scalar_addition(
        k1 in prop::collection::vec(any::<u8>(), 48),
        k2 in prop::collection::vec(any::<u8>(), 48),
    ) {
        let curve = p384();

        let lhs = curve.add(
            &curve.scalar_base_mul(&k1),
            &curve.scalar_base_mul(&k2),
        );
        let rhs = curve.scalar_base_mul(&scalar_sum_bytes(curve, &k1, &k2));

        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn scalar_mul_stays_on_the_curve(k in prop::collection::vec(any::<u8>(), 48)) {
        let curve = p384();
        let point = curve.scalar_base_mul(&k);
        prop_assert!(curve.is_on_curve(&point) || point.is_identity());
    }
}
