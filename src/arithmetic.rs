//! Jacobian-coordinate group law.
//!
//! The engine works internally on Jacobian coordinates: a point `(x, y)` is
//! held as `(X, Y, Z)` with `x = X/Z²` and `y = Y/Z³`, so that the group law
//! needs no per-step modular inversion. Whole computations such as
//! [`CurveParams::scalar_mul`] stay inside the transform and project back to
//! affine coordinates exactly once at the end.

use crate::{curve::CurveParams, point::AffinePoint};
use crypto_bigint::BoxedUint;

/// Point in Jacobian projective coordinates.
///
/// `Z = 0` encodes the point at infinity. This representation is confined to
/// the arithmetic engine; the public boundary only ever sees [`AffinePoint`].
#[derive(Clone, Debug)]
pub(crate) struct JacobianPoint {
    pub(crate) x: BoxedUint,
    pub(crate) y: BoxedUint,
    pub(crate) z: BoxedUint,
}

impl CurveParams {
    /// Report whether `(x, y)` lies on the curve.
    ///
    /// The identity is not a finite curve point and reports `false`.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        match point {
            AffinePoint::Identity => false,
            AffinePoint::Finite { x, y } => {
                let p = self.field_modulus();
                let x = p.reduce(x);
                let y = p.reduce(y);
                let y2 = p.mul(&y, &y);
                self.equation(&x) == y2
            }
        }
    }

    /// The curve polynomial `x³ - 3x + b (mod p)` for a reduced `x`.
    pub(crate) fn equation(&self, x: &BoxedUint) -> BoxedUint {
        let p = self.field_modulus();

        let x3 = p.mul(&p.mul(x, x), x);
        let three_x = p.add(&p.add(x, x), x);

        p.add(&p.sub(&x3, &three_x), self.equation_b())
    }

    /// The identity in Jacobian form.
    fn jacobian_identity(&self) -> JacobianPoint {
        let p = self.field_modulus();
        JacobianPoint {
            x: p.zero(),
            y: p.zero(),
            z: p.zero(),
        }
    }

    /// Lift an affine point into Jacobian form: `Z = 1` for a finite point,
    /// `Z = 0` for the identity.
    fn to_jacobian(&self, point: &AffinePoint) -> JacobianPoint {
        let p = self.field_modulus();
        match point {
            AffinePoint::Identity => self.jacobian_identity(),
            AffinePoint::Finite { x, y } => JacobianPoint {
                x: p.reduce(x),
                y: p.reduce(y),
                z: p.one(),
            },
        }
    }

    /// Reverse the Jacobian transform: compute `(X/Z², Y/Z³)`, or the
    /// identity when `Z = 0`.
    fn to_affine(&self, point: &JacobianPoint) -> AffinePoint {
        let p = self.field_modulus();

        let z_inv = match p.invert(&point.z) {
            Some(z_inv) => z_inv,
            // Z is reduced, so inversion only fails for Z = 0.
            None => return AffinePoint::Identity,
        };

        let z_inv2 = p.mul(&z_inv, &z_inv);
        let x = p.mul(&point.x, &z_inv2);
        let z_inv3 = p.mul(&z_inv2, &z_inv);
        let y = p.mul(&point.y, &z_inv3);

        AffinePoint::from_coordinates(x, y)
    }

    /// Return the sum of two points.
    pub fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> AffinePoint {
        let lhs = self.to_jacobian(lhs);
        let rhs = self.to_jacobian(rhs);
        self.to_affine(&self.add_jacobian(&lhs, &rhs))
    }

    /// Return twice the given point.
    pub fn double(&self, point: &AffinePoint) -> AffinePoint {
        let point = self.to_jacobian(point);
        self.to_affine(&self.double_jacobian(&point))
    }

    /// Jacobian addition using the `add-2007-bl` formulas.
    ///
    /// <https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-3.html#addition-add-2007-bl>
    ///
    /// The general formulas divide by zero when one input is the identity or
    /// both are the same point, so those cases are dispatched first: an
    /// identity operand short-circuits to the other operand, and equal
    /// operands (equal projected x *and* y) delegate to doubling.
    fn add_jacobian(&self, lhs: &JacobianPoint, rhs: &JacobianPoint) -> JacobianPoint {
        let p = self.field_modulus();

        if bool::from(lhs.z.is_zero()) {
            return rhs.clone();
        }
        if bool::from(rhs.z.is_zero()) {
            return lhs.clone();
        }

        let z1z1 = p.mul(&lhs.z, &lhs.z);
        let z2z2 = p.mul(&rhs.z, &rhs.z);

        let u1 = p.mul(&lhs.x, &z2z2);
        let u2 = p.mul(&rhs.x, &z1z1);
        let h = p.sub(&u2, &u1);
        let x_equal = bool::from(h.is_zero());

        let h2 = p.add(&h, &h);
        let i = p.mul(&h2, &h2);
        let j = p.mul(&h, &i);

        let s1 = p.mul(&p.mul(&lhs.y, &rhs.z), &z2z2);
        let s2 = p.mul(&p.mul(&rhs.y, &lhs.z), &z1z1);
        let r = p.sub(&s2, &s1);
        if x_equal && bool::from(r.is_zero()) {
            return self.double_jacobian(lhs);
        }

        let r = p.add(&r, &r);
        let v = p.mul(&u1, &i);

        let r2 = p.mul(&r, &r);
        let x3 = p.sub(&p.sub(&p.sub(&r2, &j), &v), &v);

        let s1j = p.mul(&s1, &j);
        let y3 = p.sub(
            &p.mul(&r, &p.sub(&v, &x3)),
            &p.add(&s1j, &s1j),
        );

        let z_sum = p.add(&lhs.z, &rhs.z);
        let z3 = p.mul(
            &p.sub(&p.sub(&p.mul(&z_sum, &z_sum), &z1z1), &z2z2),
            &h,
        );

        JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Jacobian doubling using the `dbl-2001-b` formulas.
    ///
    /// <https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-3.html#doubling-dbl-2001-b>
    ///
    /// Valid for any input, including the identity: `Z = 0` propagates to
    /// `Z3 = 0` through the algebra.
    fn double_jacobian(&self, point: &JacobianPoint) -> JacobianPoint {
        let p = self.field_modulus();

        let delta = p.mul(&point.z, &point.z);
        let gamma = p.mul(&point.y, &point.y);

        let t = p.mul(&p.sub(&point.x, &delta), &p.add(&point.x, &delta));
        let alpha = p.add(&p.add(&t, &t), &t);

        let beta = p.mul(&point.x, &gamma);
        let beta2 = p.add(&beta, &beta);
        let beta4 = p.add(&beta2, &beta2);
        let beta8 = p.add(&beta4, &beta4);

        let x3 = p.sub(&p.mul(&alpha, &alpha), &beta8);

        let yz = p.add(&point.y, &point.z);
        let z3 = p.sub(&p.sub(&p.mul(&yz, &yz), &gamma), &delta);

        let gamma2 = p.mul(&gamma, &gamma);
        let gamma4 = p.add(&gamma2, &gamma2);
        let gamma8 = p.add(&gamma4, &gamma4);
        let y3 = p.sub(&p.mul(&alpha, &p.sub(&beta4, &x3)), &gamma8);

        JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Return `k * point` where `k` is a scalar in big-endian form.
    ///
    /// Plain double-and-add over the bits of `k`, most significant first.
    /// This is **not** constant-time: the number of point additions depends
    /// on the Hamming weight of `k`. Callers needing side-channel resistance
    /// must use a curve-specific fixed-control-flow implementation instead.
    pub fn scalar_mul(&self, point: &AffinePoint, k: &[u8]) -> AffinePoint {
        let base = self.to_jacobian(point);
        let mut acc = self.jacobian_identity();

        for byte in k {
            let mut byte = *byte;
            for _ in 0..8 {
                acc = self.double_jacobian(&acc);
                if byte & 0x80 == 0x80 {
                    acc = self.add_jacobian(&base, &acc);
                }
                byte <<= 1;
            }
        }

        self.to_affine(&acc)
    }

    /// Return `k * G` where `G` is the base point of the curve and `k` is a
    /// scalar in big-endian form.
    ///
    /// Not constant-time; see [`CurveParams::scalar_mul`].
    pub fn scalar_base_mul(&self, k: &[u8]) -> AffinePoint {
        self.scalar_mul(&self.generator(), k)
    }
}
