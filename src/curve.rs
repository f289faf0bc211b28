//! Curve parameters and the built-in curve registry.

use crate::{modulus::Modulus, point::AffinePoint};
use crypto_bigint::{BoxedUint, Limb};
use hex_literal::hex;
use once_cell::sync::Lazy;

/// Parameters of an `a = -3` short Weierstrass curve `y² = x³ - 3x + b` over
/// a prime field.
///
/// A `CurveParams` value drives the whole generic arithmetic engine: the
/// group law, the SEC1 point codec, and key generation all operate on the
/// numeric parameters alone. Instances for the built-in NIST curves are
/// constructed once per process and shared; see [`p384`] and [`p521`].
#[derive(Clone, Debug)]
pub struct CurveParams {
    /// Order of the underlying field.
    pub(crate) p: Modulus,

    /// Order of the base point.
    pub(crate) n: Modulus,

    /// Constant term of the curve equation.
    pub(crate) b: BoxedUint,

    /// Base point affine coordinates.
    pub(crate) gx: BoxedUint,
    pub(crate) gy: BoxedUint,

    /// Size of the underlying field in bits.
    pub(crate) bit_size: u32,

    /// Canonical name of the curve.
    pub(crate) name: &'static str,
}

impl CurveParams {
    /// Build curve parameters from big-endian encodings of the field prime
    /// `p`, the base point order `n`, the equation constant `b`, and the base
    /// point coordinates.
    ///
    /// Returns `None` when the encodings are inconsistent: an even modulus,
    /// a field prime that does not match `bit_size`, a coefficient or
    /// coordinate not fully reduced modulo `p`, or a base point that does
    /// not satisfy the curve equation.
    pub fn new(
        name: &'static str,
        bit_size: u32,
        p: &[u8],
        n: &[u8],
        b: &[u8],
        gx: &[u8],
        gy: &[u8],
    ) -> Option<Self> {
        let precision = bit_size.div_ceil(Limb::BITS) * Limb::BITS;

        let p = Modulus::new(BoxedUint::from_be_slice(p, precision).ok()?)?;
        let n = Modulus::new(BoxedUint::from_be_slice(n, precision).ok()?)?;
        if p.bits() != bit_size {
            return None;
        }

        let b = p.from_be_bytes(b)?;
        let gx = p.from_be_bytes(gx)?;
        let gy = p.from_be_bytes(gy)?;
        if b >= *p.as_nat() || gx >= *p.as_nat() || gy >= *p.as_nat() {
            return None;
        }

        let params = Self {
            p,
            n,
            b,
            gx,
            gy,
            bit_size,
            name,
        };

        if !params.is_on_curve(&params.generator()) {
            return None;
        }

        Some(params)
    }

    /// Canonical name of the curve.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Size of the underlying field in bits.
    pub fn bit_size(&self) -> u32 {
        self.bit_size
    }

    /// Width in bytes of a serialized field element.
    pub fn field_byte_len(&self) -> usize {
        ((self.bit_size + 7) / 8) as usize
    }

    /// Order of the underlying field.
    pub fn field_modulus(&self) -> &Modulus {
        &self.p
    }

    /// Order of the base point.
    pub fn order(&self) -> &Modulus {
        &self.n
    }

    /// Constant term `b` of the curve equation.
    pub fn equation_b(&self) -> &BoxedUint {
        &self.b
    }

    /// Base point of the curve.
    pub fn generator(&self) -> AffinePoint {
        AffinePoint::from_coordinates(self.gx.clone(), self.gy.clone())
    }
}

static P384: Lazy<CurveParams> = Lazy::new(|| {
    // FIPS 186-3, section D.2.4
    CurveParams::new(
        "P-384",
        384,
        &hex!(
            "ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff fffffffe"
            "ffffffff 00000000 00000000 ffffffff"
        ),
        &hex!(
            "ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff c7634d81 f4372ddf"
            "581a0db2 48b0a77a ecec196a ccc52973"
        ),
        &hex!(
            "b3312fa7 e23ee7e4 988e056b e3f82d19 181d9c6e fe814112 0314088f 5013875a"
            "c656398d 8a2ed19d 2a85c8ed d3ec2aef"
        ),
        &hex!(
            "aa87ca22 be8b0537 8eb1c71e f320ad74 6e1d3b62 8ba79b98 59f741e0 82542a38"
            "5502f25d bf55296c 3a545e38 72760ab7"
        ),
        &hex!(
            "3617de4a 96262c6f 5d9e98bf 9292dc29 f8f41dbd 289a147c e9da3113 b5f0b8c0"
            "0a60b1ce 1d7e819d 7a431d7c 90ea0e5f"
        ),
    )
    .expect("invalid P-384 curve constants")
});

static P521: Lazy<CurveParams> = Lazy::new(|| {
    // FIPS 186-3, section D.2.5
    CurveParams::new(
        "P-521",
        521,
        &hex!(
            "01ff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff"
            "ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff"
            "ffffffff"
        ),
        &hex!(
            "01ff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff"
            "fffffffa 51868783 bf2f966b 7fcc0148 f709a5d0 3bb5c9b8 899c47ae bb6fb71e"
            "91386409"
        ),
        &hex!(
            "0051 953eb961 8e1c9a1f 929a21a0 b68540ee a2da725b 99b315f3 b8b48991"
            "8ef109e1 56193951 ec7e937b 1652c0bd 3bb1bf07 3573df88 3d2c34f1 ef451fd4"
            "6b503f00"
        ),
        &hex!(
            "00c6 858e06b7 0404e9cd 9e3ecb66 2395b442 9c648139 053fb521 f828af60"
            "6b4d3dba a14b5e77 efe75928 fe1dc127 a2ffa8de 3348b3c1 856a429b f97e7e31"
            "c2e5bd66"
        ),
        &hex!(
            "0118 39296a78 9a3bc004 5c8a5fb4 2c7d1bd9 98f54449 579b4468 17afbd17"
            "273e662c 97ee7299 5ef42640 c550b901 3fad0761 353c7086 a272c240 88be9476"
            "9fd16650"
        ),
    )
    .expect("invalid P-521 curve constants")
});

/// NIST P-384 (FIPS 186-3, section D.2.4), also known as secp384r1.
///
/// Every call returns the same shared instance; the parameters are
/// constructed exactly once, even under concurrent first use.
///
/// The group operations driven by these parameters do not use constant-time
/// algorithms.
pub fn p384() -> &'static CurveParams {
    &P384
}

/// NIST P-521 (FIPS 186-3, section D.2.5), also known as secp521r1.
///
/// Every call returns the same shared instance; the parameters are
/// constructed exactly once, even under concurrent first use.
///
/// The group operations driven by these parameters do not use constant-time
/// algorithms.
pub fn p521() -> &'static CurveParams {
    &P521
}

#[cfg(test)]
mod tests {
    use super::{p384, p521};

    #[test]
    fn accessors_return_the_shared_instance() {
        assert!(core::ptr::eq(p384(), p384()));
        assert!(core::ptr::eq(p521(), p521()));
    }

    #[test]
    fn p384_parameters() {
        let curve = p384();
        assert_eq!(curve.name(), "P-384");
        assert_eq!(curve.bit_size(), 384);
        assert_eq!(curve.field_byte_len(), 48);
        assert_eq!(curve.field_modulus().bits(), 384);
        assert_eq!(curve.order().bits(), 384);
    }

    #[test]
    fn p521_parameters() {
        let curve = p521();
        assert_eq!(curve.name(), "P-521");
        assert_eq!(curve.bit_size(), 521);
        assert_eq!(curve.field_byte_len(), 66);
        assert_eq!(curve.field_modulus().bits(), 521);
        assert_eq!(curve.order().bits(), 521);
    }

    #[test]
    fn generators_satisfy_the_curve_equation() {
        for curve in [p384(), p521()] {
            assert!(curve.is_on_curve(&curve.generator()));
        }
    }
}
