//! Modular arithmetic over an arbitrary-precision odd modulus.
//!
//! All values handled against a [`Modulus`] are kept at the modulus' own
//! limb-rounded bit precision, which is what `crypto-bigint` requires of the
//! operands of its modular operations. Callers feeding externally produced
//! [`BoxedUint`] values of arbitrary precision must pass them through
//! [`Modulus::reduce`] first.

use crypto_bigint::{
    modular::{BoxedMontyForm, BoxedMontyParams},
    BoxedUint, Integer, NonZero, Odd,
};

/// Odd positive modulus with precomputed Montgomery parameters.
///
/// Immutable once constructed. Provides the full complement of modular
/// operations used by the curve arithmetic: reduction, addition, subtraction,
/// multiplication, negation, inversion, exponentiation, and square root.
#[derive(Clone, Debug)]
pub struct Modulus {
    value: Odd<BoxedUint>,
    monty: BoxedMontyParams,
    /// Modulus widened to double precision, for reducing products.
    wide: NonZero<BoxedUint>,
}

impl Modulus {
    /// Create a modulus from the given value.
    ///
    /// Returns `None` if the value is even (and therefore also if it is
    /// zero).
    pub fn new(value: BoxedUint) -> Option<Self> {
        let value: Odd<BoxedUint> = Option::from(Odd::new(value))?;
        let monty = BoxedMontyParams::new(value.clone());
        let wide = Option::from(NonZero::new(
            value.as_ref().widen(value.as_ref().bits_precision() * 2),
        ))
        .expect("odd modulus is non-zero");

        Some(Self { value, monty, wide })
    }

    /// Bit length of the modulus value.
    pub fn bits(&self) -> u32 {
        self.value.as_ref().bits()
    }

    /// Limb-rounded precision all operands are normalized to.
    pub fn bits_precision(&self) -> u32 {
        self.value.as_ref().bits_precision()
    }

    /// Borrow the modulus value itself.
    pub fn as_nat(&self) -> &BoxedUint {
        self.value.as_ref()
    }

    /// Zero at the modulus' precision.
    pub fn zero(&self) -> BoxedUint {
        BoxedUint::zero_with_precision(self.bits_precision())
    }

    /// One at the modulus' precision.
    pub fn one(&self) -> BoxedUint {
        BoxedUint::one_with_precision(self.bits_precision())
    }

    /// Decode a big-endian byte string into a value at the modulus'
    /// precision.
    ///
    /// Returns `None` if the byte string is wider than the precision allows.
    /// The result is *not* reduced.
    pub fn from_be_bytes(&self, bytes: &[u8]) -> Option<BoxedUint> {
        BoxedUint::from_be_slice(bytes, self.bits_precision()).ok()
    }

    /// Fully reduce a value of any precision into `[0, m)` at the modulus'
    /// precision.
    pub fn reduce(&self, a: &BoxedUint) -> BoxedUint {
        let prec = self.bits_precision();

        let a = if a.bits_precision() < prec {
            a.widen(prec)
        } else {
            a.clone()
        };

        let rem = if a.bits_precision() == prec {
            let m: NonZero<BoxedUint> = Option::from(NonZero::new(self.as_nat().clone()))
                .expect("odd modulus is non-zero");
            &a % &m
        } else if a.bits_precision() == self.wide.bits_precision() {
            &a % &self.wide
        } else {
            let m: NonZero<BoxedUint> =
                Option::from(NonZero::new(self.as_nat().widen(a.bits_precision())))
                    .expect("odd modulus is non-zero");
            &a % &m
        };

        rem.shorten(prec)
    }

    /// `(a + b) mod m` for reduced operands.
    pub fn add(&self, a: &BoxedUint, b: &BoxedUint) -> BoxedUint {
        a.add_mod(b, self.as_nat())
    }

    /// `(a - b) mod m` for reduced operands.
    pub fn sub(&self, a: &BoxedUint, b: &BoxedUint) -> BoxedUint {
        a.sub_mod(b, self.as_nat())
    }

    /// `-a mod m` for a reduced operand.
    pub fn neg(&self, a: &BoxedUint) -> BoxedUint {
        self.zero().sub_mod(a, self.as_nat())
    }

    /// `(a * b) mod m` for reduced operands.
    pub fn mul(&self, a: &BoxedUint, b: &BoxedUint) -> BoxedUint {
        let product = a.mul(b);
        (&product % &self.wide).shorten(self.bits_precision())
    }

    /// `a^-1 mod m`, or `None` if `a` is not invertible.
    pub fn invert(&self, a: &BoxedUint) -> Option<BoxedUint> {
        let form = BoxedMontyForm::new(a.clone(), self.monty.clone());
        Option::from(form.invert()).map(|inv: BoxedMontyForm| inv.retrieve())
    }

    /// `base^exponent mod m`.
    pub fn pow(&self, base: &BoxedUint, exponent: &BoxedUint) -> BoxedUint {
        BoxedMontyForm::new(base.clone(), self.monty.clone())
            .pow(exponent)
            .retrieve()
    }

    /// Square root of `a` modulo the (prime) modulus, or `None` if `a` is a
    /// quadratic non-residue.
    ///
    /// For `m ≡ 3 (mod 4)`, which holds for both built-in curve primes, the
    /// candidate root is `a^((m+1)/4)`; otherwise the general
    /// Tonelli-Shanks algorithm is used. Either way the candidate is squared
    /// and checked against `a`, so a composite modulus cannot produce a bogus
    /// accepted root.
    pub fn sqrt(&self, a: &BoxedUint) -> Option<BoxedUint> {
        let three_mod_four = bool::from((self.as_nat() >> 1u32).is_odd());

        let root = if three_mod_four {
            // (m + 1)/4 = (m >> 2) + 1 when m ≡ 3 (mod 4)
            let exponent = (self.as_nat() >> 2u32).wrapping_add(&self.one());
            self.pow(a, &exponent)
        } else {
            self.sqrt_tonelli_shanks(a)?
        };

        if self.mul(&root, &root) == *a {
            Some(root)
        } else {
            None
        }
    }

    /// Tonelli-Shanks square root for odd prime moduli with `m ≡ 1 (mod 4)`.
    fn sqrt_tonelli_shanks(&self, a: &BoxedUint) -> Option<BoxedUint> {
        let one = self.one();
        let m_minus_1 = self.as_nat().wrapping_sub(&one);

        // Factor m - 1 = q * 2^s with q odd.
        let mut q = m_minus_1.clone();
        let mut s = 0u32;
        while !bool::from(q.is_odd()) {
            q = &q >> 1u32;
            s += 1;
        }

        // Smallest quadratic non-residue z, by Euler's criterion.
        let half = &m_minus_1 >> 1u32;
        let mut z = self.add(&one, &one);
        while self.pow(&z, &half) != m_minus_1 {
            z = self.add(&z, &one);
        }

        let mut m = s;
        let mut c = self.pow(&z, &q);
        let mut t = self.pow(a, &q);
        let q1_half = &q.wrapping_add(&one) >> 1u32;
        let mut r = self.pow(a, &q1_half);

        loop {
            if bool::from(t.is_zero()) {
                return Some(self.zero());
            }
            if t == one {
                return Some(r);
            }

            // Least i with t^(2^i) = 1; if none below m, a has no root.
            let mut i = 1u32;
            let mut t2 = self.mul(&t, &t);
            while t2 != one && i < m {
                t2 = self.mul(&t2, &t2);
                i += 1;
            }
            if i == m {
                return None;
            }

            let mut b = c.clone();
            for _ in 0..(m - i - 1) {
                b = self.mul(&b, &b);
            }

            m = i;
            c = self.mul(&b, &b);
            t = self.mul(&t, &c);
            r = self.mul(&r, &b);
        }
    }
}
