//! Secret scalar generation.

use crate::{curve::CurveParams, point::AffinePoint};
use core::fmt;
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

/// Masks for the most significant byte of a freshly sampled scalar, indexed
/// by `bit_length % 8`. Index 0 means the order's bit length is a whole
/// number of bytes: there are no excess bits, so nothing is masked off.
const HIGH_BYTE_MASK: [u8; 8] = [0xff, 0x01, 0x03, 0x07, 0x0f, 0x1f, 0x3f, 0x7f];

/// Secret scalar together with the public point it determines.
///
/// The scalar bytes are zeroized on drop.
pub struct SecretKey {
    bytes: Zeroizing<Vec<u8>>,
    public: AffinePoint,
}

impl SecretKey {
    /// Generate a key pair for the given curve using the supplied
    /// cryptographically secure random source.
    ///
    /// Scalars are sampled by rejection: a candidate of
    /// `ceil(bitlen(n) / 8)` random bytes has its excess high bits masked
    /// off, and is discarded and redrawn if it is zero or not below the base
    /// point order `n`. A failure of the random source itself is returned
    /// immediately and never retried.
    pub fn random(
        curve: &CurveParams,
        rng: &mut impl CryptoRngCore,
    ) -> Result<Self, rand_core::Error> {
        let n = curve.order();
        let bit_len = n.bits();
        let byte_len = ((bit_len + 7) / 8) as usize;
        let mut bytes = Zeroizing::new(vec![0u8; byte_len]);

        loop {
            rng.try_fill_bytes(&mut bytes)?;
            bytes[0] &= HIGH_BYTE_MASK[(bit_len % 8) as usize];

            let scalar = n
                .from_be_bytes(&bytes)
                .expect("scalar candidate fits the order's precision");

            // Out-of-range and zero candidates are discarded and resampled.
            if scalar >= *n.as_nat() || bool::from(scalar.is_zero()) {
                continue;
            }

            let public = curve.scalar_base_mul(&bytes);
            return Ok(Self { bytes, public });
        }
    }

    /// Big-endian bytes of the secret scalar, `ceil(bitlen(n) / 8)` wide.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Public point corresponding to the secret scalar.
    pub fn public_point(&self) -> &AffinePoint {
        &self.public
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Deliberately omits the scalar bytes.
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}
