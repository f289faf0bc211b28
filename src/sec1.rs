//! SEC1 point encoding.
//!
//! Implements the `Elliptic-Curve-Point-to-Octet-String` and inverse
//! conversions from SEC 1: Elliptic Curve Cryptography (Version 2.0),
//! section 2.3 (equivalently ANSI X9.62 section 4.3.6): the uncompressed
//! form `04 || x || y` and the compressed form `02/03 || x`, with field
//! elements as fixed-width big-endian integers.

use crate::{curve::CurveParams, error::Error, point::AffinePoint};
use crypto_bigint::{BoxedUint, Integer};

/// Tag byte leading a SEC1-encoded point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Tag {
    /// Compressed point with an even y-coordinate.
    CompressedEvenY = 2,

    /// Compressed point with an odd y-coordinate.
    CompressedOddY = 3,

    /// Uncompressed point.
    Uncompressed = 4,
}

impl Tag {
    /// Parse a tag from the leading byte of an encoded point.
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            2 => Some(Tag::CompressedEvenY),
            3 => Some(Tag::CompressedOddY),
            4 => Some(Tag::Uncompressed),
            _ => None,
        }
    }

    /// Compressed tag for a y-coordinate of the given parity.
    fn compress(y_is_odd: bool) -> Self {
        if y_is_odd {
            Tag::CompressedOddY
        } else {
            Tag::CompressedEvenY
        }
    }
}

impl CurveParams {
    /// Serialize a point in uncompressed form: `04 || x || y`.
    ///
    /// Returns `None` for the identity, which has no such encoding.
    pub fn encode_uncompressed(&self, point: &AffinePoint) -> Option<Vec<u8>> {
        let (x, y) = match point {
            AffinePoint::Identity => return None,
            AffinePoint::Finite { x, y } => (x, y),
        };

        let p = self.field_modulus();
        let x = p.reduce(x);
        let y = p.reduce(y);

        let len = self.field_byte_len();
        let mut out = vec![0u8; 1 + 2 * len];
        out[0] = Tag::Uncompressed as u8;
        encode_field_element(&x, &mut out[1..1 + len]);
        encode_field_element(&y, &mut out[1 + len..]);
        Some(out)
    }

    /// Serialize a point in compressed form: `02/03 || x`, the tag carrying
    /// the parity of y.
    ///
    /// Returns `None` for the identity, which has no such encoding.
    pub fn encode_compressed(&self, point: &AffinePoint) -> Option<Vec<u8>> {
        let (x, y) = match point {
            AffinePoint::Identity => return None,
            AffinePoint::Finite { x, y } => (x, y),
        };

        let p = self.field_modulus();
        let x = p.reduce(x);
        let y = p.reduce(y);

        let len = self.field_byte_len();
        let mut out = vec![0u8; 1 + len];
        out[0] = Tag::compress(bool::from(y.is_odd())) as u8;
        encode_field_element(&x, &mut out[1..]);
        Some(out)
    }

    /// Deserialize a point in uncompressed form.
    ///
    /// Returns `None` unless the input has exactly the expected length, the
    /// `04` tag, both coordinates strictly below the field modulus, and the
    /// decoded point satisfies the curve equation.
    pub fn decode_uncompressed(&self, data: &[u8]) -> Option<AffinePoint> {
        let len = self.field_byte_len();
        if data.len() != 1 + 2 * len {
            return None;
        }
        if Tag::from_u8(data[0])? != Tag::Uncompressed {
            return None;
        }

        let p = self.field_modulus();
        let x = p.from_be_bytes(&data[1..1 + len])?;
        let y = p.from_be_bytes(&data[1 + len..])?;
        if x >= *p.as_nat() || y >= *p.as_nat() {
            return None;
        }

        let point = AffinePoint::from_coordinates(x, y);
        if !self.is_on_curve(&point) {
            return None;
        }
        Some(point)
    }

    /// Deserialize a point in compressed form, recovering y from the curve
    /// equation.
    ///
    /// Returns `None` unless the input has exactly the expected length, an
    /// `02`/`03` tag, and an x-coordinate strictly below the field modulus
    /// for which `x³ - 3x + b` has a square root. Of the two roots, the one
    /// whose parity matches the tag is selected.
    pub fn decode_compressed(&self, data: &[u8]) -> Option<AffinePoint> {
        let len = self.field_byte_len();
        if data.len() != 1 + len {
            return None;
        }
        let y_is_odd = match Tag::from_u8(data[0])? {
            Tag::CompressedEvenY => false,
            Tag::CompressedOddY => true,
            Tag::Uncompressed => return None,
        };

        let p = self.field_modulus();
        let x = p.from_be_bytes(&data[1..])?;
        if x >= *p.as_nat() {
            return None;
        }

        let alpha = self.equation(&x);
        let beta = p.sqrt(&alpha)?;
        let y = if bool::from(beta.is_odd()) == y_is_odd {
            beta
        } else {
            p.neg(&beta)
        };

        // Guards against a defective square root: the decoded point must
        // still satisfy the curve equation.
        let point = AffinePoint::from_coordinates(x, y);
        if !self.is_on_curve(&point) {
            return None;
        }
        Some(point)
    }

    /// Deserialize a point in either SEC1 form, dispatching on the tag.
    pub fn decode_point(&self, data: &[u8]) -> Result<AffinePoint, Error> {
        match data.first().copied().and_then(Tag::from_u8) {
            Some(Tag::Uncompressed) => self.decode_uncompressed(data),
            Some(Tag::CompressedEvenY) | Some(Tag::CompressedOddY) => {
                self.decode_compressed(data)
            }
            None => None,
        }
        .ok_or(Error)
    }
}

/// Write a fixed-width big-endian encoding of `x` into `out`.
fn encode_field_element(x: &BoxedUint, out: &mut [u8]) {
    let bytes = x.to_be_bytes();
    debug_assert!(bytes.len() >= out.len());
    out.copy_from_slice(&bytes[bytes.len() - out.len()..]);
}

#[cfg(test)]
mod tests {
    use super::Tag;

    #[test]
    fn tag_round_trip() {
        for tag in [Tag::CompressedEvenY, Tag::CompressedOddY, Tag::Uncompressed] {
            assert_eq!(Tag::from_u8(tag as u8), Some(tag));
        }
    }

    #[test]
    fn tag_rejects_unknown_bytes() {
        for byte in [0u8, 1, 5, 6, 0x42, 0xff] {
            assert_eq!(Tag::from_u8(byte), None);
        }
    }
}
