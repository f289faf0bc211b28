//! Generic arithmetic for `a = -3` short Weierstrass elliptic curves over
//! prime fields.
//!
//! The group law is implemented in Jacobian projective coordinates on top of
//! an arbitrary-precision modular arithmetic backend
//! ([`crypto_bigint::BoxedUint`]), so a curve of this family is driven by its
//! numeric parameters alone: no per-curve field implementation is required.
//! Shared parameters for NIST P-384 and P-521 (FIPS 186-3, sections D.2.4
//! and D.2.5) are built in; see [`p384`] and [`p521`].
//!
//! On top of the group law the crate provides SEC1 point encoding and
//! decoding in both uncompressed and compressed form, and key generation
//! with rejection sampling.
//!
//! # ⚠️ Security Warning
//!
//! Scalar multiplication is implemented with a plain double-and-add loop and
//! is **not constant-time**: its control flow depends on the scalar. Use a
//! curve-specific constant-time implementation wherever side channels are a
//! concern.
//!
//! ```
//! use primecurve::p384;
//!
//! let curve = p384();
//! let point = curve.double(&curve.generator());
//! assert!(curve.is_on_curve(&point));
//!
//! let encoded = curve.encode_compressed(&point).expect("finite point");
//! assert_eq!(curve.decode_compressed(&encoded), Some(point));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

mod arithmetic;
mod curve;
mod error;
mod modulus;
mod point;
mod sec1;
mod secret_key;

pub use crate::{
    curve::{p384, p521, CurveParams},
    error::Error,
    modulus::Modulus,
    point::AffinePoint,
    sec1::Tag,
    secret_key::SecretKey,
};

pub use crypto_bigint::{self, BoxedUint};
pub use rand_core;
