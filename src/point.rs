//! Affine curve points.

use crypto_bigint::BoxedUint;

/// Point on a Weierstrass curve in affine coordinates, or the additive
/// identity.
///
/// The identity (the point at infinity) is its own variant rather than a
/// reserved coordinate pair, so no finite `(x, y)` can ever be mistaken for
/// it. The Jacobian `Z = 0` convention used inside the arithmetic engine
/// never crosses this boundary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    Identity,

    /// Finite point with the given affine coordinates.
    Finite {
        /// x-coordinate.
        x: BoxedUint,

        /// y-coordinate.
        y: BoxedUint,
    },
}

impl AffinePoint {
    /// Construct a finite point from its affine coordinates.
    ///
    /// No curve membership check is performed; see
    /// [`CurveParams::is_on_curve`][crate::CurveParams::is_on_curve].
    pub fn from_coordinates(x: BoxedUint, y: BoxedUint) -> Self {
        Self::Finite { x, y }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BoxedUint> {
        match self {
            Self::Identity => None,
            Self::Finite { x, .. } => Some(x),
        }
    }

    /// y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BoxedUint> {
        match self {
            Self::Identity => None,
            Self::Finite { y, .. } => Some(y),
        }
    }
}
