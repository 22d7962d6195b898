//! Immutable 3-vector in phase space.

use crate::{LzResult, Real, ensure_finite};

/// An ordered `(x, y, z)` triple. Serialized as a bare `[x, y, z]` array.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 3]", into = "[f64; 3]")
)]
pub struct Point {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0, 0.0);

    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Reject points with a NaN or infinite component.
    pub fn ensure_finite(self) -> LzResult<Self> {
        ensure_finite(self.x, "x")?;
        ensure_finite(self.y, "y")?;
        ensure_finite(self.z, "z")?;
        Ok(self)
    }

    pub fn distance(&self, other: &Point) -> Real {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn to_array(self) -> [Real; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[Real; 3]> for Point {
    fn from([x, y, z]: [Real; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Point> for [Real; 3] {
    fn from(p: Point) -> Self {
        p.to_array()
    }
}

impl From<(Real, Real, Real)> for Point {
    fn from((x, y, z): (Real, Real, Real)) -> Self {
        Self { x, y, z }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn distance_is_symmetric(
            a in prop::array::uniform3(-100.0_f64..100.0),
            b in prop::array::uniform3(-100.0_f64..100.0),
        ) {
            let (a, b) = (Point::from(a), Point::from(b));
            prop_assert_eq!(a.distance(&b), b.distance(&a));
            prop_assert_eq!(a.distance(&a), 0.0);
        }
    }
}
