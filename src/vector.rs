use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Integer point on the simulation grid
///
/// Coordinates are 64-bit while chain starts are limited to the `i32` range,
/// so no reachable number of unit steps can overflow them.
///
/// Equality, hashing and ordering are structural so it can key a `HashSet`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vector {
    pub x: i64,
    pub y: i64,
}

impl Vector {
    pub const ORIGIN: Vector = Vector { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Vector { x, y }
    }

    /// Per-axis sign: each coordinate becomes -1, 0 or 1
    ///
    /// This is not a normalisation of the whole vector. A gap of (2, 1)
    /// yields (1, 1), which is what lets a follower cut a corner.
    pub fn sign(self) -> Self {
        Vector::new(self.x.signum(), self.y.signum())
    }

    /// Per-axis absolute value
    pub fn abs(self) -> Self {
        Vector::new(self.x.abs(), self.y.abs())
    }

    /// Chebyshev length: max(|x|, |y|)
    pub fn chebyshev_len(self) -> i64 {
        let a = self.abs();
        a.x.max(a.y)
    }

    /// True when both axes fit in `i32`
    pub fn fits_i32(self) -> bool {
        i32::try_from(self.x).is_ok() && i32::try_from(self.y).is_ok()
    }

    /// True when both axes are within one cell of zero
    pub fn is_touching(self) -> bool {
        let a = self.abs();
        a.x <= 1 && a.y <= 1
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
