#![forbid(unsafe_code)]

//! Circles: the only shape the indicator is made of.

use crate::vec::Vec2;

/// A circle in surface coordinates.
///
/// Plain data with no identity beyond structural equality. Hosts treat a
/// non-positive radius as "draw nothing"; the blend filters those before
/// emitting anything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    #[inline]
    #[must_use]
    pub const fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Convenience constructor from raw coordinates.
    #[inline]
    #[must_use]
    pub const fn at(x: f64, y: f64, radius: f64) -> Self {
        Self::new(Vec2::new(x, y), radius)
    }

    /// Euclidean distance between centers. Zero for coincident centers.
    #[inline]
    #[must_use]
    pub fn distance_to(self, other: Circle) -> f64 {
        (self.center - other.center).length()
    }
}
