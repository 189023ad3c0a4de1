//! Lane abstractions the vector kernel is written against.
//!
//! A backend provides three register types that always travel together:
//! a 4-lane `f32` vector ([`SimdLanes`]), a lane mask ([`LaneMask`]) and a
//! 4-lane `u32` counter ([`LaneCounter`]). The escape-time loop in
//! [`crate::kernel::vector`] only ever talks to these traits, so every
//! backend runs the exact same sequence of IEEE operations as the scalar
//! kernel.

use std::ops::{Add, Mul, Sub};

/// Number of pixels evaluated by one vector kernel call.
pub const LANE_COUNT: usize = 4;

/// A packed vector of [`LANE_COUNT`] single-precision floats.
pub trait SimdLanes:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Mask type produced by lane-wise comparisons.
    type Mask: LaneMask;

    /// Counter type that can be incremented under [`Self::Mask`].
    type Counter: LaneCounter<Mask = Self::Mask>;

    /// Creates a vector with every lane set to `value`.
    fn splat(value: f32) -> Self;

    /// Loads one value per lane, lane 0 first.
    fn from_array(values: [f32; LANE_COUNT]) -> Self;

    /// Lane-wise `self > rhs`. Lanes holding NaN compare false.
    fn gt_elements(self, rhs: Self) -> Self::Mask;
}

/// Per-lane boolean mask.
pub trait LaneMask: Copy {
    /// Mask with every lane set.
    fn all() -> Self;

    /// Lanes set in `self` and clear in `other`.
    fn and_not(self, other: Self) -> Self;

    /// `true` when no lane is set.
    fn none(self) -> bool;
}

/// Packed per-lane iteration counters.
pub trait LaneCounter: Copy {
    type Mask: LaneMask;

    /// Counter with every lane at zero.
    fn zero() -> Self;

    /// Adds one to every lane set in `mask`.
    fn increment_where(self, mask: Self::Mask) -> Self;

    /// Extracts the counters, lane 0 first.
    fn to_array(self) -> [u32; LANE_COUNT];
}
