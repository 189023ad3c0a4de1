//! Portable 4-lane backend built on plain arrays.
//!
//! Always compiled. It is the native backend when the build script selects
//! the `fallback` cfg, and the tests use it as a second vector implementation
//! to check the native one against.

use std::ops::{Add, Mul, Sub};

use crate::simd::traits::{LaneCounter, LaneMask, SimdLanes, LANE_COUNT};

/// Four `f32` lanes stored in an array.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct F32x4 {
    elements: [f32; LANE_COUNT],
}

/// Four boolean lanes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mask4 {
    lanes: [bool; LANE_COUNT],
}

/// Four `u32` counters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct U32x4 {
    counts: [u32; LANE_COUNT],
}

impl F32x4 {
    #[inline(always)]
    fn zip_with(self, rhs: Self, op: impl Fn(f32, f32) -> f32) -> Self {
        Self {
            elements: std::array::from_fn(|lane| op(self.elements[lane], rhs.elements[lane])),
        }
    }
}

impl SimdLanes for F32x4 {
    type Mask = Mask4;
    type Counter = U32x4;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: [value; LANE_COUNT],
        }
    }

    #[inline(always)]
    fn from_array(values: [f32; LANE_COUNT]) -> Self {
        Self { elements: values }
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Mask4 {
        Mask4 {
            lanes: std::array::from_fn(|lane| self.elements[lane] > rhs.elements[lane]),
        }
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl LaneMask for Mask4 {
    #[inline(always)]
    fn all() -> Self {
        Self {
            lanes: [true; LANE_COUNT],
        }
    }

    #[inline(always)]
    fn and_not(self, other: Self) -> Self {
        Self {
            lanes: std::array::from_fn(|lane| self.lanes[lane] && !other.lanes[lane]),
        }
    }

    #[inline(always)]
    fn none(self) -> bool {
        !self.lanes.iter().any(|&lane| lane)
    }
}

impl LaneCounter for U32x4 {
    type Mask = Mask4;

    #[inline(always)]
    fn zero() -> Self {
        Self {
            counts: [0; LANE_COUNT],
        }
    }

    #[inline(always)]
    fn increment_where(self, mask: Mask4) -> Self {
        Self {
            counts: std::array::from_fn(|lane| self.counts[lane] + u32::from(mask.lanes[lane])),
        }
    }

    #[inline(always)]
    fn to_array(self) -> [u32; LANE_COUNT] {
        self.counts
    }
}
