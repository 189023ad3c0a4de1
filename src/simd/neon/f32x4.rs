#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::simd::traits::{LaneCounter, LaneMask, SimdLanes, LANE_COUNT};
use std::ops::{Add, Mul, Sub};

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    elements: float32x4_t,
}

/// Lane mask as produced by the NEON compare instructions (all ones or zeros)
#[derive(Copy, Clone, Debug)]
pub struct Mask4 {
    bits: uint32x4_t,
}

/// Four 32-bit iteration counters
#[derive(Copy, Clone, Debug)]
pub struct U32x4 {
    counts: uint32x4_t,
}

impl SimdLanes for F32x4 {
    type Mask = Mask4;
    type Counter = U32x4;

    /// Creates a new vector with all elements set to the same value.
    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { vdupq_n_f32(value) },
        }
    }

    #[inline(always)]
    fn from_array(values: [f32; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { vld1q_f32(values.as_ptr()) },
        }
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Mask4 {
        // Compare a>b elementwise, NaN lanes are false
        Mask4 {
            bits: unsafe { vcgtq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vaddq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vsubq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vmulq_f32(self.elements, rhs.elements) },
        }
    }
}

impl LaneMask for Mask4 {
    #[inline(always)]
    fn all() -> Self {
        Self {
            bits: unsafe { vdupq_n_u32(u32::MAX) },
        }
    }

    #[inline(always)]
    fn and_not(self, other: Self) -> Self {
        // vbicq_u32(a, b) computes a & !b
        Self {
            bits: unsafe { vbicq_u32(self.bits, other.bits) },
        }
    }

    #[inline(always)]
    fn none(self) -> bool {
        unsafe { vmaxvq_u32(self.bits) == 0 }
    }
}

impl LaneCounter for U32x4 {
    type Mask = Mask4;

    #[inline(always)]
    fn zero() -> Self {
        Self {
            counts: unsafe { vdupq_n_u32(0) },
        }
    }

    #[inline(always)]
    fn increment_where(self, mask: Mask4) -> Self {
        unsafe {
            let ones = vandq_u32(mask.bits, vdupq_n_u32(1));
            Self {
                counts: vaddq_u32(self.counts, ones),
            }
        }
    }

    #[inline(always)]
    fn to_array(self) -> [u32; LANE_COUNT] {
        let mut out = [0u32; LANE_COUNT];
        unsafe { vst1q_u32(out.as_mut_ptr(), self.counts) };
        out
    }
}
