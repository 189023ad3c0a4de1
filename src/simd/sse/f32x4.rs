//! SSE2 4-lane f32 SIMD vector implementation.
//!
//! `F32x4` wraps an `__m128` register, `Mask4` the all-ones/all-zeros lane
//! mask produced by `_mm_cmpgt_ps`, and `U32x4` an `__m128i` holding the
//! per-lane iteration counters.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: any x86_64 processor (SSE2 is part of the baseline ISA)
//! - **Target Architecture**: x86 or x86_64 with `sse2` enabled
//! - **Compilation**: selected by `build.rs` through the `sse` cfg flag

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Mul, Sub};

use crate::simd::traits::{LaneCounter, LaneMask, SimdLanes, LANE_COUNT};

/// SSE2 SIMD vector containing 4 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    elements: __m128,
}

/// Lane mask, each lane either all ones or all zeros.
#[derive(Copy, Clone, Debug)]
pub struct Mask4 {
    bits: __m128,
}

/// Four packed 32-bit iteration counters.
#[derive(Copy, Clone, Debug)]
pub struct U32x4 {
    counts: __m128i,
}

impl SimdLanes for F32x4 {
    type Mask = Mask4;
    type Counter = U32x4;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { _mm_set1_ps(value) },
        }
    }

    #[inline(always)]
    fn from_array(values: [f32; LANE_COUNT]) -> Self {
        // SAFETY: `values` holds exactly LANE_COUNT f32, unaligned load is allowed.
        Self {
            elements: unsafe { _mm_loadu_ps(values.as_ptr()) },
        }
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Mask4 {
        // Ordered compare: NaN lanes come out as zero
        Mask4 {
            bits: unsafe { _mm_cmpgt_ps(self.elements, rhs.elements) },
        }
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_add_ps(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_sub_ps(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_mul_ps(self.elements, rhs.elements) },
        }
    }
}

impl LaneMask for Mask4 {
    #[inline(always)]
    fn all() -> Self {
        Self {
            bits: unsafe { _mm_castsi128_ps(_mm_set1_epi32(-1)) },
        }
    }

    #[inline(always)]
    fn and_not(self, other: Self) -> Self {
        // _mm_andnot_ps(a, b) computes !a & b
        Self {
            bits: unsafe { _mm_andnot_ps(other.bits, self.bits) },
        }
    }

    #[inline(always)]
    fn none(self) -> bool {
        unsafe { _mm_movemask_ps(self.bits) & 0x0F == 0 }
    }
}

impl LaneCounter for U32x4 {
    type Mask = Mask4;

    #[inline(always)]
    fn zero() -> Self {
        Self {
            counts: unsafe { _mm_setzero_si128() },
        }
    }

    #[inline(always)]
    fn increment_where(self, mask: Mask4) -> Self {
        unsafe {
            let ones = _mm_and_si128(_mm_castps_si128(mask.bits), _mm_set1_epi32(1));
            Self {
                counts: _mm_add_epi32(self.counts, ones),
            }
        }
    }

    #[inline(always)]
    fn to_array(self) -> [u32; LANE_COUNT] {
        let mut out = [0u32; LANE_COUNT];
        // SAFETY: `out` is 16 bytes long, unaligned store is allowed.
        unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, self.counts) };
        out
    }
}
