//! SIMD backends for the vector kernel.
//!
//! Exactly one native backend is compiled in, chosen by `build.rs` from the
//! target architecture and its enabled features:
//!
//! | cfg flag   | Backend                      | Register |
//! |------------|------------------------------|----------|
//! | `sse`      | [`sse::f32x4::F32x4`]        | `__m128` |
//! | `neon`     | [`neon::f32x4::F32x4`]       | `float32x4_t` |
//! | `fallback` | [`portable::F32x4`]          | `[f32; 4]` |
//!
//! [`NativeF32x4`] names whichever one was selected. The portable backend is
//! compiled in every configuration.

#[cfg(sse)]
pub mod sse;

#[cfg(neon)]
pub mod neon;

pub mod portable;

pub mod traits;

pub use traits::{LaneCounter, LaneMask, SimdLanes, LANE_COUNT};

#[cfg(sse)]
pub type NativeF32x4 = sse::f32x4::F32x4;

#[cfg(neon)]
pub type NativeF32x4 = neon::f32x4::F32x4;

#[cfg(fallback)]
pub type NativeF32x4 = portable::F32x4;
