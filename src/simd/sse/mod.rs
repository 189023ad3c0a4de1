//! SSE2 SIMD implementations for 128-bit vector operations.
//!
//! SSE2 is part of the x86_64 baseline, so this backend is available on every
//! 64-bit Intel and AMD processor without runtime detection. The build script
//! enables it through the `sse` cfg flag whenever the target has `sse2`.
//!
//! # Available Types
//!
//! - [`f32x4::F32x4`]: 128-bit vector containing 4 packed single-precision values

pub mod f32x4;
