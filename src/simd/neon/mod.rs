//! ARM NEON SIMD implementations for 128-bit vector operations.
//!
//! NEON is mandatory on AArch64, which covers Apple Silicon, AWS Graviton and
//! modern mobile devices. The build script enables this backend through the
//! `neon` cfg flag when targeting `aarch64`.
//!
//! # Available Types
//!
//! - [`f32x4::F32x4`]: 128-bit vector containing 4 packed single-precision values

pub mod f32x4;
