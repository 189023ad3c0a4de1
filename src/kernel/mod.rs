//! Escape-time kernels.
//!
//! [`scalar`] evaluates one point at a time and is the reference every other
//! path is checked against. [`vector`] evaluates [`crate::simd::LANE_COUNT`]
//! points of one row at once, generic over the SIMD backend.

pub mod scalar;
pub mod vector;

use crate::plane::PlaneMapper;
use crate::simd::NativeF32x4;

/// Which kernel the driver runs for each row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Kernel {
    /// One pixel per kernel call.
    Scalar,
    /// Four pixels per kernel call on the native SIMD backend.
    #[default]
    Vector,
}

impl Kernel {
    /// Renders image row `row` into `out`, which must be exactly one row wide.
    #[inline]
    pub fn render_row(self, mapper: &PlaneMapper, escape_limit: u32, row: usize, out: &mut [u32]) {
        let y = mapper.y(row);
        let xs = |col: usize| mapper.x(col);

        match self {
            Kernel::Scalar => scalar::render_row(xs, y, escape_limit, out),
            Kernel::Vector => vector::render_row::<NativeF32x4>(xs, y, escape_limit, out),
        }
    }
}
