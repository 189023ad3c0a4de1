use crate::kernel::scalar;
use crate::simd::{LaneCounter, LaneMask, SimdLanes, LANE_COUNT};

/// Escape iteration counts for [`LANE_COUNT`] points sharing the imaginary
/// part `y`.
///
/// Lane `i` of the result equals `scalar::escape_count(xs[i], y, escape_limit)`.
/// A lane stops counting at the first iteration where `|z|^2 > 4`; the whole
/// batch stops as soon as no lane is still active.
#[inline(always)]
pub fn escape_counts<V: SimdLanes>(
    xs: [f32; LANE_COUNT],
    y: f32,
    escape_limit: u32,
) -> [u32; LANE_COUNT] {
    let cx = V::from_array(xs);
    let cy = V::splat(y);
    let two = V::splat(2.0);
    let four = V::splat(4.0);

    let mut re = cx;
    let mut im = cy;
    let mut active = V::Mask::all();
    let mut counts = V::Counter::zero();

    for _ in 0..escape_limit {
        let re2 = re * re;
        let im2 = im * im;

        // Once a lane leaves it never comes back, even if its iterate later
        // overflows to NaN.
        active = active.and_not((re2 + im2).gt_elements(four));
        if active.none() {
            break;
        }
        counts = counts.increment_where(active);

        im = two * re * im + cy;
        re = re2 - im2 + cx;
    }

    counts.to_array()
}

/// Vector rendering of one image row into `out`.
///
/// Full batches of [`LANE_COUNT`] columns go through [`escape_counts`]; the
/// columns left over when `out.len()` is not a multiple of the lane count are
/// finished with the scalar kernel.
pub fn render_row<V: SimdLanes>(
    xs: impl Fn(usize) -> f32,
    y: f32,
    escape_limit: u32,
    out: &mut [u32],
) {
    let tail_start = out.len() - out.len() % LANE_COUNT;

    let mut batches = out.chunks_exact_mut(LANE_COUNT);
    for (batch, chunk) in batches.by_ref().enumerate() {
        let col = batch * LANE_COUNT;
        let lanes = std::array::from_fn(|lane| xs(col + lane));
        chunk.copy_from_slice(&escape_counts::<V>(lanes, y, escape_limit));
    }

    scalar::render_row(
        |offset| xs(tail_start + offset),
        y,
        escape_limit,
        batches.into_remainder(),
    );
}
