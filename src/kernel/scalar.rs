/// Escape iteration count of `c = x + iy`.
///
/// Returns the number of iterations of `z <- z^2 + c` (starting at `z = c`)
/// completed before `|z|^2 > 4`, or `escape_limit` if that never happens.
/// The threshold is strict: a point sitting exactly on `|z|^2 == 4` has not
/// diverged yet.
#[inline(always)]
pub fn escape_count(x: f32, y: f32, escape_limit: u32) -> u32 {
    let mut re = x;
    let mut im = y;

    for i in 0..escape_limit {
        let re2 = re * re;
        let im2 = im * im;

        if re2 + im2 > 4.0 {
            return i;
        }

        im = 2.0 * re * im + y;
        re = re2 - im2 + x;
    }

    escape_limit
}

/// Scalar rendering of one image row into `out`, one pixel per column.
pub fn render_row(xs: impl Fn(usize) -> f32, y: f32, escape_limit: u32, out: &mut [u32]) {
    for (col, pixel) in out.iter_mut().enumerate() {
        *pixel = escape_count(xs(col), y, escape_limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u32 = 255;

    #[test]
    fn test_origin_never_diverges() {
        assert_eq!(escape_count(0.0, 0.0, LIMIT), LIMIT);
    }

    #[test]
    fn test_far_point_diverges_immediately() {
        assert_eq!(escape_count(2.5, 0.0, LIMIT), 0);
        assert_eq!(escape_count(-2.0, 2.0, LIMIT), 0);
    }

    #[test]
    fn test_threshold_is_strict() {
        // z stays at 2 forever: |z|^2 == 4 is never > 4
        assert_eq!(escape_count(-2.0, 0.0, LIMIT), LIMIT);
    }

    #[test]
    fn test_counts_completed_iterations() {
        // 1 -> 2 -> 5: detected at the third check
        assert_eq!(escape_count(1.0, 0.0, LIMIT), 2);
    }

    #[test]
    fn test_limit_caps_result() {
        assert_eq!(escape_count(-0.75, 0.1, 10), 10);
        assert_eq!(escape_count(0.0, 0.0, 0), 0);
    }

    #[test]
    fn test_render_row() {
        let xs = [0.0f32, 2.5, -2.0, 1.0];
        let mut out = [0u32; 4];
        render_row(|col| xs[col], 0.0, LIMIT, &mut out);
        assert_eq!(out, [LIMIT, 0, LIMIT, 2]);
    }
}
