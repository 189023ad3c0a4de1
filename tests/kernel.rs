use mandelplot::kernel::{scalar, vector};
use mandelplot::simd::{portable, NativeF32x4, LANE_COUNT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LIMIT: u32 = 255;

fn assert_lanes_match_scalar(xs: [f32; LANE_COUNT], y: f32, limit: u32) {
    let native = vector::escape_counts::<NativeF32x4>(xs, y, limit);
    let portable = vector::escape_counts::<portable::F32x4>(xs, y, limit);

    for (lane, &x) in xs.iter().enumerate() {
        let expected = scalar::escape_count(x, y, limit);
        assert_eq!(
            native[lane], expected,
            "native backend differs from scalar at ({x}, {y}), lane {lane}"
        );
        assert_eq!(
            portable[lane], expected,
            "portable backend differs from scalar at ({x}, {y}), lane {lane}"
        );
    }
}

/// Test reference points whose escape counts are known exactly.
#[test]
fn test_reference_points() {
    assert_eq!(scalar::escape_count(0.0, 0.0, LIMIT), LIMIT);
    assert_eq!(scalar::escape_count(2.5, 0.0, LIMIT), 0);
    assert_eq!(scalar::escape_count(-2.0, 0.0, LIMIT), LIMIT);
    assert_eq!(scalar::escape_count(1.0, 0.0, LIMIT), 2);
    assert_eq!(scalar::escape_count(-1.0, 0.0, LIMIT), LIMIT);
    assert_eq!(scalar::escape_count(0.0, 1.0, LIMIT), LIMIT);

    assert_lanes_match_scalar([0.0, 2.5, -2.0, 1.0], 0.0, LIMIT);
}

/// Test lanes that diverge at very different iterations within one batch.
#[test]
fn test_mixed_batches() {
    let test_cases = [
        ([-0.75f32, 0.25, 0.3, 3.0], 0.0f32),
        ([-0.7454, -0.7453, -0.7452, -0.7451], 0.1130),
        ([-2.0, -1.5, 0.4, 0.45], 0.5),
        ([0.2501, 0.26, 0.28, -1.75], 0.0),
        ([-0.1, 0.0, 0.1, 0.2], -0.65),
    ];

    for (xs, y) in test_cases {
        assert_lanes_match_scalar(xs, y, LIMIT);
        assert_lanes_match_scalar(xs, y, 1000);
        assert_lanes_match_scalar(xs, y, 1);
    }
}

/// Test that a zero escape limit yields zero everywhere.
#[test]
fn test_zero_limit() {
    assert_eq!(
        vector::escape_counts::<NativeF32x4>([0.0, 1.0, 2.5, -2.0], 0.0, 0),
        [0; LANE_COUNT]
    );
    assert_eq!(scalar::escape_count(0.0, 0.0, 0), 0);
}

/// Test non-finite inputs behave the same in every kernel.
#[test]
fn test_non_finite_inputs() {
    assert_lanes_match_scalar([f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 0.0], 0.0, LIMIT);
    assert_lanes_match_scalar([0.0, 0.1, -0.1, 0.2], f32::NAN, LIMIT);
}

/// Test lane equivalence with randomly generated points around the set.
#[test]
fn test_random_points_match_scalar() {
    let mut rng = StdRng::seed_from_u64(12345);
    let test_size = 5000;

    for _ in 0..test_size {
        let y = rng.random_range(-1.5f32..1.5);
        let xs: [f32; LANE_COUNT] = std::array::from_fn(|_| rng.random_range(-2.5f32..1.0));

        assert_lanes_match_scalar(xs, y, LIMIT);
    }
}

/// Test rows whose width is not a multiple of the lane count.
#[test]
fn test_row_rendering_matches_scalar() {
    let mut rng = StdRng::seed_from_u64(42);

    for width in [1usize, 3, 4, 5, 8, 13, 64, 101] {
        let y = rng.random_range(-1.2f32..1.2);
        let x0 = -2.0f32;
        let dx = 2.5 / width as f32;
        let xs = |col: usize| x0 + col as f32 * dx;

        let mut vector_row = vec![u32::MAX; width];
        let mut scalar_row = vec![u32::MAX; width];
        vector::render_row::<NativeF32x4>(xs, y, LIMIT, &mut vector_row);
        scalar::render_row(xs, y, LIMIT, &mut scalar_row);

        assert_eq!(vector_row, scalar_row, "row of width {width} at y = {y}");
    }
}
