//! Row partitioning policies.
//!
//! Per-pixel cost varies by orders of magnitude across a Mandelbrot image:
//! rows crossing the set run every pixel to the escape limit while rows near
//! the edge of the plane escape in one or two iterations. Giving every worker
//! the same number of *contiguous* rows therefore leaves some threads idle
//! while others finish the expensive middle of the image. The policies here
//! trade that off differently:
//!
//! - [`PartitionPolicy::Equal`]: contiguous bands of equal row count.
//! - [`PartitionPolicy::Banded`]: contiguous bands sized by hand-tuned
//!   weights, with a final band absorbing the remainder.
//! - [`PartitionPolicy::Shuffled`]: a random permutation of the rows cut into
//!   equal slices, which equalizes expected cost without knowing where the
//!   set lies.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{validation_error, Result};

/// Band weights tuned for the default `[-2, 2] x [-2, 2]` plane on 4 threads.
/// The fourth band receives the remaining 43%.
pub const DEFAULT_BAND_WEIGHTS: [f32; 3] = [0.43, 0.07, 0.07];

/// How image rows are divided among worker threads.
#[derive(Clone, Debug, PartialEq)]
pub enum PartitionPolicy {
    /// `num_threads` contiguous bands of (nearly) equal height.
    Equal,
    /// Contiguous bands in row order. Band `i < num_threads - 1` gets
    /// `floor(height * weights[i])` rows; the last band gets the rest.
    Banded(Vec<f32>),
    /// Randomly permuted rows split into `num_threads` slices. A seed makes
    /// the permutation reproducible.
    Shuffled { seed: Option<u64> },
}

impl Default for PartitionPolicy {
    fn default() -> Self {
        PartitionPolicy::Shuffled { seed: None }
    }
}

impl PartitionPolicy {
    /// Banded policy with [`DEFAULT_BAND_WEIGHTS`].
    pub fn banded() -> Self {
        PartitionPolicy::Banded(DEFAULT_BAND_WEIGHTS.to_vec())
    }

    pub fn shuffled() -> Self {
        PartitionPolicy::Shuffled { seed: None }
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        PartitionPolicy::Shuffled { seed: Some(seed) }
    }

    /// Checks that the policy can produce `num_threads` workloads.
    pub fn validate(&self, num_threads: usize) -> Result<()> {
        if num_threads == 0 {
            return Err(validation_error("num_threads must be at least 1"));
        }

        if let PartitionPolicy::Banded(weights) = self {
            if weights.len() + 1 != num_threads {
                return Err(validation_error(format!(
                    "banded policy needs num_threads - 1 = {} weights, got {}",
                    num_threads - 1,
                    weights.len()
                )));
            }

            if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
                return Err(validation_error(format!(
                    "band weights must be finite and non-negative, got {w}"
                )));
            }

            let total: f32 = weights.iter().sum();
            if total > 1.0 + f32::EPSILON {
                return Err(validation_error(format!(
                    "band weights must sum to at most 1, got {total}"
                )));
            }
        }

        Ok(())
    }

    /// Splits rows `0..height` into `num_threads` workloads.
    pub fn assign(&self, height: usize, num_threads: usize) -> Result<RowAssignment> {
        self.validate(num_threads)?;

        let workloads = match self {
            PartitionPolicy::Equal => contiguous(&equal_sizes(height, num_threads)),
            PartitionPolicy::Banded(weights) => contiguous(&band_sizes(height, weights)),
            PartitionPolicy::Shuffled { seed } => shuffled(height, num_threads, *seed),
        };

        let assignment = RowAssignment { workloads };
        log::trace!(
            "{:?} assigned {} rows as {:?}",
            self,
            height,
            assignment.workload_sizes()
        );

        Ok(assignment)
    }
}

/// Rows owned by each worker, in processing order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowAssignment {
    workloads: Vec<Vec<usize>>,
}

impl RowAssignment {
    /// Wraps hand-built workloads. The driver still checks that they
    /// partition the image before rendering.
    pub fn new(workloads: Vec<Vec<usize>>) -> Self {
        Self { workloads }
    }

    pub fn num_workers(&self) -> usize {
        self.workloads.len()
    }

    pub fn workloads(&self) -> &[Vec<usize>] {
        &self.workloads
    }

    pub fn workload_sizes(&self) -> Vec<usize> {
        self.workloads.iter().map(Vec::len).collect()
    }

    /// `true` if every row in `0..height` appears in exactly one workload and
    /// no workload holds a row outside that range.
    pub fn is_partition_of(&self, height: usize) -> bool {
        let mut seen = vec![false; height];

        for &row in self.workloads.iter().flatten() {
            match seen.get_mut(row) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }

        seen.into_iter().all(|slot| slot)
    }

    pub fn into_workloads(self) -> Vec<Vec<usize>> {
        self.workloads
    }
}

fn equal_sizes(height: usize, num_threads: usize) -> Vec<usize> {
    let base = height / num_threads;
    let extra = height % num_threads;

    (0..num_threads)
        .map(|worker| base + usize::from(worker < extra))
        .collect()
}

fn band_sizes(height: usize, weights: &[f32]) -> Vec<usize> {
    let mut remaining = height;
    let mut sizes = Vec::with_capacity(weights.len() + 1);

    for &weight in weights {
        let size = ((height as f32 * weight) as usize).min(remaining);
        sizes.push(size);
        remaining -= size;
    }

    sizes.push(remaining);
    sizes
}

fn contiguous(sizes: &[usize]) -> Vec<Vec<usize>> {
    let mut start = 0;

    sizes
        .iter()
        .map(|&size| {
            let band = (start..start + size).collect();
            start += size;
            band
        })
        .collect()
}

fn shuffled(height: usize, num_threads: usize, seed: Option<u64>) -> Vec<Vec<usize>> {
    let mut rows: Vec<usize> = (0..height).collect();

    match seed {
        Some(seed) => rows.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => rows.shuffle(&mut rand::rng()),
    }

    // Cut the permutation into slices; the first `height % num_threads`
    // workers take one extra row so nothing is dropped.
    let mut start = 0;
    equal_sizes(height, num_threads)
        .into_iter()
        .map(|size| {
            let slice = rows[start..start + size].to_vec();
            start += size;
            slice
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands() {
        let assignment = PartitionPolicy::banded().assign(100, 4).unwrap();

        assert_eq!(assignment.workload_sizes(), vec![43, 7, 7, 43]);
        assert_eq!(assignment.workloads()[1].first(), Some(&43));
        assert!(assignment.is_partition_of(100));
    }

    #[test]
    fn test_bands_absorb_rounding() {
        let assignment = PartitionPolicy::banded().assign(1601, 4).unwrap();
        let sizes = assignment.workload_sizes();

        assert_eq!(sizes.iter().sum::<usize>(), 1601);
        assert!(assignment.is_partition_of(1601));
    }

    #[test]
    fn test_bands_are_in_row_order() {
        let assignment = PartitionPolicy::banded().assign(50, 4).unwrap();
        let flattened: Vec<usize> = assignment.into_workloads().into_iter().flatten().collect();

        assert_eq!(flattened, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_equal_spreads_remainder() {
        let assignment = PartitionPolicy::Equal.assign(10, 4).unwrap();

        assert_eq!(assignment.workload_sizes(), vec![3, 3, 2, 2]);
        assert!(assignment.is_partition_of(10));
    }

    #[test]
    fn test_shuffled_keeps_every_row() {
        for height in [2, 7, 64, 1001] {
            for num_threads in [1, 3, 4, 8] {
                let assignment = PartitionPolicy::shuffled().assign(height, num_threads).unwrap();

                assert_eq!(assignment.num_workers(), num_threads);
                assert!(
                    assignment.is_partition_of(height),
                    "height {height}, {num_threads} threads"
                );
            }
        }
    }

    #[test]
    fn test_shuffled_seed_is_reproducible() {
        let policy = PartitionPolicy::shuffled_with_seed(42);

        let a = policy.assign(256, 4).unwrap();
        let b = policy.assign(256, 4).unwrap();
        let c = PartitionPolicy::shuffled_with_seed(7).assign(256, 4).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_more_threads_than_rows() {
        for policy in [PartitionPolicy::Equal, PartitionPolicy::shuffled()] {
            let assignment = policy.assign(3, 8).unwrap();

            assert_eq!(assignment.num_workers(), 8);
            assert!(assignment.is_partition_of(3));
        }
    }

    #[test]
    fn test_banded_validation() {
        assert!(PartitionPolicy::banded().validate(4).is_ok());
        assert!(PartitionPolicy::banded().validate(8).is_err());
        assert!(PartitionPolicy::Banded(vec![0.6, 0.6]).validate(3).is_err());
        assert!(PartitionPolicy::Banded(vec![-0.1]).validate(2).is_err());
        assert!(PartitionPolicy::Banded(vec![f32::NAN]).validate(2).is_err());
        assert!(PartitionPolicy::Banded(vec![]).validate(1).is_ok());
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(PartitionPolicy::Equal.assign(10, 0).is_err());
    }

    #[test]
    fn test_is_partition_of_detects_violations() {
        let duplicate = RowAssignment {
            workloads: vec![vec![0, 1], vec![1, 2]],
        };
        let missing = RowAssignment {
            workloads: vec![vec![0], vec![2]],
        };
        let out_of_range = RowAssignment {
            workloads: vec![vec![0, 1, 2, 3]],
        };

        assert!(!duplicate.is_partition_of(3));
        assert!(!missing.is_partition_of(3));
        assert!(!out_of_range.is_partition_of(3));
    }
}
