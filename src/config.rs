//! Render configuration.
//!
//! Everything that stays fixed for the duration of a render (plane bounds,
//! escape limit, worker count, kernel and partition policy) lives in one
//! immutable [`RenderConfig`] value that is passed to the engine at call time.

use crate::error::Result;
use crate::kernel::Kernel;
use crate::partition::PartitionPolicy;
use crate::plane::PlaneBounds;

/// Default maximum iteration count.
pub const DEFAULT_ESCAPE_LIMIT: u32 = 255;

/// Default number of worker threads.
pub const DEFAULT_NUM_THREADS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub bounds: PlaneBounds,
    pub escape_limit: u32,
    pub num_threads: usize,
    pub kernel: Kernel,
    pub partition: PartitionPolicy,
}

impl Default for RenderConfig {
    /// `[-2, 2] x [-2, 2]`, 255 iterations, 4 threads, vector kernel and
    /// shuffled rows.
    fn default() -> Self {
        Self {
            bounds: PlaneBounds::default(),
            escape_limit: DEFAULT_ESCAPE_LIMIT,
            num_threads: DEFAULT_NUM_THREADS,
            kernel: Kernel::default(),
            partition: PartitionPolicy::default(),
        }
    }
}

impl RenderConfig {
    pub fn with_bounds(mut self, bounds: PlaneBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_escape_limit(mut self, escape_limit: u32) -> Self {
        self.escape_limit = escape_limit;
        self
    }

    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    pub fn with_kernel(mut self, kernel: Kernel) -> Self {
        self.kernel = kernel;
        self
    }

    pub fn with_partition(mut self, partition: PartitionPolicy) -> Self {
        self.partition = partition;
        self
    }

    /// Checks the bounds and that the partition policy fits `num_threads`.
    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        self.partition.validate(self.num_threads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = RenderConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.escape_limit, 255);
        assert_eq!(config.num_threads, 4);
        assert_eq!(config.kernel, Kernel::Vector);
    }

    #[test]
    fn test_builder_methods() {
        let config = RenderConfig::default()
            .with_escape_limit(1000)
            .with_num_threads(8)
            .with_kernel(Kernel::Scalar)
            .with_partition(PartitionPolicy::Equal)
            .with_bounds(PlaneBounds::new(-2.0, 0.47, -1.12, 1.12));

        assert_eq!(config.escape_limit, 1000);
        assert_eq!(config.num_threads, 8);
        assert_eq!(config.kernel, Kernel::Scalar);
        assert_eq!(config.partition, PartitionPolicy::Equal);
        assert_eq!(config.bounds.x_max, 0.47);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_banded_weights_must_match_threads() {
        let config = RenderConfig::default()
            .with_partition(PartitionPolicy::banded())
            .with_num_threads(8);

        assert!(config.validate().is_err());
    }
}
