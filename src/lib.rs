//! Parallel, SIMD-vectorized Mandelbrot divergence plots.
//!
//! For every pixel of a `width x height` image, `mandelplot` computes how many
//! iterations of `z <- z^2 + c` it takes for `|z|` to exceed 2, capped at an
//! escape limit. Rows are split among a fixed number of worker threads by a
//! [`PartitionPolicy`], and each row is evaluated four pixels at a time by the
//! SIMD [`Kernel::Vector`] (or one at a time by [`Kernel::Scalar`]).
//!
//! ```rust
//! use mandelplot::{render_with, Kernel, PartitionPolicy, RenderConfig};
//!
//! let (width, height) = (64, 48);
//! let mut plot = vec![0u32; width * height];
//!
//! let config = RenderConfig::default()
//!     .with_kernel(Kernel::Vector)
//!     .with_partition(PartitionPolicy::banded());
//! render_with(&config, width, height, &mut plot).unwrap();
//!
//! assert!(plot.iter().all(|&count| count <= config.escape_limit));
//! ```

pub mod config;
pub mod error;
pub mod kernel;
pub mod partition;
pub mod plane;
pub mod render;
pub mod simd;

pub use config::RenderConfig;
pub use error::{MandelplotError, Result};
pub use kernel::Kernel;
pub use partition::{PartitionPolicy, RowAssignment};
pub use plane::{PlaneBounds, PlaneMapper};
pub use render::{render, render_with, Renderer};
