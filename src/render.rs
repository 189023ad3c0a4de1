//! Parallel driver.
//!
//! A render runs in four steps:
//!
//! 1. validate the dimensions against the caller's buffer,
//! 2. ask the [`PartitionPolicy`](crate::partition::PartitionPolicy) for a
//!    [`RowAssignment`],
//! 3. split the buffer into one `&mut [u32]` per row and move each slice into
//!    the workload of the single worker that owns it,
//! 4. run every workload on a dedicated rayon pool of `num_threads` threads
//!    and wait for all of them inside `ThreadPool::scope`.
//!
//! Step 3 is what makes the writes race-free without any locking: a row that
//! is assigned twice (or never) is rejected before a thread starts, and the
//! borrow checker guarantees that no two workers hold the same row.

use std::time::Instant;

use ndarray::Array2;
use rayon::ThreadPoolBuilder;

use crate::config::RenderConfig;
use crate::error::{buffer_error, partition_error, thread_pool_error, validation_error, Result};
use crate::partition::RowAssignment;
use crate::plane::PlaneMapper;

/// Rows owned by one worker, paired with the buffer slice each row writes to.
type Workload<'a> = Vec<(usize, &'a mut [u32])>;

/// Renders divergence plots with a fixed [`RenderConfig`].
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Fills `buffer[row * width + col]` with the escape count of every pixel.
    ///
    /// Blocks until every worker has finished. Values past `width * height`
    /// are left untouched.
    pub fn render(&self, width: usize, height: usize, buffer: &mut [u32]) -> Result<()> {
        let pixels = pixel_count(width, height)?;
        if buffer.len() < pixels {
            return Err(buffer_error(pixels, buffer.len()));
        }

        let RenderConfig {
            bounds,
            escape_limit,
            num_threads,
            kernel,
            ref partition,
        } = self.config;

        let assignment = partition.assign(height, num_threads)?;
        let workloads = split_rows(&mut buffer[..pixels], width, assignment)?;
        let mapper = PlaneMapper::new(&bounds, width, height);

        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|index| format!("mandelplot-worker-{index}"))
            .build()
            .map_err(|err| thread_pool_error(num_threads, err.to_string()))?;

        let started = Instant::now();

        pool.scope(|scope| {
            for (worker, rows) in workloads.into_iter().enumerate() {
                scope.spawn(move |_| {
                    let started = Instant::now();
                    let row_count = rows.len();

                    for (row, out) in rows {
                        kernel.render_row(&mapper, escape_limit, row, out);
                    }

                    log::debug!(
                        "worker {worker}: {row_count} rows in {:.3?}",
                        started.elapsed()
                    );
                });
            }
        });

        log::debug!(
            "rendered {width}x{height} ({kernel:?}, {num_threads} threads) in {:.3?}",
            started.elapsed()
        );

        Ok(())
    }

    /// Allocates a `height x width` plot and renders into it.
    pub fn render_array(&self, width: usize, height: usize) -> Result<Array2<u32>> {
        pixel_count(width, height)?;

        let mut plot = Array2::<u32>::zeros((height, width));
        let buffer = plot
            .as_slice_mut()
            .ok_or_else(|| validation_error("plot buffer is not contiguous"))?;
        self.render(width, height, buffer)?;

        Ok(plot)
    }
}

/// Renders with [`RenderConfig::default`].
pub fn render(width: usize, height: usize, buffer: &mut [u32]) -> Result<()> {
    Renderer::default().render(width, height, buffer)
}

/// Renders with an explicit configuration.
pub fn render_with(
    config: &RenderConfig,
    width: usize,
    height: usize,
    buffer: &mut [u32],
) -> Result<()> {
    Renderer::new(config.clone())?.render(width, height, buffer)
}

fn pixel_count(width: usize, height: usize) -> Result<usize> {
    if width < 2 || height < 2 {
        return Err(validation_error(format!(
            "width and height must be at least 2, got {width}x{height}"
        )));
    }

    width
        .checked_mul(height)
        .ok_or_else(|| validation_error(format!("{width}x{height} pixels overflows usize")))
}

fn split_rows(
    buffer: &mut [u32],
    width: usize,
    assignment: RowAssignment,
) -> Result<Vec<Workload<'_>>> {
    let mut rows: Vec<Option<&mut [u32]>> = buffer.chunks_exact_mut(width).map(Some).collect();
    let mut workloads = Vec::with_capacity(assignment.num_workers());

    for assigned in assignment.into_workloads() {
        let mut workload = Vec::with_capacity(assigned.len());

        for row in assigned {
            let slot = rows
                .get_mut(row)
                .ok_or_else(|| partition_error(row, "row is outside the image"))?;
            let out = slot
                .take()
                .ok_or_else(|| partition_error(row, "row assigned to more than one worker"))?;
            workload.push((row, out));
        }

        workloads.push(workload);
    }

    if let Some(row) = rows.iter().position(Option::is_some) {
        return Err(partition_error(row, "row not assigned to any worker"));
    }

    Ok(workloads)
}
