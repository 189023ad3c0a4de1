use std::env;
use std::process;
use std::time::Instant;

use mandelplot::{Kernel, PartitionPolicy, RenderConfig, Renderer};

const DEFAULT_WIDTH: usize = 2560;
const DEFAULT_HEIGHT: usize = 1600;

fn parse_dimension(args: &[String], index: usize, default: usize) -> usize {
    match args.get(index) {
        None => default,
        Some(arg) => match arg.parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("Error: '{arg}' is not a valid image dimension.");
                process::exit(1);
            }
        },
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let width = parse_dimension(&args, 1, DEFAULT_WIDTH);
    let height = parse_dimension(&args, 2, DEFAULT_HEIGHT);

    let mut plot = vec![0u32; width * height];

    let policies = [
        ("banded", PartitionPolicy::banded()),
        ("equal", PartitionPolicy::Equal),
        ("shuffled", PartitionPolicy::shuffled()),
    ];

    for kernel in [Kernel::Scalar, Kernel::Vector] {
        for (name, policy) in &policies {
            let config = RenderConfig::default()
                .with_kernel(kernel)
                .with_partition(policy.clone());

            let renderer = match Renderer::new(config) {
                Ok(renderer) => renderer,
                Err(err) => {
                    log::error!("invalid configuration: {err}");
                    process::exit(1);
                }
            };

            plot.fill(0);
            let started = Instant::now();

            if let Err(err) = renderer.render(width, height, &mut plot) {
                log::error!("render failed: {err}");
                process::exit(1);
            }

            let escape_limit = renderer.config().escape_limit;
            let inside = plot.iter().filter(|&&count| count == escape_limit).count();

            log::info!(
                "{kernel:?} / {name}: {width}x{height} in {:.3}s, {:.1}% of pixels inside the set",
                started.elapsed().as_secs_f32(),
                100.0 * inside as f64 / plot.len() as f64
            );
        }
    }
}
