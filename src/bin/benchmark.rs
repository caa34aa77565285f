//! Timing of serial vs parallel stepping across grid sizes

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use terminal_life::{Algorithm, Evolver, Grid};

fn benchmark(algorithm: Algorithm, size: i32, iterations: u32) -> anyhow::Result<f64> {
    let evolver = Evolver::default().with_algorithm(algorithm);
    let mut grid = Grid::new(size, size)?;
    grid.randomize(&mut StdRng::seed_from_u64(size as u64), 0.3);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = evolver.step(&grid);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> anyhow::Result<()> {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [50, 100, 200, 500, 1000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations)?;
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    Ok(())
}
