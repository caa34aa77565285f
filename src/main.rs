use std::io;
use std::thread;

use anyhow::Context;
use clap::Parser;
use terminal_life::{Config, Simulation, rendering::TerminalRenderer};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("terminal_life=info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::parse();
    debug!(?config, "parsed configuration");

    let grid = config.build_grid().context("could not build the starting grid")?;
    let evolver = config.build_evolver().context("could not set up the rule")?;
    let mut sim = Simulation::new(grid, evolver);
    let mut renderer = TerminalRenderer::new(io::stdout().lock(), !config.no_clear);

    info!(
        width = config.width,
        height = config.height,
        rule = %config.rule,
        "starting simulation"
    );

    loop {
        renderer.draw(&sim).context("failed to draw frame")?;

        if config.generations.is_some_and(|limit| sim.generation() >= limit) {
            break;
        }
        thread::sleep(config.delay());
        sim.advance();
    }

    info!(generation = sim.generation(), population = sim.population(), "simulation stopped");
    Ok(())
}
