use std::io;

use cellnet::config::SimulationConfig;
use cellnet::simulation::Simulation;
use tracing::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries exactly one line per generation.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .init();

    // A single active cell near the right edge; rule 110 grows leftwards.
    let mut sim = Simulation::new(SimulationConfig::default())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    sim.run(&mut out)?;

    Ok(())
}
