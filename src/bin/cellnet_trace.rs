//! JSON-lines trace of a rule-110 circuit run.
//!
//! Examples:
//!   cellnet-trace
//!   cellnet-trace --generations 60 --cells 80
//!   cellnet-trace --seed 7 --layers
//!
//! Each line is one `GenerationSnapshot`. With `--layers` the snapshot also
//! carries the circuit layers that produce the following generation.

use std::io::{self, Write};
use std::process;

use cellnet::cells::CellVector;
use cellnet::config::SimulationConfig;
use cellnet::observer::SimulationAdapter;
use cellnet::prng::Prng;
use cellnet::simulation::Simulation;
use tracing::{info, Level};

struct TraceArgs {
    cfg: SimulationConfig,
    seed: Option<u64>,
    layers: bool,
}

fn usage() -> ! {
    eprintln!("cellnet-trace (rule 110 circuit, one JSON object per generation)");
    eprintln!("Usage: cellnet-trace [options]\n");
    eprintln!("Options:");
    eprintln!("  --generations <K>   Number of generations (default 30)");
    eprintln!("  --cells <N>         Ring length (default 50)");
    eprintln!("  --seed <S>          Random initial row instead of a single cell");
    eprintln!("  --layers            Include intermediate circuit layers");
    process::exit(1);
}

fn parse_args() -> TraceArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let make_error = |msg: &str| -> ! {
        eprintln!("{}", msg);
        process::exit(1);
    };

    let mut cfg = SimulationConfig::default();
    let mut seed = None;
    let mut layers = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--generations" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage());
                cfg.generations = v
                    .parse()
                    .unwrap_or_else(|_| make_error("generations must be a number"));
                i += 2;
            }
            "--cells" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage());
                let n: usize = v
                    .parse()
                    .unwrap_or_else(|_| make_error("cells must be a number"));
                if n < SimulationConfig::MIN_CELLS || n > SimulationConfig::MAX_CELLS {
                    make_error("cells out of range");
                }
                cfg = SimulationConfig {
                    generations: cfg.generations,
                    ..SimulationConfig::with_size(n)
                };
                i += 2;
            }
            "--seed" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage());
                seed = Some(
                    v.parse()
                        .unwrap_or_else(|_| make_error("seed must be a number")),
                );
                i += 2;
            }
            "--layers" => {
                layers = true;
                i += 1;
            }
            "--help" | "-h" => usage(),
            other => make_error(&format!("Unknown option: {other}")),
        }
    }

    TraceArgs { cfg, seed, layers }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::INFO)
        .init();

    let args = parse_args();

    let mut sim = match args.seed {
        Some(seed) => {
            let mut rng = Prng::new(seed);
            let start = CellVector::random(args.cfg.cell_count, 0.5, &mut rng);
            info!(seed, active = start.active_count(), "random initial row");
            Simulation::with_state(args.cfg, start)?
        }
        None => Simulation::new(args.cfg)?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for _ in 0..args.cfg.generations {
        let snap = SimulationAdapter::new(&sim).snapshot(args.layers)?;
        serde_json::to_writer(&mut out, &snap)?;
        out.write_all(b"\n")?;
        sim.advance();
    }
    out.flush()?;

    Ok(())
}
