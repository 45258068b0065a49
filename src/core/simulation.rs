use std::io::Write;

use tracing::{debug, info};

use crate::cells::CellVector;
use crate::config::SimulationConfig;
use crate::error::{CellnetError, Result};
use crate::rule110::Rule110Net;

/// Drives the circuit over a ring for a fixed number of generations.
///
/// The current generation is an owned value: each `advance` hands it to the
/// circuit and replaces it with the returned row.
#[derive(Debug, Clone)]
pub struct Simulation {
    cfg: SimulationConfig,
    net: Rule110Net,
    state: CellVector,
    generation: usize,
}

impl Simulation {
    /// Start from the one-hot row described by `cfg`.
    pub fn new(cfg: SimulationConfig) -> Result<Self> {
        cfg.validate()?;
        let state = CellVector::single_active(cfg.cell_count, cfg.active_index);
        Ok(Self::assemble(cfg, state))
    }

    /// Start from an explicit row. Its length must equal `cfg.cell_count`.
    pub fn with_state(cfg: SimulationConfig, state: CellVector) -> Result<Self> {
        cfg.validate()?;
        if state.len() != cfg.cell_count {
            return Err(CellnetError::InvalidConfig(
                "initial state length must equal cell_count",
            ));
        }
        Ok(Self::assemble(cfg, state))
    }

    fn assemble(cfg: SimulationConfig, state: CellVector) -> Self {
        Self {
            net: Rule110Net::with_tier(cfg.execution_tier),
            cfg,
            state,
            generation: 0,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.cfg
    }

    pub fn net(&self) -> &Rule110Net {
        &self.net
    }

    /// Current generation.
    pub fn state(&self) -> &CellVector {
        &self.state
    }

    /// Index of the current generation (0 for the initial row).
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn advance(&mut self) {
        self.state = self.net.step(&self.state);
        self.generation += 1;
        debug!(
            generation = self.generation,
            active = self.state.active_count(),
            "advanced"
        );
    }

    /// Render the current generation as one line of glyphs.
    pub fn render_current(&self) -> Result<String> {
        self.cfg.glyphs.render(self.state.as_slice())
    }

    /// Render then advance, `cfg.generations` times, one line per generation.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        info!(
            cells = self.cfg.cell_count,
            generations = self.cfg.generations,
            tier = self.net.effective_execution_tier().name(),
            "running rule 110 circuit"
        );
        for _ in 0..self.cfg.generations {
            let line = self.render_current()?;
            writeln!(out, "{line}")?;
            self.advance();
        }
        out.flush()?;
        Ok(())
    }

    /// The next `count` generations, starting with the current one.
    pub fn collect_generations(&mut self, count: usize) -> Vec<CellVector> {
        let mut rows = Vec::with_capacity(count);
        for _ in 0..count {
            rows.push(self.state.clone());
            self.advance();
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::ExecutionTier;
    use crate::prng::Prng;
    use crate::rule110::rule110_reference;

    fn row(len: usize, active: &[usize]) -> String {
        (0..len)
            .map(|i| if active.contains(&i) { '█' } else { '.' })
            .collect()
    }

    fn run_to_string(cfg: SimulationConfig) -> String {
        let mut sim = Simulation::new(cfg).unwrap();
        let mut out: Vec<u8> = Vec::new();
        sim.run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Boolean rule applied directly, no arithmetic circuit.
    fn reference_generations(start: &[bool], count: usize) -> Vec<Vec<bool>> {
        let n = start.len();
        let mut rows = vec![start.to_vec()];
        while rows.len() < count {
            let prev = &rows[rows.len() - 1];
            let next = (0..n)
                .map(|i| rule110_reference(prev[(i + n - 1) % n], prev[i], prev[(i + 1) % n]))
                .collect();
            rows.push(next);
        }
        rows
    }

    #[test]
    fn classic_run_first_generations() {
        let text = run_to_string(SimulationConfig::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 30);
        assert!(lines.iter().all(|l| l.chars().count() == 50));

        assert_eq!(lines[0], format!("{}█{}", ".".repeat(40), ".".repeat(9)));
        assert_eq!(lines[1], format!("{}██{}", ".".repeat(39), ".".repeat(9)));
        assert_eq!(lines[2], format!("{}███{}", ".".repeat(38), ".".repeat(9)));
        assert_eq!(lines[3], format!("{}██.█{}", ".".repeat(37), ".".repeat(9)));
        assert_eq!(lines[3], row(50, &[37, 38, 40]));
    }

    #[test]
    fn classic_run_matches_boolean_rule() {
        let text = run_to_string(SimulationConfig::default());
        let mut start = vec![false; 50];
        start[40] = true;
        let expected: Vec<String> = reference_generations(&start, 30)
            .iter()
            .map(|r| {
                let active: Vec<usize> = (0..r.len()).filter(|&i| r[i]).collect();
                row(50, &active)
            })
            .collect();
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn runs_are_deterministic() {
        let a = run_to_string(SimulationConfig::default());
        let b = run_to_string(SimulationConfig::default());
        assert_eq!(a, b);

        let start = CellVector::random(50, 0.5, &mut Prng::new(21));
        let cfg = SimulationConfig::default();
        let mut x = Simulation::with_state(cfg, start.clone()).unwrap();
        let mut y = Simulation::with_state(cfg, start).unwrap();
        assert_eq!(x.collect_generations(30), y.collect_generations(30));
    }

    #[test]
    fn every_generation_stays_binary() {
        let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
        for (g, cells) in sim.collect_generations(200).iter().enumerate() {
            assert!(cells.is_binary(), "generation {g}");
            assert_eq!(cells.len(), 50);
        }
        assert_eq!(sim.generation(), 200);
    }

    #[test]
    fn tiers_render_identically() {
        let scalar = run_to_string(SimulationConfig::default());
        for tier in [ExecutionTier::Simd, ExecutionTier::Parallel] {
            let cfg = SimulationConfig::default().with_execution_tier(tier);
            assert_eq!(run_to_string(cfg), scalar, "{tier:?}");
        }
    }

    #[test]
    fn zero_generations_writes_nothing() {
        let text = run_to_string(SimulationConfig::default().with_generations(0));
        assert!(text.is_empty());
    }

    #[test]
    fn mismatched_state_is_rejected() {
        let err = Simulation::with_state(SimulationConfig::default(), CellVector::zeros(10));
        assert!(matches!(err, Err(CellnetError::InvalidConfig(_))));
    }

    #[test]
    fn non_binary_state_fails_to_render() {
        let cfg = SimulationConfig::with_size(3);
        let mut sim = Simulation::with_state(cfg, CellVector::from(vec![0.0, 0.5, 1.0])).unwrap();
        let mut out: Vec<u8> = Vec::new();
        let err = sim.run(&mut out).unwrap_err();
        assert!(matches!(err, CellnetError::UnrenderableCell { index: 1, .. }));
    }
}
