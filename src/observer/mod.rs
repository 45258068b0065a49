#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::Result;
use crate::rule110::LayerTrace;
use crate::simulation::Simulation;

/// A read-only snapshot of one generation.
///
/// Design intent:
/// - Observers cannot mutate or steer the simulation.
/// - Snapshotting is *on-demand* and can allocate; the step loop stays unchanged.
/// - Circuit layers are only recomputed when asked for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GenerationSnapshot {
    pub generation: usize,
    pub active_cells: usize,
    pub cells: Vec<u8>,
    pub row: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub layers: Option<LayerSnapshot>,
}

/// Intermediate layers that produced the *next* generation from this one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LayerSnapshot {
    pub self_right: Vec<f32>,
    pub all_ones: Vec<f32>,
    pub raw: Vec<f32>,
    pub corrected_cells: usize,
}

impl From<LayerTrace> for LayerSnapshot {
    fn from(trace: LayerTrace) -> Self {
        let corrected_cells = trace.corrected_count();
        Self {
            self_right: trace.self_right,
            all_ones: trace.all_ones,
            raw: trace.raw,
            corrected_cells,
        }
    }
}

pub struct SimulationAdapter<'a> {
    sim: &'a Simulation,
}

impl<'a> SimulationAdapter<'a> {
    pub fn new(sim: &'a Simulation) -> Self {
        Self { sim }
    }

    pub fn snapshot(&self, with_layers: bool) -> Result<GenerationSnapshot> {
        let state = self.sim.state();
        let layers = with_layers.then(|| LayerSnapshot::from(self.sim.net().trace(state)));

        Ok(GenerationSnapshot {
            generation: self.sim.generation(),
            active_cells: state.active_count(),
            cells: state.to_bits(),
            row: self.sim.render_current()?,
            layers,
        })
    }
}
