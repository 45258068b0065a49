//! # cellnet
//!
//! Elementary cellular automaton rule 110, evaluated by a fixed two-layer
//! arithmetic circuit shaped like a one-filter 1D convolutional network.
//!
//! There is nothing to train: the weights and biases are hand-derived
//! constants, and the circuit reproduces the boolean rule exactly on binary
//! rows.
//!
//! ## Quick Start
//!
//! ```
//! use cellnet::prelude::*;
//!
//! let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
//! let first = sim.render_current().unwrap();
//! assert_eq!(first.chars().count(), 50);
//!
//! sim.advance();
//! assert_eq!(sim.state().active_indices(), vec![39, 40]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialization derives and the `cellnet-trace` binary
//! - `parallel`: Evaluate the filters with rayon
//! - `simd`: Evaluate the filters with the `wide` crate
//!
//! ## Modules
//!
//! - [`layer`]: Ring-weighted sums and rectified units
//! - [`rule110`]: The rule-110 circuit and its truth-table check
//! - [`simulation`]: Generation loop and rendering driver
//! - [`observer`]: Read-only snapshots

#[path = "core/cells.rs"]
pub mod cells;

#[path = "core/config.rs"]
pub mod config;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/layer.rs"]
pub mod layer;

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/render.rs"]
pub mod render;

#[path = "core/rule110.rs"]
pub mod rule110;

#[path = "core/simulation.rs"]
pub mod simulation;

pub mod observer;

/// Prelude module for convenient imports.
///
/// ```
/// use cellnet::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cells::CellVector;
    pub use crate::config::SimulationConfig;
    pub use crate::error::{CellnetError, Result};
    pub use crate::layer::{
        neighbor_weighted_sum, rectified_biased_unit, relu, Bias, CellValue, ExecutionTier,
        WeightTriple,
    };
    pub use crate::observer::{GenerationSnapshot, SimulationAdapter};
    pub use crate::prng::Prng;
    pub use crate::render::Glyphs;
    pub use crate::rule110::{advance, Rule110Net};
    pub use crate::simulation::Simulation;
}
