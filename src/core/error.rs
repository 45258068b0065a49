//! Error types for cellnet.
//!
//! The arithmetic itself is total; errors only arise at the edges (config,
//! rendering, I/O) or when the circuit constants stop matching rule 110.

use thiserror::Error;

/// Main error type for cellnet operations.
#[derive(Error, Debug)]
pub enum CellnetError {
    /// Configuration rejected by `SimulationConfig::validate`.
    #[error("Configuration error: {0}")]
    InvalidConfig(&'static str),

    /// A cell held a value with no glyph (only 0.0 and 1.0 render).
    #[error("Cell {index} has unrenderable value {value}")]
    UnrenderableCell { index: usize, value: f32 },

    /// The circuit disagreed with the boolean rule for one neighborhood.
    #[error("Neighborhood {neighborhood:?} produced {actual}, expected {expected}")]
    TableMismatch {
        neighborhood: [u8; 3],
        expected: f32,
        actual: f32,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for cellnet operations.
pub type Result<T> = core::result::Result<T, CellnetError>;
