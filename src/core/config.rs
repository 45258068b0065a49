#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CellnetError, Result};
use crate::layer::ExecutionTier;
use crate::render::Glyphs;

/// Parameters of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Ring length N.
    pub cell_count: usize,
    /// Index of the single active cell in the initial row.
    pub active_index: usize,
    /// Number of generations rendered.
    pub generations: usize,
    pub glyphs: Glyphs,
    pub execution_tier: ExecutionTier,
}

impl Default for SimulationConfig {
    /// 50 cells, cell 40 on, 30 generations, scalar tier.
    fn default() -> Self {
        Self {
            cell_count: 50,
            active_index: 40,
            generations: 30,
            glyphs: Glyphs::default(),
            execution_tier: ExecutionTier::Scalar,
        }
    }
}

impl SimulationConfig {
    /// Minimum ring length.
    pub const MIN_CELLS: usize = 1;
    /// Maximum ring length.
    pub const MAX_CELLS: usize = 1 << 24;
    /// Maximum generation count.
    pub const MAX_GENERATIONS: usize = 1 << 20;

    /// Config with a ring of `cell_count` cells, seeded in the middle.
    ///
    /// # Panics
    /// Panics if `cell_count` is out of range.
    pub fn with_size(cell_count: usize) -> Self {
        assert!(
            cell_count >= Self::MIN_CELLS,
            "cell_count must be >= {}",
            Self::MIN_CELLS
        );
        assert!(
            cell_count <= Self::MAX_CELLS,
            "cell_count must be <= {}",
            Self::MAX_CELLS
        );

        Self {
            cell_count,
            active_index: cell_count / 2,
            ..Default::default()
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.cell_count < Self::MIN_CELLS {
            return Err(CellnetError::InvalidConfig("cell_count too small"));
        }
        if self.cell_count > Self::MAX_CELLS {
            return Err(CellnetError::InvalidConfig("cell_count too large"));
        }
        if self.active_index >= self.cell_count {
            return Err(CellnetError::InvalidConfig(
                "active_index must be < cell_count",
            ));
        }
        if self.generations > Self::MAX_GENERATIONS {
            return Err(CellnetError::InvalidConfig("generations too large"));
        }
        if self.glyphs.background == self.glyphs.foreground {
            return Err(CellnetError::InvalidConfig(
                "background and foreground glyphs must differ",
            ));
        }
        Ok(())
    }

    pub fn with_active_index(mut self, index: usize) -> Self {
        self.active_index = index;
        self
    }

    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn with_execution_tier(mut self, tier: ExecutionTier) -> Self {
        self.execution_tier = tier;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_classic_run() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.cell_count, 50);
        assert_eq!(cfg.active_index, 40);
        assert_eq!(cfg.generations, 30);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn with_size_centres_the_seed() {
        let cfg = SimulationConfig::with_size(9);
        assert_eq!(cfg.active_index, 4);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    #[should_panic]
    fn with_size_rejects_empty_ring() {
        let _ = SimulationConfig::with_size(0);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let base = SimulationConfig::default();
        assert!(base.with_active_index(50).validate().is_err());
        assert!(SimulationConfig {
            cell_count: 0,
            active_index: 0,
            ..base
        }
        .validate()
        .is_err());
        assert!(base
            .with_generations(SimulationConfig::MAX_GENERATIONS + 1)
            .validate()
            .is_err());
        assert!(base.with_glyphs(Glyphs::new('x', 'x')).validate().is_err());
    }

    #[test]
    fn zero_generations_is_valid() {
        assert!(SimulationConfig::default()
            .with_generations(0)
            .validate()
            .is_ok());
    }
}
