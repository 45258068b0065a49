use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::layer::CellValue;
use crate::prng::Prng;

/// One generation of the automaton: a fixed-length ring of cell values.
///
/// Between steps every entry is 0.0 or 1.0. The vector is never resized; each
/// step produces a fresh `CellVector` of the same length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellVector {
    cells: Vec<CellValue>,
}

impl CellVector {
    /// A ring of `len` inactive cells.
    pub fn zeros(len: usize) -> Self {
        Self {
            cells: vec![0.0; len],
        }
    }

    /// A ring of `len` cells with only `index` active (one-hot row).
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn single_active(len: usize, index: usize) -> Self {
        assert!(index < len, "active index {index} outside ring of {len}");
        let mut v = Self::zeros(len);
        v.cells[index] = 1.0;
        v
    }

    /// Seeded random binary row; each cell is active with probability `density`.
    pub fn random(len: usize, density: f32, rng: &mut Prng) -> Self {
        Self {
            cells: (0..len).map(|_| rng.next_cell(density)).collect(),
        }
    }

    /// Build from 0/1 bits. Any non-zero bit becomes 1.0.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            cells: bits
                .iter()
                .map(|&b| if b == 0 { 0.0 } else { 1.0 })
                .collect(),
        }
    }

    /// Bits of a binary row. Values other than 1.0 map to 0.
    pub fn to_bits(&self) -> Vec<u8> {
        self.cells.iter().map(|&v| u8::from(v == 1.0)).collect()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_slice(&self) -> &[CellValue] {
        &self.cells
    }

    /// True when every entry is exactly 0.0 or 1.0.
    pub fn is_binary(&self) -> bool {
        self.cells.iter().all(|&v| v == 0.0 || v == 1.0)
    }

    /// Number of cells equal to 1.0.
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 1.0).count()
    }

    /// Indices of active cells, ascending.
    pub fn active_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 1.0)
            .map(|(i, _)| i)
            .collect()
    }
}

impl From<Vec<CellValue>> for CellVector {
    fn from(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }
}

impl Index<usize> for CellVector {
    type Output = CellValue;

    fn index(&self, i: usize) -> &CellValue {
        &self.cells[i]
    }
}
