//! Rule 110 as a two-layer arithmetic circuit.
//!
//! The circuit has one linear filter and one rectified filter over the same
//! 3-cell window, combined and then clamped:
//!
//! ```text
//! self_right = x[i] + x[i+1]
//! all_ones   = relu(x[i-1] + x[i] + x[i+1] - 2)
//! raw        = self_right - 2 * all_ones
//! next       = raw - relu(raw - 1)
//! ```
//!
//! `raw` already matches rule 110 on 7 of the 8 binary neighborhoods. The
//! remaining one, `(0, 1, 1)`, sums to 2.0, which the final clamp folds to 1.0.
//! `(1, 1, 1)` is the case the rectified filter exists for: it cancels the
//! linear sum to 0.0.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cells::CellVector;
use crate::error::{CellnetError, Result};
use crate::layer::{
    neighbor_weighted_sum_with, rectified_biased_unit_with, relu, Bias, CellValue, ExecutionTier,
    WeightTriple,
};

/// Wolfram code of the automaton the circuit encodes.
pub const RULE_NUMBER: u8 = 110;

/// Linear filter: self plus right neighbor.
pub const SELF_RIGHT: WeightTriple = WeightTriple::new(0.0, 1.0, 1.0);

/// Rectified filter: full 3-cell window.
pub const FULL_WINDOW: WeightTriple = WeightTriple::new(1.0, 1.0, 1.0);

/// Bias that leaves the rectified filter live only when all three cells are on.
pub const ALL_ONES_BIAS: Bias = -2.0;

/// Weight of the rectified filter in the combination layer.
pub const ALL_ONES_PENALTY: f32 = 2.0;

/// (left, center, right) -> next state, in descending neighborhood order.
pub const RULE_110_TABLE: [([u8; 3], u8); 8] = [
    ([1, 1, 1], 0),
    ([1, 1, 0], 1),
    ([1, 0, 1], 1),
    ([1, 0, 0], 0),
    ([0, 1, 1], 1),
    ([0, 1, 0], 1),
    ([0, 0, 1], 1),
    ([0, 0, 0], 0),
];

/// Boolean rule 110, read straight from the bits of [`RULE_NUMBER`].
#[inline]
pub fn rule110_reference(left: bool, center: bool, right: bool) -> bool {
    let idx = (u8::from(left) << 2) | (u8::from(center) << 1) | u8::from(right);
    (RULE_NUMBER >> idx) & 1 == 1
}

/// Fold any excess above 1.0 back to 1.0; 0.0 and 1.0 pass through.
#[inline]
pub fn correct(v: CellValue) -> CellValue {
    v - relu(v - 1.0)
}

/// Every intermediate layer of one circuit evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerTrace {
    pub self_right: Vec<CellValue>,
    pub all_ones: Vec<CellValue>,
    pub raw: Vec<CellValue>,
    pub next: CellVector,
}

impl LayerTrace {
    /// Cells whose combination layer overshot 1.0 and needed the clamp.
    pub fn corrected_count(&self) -> usize {
        self.raw.iter().filter(|&&v| v > 1.0).count()
    }
}

/// The fixed rule-110 circuit. Only the execution tier is configurable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rule110Net {
    tier: ExecutionTier,
}

impl Rule110Net {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tier(tier: ExecutionTier) -> Self {
        Self { tier }
    }

    /// Set the execution tier for both filters.
    pub fn set_execution_tier(&mut self, tier: ExecutionTier) {
        self.tier = tier;
    }

    pub fn execution_tier(&self) -> ExecutionTier {
        self.tier
    }

    /// Tier that actually runs after feature gating.
    pub fn effective_execution_tier(&self) -> ExecutionTier {
        self.tier.effective()
    }

    /// Switch to the best compiled tier and return it.
    pub fn auto_select_execution_tier(&mut self) -> ExecutionTier {
        self.tier = ExecutionTier::best_available();
        self.tier
    }

    /// Evaluate the circuit and keep every layer.
    pub fn trace(&self, x: &CellVector) -> LayerTrace {
        let xs = x.as_slice();
        let self_right = neighbor_weighted_sum_with(xs, SELF_RIGHT, self.tier);
        let all_ones = rectified_biased_unit_with(xs, FULL_WINDOW, ALL_ONES_BIAS, self.tier);

        let raw: Vec<CellValue> = self_right
            .iter()
            .zip(&all_ones)
            .map(|(&lin, &gate)| lin - ALL_ONES_PENALTY * gate)
            .collect();
        let next: Vec<CellValue> = raw.iter().map(|&v| correct(v)).collect();

        LayerTrace {
            self_right,
            all_ones,
            raw,
            next: CellVector::from(next),
        }
    }

    /// Advance one generation.
    pub fn step(&self, x: &CellVector) -> CellVector {
        let layers = self.trace(x);

        let corrected = layers.corrected_count();
        if corrected > 0 {
            tracing::trace!(corrected, "clamped overshooting cells");
        }
        debug_assert!(
            !x.is_binary() || layers.next.is_binary(),
            "binary input produced a non-binary generation"
        );

        layers.next
    }

    /// Run all 8 binary neighborhoods through the circuit on a 3-cell ring and
    /// compare against [`RULE_110_TABLE`].
    pub fn verify_truth_table(&self) -> Result<()> {
        for (neighborhood, expected) in RULE_110_TABLE {
            let next = self.step(&CellVector::from_bits(&neighborhood));
            let actual = next[1];
            let expected = f32::from(expected);
            if actual != expected {
                return Err(CellnetError::TableMismatch {
                    neighborhood,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

/// Advance one generation with the default (scalar) circuit.
pub fn advance(x: &CellVector) -> CellVector {
    Rule110Net::default().step(x)
}
