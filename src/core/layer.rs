// Single-filter 1D "convolution" primitives over a ring of cells.
//
// Both primitives are index-independent, so each one has a scalar, SIMD and
// rayon evaluation path. All paths perform the same f32 operations in the same
// order and therefore agree bit for bit.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "simd")]
use wide::f32x4;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type alias for a single cell's value.
pub type CellValue = f32;

/// Type alias for the scalar added before rectification.
pub type Bias = f32;

/// Execution tier for the per-cell kernels.
///
/// - `Scalar`: Single-threaded loop (default, works everywhere)
/// - `Simd`: Single-threaded with `wide` lanes
/// - `Parallel`: Multi-threaded via rayon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExecutionTier {
    /// Single-threaded scalar execution.
    #[default]
    Scalar,
    /// Single-threaded with SIMD vectorization (requires `simd` feature).
    Simd,
    /// Multi-threaded parallel execution (requires `parallel` feature).
    Parallel,
}

impl ExecutionTier {
    /// Returns the tier that will actually run, given the compiled features.
    pub fn effective(self) -> ExecutionTier {
        match self {
            ExecutionTier::Scalar => ExecutionTier::Scalar,
            ExecutionTier::Simd => {
                #[cfg(feature = "simd")]
                {
                    ExecutionTier::Simd
                }
                #[cfg(not(feature = "simd"))]
                {
                    ExecutionTier::Scalar
                }
            }
            ExecutionTier::Parallel => {
                #[cfg(feature = "parallel")]
                {
                    ExecutionTier::Parallel
                }
                #[cfg(not(feature = "parallel"))]
                {
                    ExecutionTier::Scalar
                }
            }
        }
    }

    /// Best tier compiled into this build: Parallel, then Simd, then Scalar.
    pub fn best_available() -> ExecutionTier {
        #[cfg(feature = "parallel")]
        {
            ExecutionTier::Parallel
        }

        #[cfg(all(not(feature = "parallel"), feature = "simd"))]
        {
            ExecutionTier::Simd
        }

        #[cfg(all(not(feature = "parallel"), not(feature = "simd")))]
        {
            ExecutionTier::Scalar
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExecutionTier::Scalar => "scalar",
            ExecutionTier::Simd => "simd",
            ExecutionTier::Parallel => "parallel",
        }
    }
}

/// Filter coefficients for (left neighbor, self, right neighbor).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightTriple {
    pub left: f32,
    pub center: f32,
    pub right: f32,
}

impl WeightTriple {
    pub const fn new(left: f32, center: f32, right: f32) -> Self {
        Self {
            left,
            center,
            right,
        }
    }
}

#[inline]
pub fn relu(v: CellValue) -> CellValue {
    v.max(0.0)
}

/// `y[i] = wL * x[i-1] + wC * x[i] + wR * x[i+1]`, indices taken mod `x.len()`.
///
/// This is the only place ring topology is defined. Total for any length; an
/// empty ring yields an empty result.
pub fn neighbor_weighted_sum(x: &[CellValue], w: WeightTriple) -> Vec<CellValue> {
    neighbor_weighted_sum_with(x, w, ExecutionTier::Scalar)
}

/// `relu(neighbor_weighted_sum(x, w) + bias)` element-wise.
pub fn rectified_biased_unit(x: &[CellValue], w: WeightTriple, bias: Bias) -> Vec<CellValue> {
    rectified_biased_unit_with(x, w, bias, ExecutionTier::Scalar)
}

/// [`neighbor_weighted_sum`] evaluated on a chosen execution tier.
pub fn neighbor_weighted_sum_with(
    x: &[CellValue],
    w: WeightTriple,
    tier: ExecutionTier,
) -> Vec<CellValue> {
    if x.is_empty() {
        return Vec::new();
    }
    match tier.effective() {
        ExecutionTier::Scalar => weighted_sum_scalar(x, w),
        ExecutionTier::Simd => weighted_sum_simd(x, w),
        ExecutionTier::Parallel => weighted_sum_parallel(x, w),
    }
}

/// [`rectified_biased_unit`] evaluated on a chosen execution tier.
pub fn rectified_biased_unit_with(
    x: &[CellValue],
    w: WeightTriple,
    bias: Bias,
    tier: ExecutionTier,
) -> Vec<CellValue> {
    let mut out = neighbor_weighted_sum_with(x, w, tier);
    for v in &mut out {
        *v = relu(*v + bias);
    }
    out
}

#[inline]
fn ring_left(i: usize, n: usize) -> usize {
    (i + n - 1) % n
}

#[inline]
fn ring_right(i: usize, n: usize) -> usize {
    (i + 1) % n
}

#[inline]
fn weighted_at(x: &[CellValue], w: WeightTriple, i: usize) -> CellValue {
    let n = x.len();
    w.left * x[ring_left(i, n)] + w.center * x[i] + w.right * x[ring_right(i, n)]
}

fn weighted_sum_scalar(x: &[CellValue], w: WeightTriple) -> Vec<CellValue> {
    (0..x.len()).map(|i| weighted_at(x, w, i)).collect()
}

/// SIMD weighted sum using the wide crate.
///
/// Materializes the two rotated neighbor views once, then runs 4 lanes at a
/// time with a scalar tail.
#[cfg(feature = "simd")]
fn weighted_sum_simd(x: &[CellValue], w: WeightTriple) -> Vec<CellValue> {
    let n = x.len();
    let mut left = x.to_vec();
    left.rotate_right(1);
    let mut right = x.to_vec();
    right.rotate_left(1);

    let wl = f32x4::splat(w.left);
    let wc = f32x4::splat(w.center);
    let wr = f32x4::splat(w.right);

    let mut out = vec![0.0f32; n];
    let simd_end = n - (n % 4);
    for i in (0..simd_end).step_by(4) {
        let l = f32x4::from([left[i], left[i + 1], left[i + 2], left[i + 3]]);
        let c = f32x4::from([x[i], x[i + 1], x[i + 2], x[i + 3]]);
        let r = f32x4::from([right[i], right[i + 1], right[i + 2], right[i + 3]]);
        let y = wl * l + wc * c + wr * r;
        out[i..(i + 4)].copy_from_slice(&y.to_array());
    }

    for i in simd_end..n {
        out[i] = w.left * left[i] + w.center * x[i] + w.right * right[i];
    }
    out
}

#[cfg(not(feature = "simd"))]
fn weighted_sum_simd(x: &[CellValue], w: WeightTriple) -> Vec<CellValue> {
    weighted_sum_scalar(x, w)
}

#[cfg(feature = "parallel")]
fn weighted_sum_parallel(x: &[CellValue], w: WeightTriple) -> Vec<CellValue> {
    (0..x.len())
        .into_par_iter()
        .map(|i| weighted_at(x, w, i))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn weighted_sum_parallel(x: &[CellValue], w: WeightTriple) -> Vec<CellValue> {
    weighted_sum_scalar(x, w)
}
