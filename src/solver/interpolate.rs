//! Linear interpolation over fractional grid indices

use crate::error::SolverError;

/// Value of `values` at a fractional index.
///
/// Integral indices return the exact sample; anything else interpolates
/// linearly between the floor and ceiling neighbours. Indices whose
/// neighbours leave the array are an error, never clamped.
pub(crate) fn interpolated_value(values: &[f64], index: f64) -> Result<f64, SolverError> {
    let lower = index.floor();
    let upper = index.ceil();

    if lower < 0. || upper >= values.len() as f64 {
        return Err(SolverError::IndexOutOfRange {
            index,
            length: values.len(),
        });
    }

    let lower = lower as usize;
    let upper = upper as usize;
    if lower == upper {
        return Ok(values[lower]);
    }

    let fraction = index - lower as f64;
    Ok(values[lower] * (1. - fraction) + values[upper] * fraction)
}

/// Fractional index at which `|values|` reaches `|target|`, interpolating
/// between the samples at `index - 1` and `index`.
///
/// When the two bracketing magnitudes coincide there is either the midpoint
/// (target equals the plateau) or no crossing at all; the latter is a hard
/// failure for the caller to propagate.
pub(crate) fn interpolated_crossing(
    values: &[f64],
    index: usize,
    target: f64,
) -> Result<f64, SolverError> {
    debug_assert!(index >= 1 && index < values.len());

    let y0 = values[index - 1].abs();
    let y1 = values[index].abs();

    if y0 == y1 {
        return if target.abs() == y0 {
            Ok(index as f64 - 0.5)
        } else {
            Err(SolverError::NoInterpolationSolution)
        };
    }

    Ok(index as f64 - 1. + (target.abs() - y0) / (y1 - y0))
}
