//! Cumulative charge integration over a growing depletion window

use super::interpolate::interpolated_value;
use crate::constants::{ELEMENTARY_CHARGE, PERMITTIVITY};
use crate::error::SolverError;

/// Voltage across the window `start..end`, both offsets in grid steps and
/// either possibly fractional.
///
/// The charge density is integrated twice: once over every sub-window
/// `start..i` for `i` stepping from `start` to `end`, and the sub-window
/// integrals are summed. `step` is the grid spacing in meters and enters
/// squared through the double integration. The result is signed; callers
/// take the magnitude.
pub(crate) fn cumulative_voltage(
    net_doping: &[f64],
    start: f64,
    end: f64,
    step: f64,
) -> Result<f64, SolverError> {
    let factor = ELEMENTARY_CHARGE / PERMITTIVITY * step * step;

    let mut total = 0.;
    let mut window_end = start;
    while window_end <= end {
        total += enclosed_charge(net_doping, start, window_end)? * factor;
        window_end += 1.;
    }

    Ok(total)
}

/// Single integral of the net doping over `start..end` in grid steps.
///
/// Full cells contribute their sampled value; a fractional boundary cell
/// contributes its interpolated value weighted by the covered fraction.
fn enclosed_charge(net_doping: &[f64], start: f64, end: f64) -> Result<f64, SolverError> {
    let mut sum = 0.;

    if start.fract() != 0. {
        sum += interpolated_value(net_doping, start)? * (start.ceil() - start);
    }

    let mut index = start.ceil();
    while index < end.floor() {
        if index < 0. || index >= net_doping.len() as f64 {
            return Err(SolverError::IndexOutOfRange {
                index,
                length: net_doping.len(),
            });
        }
        sum += net_doping[index as usize];
        index += 1.;
    }

    if end.fract() != 0. {
        sum += interpolated_value(net_doping, end)? * (end - end.floor());
    }

    Ok(sum)
}
