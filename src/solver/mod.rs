// Copyright 2024 the depletion developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Solver
//!
//! The depletion width solver.
//!
//! Starting at the junction the solver grows a depletion window outwards, one
//! grid step at a time. Charge neutrality demands the total field built up on
//! either side of the junction to match in magnitude, so each iteration
//! extends the side whose accumulated field is smaller and interpolates the
//! opposite side back to the matching magnitude. The voltage across the
//! window follows from integrating the enclosed charge twice, and every
//! iteration contributes one point to each of the three result curves.

mod charge;
mod interpolate;

use crate::constants::{ELEMENTARY_CHARGE, MICROMETER_TO_METER, PERMITTIVITY};
use crate::error::SolverError;
use crate::profile::{DopingProfile, NetDoping};

/// One side's accumulated electric field as the window grows.
///
/// `values[k]` is the total one-sided field after `offsets[k]` steps away
/// from the junction; both sequences grow by one element per step taken on
/// this side. The state is local to a single calculation.
#[derive(Debug)]
struct FieldAccumulator {
    values: Vec<f64>,
    offsets: Vec<usize>,
}

impl FieldAccumulator {
    fn new() -> Self {
        Self {
            values: vec![0.],
            offsets: vec![0],
        }
    }

    fn record(&mut self, value: f64, offset: usize) {
        self.values.push(value);
        self.offsets.push(offset);
    }

    fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Depletion width against reverse bias voltage, split per junction side.
///
/// The curves are indexed in the order the window grew, so the voltage
/// sequence is non-decreasing. Widths are in micrometers, voltages in volts.
#[derive(Debug)]
pub struct DepletionResult {
    /// Total depletion width and voltage per step
    pub total: Vec<(f64, f64)>,
    /// Extent of the window on the donor dominated side
    pub n_side: Vec<(f64, f64)>,
    /// Extent of the window on the acceptor dominated side
    pub p_side: Vec<(f64, f64)>,
    /// The net doping the calculation ran on
    pub net_doping: NetDoping,
    /// Last sample before the junction sign flip
    pub junction_index: usize,
}

/// Compute the depletion-width-vs-voltage relationship of a profile.
///
/// Returns `None` when the net doping does not cross zero exactly once; the
/// caller is expected to fall back to presenting the doping profile alone.
/// Hard errors only arise from broken internal invariants.
pub fn calculate_depletion_widths(
    profile: &DopingProfile,
) -> Result<Option<DepletionResult>, SolverError> {
    let net_doping = profile.net_doping();

    let sign_changes = net_doping.count_sign_changes();
    if sign_changes != 1 {
        tracing::debug!(
            "rejecting profile with {} net doping sign changes",
            sign_changes
        );
        return Ok(None);
    }
    let junction = net_doping
        .junction_index()
        .ok_or(SolverError::MissingJunction)?;

    let dx = profile.spacing();
    let step = MICROMETER_TO_METER * dx;
    let values = net_doping.values().as_slice();
    let max_index = values.len() - 1;

    // Seed each side with its first sample: the left window starts on the
    // last sample before the flip, the right window on the first after it.
    let mut left = FieldAccumulator::new();
    let mut right = FieldAccumulator::new();
    let mut left_field = ELEMENTARY_CHARGE * values[junction] / PERMITTIVITY;
    let mut right_field = ELEMENTARY_CHARGE * values[junction + 1] / PERMITTIVITY;
    let mut left_counter = 1;
    let mut right_counter = 1;
    left.record(left_field, left_counter);
    right.record(right_field, right_counter);

    let mut total = Vec::new();
    let mut n_side = Vec::new();
    let mut p_side = Vec::new();

    // The loop ends when either window would step off the sampled interval;
    // that bounds the largest representable reverse bias, it is not an error.
    while left_counter <= junction && junction + right_counter + 1 <= max_index {
        if left_field.abs() <= right_field.abs() {
            // Extend the left window, pull the right one back to balance
            let crossing =
                interpolate::interpolated_crossing(right.values(), right_counter, left_field)?;
            let voltage = charge::cumulative_voltage(
                values,
                (junction - left_counter) as f64,
                junction as f64 + crossing,
                step,
            )?
            .abs();

            n_side.push((left_counter as f64 * dx, voltage));
            p_side.push((crossing * dx, voltage));
            total.push(((left_counter as f64 + crossing) * dx, voltage));

            left_counter += 1;
            left_field += ELEMENTARY_CHARGE * values[junction + 1 - left_counter] / PERMITTIVITY;
            left.record(left_field, left_counter);
        } else {
            // Extend the right window, pull the left one back to balance
            let crossing =
                interpolate::interpolated_crossing(left.values(), left_counter, right_field)?;
            let voltage = charge::cumulative_voltage(
                values,
                junction as f64 - crossing,
                (junction + right_counter) as f64,
                step,
            )?
            .abs();

            n_side.push((crossing * dx, voltage));
            p_side.push((right_counter as f64 * dx, voltage));
            total.push(((crossing + right_counter as f64) * dx, voltage));

            right_counter += 1;
            right_field += ELEMENTARY_CHARGE * values[junction + right_counter] / PERMITTIVITY;
            right.record(right_field, right_counter);
        }
    }

    Ok(Some(DepletionResult {
        total,
        n_side,
        p_side,
        net_doping,
        junction_index: junction,
    }))
}

#[cfg(test)]
mod test {
    use super::calculate_depletion_widths;
    use crate::profile::DopingProfile;
    use approx::assert_relative_eq;
    use nalgebra::DVector;

    /// A step junction over [0, 10] um: donors on the left of the split
    /// point, acceptors on the right, with the given concentrations.
    fn step_profile(
        number_of_points: usize,
        donor_concentration: f64,
        acceptor_concentration: f64,
    ) -> DopingProfile {
        let positions = DVector::from_fn(number_of_points, |i, _| {
            10. * i as f64 / (number_of_points - 1) as f64
        });
        let donors = positions.map(|x| if x < 5. { donor_concentration } else { 0. });
        let acceptors = positions.map(|x| if x >= 5. { acceptor_concentration } else { 0. });
        DopingProfile::new(positions, donors, acceptors)
    }

    #[test]
    fn symmetric_step_junction_depletes_equally_on_both_sides() {
        let profile = step_profile(301, 1e20, 1e20);
        let result = calculate_depletion_widths(&profile).unwrap().unwrap();

        // the split point x = 5 falls on sample 150
        assert_eq!(result.junction_index, 149);
        assert!(!result.total.is_empty());

        for (&(n_width, _), &(p_width, _)) in result.n_side.iter().zip(result.p_side.iter()) {
            assert_relative_eq!(n_width, p_width, max_relative = 1e-9);
        }
        for ((&(t, tv), &(n, nv)), &(p, pv)) in result
            .total
            .iter()
            .zip(result.n_side.iter())
            .zip(result.p_side.iter())
        {
            assert_relative_eq!(t, n + p);
            assert_relative_eq!(tv, nv);
            assert_relative_eq!(tv, pv);
        }
    }

    #[test]
    fn asymmetric_doping_depletes_the_lighter_side_further() {
        // donors ten times denser than acceptors: the acceptor side must
        // deplete ten times wider to balance the charge
        let profile = step_profile(301, 1e21, 1e20);
        let result = calculate_depletion_widths(&profile).unwrap().unwrap();

        for (&(n_width, _), &(p_width, _)) in result.n_side.iter().zip(result.p_side.iter()) {
            if n_width > 0. {
                assert_relative_eq!(p_width / n_width, 10., max_relative = 1e-6);
            }
        }
    }

    #[test]
    fn voltage_is_nondecreasing_along_the_curve() {
        let profile = step_profile(301, 3e20, 1e20);
        let result = calculate_depletion_widths(&profile).unwrap().unwrap();

        let mut previous = 0.;
        for &(_, voltage) in result.total.iter() {
            assert!(voltage >= previous);
            previous = voltage;
        }
    }

    #[test]
    fn profiles_without_a_junction_are_rejected() {
        let positions = DVector::from_fn(11, |i, _| i as f64);
        let donors = DVector::from_element(11, 1e20);
        let acceptors = DVector::from_element(11, 0.);
        let profile = DopingProfile::new(positions, donors, acceptors);
        assert!(calculate_depletion_widths(&profile).unwrap().is_none());
    }

    #[test]
    fn profiles_with_two_junctions_are_rejected() {
        let positions = DVector::from_fn(12, |i, _| i as f64);
        let donors = DVector::from_fn(12, |i, _| if (4..8).contains(&i) { 1e20 } else { 0. });
        let acceptors = DVector::from_fn(12, |i, _| if (4..8).contains(&i) { 0. } else { 1e20 });
        let profile = DopingProfile::new(positions, donors, acceptors);
        assert!(calculate_depletion_widths(&profile).unwrap().is_none());
    }

    #[test]
    fn zero_plateau_reaching_the_boundary_is_not_a_junction() {
        // net doping: negative then exactly compensated to the interval end
        let positions = DVector::from_fn(11, |i, _| i as f64);
        let donors = DVector::from_element(11, 1e20);
        let acceptors = DVector::from_fn(11, |i, _| if i >= 5 { 1e20 } else { 0. });
        let profile = DopingProfile::new(positions, donors, acceptors);
        assert!(calculate_depletion_widths(&profile).unwrap().is_none());
    }

    #[test]
    fn a_junction_at_the_array_edge_records_no_points() {
        // the flip sits at the last two samples: no room to grow a window
        let positions = DVector::from_fn(4, |i, _| i as f64);
        let donors = DVector::from_vec(vec![1e20, 1e20, 1e20, 0.]);
        let acceptors = DVector::from_vec(vec![0., 0., 0., 1e20]);
        let profile = DopingProfile::new(positions, donors, acceptors);
        let result = calculate_depletion_widths(&profile).unwrap().unwrap();
        assert_eq!(result.junction_index, 2);
        assert!(result.total.is_empty());
    }

    #[test]
    fn a_narrow_left_side_terminates_after_a_single_point() {
        // two samples on the left of the junction: the left window is
        // exhausted after its first extension
        let positions = DVector::from_fn(8, |i, _| i as f64);
        let donors = DVector::from_fn(8, |i, _| if i < 2 { 1e20 } else { 0. });
        let acceptors = DVector::from_fn(8, |i, _| if i < 2 { 0. } else { 1e20 });
        let profile = DopingProfile::new(positions, donors, acceptors);
        let result = calculate_depletion_widths(&profile).unwrap().unwrap();
        assert_eq!(result.junction_index, 1);
        assert_eq!(result.total.len(), 1);
    }

    #[test]
    fn curve_points_scale_with_the_grid_spacing() {
        let profile = step_profile(301, 1e20, 1e20);
        let result = calculate_depletion_widths(&profile).unwrap().unwrap();
        let dx = profile.spacing();
        // first recorded point: one step on each side
        let (first_total, first_voltage) = result.total[0];
        assert_relative_eq!(first_total, 2. * dx, max_relative = 1e-9);
        assert!(first_voltage > 0.);
    }
}
