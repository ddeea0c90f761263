//! Net doping and the sign change scan locating the junction

use super::DopingProfile;
use nalgebra::DVector;

/// Pointwise difference between acceptor and donor concentration.
///
/// A positive sample is acceptor dominated (p-type), a negative one donor
/// dominated (n-type). The junction sits where the sequence flips sign.
#[derive(Debug, Clone)]
pub struct NetDoping {
    values: DVector<f64>,
}

impl NetDoping {
    /// Build from a sampled profile: `net[i] = acceptor[i] - donor[i]`.
    pub fn from_profile(profile: &DopingProfile) -> Self {
        Self {
            values: profile.acceptors() - profile.donors(),
        }
    }

    /// The sampled net concentration values.
    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    /// Number of sign flips along the profile, ignoring exact zeros.
    pub fn count_sign_changes(&self) -> usize {
        count_sign_changes(self.values.as_slice())
    }

    /// Index of the last sample before the single sign flip, if any.
    pub fn junction_index(&self) -> Option<usize> {
        find_sign_change_index(self.values.as_slice())
    }

    /// Index of the sample closest to zero, the would-be junction in a
    /// rejected profile. Diagnostic use only.
    pub fn closest_to_zero_index(&self) -> usize {
        find_closest_to_zero_index(self.values.as_slice())
    }
}

/// Count sign flips with a two-flag tracker.
///
/// Zero samples are neither positive nor negative: a run of exact zeros does
/// not register a crossing on its own, the surrounding signs have to differ.
pub(crate) fn count_sign_changes(values: &[f64]) -> usize {
    let mut changes = 0;
    let mut seen_positive = false;
    let mut seen_negative = false;

    for &value in values {
        if value > 0. {
            if seen_negative {
                changes += 1;
                seen_negative = false;
            }
            seen_positive = true;
        } else if value < 0. {
            if seen_positive {
                changes += 1;
                seen_positive = false;
            }
            seen_negative = true;
        }
    }

    changes
}

/// Locate the first sign flip with the same two-flag tracker.
///
/// Returns the index of the last sample before the flip is detected: when no
/// zeros intervene this is the first `i` with `values[i]` and `values[i + 1]`
/// of opposite non-zero sign.
pub(crate) fn find_sign_change_index(values: &[f64]) -> Option<usize> {
    let mut seen_positive = false;
    let mut seen_negative = false;

    for (index, &value) in values.iter().enumerate() {
        if value > 0. {
            if seen_negative {
                return Some(index - 1);
            }
            seen_positive = true;
        } else if value < 0. {
            if seen_positive {
                return Some(index - 1);
            }
            seen_negative = true;
        }
    }

    None
}

/// Index of the element with the smallest absolute value.
///
/// Exact ties resolve to the more positive element.
pub(crate) fn find_closest_to_zero_index(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold(0, |closest, (index, &value)| {
            let closer = value.abs() < values[closest].abs();
            let tie_more_positive =
                value.abs() == values[closest].abs() && value > values[closest];
            if closer || tie_more_positive {
                index
            } else {
                closest
            }
        })
}

#[cfg(test)]
mod test {
    use super::{count_sign_changes, find_closest_to_zero_index, find_sign_change_index};
    use proptest::prelude::*;

    #[test]
    fn a_single_flip_is_counted_once() {
        assert_eq!(count_sign_changes(&[-1., -1., 1., 1.]), 1);
        assert_eq!(count_sign_changes(&[1., -1.]), 1);
    }

    #[test]
    fn monotone_signs_count_no_flip() {
        assert_eq!(count_sign_changes(&[1., 2., 3.]), 0);
        assert_eq!(count_sign_changes(&[-1., -2.]), 0);
        assert_eq!(count_sign_changes(&[0., 0., 0.]), 0);
    }

    #[test]
    fn every_flip_is_counted() {
        assert_eq!(count_sign_changes(&[1., -1., 1., -1.]), 3);
        assert_eq!(count_sign_changes(&[-1., 1., -1.]), 2);
    }

    #[test]
    fn zero_runs_do_not_register_on_their_own() {
        // zeros between opposite signs still flip once
        assert_eq!(count_sign_changes(&[-1., 0., 0., 1.]), 1);
        // a plateau reaching the boundary never establishes the second sign
        assert_eq!(count_sign_changes(&[-1., -1., 0., 0., 0.]), 0);
        assert_eq!(count_sign_changes(&[0., 0., 1., 1.]), 0);
    }

    #[test]
    fn flip_index_is_the_last_sample_before_the_flip() {
        assert_eq!(find_sign_change_index(&[-1., -1., 1., 1.]), Some(1));
        assert_eq!(find_sign_change_index(&[1., -1.]), Some(0));
        // the flip can sit at the very end of the array
        assert_eq!(find_sign_change_index(&[-1., -1., 1.]), Some(1));
    }

    #[test]
    fn flip_index_is_absent_without_opposite_signs() {
        assert_eq!(find_sign_change_index(&[1., 2., 3.]), None);
        assert_eq!(find_sign_change_index(&[0., 0.]), None);
        assert_eq!(find_sign_change_index(&[-1., 0., 0.]), None);
    }

    #[test]
    fn zeros_at_the_flip_shift_the_index_onto_the_last_zero() {
        assert_eq!(find_sign_change_index(&[1., 0., 0., -1.]), Some(2));
    }

    #[test]
    fn closest_to_zero_prefers_the_positive_element_on_ties() {
        assert_eq!(find_closest_to_zero_index(&[3., -1., 1., 5.]), 2);
        assert_eq!(find_closest_to_zero_index(&[1., -1.]), 0);
        assert_eq!(find_closest_to_zero_index(&[-4., 2., -7.]), 1);
    }

    proptest! {
        #[test]
        fn counting_is_invariant_under_positive_scaling(
            values in proptest::collection::vec(-1e3f64..1e3, 1..64),
            scale in 1e-3f64..1e3,
        ) {
            let scaled: Vec<f64> = values.iter().map(|v| v * scale).collect();
            prop_assert_eq!(count_sign_changes(&values), count_sign_changes(&scaled));
        }

        #[test]
        fn located_flips_have_opposite_nonzero_neighbours(
            values in proptest::collection::vec(prop_oneof![Just(-1.0f64), Just(1.0f64)], 2..64),
        ) {
            if let Some(index) = find_sign_change_index(&values) {
                prop_assert!(values[index] * values[index + 1] < 0.);
            }
        }
    }
}
