//! # Postprocessor
//!
//! Writes sampled profiles and result curves to disk as CSV.

use crate::profile::{DopingProfile, NetDoping};
use crate::solver::DepletionResult;
use itertools::izip;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Write the sampled doping profile together with its net concentration.
///
/// This file is emitted on every run, so a rejected profile still leaves the
/// user something to inspect.
pub(crate) fn write_doping_profile(
    path: &Path,
    profile: &DopingProfile,
    net_doping: &NetDoping,
) -> io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "x_um,donors_m3,acceptors_m3,net_m3")?;
    for (x, donor, acceptor, net) in izip!(
        profile.positions().iter(),
        profile.donors().iter(),
        profile.acceptors().iter(),
        net_doping.values().iter()
    ) {
        writeln!(file, "{:e},{:e},{:e},{:e}", x, donor, acceptor, net)?;
    }
    Ok(())
}

/// Write the three depletion width curves against the shared bias voltage.
pub(crate) fn write_depletion_widths(path: &Path, result: &DepletionResult) -> io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "voltage_V,total_um,n_side_um,p_side_um")?;
    for (&(total, voltage), &(n_side, _), &(p_side, _)) in
        izip!(result.total.iter(), result.n_side.iter(), result.p_side.iter())
    {
        writeln!(file, "{:e},{:e},{:e},{:e}", voltage, total, n_side, p_side)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{write_depletion_widths, write_doping_profile};
    use crate::profile::DopingProfile;
    use crate::solver::calculate_depletion_widths;
    use nalgebra::DVector;

    fn junction_profile() -> DopingProfile {
        let positions = DVector::from_fn(11, |i, _| i as f64);
        let donors = DVector::from_fn(11, |i, _| if i < 5 { 1e20 } else { 0. });
        let acceptors = DVector::from_fn(11, |i, _| if i < 5 { 0. } else { 1e20 });
        DopingProfile::new(positions, donors, acceptors)
    }

    #[test]
    fn profile_rows_match_the_sample_count() {
        let profile = junction_profile();
        let path = std::env::temp_dir().join("depletion_test_doping_profile.csv");
        write_doping_profile(&path, &profile, &profile.net_doping()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("x_um,donors_m3,acceptors_m3,net_m3"));
        assert_eq!(lines.count(), profile.len());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn curve_rows_match_the_recorded_points() {
        let profile = junction_profile();
        let result = calculate_depletion_widths(&profile).unwrap().unwrap();
        let path = std::env::temp_dir().join("depletion_test_depletion_width.csv");
        write_depletion_widths(&path, &result).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("voltage_V,total_um,n_side_um,p_side_um"));
        assert_eq!(lines.count(), result.total.len());
        std::fs::remove_file(&path).ok();
    }
}
