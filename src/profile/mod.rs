//! # Profile
//!
//! Doping profile descriptions and their sampled form.
//!
//! A profile description names the donor and acceptor concentration
//! expressions together with the spatial interval to sample them over, read
//! from a small TOML file:
//!
//! ```toml
//! donors = "1.1E21*H(x-5)"
//! acceptors = "1.1E21 - 1.1E21*H(x-5)"
//! start = "0"
//! stop = "10"
//! ```
//!
//! Positions are micrometers, concentrations are per cubic meter. The bounds
//! are themselves constant expressions, so `2*pi` is a valid interval end.

mod net_doping;

pub use net_doping::NetDoping;

use crate::expression::{Expression, ExpressionError};
use anyhow::anyhow;
use config::{Config, File};
use miette::Diagnostic;
use nalgebra::DVector;
use serde::Deserialize;
use std::path::PathBuf;

/// A doping profile description as entered by the user.
#[derive(Debug, Deserialize)]
pub struct ProfileDescription {
    /// Donor concentration expression `N_D(x)`
    pub donors: String,
    /// Acceptor concentration expression `N_A(x)`
    pub acceptors: String,
    /// Lower interval bound in micrometers, a constant expression
    pub start: String,
    /// Upper interval bound in micrometers, a constant expression
    pub stop: String,
}

impl ProfileDescription {
    /// Read a profile description from a TOML file.
    pub fn build(path: PathBuf) -> anyhow::Result<Self> {
        let s = Config::builder().add_source(File::from(path)).build()?;
        s.try_deserialize()
            .map_err(|e| anyhow!("failed to deserialize the profile description: {:?}", e))
    }

    /// Evaluate both concentration expressions over the interval.
    ///
    /// The samples are equally spaced with the interval endpoints included.
    pub fn sample(&self, number_of_points: usize) -> Result<DopingProfile, ProfileError> {
        if number_of_points < 2 {
            return Err(ProfileError::TooFewSamples {
                found: number_of_points,
            });
        }

        let donors = Expression::parse(&self.donors).map_err(ProfileError::Donors)?;
        let acceptors = Expression::parse(&self.acceptors).map_err(ProfileError::Acceptors)?;
        let start = self.bound("start", &self.start)?;
        let stop = self.bound("stop", &self.stop)?;
        if stop <= start {
            return Err(ProfileError::EmptyInterval { start, stop });
        }

        let positions = DVector::from_fn(number_of_points, |i, _| {
            start + i as f64 * (stop - start) / (number_of_points - 1) as f64
        });
        let donors = positions.map(|x| donors.evaluate(x));
        let acceptors = positions.map(|x| acceptors.evaluate(x));

        Ok(DopingProfile {
            positions,
            donors,
            acceptors,
        })
    }

    fn bound(&self, name: &'static str, source: &str) -> Result<f64, ProfileError> {
        let expression =
            Expression::parse(source).map_err(|source| ProfileError::Bound { name, source })?;
        if expression.references_position() {
            return Err(ProfileError::PositionInBound { name });
        }
        let value = expression.evaluate(0.);
        if !value.is_finite() {
            return Err(ProfileError::NonFiniteBound { name, value });
        }
        Ok(value)
    }
}

/// Donor and acceptor concentrations sampled over a uniform grid.
#[derive(Debug, Clone)]
pub struct DopingProfile {
    positions: DVector<f64>,
    donors: DVector<f64>,
    acceptors: DVector<f64>,
}

impl DopingProfile {
    /// Assemble a profile from parallel position and concentration samples.
    ///
    /// The grid is taken to be uniform; only its first spacing is read.
    pub fn new(positions: DVector<f64>, donors: DVector<f64>, acceptors: DVector<f64>) -> Self {
        assert!(positions.len() >= 2, "a profile needs at least two samples");
        assert!(
            positions.len() == donors.len() && positions.len() == acceptors.len(),
            "profile arrays must have matching lengths"
        );
        Self {
            positions,
            donors,
            acceptors,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the profile holds no samples. Always false by construction.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Grid spacing in micrometers.
    pub fn spacing(&self) -> f64 {
        self.positions[1] - self.positions[0]
    }

    /// Sample positions in micrometers.
    pub fn positions(&self) -> &DVector<f64> {
        &self.positions
    }

    /// Donor concentration samples.
    pub fn donors(&self) -> &DVector<f64> {
        &self.donors
    }

    /// Acceptor concentration samples.
    pub fn acceptors(&self) -> &DVector<f64> {
        &self.acceptors
    }

    /// Net doping over the grid.
    pub fn net_doping(&self) -> NetDoping {
        NetDoping::from_profile(self)
    }
}

/// Failures while reading or sampling a profile description.
///
/// Each variant names the input that failed, so the user knows which of the
/// four fields to fix.
#[derive(thiserror::Error, Debug, Diagnostic)]
#[allow(missing_docs)]
pub enum ProfileError {
    #[error("failed to parse the donor concentration expression N_D(x)")]
    Donors(#[source] ExpressionError),
    #[error("failed to parse the acceptor concentration expression N_A(x)")]
    Acceptors(#[source] ExpressionError),
    #[error("failed to parse the interval bound '{name}'")]
    Bound {
        name: &'static str,
        #[source]
        source: ExpressionError,
    },
    #[error("the interval bound '{name}' may not reference x")]
    PositionInBound { name: &'static str },
    #[error("the interval bound '{name}' evaluates to the non-finite value {value}")]
    NonFiniteBound { name: &'static str, value: f64 },
    #[error("the sampling interval is empty: start {start} is not below stop {stop}")]
    EmptyInterval { start: f64, stop: f64 },
    #[error("at least two samples are needed to form a grid, the configuration asks for {found}")]
    TooFewSamples { found: usize },
}
