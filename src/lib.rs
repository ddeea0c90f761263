// Copyright 2024 the depletion developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Depletion is a depletion width solver for one-dimensional PN junctions
//!
//! # Overview
//! The depletion region of a reverse biased PN junction widens with the
//! applied voltage. For arbitrary doping profiles there is no closed form
//! for the relationship, so Depletion samples the donor and acceptor
//! concentrations over the interval of interest and walks outward from the
//! junction, keeping the electric field built up on both sides balanced in
//! magnitude and integrating the enclosed charge to recover the voltage at
//! every width. The result is the depletion-width-vs-voltage curve, split
//! into its n-side and p-side contributions.
//!
//! # Usage
//! Depletion is distributed as a binary crate and is intended to be run from
//! the command line. Doping profiles are described in a `.toml` file holding
//! the two concentration expressions and the sampling interval in
//! micrometers:
//!
//! ```toml
//! donors = "1.1E21*H(x-5)"
//! acceptors = "1.1E21 - 1.1E21*H(x-5)"
//! start = "0"
//! stop = "10"
//! ```
//!
//! The expressions use the free variable `x` and a fixed whitelist of
//! functions (`sin`, `cos`, `tan`, `asin`, `acos`, `atan`, `log`, `sqrt`,
//! `abs`, `round`, `exp`, `pow`, the Heaviside step `H`) together with the
//! constant `pi`. Results are written as CSV into the configured output
//! directory.

#![warn(missing_docs)]
#![allow(dead_code)]

/// The command line application, configuration and tracing primitives
pub mod app;

/// Physical constants
mod constants;

/// Error handling
mod error;

/// Sandboxed parsing and evaluation of doping concentration expressions
pub mod expression;

/// Doping profile descriptions, sampling and net doping
pub mod profile;

/// The depletion width solver
pub mod solver;

/// Writes sampled profiles and result curves to disk
mod postprocessor;
