// Copyright 2024 the depletion developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Constants
//!
//! Defines physical constants used in the calculation

pub const ELEMENTARY_CHARGE: f64 = 1.60217663e-19; // Single electron charge in C
pub const EPSILON_0: f64 = 8.8541878188e-12; // Permitivitty of free space in F / m
pub const EPSILON_R: f64 = 12.; // Relative permittivity of the material, silicon-like
pub const PERMITTIVITY: f64 = EPSILON_R * EPSILON_0; // Combined permittivity in F / m
pub const MICROMETER_TO_METER: f64 = 1e-6; // Positions are entered in micrometers
