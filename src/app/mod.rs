//! This module governs the high-level implementation of the calculation
mod configuration;
mod error;
mod telemetry;
pub(crate) use configuration::Configuration;

use crate::postprocessor;
use crate::profile::ProfileDescription;
use crate::solver;
use clap::{ArgEnum, Parser};
use color_eyre::eyre::eyre;
use error::DepletionError;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct App {
    /// Path to the profile description to calculate
    file_path: Option<PathBuf>,
    #[clap(arg_enum, short, long, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ArgEnum)]
enum LogLevel {
    Trace,
    Info,
    Debug,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self {
            LogLevel::Trace => "trace",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Error => "error",
        };
        write!(f, "{}", level)
    }
}

/// Entry point of the binary: read a profile description, calculate its
/// depletion width curves and emit the results.
pub fn run() -> color_eyre::Result<()> {
    let cli = App::parse();

    let config = Configuration::build()?;

    let path = cli
        .file_path
        .ok_or(eyre!("A profile description path needs to be passed."))?;

    std::fs::create_dir_all(&config.output.directory)?;
    let (subscriber, _guard) = telemetry::get_subscriber(cli.log_level, &config.output.directory);
    telemetry::init_subscriber(subscriber);

    calculate(path, &config)?;

    Ok(())
}

fn calculate(path: PathBuf, config: &Configuration) -> Result<(), DepletionError> {
    let description = ProfileDescription::build(path)?;
    let profile = description.sample(config.sampling.number_of_points)?;
    let net_doping = profile.net_doping();
    tracing::info!(
        "sampled N_D(x) and N_A(x) at {} points with spacing {:.4} um",
        profile.len(),
        profile.spacing()
    );

    // The profile is always emitted, a rejection below degrades to this
    let profile_path = config.output.directory.join("doping_profile.csv");
    postprocessor::write_doping_profile(&profile_path, &profile, &net_doping)?;
    tracing::info!("doping profile written to {}", profile_path.display());

    match solver::calculate_depletion_widths(&profile)? {
        Some(result) => {
            let widths_path = config.output.directory.join("depletion_width.csv");
            postprocessor::write_depletion_widths(&widths_path, &result)?;

            tracing::info!(
                "junction located at x = {:.4} um (sample {})",
                profile.positions()[result.junction_index],
                result.junction_index
            );
            if let Some(&(width, voltage)) = result.total.last() {
                tracing::info!(
                    "{} bias points up to {:.4} V ({:.4} um total width) written to {}",
                    result.total.len(),
                    voltage,
                    width,
                    widths_path.display()
                );
            }
        }
        None => {
            tracing::warn!(
                "the junction forms where the acceptor concentration equals the donor \
                 concentration; the profile must contain exactly one junction in the given \
                 interval"
            );
            tracing::warn!(
                "net doping is closest to zero at x = {:.4} um; only the doping profile was \
                 written",
                profile.positions()[net_doping.closest_to_zero_index()]
            );
        }
    }

    Ok(())
}
