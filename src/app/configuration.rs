use color_eyre::eyre::eyre;
use config::{Config, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub(crate) struct Configuration {
    pub(crate) sampling: SamplingConfiguration,
    pub(crate) output: OutputConfiguration,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SamplingConfiguration {
    /// Number of equally spaced points the expressions are evaluated at
    pub(crate) number_of_points: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OutputConfiguration {
    /// Directory the CSV results and the log file are written into
    pub(crate) directory: PathBuf,
}

impl Configuration {
    pub(crate) fn build() -> color_eyre::Result<Self> {
        // If I am running it here we should automatically be more debuggy
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .set_default("sampling.number_of_points", 301_i64)?
            .set_default("output.directory", "results")?
            // The default settings which we use in the general case
            .add_source(File::with_name(".config/default").required(false))
            // The override settings which may be set by the user, optional
            .add_source(File::with_name(&format!(".config/{}", run_mode)).required(false))
            .build()?;

        s.try_deserialize()
            .map_err(|e| eyre!(format!("Failed to deserialize the config file: {:?}", e)))
    }
}
