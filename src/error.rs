use miette::Diagnostic;

/// Hard failures raised by the depletion width solver.
///
/// Every variant signals a broken internal invariant rather than a rejected
/// input: the field balance loop asked for data it does not have. Rejected
/// profiles never surface here, the solver returns an absent result for those.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum SolverError {
    /// An interpolation or integration referenced a position outside the data
    #[error("index {index} is outside the sampled range 0..{length}")]
    IndexOutOfRange {
        /// The offending fractional index
        index: f64,
        /// Length of the sampled array
        length: usize,
    },
    /// A flat field bracket holds no crossing for the requested magnitude
    #[error("the bracketing field samples are equal but do not match the target magnitude")]
    NoInterpolationSolution,
    /// Junction localization failed although the sign change count passed
    #[error("the net doping passed validation but no junction could be located")]
    MissingJunction,
}
