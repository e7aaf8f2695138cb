use thiserror::Error;

/// Errors that can occur when classifying a plate number string.
///
/// All variants are terminal: classification performs no retries and
/// produces no partial results. A string either matches exactly one
/// category rule in full or fails outright.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PlateError {
    /// Nothing was left to match after stripping separators.
    #[error("empty plate number")]
    EmptyInput,

    /// The normalized string matched no plate category.
    #[error("unrecognized plate number '{compact}'")]
    UnrecognizedPlate {
        /// The normalized compact string that failed to match.
        compact: String,
    },
}
