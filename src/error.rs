use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error for the pipeline. Everything is fail-fast: the first
/// malformed line or invalid argument aborts the run, there is no partial
/// result mode.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be read at all (missing file, bad encoding).
    #[error("reading dataset: {0}")]
    Read(#[from] csv::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A line of the input file could not be turned into a sample.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: {value:?} is not a number")]
    NotANumber { line: usize, value: String },

    #[error("line {line}: found {found} field(s), need at least one feature and a label")]
    TooFewFields { line: usize, found: usize },

    #[error("line {line}: found {found} fields, previous rows have {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Structurally valid input combined in an invalid way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("dataset has no samples")]
    EmptyDataset,

    #[error("requested {requested} components but the dataset has {n_features} features")]
    TooManyComponents {
        requested: usize,
        n_features: usize,
    },

    #[error("dataset has {dataset} features but the components were fitted on {components}")]
    DimensionMismatch { dataset: usize, components: usize },
}
