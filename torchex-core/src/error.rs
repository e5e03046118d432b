use thiserror::Error;

/// Custom error type for the torchex crates.
///
/// Every variant except [`TorchexError::IndexOutOfBounds`] describes a
/// precondition violation of a dataset operation (an invalid argument). They
/// are checked before any sampling or filtering happens, so an error never
/// comes with a partial result.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum TorchexError {
    #[error("Either a percentage or an absolute size must be given")]
    MissingSelector,

    #[error("Only one of percentage ({percentage}) and absolute size ({absolute_size}) may be given")]
    AmbiguousSelector { percentage: f64, absolute_size: usize },

    #[error("Percentage must be > 0 and < 1, got {percentage}")]
    PercentageOutOfRange { percentage: f64 },

    #[error("Absolute size {requested} exceeds the dataset length {available}")]
    OversizedAbsoluteSize { requested: usize, available: usize },

    #[error("Labels must be unique, {label} is repeated")]
    DuplicateLabels { label: String },

    #[error("Dataset does not provide the '{capability}' capability")]
    MissingCapability { capability: &'static str },

    #[error("Label {label} does not occur in the dataset targets")]
    UnknownLabel { label: String },

    #[error("Targets length {targets} does not match dataset length {len}")]
    TargetsLengthMismatch { targets: usize, len: usize },

    #[error("Cannot draw {count} samples from an empty population")]
    EmptyPopulation { count: usize },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl TorchexError {
    /// Returns `true` if the error reports an invalid argument passed to a
    /// dataset operation, as opposed to an out-of-range element access.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, TorchexError::IndexOutOfBounds { .. })
    }
}
