//! Error types for loading, normalizing and scoring sample sequences.

/// Errors reported by every fallible operation of the crate.
#[derive(Debug, thiserror::Error)]
pub enum LetterMatchError {
    /// Returned when a sequence is too short for the requested operation.
    #[error("insufficient samples: got {len}, need at least {required}")]
    InsufficientSamples { len: usize, required: usize },

    /// Returned when normalizing a constant signal under [`DegeneratePolicy::Fail`](crate::DegeneratePolicy::Fail).
    #[error("degenerate signal: all {len} samples equal {value}")]
    DegenerateSignal { len: usize, value: f64 },

    /// Returned when a sequence contains NaN or infinity.
    #[error("sample sequence contains non-finite value at index {index}")]
    NonFiniteSample { index: usize },

    /// Wraps an error raised while scoring one reference.
    #[error("reference '{label}': {source}")]
    Reference {
        label: String,
        #[source]
        source: Box<LetterMatchError>,
    },

    #[error("no reference recording for label '{label}'")]
    MissingReference { label: String },

    #[error("duplicate label '{label}' in alphabet")]
    DuplicateLabel { label: String },

    #[error("alphabet must contain at least one label")]
    EmptyAlphabet,

    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("unable to decode wav: {0}")]
    Wav(#[from] hound::Error),

    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error("resampler failure: {0}")]
    Resampler(String),
}

pub type Result<T> = std::result::Result<T, LetterMatchError>;

impl LetterMatchError {
    pub(crate) fn insufficient(len: usize, required: usize) -> Self {
        LetterMatchError::InsufficientSamples { len, required }
    }
    pub(crate) fn for_reference(self, label: &str) -> Self {
        LetterMatchError::Reference {
            label: label.to_string(),
            source: Box::new(self),
        }
    }
}
