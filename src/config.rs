use crate::constants::{RESAMPLER_DEFAULT_CHUNK_SIZE, SCORER_INTERNAL_SAMPLE_RATE};

/// Configures how audio is decoded into sample sequences.
#[derive(Debug, Clone)]
pub struct AudioConfig {
    /// Sample rate the decoded audio is resampled to.
    pub target_sample_rate: usize,
    /// Number of input frames processed per resampler call.
    pub resampler_chunk_size: usize,
}
impl Default for AudioConfig {
    fn default() -> AudioConfig {
        AudioConfig {
            target_sample_rate: SCORER_INTERNAL_SAMPLE_RATE,
            resampler_chunk_size: RESAMPLER_DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Indicates what to do with a constant signal, where min-max rescaling is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Reject the signal with [`LetterMatchError::DegenerateSignal`](crate::LetterMatchError::DegenerateSignal).
    #[default]
    Fail,
    /// Map every sample to zero.
    Zeros,
}
impl std::fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            DegeneratePolicy::Fail => write!(f, "fail"),
            DegeneratePolicy::Zeros => write!(f, "zeros"),
        }
    }
}
impl std::str::FromStr for DegeneratePolicy {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "zeros" => Ok(Self::Zeros),
            _ => Err("Unknown degenerate policy".to_string()),
        }
    }
}

/// Configures amplitude normalization.
#[derive(Debug, Clone, Default)]
pub struct NormalizerConfig {
    /// Policy applied to constant signals.
    pub degenerate_policy: DegeneratePolicy,
}

/// Encapsulates all the tool configurations.
#[derive(Debug, Clone, Default)]
pub struct LetterMatchConfig {
    /// Configures audio decoding and resampling.
    pub audio: AudioConfig,
    /// Configures amplitude normalization.
    pub normalizer: NormalizerConfig,
}

#[test]
fn it_parses_degenerate_policy() {
    assert_eq!("ZEROS".parse::<DegeneratePolicy>(), Ok(DegeneratePolicy::Zeros));
    assert_eq!("fail".parse::<DegeneratePolicy>(), Ok(DegeneratePolicy::Fail));
    assert!("nan".parse::<DegeneratePolicy>().is_err());
    assert_eq!(DegeneratePolicy::Zeros.to_string(), "zeros");
}

#[test]
fn it_defaults_to_internal_sample_rate() {
    let config = LetterMatchConfig::default();
    assert_eq!(config.audio.target_sample_rate, 4000);
    assert_eq!(config.normalizer.degenerate_policy, DegeneratePolicy::Fail);
}
