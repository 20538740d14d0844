mod alphabet;
mod audio;
mod config;
mod constants;
mod distance;
mod error;
mod library;
mod score;
mod scorer;
mod signal;
pub use alphabet::Alphabet;
pub use audio::{SampleEncoder, SampleFormat, WavLoader};
pub use config::AudioConfig;
pub use config::DegeneratePolicy;
pub use config::LetterMatchConfig;
pub use config::NormalizerConfig;
pub use constants::LATIN_ALPHABET;
pub use constants::SCORER_INTERNAL_SAMPLE_RATE;
pub use distance::{absolute_difference, dtw, euclidean, Dtw};
pub use error::{LetterMatchError, Result};
pub use library::ReferenceLibrary;
pub use score::{ScoreEntry, ScoreResult};
pub use scorer::{score, Scorer};
pub use signal::{normalize, NormalizedSequence, SampleSequence, SignalNormalizer};
