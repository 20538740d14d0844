/// Sample rate every sequence is brought to before scoring.
pub const SCORER_INTERNAL_SAMPLE_RATE: usize = 4000;
/// Input frames handed to the resampler per call.
pub const RESAMPLER_DEFAULT_CHUNK_SIZE: usize = 1024;
pub const LATIN_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
pub const REFERENCE_FILE_EXTENSION: &str = "wav";
/// Chunks fed through the resampler when measuring its delay.
pub const RESAMPLER_DELAY_CHUNKS: usize = 8;
