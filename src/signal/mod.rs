mod normalizer;
mod sequence;
pub use normalizer::{normalize, SignalNormalizer};
pub use sequence::{NormalizedSequence, SampleSequence};
