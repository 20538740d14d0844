mod encoder;
mod sample_types;
mod wav_loader;
pub use encoder::SampleEncoder;
pub use sample_types::SampleFormat;
pub use wav_loader::WavLoader;
