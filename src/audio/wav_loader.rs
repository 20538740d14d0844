use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use hound::WavReader;
use log::debug;

use super::{SampleEncoder, SampleFormat};
use crate::{
    config::AudioConfig,
    error::{LetterMatchError, Result},
    signal::SampleSequence,
};

/// Decodes wav audio into mono sample sequences at the configured sample rate.
#[derive(Debug, Clone, Default)]
pub struct WavLoader {
    config: AudioConfig,
}
impl WavLoader {
    pub fn new(config: AudioConfig) -> Self {
        WavLoader { config }
    }
    pub fn get_target_sample_rate(&self) -> usize {
        self.config.target_sample_rate
    }
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<SampleSequence> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(LetterMatchError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        debug!("loading \"{}\"", path.display());
        let file = File::open(path).map_err(|err| LetterMatchError::Wav(err.into()))?;
        self.load_reader(BufReader::new(file))
    }
    pub fn load_buffer(&self, buffer: &[u8]) -> Result<SampleSequence> {
        self.load_reader(BufReader::new(buffer))
    }
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<SampleSequence> {
        let wav_reader = WavReader::new(reader)?;
        let spec = wav_reader.spec();
        let sample_format = SampleFormat::try_from(&spec)?;
        let samples = if sample_format.is_float() {
            wav_reader
                .into_samples::<f32>()
                .map(|sample| sample.map(|value| value as f64))
                .collect::<std::result::Result<Vec<f64>, hound::Error>>()?
        } else {
            wav_reader
                .into_samples::<i32>()
                .map(|sample| sample.map(|value| sample_format.scale_int(value)))
                .collect::<std::result::Result<Vec<f64>, hound::Error>>()?
        };
        debug!(
            "decoded {} {} samples ({} channels, {} Hz)",
            samples.len(),
            sample_format,
            spec.channels,
            spec.sample_rate
        );
        let mut encoder = SampleEncoder::new(
            spec.sample_rate as usize,
            spec.channels,
            self.config.target_sample_rate,
            self.config.resampler_chunk_size,
        )?;
        SampleSequence::new(encoder.encode(samples)?)
    }
}

#[cfg(test)]
fn wav_bytes(spec: hound::WavSpec, samples: &[i16]) -> Vec<u8> {
    let mut buffer = std::io::Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut buffer, spec).unwrap();
        for sample in samples {
            writer.write_sample(*sample).unwrap();
        }
        writer.finalize().unwrap();
    }
    buffer.into_inner()
}

#[test]
fn it_loads_int_wav_buffer_at_target_rate() {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 4000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let bytes = wav_bytes(spec, &[0, 16384, -16384, 32767]);
    let loader = WavLoader::default();
    assert_eq!(loader.get_target_sample_rate(), 4000);
    let sequence = loader.load_buffer(&bytes).unwrap();
    assert_eq!(sequence.len(), 4);
    assert_eq!(sequence.as_slice()[1], 0.5);
    assert_eq!(sequence.as_slice()[2], -0.5);
}

#[test]
fn it_keeps_first_channel_of_stereo_wav() {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 4000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let bytes = wav_bytes(spec, &[16384, -16384, 0, 100, -16384, 100]);
    let sequence = WavLoader::default().load_buffer(&bytes).unwrap();
    assert_eq!(sequence.as_slice(), &[0.5, 0., -0.5]);
}

#[test]
fn it_fails_on_empty_wav() {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 4000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let bytes = wav_bytes(spec, &[]);
    assert!(matches!(
        WavLoader::default().load_buffer(&bytes),
        Err(LetterMatchError::InsufficientSamples { len: 0, .. })
    ));
}

#[test]
fn it_fails_on_missing_file() {
    assert!(matches!(
        WavLoader::default().load_file("/nonexistent/letter.wav"),
        Err(LetterMatchError::FileNotFound { .. })
    ));
}

#[test]
fn it_fails_on_invalid_bytes() {
    assert!(matches!(
        WavLoader::default().load_buffer(b"not a wav file"),
        Err(LetterMatchError::Wav(_))
    ));
}
