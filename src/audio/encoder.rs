use log::debug;
use rubato::{FftFixedInOut, Resampler};

use crate::{
    constants::RESAMPLER_DELAY_CHUNKS,
    error::{LetterMatchError, Result},
};

/**
 * Converts interleaved samples into a mono sequence at the target sample rate
 */
pub struct SampleEncoder {
    resampling: Option<ResamplingSpec>,
    source_channels: u16,
    source_sample_rate: usize,
    target_sample_rate: usize,
}
struct ResamplingSpec {
    chunk_size: usize,
    // output samples between an input frame and its resampled counterpart
    output_delay: usize,
}
impl SampleEncoder {
    pub fn new(
        source_sample_rate: usize,
        source_channels: u16,
        target_sample_rate: usize,
        chunk_size: usize,
    ) -> Result<SampleEncoder> {
        if source_channels == 0 {
            return Err(LetterMatchError::UnsupportedFormat(
                "audio has no channels".to_string(),
            ));
        }
        if source_sample_rate == 0 || target_sample_rate == 0 {
            return Err(LetterMatchError::UnsupportedFormat(
                "sample rate must be positive".to_string(),
            ));
        }
        let resampling = if source_sample_rate != target_sample_rate {
            let chunk_size = chunk_size.max(1);
            let mut resampler = build_resampler(source_sample_rate, target_sample_rate, chunk_size)?;
            let output_delay = measure_output_delay(&mut resampler)?;
            debug!(
                "resampling {} Hz to {} Hz ({} input frames per chunk, {} samples of delay)",
                source_sample_rate,
                target_sample_rate,
                resampler.input_frames_next(),
                output_delay
            );
            Some(ResamplingSpec {
                chunk_size,
                output_delay,
            })
        } else {
            None
        };
        Ok(SampleEncoder {
            resampling,
            source_channels,
            source_sample_rate,
            target_sample_rate,
        })
    }
    pub fn get_target_sample_rate(&self) -> usize {
        self.target_sample_rate
    }
    /// Output samples the resampler lags behind its input. Zero when no resampling is needed.
    pub fn get_output_delay(&self) -> usize {
        self.resampling
            .as_ref()
            .map(|resampling| resampling.output_delay)
            .unwrap_or(0)
    }
    /// Keeps the first channel of the interleaved `buffer` and resamples it.
    pub fn encode(&mut self, buffer: Vec<f64>) -> Result<Vec<f64>> {
        let mono_buffer = if self.source_channels != 1 {
            buffer
                .chunks_exact(self.source_channels as usize)
                .map(|chunk| chunk[0])
                .collect::<Vec<f64>>()
        } else {
            buffer
        };
        match self.resampling.as_ref() {
            None => Ok(mono_buffer),
            Some(resampling) => {
                let mut resampler = build_resampler(
                    self.source_sample_rate,
                    self.target_sample_rate,
                    resampling.chunk_size,
                )?;
                resample(
                    &mut resampler,
                    mono_buffer,
                    resampling.output_delay,
                    self.source_sample_rate,
                    self.target_sample_rate,
                )
            }
        }
    }
}

fn build_resampler(
    source_sample_rate: usize,
    target_sample_rate: usize,
    chunk_size: usize,
) -> Result<FftFixedInOut<f64>> {
    FftFixedInOut::<f64>::new(source_sample_rate, target_sample_rate, chunk_size, 1)
        .map_err(|err| LetterMatchError::Resampler(err.to_string()))
}

fn process_chunk(resampler: &mut FftFixedInOut<f64>, frame: Vec<f64>) -> Result<Vec<f64>> {
    let waves_out = resampler
        .process(&[frame], None)
        .map_err(|err| LetterMatchError::Resampler(err.to_string()))?;
    Ok(waves_out.into_iter().next().unwrap_or_default())
}

/// Locates the response peak of a unit impulse fed at input frame 0.
fn measure_output_delay(resampler: &mut FftFixedInOut<f64>) -> Result<usize> {
    let input_frames = resampler.input_frames_next();
    let mut response = Vec::new();
    for chunk_index in 0..RESAMPLER_DELAY_CHUNKS {
        let mut frame = vec![0.; input_frames];
        if chunk_index == 0 {
            frame[0] = 1.;
        }
        response.extend(process_chunk(resampler, frame)?);
    }
    Ok(response
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.abs().total_cmp(&b.abs()))
        .map(|(index, _)| index)
        .unwrap_or(0))
}

fn resample(
    resampler: &mut FftFixedInOut<f64>,
    mono_buffer: Vec<f64>,
    output_delay: usize,
    source_sample_rate: usize,
    target_sample_rate: usize,
) -> Result<Vec<f64>> {
    let expected_length = ((mono_buffer.len() as f64 * target_sample_rate as f64)
        / source_sample_rate as f64)
        .round() as usize;
    let required_length = expected_length + output_delay;
    let input_frames = resampler.input_frames_next();
    let mut output = Vec::with_capacity(required_length + resampler.output_frames_next());
    for chunk in mono_buffer.chunks(input_frames) {
        let mut frame = chunk.to_vec();
        // last chunk
        frame.resize(input_frames, 0.);
        output.extend(process_chunk(resampler, frame)?);
    }
    // flush the samples still held back by the resampler
    while output.len() < required_length {
        let flushed = process_chunk(resampler, vec![0.; input_frames])?;
        if flushed.is_empty() {
            return Err(LetterMatchError::Resampler(
                "resampler produced no output while flushing".to_string(),
            ));
        }
        output.extend(flushed);
    }
    output.drain(..output_delay);
    output.truncate(expected_length);
    Ok(output)
}

#[test]
fn it_keeps_first_channel_without_resampling() {
    let mut encoder = SampleEncoder::new(4000, 2, 4000, 256).unwrap();
    assert_eq!(encoder.get_output_delay(), 0);
    assert_eq!(encoder.get_target_sample_rate(), 4000);
    let encoded = encoder.encode(vec![0.1, 0.9, 0.2, 0.8, 0.3, 0.7]).unwrap();
    assert_eq!(encoded, vec![0.1, 0.2, 0.3]);
}

#[test]
fn it_resamples_to_target_length() {
    let mut encoder = SampleEncoder::new(16000, 1, 4000, 1024).unwrap();
    assert_eq!(encoder.get_target_sample_rate(), 4000);
    let samples = (0..16000)
        .map(|i| (i as f64 * 2. * std::f64::consts::PI * 200. / 16000.).sin())
        .collect::<Vec<_>>();
    let encoded = encoder.encode(samples).unwrap();
    assert_eq!(encoded.len(), 4000);
    assert!(encoded.iter().all(|v| v.is_finite()));
}

#[test]
fn it_keeps_pulses_aligned_in_time() {
    let mut encoder = SampleEncoder::new(16000, 1, 4000, 1024).unwrap();
    let mut samples = vec![0.; 8000];
    for sample in samples.iter_mut().take(4010).skip(3990) {
        *sample = 1.;
    }
    let encoded = encoder.encode(samples).unwrap();
    assert_eq!(encoded.len(), 2000);
    let peak_index = encoded
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(index, _)| index)
        .unwrap();
    assert!(
        (997..=1003).contains(&peak_index),
        "pulse centered at input 4000 lands at output {}",
        peak_index
    );
}

#[test]
fn it_keeps_amplitude_of_short_clips() {
    let mut encoder = SampleEncoder::new(16000, 1, 4000, 1024).unwrap();
    let encoded = encoder.encode(vec![0.5; 400]).unwrap();
    assert_eq!(encoded.len(), 100);
    let middle = &encoded[20..80];
    let mean = middle.iter().sum::<f64>() / middle.len() as f64;
    assert!((mean - 0.5).abs() < 0.02, "mean of constant clip is {}", mean);
    assert!(middle.iter().all(|v| (v - 0.5).abs() < 0.05));
}

#[test]
fn it_encodes_repeatedly_with_the_same_result() {
    let mut encoder = SampleEncoder::new(16000, 1, 4000, 1024).unwrap();
    let samples = (0..3000)
        .map(|i| (i as f64 * 0.01).sin())
        .collect::<Vec<_>>();
    let first = encoder.encode(samples.clone()).unwrap();
    let second = encoder.encode(samples).unwrap();
    assert_eq!(first, second);
}

#[test]
fn it_rejects_zero_channels() {
    assert!(matches!(
        SampleEncoder::new(16000, 0, 4000, 1024),
        Err(LetterMatchError::UnsupportedFormat(_))
    ));
}
