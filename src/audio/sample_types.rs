use hound::WavSpec;

use crate::error::{LetterMatchError, Result};

/// Indicates the sample format type and size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    I8,
    I16,
    I24,
    I32,
    F32,
}
impl SampleFormat {
    pub fn get_bits_per_sample(&self) -> u16 {
        match self {
            SampleFormat::I8 => 8,
            SampleFormat::I16 => 16,
            SampleFormat::I24 => 24,
            SampleFormat::I32 => 32,
            SampleFormat::F32 => 32,
        }
    }
    pub fn is_float(&self) -> bool {
        matches!(self, SampleFormat::F32)
    }
    pub fn int_of_size(bit_size: u16) -> Option<Self> {
        match bit_size {
            8 => Some(SampleFormat::I8),
            16 => Some(SampleFormat::I16),
            24 => Some(SampleFormat::I24),
            32 => Some(SampleFormat::I32),
            _ => None,
        }
    }
    pub fn float_of_size(bit_size: u16) -> Option<Self> {
        match bit_size {
            32 => Some(SampleFormat::F32),
            _ => None,
        }
    }
    /// Maps an integer sample read at this width into `[-1, 1]`.
    pub fn scale_int(&self, value: i32) -> f64 {
        value as f64 / (1u64 << (self.get_bits_per_sample() - 1)) as f64
    }
}
impl TryFrom<&WavSpec> for SampleFormat {
    type Error = LetterMatchError;
    fn try_from(spec: &WavSpec) -> Result<Self> {
        let format = match spec.sample_format {
            hound::SampleFormat::Int => SampleFormat::int_of_size(spec.bits_per_sample),
            hound::SampleFormat::Float => SampleFormat::float_of_size(spec.bits_per_sample),
        };
        format.ok_or_else(|| {
            LetterMatchError::UnsupportedFormat(format!(
                "{} bits per sample ({:?})",
                spec.bits_per_sample, spec.sample_format
            ))
        })
    }
}
impl std::fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            SampleFormat::I8 => write!(f, "i8"),
            SampleFormat::I16 => write!(f, "i16"),
            SampleFormat::I24 => write!(f, "i24"),
            SampleFormat::I32 => write!(f, "i32"),
            SampleFormat::F32 => write!(f, "f32"),
        }
    }
}

#[test]
fn it_resolves_format_from_wav_spec() {
    let spec = WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample: 24,
        sample_format: hound::SampleFormat::Int,
    };
    assert_eq!(SampleFormat::try_from(&spec).unwrap(), SampleFormat::I24);
    let spec = WavSpec {
        bits_per_sample: 64,
        sample_format: hound::SampleFormat::Float,
        ..spec
    };
    assert!(matches!(
        SampleFormat::try_from(&spec),
        Err(LetterMatchError::UnsupportedFormat(_))
    ));
}

#[test]
fn it_scales_int_samples_to_unit_amplitude() {
    assert_eq!(SampleFormat::I16.scale_int(i16::MIN as i32), -1.);
    assert_eq!(SampleFormat::I16.scale_int(16384), 0.5);
    assert_eq!(SampleFormat::I8.scale_int(-64), -0.5);
}
