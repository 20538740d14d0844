use crate::error::{LetterMatchError, Result};

/// Amplitude readings of a recording at the internal sample rate.
/// Guaranteed non-empty with all finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSequence(Vec<f64>);
impl SampleSequence {
    pub fn new(samples: Vec<f64>) -> Result<Self> {
        if samples.is_empty() {
            return Err(LetterMatchError::insufficient(0, 1));
        }
        if let Some(index) = samples.iter().position(|v| !v.is_finite()) {
            return Err(LetterMatchError::NonFiniteSample { index });
        }
        Ok(SampleSequence(samples))
    }
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Always false for a constructed sequence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}
impl AsRef<[f64]> for SampleSequence {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}
impl TryFrom<Vec<f64>> for SampleSequence {
    type Error = LetterMatchError;
    fn try_from(samples: Vec<f64>) -> Result<Self> {
        Self::new(samples)
    }
}

/// A sample sequence rescaled into `[0, 1]`. Only built by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSequence(Vec<f64>);
impl NormalizedSequence {
    pub(crate) fn new_unchecked(values: Vec<f64>) -> Self {
        NormalizedSequence(values)
    }
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}
impl AsRef<[f64]> for NormalizedSequence {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

#[test]
fn it_rejects_empty_sequences() {
    assert!(matches!(
        SampleSequence::new(Vec::new()),
        Err(LetterMatchError::InsufficientSamples { len: 0, required: 1 })
    ));
}

#[test]
fn it_rejects_non_finite_samples() {
    assert!(matches!(
        SampleSequence::new(vec![0.1, f64::NAN, 0.3]),
        Err(LetterMatchError::NonFiniteSample { index: 1 })
    ));
    assert!(matches!(
        SampleSequence::try_from(vec![f64::INFINITY]),
        Err(LetterMatchError::NonFiniteSample { index: 0 })
    ));
}
