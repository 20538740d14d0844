use log::warn;

use super::{NormalizedSequence, SampleSequence};
use crate::{
    config::{DegeneratePolicy, NormalizerConfig},
    error::{LetterMatchError, Result},
};

/// Min-max rescaling of a signal into the unit range.
#[derive(Debug, Clone, Default)]
pub struct SignalNormalizer {
    policy: DegeneratePolicy,
}
impl SignalNormalizer {
    pub fn new(config: &NormalizerConfig) -> Self {
        SignalNormalizer {
            policy: config.degenerate_policy,
        }
    }
    pub fn with_policy(policy: DegeneratePolicy) -> Self {
        SignalNormalizer { policy }
    }
    pub fn policy(&self) -> DegeneratePolicy {
        self.policy
    }
    pub fn normalize(&self, samples: &SampleSequence) -> Result<NormalizedSequence> {
        normalize(samples.as_slice(), self.policy).map(NormalizedSequence::new_unchecked)
    }
}

/// Rescales `samples` so each value becomes `(x - min) / (max - min)`.
///
/// A constant input has no range; `policy` decides whether that fails or yields zeros.
pub fn normalize(samples: &[f64], policy: DegeneratePolicy) -> Result<Vec<f64>> {
    if samples.is_empty() {
        return Err(LetterMatchError::insufficient(0, 1));
    }
    if let Some(index) = samples.iter().position(|v| !v.is_finite()) {
        return Err(LetterMatchError::NonFiniteSample { index });
    }
    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });
    let range = max - min;
    if range == 0. {
        return match policy {
            DegeneratePolicy::Fail => Err(LetterMatchError::DegenerateSignal {
                len: samples.len(),
                value: min,
            }),
            DegeneratePolicy::Zeros => {
                warn!(
                    "constant signal of {} samples normalized to zeros",
                    samples.len()
                );
                Ok(vec![0.; samples.len()])
            }
        };
    }
    Ok(samples.iter().map(|v| (v - min) / range).collect())
}

#[test]
fn it_normalizes_into_unit_range() {
    let normalized = normalize(&[-3., 1., 5., 0.5, -1.], DegeneratePolicy::Fail).unwrap();
    assert_eq!(normalized.len(), 5);
    let min = normalized.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = normalized.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(min, 0.);
    assert_eq!(max, 1.);
    assert_eq!(normalized[1], 0.5);
}

#[test]
fn it_keeps_order_of_samples() {
    let normalized = normalize(&[10., 20., 15.], DegeneratePolicy::Fail).unwrap();
    assert_eq!(normalized, vec![0., 1., 0.5]);
}

#[test]
fn it_fails_on_constant_signals_by_default() {
    let result = normalize(&[0.25, 0.25, 0.25], DegeneratePolicy::Fail);
    assert!(matches!(
        result,
        Err(LetterMatchError::DegenerateSignal { len: 3, .. })
    ));
}

#[test]
fn it_maps_constant_signals_to_zeros_when_configured() {
    let normalized = normalize(&[7.], DegeneratePolicy::Zeros).unwrap();
    assert_eq!(normalized, vec![0.]);
    let normalized = normalize(&[-2., -2.], DegeneratePolicy::Zeros).unwrap();
    assert!(normalized.iter().all(|v| *v == 0. && !v.is_nan()));
}

#[test]
fn it_rejects_empty_signals() {
    assert!(matches!(
        normalize(&[], DegeneratePolicy::Zeros),
        Err(LetterMatchError::InsufficientSamples { len: 0, .. })
    ));
}

#[test]
fn it_uses_the_configured_policy() {
    let config = NormalizerConfig {
        degenerate_policy: DegeneratePolicy::Zeros,
    };
    let normalizer = SignalNormalizer::new(&config);
    assert_eq!(normalizer.policy(), DegeneratePolicy::Zeros);
    assert_eq!(SignalNormalizer::default().policy(), DegeneratePolicy::Fail);
    let samples = SampleSequence::new(vec![1., 1., 1., 1.]).unwrap();
    let normalized = normalizer.normalize(&samples).unwrap();
    assert_eq!(normalized.as_slice(), &[0., 0., 0., 0.]);
}
