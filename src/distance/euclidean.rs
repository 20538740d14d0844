use super::validate_pair;
#[cfg(test)]
use crate::error::LetterMatchError;
use crate::error::Result;

/// L2 distance after zero-padding the shorter sequence at its end.
///
/// Padding is not an alignment: a sequence that is a prefix of the other only pays
/// for the tail it lacks. Empty or non-finite input is rejected.
pub fn euclidean(first_sequence: &[f64], second_sequence: &[f64]) -> Result<f64> {
    validate_pair(first_sequence, second_sequence)?;
    let length = first_sequence.len().max(second_sequence.len());
    let padded = |sequence: &[f64], index: usize| sequence.get(index).copied().unwrap_or(0.);
    let sum_squared = (0..length)
        .map(|index| padded(first_sequence, index) - padded(second_sequence, index))
        .map(|difference| difference * difference)
        .sum::<f64>();
    Ok(sum_squared.sqrt())
}

#[test]
fn it_pads_shorter_sequence_with_zeros() {
    let distance = euclidean(&[0.2, 0.4], &[0.2, 0.4, 0.6]).unwrap();
    assert!((distance - 0.6).abs() < 1e-12);
}

#[test]
fn it_is_symmetric() {
    let a = [0., 0.3, 1., 0.7];
    let b = [1., 0.1, 0.];
    assert_eq!(euclidean(&a, &b).unwrap(), euclidean(&b, &a).unwrap());
}

#[test]
fn it_is_zero_only_for_equal_padded_sequences() {
    assert_eq!(euclidean(&[0.5, 1.], &[0.5, 1.]).unwrap(), 0.);
    assert_eq!(euclidean(&[0.5, 1.], &[0.5, 1., 0., 0.]).unwrap(), 0.);
    assert!(euclidean(&[0.5, 1.], &[0.5, 1., 0.1]).unwrap() > 0.);
}

#[test]
fn it_computes_root_sum_of_squares() {
    let distance = euclidean(&[0., 0.], &[0.3, 0.4]).unwrap();
    assert!((distance - 0.5).abs() < 1e-12);
}

#[test]
fn it_rejects_empty_sequences() {
    assert!(matches!(
        euclidean(&[], &[1.]),
        Err(LetterMatchError::InsufficientSamples { .. })
    ));
}

#[test]
fn it_rejects_non_finite_samples() {
    assert!(matches!(
        euclidean(&[0.1, f64::NAN], &[0.1, 0.2]),
        Err(LetterMatchError::NonFiniteSample { index: 1 })
    ));
    assert!(matches!(
        euclidean(&[0.1], &[0.1, 0.2, f64::INFINITY]),
        Err(LetterMatchError::NonFiniteSample { index: 2 })
    ));
}
