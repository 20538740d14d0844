use crate::error::{LetterMatchError, Result};

/// Dynamic time warping over two sequences, keeping only the previous cost row.
///
/// The first row is seeded with `+inf` past index 0, so the first element of the
/// first sequence can only align with the first element of the second one. This
/// makes the distance order dependent for sequences of different shapes.
pub struct Dtw<T: Copy> {
    distance_fn: fn(T, T) -> f64,
}
impl<T: Copy> Dtw<T> {
    pub fn new(distance_fn: fn(T, T) -> f64) -> Dtw<T> {
        Dtw { distance_fn }
    }
    pub fn compute_distance(&self, first_sequence: &[T], second_sequence: &[T]) -> Result<f64> {
        let state_m = first_sequence.len();
        let state_n = second_sequence.len();
        if state_m == 0 || state_n == 0 {
            return Err(LetterMatchError::insufficient(0, 1));
        }
        if state_m == 1 && state_n > 1 {
            // the seeded row is all +inf past the first column
            return Err(LetterMatchError::insufficient(1, 2));
        }
        let mut previous_costs = vec![f64::INFINITY; state_n];
        let mut current_costs = vec![f64::INFINITY; state_n];
        previous_costs[0] = (self.distance_fn)(first_sequence[0], second_sequence[0]);
        for first_sequence_item in first_sequence.iter().skip(1) {
            current_costs[0] =
                previous_costs[0] + (self.distance_fn)(*first_sequence_item, second_sequence[0]);
            for (column_index, second_sequence_item) in
                second_sequence.iter().enumerate().skip(1)
            {
                let cost = (self.distance_fn)(*first_sequence_item, *second_sequence_item);
                let deletion = current_costs[column_index - 1];
                let insertion = previous_costs[column_index];
                let matches = previous_costs[column_index - 1];
                current_costs[column_index] = cost + deletion.min(insertion).min(matches);
            }
            std::mem::swap(&mut previous_costs, &mut current_costs);
        }
        Ok(previous_costs[state_n - 1])
    }
}

pub fn absolute_difference(a: f64, b: f64) -> f64 {
    (a - b).abs()
}

/// DTW distance between two amplitude sequences using the absolute difference as local cost.
/// Empty or non-finite input is rejected.
pub fn dtw(first_sequence: &[f64], second_sequence: &[f64]) -> Result<f64> {
    super::validate_pair(first_sequence, second_sequence)?;
    Dtw::new(absolute_difference).compute_distance(first_sequence, second_sequence)
}

#[test]
fn it_computes_hand_checked_alignment() {
    // rows: [0,inf,inf,inf] [0,1,2,2] [1,0,0,1] [2,0,0,1]
    let distance = dtw(&[0., 0., 1., 1.], &[0., 1., 1., 0.]).unwrap();
    assert_eq!(distance, 1.);
}

#[test]
fn it_gives_zero_distance_for_identical_sequences() {
    let series = [0., 0.25, 1., 0.5, 0.75];
    assert_eq!(dtw(&series, &series).unwrap(), 0.);
    assert_eq!(dtw(&[0.3], &[0.3]).unwrap(), 0.);
}

#[test]
fn it_depends_on_argument_order_for_the_first_row() {
    let short = [0., 1.];
    let long = [0., 0., 1.];
    assert_eq!(dtw(&short, &long).unwrap(), 1.);
    assert_eq!(dtw(&long, &short).unwrap(), 0.);
}

#[test]
fn it_ignores_argument_order_for_identical_content() {
    let a = vec![0., 0.5, 1., 0.2];
    let b = a.clone();
    assert_eq!(dtw(&a, &b).unwrap(), dtw(&b, &a).unwrap());
}

#[test]
fn it_accumulates_the_column_for_a_single_sample_second_sequence() {
    let distance = dtw(&[0., 0.5, 1.], &[0.]).unwrap();
    assert_eq!(distance, 1.5);
}

#[test]
fn it_rejects_insufficient_samples() {
    assert!(matches!(
        dtw(&[], &[0.5]),
        Err(LetterMatchError::InsufficientSamples { len: 0, .. })
    ));
    assert!(matches!(
        dtw(&[0.5], &[]),
        Err(LetterMatchError::InsufficientSamples { len: 0, .. })
    ));
    assert!(matches!(
        dtw(&[0.5], &[0.5, 1.]),
        Err(LetterMatchError::InsufficientSamples { len: 1, required: 2 })
    ));
}

#[test]
fn it_supports_custom_local_cost() {
    fn squared_difference(a: f64, b: f64) -> f64 {
        (a - b) * (a - b)
    }
    let squared = Dtw::new(squared_difference);
    assert_eq!(squared.compute_distance(&[0., 2.], &[0., 1.]).unwrap(), 1.);
}

#[test]
fn it_rejects_non_finite_samples() {
    assert!(matches!(
        dtw(&[0., f64::NAN, 1.], &[0., 1.]),
        Err(LetterMatchError::NonFiniteSample { index: 1 })
    ));
    assert!(matches!(
        dtw(&[0., 1.], &[f64::NEG_INFINITY]),
        Err(LetterMatchError::NonFiniteSample { index: 0 })
    ));
}
