mod dtw;
mod euclidean;
pub use dtw::{absolute_difference, dtw, Dtw};
pub use euclidean::euclidean;

use crate::error::{LetterMatchError, Result};

/// Both sequences must be non-empty and finite.
pub(crate) fn validate_pair(first_sequence: &[f64], second_sequence: &[f64]) -> Result<()> {
    if first_sequence.is_empty() || second_sequence.is_empty() {
        return Err(LetterMatchError::insufficient(0, 1));
    }
    if let Some(index) = first_sequence
        .iter()
        .chain(second_sequence)
        .position(|v| !v.is_finite())
    {
        let index = if index < first_sequence.len() {
            index
        } else {
            index - first_sequence.len()
        };
        return Err(LetterMatchError::NonFiniteSample { index });
    }
    Ok(())
}
