use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    config::NormalizerConfig,
    distance::{dtw, euclidean},
    error::Result,
    library::ReferenceLibrary,
    score::{ScoreEntry, ScoreResult},
    signal::{NormalizedSequence, SampleSequence, SignalNormalizer},
};

/// Scores a query recording against a reference library. Holds no per-request state.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    normalizer: SignalNormalizer,
}
impl Scorer {
    pub fn new(config: &NormalizerConfig) -> Self {
        Scorer {
            normalizer: SignalNormalizer::new(config),
        }
    }
    /// Returns one entry per reference label for each metric, in library order.
    pub fn score(&self, query: &SampleSequence, references: &ReferenceLibrary) -> Result<ScoreResult> {
        let query = self.normalizer.normalize(query)?;
        debug!(
            "scoring query of {} samples against {} references",
            query.len(),
            references.len()
        );
        let references = references.iter().collect::<Vec<_>>();
        #[cfg(feature = "parallel")]
        let scores = references
            .par_iter()
            .map(|(label, samples)| self.score_reference(&query, label, samples))
            .collect::<Result<Vec<_>>>()?;
        #[cfg(not(feature = "parallel"))]
        let scores = references
            .iter()
            .map(|(label, samples)| self.score_reference(&query, label, samples))
            .collect::<Result<Vec<_>>>()?;
        let mut result = ScoreResult {
            euclidean: Vec::with_capacity(scores.len()),
            dtw: Vec::with_capacity(scores.len()),
        };
        for (euclidean_entry, dtw_entry) in scores {
            result.euclidean.push(euclidean_entry);
            result.dtw.push(dtw_entry);
        }
        Ok(result)
    }
    fn score_reference(
        &self,
        query: &NormalizedSequence,
        label: &str,
        samples: &SampleSequence,
    ) -> Result<(ScoreEntry, ScoreEntry)> {
        let reference = self
            .normalizer
            .normalize(samples)
            .map_err(|err| err.for_reference(label))?;
        let euclidean_distance = euclidean(query.as_slice(), reference.as_slice())
            .map_err(|err| err.for_reference(label))?;
        let dtw_distance =
            dtw(query.as_slice(), reference.as_slice()).map_err(|err| err.for_reference(label))?;
        Ok((
            ScoreEntry::new(label, euclidean_distance),
            ScoreEntry::new(label, dtw_distance),
        ))
    }
}

/// Scores `query` against `references` with the default normalizer configuration.
pub fn score(query: &SampleSequence, references: &ReferenceLibrary) -> Result<ScoreResult> {
    Scorer::default().score(query, references)
}

#[cfg(test)]
fn sequence(values: &[f64]) -> SampleSequence {
    SampleSequence::new(values.to_vec()).unwrap()
}

#[test]
fn it_scores_every_reference_in_library_order() {
    let mut library = ReferenceLibrary::new();
    library.insert("b", sequence(&[0., 1., 1., 0.]));
    library.insert("a", sequence(&[0., 0., 1., 1.]));
    let result = score(&sequence(&[0., 0., 1., 1.]), &library).unwrap();
    assert_eq!(result.dtw.len(), 2);
    assert_eq!(result.euclidean.len(), 2);
    assert_eq!(result.dtw[0], ScoreEntry::new("b", 1.));
    assert_eq!(result.dtw[1], ScoreEntry::new("a", 0.));
    assert_eq!(result.euclidean[1], ScoreEntry::new("a", 0.));
    assert!((result.euclidean[0].distance - 2f64.sqrt()).abs() < 1e-12);
}

#[test]
fn it_normalizes_before_measuring() {
    let mut library = ReferenceLibrary::new();
    library.insert("loud", sequence(&[-8., 8., 0.]));
    let result = score(&sequence(&[-1., 1., 0.]), &library).unwrap();
    assert_eq!(result.euclidean[0].distance, 0.);
    assert_eq!(result.dtw[0].distance, 0.);
}

#[test]
fn it_labels_reference_failures() {
    let mut library = ReferenceLibrary::new();
    library.insert("a", sequence(&[0., 1.]));
    library.insert("flat", sequence(&[0.5, 0.5]));
    let err = score(&sequence(&[0., 1.]), &library).unwrap_err();
    match err {
        crate::LetterMatchError::Reference { label, source } => {
            assert_eq!(label, "flat");
            assert!(matches!(
                *source,
                crate::LetterMatchError::DegenerateSignal { len: 2, .. }
            ));
        }
        other => panic!("unexpected error {}", other),
    }
}

#[test]
fn it_scores_constant_references_with_zero_policy() {
    let config = NormalizerConfig {
        degenerate_policy: crate::DegeneratePolicy::Zeros,
    };
    let mut library = ReferenceLibrary::new();
    library.insert("flat", sequence(&[0.5, 0.5]));
    let result = Scorer::new(&config)
        .score(&sequence(&[0., 1.]), &library)
        .unwrap();
    assert_eq!(result.euclidean[0].distance, 1.);
    assert_eq!(result.dtw[0].distance, 1.);
}

#[cfg(feature = "parallel")]
#[test]
fn it_keeps_library_order_when_scoring_in_parallel() {
    let mut library = ReferenceLibrary::new();
    for (index, label) in crate::Alphabet::latin().labels().iter().enumerate() {
        let samples = (0..200 + index * 3)
            .map(|i| (i as f64 * (0.05 + 0.01 * index as f64)).sin())
            .collect::<Vec<_>>();
        library.insert(label.as_str(), sequence(&samples));
    }
    let query_samples = (0..240).map(|i| (i as f64 * 0.12).sin()).collect::<Vec<_>>();
    let result = score(&sequence(&query_samples), &library).unwrap();
    let normalizer = SignalNormalizer::default();
    let query = normalizer.normalize(&sequence(&query_samples)).unwrap();
    assert_eq!(result.dtw.len(), library.len());
    for (position, (label, samples)) in library.iter().enumerate() {
        let reference = normalizer.normalize(samples).unwrap();
        let expected_dtw = dtw(query.as_slice(), reference.as_slice()).unwrap();
        let expected_euclidean = euclidean(query.as_slice(), reference.as_slice()).unwrap();
        assert_eq!(result.dtw[position], ScoreEntry::new(label, expected_dtw));
        assert_eq!(
            result.euclidean[position],
            ScoreEntry::new(label, expected_euclidean)
        );
    }
}
