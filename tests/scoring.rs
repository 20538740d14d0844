use lettermatch::{
    dtw, euclidean, normalize, score, Alphabet, DegeneratePolicy, LetterMatchConfig,
    LetterMatchError, ReferenceLibrary, SampleSequence, Scorer,
};

fn letter_wave(index: usize, length: usize) -> Vec<f64> {
    let frequency = 110. + 35. * index as f64;
    (0..length)
        .map(|i| {
            let t = i as f64 / 4000.;
            (t * frequency * 2. * std::f64::consts::PI).sin() * (1. - t)
        })
        .collect()
}

fn latin_library() -> ReferenceLibrary {
    let mut library = ReferenceLibrary::new();
    for (index, label) in Alphabet::latin().labels().iter().enumerate() {
        let samples = SampleSequence::new(letter_wave(index, 300 + 7 * index)).unwrap();
        library.insert(label.as_str(), samples);
    }
    library
}

#[test]
fn it_scores_every_letter_once_per_metric() {
    let library = latin_library();
    let query = SampleSequence::new(letter_wave(4, 320)).unwrap();
    let result = score(&query, &library).unwrap();
    assert_eq!(result.euclidean.len(), 26);
    assert_eq!(result.dtw.len(), 26);
    for entries in [&result.euclidean, &result.dtw] {
        let mut labels = entries
            .iter()
            .map(|entry| entry.label.clone())
            .collect::<Vec<_>>();
        assert_eq!(labels, Alphabet::latin().labels().to_vec(), "library order");
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 26, "each letter appears once");
        assert!(entries.iter().all(|entry| entry.distance >= 0.));
    }
}

#[test]
fn it_ranks_the_matching_letter_first() {
    let library = latin_library();
    let query = SampleSequence::new(letter_wave(7, 300 + 7 * 7)).unwrap();
    let result = score(&query, &library).unwrap().ranked();
    assert_eq!(result.dtw[0].label, "h");
    assert_eq!(result.dtw[0].distance, 0.);
    assert_eq!(result.euclidean[0].label, "h");
    assert_eq!(result.euclidean[0].distance, 0.);
    assert!(result.dtw[1].distance > 0.);
}

#[test]
fn it_matches_the_documented_scenarios() {
    assert_eq!(dtw(&[0., 0., 1., 1.], &[0., 1., 1., 0.]).unwrap(), 1.);
    let distance = euclidean(&[0.2, 0.4], &[0.2, 0.4, 0.6]).unwrap();
    assert!((distance - 0.6).abs() < 1e-12);
}

#[test]
fn it_keeps_the_first_row_asymmetry_of_dtw() {
    let a = [0., 1.];
    let b = [0., 0., 1.];
    assert_eq!(dtw(&a, &b).unwrap(), 1.);
    assert_eq!(dtw(&b, &a).unwrap(), 0.);
    assert_eq!(
        euclidean(&a, &b).unwrap(),
        euclidean(&b, &a).unwrap(),
        "euclidean stays symmetric"
    );
}

#[test]
fn it_normalizes_into_unit_range() {
    let samples = letter_wave(12, 500);
    let normalized = normalize(&samples, DegeneratePolicy::Fail).unwrap();
    let min = normalized.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = normalized.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(min, 0.);
    assert_eq!(max, 1.);
    assert_eq!(normalized.len(), samples.len());
}

#[test]
fn it_reports_degenerate_queries() {
    let library = latin_library();
    let query = SampleSequence::new(vec![0.3; 64]).unwrap();
    assert!(matches!(
        score(&query, &library),
        Err(LetterMatchError::DegenerateSignal { len: 64, .. })
    ));
    let mut config = LetterMatchConfig::default();
    config.normalizer.degenerate_policy = DegeneratePolicy::Zeros;
    let result = Scorer::new(&config.normalizer)
        .score(&query, &library)
        .unwrap();
    assert_eq!(result.dtw.len(), 26);
    assert!(result.dtw.iter().all(|entry| !entry.distance.is_nan()));
}

#[test]
fn it_rejects_single_sample_queries_for_dtw() {
    let library = latin_library();
    let mut config = LetterMatchConfig::default();
    config.normalizer.degenerate_policy = DegeneratePolicy::Zeros;
    let query = SampleSequence::new(vec![0.5]).unwrap();
    let err = Scorer::new(&config.normalizer)
        .score(&query, &library)
        .unwrap_err();
    match err {
        LetterMatchError::Reference { label, source } => {
            assert!(Alphabet::latin().contains(&label));
            assert!(matches!(
                *source,
                LetterMatchError::InsufficientSamples { len: 1, required: 2 }
            ));
        }
        other => panic!("unexpected error {}", other),
    }
}
