#[macro_use]
extern crate bencher;

use bencher::Bencher;
use lettermatch::{dtw, euclidean, Alphabet, ReferenceLibrary, SampleSequence, Scorer};

fn wave(frequency: f64, length: usize) -> Vec<f64> {
    (0..length)
        .map(|i| (i as f64 / 4000. * frequency * 2. * std::f64::consts::PI).sin())
        .collect()
}

fn dtw_one_second(bench: &mut Bencher) {
    let a = wave(220., 4000);
    let b = wave(240., 3600);
    bench.iter(|| dtw(&a, &b).unwrap());
}

fn euclidean_one_second(bench: &mut Bencher) {
    let a = wave(220., 4000);
    let b = wave(240., 3600);
    bench.iter(|| euclidean(&a, &b).unwrap());
}

fn score_alphabet(bench: &mut Bencher) {
    let mut library = ReferenceLibrary::new();
    for (index, label) in Alphabet::latin().labels().iter().enumerate() {
        let samples = SampleSequence::new(wave(120. + 30. * index as f64, 1200)).unwrap();
        library.insert(label.as_str(), samples);
    }
    let query = SampleSequence::new(wave(300., 1100)).unwrap();
    let scorer = Scorer::default();
    bench.iter(|| scorer.score(&query, &library).unwrap());
}

benchmark_group!(benches, dtw_one_second, euclidean_one_second, score_alphabet);
benchmark_main!(benches);
