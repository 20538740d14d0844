use std::{collections::HashMap, path::PathBuf};

use lettermatch::{
    Alphabet, AudioConfig, LetterMatchError, ReferenceLibrary, Scorer, WavLoader,
    SCORER_INTERNAL_SAMPLE_RATE,
};

const SOURCE_SAMPLE_RATE: u32 = 16000;

fn init_logger() {
    simple_logger::SimpleLogger::new().init().ok();
}

fn letter_wav(index: usize) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SOURCE_SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let frequency = 150. + 40. * index as f64;
    let length = SOURCE_SAMPLE_RATE as usize / 4 + 200 * index;
    let mut buffer = std::io::Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut buffer, spec).unwrap();
        for i in 0..length {
            let t = i as f64 / SOURCE_SAMPLE_RATE as f64;
            let value = (t * frequency * 2. * std::f64::consts::PI).sin() * 12000.;
            writer.write_sample(value as i16).unwrap();
        }
        writer.finalize().unwrap();
    }
    buffer.into_inner()
}

fn write_alphabet_dir(name: &str, alphabet: &Alphabet) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lettermatch-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    for (index, label) in alphabet.labels().iter().enumerate() {
        std::fs::write(dir.join(format!("{}.wav", label)), letter_wav(index)).unwrap();
    }
    dir
}

#[test]
fn it_loads_a_reference_library_from_a_directory() {
    init_logger();
    let alphabet = Alphabet::latin();
    let dir = write_alphabet_dir("dir", &alphabet);
    let loader = WavLoader::default();
    let library = ReferenceLibrary::load_from_dir(&dir, &alphabet, &loader).unwrap();
    assert_eq!(library.len(), 26);
    let a = library.get("a").unwrap();
    assert_eq!(a.len(), SCORER_INTERNAL_SAMPLE_RATE / 4, "resampled to 4000 Hz");
    let query = loader.load_file(dir.join("k.wav")).unwrap();
    let result = Scorer::default().score(&query, &library).unwrap().ranked();
    assert_eq!(result.dtw[0].label, "k");
    assert_eq!(result.dtw[0].distance, 0.);
    assert_eq!(result.euclidean[0].label, "k");
    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn it_loads_a_reference_library_from_buffers() {
    let alphabet = Alphabet::new(["x", "y", "z"]).unwrap();
    let buffers = alphabet
        .labels()
        .iter()
        .enumerate()
        .map(|(index, label)| (label.clone(), letter_wav(index)))
        .collect::<HashMap<_, _>>();
    let loader = WavLoader::new(AudioConfig {
        target_sample_rate: 8000,
        ..AudioConfig::default()
    });
    let library = ReferenceLibrary::load_from_buffers(&buffers, &alphabet, &loader).unwrap();
    assert_eq!(library.labels().collect::<Vec<_>>(), vec!["x", "y", "z"]);
    assert_eq!(library.get("x").unwrap().len(), 2000);
}

#[test]
fn it_reports_the_label_of_a_missing_file() {
    let alphabet = Alphabet::latin();
    let dir = write_alphabet_dir("missing", &alphabet);
    std::fs::remove_file(dir.join("m.wav")).unwrap();
    let result = ReferenceLibrary::load_from_dir(&dir, &alphabet, &WavLoader::default());
    assert!(matches!(
        result,
        Err(LetterMatchError::MissingReference { label }) if label == "m"
    ));
    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn it_reports_the_label_of_a_corrupt_file() {
    let alphabet = Alphabet::new(["a", "b"]).unwrap();
    let mut buffers = HashMap::new();
    buffers.insert("a".to_string(), letter_wav(0));
    buffers.insert("b".to_string(), b"RIFF....".to_vec());
    let result = ReferenceLibrary::load_from_buffers(&buffers, &alphabet, &WavLoader::default());
    assert!(matches!(
        result,
        Err(LetterMatchError::Reference { label, .. }) if label == "b"
    ));
}

fn wav_from_samples(samples: &[i16]) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SOURCE_SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut buffer = std::io::Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut buffer, spec).unwrap();
        for sample in samples {
            writer.write_sample(*sample).unwrap();
        }
        writer.finalize().unwrap();
    }
    buffer.into_inner()
}

#[test]
fn it_keeps_resampled_recordings_aligned_in_time() {
    let mut samples = vec![0i16; 12000];
    for sample in samples.iter_mut().take(6010).skip(5990) {
        *sample = 16384;
    }
    let sequence = WavLoader::default()
        .load_buffer(&wav_from_samples(&samples))
        .unwrap();
    assert_eq!(sequence.len(), 3000);
    let peak_index = sequence
        .as_slice()
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(index, _)| index)
        .unwrap();
    assert!(
        (1497..=1503).contains(&peak_index),
        "pulse centered at input 6000 lands at output {}",
        peak_index
    );
}

#[test]
fn it_keeps_the_level_of_short_recordings() {
    let sequence = WavLoader::default()
        .load_buffer(&wav_from_samples(&[16384; 480]))
        .unwrap();
    assert_eq!(sequence.len(), 120);
    let middle = &sequence.as_slice()[20..100];
    assert!(middle.iter().all(|v| (v - 0.5).abs() < 0.05));
}
