use std::{collections::HashMap, path::Path};

use log::debug;

use crate::{
    alphabet::Alphabet,
    audio::WavLoader,
    constants::REFERENCE_FILE_EXTENSION,
    error::{LetterMatchError, Result},
    signal::SampleSequence,
};

/// Reference recordings keyed by label, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceLibrary {
    references: Vec<(String, SampleSequence)>,
}
impl ReferenceLibrary {
    pub fn new() -> Self {
        ReferenceLibrary {
            references: Vec::new(),
        }
    }
    /// Adds a reference, replacing any previous recording for the same label.
    pub fn insert<S: Into<String>>(&mut self, label: S, samples: SampleSequence) {
        let label = label.into();
        match self.references.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = samples,
            None => self.references.push((label, samples)),
        }
    }
    pub fn get(&self, label: &str) -> Option<&SampleSequence> {
        self.references
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, samples)| samples)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SampleSequence)> {
        self.references
            .iter()
            .map(|(label, samples)| (label.as_str(), samples))
    }
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.references.iter().map(|(label, _)| label.as_str())
    }
    pub fn len(&self) -> usize {
        self.references.len()
    }
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
    /// Loads `<dir>/<label>.wav` for every label of the alphabet.
    pub fn load_from_dir<P: AsRef<Path>>(
        dir: P,
        alphabet: &Alphabet,
        loader: &WavLoader,
    ) -> Result<ReferenceLibrary> {
        let dir = dir.as_ref();
        debug!(
            "loading {} references from \"{}\"",
            alphabet.len(),
            dir.display()
        );
        let mut library = ReferenceLibrary::new();
        for label in alphabet.labels() {
            let path = dir.join(format!("{}.{}", label, REFERENCE_FILE_EXTENSION));
            if !path.is_file() {
                return Err(LetterMatchError::MissingReference {
                    label: label.clone(),
                });
            }
            let samples = loader
                .load_file(&path)
                .map_err(|err| err.for_reference(label))?;
            library.insert(label.clone(), samples);
        }
        Ok(library)
    }
    /// Loads one wav buffer per alphabet label.
    pub fn load_from_buffers(
        buffers: &HashMap<String, Vec<u8>>,
        alphabet: &Alphabet,
        loader: &WavLoader,
    ) -> Result<ReferenceLibrary> {
        let mut library = ReferenceLibrary::new();
        for label in alphabet.labels() {
            let buffer = buffers
                .get(label)
                .ok_or_else(|| LetterMatchError::MissingReference {
                    label: label.clone(),
                })?;
            let samples = loader
                .load_buffer(buffer)
                .map_err(|err| err.for_reference(label))?;
            library.insert(label.clone(), samples);
        }
        debug!("loaded {} references from buffers", library.len());
        Ok(library)
    }
}

#[test]
fn it_keeps_insertion_order_and_replaces_labels() {
    let mut library = ReferenceLibrary::new();
    library.insert("b", SampleSequence::new(vec![0., 1.]).unwrap());
    library.insert("a", SampleSequence::new(vec![1., 0.]).unwrap());
    library.insert("b", SampleSequence::new(vec![0.5, 1.]).unwrap());
    assert_eq!(library.len(), 2);
    assert_eq!(library.labels().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(library.get("b").unwrap().as_slice(), &[0.5, 1.]);
    assert!(library.get("c").is_none());
}

#[test]
fn it_reports_missing_reference_buffer() {
    let alphabet = Alphabet::new(["a", "b"]).unwrap();
    let buffers = HashMap::new();
    assert!(matches!(
        ReferenceLibrary::load_from_buffers(&buffers, &alphabet, &WavLoader::default()),
        Err(LetterMatchError::MissingReference { label }) if label == "a"
    ));
}

#[test]
fn it_reports_missing_reference_file() {
    let alphabet = Alphabet::latin();
    assert!(matches!(
        ReferenceLibrary::load_from_dir("/nonexistent", &alphabet, &WavLoader::default()),
        Err(LetterMatchError::MissingReference { label }) if label == "a"
    ));
}
