use std::collections::HashSet;

use crate::{
    constants::LATIN_ALPHABET,
    error::{LetterMatchError, Result},
};

/// Fixed, ordered set of reference labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    labels: Vec<String>,
}
impl Alphabet {
    pub fn new<I, S>(labels: I) -> Result<Alphabet>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = labels.into_iter().map(Into::into).collect::<Vec<String>>();
        if labels.is_empty() {
            return Err(LetterMatchError::EmptyAlphabet);
        }
        let mut seen = HashSet::new();
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(LetterMatchError::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }
        Ok(Alphabet { labels })
    }
    /// The 26 lowercase latin letters.
    pub fn latin() -> Alphabet {
        Alphabet {
            labels: LATIN_ALPHABET.chars().map(String::from).collect(),
        }
    }
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
    pub fn len(&self) -> usize {
        self.labels.len()
    }
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::latin()
    }
}

#[test]
fn it_has_26_latin_letters() {
    let alphabet = Alphabet::latin();
    assert_eq!(alphabet.len(), 26);
    assert_eq!(alphabet.labels()[0], "a");
    assert_eq!(alphabet.labels()[25], "z");
    assert!(alphabet.contains("q"));
    assert!(!alphabet.contains("A"));
}

#[test]
fn it_rejects_invalid_alphabets() {
    assert!(matches!(
        Alphabet::new(Vec::<String>::new()),
        Err(LetterMatchError::EmptyAlphabet)
    ));
    assert!(matches!(
        Alphabet::new(["x", "y", "x"]),
        Err(LetterMatchError::DuplicateLabel { label }) if label == "x"
    ));
}
