use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashMap;

/// A deterministic word → stem function.
pub trait Stem {
    fn stem(&self, word: &str) -> String;
}

/// Porter2 English stemmer.
pub struct EnglishStemmer {
    inner: Stemmer,
}

impl EnglishStemmer {
    pub fn new() -> Self {
        Self { inner: Stemmer::create(Algorithm::English) }
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stem for EnglishStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

/// Memoizes a [`Stem`] per distinct raw token. Lives for one collection build or one query.
pub struct StemCache<'s> {
    stemmer: &'s dyn Stem,
    stems: HashMap<String, String>,
}

impl<'s> StemCache<'s> {
    pub fn new(stemmer: &'s dyn Stem) -> Self {
        Self { stemmer, stems: HashMap::new() }
    }

    pub fn stem(&mut self, token: &str) -> &str {
        if !self.stems.contains_key(token) {
            let stemmed = self.stemmer.stem(token);
            self.stems.insert(token.to_string(), stemmed);
        }
        &self.stems[token]
    }

    /// Number of distinct raw tokens stemmed so far.
    pub fn len(&self) -> usize {
        self.stems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }
}
