use crate::stemmer::StemCache;
use std::collections::{BTreeMap, HashMap};

/// Stemmed term → raw occurrence count within one document.
pub type TermCounts = HashMap<String, u32>;

/// Stemmed terms of a collection with their document frequencies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    doc_freq: BTreeMap<String, u32>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn doc_freq(&self, term: &str) -> Option<u32> {
        self.doc_freq.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.doc_freq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_freq.is_empty()
    }

    /// Terms in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.doc_freq.iter().map(|(t, df)| (t.as_str(), *df))
    }

    fn record_document(&mut self, counts: &TermCounts) {
        for term in counts.keys() {
            *self.doc_freq.entry(term.clone()).or_insert(0) += 1;
        }
    }
}

impl FromIterator<(String, u32)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self { doc_freq: iter.into_iter().collect() }
    }
}

/// Count raw tokens, then fold the counts of tokens sharing a stem into one stemmed count.
/// Each distinct raw token is stemmed once through `cache`.
pub fn term_counts<S: AsRef<str>>(tokens: &[S], cache: &mut StemCache<'_>) -> TermCounts {
    let mut raw: HashMap<&str, u32> = HashMap::new();
    for token in tokens {
        let token = token.as_ref();
        if token.is_empty() { continue; }
        *raw.entry(token).or_insert(0) += 1;
    }
    let mut stemmed = TermCounts::with_capacity(raw.len());
    for (token, count) in raw {
        *stemmed.entry(cache.stem(token).to_string()).or_insert(0) += count;
    }
    stemmed
}

/// Turns tokenized documents into stemmed term counts while accumulating document frequencies.
pub struct DocumentModelBuilder<'s> {
    cache: StemCache<'s>,
    vocabulary: Vocabulary,
    num_docs: usize,
}

impl<'s> DocumentModelBuilder<'s> {
    pub fn new(cache: StemCache<'s>) -> Self {
        Self { cache, vocabulary: Vocabulary::new(), num_docs: 0 }
    }

    /// Model one document. Every stemmed term present bumps its document frequency once.
    pub fn add_document<S: AsRef<str>>(&mut self, tokens: &[S]) -> TermCounts {
        let counts = term_counts(tokens, &mut self.cache);
        self.vocabulary.record_document(&counts);
        self.num_docs += 1;
        counts
    }

    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    pub fn distinct_tokens(&self) -> usize {
        self.cache.len()
    }

    pub fn finish(self) -> Vocabulary {
        self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stemmer::EnglishStemmer;

    #[test]
    fn sums_counts_of_tokens_sharing_a_stem() {
        let stemmer = EnglishStemmer::new();
        let mut cache = StemCache::new(&stemmer);
        let counts = term_counts(&["cat", "cats", "cats", "dog"], &mut cache);
        assert_eq!(counts["cat"], 3);
        assert_eq!(counts["dog"], 1);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn document_frequency_counts_documents_not_occurrences() {
        let stemmer = EnglishStemmer::new();
        let mut builder = DocumentModelBuilder::new(StemCache::new(&stemmer));
        builder.add_document(&["cats", "and", "cats", "cat"]);
        builder.add_document(&["cats", "and", "dogs"]);
        assert_eq!(builder.num_docs(), 2);
        let vocab = builder.finish();
        assert_eq!(vocab.doc_freq("cat"), Some(2));
        assert_eq!(vocab.doc_freq("and"), Some(2));
        assert_eq!(vocab.doc_freq("dog"), Some(1));
        assert_eq!(vocab.doc_freq("bird"), None);
    }

    #[test]
    fn empty_document_has_no_terms() {
        let stemmer = EnglishStemmer::new();
        let mut builder = DocumentModelBuilder::new(StemCache::new(&stemmer));
        let empty: [&str; 0] = [];
        assert!(builder.add_document(&empty).is_empty());
        assert_eq!(builder.num_docs(), 1);
        assert!(builder.finish().is_empty());
    }
}
