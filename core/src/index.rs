use crate::collection::{self, RawDocument};
use crate::error::Result;
use crate::model::DocumentModelBuilder;
use crate::persist::{self, IndexPaths};
use crate::stemmer::{Stem, StemCache};
use crate::tokenizer::tokenize;
use crate::weighting::{calculate_idf, calculate_tf};
use std::collections::BTreeMap;

/// Stemmed term → `ln(N / df)`.
pub type IdfTable = BTreeMap<String, f64>;
/// Stemmed term → max-normalized term frequency within one document.
pub type TfRow = BTreeMap<String, f64>;
/// Document id → its TF row.
pub type TfTable = BTreeMap<String, TfRow>;

/// IDF and TF tables of one collection. Immutable once built or loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Index {
    idf: IdfTable,
    tf: TfTable,
}

impl Index {
    pub fn new(idf: IdfTable, tf: TfTable) -> Self {
        Self { idf, tf }
    }

    /// Model, weight and index already-parsed documents. Nothing touches disk.
    pub fn from_documents(docs: &[RawDocument], stemmer: &dyn Stem) -> Result<Self> {
        let mut builder = DocumentModelBuilder::new(StemCache::new(stemmer));
        let mut tf = TfTable::new();
        let mut empty = 0usize;
        for doc in docs {
            let counts = builder.add_document(&tokenize(&doc.fragments));
            if counts.is_empty() {
                empty += 1;
            }
            tf.insert(doc.id.clone(), calculate_tf(&counts));
        }
        if empty > 0 {
            tracing::warn!(empty, "documents without indexable terms");
        }
        let num_docs = builder.num_docs();
        tracing::debug!(num_docs, distinct_tokens = builder.distinct_tokens(), "modelled documents");
        let vocabulary = builder.finish();
        let idf = calculate_idf(&vocabulary, num_docs)?;
        Ok(Self { idf, tf })
    }

    /// Parse `<collection>.xml`, build the index and persist `.idf` and `.tf` next to it.
    pub fn build(paths: &IndexPaths, stemmer: &dyn Stem) -> Result<Self> {
        let docs = collection::parse_file(&paths.xml())?;
        tracing::info!(num_docs = docs.len(), path = %paths.xml().display(), "parsed collection");
        let index = Self::from_documents(&docs, stemmer)?;
        index.save(paths)?;
        tracing::info!(num_terms = index.vocabulary_size(), "index created");
        Ok(index)
    }

    /// Read a previously persisted index without recomputing anything.
    pub fn load(paths: &IndexPaths) -> Result<Self> {
        let idf = persist::load_idf(paths)?;
        let tf = persist::load_tf(paths)?;
        tracing::info!(num_docs = tf.len(), num_terms = idf.len(), "index loaded");
        Ok(Self { idf, tf })
    }

    pub fn save(&self, paths: &IndexPaths) -> Result<()> {
        persist::save_idf(paths, &self.idf)?;
        persist::save_tf(paths, &self.tf)?;
        Ok(())
    }

    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }

    pub fn tf(&self) -> &TfTable {
        &self.tf
    }

    pub fn num_docs(&self) -> usize {
        self.tf.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stemmer::EnglishStemmer;

    fn doc(id: &str, text: &str) -> RawDocument {
        RawDocument { id: id.into(), fragments: vec![text.into()] }
    }

    #[test]
    fn every_nonempty_row_has_a_unit_term() {
        let docs = vec![doc("a", "cats and dogs and"), doc("b", "Cats, cats, CATS!"), doc("c", "--")];
        let index = Index::from_documents(&docs, &EnglishStemmer::new()).unwrap();
        for (id, row) in index.tf() {
            if id == "c" {
                assert!(row.is_empty());
                continue;
            }
            let max = row.values().cloned().fold(f64::MIN, f64::max);
            assert_eq!(max, 1.0, "doc {id}");
        }
        assert_eq!(index.num_docs(), 3);
    }

    #[test]
    fn idf_is_non_negative_and_zero_when_term_is_everywhere() {
        let docs = vec![doc("a", "cats and dogs"), doc("b", "cats and birds")];
        let index = Index::from_documents(&docs, &EnglishStemmer::new()).unwrap();
        assert!(index.idf().values().all(|v| *v >= 0.0));
        assert_eq!(index.idf()["cat"], 0.0);
        assert!(index.idf()["dog"] > 0.0);
    }

    #[test]
    fn empty_collection_is_a_domain_error() {
        let err = Index::from_documents(&[], &EnglishStemmer::new()).unwrap_err();
        assert!(matches!(err, crate::SearchError::Domain(_)));
    }
}
