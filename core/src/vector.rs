//! Sparse TF-IDF vectors and cosine similarity.

use crate::error::{Result, SearchError};
use crate::index::{IdfTable, TfRow};
use crate::model::term_counts;
use crate::stemmer::{Stem, StemCache};
use crate::tokenizer::tokenize;
use crate::weighting::calculate_tf;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorSource {
    Document(String),
    Query,
}

/// Term → tf·idf weight, with the Euclidean norm computed once at construction.
#[derive(Debug, Clone)]
pub struct Vector {
    source: VectorSource,
    weights: BTreeMap<String, f64>,
    norm: f64,
}

impl Vector {
    /// Weight a stored TF row. Every term of the row must be in `idf`.
    pub fn from_document(id: &str, tf: &TfRow, idf: &IdfTable) -> Result<Self> {
        let weights = tf
            .iter()
            .map(|(term, freq)| match idf.get(term) {
                Some(weight) => Ok((term.clone(), freq * weight)),
                None => Err(SearchError::Argument(format!(
                    "term {term:?} of document {id:?} is missing from the idf table"
                ))),
            })
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Self::with_weights(VectorSource::Document(id.to_string()), weights))
    }

    /// Treat the query terms as a one-document corpus: tokenize, stem, max-normalize,
    /// then weight by the collection idf. Terms unknown to `idf` are ignored.
    pub fn from_query_terms<S: AsRef<str>>(terms: &[S], idf: &IdfTable, stemmer: &dyn Stem) -> Self {
        let mut cache = StemCache::new(stemmer);
        let counts = term_counts(&tokenize(terms), &mut cache);
        let weights = calculate_tf(&counts)
            .into_iter()
            .filter_map(|(term, tf)| idf.get(&term).map(|w| (term, tf * w)))
            .collect();
        Self::with_weights(VectorSource::Query, weights)
    }

    fn with_weights(source: VectorSource, weights: BTreeMap<String, f64>) -> Self {
        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        Self { source, weights, norm }
    }

    pub fn source(&self) -> &VectorSource {
        &self.source
    }

    pub fn document_id(&self) -> Option<&str> {
        match &self.source {
            VectorSource::Document(id) => Some(id),
            VectorSource::Query => None,
        }
    }

    pub fn weights(&self) -> &BTreeMap<String, f64> {
        &self.weights
    }

    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Cosine similarity. Zero when either vector has norm 0.
    pub fn similarity(&self, other: &Vector) -> f64 {
        let denom = self.norm * other.norm;
        if denom == 0.0 {
            return 0.0;
        }
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (&self.weights, &other.weights)
        } else {
            (&other.weights, &self.weights)
        };
        let dot: f64 = small
            .iter()
            .filter_map(|(term, w)| large.get(term).map(|v| w * v))
            .sum();
        dot / denom
    }
}
