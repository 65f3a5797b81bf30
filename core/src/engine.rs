use crate::error::{Result, SearchError};
use crate::index::Index;
use crate::persist::IndexPaths;
use crate::rank::{rank, SearchHit, DEFAULT_TOP_K};
use crate::stemmer::{EnglishStemmer, Stem};
use crate::vector::Vector;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

pub const PROMPT: &str = "Please enter query, terms separated by whitespace: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Parse the collection, build the index and write it to disk.
    Create,
    /// Load a previously written index.
    Read,
}

impl FromStr for Mode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "create" => Ok(Mode::Create),
            "read" => Ok(Mode::Read),
            other => Err(SearchError::Argument(format!("unknown mode {other:?}, expected \"create\" or \"read\""))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub data_dir: PathBuf,
    pub collection: String,
    pub top_k: usize,
}

impl EngineConfig {
    pub fn new(collection: &str) -> Self {
        Self { data_dir: PathBuf::from("."), collection: collection.to_string(), top_k: DEFAULT_TOP_K }
    }

    pub fn paths(&self) -> IndexPaths {
        IndexPaths::new(&self.data_dir, &self.collection)
    }
}

/// A search session: one index and its document vectors, kept for the session lifetime.
pub struct SearchEngine {
    index: Index,
    vectors: Vec<Vector>,
    stemmer: Box<dyn Stem>,
    top_k: usize,
}

impl SearchEngine {
    pub fn open(config: &EngineConfig, mode: Mode) -> Result<Self> {
        let paths = config.paths();
        let stemmer: Box<dyn Stem> = Box::new(EnglishStemmer::new());
        let index = match mode {
            Mode::Create => {
                tracing::info!(collection = %config.collection, "creating index");
                Index::build(&paths, stemmer.as_ref())?
            }
            Mode::Read => {
                tracing::info!(collection = %config.collection, "reading index");
                Index::load(&paths)?
            }
        };
        Self::with_index(index, stemmer, config.top_k)
    }

    pub fn with_index(index: Index, stemmer: Box<dyn Stem>, top_k: usize) -> Result<Self> {
        let vectors = index
            .tf()
            .iter()
            .map(|(id, row)| Vector::from_document(id, row, index.idf()))
            .collect::<Result<Vec<_>>>()?;
        tracing::info!(num_docs = vectors.len(), num_terms = index.vocabulary_size(), "search engine ready");
        Ok(Self { index, vectors, stemmer, top_k })
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn vectors(&self) -> &[Vector] {
        &self.vectors
    }

    /// Rank documents against the query terms; an empty result means nothing matched.
    pub fn execute_query<S: AsRef<str>>(&self, terms: &[S]) -> Vec<SearchHit> {
        let query = Vector::from_query_terms(terms, self.index.idf(), self.stemmer.as_ref());
        let hits = rank(&query, &self.vectors, self.top_k);
        let shown: Vec<&str> = terms.iter().map(|t| t.as_ref()).collect();
        tracing::debug!(
            terms = ?shown,
            query_terms = query.weights().len(),
            hits = hits.len(),
            "query executed"
        );
        hits
    }

    /// Prompt for queries on `output` and answer each line read from `input`,
    /// until an empty line or end of input.
    pub fn run_console<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let terms: Vec<&str> = line.split_whitespace().collect();
            if terms.is_empty() {
                break;
            }
            let hits = self.execute_query(&terms);
            if hits.is_empty() {
                writeln!(output, "No results found")?;
            }
            for hit in hits {
                writeln!(output, "{} {}", hit.doc_id, hit.score)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("create".parse::<Mode>().unwrap(), Mode::Create);
        assert_eq!("READ".parse::<Mode>().unwrap(), Mode::Read);
        assert!(matches!("update".parse::<Mode>(), Err(SearchError::Argument(_))));
    }

    #[test]
    fn config_resolves_collection_files() {
        let mut config = EngineConfig::new("nytsmall");
        config.data_dir = PathBuf::from("/data");
        let paths = config.paths();
        assert_eq!(paths.xml(), PathBuf::from("/data/nytsmall.xml"));
        assert_eq!(paths.idf(), PathBuf::from("/data/nytsmall.idf"));
        assert_eq!(paths.tf(), PathBuf::from("/data/nytsmall.tf"));
        assert_eq!(config.top_k, DEFAULT_TOP_K);
    }
}
