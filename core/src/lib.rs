//! TF-IDF indexing and cosine-similarity ranking over XML document collections.

pub mod collection;
pub mod engine;
pub mod error;
pub mod index;
pub mod model;
pub mod persist;
pub mod rank;
pub mod stemmer;
pub mod tokenizer;
pub mod vector;
pub mod weighting;

pub use engine::{EngineConfig, Mode, SearchEngine};
pub use error::{Result, SearchError};
pub use index::{IdfTable, Index, TfRow, TfTable};
pub use rank::{rank, SearchHit, DEFAULT_TOP_K};
pub use stemmer::{EnglishStemmer, Stem, StemCache};
pub use vector::{Vector, VectorSource};
