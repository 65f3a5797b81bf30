use crate::vector::Vector;
use serde::Serialize;
use std::cmp::Ordering;

pub const DEFAULT_TOP_K: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub doc_id: String,
    pub score: f64,
}

/// Score every document vector against `query` and return at most `top_k` hits with a
/// non-zero score, highest first. Equal scores are ordered by ascending document id.
pub fn rank<'a, I>(query: &Vector, documents: I, top_k: usize) -> Vec<SearchHit>
where
    I: IntoIterator<Item = &'a Vector>,
{
    let mut hits: Vec<SearchHit> = documents
        .into_iter()
        .filter_map(|doc| {
            let score = query.similarity(doc);
            if score == 0.0 {
                return None;
            }
            let doc_id = doc.document_id()?.to_string();
            Some(SearchHit { doc_id, score })
        })
        .collect();
    hits.sort_by(|a, b| match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.doc_id.cmp(&b.doc_id),
        ord => ord,
    });
    hits.truncate(top_k);
    hits
}
