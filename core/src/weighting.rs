use crate::error::{Result, SearchError};
use crate::index::{IdfTable, TfRow};
use crate::model::{TermCounts, Vocabulary};

/// `idf(t) = ln(num_docs / df(t))` for every vocabulary term, ordered by term.
pub fn calculate_idf(vocabulary: &Vocabulary, num_docs: usize) -> Result<IdfTable> {
    if num_docs == 0 {
        return Err(SearchError::Domain("cannot compute idf over an empty collection".into()));
    }
    let n = num_docs as f64;
    vocabulary
        .iter()
        .map(|(term, df)| {
            if df == 0 {
                return Err(SearchError::Domain(format!("term {term:?} has document frequency 0")));
            }
            if df as usize > num_docs {
                return Err(SearchError::Domain(format!(
                    "term {term:?} has document frequency {df} above the document count {num_docs}"
                )));
            }
            Ok((term.to_string(), (n / df as f64).ln()))
        })
        .collect()
}

/// Max-normalized term frequency: `count / max_count`. An empty document yields an empty row.
pub fn calculate_tf(counts: &TermCounts) -> TfRow {
    let Some(max) = counts.values().copied().max() else {
        return TfRow::new();
    };
    let max = max as f64;
    counts.iter().map(|(term, &count)| (term.clone(), count as f64 / max)).collect()
}
