use crate::error::{Result, SearchError};
use crate::index::{DocId, InvertedIndex};
use crate::intersect::intersect;
use serde::Serialize;

/// One presentable result row, 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit<'a> {
    pub rank: usize,
    pub title: &'a str,
    pub id: &'a DocId,
}

/// Conjunctive search: documents containing every whitespace-separated term of `query`.
///
/// Query terms are matched as given. They are not lowercased or punctuation-stripped,
/// unlike indexed text, so `"ball,"` will not match a document containing `ball,`.
/// Results follow the posting order of the first term.
pub fn search(index: &InvertedIndex, query: &str) -> Result<Vec<DocId>> {
    let mut terms = query.split_whitespace();
    let first = terms.next().ok_or(SearchError::InvalidQuery)?;

    let mut results = intersect(index.postings(first), index.postings(first));
    for term in terms {
        if results.is_empty() {
            break;
        }
        results = intersect(&results, index.postings(term));
    }
    tracing::debug!(query, hits = results.len(), "search");
    Ok(results)
}
