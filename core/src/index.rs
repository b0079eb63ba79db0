use crate::error::{Result, SearchError};
use crate::query::{self, Hit};
use crate::tokenizer::{strip_punctuation, tokenize_line};
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::io::Read;

/// Stable document identifier, conventionally the source path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for DocId {
    fn from(s: &str) -> Self { Self(s.to_string()) }
}

impl From<String> for DocId {
    fn from(s: String) -> Self { Self(s) }
}

impl Borrow<str> for DocId {
    fn borrow(&self) -> &str { &self.0 }
}

pub type TitleMap = HashMap<DocId, String>;

/// Term -> posting list. Posting lists hold each document once, in the order documents were added.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<DocId>>,
}

impl InvertedIndex {
    /// Posting list for `term`; empty on a miss.
    pub fn postings(&self, term: &str) -> &[DocId] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_term(&self, term: &str) -> bool { self.postings.contains_key(term) }
    pub fn num_terms(&self) -> usize { self.postings.len() }
    pub fn is_empty(&self) -> bool { self.postings.is_empty() }

    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.postings.keys().map(String::as_str)
    }

    /// Term-ordered view, used for dumping.
    pub fn sorted(&self) -> BTreeMap<&str, &[DocId]> {
        self.postings.iter().map(|(t, ids)| (t.as_str(), ids.as_slice())).collect()
    }

    fn insert(&mut self, term: String, id: &DocId) {
        let list = self.postings.entry(term).or_default();
        if !list.contains(id) {
            list.push(id.clone());
        }
    }

    /// Drop `id` from every posting list; terms left without documents are removed.
    fn remove_doc(&mut self, id: &DocId) -> bool {
        let mut removed = false;
        self.postings.retain(|_, list| {
            let before = list.len();
            list.retain(|d| d != id);
            removed |= list.len() != before;
            !list.is_empty()
        });
        removed
    }
}

fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(i) => {
                lines.push(&rest[..i]);
                let end = if rest[i..].starts_with("\r\n") { i + 2 } else { i + 1 };
                rest = &rest[end..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

/// Owns the inverted index and the title map. All mutation goes through here.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexStore {
    index: InvertedIndex,
    titles: TitleMap,
}

impl IndexStore {
    pub fn new() -> Self { Self::default() }

    /// Fold `add_document` over `documents` in order, starting from an empty store.
    pub fn build_index<I, L>(documents: I) -> Self
    where
        I: IntoIterator<Item = (DocId, L)>,
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        let mut store = Self::new();
        store.add_documents(documents);
        tracing::debug!(num_docs = store.num_docs(), num_terms = store.num_terms(), "index built");
        store
    }

    /// Add a batch of documents in order. An empty batch changes nothing.
    pub fn add_documents<I, L>(&mut self, documents: I)
    where
        I: IntoIterator<Item = (DocId, L)>,
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        for (id, lines) in documents {
            self.add_document(id, lines);
        }
    }

    /// Index one document. The first line is the title and is indexed like any body line.
    ///
    /// Re-adding an id is additive: new terms gain the id, stale postings are kept.
    /// Use [`IndexStore::replace_document`] for a true refresh.
    pub fn add_document<L>(&mut self, id: DocId, lines: L)
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        let title = lines
            .next()
            .map(|first| strip_punctuation(first.as_ref().trim()).to_string())
            .unwrap_or_default();

        let mut body_lines = 0usize;
        for term in tokenize_line(&title) {
            self.index.insert(term, &id);
        }
        for line in lines {
            body_lines += 1;
            for term in tokenize_line(line.as_ref()) {
                self.index.insert(term, &id);
            }
        }
        tracing::debug!(doc = %id, title = %title, body_lines, "indexed document");
        self.titles.insert(id, title);
    }

    /// Read `reader` to completion, then index its lines under `id`.
    /// `\r\n`, `\n` and a bare `\r` all end a line. Nothing is indexed if reading fails.
    pub fn add_reader<R: Read>(&mut self, id: DocId, mut reader: R) -> Result<()> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| SearchError::Read { id: id.to_string(), source })?;
        self.add_document(id, split_lines(&text));
        Ok(())
    }

    /// Remove every trace of `id`. Returns whether anything was removed.
    pub fn remove_document(&mut self, id: &DocId) -> bool {
        let had_postings = self.index.remove_doc(id);
        let had_title = self.titles.remove(id).is_some();
        had_postings || had_title
    }

    /// Delete-then-reinsert, so postings for terms no longer present are dropped.
    pub fn replace_document<L>(&mut self, id: DocId, lines: L)
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        self.remove_document(&id);
        self.add_document(id, lines);
    }

    pub fn search(&self, query: &str) -> Result<Vec<DocId>> {
        query::search(&self.index, query)
    }

    /// Pair search results with their titles for display.
    pub fn hits<'a>(&'a self, results: &'a [DocId]) -> Vec<Hit<'a>> {
        results
            .iter()
            .enumerate()
            .map(|(i, id)| Hit { rank: i + 1, title: self.title(id).unwrap_or_default(), id })
            .collect()
    }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn title(&self, id: &DocId) -> Option<&str> {
        self.titles.get(id).map(String::as_str)
    }

    pub fn postings(&self, term: &str) -> &[DocId] { self.index.postings(term) }
    pub fn num_docs(&self) -> usize { self.titles.len() }
    pub fn num_terms(&self) -> usize { self.index.num_terms() }
    pub fn is_empty(&self) -> bool { self.titles.is_empty() && self.index.is_empty() }

    pub fn sorted_titles(&self) -> BTreeMap<&DocId, &str> {
        self.titles.iter().map(|(id, t)| (id, t.as_str())).collect()
    }
}
