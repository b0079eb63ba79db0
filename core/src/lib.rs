pub mod corpus;
pub mod error;
pub mod index;
pub mod intersect;
pub mod query;
pub mod tokenizer;

pub use error::{Result, SearchError};
pub use index::{DocId, IndexStore, InvertedIndex, TitleMap};
pub use intersect::intersect;
pub use query::{search, Hit};
pub use tokenizer::{normalize, strip_punctuation, tokenize_line};
