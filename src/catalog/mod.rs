//! Book catalog: records, the in-memory store, load file parsing, and
//! weighted aggregations.

pub mod loader;
pub mod query;
pub mod store;
pub mod types;

pub use loader::HEADER;
pub use query::CatalogQuery;
pub use store::Catalog;
pub use types::{AddOutcome, Book, BookId, EditField, RemoveOutcome, Selection};
