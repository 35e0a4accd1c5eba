//! Storage backends for the two collection documents.
//!
//! The trait is the load/store contract from the service layer's point of
//! view: whole-collection reads and whole-collection writes, nothing finer.
//! Backends decide the "how" (flat JSON files vs memory); swapping one in
//! never changes callers, which is also where a future backend with real
//! concurrency control would slot in.

mod fs;
mod mem;

pub use fs::JsonFileStore;
pub use mem::MemoryStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Book, Review};

/// Abstract interface over the book and review collections.
///
/// Every mutation is read-entire-collection, modify, write-entire-collection
/// on the caller's side; the store itself performs no locking and no
/// optimistic-concurrency check. Two concurrent writers race and the last
/// write wins. That is part of this system's contract, not something a
/// backend is expected to paper over.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Load the full book collection, in stored order.
    async fn load_books(&self) -> Result<Vec<Book>>;

    /// Replace the full book collection.
    async fn store_books(&self, books: &[Book]) -> Result<()>;

    /// Load the full review collection, in stored order.
    async fn load_reviews(&self) -> Result<Vec<Review>>;

    /// Replace the full review collection.
    async fn store_reviews(&self, reviews: &[Review]) -> Result<()>;
}
