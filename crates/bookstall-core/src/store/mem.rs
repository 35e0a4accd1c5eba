//! In-memory storage backend.
//!
//! Primarily for tests, but a fully functional [`CatalogStore`]: a process
//! that does not need persistence across restarts can run on it unchanged.

use async_trait::async_trait;
use parking_lot::RwLock;

use super::CatalogStore;
use crate::error::{Result, StoreError};
use crate::model::{Book, Review};

/// Thread-safe in-memory [`CatalogStore`].
#[derive(Default)]
pub struct MemoryStore {
    books: RwLock<Vec<Book>>,
    reviews: RwLock<Vec<Review>>,
    fail_writes: RwLock<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given collections.
    pub fn seeded(books: Vec<Book>, reviews: Vec<Review>) -> Self {
        Self {
            books: RwLock::new(books),
            reviews: RwLock::new(reviews),
            fail_writes: RwLock::new(false),
        }
    }

    /// Make subsequent stores fail with an I/O error, for exercising
    /// storage-failure paths in tests.
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.write() = fail;
    }

    fn check_writable(&self) -> Result<()> {
        if *self.fail_writes.read() {
            return Err(StoreError::Io(std::io::Error::other(
                "simulated write failure",
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn load_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.read().clone())
    }

    async fn store_books(&self, books: &[Book]) -> Result<()> {
        self.check_writable()?;
        *self.books.write() = books.to_vec();
        Ok(())
    }

    async fn load_reviews(&self) -> Result<Vec<Review>> {
        Ok(self.reviews.read().clone())
    }

    async fn store_reviews(&self, reviews: &[Review]) -> Result<()> {
        self.check_writable()?;
        *self.reviews.write() = reviews.to_vec();
        Ok(())
    }
}
