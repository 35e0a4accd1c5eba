//! Flat-file JSON storage.
//!
//! Each collection lives in a single pretty-printed document:
//! `books.json` holding `{"books": [...]}` and `reviews.json` holding
//! `{"reviews": [...]}`. Loads parse the whole document; stores serialize
//! the whole collection and replace the file via write-to-temp-then-rename,
//! so readers never observe a half-written document.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CatalogStore;
use crate::error::Result;
use crate::model::{Book, Review};

/// Filesystem-backed [`CatalogStore`] over two JSON documents.
pub struct JsonFileStore {
    books_path: PathBuf,
    reviews_path: PathBuf,
}

#[derive(Deserialize)]
struct BooksDocument {
    books: Vec<Book>,
}

#[derive(Serialize)]
struct BooksDocumentRef<'a> {
    books: &'a [Book],
}

#[derive(Deserialize)]
struct ReviewsDocument {
    reviews: Vec<Review>,
}

#[derive(Serialize)]
struct ReviewsDocumentRef<'a> {
    reviews: &'a [Review],
}

impl JsonFileStore {
    /// Create a store over `books.json` and `reviews.json` in `data_dir`.
    ///
    /// The directory is created lazily on first write; loads against a
    /// missing directory or file fail, which callers surface as a storage
    /// failure.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            books_path: data_dir.join("books.json"),
            reviews_path: data_dir.join("reviews.json"),
        }
    }

    /// Path of the book document (useful for seeding and tests).
    pub fn books_path(&self) -> &Path {
        &self.books_path
    }

    /// Path of the review document (useful for seeding and tests).
    pub fn reviews_path(&self) -> &Path {
        &self.reviews_path
    }

    async fn write_document(path: &Path, json: String) -> Result<()> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        if !dir.exists() {
            tokio::fs::create_dir_all(dir).await?;
        }

        // Atomic replace: write a uniquely-named sibling, then rename over
        // the target.
        let tmp = dir.join(format!(".{}.tmp", Uuid::new_v4()));
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for JsonFileStore {
    async fn load_books(&self) -> Result<Vec<Book>> {
        let contents = tokio::fs::read_to_string(&self.books_path).await?;
        let document: BooksDocument = serde_json::from_str(&contents)?;
        Ok(document.books)
    }

    async fn store_books(&self, books: &[Book]) -> Result<()> {
        let json = serde_json::to_string_pretty(&BooksDocumentRef { books })?;
        Self::write_document(&self.books_path, json).await
    }

    async fn load_reviews(&self) -> Result<Vec<Review>> {
        let contents = tokio::fs::read_to_string(&self.reviews_path).await?;
        let document: ReviewsDocument = serde_json::from_str(&contents)?;
        Ok(document.reviews)
    }

    async fn store_reviews(&self, reviews: &[Review]) -> Result<()> {
        let json = serde_json::to_string_pretty(&ReviewsDocumentRef { reviews })?;
        Self::write_document(&self.reviews_path, json).await
    }
}
