//! # Book Store
//!
//! Flat-file JSON store for the books collection.
//!
//! The whole [`Document`] is held in memory and mirrored to a single JSON
//! file. Mutating methods only touch memory; callers decide when to call
//! [`BookStore::persist`], which rewrites the entire file.
//!
//! ## Invariants
//! - Book ids are unique within the document
//! - Insertion order is preserved across updates and removals
//! - A failed persist leaves the in-memory state as mutated

mod document;
mod errors;

pub use document::{Book, BookFields, Document};
pub use errors::{StoreError, StoreResult};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// In-memory mirror of the books document, bound to its backing file
#[derive(Debug)]
pub struct BookStore {
    path: PathBuf,
    document: Document,
}

impl BookStore {
    /// Load the document at `path`
    ///
    /// A missing, empty, or unparseable file yields an empty document. Any
    /// other read failure is returned as [`StoreError::Io`].
    pub fn load(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no document on disk, starting empty");
                return Ok(Self::empty(path));
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::empty(path));
        }

        let document = match serde_json::from_slice::<Document>(&bytes) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "document is not valid, starting empty"
                );
                Document::default()
            }
        };

        tracing::info!(
            path = %path.display(),
            books = document.books.len(),
            "document loaded"
        );

        Ok(Self { path, document })
    }

    /// Create a store with an empty document, without touching disk
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            document: Document::default(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All books in insertion order
    pub fn all(&self) -> &[Book] {
        &self.document.books
    }

    pub fn len(&self) -> usize {
        self.document.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.books.is_empty()
    }

    /// First book whose id matches
    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.document.books.iter().find(|book| book.id == id)
    }

    /// Add a book at the end of the collection (memory only)
    pub fn append(&mut self, book: Book) {
        self.document.books.push(book);
    }

    /// Replace the provided fields of the matching book (memory only)
    ///
    /// Returns the updated book, or `None` if no book has that id.
    pub fn update_fields(&mut self, id: &str, fields: BookFields) -> Option<&Book> {
        let book = self.document.books.iter_mut().find(|book| book.id == id)?;
        book.apply(fields);
        Some(book)
    }

    /// Remove the first matching book (memory only)
    pub fn remove_by_id(&mut self, id: &str) -> Option<Book> {
        let index = self.document.books.iter().position(|book| book.id == id)?;
        Some(self.document.books.remove(index))
    }

    /// Write the whole document to the backing file
    ///
    /// The document is written to a sibling temp file and renamed over the
    /// target, so the file always holds one complete document.
    pub async fn persist(&self) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(&self.document)?;

        let ext = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("json");
        let tmp = self.path.with_extension(format!("{ext}.tmp"));

        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        tracing::debug!(
            path = %self.path.display(),
            books = self.document.books.len(),
            "document persisted"
        );
        Ok(())
    }
}
