//! # Persisted Document
//!
//! The on-disk shape of the store: a single object with one `books` array.

use serde::{Deserialize, Serialize};

/// A single book record
///
/// `title` and `author` are optional so that records created without them
/// round-trip through the file unchanged instead of failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Book {
    /// Build a book from an assigned id and client-supplied fields
    pub fn new(id: impl Into<String>, fields: BookFields) -> Self {
        Self {
            id: id.into(),
            title: fields.title,
            author: fields.author,
        }
    }

    /// Overwrite the fields present in `fields`; the id never changes
    pub fn apply(&mut self, fields: BookFields) {
        if let Some(title) = fields.title {
            self.title = Some(title);
        }
        if let Some(author) = fields.author {
            self.author = Some(author);
        }
    }
}

/// Client-editable book fields
///
/// Any `id` in a request body is dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BookFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl BookFields {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
        }
    }
}

/// Whole persisted state, the unit of load and write
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub books: Vec<Book>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_file_layout() {
        let doc = Document {
            books: vec![Book::new("sSfE_as2", BookFields::new("The New Turing Age", "Uche Ndife"))],
        };

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!({
                "books": [
                    {"id": "sSfE_as2", "title": "The New Turing Age", "author": "Uche Ndife"}
                ]
            })
        );
    }

    #[test]
    fn test_missing_fields_are_omitted() {
        let book = Book::new("abcdefgh", BookFields::default());
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value, json!({"id": "abcdefgh"}));
    }

    #[test]
    fn test_fields_ignore_client_id() {
        let fields: BookFields =
            serde_json::from_value(json!({"id": "forged", "title": "T", "author": "A"})).unwrap();
        assert_eq!(fields, BookFields::new("T", "A"));
    }

    #[test]
    fn test_apply_keeps_id_and_absent_fields() {
        let mut book = Book::new("abcdefgh", BookFields::new("T1", "A1"));
        book.apply(BookFields {
            title: Some("T2".to_string()),
            author: None,
        });

        assert_eq!(book.id, "abcdefgh");
        assert_eq!(book.title.as_deref(), Some("T2"));
        assert_eq!(book.author.as_deref(), Some("A1"));
    }

    #[test]
    fn test_document_without_books_key() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert!(doc.books.is_empty());
    }
}
