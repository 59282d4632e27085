//! Book (catalog entry) model

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// The ISBN is an opaque identifier: the catalog enforces its uniqueness
/// but never validates its format. Books are immutable once added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }
}
