//! Book store: `<title> <author> <isbn>`, one book per line

use crate::models::Book;

use super::{TextRecord, TextStore};

pub type BookStore = TextStore<Book>;

impl TextRecord for Book {
    fn encode(&self) -> String {
        format!("{} {} {}", self.title, self.author, self.isbn)
    }

    fn decode(fields: &[&str]) -> Result<Self, String> {
        match fields {
            [title, author, isbn] => Ok(Book {
                title: (*title).to_string(),
                author: (*author).to_string(),
                isbn: (*isbn).to_string(),
            }),
            _ => Err(format!("expected 3 fields, got {}", fields.len())),
        }
    }
}
