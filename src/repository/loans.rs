//! Loan store: `<customerName> <isbn> <dueDateEpochSeconds>`, one loan per line

use chrono::DateTime;

use crate::models::Loan;

use super::{TextRecord, TextStore};

pub type LoanStore = TextStore<Loan>;

impl TextRecord for Loan {
    fn encode(&self) -> String {
        // Sub-second precision is not persisted.
        format!(
            "{} {} {}",
            self.customer_name,
            self.isbn,
            self.due_date.timestamp()
        )
    }

    fn decode(fields: &[&str]) -> Result<Self, String> {
        match fields {
            [customer_name, isbn, due_date] => {
                let seconds: i64 = due_date
                    .parse()
                    .map_err(|_| format!("invalid due date {:?}", due_date))?;
                let due_date = DateTime::from_timestamp(seconds, 0)
                    .ok_or_else(|| format!("due date {} out of range", seconds))?;
                Ok(Loan {
                    customer_name: (*customer_name).to_string(),
                    isbn: (*isbn).to_string(),
                    due_date,
                })
            }
            _ => Err(format!("expected 3 fields, got {}", fields.len())),
        }
    }
}
