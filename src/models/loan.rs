//! Loan (borrow) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An active loan.
///
/// The ISBN references a catalog entry but is not checked against the
/// catalog; a loan can outlive its book. The (customer_name, isbn) pair
/// identifies a loan for returns, and duplicates across different due
/// dates are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub customer_name: String,
    pub isbn: String,
    pub due_date: DateTime<Utc>,
}
