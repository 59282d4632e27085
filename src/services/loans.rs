//! Loan management service

use chrono::{DateTime, Duration, Utc};

use crate::{
    error::{AppError, AppResult},
    models::Loan,
    repository::LoanStore,
};

/// Registry of active loans backed by a flat-file store.
///
/// Returned loans are removed outright; no history is kept.
#[derive(Debug)]
pub struct LoansService {
    store: LoanStore,
    loans: Vec<Loan>,
}

impl LoansService {
    /// Load the registry from its store.
    pub fn open(mut store: LoanStore) -> AppResult<Self> {
        let loans = store.load()?;
        tracing::info!(
            "Loaded {} active loans from {}",
            loans.len(),
            store.path().display()
        );
        Ok(Self { store, loans })
    }

    /// Record a loan due `days_to_due` days from now and return the due
    /// date.
    ///
    /// The ISBN is not checked against the catalog and nothing prevents
    /// lending the same book twice; `days_to_due` may be zero or negative.
    pub fn lend(&mut self, customer_name: String, isbn: String, days_to_due: i64) -> DateTime<Utc> {
        let due_date = Utc::now() + Duration::days(days_to_due);
        tracing::debug!("Book lent: {} to {}, due {}", isbn, customer_name, due_date);
        self.loans.push(Loan {
            customer_name,
            isbn,
            due_date,
        });
        due_date
    }

    /// Remove the first loan matching the exact (customer, isbn) pair.
    pub fn return_loan(&mut self, customer_name: &str, isbn: &str) -> AppResult<()> {
        let position = self
            .loans
            .iter()
            .position(|loan| loan.customer_name == customer_name && loan.isbn == isbn)
            .ok_or_else(|| {
                AppError::NotFound(format!("Book with ISBN {} not found in the loans", isbn))
            })?;
        self.loans.remove(position);
        tracing::debug!("Book returned: {} by {}", isbn, customer_name);
        Ok(())
    }

    /// All loans held by exactly this customer, in registry order.
    /// The match is case-sensitive on the full name.
    pub fn search_by_customer(&self, customer_name: &str) -> Vec<&Loan> {
        self.loans
            .iter()
            .filter(|loan| loan.customer_name == customer_name)
            .collect()
    }

    /// Every active loan, in registry order.
    pub fn list(&self) -> &[Loan] {
        &self.loans
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }

    /// Write the registry back to its store and release the handle.
    pub fn close(mut self) -> AppResult<()> {
        self.store.save(&self.loans)?;
        tracing::info!(
            "Saved {} active loans to {}",
            self.loans.len(),
            self.store.path().display()
        );
        Ok(())
    }
}
