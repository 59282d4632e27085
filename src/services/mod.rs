//! Business logic services

pub mod catalog;
pub mod loans;

use crate::{error::AppResult, repository::Repository};

pub use catalog::CatalogService;
pub use loans::LoansService;

/// Container for all services
#[derive(Debug)]
pub struct Services {
    pub catalog: CatalogService,
    pub loans: LoansService,
}

impl Services {
    /// Load all services from the opened repository.
    pub fn open(repository: Repository) -> AppResult<Self> {
        Ok(Self {
            catalog: CatalogService::open(repository.books)?,
            loans: LoansService::open(repository.loans)?,
        })
    }

    /// Write both collections back to their stores.
    ///
    /// A save failure propagates with no recovery; in-memory state is lost.
    pub fn shutdown(self) -> AppResult<()> {
        self.catalog.close()?;
        self.loans.close()
    }
}
