mod parser;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use super::domain::Property;
use super::repository::{PropertyRepository, RepositoryError};

#[derive(Debug)]
pub enum ListingImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// `row` is the 1-based data row, not counting the header.
    InvalidRow { row: usize, reason: String },
}

impl std::fmt::Display for ListingImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingImportError::Io(err) => write!(f, "failed to read listing export: {}", err),
            ListingImportError::Csv(err) => write!(f, "invalid listing CSV data: {}", err),
            ListingImportError::InvalidRow { row, reason } => {
                write!(f, "listing row {}: {}", row, reason)
            }
        }
    }
}

impl std::error::Error for ListingImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingImportError::Io(err) => Some(err),
            ListingImportError::Csv(err) => Some(err),
            ListingImportError::InvalidRow { .. } => None,
        }
    }
}

impl From<std::io::Error> for ListingImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ListingImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads listing exports (one property per CSV row) into [`Property`] records.
pub struct ListingImporter;

impl ListingImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Property>, ListingImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Property>, ListingImportError> {
        let imported_at = Utc::now();
        let mut seen = HashSet::new();
        let mut properties = Vec::new();

        for (index, row) in parser::read_rows(reader)?.into_iter().enumerate() {
            let row_number = index + 1;
            let property = row
                .into_property(imported_at)
                .map_err(|reason| ListingImportError::InvalidRow {
                    row: row_number,
                    reason,
                })?;

            if !seen.insert(property.id.clone()) {
                return Err(ListingImportError::InvalidRow {
                    row: row_number,
                    reason: format!("duplicate property id '{}'", property.id),
                });
            }
            properties.push(property);
        }

        Ok(properties)
    }

    /// Insert every listing into `repository`, returning how many were stored.
    pub fn seed<R: PropertyRepository + ?Sized>(
        repository: &R,
        properties: Vec<Property>,
    ) -> Result<usize, RepositoryError> {
        let count = properties.len();
        for property in properties {
            repository.insert(property)?;
        }
        info!(count, "listings seeded");
        Ok(count)
    }
}
