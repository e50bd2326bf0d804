pub mod dataset_error;
pub mod loader;

use crate::domain::{Listing, Query};
use crate::ranking;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

pub use dataset_error::DatasetError;
pub use loader::read_listings;

/// The in-memory listings, loaded once and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    listings: Vec<Listing>,
}

impl Dataset {
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        Ok(Self::from_listings(read_listings(reader)?))
    }

    /// Load the dataset from a CSV file on disk.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), listings = dataset.len(), "dataset loaded");
        Ok(dataset)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// See [`ranking::rank`].
    pub fn top_listings(&self, query: &Query) -> Vec<&Listing> {
        ranking::rank(&self.listings, query)
    }
}
