//! Vendor catalog loading.
//!
//! The catalog is a CSV file with a header row naming at least the
//! `name`, `category`, `location`, and `services` columns. It is read once
//! at startup and never changes afterwards.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{CatalogError, CatalogResult};
use crate::model::{VendorId, VendorRecord};

const REQUIRED_COLUMNS: [&str; 4] = ["name", "category", "location", "services"];

/// The immutable, in-memory vendor catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    vendors: Vec<VendorRecord>,
}

impl Catalog {
    /// Load the catalog from a CSV file.
    ///
    /// # Errors
    /// Returns [`CatalogError::Unreadable`] when the file cannot be opened.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(file)?;
        log::info!(
            "Loaded {} vendors from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a catalog from any CSV source.
    ///
    /// Empty cells and short rows yield empty strings; a header without
    /// one of the required columns is an error.
    ///
    /// # Errors
    /// Fails on malformed CSV or a missing required column.
    pub fn from_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        let mut csv = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnMap::from_headers(csv.headers()?)?;

        let mut vendors = Vec::new();
        for row in csv.records() {
            vendors.push(columns.vendor(&row?));
        }

        Ok(Self { vendors })
    }

    #[must_use]
    pub fn from_records(vendors: Vec<VendorRecord>) -> Self {
        Self { vendors }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: VendorId) -> Option<&VendorRecord> {
        self.vendors.get(id.row())
    }

    pub fn iter(&self) -> impl Iterator<Item = (VendorId, &VendorRecord)> {
        self.vendors
            .iter()
            .enumerate()
            .map(|(row, vendor)| (VendorId::new(row), vendor))
    }

    /// Indexing text for every vendor, in catalog order.
    #[must_use]
    pub fn documents(&self) -> Vec<String> {
        self.vendors.iter().map(VendorRecord::document).collect()
    }
}

/// Positions of the required columns within the header row.
struct ColumnMap {
    name: usize,
    category: usize,
    location: usize,
    services: usize,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> CatalogResult<Self> {
        let position = |column: &'static str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column))
                .ok_or(CatalogError::MissingColumn(column))
        };

        let [name, category, location, services] = REQUIRED_COLUMNS;
        Ok(Self {
            name: position(name)?,
            category: position(category)?,
            location: position(location)?,
            services: position(services)?,
        })
    }

    fn vendor(&self, row: &StringRecord) -> VendorRecord {
        let field = |idx: usize| row.get(idx).unwrap_or_default().to_string();
        VendorRecord {
            name: field(self.name),
            category: field(self.category),
            location: field(self.location),
            services: field(self.services),
        }
    }
}
