use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a vendor by its row position in the loaded catalog.
///
/// Positions are stable for the lifetime of the process because the
/// catalog is never reloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VendorId(usize);

impl VendorId {
    #[must_use]
    pub const fn new(row: usize) -> Self {
        Self(row)
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.0
    }
}

impl From<usize> for VendorId {
    fn from(row: usize) -> Self {
        Self(row)
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
