use serde::{Deserialize, Serialize};

/// A single vendor row from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VendorRecord {
    pub name: String,
    pub category: String,
    pub location: String,
    pub services: String,
}

impl VendorRecord {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        location: impl Into<String>,
        services: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            location: location.into(),
            services: services.into(),
        }
    }

    /// The text indexed for this vendor: every descriptive field joined
    /// by single spaces.
    #[must_use]
    pub fn document(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.category, self.location, self.services
        )
    }

    /// One-line summary used in vendor lists and prompts.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("• {} ({}) - {}", self.name, self.category, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_concatenates_fields() {
        let vendor = VendorRecord::new("Sunrise Catering", "Catering", "Austin", "buffet");
        assert_eq!(vendor.document(), "Sunrise Catering Catering Austin buffet");
    }

    #[test]
    fn test_document_with_empty_fields() {
        let vendor = VendorRecord::new("Solo", "", "", "");
        assert_eq!(vendor.document(), "Solo   ");
    }

    #[test]
    fn test_summary_line() {
        let vendor = VendorRecord::new("Elegant Events", "Venue", "Austin", "hall rental");
        assert_eq!(vendor.summary_line(), "• Elegant Events (Venue) - Austin");
    }
}
