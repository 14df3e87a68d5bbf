use crate::features::offices::models::{default_offices, OfficeLocation};

/// Immutable, in-memory directory of offices
#[derive(Debug, Clone)]
pub struct OfficeDirectory {
    offices: Vec<OfficeLocation>,
}

impl OfficeDirectory {
    pub fn new(offices: Vec<OfficeLocation>) -> Self {
        Self { offices }
    }

    /// List offices in declaration order.
    ///
    /// With a region, only offices whose region equals it case-insensitively are
    /// returned. An empty region is treated the same as no region.
    pub fn list(&self, region: Option<&str>) -> Vec<OfficeLocation> {
        match region {
            Some(region) if !region.is_empty() => {
                let wanted = region.to_lowercase();
                self.offices
                    .iter()
                    .filter(|office| office.region.to_lowercase() == wanted)
                    .cloned()
                    .collect()
            }
            _ => self.offices.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.offices.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.offices.is_empty()
    }
}

impl Default for OfficeDirectory {
    fn default() -> Self {
        Self::new(default_offices())
    }
}
