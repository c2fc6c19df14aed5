//! Pricing catalog and the assembler that builds it from a workbook

mod assembler;

pub use assembler::CatalogAssembler;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::extract::PricingRecord;

/// Records of one category, in source order
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecords {
    pub category: String,
    pub records: Vec<PricingRecord>,
}

/// Ordered mapping of category name to its records
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<CategoryRecords>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `records` under `category`, replacing an earlier entry in place
    pub(crate) fn insert(&mut self, category: impl Into<String>, records: Vec<PricingRecord>) {
        let category = category.into();
        match self.categories.iter_mut().find(|c| c.category == category) {
            Some(existing) => existing.records = records,
            None => self.categories.push(CategoryRecords { category, records }),
        }
    }

    pub fn get(&self, category: &str) -> Option<&[PricingRecord]> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.records.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[PricingRecord])> {
        self.categories
            .iter()
            .map(|c| (c.category.as_str(), c.records.as_slice()))
    }

    /// All records in catalog order
    pub fn records(&self) -> impl Iterator<Item = &PricingRecord> {
        self.categories.iter().flat_map(|c| c.records.iter())
    }

    pub fn total_records(&self) -> usize {
        self.categories.iter().map(|c| c.records.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<PricingRecord>)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (S, Vec<PricingRecord>)>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for (category, records) in iter {
            catalog.insert(category, records);
        }
        catalog
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for entry in &self.categories {
            map.serialize_entry(&entry.category, &entry.records)?;
        }
        map.end()
    }
}
