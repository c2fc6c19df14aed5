//! Normalized pricing record

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether an item is kept in stock or ordered on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Stock,
    SpecialOrder,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Stock => "stock",
            StockStatus::SpecialOrder => "special_order",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry; field order is the serialized order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRecord {
    pub category: String,
    pub subcategory: Option<String>,
    pub item_name: String,
    pub price: f64,
    pub stock_status: StockStatus,
    #[serde(default)]
    pub description: String,
}

impl PricingRecord {
    pub fn new(
        category: impl Into<String>,
        item_name: impl Into<String>,
        price: f64,
        stock_status: StockStatus,
    ) -> Self {
        Self {
            category: category.into(),
            subcategory: None,
            item_name: item_name.into(),
            price,
            stock_status,
            description: String::new(),
        }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }
}
