//! Classification rules for frames and wood-door sheets
//!
//! Two lookups drive the sheet strategies:
//! - an ordered list of frame rules, evaluated first-match-wins against the
//!   item name and terminated by a `"default"` rule that always matches
//! - an ordered species -> column mapping for the wood-door price matrix
//!
//! Rules come from an external JSON or TOML document when one is available
//! and fall back to the compiled-in defaults otherwise.

mod loader;

pub use loader::{RulesFormat, load_rules, parse_rules};

use serde::{Deserialize, Serialize};

/// Sentinel match token that matches every item name
pub const DEFAULT_TOKEN: &str = "default";

/// Frame subcategory used when nothing else applies
pub const DEFAULT_FRAME_SUBCATEGORY: &str = "HM Drywall";

/// Substring rule assigning a frame subcategory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRule {
    /// Substring to look for in the item name, or `"default"`
    #[serde(rename = "match")]
    pub match_token: String,
    /// Subcategory assigned when the rule matches
    pub subcategory: String,
}

impl FrameRule {
    pub fn new(match_token: impl Into<String>, subcategory: impl Into<String>) -> Self {
        Self {
            match_token: match_token.into(),
            subcategory: subcategory.into(),
        }
    }

    /// The always-matching terminal rule
    pub fn fallback() -> Self {
        Self::new(DEFAULT_TOKEN, DEFAULT_FRAME_SUBCATEGORY)
    }

    pub fn is_default(&self) -> bool {
        self.match_token == DEFAULT_TOKEN
    }

    pub fn matches(&self, item_name: &str) -> bool {
        self.is_default() || item_name.contains(&self.match_token)
    }
}

/// Column of the wood-door matrix holding one species' prices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesColumn {
    pub species: String,
    /// Zero-based column index
    pub column: usize,
}

impl SpeciesColumn {
    pub fn new(species: impl Into<String>, column: usize) -> Self {
        Self {
            species: species.into(),
            column,
        }
    }
}

/// Effective rule set handed to the extraction strategies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRules {
    pub frame_subcategories: Vec<FrameRule>,
    pub species_columns: Vec<SpeciesColumn>,
}

impl Default for ClassificationRules {
    fn default() -> Self {
        Self {
            frame_subcategories: default_frame_rules(),
            species_columns: default_species_columns(),
        }
    }
}

impl ClassificationRules {
    /// Ordered frame rules, ending with the `"default"` rule
    pub fn frame_subcategory_rules(&self) -> &[FrameRule] {
        &self.frame_subcategories
    }

    /// Ordered species -> column mapping
    pub fn species_columns(&self) -> &[SpeciesColumn] {
        &self.species_columns
    }

    /// Subcategory of the first rule matching `item_name`
    pub fn classify_frame(&self, item_name: &str) -> &str {
        self.frame_subcategories
            .iter()
            .find(|rule| rule.matches(item_name))
            .map(|rule| rule.subcategory.as_str())
            .unwrap_or(DEFAULT_FRAME_SUBCATEGORY)
    }
}

pub fn default_frame_rules() -> Vec<FrameRule> {
    vec![
        FrameRule::new("EWA", "HM EWA"),
        FrameRule::new("USA", "HM USA"),
        FrameRule::fallback(),
    ]
}

pub fn default_species_columns() -> Vec<SpeciesColumn> {
    vec![
        SpeciesColumn::new("Lauan", 9),
        SpeciesColumn::new("Birch", 10),
        SpeciesColumn::new("Oak", 11),
        SpeciesColumn::new("Raw HB", 12),
        SpeciesColumn::new("Legacy", 13),
    ]
}
