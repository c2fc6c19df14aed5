//! Load classification rules from a JSON or TOML document

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{
    ClassificationRules, FrameRule, SpeciesColumn, default_frame_rules, default_species_columns,
};

/// File looked up in the working directory and the user config directory
pub const RULES_FILE_NAME: &str = "pricing_rules.json";

/// Subdirectory of the user config directory
const CONFIG_DIR_NAME: &str = "door-estimator";

/// Document format of a rules file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesFormat {
    Json,
    Toml,
}

impl RulesFormat {
    /// `.toml` files are TOML, everything else is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => RulesFormat::Toml,
            _ => RulesFormat::Json,
        }
    }
}

/// Rules document as written by operators; either set may be omitted
#[derive(Debug, Default, Deserialize)]
struct RulesDocument {
    #[serde(default)]
    frame_subcategories: Option<Vec<FrameRule>>,
    #[serde(default)]
    species_columns: Option<Vec<SpeciesColumn>>,
}

/// Find the rules file to use
///
/// An explicit path always wins. Otherwise `./pricing_rules.json`, then
/// `<config dir>/door-estimator/pricing_rules.json`, if they exist.
pub fn resolve_rules_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(RULES_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(RULES_FILE_NAME))
        .filter(|path| path.exists())
}

/// Load the effective rules; never fails
pub fn load_rules(explicit: Option<&Path>) -> ClassificationRules {
    match resolve_rules_path(explicit) {
        Some(path) => load_rules_from(&path),
        None => {
            log::info!("No classification rules file found, using built-in defaults");
            ClassificationRules::default()
        }
    }
}

/// Load rules from `path`, falling back to defaults when it is missing or malformed
pub fn load_rules_from(path: &Path) -> ClassificationRules {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!(
                "Classification rules file {} not found, using built-in defaults",
                path.display()
            );
            return ClassificationRules::default();
        }
        Err(e) => {
            log::warn!(
                "Failed to read classification rules {}: {}; using built-in defaults",
                path.display(),
                e
            );
            return ClassificationRules::default();
        }
    };

    match parse_rules(&text, RulesFormat::from_path(path)) {
        Ok(rules) => {
            log::info!(
                "Loaded {} frame rules and {} species columns from {}",
                rules.frame_subcategories.len(),
                rules.species_columns.len(),
                path.display()
            );
            rules
        }
        Err(e) => {
            log::warn!(
                "Malformed classification rules {}: {:#}; using built-in defaults",
                path.display(),
                e
            );
            ClassificationRules::default()
        }
    }
}

/// Parse a rules document, filling omitted sets with defaults
pub fn parse_rules(text: &str, format: RulesFormat) -> Result<ClassificationRules> {
    let document: RulesDocument = match format {
        RulesFormat::Json => {
            serde_json::from_str(text).context("Failed to parse rules JSON")?
        }
        RulesFormat::Toml => toml::from_str(text).context("Failed to parse rules TOML")?,
    };

    let frame_subcategories = match document.frame_subcategories {
        Some(rules) => normalize_frame_rules(rules),
        None => default_frame_rules(),
    };

    let species_columns = match document.species_columns {
        Some(columns) if columns.is_empty() => {
            log::warn!("Rules document has an empty species_columns list, using defaults");
            default_species_columns()
        }
        Some(columns) => columns,
        None => default_species_columns(),
    };

    Ok(ClassificationRules {
        frame_subcategories,
        species_columns,
    })
}

/// Make sure the list ends with exactly one reachable `"default"` rule
fn normalize_frame_rules(mut rules: Vec<FrameRule>) -> Vec<FrameRule> {
    if rules.is_empty() {
        log::warn!("Rules document has an empty frame_subcategories list, using defaults");
        return default_frame_rules();
    }

    match rules.iter().position(FrameRule::is_default) {
        Some(idx) => {
            let unreachable = rules.len() - idx - 1;
            if unreachable > 0 {
                log::warn!(
                    "Dropping {} frame rules listed after the default rule",
                    unreachable
                );
                rules.truncate(idx + 1);
            }
        }
        None => {
            log::warn!("Frame rules have no default rule, appending the built-in one");
            rules.push(FrameRule::fallback());
        }
    }

    rules
}
