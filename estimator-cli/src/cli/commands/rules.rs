//! `rules` command: print the classification rules an extraction would use

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::rules::{ClassificationRules, load_rules};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RulesOutputFormat {
    Json,
    Toml,
}

#[derive(Args, Debug, Clone)]
pub struct RulesCommands {
    /// Classification rules file (JSON, or TOML by extension)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = RulesOutputFormat::Json)]
    pub format: RulesOutputFormat,
}

pub fn handle_rules_command(args: RulesCommands) -> Result<()> {
    let rules = load_rules(args.rules.as_deref());
    println!("{}", format_rules(&rules, args.format)?);
    Ok(())
}

fn format_rules(rules: &ClassificationRules, format: RulesOutputFormat) -> Result<String> {
    match format {
        RulesOutputFormat::Json => {
            serde_json::to_string_pretty(rules).context("Failed to serialize rules to JSON")
        }
        RulesOutputFormat::Toml => {
            toml::to_string_pretty(rules).context("Failed to serialize rules to TOML")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{RulesFormat, parse_rules};

    #[test]
    fn test_formatted_rules_parse_back() {
        let rules = ClassificationRules::default();

        let json = format_rules(&rules, RulesOutputFormat::Json).unwrap();
        assert_eq!(parse_rules(&json, RulesFormat::Json).unwrap(), rules);

        let toml = format_rules(&rules, RulesOutputFormat::Toml).unwrap();
        assert_eq!(parse_rules(&toml, RulesFormat::Toml).unwrap(), rules);
    }

    #[test]
    fn test_json_uses_match_key() {
        let json = format_rules(&ClassificationRules::default(), RulesOutputFormat::Json).unwrap();
        assert!(json.contains("\"match\": \"EWA\""));
        assert!(json.contains("\"species\": \"Raw HB\""));
    }
}
