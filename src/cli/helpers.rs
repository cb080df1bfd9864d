//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use chrono::NaiveDate;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::table::TableConfig;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, Workshop};

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len < 3 {
        s.chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Format a rand amount with thousands separators ("R2,250,000")
pub fn format_money(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}R{}", sign, grouped)
}

/// Format an optional date, "TBD" when unset
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "TBD".to_string())
}

/// Effective configuration for this invocation
pub fn load_config() -> Config {
    Config::load()
}

/// Load the workshop named by `--fixtures`, then config, then the built-in set
pub fn open_workshop(global: &GlobalOpts, config: &Config) -> Result<Workshop> {
    let fixtures = global.fixtures.as_deref().or(config.fixtures.as_deref());
    Ok(Workshop::load(fixtures)?)
}

/// Resolve `--format`, falling back to the configured default
pub fn effective_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    if global.format != OutputFormat::Auto {
        return global.format;
    }
    config
        .default_format
        .as_deref()
        .and_then(|name| <OutputFormat as clap::ValueEnum>::from_str(name, true).ok())
        .unwrap_or(OutputFormat::Auto)
}

/// Table settings for this invocation; `--quiet` drops the summary line
pub fn table_config(global: &GlobalOpts) -> TableConfig {
    match (global.wrap, global.quiet) {
        (Some(width), quiet) => TableConfig {
            show_summary: !quiet,
            ..TableConfig::with_wrap(width)
        },
        (None, true) => TableConfig::for_pipe(),
        (None, false) => TableConfig::default(),
    }
}

/// Print a serializable value as JSON or YAML; false if `format` is neither
pub fn print_structured<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<bool> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value).into_diagnostic()?);
            Ok(true)
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(value).into_diagnostic()?);
            Ok(true)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_truncate_str_never_exceeds_max_len() {
        assert_eq!(truncate_str("hello", 2), "he");
        assert_eq!(truncate_str("hello", 0), "");
        assert_eq!(truncate_str("hello", 3), "...");
        for max in 0..8 {
            assert!(truncate_str("restoration", max).chars().count() <= max);
        }
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
        assert_eq!(escape_csv("with\nnewline"), "\"with\nnewline\"");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "R0");
        assert_eq!(format_money(999.0), "R999");
        assert_eq!(format_money(8100.0), "R8,100");
        assert_eq!(format_money(1_057_500.0), "R1,057,500");
        assert_eq!(format_money(-153_000.0), "-R153,000");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(None), "TBD");
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(2024, 2, 15)),
            "2024-02-15"
        );
    }

    #[test]
    fn test_effective_format_prefers_flag() {
        let config = Config {
            default_format: Some("json".to_string()),
            ..Config::default()
        };
        let mut global = GlobalOpts {
            format: OutputFormat::Auto,
            quiet: false,
            verbose: false,
            wrap: None,
            fixtures: None,
        };
        assert_eq!(effective_format(&global, &config), OutputFormat::Json);

        global.format = OutputFormat::Csv;
        assert_eq!(effective_format(&global, &config), OutputFormat::Csv);

        let bogus = Config {
            default_format: Some("xml".to_string()),
            ..Config::default()
        };
        global.format = OutputFormat::Auto;
        assert_eq!(effective_format(&global, &bogus), OutputFormat::Auto);
    }

    #[test]
    fn test_table_config_from_flags() {
        let mut global = GlobalOpts {
            format: OutputFormat::Auto,
            quiet: true,
            verbose: false,
            wrap: Some(30),
            fixtures: None,
        };
        let config = table_config(&global);
        assert_eq!(config.wrap_width, Some(30));
        assert!(!config.show_summary);

        global.quiet = false;
        global.wrap = None;
        let config = table_config(&global);
        assert_eq!(config.wrap_width, None);
        assert!(config.show_summary);
    }
}
