//! `wsm config` command - Configuration inspection
//!
//! Shows the effective configuration after layering defaults, the global
//! and workspace config files, and the environment.

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::{load_config, print_structured};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration values
    Show(ShowArgs),

    /// Show paths to configuration files
    Path,

    /// List all available configuration keys
    Keys,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Show only this key's value
    pub key: Option<String>,
}

/// Valid configuration keys
const VALID_KEYS: &[(&str, &str)] = &[
    ("fixtures", "Fixture directory used instead of the built-in set"),
    (
        "default_format",
        "Default output format (tsv, json, yaml, csv, md, id)",
    ),
    ("recent_limit", "Projects shown under Recent on the dashboard"),
    ("label_name_words", "Words of the project name printed on cage labels"),
];

/// Effective values, defaults filled in
#[derive(serde::Serialize)]
struct EffectiveConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    fixtures: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_format: Option<String>,
    recent_limit: usize,
    label_name_words: usize,
}

impl From<&Config> for EffectiveConfig {
    fn from(config: &Config) -> Self {
        Self {
            fixtures: config.fixtures.as_ref().map(|p| p.display().to_string()),
            default_format: config.default_format.clone(),
            recent_limit: config.recent_limit(),
            label_name_words: config.label_name_words(),
        }
    }
}

/// Run a config subcommand
pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => run_show(args, global),
        ConfigCommands::Path => run_path(),
        ConfigCommands::Keys => run_keys(),
    }
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config();
    let effective = EffectiveConfig::from(&config);

    if let Some(key) = &args.key {
        return match get_config_value(&effective, key) {
            Some(v) => {
                println!("{}", v);
                Ok(())
            }
            None if VALID_KEYS.iter().any(|(k, _)| k == key) => {
                Err(miette::miette!("Key '{}' is not set", key))
            }
            None => Err(miette::miette!(
                help = "run `wsm config keys` to list valid keys",
                "Unknown configuration key '{}'",
                key
            )),
        };
    }

    // `config show` prints YAML unless another structured format is asked for
    let format = match global.format {
        OutputFormat::Json => OutputFormat::Json,
        _ => OutputFormat::Yaml,
    };
    if global.quiet || global.format != OutputFormat::Auto {
        print_structured(&effective, format)?;
        return Ok(());
    }

    println!("{}", style("Effective Configuration").bold().underlined());
    println!();
    for (key, _) in VALID_KEYS {
        print_config_value(key, get_config_value(&effective, key).as_deref());
    }

    println!();
    println!("{}", style("Config Sources (in priority order):").dim());
    println!("  1. --fixtures flag");
    println!("  2. Environment variables (WSM_FIXTURES, WSM_FORMAT)");
    println!("  3. Workspace config ({})", Config::workspace_config_path().display());
    match Config::global_config_path() {
        Some(path) => println!("  4. Global config ({})", path.display()),
        None => println!("  4. Global config (unavailable)"),
    }

    Ok(())
}

fn run_path() -> Result<()> {
    let global_path = Config::global_config_path()
        .ok_or_else(|| miette::miette!("Could not determine global config directory"))?;
    let workspace_path = Config::workspace_config_path();

    println!("{}", style("Configuration file paths:").bold());
    println!();
    for (label, path) in [("Global:", &global_path), ("Workspace:", &workspace_path)] {
        println!("  {} {}", style(label).cyan(), path.display());
        if path.exists() {
            println!("    {}", style("(exists)").green());
        } else {
            println!("    {}", style("(not created)").dim());
        }
    }

    Ok(())
}

fn run_keys() -> Result<()> {
    println!("{}", style("Available configuration keys:").bold());
    println!();

    for (key, description) in VALID_KEYS {
        println!("  {:<20} {}", style(key).cyan(), style(description).dim());
    }

    Ok(())
}

fn get_config_value(config: &EffectiveConfig, key: &str) -> Option<String> {
    match key {
        "fixtures" => config.fixtures.clone(),
        "default_format" => config.default_format.clone(),
        "recent_limit" => Some(config.recent_limit.to_string()),
        "label_name_words" => Some(config.label_name_words.to_string()),
        _ => None,
    }
}

fn print_config_value(key: &str, value: Option<&str>) {
    if let Some(v) = value {
        println!("  {}: {}", style(key).cyan(), style(v).yellow());
    } else {
        println!("  {}: {}", style(key).cyan(), style("(not set)").dim());
    }
}
