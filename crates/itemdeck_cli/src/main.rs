//! ItemDeck terminal front end.
//!
//! # Responsibility
//! - Drive the core catalog, filter and screen state from a terminal.
//! - Keep a `ping` probe to validate core wiring without the mobile host.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use itemdeck_core::config::{ENV_CATALOG_PATH, ENV_LOG_DIR, ENV_LOG_LEVEL};
use itemdeck_core::{filter_items, init_logging_from_config, load_catalog, Catalog, CoreConfig};
use log::info;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

mod browse;

#[derive(Parser, Debug)]
#[command(name = "itemdeck", version, about = "Browse and filter the ItemDeck catalog")]
struct Cli {
    /// Catalog JSON file to use instead of the embedded catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print core ping and version.
    Ping,
    /// Print catalog items, optionally filtered.
    List {
        /// Case-insensitive text matched against name or description.
        #[arg(short, long, default_value = "")]
        query: String,
        /// Emit items as a JSON array.
        #[arg(long)]
        json: bool,
    },
    /// Interactive main/list screen session on stdin.
    Browse,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Ping => {
            println!("itemdeck_core ping={}", itemdeck_core::ping());
            println!("itemdeck_core version={}", itemdeck_core::core_version());
            Ok(())
        }
        Command::List { query, json } => list(&load(&cli)?, query, *json),
        Command::Browse => {
            let catalog = load(&cli)?;
            info!("event=browse_start module=cli status=ok items={}", catalog.len());
            let stdin = io::stdin();
            let stdout = io::stdout();
            browse::run(&catalog, stdin.lock(), stdout.lock())
        }
    }
}

fn load(cli: &Cli) -> Result<Catalog> {
    let config = resolve_config(cli, |key| std::env::var(key).ok())?;
    init_logging_from_config(&config).map_err(|err| anyhow!(err))?;

    let source = config.catalog_source();
    load_catalog(source.as_ref()).with_context(|| format!("failed to load {}", source.describe()))
}

/// Layers flags over `env` and validates both with the same rules.
fn resolve_config(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Result<CoreConfig> {
    let layered = |key: &str| {
        let flag = match key {
            ENV_CATALOG_PATH => cli.catalog.as_ref().map(|path| path_text(path)),
            ENV_LOG_DIR => cli.log_dir.as_ref().map(|path| path_text(path)),
            ENV_LOG_LEVEL => cli.log_level.clone(),
            _ => None,
        };
        flag.or_else(|| env(key))
    };
    CoreConfig::from_lookup(layered).context("invalid configuration")
}

fn path_text(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn list(catalog: &Catalog, query: &str, json: bool) -> Result<()> {
    let items = filter_items(catalog.items(), query);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &items).context("failed to encode items")?;
        writeln!(out)?;
        return Ok(());
    }

    for item in &items {
        writeln!(out, "{:>3}  {}  -  {}", item.id, item.name, item.description)?;
    }
    writeln!(out, "{} of {} item(s)", items.len(), catalog.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{resolve_config, Cli};
    use clap::Parser;
    use itemdeck_core::config::{ENV_CATALOG_PATH, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn env(pairs: &[(&str, String)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn abs_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn flags_override_environment() {
        let flag_dir = abs_dir("itemdeck-cli-flag-logs");
        let cli = Cli::parse_from([
            "itemdeck",
            "--catalog",
            "flag.json",
            "--log-level",
            "ERROR",
            "--log-dir",
            flag_dir.to_str().expect("temp dir should be valid UTF-8"),
            "list",
        ]);
        let env = env(&[
            (ENV_CATALOG_PATH, "env.json".to_string()),
            (ENV_LOG_LEVEL, "debug".to_string()),
            (
                ENV_LOG_DIR,
                abs_dir("itemdeck-cli-env-logs").to_string_lossy().into_owned(),
            ),
        ]);

        let config = resolve_config(&cli, env).expect("flags should resolve");
        assert_eq!(config.catalog_path, Some(PathBuf::from("flag.json")));
        assert_eq!(config.log_level, "error");
        assert_eq!(config.log_dir, Some(flag_dir));
    }

    #[test]
    fn environment_applies_when_flags_are_absent() {
        let cli = Cli::parse_from(["itemdeck", "list"]);
        let config = resolve_config(
            &cli,
            env(&[
                (ENV_CATALOG_PATH, "env.json".to_string()),
                (ENV_LOG_LEVEL, "warn".to_string()),
            ]),
        )
        .expect("environment should resolve");
        assert_eq!(config.catalog_path, Some(PathBuf::from("env.json")));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn level_flag_replaces_invalid_environment_level() {
        let cli = Cli::parse_from(["itemdeck", "--log-level", "info", "browse"]);
        let config = resolve_config(&cli, env(&[(ENV_LOG_LEVEL, "verbose".to_string())]))
            .expect("flag should shadow bad env level");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn relative_log_dir_is_rejected_from_flag_and_environment() {
        let cli = Cli::parse_from(["itemdeck", "--log-dir", "logs/dev", "list"]);
        let err = resolve_config(&cli, env(&[])).expect_err("relative flag must be rejected");
        assert!(format!("{err:#}").contains("absolute"));

        let cli = Cli::parse_from(["itemdeck", "list"]);
        let err = resolve_config(&cli, env(&[(ENV_LOG_DIR, "logs/dev".to_string())]))
            .expect_err("relative env value must be rejected");
        assert!(format!("{err:#}").contains("absolute"));
    }
}
