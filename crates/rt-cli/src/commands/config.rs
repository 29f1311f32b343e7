//! Config command implementations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::output::{print_error, print_success, print_warning};
use rt_core::config::{self, ConfigFile};
use rt_core::error::ConfigError;

fn resolve_path(config_path: Option<&PathBuf>) -> PathBuf {
    config_path
        .cloned()
        .unwrap_or_else(config::default_config_path)
}

/// Load the effective settings, falling back to defaults when no file exists
pub fn load_settings(config_path: Option<&PathBuf>) -> Result<ConfigFile> {
    let path = resolve_path(config_path);

    match config::load_config::<ConfigFile>(&path) {
        Ok(settings) => Ok(settings),
        Err(ConfigError::NotFound(_)) => {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(ConfigFile::default())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to load config file: {:?}", path)),
    }
}

/// Print the config file location
pub fn config_path(config_path: Option<&PathBuf>) -> Result<()> {
    println!("{}", resolve_path(config_path).display());
    Ok(())
}

/// Print the effective configuration as TOML
pub fn config_show(config_path: Option<&PathBuf>) -> Result<()> {
    let path = resolve_path(config_path);
    if !path.exists() {
        print_warning(&format!("No configuration file at {:?}, showing defaults", path));
    }

    let settings = load_settings(Some(&path))?;
    print!("{}", toml::to_string_pretty(&settings)?);
    Ok(())
}

/// Get a config value by dotted key, e.g. `format.month_policy`
pub fn config_get(config_path: Option<&PathBuf>, key: &str) -> Result<()> {
    let settings = load_settings(config_path)?;
    let table = settings_table(&settings)?;

    let mut current = &toml::Value::Table(table);
    for part in key.split('.') {
        current = match current {
            toml::Value::Table(t) => match t.get(part) {
                Some(v) => v,
                None => anyhow::bail!("Key not found: {}", key),
            },
            _ => anyhow::bail!("Key not found: {}", key),
        };
    }

    match current {
        toml::Value::String(s) => println!("{}", s),
        toml::Value::Table(_) => print!("{}", toml::to_string_pretty(current)?),
        other => println!("{}", other),
    }

    Ok(())
}

/// Set a config value by dotted key, creating the file if needed
pub fn config_set(config_path: Option<&PathBuf>, key: &str, value: &str) -> Result<()> {
    let path = resolve_path(config_path);
    let settings = load_settings(Some(&path))?;
    let mut table = settings_table(&settings)?;

    let parts: Vec<&str> = key.split('.').collect();
    let (last_key, parents) = parts
        .split_last()
        .ok_or_else(|| anyhow::anyhow!("Invalid key: key path cannot be empty"))?;

    let mut current = &mut table;
    for part in parents {
        current = current
            .get_mut(*part)
            .and_then(|v| v.as_table_mut())
            .ok_or_else(|| anyhow::anyhow!("Key not found: {}", key))?;
    }
    if !current.contains_key(*last_key) {
        anyhow::bail!("Key not found: {}", key);
    }

    let toml_value = match value {
        "true" => toml::Value::Boolean(true),
        "false" => toml::Value::Boolean(false),
        _ => toml::Value::String(value.to_string()),
    };
    current.insert(last_key.to_string(), toml_value);

    // Round-trip through the typed config so bad values never reach disk
    let updated: ConfigFile = toml::Value::Table(table)
        .try_into()
        .with_context(|| format!("Invalid value for {}: {}", key, value))?;
    write_settings(&path, &updated)?;

    print_success(&format!("Set {} = {}", key, value));
    Ok(())
}

/// Write a default configuration file
pub fn config_init(config_path: Option<&PathBuf>, force: bool) -> Result<()> {
    let path = resolve_path(config_path);

    if path.exists() && !force {
        print_error(&format!("Config file already exists: {:?}", path));
        print_warning("Use --force to overwrite");
        return Ok(());
    }

    write_settings(&path, &ConfigFile::default())?;
    print_success(&format!("Created configuration file: {:?}", path));
    Ok(())
}

fn settings_table(settings: &ConfigFile) -> Result<toml::Table> {
    match toml::Value::try_from(settings).context("Failed to encode settings")? {
        toml::Value::Table(table) => Ok(table),
        _ => anyhow::bail!("Settings did not encode as a table"),
    }
}

fn write_settings(path: &Path, settings: &ConfigFile) -> Result<()> {
    config::save_config(path, settings)
        .with_context(|| format!("Failed to write config file: {:?}", path))
}
