//! Config command handler

use super::fail;
use crate::args::ConfigSubcommand;
use gpa_tracker::config::Config;
use std::io::{self, Write};

/// Dispatch config subcommands
///
/// `effective` is the config with CLI overrides applied and is only used for
/// display. Edits are made to the config as stored on disk so run-time
/// overrides are never persisted.
pub fn run(subcommand: Option<ConfigSubcommand>, effective: &Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(effective, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(effective, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(&key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<&str>) {
    if let Some(k) = key {
        match config.get(k) {
            Some(value) => println!("{value}"),
            None => fail(format!("Unknown config key: '{k}'")),
        }
    } else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        println!("\nConfig file: {}", Config::get_config_file_path().display());
    }
}

/// Handle the config set subcommand
pub fn handle_config_set(key: &str, value: &str) {
    let mut stored = Config::load();
    if let Err(e) = stored.set(key, value) {
        fail(e);
    }
    if let Err(e) = stored.save() {
        fail(format!("Failed to save config: {e}"));
    }

    let shown = stored.get(key).unwrap_or_else(|| value.to_string());
    println!("✓ Set {key} = {shown}");
}

/// Handle the config unset subcommand
pub fn handle_config_unset(defaults: &Config, key: &str) {
    let mut stored = Config::load();
    if let Err(e) = stored.unset(key, defaults) {
        fail(e);
    }
    if let Err(e) = stored.save() {
        fail(format!("Failed to save config: {e}"));
    }

    println!("✓ Reset {key} to default");
}

/// Handle the config reset subcommand
pub fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let answer = response.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            fail(format!("Failed to remove config file: {e}"));
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
