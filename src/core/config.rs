//! Configuration module for `GpaTracker`

use crate::core::grading::University;
use crate::core::validation::validate_target;
use crate::logger::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory inside path values
const DIR_VARIABLE: &str = "$GPA_TRACKER";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Grading configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradingConfig {
    /// University slug used for new transcripts (e.g. "numl", "gcwuf")
    #[serde(default)]
    pub university: String,
    /// Default target CGPA; empty when unset
    #[serde(default)]
    pub target_cgpa: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Transcript TOML file
    #[serde(default)]
    pub transcript_file: String,
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Grading settings
    #[serde(default)]
    pub grading: GradingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override university slug
    pub university: Option<String>,
    /// Override target CGPA
    pub target_cgpa: Option<String>,
    /// Override transcript file
    pub transcript_file: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$GPA_TRACKER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gpatracker`
    /// - macOS: `~/Library/Application Support/gpatracker`
    /// - Windows: `%APPDATA%\gpatracker`
    #[must_use]
    pub fn get_gpatracker_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gpatracker")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are filled,
    /// so settings added in newer versions appear without touching user values.
    /// `grading.target_cgpa` is left alone because empty is a meaningful value.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.grading.university.is_empty() && !defaults.grading.university.is_empty() {
            self.grading
                .university
                .clone_from(&defaults.grading.university);
            changed = true;
        }

        if self.paths.transcript_file.is_empty() && !defaults.paths.transcript_file.is_empty() {
            self.paths
                .transcript_file
                .clone_from(&defaults.paths.transcript_file);
            changed = true;
        }
        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides affect this run only; the config file is not modified. Only
    /// non-`None` values replace config values.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     university: Some("gcwuf".to_string()),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(university) = &overrides.university {
            self.grading.university.clone_from(university);
        }
        if let Some(target) = &overrides.target_cgpa {
            self.grading.target_cgpa.clone_from(target);
        }

        if let Some(transcript_file) = &overrides.transcript_file {
            self.paths.transcript_file = Self::expand_variables(transcript_file);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir = Self::expand_variables(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_gpatracker_dir`](Self::get_gpatracker_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gpatracker_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GPA_TRACKER` to the config directory
    ///
    /// ```ignore
    /// let expanded = Config::expand_variables("$GPA_TRACKER/transcript.toml");
    /// // "/home/user/.config/gpatracker/transcript.toml"
    /// ```
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_gpatracker_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Expands `$GPA_TRACKER` in path values. Missing fields use their serde
    /// defaults (empty strings or false).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.transcript_file = Self::expand_variables(&config.paths.transcript_file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Debug builds use `DefaultCLIConfigDebug.toml`, release builds use
    /// `DefaultCLIConfigRelease.toml`.
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: load it, merge missing fields from defaults,
    ///   and save it back if anything was added
    /// - On first run: create the config directory and write the defaults
    ///
    /// Falls back to defaults if the existing file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(mut config) = Self::load_from(&config_file) {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                return config;
            }
            crate::warn!(
                "Could not parse config file {}, using defaults",
                config_file.display()
            );
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Read and parse a config file at an explicit path
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to an explicit path, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `university`, `target_cgpa`,
    /// `transcript_file`, `reports_dir` (dashes are accepted for the
    /// underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "university" => Some(self.grading.university.clone()),
            "target_cgpa" | "target-cgpa" => Some(self.grading.target_cgpa.clone()),
            "transcript_file" | "transcript-file" => Some(self.paths.transcript_file.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// `level` must be a known log level. `verbose` must be a boolean.
    /// `university` must be a known slug.
    /// `target_cgpa` must be empty or a number between 0.0 and 4.0.
    ///
    /// Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                self.logging.level = value.parse::<Level>()?.as_str().to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "university" => {
                self.grading.university = parse_known_slug(value)?.slug().to_string();
            }
            "target_cgpa" | "target-cgpa" => {
                if !value.trim().is_empty() {
                    parse_target(value)?;
                }
                self.grading.target_cgpa = value.trim().to_string();
            }
            "transcript_file" | "transcript-file" => {
                self.paths.transcript_file = value.to_string();
            }
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its default)
    ///
    /// Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "university" => self
                .grading
                .university
                .clone_from(&defaults.grading.university),
            "target_cgpa" | "target-cgpa" => self
                .grading
                .target_cgpa
                .clone_from(&defaults.grading.target_cgpa),
            "transcript_file" | "transcript-file" => self
                .paths
                .transcript_file
                .clone_from(&defaults.paths.transcript_file),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it. Succeeds if the file
    /// does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// University selected by `grading.university`
    #[must_use]
    pub fn university(&self) -> University {
        University::from_slug(&self.grading.university)
    }

    /// Target CGPA from `grading.target_cgpa`, if set and valid
    #[must_use]
    pub fn target_cgpa(&self) -> Option<f64> {
        let value = self.grading.target_cgpa.trim();
        if value.is_empty() {
            return None;
        }
        match parse_target(value) {
            Ok(target) => Some(target),
            Err(e) => {
                crate::warn!("Ignoring configured target CGPA: {e}");
                None
            }
        }
    }

    /// Transcript file path
    #[must_use]
    pub fn transcript_path(&self) -> PathBuf {
        PathBuf::from(&self.paths.transcript_file)
    }
}

/// Strict slug parsing: unknown slugs are an error rather than the default policy
fn parse_known_slug(value: &str) -> Result<University, String> {
    let university = University::from_slug(value);
    let normalized = value.trim().to_ascii_lowercase();
    if normalized == university.slug() || (normalized == "gcuwf" && university == University::Gcwuf) {
        Ok(university)
    } else {
        Err(format!("Unknown university: '{value}'"))
    }
}

fn parse_target(value: &str) -> Result<f64, String> {
    let target = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid number for 'target_cgpa': '{value}'"))?;
    validate_target(target).map_err(|e| e.to_string())?;
    Ok(target)
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[grading]")?;
        writeln!(f, "  university = \"{}\"", self.grading.university)?;
        writeln!(f, "  target_cgpa = \"{}\"", self.grading.target_cgpa)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  transcript_file = \"{}\"", self.paths.transcript_file)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
