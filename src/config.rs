//! Configuration module for tfdoc.
//!
//! tfdoc works without any configuration. A YAML file can add namespace
//! overrides for providers published outside `hashicorp`, pick the browser
//! command, and tune terminal output.
//!
//! # Lookup Order
//!
//! 1. `--config PATH` or the `TFDOC_CONFIG` environment variable
//! 2. `tfdoc.yaml`, `tfdoc.yml` or `.tfdoc.yaml` in the working directory
//! 3. `tfdoc/config.yaml` in the user configuration directory
//! 4. Built-in defaults
//!
//! # Configuration File Format
//!
//! ```yaml
//! # tfdoc.yaml
//!
//! registry:
//!   namespaces:
//!     mycorp: MyCorp
//!
//! browser:
//!   command: ${BROWSER}  # Environment variable expansion
//!
//! output:
//!   colored: true
//! ```

use crate::error::{Result, ResultExt};
use crate::registry::NamespaceTable;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// `${VAR}` or `$VAR`.
static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}|\$([A-Za-z_][A-Za-z0-9_]*)").expect("Invalid regex")
});

/// File names looked up in the working directory.
pub const DEFAULT_CONFIG_FILES: &[&str] = &["tfdoc.yaml", "tfdoc.yml", ".tfdoc.yaml"];

/// Registry options.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RegistryOptions {
    /// Extra provider to namespace mappings, e.g. `mycorp: MyCorp`.
    pub namespaces: HashMap<String, String>,
}

/// Browser options.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BrowserOptions {
    /// Command used to open URLs. The URL is appended as the last argument.
    /// When unset, the platform opener is used.
    pub command: Option<String>,
}

impl BrowserOptions {
    /// Split the configured command into program and arguments.
    #[must_use]
    pub fn command_parts(&self) -> Option<(String, Vec<String>)> {
        let mut parts = self.command.as_deref()?.split_whitespace().map(String::from);
        let program = parts.next()?;
        Some((program, parts.collect()))
    }
}

/// Output options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputOptions {
    /// Use colored output.
    #[serde(default = "default_true")]
    pub colored: bool,

    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            colored: true,
            pretty: true,
        }
    }
}

/// Main configuration structure with nested sections.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Registry options
    pub registry: RegistryOptions,

    /// Browser options
    pub browser: BrowserOptions,

    /// Output options
    pub output: OutputOptions,
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or a value is unusable.
    pub fn from_yaml(content: &str) -> Result<Self> {
        tracing::debug!("Parsing configuration from YAML");
        let expanded = expand_env_vars(content);

        // An empty or comment-only file is a valid, default configuration.
        if expanded.lines().all(|line| {
            let line = line.trim();
            line.is_empty() || line.starts_with('#')
        }) {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&expanded)
            .to_config_parse_error("invalid tfdoc configuration".to_string())?;
        config.validate()?;

        tracing::debug!(
            namespaces = config.registry.namespaces.len(),
            browser = ?config.browser.command,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Load configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading configuration file");
        let content = std::fs::read_to_string(path).with_path(path)?;
        Self::from_yaml(&content)
    }

    /// Load the configuration following the lookup order.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit or discovered file is invalid.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for candidate in Self::candidate_paths() {
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "Found configuration file");
                return Self::from_file(&candidate);
            }
        }

        tracing::debug!("No configuration file found, using default configuration");
        Ok(Self::default())
    }

    /// Paths searched when no configuration file is given explicitly.
    #[must_use]
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = DEFAULT_CONFIG_FILES.iter().map(PathBuf::from).collect();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("tfdoc").join("config.yaml"));
        }
        paths
    }

    /// The namespace table described by this configuration.
    #[must_use]
    pub fn namespace_table(&self) -> NamespaceTable {
        NamespaceTable::with_overrides(&self.registry.namespaces)
    }

    fn validate(&self) -> Result<()> {
        let mut providers = HashSet::new();
        for (provider, namespace) in &self.registry.namespaces {
            if provider.is_empty() || provider.contains('_') {
                return Err(crate::err!(ConfigValue {
                    key: format!("registry.namespaces.{provider}"),
                    message: "provider names must be non-empty and contain no '_'".to_string(),
                }));
            }
            // Lookups lowercase the provider.
            if !providers.insert(provider.to_lowercase()) {
                return Err(crate::err!(ConfigValue {
                    key: format!("registry.namespaces.{provider}"),
                    message: "provider is listed more than once with different case".to_string(),
                }));
            }
            if namespace.trim().is_empty() {
                return Err(crate::err!(ConfigValue {
                    key: format!("registry.namespaces.{provider}"),
                    message: "namespace must not be empty".to_string(),
                }));
            }
        }

        if matches!(&self.browser.command, Some(command) if command.trim().is_empty()) {
            return Err(crate::err!(ConfigValue {
                key: "browser.command".to_string(),
                message: "command must not be empty".to_string(),
            }));
        }

        Ok(())
    }

    /// Generate an example YAML configuration.
    #[must_use]
    pub fn example_yaml() -> String {
        r#"# tfdoc Configuration File

# Registry options
registry:
  # Providers published under a namespace other than "hashicorp".
  # Built in: okta, datadog (DataDog), docker (kreuzwerker),
  # sakuracloud (sacloud), github (integrations).
  namespaces: {}
  #   mycorp: MyCorp

# Browser options
# Command used to open documentation. The URL is appended.
# Defaults to the platform opener (open, xdg-open, start).
browser: {}
#   command: firefox --new-tab
#   command: ${BROWSER}

# Output options
output:
  # Use colored output in terminal
  colored: true

  # Pretty-print JSON output
  pretty: true
"#
        .to_string()
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax. Unknown variables are left as is.
fn expand_env_vars(content: &str) -> String {
    ENV_VAR
        .replace_all(content, |caps: &Captures<'_>| {
            let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            std::env::var(name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}
