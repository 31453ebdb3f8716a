// Rust guideline compliant 2026-02-06

//! Configuration management for ghdocs.

use crate::resolver::ResolverConfig;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "ghdocs.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for ghdocs behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Repository owner on the remote host.
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Repository name.
    #[serde(default = "default_repo")]
    pub repo: String,

    /// Branch or ref that documentation is read from.
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Directory holding one sub-directory per documentation category.
    #[serde(default = "default_docs_path")]
    pub docs_path: String,

    /// Base URL of the REST API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// API token. Only read from the environment and never written back.
    #[serde(default, skip_serializing)]
    pub token: Option<String>,

    /// Page size for paginated listings (1-100).
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Upper bound on pages fetched by a single listing.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries for transient remote failures.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Name resolution settings.
    #[serde(default)]
    pub resolver: ResolverConfig,
}

fn default_owner() -> String {
    "gruntwork-io".to_string()
}

fn default_repo() -> String {
    "terragrunt".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_docs_path() -> String {
    "docs/_docs".to_string()
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> u32 {
    100
}

fn default_max_pages() -> u32 {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            repo: default_repo(),
            branch: default_branch(),
            docs_path: default_docs_path(),
            api_base_url: default_api_base_url(),
            token: None,
            per_page: default_per_page(),
            max_pages: default_max_pages(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            output_format: OutputFormat::default(),
            resolver: ResolverConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file (`config_path`, or `ghdocs.toml` in the working directory)
    /// 3. Environment variables with `GHDOCS_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_path` - Explicit configuration file. Must exist when given.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit configuration file is missing or unreadable
    /// - The configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Reads a configuration file without applying overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `GHDOCS_OWNER`, `GHDOCS_REPO`, `GHDOCS_BRANCH`, `GHDOCS_DOCS_PATH`
    /// - `GHDOCS_API_URL` - REST API base URL
    /// - `GHDOCS_TOKEN`, falling back to `GITHUB_TOKEN`
    /// - `GHDOCS_PER_PAGE`, `GHDOCS_MAX_PAGES`, `GHDOCS_TIMEOUT_SECS`, `GHDOCS_MAX_RETRIES`
    /// - `GHDOCS_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `GHDOCS_THRESHOLD`, `GHDOCS_MAX_SUGGESTIONS` - Resolver settings
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("GHDOCS_OWNER") {
            self.owner = val;
        }

        if let Ok(val) = std::env::var("GHDOCS_REPO") {
            self.repo = val;
        }

        if let Ok(val) = std::env::var("GHDOCS_BRANCH") {
            self.branch = val;
        }

        if let Ok(val) = std::env::var("GHDOCS_DOCS_PATH") {
            self.docs_path = val;
        }

        if let Ok(val) = std::env::var("GHDOCS_API_URL") {
            self.api_base_url = val;
        }

        if let Ok(val) = std::env::var("GHDOCS_TOKEN").or_else(|_| std::env::var("GITHUB_TOKEN")) {
            if !val.trim().is_empty() {
                self.token = Some(val);
            }
        }

        if let Ok(val) = std::env::var("GHDOCS_PER_PAGE") {
            self.per_page = parse_env("GHDOCS_PER_PAGE", &val, "a number 1-100")?;
        }

        if let Ok(val) = std::env::var("GHDOCS_MAX_PAGES") {
            self.max_pages = parse_env("GHDOCS_MAX_PAGES", &val, "a positive number")?;
        }

        if let Ok(val) = std::env::var("GHDOCS_TIMEOUT_SECS") {
            self.timeout_secs = parse_env("GHDOCS_TIMEOUT_SECS", &val, "a positive number")?;
        }

        if let Ok(val) = std::env::var("GHDOCS_MAX_RETRIES") {
            self.max_retries = parse_env("GHDOCS_MAX_RETRIES", &val, "a number")?;
        }

        if let Ok(val) = std::env::var("GHDOCS_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "GHDOCS_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("GHDOCS_THRESHOLD") {
            self.resolver.threshold = parse_env("GHDOCS_THRESHOLD", &val, "a positive number")?;
        }

        if let Ok(val) = std::env::var("GHDOCS_MAX_SUGGESTIONS") {
            self.resolver.max_suggestions =
                parse_env("GHDOCS_MAX_SUGGESTIONS", &val, "a non-negative number")?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - owner, repo, branch or api_base_url is empty
    /// - per_page is outside 1-100
    /// - max_pages or timeout_secs is zero
    /// - the resolver settings are invalid
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("owner", &self.owner),
            ("repo", &self.repo),
            ("branch", &self.branch),
            ("api_base_url", &self.api_base_url),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("{} cannot be empty", field)));
            }
        }

        if self.per_page == 0 || self.per_page > 100 {
            return Err(Error::InvalidConfig(format!(
                "per_page must be 1-100, got {}",
                self.per_page
            )));
        }

        if self.max_pages == 0 {
            return Err(Error::InvalidConfig(
                "max_pages must be greater than 0".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(Error::InvalidConfig(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        self.resolver.validate()
    }

    /// Saves the configuration to a TOML file.
    ///
    /// The token is never written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns `owner/repo`.
    #[must_use]
    pub fn full_repo_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str, expected: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidConfig(format!("{} must be {}", name, expected)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests in this module mutate process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: &[&str] = &[
        "GHDOCS_OWNER",
        "GHDOCS_REPO",
        "GHDOCS_BRANCH",
        "GHDOCS_DOCS_PATH",
        "GHDOCS_API_URL",
        "GHDOCS_TOKEN",
        "GITHUB_TOKEN",
        "GHDOCS_PER_PAGE",
        "GHDOCS_MAX_PAGES",
        "GHDOCS_TIMEOUT_SECS",
        "GHDOCS_MAX_RETRIES",
        "GHDOCS_OUTPUT_FORMAT",
        "GHDOCS_THRESHOLD",
        "GHDOCS_MAX_SUGGESTIONS",
    ];

    fn clear_all_env_vars() {
        for name in ENV_VARS {
            std::env::remove_var(name);
        }
    }

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.owner, "gruntwork-io");
        assert_eq!(config.repo, "terragrunt");
        assert_eq!(config.branch, "main");
        assert_eq!(config.docs_path, "docs/_docs");
        assert_eq!(config.per_page, 100);
        assert_eq!(config.resolver.threshold, 3);
        assert_eq!(config.resolver.max_suggestions, 3);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            r#"
owner = "acme"
repo = "handbook"
branch = "develop"
docs_path = "content"
per_page = 50
output_format = "json"

[resolver]
threshold = 2
max_suggestions = 5
"#,
        );

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.full_repo_name(), "acme/handbook");
        assert_eq!(config.branch, "develop");
        assert_eq!(config.docs_path, "content");
        assert_eq!(config.per_page, 50);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.resolver.threshold, 2);
        assert_eq!(config.resolver.max_suggestions, 5);
    }

    #[test]
    fn test_config_load_missing_explicit_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load(Some(&temp_dir.path().join("absent.toml")));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_config_validation_zero_threshold() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[resolver]\nthreshold = 0\n");

        let result = Config::load(Some(&path));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_config_validation_negative_threshold_rejected_by_parser() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[resolver]\nmax_suggestions = -1\n");

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_config_validation_per_page_range() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "per_page = 101");

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_config_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "owner = \"from-file\"");

        std::env::set_var("GHDOCS_OWNER", "from-env");
        std::env::set_var("GHDOCS_THRESHOLD", "5");
        std::env::set_var("GHDOCS_OUTPUT_FORMAT", "plain");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.owner, "from-env");
        assert_eq!(config.resolver.threshold, 5);
        assert_eq!(config.output_format, OutputFormat::Plain);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_token_fallback() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "");

        std::env::set_var("GITHUB_TOKEN", "ghp_fallback");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.token.as_deref(), Some("ghp_fallback"));

        std::env::set_var("GHDOCS_TOKEN", "ghp_primary");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.token.as_deref(), Some("ghp_primary"));

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_values() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "");

        std::env::set_var("GHDOCS_MAX_SUGGESTIONS", "-2");
        assert!(Config::load(Some(&path)).is_err());
        clear_all_env_vars();

        std::env::set_var("GHDOCS_OUTPUT_FORMAT", "yaml");
        assert!(Config::load(Some(&path)).is_err());
        clear_all_env_vars();

        std::env::set_var("GHDOCS_THRESHOLD", "0");
        assert!(Config::load(Some(&path)).is_err());
        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load_omits_token() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        let original = Config {
            owner: "acme".to_string(),
            token: Some("secret".to_string()),
            resolver: ResolverConfig::new(4, 1).unwrap(),
            ..Config::default()
        };
        original.save(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("secret"));

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.owner, "acme");
        assert_eq!(loaded.resolver, original.resolver);
        assert!(loaded.token.is_none());
    }
}
