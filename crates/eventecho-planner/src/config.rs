use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use eventecho_search::{IdfWeighting, IndexOptions, DEFAULT_MAX_VOCAB_SIZE};

/// Default Hugging Face inference endpoint (the model id is appended).
pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";

/// Default text-generation model.
pub const DEFAULT_MODEL: &str = "microsoft/Phi-3-mini-4k-instruct";

/// Configuration for eventecho.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (EVENTECHO_* prefix)
/// 3. Config file (~/.config/eventecho/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the vendor catalog CSV.
    ///
    /// Can be set via:
    /// - CLI: --catalog /path/to/vendors.csv
    /// - ENV: EVENTECHO_CATALOG_PATH
    /// - Config: catalog_path = "/path/to/vendors.csv"
    /// - Default: data/vendors.csv (relative to the working directory)
    pub catalog_path: PathBuf,

    /// Path to the booking log CSV.
    ///
    /// Can be set via:
    /// - CLI: --bookings /path/to/bookings.csv
    /// - ENV: EVENTECHO_BOOKINGS_PATH
    /// - Config: bookings_path = "/path/to/bookings.csv"
    /// - Default: ~/.local/share/eventecho/bookings.csv
    pub bookings_path: PathBuf,

    /// Hugging Face API token. Without it every plan uses the offline
    /// fallback.
    ///
    /// Can be set via:
    /// - ENV: EVENTECHO_HF_API_TOKEN
    /// - Config: hf_api_token = "hf_..."
    pub hf_api_token: Option<String>,

    /// Model id passed to the inference endpoint.
    pub model: String,

    /// Base URL of the inference endpoint.
    pub inference_url: String,

    /// Upper bound on generated tokens per plan.
    pub max_new_tokens: u32,

    /// Sampling temperature for plan generation.
    pub temperature: f64,

    /// Overall time budget for one generation call, retries included.
    pub request_timeout_secs: u64,

    /// Extra attempts after a transient generation failure.
    pub max_retries: usize,

    /// Cap on the number of indexed vocabulary terms.
    pub max_vocab_size: usize,

    /// Replacement stopword list. The built-in English list is used when
    /// unset.
    pub stopwords: Option<Vec<String>>,

    /// IDF weighting scheme: "smooth" or "classic".
    pub idf_weighting: String,

    /// Number of vendors recommended per plan.
    pub vendor_count: usize,

    /// Log level: trace, debug, info, warn, or error.
    pub log_level: String,

    /// Colourize log output.
    pub log_coloured: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data").join("vendors.csv"),
            bookings_path: default_bookings_path(),
            hf_api_token: None,
            model: DEFAULT_MODEL.to_string(),
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            max_new_tokens: 500,
            temperature: 0.7,
            request_timeout_secs: 30,
            max_retries: 1,
            max_vocab_size: DEFAULT_MAX_VOCAB_SIZE,
            stopwords: None,
            idf_weighting: "smooth".to_string(),
            vendor_count: 5,
            log_level: "info".to_string(),
            log_coloured: true,
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/eventecho/config.toml
    /// Reads environment variables with EVENTECHO_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("eventecho");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration, then apply CLI path overrides.
    pub fn load_with_overrides(
        catalog_path: Option<PathBuf>,
        bookings_path: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(path) = catalog_path {
            config.catalog_path = path;
        }
        if let Some(path) = bookings_path {
            config.bookings_path = path;
        }
        Ok(config)
    }

    /// Bound on a single generation call.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Index options derived from the vocabulary settings.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown IDF weighting name.
    pub fn index_options(&self) -> Result<IndexOptions> {
        let idf = IdfWeighting::parse(&self.idf_weighting).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown idf_weighting '{}' (expected 'smooth' or 'classic')",
                self.idf_weighting
            )
        })?;

        let mut options = IndexOptions::default()
            .with_max_vocab_size(self.max_vocab_size)
            .with_idf(idf);
        if let Some(stopwords) = &self.stopwords {
            options = options.with_stopwords(stopwords);
        }
        Ok(options)
    }

    /// The API token, if one is set and non-blank.
    #[must_use]
    pub fn api_token(&self) -> Option<&str> {
        self.hf_api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Get the default booking log path.
///
/// Returns: ~/.local/share/eventecho/bookings.csv (or platform equivalent)
fn default_bookings_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eventecho")
        .join("bookings.csv")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/eventecho/config.toml
/// - macOS: ~/Library/Application Support/eventecho/config.toml
/// - Windows: %APPDATA%\eventecho\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eventecho")
        .join("config.toml")
}

/// Keys accepted by `config get` / `config set`.
pub const KNOWN_KEYS: &[&str] = &[
    "catalog_path",
    "bookings_path",
    "hf_api_token",
    "model",
    "inference_url",
    "max_new_tokens",
    "temperature",
    "request_timeout_secs",
    "max_retries",
    "max_vocab_size",
    "stopwords",
    "idf_weighting",
    "vendor_count",
    "log_level",
    "log_coloured",
];

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# EventEcho Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (EVENTECHO_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Vendor catalog (CSV with name, category, location, services columns)
#
# Can also be set via:
# - CLI: eventecho --catalog /path/to/vendors.csv plan
# - Environment: EVENTECHO_CATALOG_PATH=/path/to/vendors.csv
#catalog_path = "data/vendors.csv"

# Booking log, created on the first flagged event
#
# Default: Platform-specific data directory
#bookings_path = "/path/to/bookings.csv"

# Hugging Face API token for plan generation
# Without a token every plan is built from the offline template.
#
# Can also be set via:
# - Environment: EVENTECHO_HF_API_TOKEN=hf_your_token_here
#hf_api_token = "hf_your_token_here"

# Text-generation model and endpoint
#model = "microsoft/Phi-3-mini-4k-instruct"
#inference_url = "https://api-inference.huggingface.co/models"

# Generation parameters
#max_new_tokens = 500
#temperature = 0.7

# Time budget for one generation call (seconds), and retries after
# transient failures (rate limiting, server errors)
#request_timeout_secs = 30
#max_retries = 1

# Vendor index
#max_vocab_size = 5000
#idf_weighting = "smooth"
#stopwords = ["a", "an", "the"]

# Vendors recommended per plan
#vendor_count = 5

# Logging
#log_level = "info"
#log_coloured = true
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalog_path, PathBuf::from("data").join("vendors.csv"));
        assert!(!config.bookings_path.as_os_str().is_empty());
        assert!(config.hf_api_token.is_none());
        assert_eq!(config.max_new_tokens, 500);
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.max_vocab_size, 5000);
        assert_eq!(config.vendor_count, 5);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_with_overrides() {
        let catalog = PathBuf::from("/tmp/vendors.csv");
        let bookings = PathBuf::from("/tmp/bookings.csv");
        let config = Config::load_with_overrides(Some(catalog.clone()), Some(bookings.clone())).unwrap();
        assert_eq!(config.catalog_path, catalog);
        assert_eq!(config.bookings_path, bookings);
    }

    #[test]
    fn test_api_token_ignores_blank() {
        let mut config = Config::default();
        config.hf_api_token = Some("   ".to_string());
        assert!(config.api_token().is_none());
        config.hf_api_token = Some("hf_abc".to_string());
        assert_eq!(config.api_token(), Some("hf_abc"));
    }

    #[test]
    fn test_index_options() {
        let mut config = Config::default();
        config.max_vocab_size = 42;
        config.idf_weighting = "classic".to_string();
        config.stopwords = Some(vec!["venue".to_string()]);
        let options = config.index_options().unwrap();
        assert_eq!(options.max_vocab_size, 42);
        assert_eq!(options.idf, IdfWeighting::Classic);
        assert!(options.tokenizer.is_stopword("venue"));
        assert!(!options.tokenizer.is_stopword("the"));
    }

    #[test]
    fn test_unknown_idf_weighting() {
        let mut config = Config::default();
        config.idf_weighting = "bm25".to_string();
        assert!(config.index_options().is_err());
    }

    #[test]
    fn test_example_config_mentions_every_key() {
        let example = example_config();
        for key in KNOWN_KEYS {
            assert!(example.contains(key), "example config is missing {key}");
        }
    }

    #[test]
    fn test_known_keys_cover_every_setting() {
        let settings = serde_json::to_value(Config::default()).unwrap();
        let fields = settings.as_object().unwrap();
        assert_eq!(fields.len(), KNOWN_KEYS.len());
        for field in fields.keys() {
            assert!(KNOWN_KEYS.contains(&field.as_str()), "{field} is not a known key");
        }
    }
}
