use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

use crate::deepl::{
    ApiTier, Credentials, CredentialsProvider, DeepLError, Formality, ModelType, Tone,
    WritingStyle,
};
use crate::fs::atomic_write;
use crate::paths;

/// Environment variable consulted for the API key when `api_key_env` is unset.
pub const DEFAULT_API_KEY_ENV: &str = "DEEPL_API_KEY";

/// The `[auth]` section: how to reach DeepL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// API key stored directly in config (not recommended).
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
    /// Account tier, which selects the API host.
    pub api_type: ApiTier,
    /// Base URL override, e.g. a proxy in front of DeepL.
    pub endpoint: Option<String>,
}

impl AuthConfig {
    pub fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// Gets the API key, preferring the environment variable over the config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(self.api_key_env())
            && !key.trim().is_empty()
        {
            return Some(key.trim().to_string());
        }
        self.api_key.clone().filter(|key| !key.trim().is_empty())
    }
}

/// The `[translate]` section: defaults for translate calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateDefaults {
    pub target_lang: String,
    pub formality: Formality,
    pub model_type: Option<ModelType>,
    pub preserve_formatting: bool,
    pub show_billed_characters: bool,
}

impl Default for TranslateDefaults {
    fn default() -> Self {
        Self {
            target_lang: "EN-US".to_string(),
            formality: Formality::Default,
            model_type: None,
            preserve_formatting: false,
            show_billed_characters: false,
        }
    }
}

/// The `[rewrite]` section: defaults for rephrase calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteDefaults {
    pub target_lang: String,
    pub writing_style: WritingStyle,
    pub tone: Tone,
}

impl Default for RewriteDefaults {
    fn default() -> Self {
        Self {
            target_lang: "en-US".to_string(),
            writing_style: WritingStyle::Default,
            tone: Tone::Default,
        }
    }
}

/// The complete preference snapshot.
///
/// Corresponds to `~/.config/deepl/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub auth: AuthConfig,
    pub translate: TranslateDefaults,
    pub rewrite: RewriteDefaults,
}

impl Preferences {
    /// Builds credentials from this snapshot.
    pub fn credentials(&self) -> Result<Credentials, DeepLError> {
        let api_key = self
            .auth
            .get_api_key()
            .ok_or_else(|| DeepLError::MissingApiKey {
                env_var: self.auth.api_key_env().to_string(),
            })?;

        let credentials = Credentials::new(api_key, self.auth.api_type);
        Ok(match self.auth.endpoint.as_deref().filter(|e| !e.is_empty()) {
            Some(endpoint) => credentials.with_base_url(endpoint),
            None => credentials,
        })
    }
}

/// Read-only access to the current preferences.
pub trait PreferenceStore {
    fn preferences(&self) -> Result<Preferences>;
}

impl PreferenceStore for Preferences {
    fn preferences(&self) -> Result<Preferences> {
        Ok(self.clone())
    }
}

impl CredentialsProvider for Preferences {
    fn credentials(&self) -> Result<Credentials, DeepLError> {
        Self::credentials(self)
    }
}

/// Manages loading and saving the configuration file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/deepl/config.toml`
    /// or `~/.config/deepl/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<Preferences> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })
    }

    /// Loads the config file, or the defaults when it does not exist yet.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<Preferences> {
        match fs::metadata(&self.config_path) {
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.config_path.display(), "no config file, using defaults");
                Ok(Preferences::default())
            }
            _ => self.load(),
        }
    }

    pub fn save(&self, preferences: &Preferences) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(preferences).context("Failed to serialize config")?;

        atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }
}

impl ConfigManager {
    /// Like [`load_or_default`](Self::load_or_default), with failures typed
    /// as [`DeepLError::Preferences`].
    fn load_preferences(&self) -> Result<Preferences, DeepLError> {
        self.load_or_default()
            .map_err(|e| DeepLError::Preferences(format!("{e:#}")))
    }
}

impl PreferenceStore for ConfigManager {
    fn preferences(&self) -> Result<Preferences> {
        Ok(self.load_preferences()?)
    }
}

// Re-reads the file for every request so edits take effect immediately.
impl CredentialsProvider for ConfigManager {
    fn credentials(&self) -> Result<Credentials, DeepLError> {
        self.load_preferences()?.credentials()
    }
}
