use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

const FREE_BASE_URL: &str = "https://api-free.deepl.com/v2";
const PRO_BASE_URL: &str = "https://api.deepl.com/v2";

/// DeepL account tier. Each tier has its own API host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum ApiTier {
    #[default]
    Free,
    Pro,
}

impl ApiTier {
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Free => FREE_BASE_URL,
            Self::Pro => PRO_BASE_URL,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
        }
    }
}

/// API key plus the base URL it is valid for.
///
/// Built fresh for every request; never stored on the client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    base_url: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, tier: ApiTier) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: tier.base_url().to_string(),
        }
    }

    /// Points the credentials at a custom base URL (proxies, test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path such as `/translate`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("DeepL-Auth-Key {}", self.api_key)
    }
}

// Keep the key out of logs and panics.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}
