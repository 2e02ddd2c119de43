//! Error types returned by the DeepL client.

use std::fmt;

use thiserror::Error;

/// A non-success HTTP response from the DeepL API.
///
/// The display message depends on the status code only. The body is kept for
/// diagnostics and is never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body, when it was captured and could be read.
    pub body: Option<String>,
}

impl ApiError {
    pub const fn new(status: u16) -> Self {
        Self { status, body: None }
    }

    pub const fn with_body(status: u16, body: Option<String>) -> Self {
        Self { status, body }
    }

    /// Human-readable cause for this status.
    pub fn message(&self) -> String {
        status_message(self.status)
    }

    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Maps a status code to the message shown to the user.
pub fn status_message(status: u16) -> String {
    let known = match status {
        400 => "Bad request. Check your parameters.",
        403 => "Authorization failed. Check your API key.",
        404 => "Resource not found.",
        413 => "Request too large. Text exceeds size limit.",
        429 | 529 => "Too many requests. Please wait.",
        456 => "Quota exceeded. Check your DeepL plan.",
        500 => "Internal server error.",
        503 => "Service temporarily unavailable.",
        _ => return format!("DeepL API error: {status}"),
    };
    known.to_string()
}

/// Everything that can go wrong while talking to DeepL.
#[derive(Debug, Error)]
pub enum DeepLError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(
        "Missing DeepL API key\n\n\
         Set the {env_var} environment variable or run 'deepl configure'"
    )]
    MissingApiKey { env_var: String },

    #[error("Failed to load preferences: {0}")]
    Preferences(String),

    #[error("Failed to connect to DeepL: {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("DeepL returned no {0}")]
    EmptyResponse(&'static str),
}

impl DeepLError {
    /// Returns the API error if this failure came from an HTTP status.
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_messages() {
        let table = [
            (400, "Bad request. Check your parameters."),
            (403, "Authorization failed. Check your API key."),
            (404, "Resource not found."),
            (413, "Request too large. Text exceeds size limit."),
            (429, "Too many requests. Please wait."),
            (456, "Quota exceeded. Check your DeepL plan."),
            (500, "Internal server error."),
            (503, "Service temporarily unavailable."),
            (529, "Too many requests. Please wait."),
        ];

        for (status, expected) in table {
            assert_eq!(ApiError::new(status).to_string(), expected, "status {status}");
        }
    }

    #[test]
    fn test_unknown_status_falls_back_to_generic_message() {
        for status in [401, 402, 418, 502, 504, 599] {
            let message = ApiError::new(status).message();
            assert_eq!(message, format!("DeepL API error: {status}"));
        }
    }

    #[test]
    fn test_body_does_not_change_message() {
        let plain = ApiError::new(456);
        let with_body = ApiError::with_body(456, Some(r#"{"message":"Bad request"}"#.to_string()));
        assert_eq!(plain.to_string(), with_body.to_string());
    }

    #[test]
    fn test_deepl_error_exposes_api_error() {
        let err = DeepLError::from(ApiError::new(404));
        assert!(err.as_api().is_some_and(ApiError::is_not_found));
        assert_eq!(err.to_string(), "Resource not found.");

        let err = DeepLError::EmptyResponse("translations");
        assert!(err.as_api().is_none());
    }
}
