//! Conversion of a command error into one user-facing failure.

use anyhow::Error;

use crate::deepl::{DeepLError, GlossaryValidationError};
use crate::input::InputError;
use crate::ui::Notifier;

/// The class a failure belongs to, which decides the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Nothing to work on.
    Input,
    /// Rejected before any request was sent.
    Validation,
    /// Credentials or preferences are unusable.
    Config,
    /// DeepL answered with an error status.
    Api,
    /// Anything else: transport, decoding, clipboard, local I/O.
    Unclassified,
}

/// A classified failure, ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub title: String,
    pub message: Option<String>,
}

impl Failure {
    /// Classifies `err`, using `fallback_title` for unclassified errors.
    ///
    /// The whole context chain is searched, so errors wrapped with
    /// `.context()` are still recognized.
    pub fn classify(err: &Error, fallback_title: &str) -> Self {
        for cause in err.chain() {
            if let Some(input) = cause.downcast_ref::<InputError>() {
                return Self {
                    kind: FailureKind::Input,
                    title: input.to_string(),
                    message: None,
                };
            }

            if let Some(validation) = cause.downcast_ref::<GlossaryValidationError>() {
                return Self {
                    kind: FailureKind::Validation,
                    title: fallback_title.to_string(),
                    message: Some(validation.to_string()),
                };
            }

            if let Some(deepl) = cause.downcast_ref::<DeepLError>() {
                return Self::from_deepl(deepl, fallback_title);
            }
        }

        Self {
            kind: FailureKind::Unclassified,
            title: fallback_title.to_string(),
            message: Some(format!("{err:#}")),
        }
    }

    fn from_deepl(err: &DeepLError, fallback_title: &str) -> Self {
        match err {
            DeepLError::Api(api) => Self {
                kind: FailureKind::Api,
                title: api.message(),
                message: api.body.clone().filter(|b| !b.trim().is_empty()),
            },
            DeepLError::MissingApiKey { .. } | DeepLError::Preferences(_) => Self {
                kind: FailureKind::Config,
                title: fallback_title.to_string(),
                message: Some(err.to_string()),
            },
            DeepLError::Transport { source, .. } | DeepLError::Decode { source, .. } => Self {
                kind: FailureKind::Unclassified,
                title: fallback_title.to_string(),
                message: Some(format!("{err}: {source}")),
            },
            DeepLError::EmptyResponse(_) => Self {
                kind: FailureKind::Unclassified,
                title: fallback_title.to_string(),
                message: Some(err.to_string()),
            },
        }
    }

    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self.kind {
            FailureKind::Input => exitcode::NOINPUT,
            FailureKind::Validation => exitcode::DATAERR,
            FailureKind::Config => exitcode::CONFIG,
            FailureKind::Api => exitcode::UNAVAILABLE,
            FailureKind::Unclassified => exitcode::SOFTWARE,
        }
    }

    pub fn notify(&self, notifier: &impl Notifier) {
        notifier.failure(&self.title, self.message.as_deref());
    }
}
