//! Typed translate and rewrite options.
//!
//! Every enum serializes to the exact wire value DeepL expects, so the same
//! types are used in the config file, on the command line and in request
//! bodies.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output register for a translation. `Default` lets the service decide and
/// is never transmitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Formality {
    #[default]
    Default,
    More,
    Less,
    PreferMore,
    PreferLess,
}

impl Formality {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::More => "more",
            Self::Less => "less",
            Self::PreferMore => "prefer_more",
            Self::PreferLess => "prefer_less",
        }
    }

    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}

/// Quality/latency hint for the translation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum ModelType {
    LatencyOptimized,
    QualityOptimized,
    PreferQualityOptimized,
}

impl ModelType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LatencyOptimized => "latency_optimized",
            Self::QualityOptimized => "quality_optimized",
            Self::PreferQualityOptimized => "prefer_quality_optimized",
        }
    }
}

/// Sentence splitting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum SplitSentences {
    /// No splitting at all.
    #[serde(rename = "0")]
    #[value(name = "0")]
    Off,
    /// Split on punctuation and newlines.
    #[serde(rename = "1")]
    #[value(name = "1")]
    On,
    /// Split on punctuation only.
    #[serde(rename = "nonewlines")]
    #[value(name = "nonewlines")]
    NoNewlines,
}

impl SplitSentences {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "0",
            Self::On => "1",
            Self::NoNewlines => "nonewlines",
        }
    }
}

/// Markup the service should respect while translating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum TagHandling {
    Xml,
    Html,
}

impl TagHandling {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Html => "html",
        }
    }
}

/// Writing style for rephrasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum WritingStyle {
    #[default]
    Default,
    Academic,
    Business,
    Casual,
    Simple,
    PreferAcademic,
    PreferBusiness,
    PreferCasual,
    PreferSimple,
}

impl WritingStyle {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Academic => "academic",
            Self::Business => "business",
            Self::Casual => "casual",
            Self::Simple => "simple",
            Self::PreferAcademic => "prefer_academic",
            Self::PreferBusiness => "prefer_business",
            Self::PreferCasual => "prefer_casual",
            Self::PreferSimple => "prefer_simple",
        }
    }

    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }

    /// The strict variant, which the service applies without falling back to
    /// a similar style.
    pub const fn strict(self) -> Self {
        match self {
            Self::PreferAcademic => Self::Academic,
            Self::PreferBusiness => Self::Business,
            Self::PreferCasual => Self::Casual,
            Self::PreferSimple => Self::Simple,
            other => other,
        }
    }
}

/// Tone for rephrasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Default,
    Confident,
    Diplomatic,
    Enthusiastic,
    Friendly,
    PreferConfident,
    PreferDiplomatic,
    PreferEnthusiastic,
    PreferFriendly,
}

impl Tone {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Confident => "confident",
            Self::Diplomatic => "diplomatic",
            Self::Enthusiastic => "enthusiastic",
            Self::Friendly => "friendly",
            Self::PreferConfident => "prefer_confident",
            Self::PreferDiplomatic => "prefer_diplomatic",
            Self::PreferEnthusiastic => "prefer_enthusiastic",
            Self::PreferFriendly => "prefer_friendly",
        }
    }

    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }

    pub const fn strict(self) -> Self {
        match self {
            Self::PreferConfident => Self::Confident,
            Self::PreferDiplomatic => Self::Diplomatic,
            Self::PreferEnthusiastic => Self::Enthusiastic,
            Self::PreferFriendly => Self::Friendly,
            other => other,
        }
    }
}

/// Fully resolved options for one translate call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    pub target_lang: String,
    pub source_lang: Option<String>,
    pub formality: Option<Formality>,
    pub model_type: Option<ModelType>,
    pub split_sentences: Option<SplitSentences>,
    pub preserve_formatting: bool,
    pub context: Option<String>,
    pub glossary_id: Option<String>,
    pub tag_handling: Option<TagHandling>,
    pub outline_detection: Option<bool>,
    pub non_splitting_tags: Vec<String>,
    pub splitting_tags: Vec<String>,
    pub ignore_tags: Vec<String>,
    pub show_billed_characters: bool,
}

impl TranslateOptions {
    pub fn new(target_lang: impl Into<String>) -> Self {
        Self {
            target_lang: target_lang.into(),
            ..Self::default()
        }
    }
}

/// Outcome of a translate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateResult {
    pub text: String,
    pub detected_source_language: String,
    pub billed_characters: Option<u64>,
}

/// Fully resolved options for one rephrase call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteOptions {
    pub target_lang: String,
    pub writing_style: Option<WritingStyle>,
    pub tone: Option<Tone>,
}

impl RewriteOptions {
    pub fn new(target_lang: impl Into<String>) -> Self {
        Self {
            target_lang: target_lang.into(),
            ..Self::default()
        }
    }
}
