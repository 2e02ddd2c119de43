//! Merging of per-call overrides with stored preferences.
//!
//! An override always wins; otherwise the preference value is used. Neither
//! input is modified.

use crate::deepl::{
    Formality, ModelType, RewriteOptions, SplitSentences, TagHandling, Tone, TranslateOptions,
    WritingStyle,
};

use super::Preferences;

/// Per-call translate settings, all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslateOverrides {
    pub target_lang: Option<String>,
    pub source_lang: Option<String>,
    pub formality: Option<Formality>,
    pub model_type: Option<ModelType>,
    pub split_sentences: Option<SplitSentences>,
    pub preserve_formatting: Option<bool>,
    pub context: Option<String>,
    pub glossary_id: Option<String>,
    pub tag_handling: Option<TagHandling>,
    pub outline_detection: Option<bool>,
    pub non_splitting_tags: Vec<String>,
    pub splitting_tags: Vec<String>,
    pub ignore_tags: Vec<String>,
}

/// Per-call rewrite settings, all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteOverrides {
    pub target_lang: Option<String>,
    pub writing_style: Option<WritingStyle>,
    pub tone: Option<Tone>,
    /// Use the strict form of `prefer_*` styles and tones.
    pub strict: bool,
}

/// Resolves the options for one translate call.
///
/// Billed-character reporting is an account-level display preference and is
/// not overridable per call.
pub fn resolve_translate_options(
    overrides: &TranslateOverrides,
    preferences: &Preferences,
) -> TranslateOptions {
    let defaults = &preferences.translate;

    TranslateOptions {
        target_lang: overrides
            .target_lang
            .clone()
            .unwrap_or_else(|| defaults.target_lang.clone()),
        source_lang: overrides.source_lang.clone(),
        formality: Some(overrides.formality.unwrap_or(defaults.formality)),
        model_type: overrides.model_type.or(defaults.model_type),
        split_sentences: overrides.split_sentences,
        preserve_formatting: overrides
            .preserve_formatting
            .unwrap_or(defaults.preserve_formatting),
        context: overrides.context.clone(),
        glossary_id: overrides.glossary_id.clone(),
        tag_handling: overrides.tag_handling,
        outline_detection: overrides.outline_detection,
        non_splitting_tags: overrides.non_splitting_tags.clone(),
        splitting_tags: overrides.splitting_tags.clone(),
        ignore_tags: overrides.ignore_tags.clone(),
        show_billed_characters: defaults.show_billed_characters,
    }
}

/// Resolves the options for one rephrase call.
pub fn resolve_rewrite_options(
    overrides: &RewriteOverrides,
    preferences: &Preferences,
) -> RewriteOptions {
    let defaults = &preferences.rewrite;

    let writing_style = overrides.writing_style.unwrap_or(defaults.writing_style);
    let tone = overrides.tone.unwrap_or(defaults.tone);

    let (writing_style, tone) = if overrides.strict {
        (writing_style.strict(), tone.strict())
    } else {
        (writing_style, tone)
    };

    RewriteOptions {
        target_lang: overrides
            .target_lang
            .clone()
            .unwrap_or_else(|| defaults.target_lang.clone()),
        writing_style: Some(writing_style),
        tone: Some(tone),
    }
}
