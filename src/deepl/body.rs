//! JSON request bodies with selective field inclusion.
//!
//! DeepL treats the presence of a field as an explicit override, so a field is
//! appended only when it carries a real value. Nothing is ever sent as
//! `null`, an empty string, an empty list, or a `"default"` sentinel.

use serde_json::{Map, Value};

use super::options::{RewriteOptions, TranslateOptions};

/// A JSON object that only grows through predicate-guarded inserts.
#[derive(Debug, Default, Clone)]
pub struct RequestBody {
    fields: Map<String, Value>,
}

impl RequestBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always inserts the field.
    #[must_use]
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Inserts the field when `include` holds.
    #[must_use]
    pub fn field_if(self, include: bool, key: &str, value: impl Into<Value>) -> Self {
        if include { self.field(key, value) } else { self }
    }

    /// Inserts a value that is present.
    #[must_use]
    pub fn optional<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    /// Inserts a string that is present and not empty.
    #[must_use]
    pub fn non_empty(self, key: &str, value: Option<&str>) -> Self {
        self.optional(key, value.filter(|v| !v.is_empty()))
    }

    /// Inserts a list that has at least one element.
    #[must_use]
    pub fn non_empty_list(self, key: &str, values: &[String]) -> Self {
        self.field_if(!values.is_empty(), key, values.to_vec())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Builds the `/translate` body.
pub fn translate_body(text: &str, options: &TranslateOptions) -> Value {
    RequestBody::new()
        .field("text", vec![text.to_string()])
        .field("target_lang", options.target_lang.as_str())
        .non_empty("source_lang", options.source_lang.as_deref())
        .optional(
            "formality",
            options
                .formality
                .filter(|f| !f.is_default())
                .map(|f| f.as_str()),
        )
        .optional("model_type", options.model_type.map(|m| m.as_str()))
        .optional("split_sentences", options.split_sentences.map(|s| s.as_str()))
        .field_if(options.preserve_formatting, "preserve_formatting", true)
        .non_empty("context", options.context.as_deref())
        .non_empty("glossary_id", options.glossary_id.as_deref())
        .optional("tag_handling", options.tag_handling.map(|t| t.as_str()))
        .optional("outline_detection", options.outline_detection)
        .non_empty_list("non_splitting_tags", &options.non_splitting_tags)
        .non_empty_list("splitting_tags", &options.splitting_tags)
        .non_empty_list("ignore_tags", &options.ignore_tags)
        .field_if(options.show_billed_characters, "show_billed_characters", true)
        .into_value()
}

/// Builds the `/write/rephrase` body. The target language is upper-cased.
pub fn rewrite_body(text: &str, options: &RewriteOptions) -> Value {
    RequestBody::new()
        .field("text", vec![text.to_string()])
        .field("target_lang", options.target_lang.to_uppercase())
        .optional(
            "writing_style",
            options
                .writing_style
                .filter(|s| !s.is_default())
                .map(|s| s.as_str()),
        )
        .optional(
            "tone",
            options.tone.filter(|t| !t.is_default()).map(|t| t.as_str()),
        )
        .into_value()
}

/// Builds the `POST /glossaries` body.
pub fn create_glossary_body(
    name: &str,
    source_lang: &str,
    target_lang: &str,
    entries_tsv: &str,
) -> Value {
    RequestBody::new()
        .field("name", name)
        .field("source_lang", source_lang)
        .field("target_lang", target_lang)
        .field("entries", entries_tsv)
        .field("entries_format", "tsv")
        .into_value()
}
