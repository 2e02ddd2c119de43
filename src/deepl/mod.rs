//! DeepL API client, request building and language metadata.

mod body;
mod client;
mod credentials;
mod error;
mod glossary;
mod language;
mod options;

pub use body::{RequestBody, create_glossary_body, rewrite_body, translate_body};
pub use client::{CredentialsProvider, DeepLClient};
pub use credentials::{ApiTier, Credentials};
pub use error::{ApiError, DeepLError, status_message};
pub use glossary::{
    FieldIssue, Glossary, GlossaryEntry, GlossaryField, GlossaryValidationError, entries_to_tsv,
    parse_entries, validate_glossary,
};
pub use language::{
    LANGUAGE_NAMES, LanguageKind, REWRITE_LANGUAGES, SOURCE_LANGUAGES, TARGET_LANGUAGES,
    language_name, print_languages,
};
pub use options::{
    Formality, ModelType, RewriteOptions, SplitSentences, TagHandling, Tone, TranslateOptions,
    TranslateResult, WritingStyle,
};
