//! Preference file management and option resolution.

mod manager;
mod resolve;

pub use manager::{
    AuthConfig, ConfigManager, DEFAULT_API_KEY_ENV, PreferenceStore, Preferences,
    RewriteDefaults, TranslateDefaults,
};
pub use resolve::{
    RewriteOverrides, TranslateOverrides, resolve_rewrite_options, resolve_translate_options,
};
