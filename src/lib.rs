//! # deepl - DeepL from the command line
//!
//! `deepl` translates and rewrites text with the DeepL API and manages
//! glossaries. Input comes from an argument, a file, piped stdin, or the
//! clipboard; results go to stdout or back to the clipboard.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate an argument
//! deepl translate "Guten Morgen" --to EN-GB
//!
//! # Translate whatever is on the clipboard and copy the result back
//! deepl translate
//!
//! # Rewrite a file in a friendlier tone
//! deepl rewrite -f draft.txt --tone friendly
//!
//! # Create a glossary from tab-separated pairs
//! deepl glossary create --name Pets --from en --to de -f pets.tsv
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/deepl/config.toml`:
//!
//! ```toml
//! [auth]
//! api_type = "free"
//!
//! [translate]
//! target_lang = "EN-US"
//! formality = "prefer_less"
//!
//! [rewrite]
//! target_lang = "en-US"
//! tone = "friendly"
//! ```
//!
//! The API key is read from `DEEPL_API_KEY` or `auth.api_key`.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Preference file management and option resolution.
pub mod config;

/// DeepL API client, request bodies and language metadata.
pub mod deepl;

/// File system utilities.
pub mod fs;

/// Input acquisition from arguments, files, stdin and the clipboard.
pub mod input;

/// Global output configuration and result delivery.
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors, notifications).
pub mod ui;
