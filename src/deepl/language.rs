//! DeepL language codes and their display names.

use clap::ValueEnum;

use crate::ui::Style;

/// Every code DeepL reports or accepts, upper-cased, with its display name.
pub const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("BG", "Bulgarian"),
    ("CS", "Czech"),
    ("DA", "Danish"),
    ("DE", "German"),
    ("EL", "Greek"),
    ("EN", "English"),
    ("EN-GB", "English (UK)"),
    ("EN-US", "English (US)"),
    ("ES", "Spanish"),
    ("ET", "Estonian"),
    ("FI", "Finnish"),
    ("FR", "French"),
    ("HU", "Hungarian"),
    ("ID", "Indonesian"),
    ("IT", "Italian"),
    ("JA", "Japanese"),
    ("KO", "Korean"),
    ("LT", "Lithuanian"),
    ("LV", "Latvian"),
    ("NB", "Norwegian"),
    ("NL", "Dutch"),
    ("PL", "Polish"),
    ("PT", "Portuguese"),
    ("PT-BR", "Portuguese (BR)"),
    ("PT-PT", "Portuguese (PT)"),
    ("RO", "Romanian"),
    ("RU", "Russian"),
    ("SK", "Slovak"),
    ("SL", "Slovenian"),
    ("SV", "Swedish"),
    ("TR", "Turkish"),
    ("UK", "Ukrainian"),
    ("ZH", "Chinese"),
    ("ZH-HANS", "Chinese (Simplified)"),
    ("ZH-HANT", "Chinese (Traditional)"),
];

/// Codes accepted as a translation source.
pub const SOURCE_LANGUAGES: &[&str] = &[
    "BG", "CS", "DA", "DE", "EL", "EN", "ES", "ET", "FI", "FR", "HU", "ID", "IT", "JA", "KO", "LT",
    "LV", "NB", "NL", "PL", "PT", "RO", "RU", "SK", "SL", "SV", "TR", "UK", "ZH",
];

/// Codes accepted as a translation target.
pub const TARGET_LANGUAGES: &[&str] = &[
    "BG", "CS", "DA", "DE", "EL", "EN-GB", "EN-US", "ES", "ET", "FI", "FR", "HU", "ID", "IT", "JA",
    "KO", "LT", "LV", "NB", "NL", "PL", "PT-BR", "PT-PT", "RO", "RU", "SK", "SL", "SV", "TR", "UK",
    "ZH-HANS", "ZH-HANT",
];

/// Codes accepted by the rephrase endpoint.
pub const REWRITE_LANGUAGES: &[&str] = &[
    "en-US", "en-GB", "de", "es", "fr", "it", "pt-BR", "pt-PT",
];

/// Display name for a language code, matched case-insensitively.
///
/// Unknown codes are returned unchanged.
pub fn language_name(code: &str) -> &str {
    LANGUAGE_NAMES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map_or(code, |(_, name)| *name)
}

/// Which list `deepl languages` prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LanguageKind {
    Source,
    #[default]
    Target,
    Rewrite,
}

impl LanguageKind {
    pub const fn codes(self) -> &'static [&'static str] {
        match self {
            Self::Source => SOURCE_LANGUAGES,
            Self::Target => TARGET_LANGUAGES,
            Self::Rewrite => REWRITE_LANGUAGES,
        }
    }

    const fn title(self) -> &'static str {
        match self {
            Self::Source => "Source languages",
            Self::Target => "Target languages",
            Self::Rewrite => "Rewrite languages",
        }
    }
}

/// Prints one language list to stdout.
pub fn print_languages(kind: LanguageKind) {
    println!("{}", Style::header(kind.title()));
    for code in kind.codes() {
        println!(
            "  {:8} {}",
            Style::code(code),
            Style::secondary(language_name(code))
        );
    }
}
