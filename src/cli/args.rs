use clap::{Parser, Subcommand};

use crate::cli::commands::{RewriteArgs, TranslateArgs};
use crate::deepl::LanguageKind;

#[derive(Parser, Debug)]
#[command(name = "deepl")]
#[command(about = "Translate and rewrite text with DeepL")]
#[command(version)]
pub struct Args {
    /// Suppress success messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log requests to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate text (argument, file, stdin or clipboard)
    Translate(TranslateArgs),
    /// Rephrase text with DeepL Write
    Rewrite(RewriteArgs),
    /// Manage glossaries
    Glossary {
        #[command(subcommand)]
        command: GlossaryCommand,
    },
    /// List supported language codes
    Languages {
        /// Which list to print
        #[arg(short, long, value_enum, default_value_t)]
        kind: LanguageKind,
    },
    /// Configure API access and defaults
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

impl Command {
    /// Title shown when this command fails.
    pub const fn failure_title(&self) -> &'static str {
        match self {
            Self::Translate(_) => "Failed to translate",
            Self::Rewrite(_) => "Failed to rewrite",
            Self::Glossary { command } => command.failure_title(),
            Self::Languages { .. } => "Failed to list languages",
            Self::Configure { .. } => "Failed to configure",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum GlossaryCommand {
    /// List glossaries
    List {
        /// Only glossaries for this source language
        #[arg(long = "from")]
        from: Option<String>,

        /// Only glossaries usable for this target language
        #[arg(long = "to")]
        to: Option<String>,
    },
    /// Show a glossary and its entries
    Show {
        /// Glossary ID
        id: String,
    },
    /// Print or export the entries of a glossary as TSV
    Entries {
        /// Glossary ID
        id: String,

        /// Write entries to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Create a glossary from tab-separated entries
    Create {
        /// Glossary name
        #[arg(short, long)]
        name: Option<String>,

        /// Source language code
        #[arg(long = "from", default_value = "en")]
        from: String,

        /// Target language code
        #[arg(long = "to", default_value = "de")]
        to: String,

        /// TSV file with one `source<TAB>target` pair per line
        /// (reads stdin or opens an editor if not provided)
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Delete a glossary
    Delete {
        /// Glossary ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl GlossaryCommand {
    pub const fn failure_title(&self) -> &'static str {
        match self {
            Self::List { .. } | Self::Show { .. } | Self::Entries { .. } => {
                "Failed to load glossaries"
            }
            Self::Create { .. } => "Failed to create glossary",
            Self::Delete { .. } => "Failed to delete",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::deepl::{Formality, TagHandling};

    #[test]
    fn test_args_are_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_translate_flags_parse() {
        let args = Args::try_parse_from([
            "deepl",
            "translate",
            "Hallo",
            "-t",
            "EN-GB",
            "--formality",
            "prefer_less",
            "--preserve-formatting",
            "--tag-handling",
            "xml",
            "--ignore-tags",
            "x, y",
        ])
        .unwrap();

        let Command::Translate(translate) = args.command else {
            panic!("expected translate");
        };
        assert_eq!(translate.text.as_deref(), Some("Hallo"));
        assert_eq!(translate.to.as_deref(), Some("EN-GB"));
        assert_eq!(translate.formality, Some(Formality::PreferLess));
        assert_eq!(translate.preserve_formatting, Some(true));
        assert_eq!(translate.tag_handling, Some(TagHandling::Xml));
        assert_eq!(translate.ignore_tags, ["x", " y"]);
    }

    #[test]
    fn test_optional_bool_flag_accepts_value() {
        let args = Args::try_parse_from([
            "deepl",
            "translate",
            "--outline-detection=false",
            "--preserve-formatting=false",
        ])
        .unwrap();

        let Command::Translate(translate) = args.command else {
            panic!("expected translate");
        };
        assert_eq!(translate.outline_detection, Some(false));
        assert_eq!(translate.preserve_formatting, Some(false));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["deepl", "languages", "--kind", "rewrite", "-q"]).unwrap();
        assert!(args.quiet);
        assert!(matches!(
            args.command,
            Command::Languages {
                kind: LanguageKind::Rewrite
            }
        ));
    }

    #[test]
    fn test_failure_titles() {
        let args = Args::try_parse_from(["deepl", "glossary", "delete", "abc"]).unwrap();
        assert_eq!(args.command.failure_title(), "Failed to delete");

        let args = Args::try_parse_from(["deepl", "glossary", "create", "-n", "x"]).unwrap();
        assert_eq!(args.command.failure_title(), "Failed to create glossary");

        let args = Args::try_parse_from(["deepl", "rewrite", "text"]).unwrap();
        assert_eq!(args.command.failure_title(), "Failed to rewrite");
    }
}
