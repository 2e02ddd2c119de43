use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::debug;

use super::{DeliveryTitles, clean_list, deliver_result, non_blank};
use crate::config::{
    ConfigManager, PreferenceStore, TranslateOverrides, resolve_translate_options,
};
use crate::deepl::{
    CredentialsProvider, DeepLClient, Formality, ModelType, SplitSentences, TagHandling,
    TranslateResult, language_name,
};
use crate::input::{InputReader, SystemClipboard, acquire_text};
use crate::output::{Delivery, OutputSink, TerminalOutput};
use crate::ui::{Notifier, Spinner, TerminalNotifier};

const TITLES: DeliveryTitles = DeliveryTitles {
    paste: "Text translated",
    copy: "Copied to clipboard",
};

#[derive(ClapArgs, Debug, Default)]
pub struct TranslateArgs {
    /// Text to translate (reads --file, stdin or the clipboard if not provided)
    pub text: Option<String>,

    /// File to translate
    #[arg(short, long)]
    pub file: Option<String>,

    /// Target language code (e.g., DE, EN-GB, JA)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Source language code (detected if not provided)
    #[arg(short = 's', long = "from")]
    pub from: Option<String>,

    #[arg(long, value_enum)]
    pub formality: Option<Formality>,

    /// Model type
    #[arg(long = "model", value_enum)]
    pub model: Option<ModelType>,

    #[arg(long, value_enum)]
    pub split_sentences: Option<SplitSentences>,

    /// Keep the original formatting
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub preserve_formatting: Option<bool>,

    /// Extra context that influences the translation but is not translated
    #[arg(long)]
    pub context: Option<String>,

    /// Glossary ID to apply
    #[arg(long = "glossary")]
    pub glossary: Option<String>,

    #[arg(long, value_enum)]
    pub tag_handling: Option<TagHandling>,

    /// Detect XML structure automatically (xml tag handling only)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub outline_detection: Option<bool>,

    /// Tags that never split sentences (xml tag handling only)
    #[arg(long, value_delimiter = ',')]
    pub non_splitting_tags: Vec<String>,

    /// Tags that always split sentences (xml tag handling only)
    #[arg(long, value_delimiter = ',')]
    pub splitting_tags: Vec<String>,

    /// Tags whose content is not translated (xml tag handling only)
    #[arg(long, value_delimiter = ',')]
    pub ignore_tags: Vec<String>,

    /// Copy the result to the clipboard instead of printing it
    #[arg(short, long)]
    pub copy: bool,
}

impl TranslateArgs {
    /// Per-call overrides from the flags.
    ///
    /// Outline detection and the tag lists are dropped unless tag handling
    /// is `xml`.
    pub fn overrides(&self) -> TranslateOverrides {
        let xml = self.tag_handling == Some(TagHandling::Xml);

        TranslateOverrides {
            target_lang: non_blank(self.to.as_deref()),
            source_lang: non_blank(self.from.as_deref()),
            formality: self.formality,
            model_type: self.model,
            split_sentences: self.split_sentences,
            preserve_formatting: self.preserve_formatting,
            context: non_blank(self.context.as_deref()),
            glossary_id: non_blank(self.glossary.as_deref()),
            tag_handling: self.tag_handling,
            outline_detection: self.outline_detection.filter(|_| xml),
            non_splitting_tags: if xml { clean_list(&self.non_splitting_tags) } else { Vec::new() },
            splitting_tags: if xml { clean_list(&self.splitting_tags) } else { Vec::new() },
            ignore_tags: if xml { clean_list(&self.ignore_tags) } else { Vec::new() },
        }
    }
}

pub async fn run_translate(args: TranslateArgs) -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut clipboard = SystemClipboard::new();

    let selection = InputReader::read_selection(args.text.as_deref(), args.file.as_deref())?;
    let input = acquire_text(selection, &mut clipboard)?;

    let client = DeepLClient::new(&manager);
    let result = {
        let _spinner = Spinner::new("Translating...");
        translate_text(&client, &manager, &input.text, &args.overrides()).await?
    };

    let delivery = Delivery::for_origin(input.origin, args.copy);
    let mut output = TerminalOutput::new(&mut clipboard);
    deliver_translation(&result, delivery, &mut output, &TerminalNotifier)
}

/// Resolves options against the current preferences and translates `text`.
pub async fn translate_text<P: CredentialsProvider>(
    client: &DeepLClient<P>,
    store: &impl PreferenceStore,
    text: &str,
    overrides: &TranslateOverrides,
) -> Result<TranslateResult> {
    let preferences = store.preferences()?;
    let options = resolve_translate_options(overrides, &preferences);
    debug!(target_lang = %options.target_lang, chars = text.chars().count(), "translating");

    Ok(client.translate(text, &options).await?)
}

pub fn deliver_translation(
    result: &TranslateResult,
    delivery: Delivery,
    output: &mut impl OutputSink,
    notifier: &impl Notifier,
) -> Result<()> {
    let message = success_message(result);
    deliver_result(&result.text, delivery, TITLES, Some(&message), output, notifier)
}

/// `From German`, plus the billed character count when DeepL reported a
/// non-zero one.
pub fn success_message(result: &TranslateResult) -> String {
    let from = language_name(&result.detected_source_language);
    match result.billed_characters {
        Some(chars) if chars > 0 => format!("From {from} ({chars} chars)"),
        _ => format!("From {from}"),
    }
}
