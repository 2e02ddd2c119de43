use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::debug;

use super::{DeliveryTitles, deliver_result, non_blank};
use crate::config::{ConfigManager, PreferenceStore, RewriteOverrides, resolve_rewrite_options};
use crate::deepl::{CredentialsProvider, DeepLClient, Tone, WritingStyle};
use crate::input::{InputReader, SystemClipboard, acquire_text};
use crate::output::{Delivery, OutputSink, TerminalOutput};
use crate::ui::{Notifier, Spinner, TerminalNotifier};

const TITLES: DeliveryTitles = DeliveryTitles {
    paste: "Text replaced",
    copy: "Copied to clipboard",
};

#[derive(ClapArgs, Debug, Default)]
pub struct RewriteArgs {
    /// Text to rewrite (reads --file, stdin or the clipboard if not provided)
    pub text: Option<String>,

    /// File to rewrite
    #[arg(short, long)]
    pub file: Option<String>,

    /// Target language code (e.g., en-US, de, fr)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Writing style
    #[arg(long = "style", value_enum)]
    pub style: Option<WritingStyle>,

    #[arg(long, value_enum)]
    pub tone: Option<Tone>,

    /// Enforce `prefer_*` styles and tones strictly
    #[arg(long)]
    pub strict: bool,

    /// Copy the result to the clipboard instead of printing it
    #[arg(short, long)]
    pub copy: bool,
}

impl RewriteArgs {
    pub fn overrides(&self) -> RewriteOverrides {
        RewriteOverrides {
            target_lang: non_blank(self.to.as_deref()),
            writing_style: self.style,
            tone: self.tone,
            strict: self.strict,
        }
    }
}

pub async fn run_rewrite(args: RewriteArgs) -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut clipboard = SystemClipboard::new();

    let selection = InputReader::read_selection(args.text.as_deref(), args.file.as_deref())?;
    let input = acquire_text(selection, &mut clipboard)?;

    let client = DeepLClient::new(&manager);
    let rewritten = {
        let _spinner = Spinner::new("Rewriting...");
        rewrite_text(&client, &manager, &input.text, &args.overrides()).await?
    };

    let delivery = Delivery::for_origin(input.origin, args.copy);
    let mut output = TerminalOutput::new(&mut clipboard);
    deliver_rewrite(&rewritten, delivery, &mut output, &TerminalNotifier)
}

/// Resolves options against the current preferences and rephrases `text`.
pub async fn rewrite_text<P: CredentialsProvider>(
    client: &DeepLClient<P>,
    store: &impl PreferenceStore,
    text: &str,
    overrides: &RewriteOverrides,
) -> Result<String> {
    let preferences = store.preferences()?;
    let options = resolve_rewrite_options(overrides, &preferences);
    debug!(target_lang = %options.target_lang, "rewriting");

    Ok(client.rewrite(text, &options).await?)
}

pub fn deliver_rewrite(
    text: &str,
    delivery: Delivery,
    output: &mut impl OutputSink,
    notifier: &impl Notifier,
) -> Result<()> {
    deliver_result(text, delivery, TITLES, None, output, notifier)
}
