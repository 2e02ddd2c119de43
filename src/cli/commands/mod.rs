//! Subcommand implementations.

use anyhow::Result;

use crate::output::{Delivery, OutputSink};
use crate::ui::Notifier;

/// Configure command handler.
pub mod configure;

/// Glossary management command handler.
pub mod glossary;

/// Rewrite command handler.
pub mod rewrite;

/// Translation command handler.
pub mod translate;

pub use rewrite::RewriteArgs;
pub use translate::TranslateArgs;

/// Success titles for the two ways a result can be delivered.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryTitles {
    pub paste: &'static str,
    pub copy: &'static str,
}

impl DeliveryTitles {
    const fn for_delivery(self, delivery: Delivery) -> &'static str {
        match delivery {
            Delivery::Paste => self.paste,
            Delivery::Copy => self.copy,
        }
    }
}

/// Hands `text` to the sink and reports success.
///
/// Nothing is reported when delivery fails.
pub fn deliver_result(
    text: &str,
    delivery: Delivery,
    titles: DeliveryTitles,
    message: Option<&str>,
    output: &mut impl OutputSink,
    notifier: &impl Notifier,
) -> Result<()> {
    output.deliver(text, delivery)?;
    notifier.success(titles.for_delivery(delivery), message);
    Ok(())
}

/// Splits comma-separated tag lists into trimmed, non-empty names.
pub(crate) fn clean_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Treats blank strings as absent.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
