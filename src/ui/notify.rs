use crate::{alert, status};

use super::Style;

/// Transient success/failure notifications.
pub trait Notifier {
    fn success(&self, title: &str, message: Option<&str>);

    fn failure(&self, title: &str, message: Option<&str>);
}

/// Writes notifications to stderr. Successes respect quiet mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, title: &str, message: Option<&str>) {
        match message {
            Some(message) => status!(
                "{} {} {}",
                Style::success("✓"),
                title,
                Style::secondary(format!("• {message}"))
            ),
            None => status!("{} {}", Style::success("✓"), title),
        }
    }

    fn failure(&self, title: &str, message: Option<&str>) {
        alert!("{} {}", Style::error("✗"), Style::error(title));
        if let Some(message) = message.filter(|m| !m.trim().is_empty()) {
            alert!("\n{message}");
        }
    }
}
