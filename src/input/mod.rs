//! Input acquisition: selected text with a clipboard fallback.

mod clipboard;
mod reader;

use anyhow::Result;
use thiserror::Error;
use tracing::debug;

pub use clipboard::{ClipboardAccess, SystemClipboard};
pub use reader::InputReader;

/// Where the input text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOrigin {
    /// Text the user handed over directly (argument, file, pipe).
    Selection,
    /// Text read from the clipboard because nothing was selected.
    Clipboard,
}

/// Text to work on plus its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquiredText {
    pub text: String,
    pub origin: InputOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("No text found")]
    NoText,
}

/// Picks the selection if there is one, else the clipboard.
///
/// Fails with [`InputError::NoText`] when the chosen text is blank. An
/// unreadable clipboard counts as an empty one.
pub fn acquire_text(
    selection: Option<String>,
    clipboard: &mut impl ClipboardAccess,
) -> Result<AcquiredText> {
    let acquired = match selection {
        Some(text) => AcquiredText {
            text,
            origin: InputOrigin::Selection,
        },
        None => {
            let text = clipboard.read_text().unwrap_or_else(|err| {
                debug!("clipboard read failed: {err:#}");
                None
            });
            AcquiredText {
                text: text.unwrap_or_default(),
                origin: InputOrigin::Clipboard,
            }
        }
    };

    if acquired.text.trim().is_empty() {
        return Err(InputError::NoText.into());
    }

    Ok(acquired)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct FakeClipboard {
        content: Result<Option<String>, String>,
    }

    impl ClipboardAccess for FakeClipboard {
        fn read_text(&mut self) -> Result<Option<String>> {
            self.content.clone().map_err(anyhow::Error::msg)
        }

        fn write_text(&mut self, text: &str) -> Result<()> {
            self.content = Ok(Some(text.to_string()));
            Ok(())
        }
    }

    fn clipboard(content: Option<&str>) -> FakeClipboard {
        FakeClipboard {
            content: Ok(content.map(str::to_string)),
        }
    }

    #[test]
    fn test_selection_is_preferred() {
        let acquired = acquire_text(Some("selected".to_string()), &mut clipboard(Some("copied"))).unwrap();
        assert_eq!(acquired.text, "selected");
        assert_eq!(acquired.origin, InputOrigin::Selection);
    }

    #[test]
    fn test_falls_back_to_clipboard() {
        let acquired = acquire_text(None, &mut clipboard(Some("copied"))).unwrap();
        assert_eq!(acquired.text, "copied");
        assert_eq!(acquired.origin, InputOrigin::Clipboard);
    }

    #[test]
    fn test_blank_selection_does_not_fall_back() {
        let err = acquire_text(Some(" \n ".to_string()), &mut clipboard(Some("copied"))).unwrap_err();
        assert_eq!(err.downcast_ref::<InputError>(), Some(&InputError::NoText));
    }

    #[test]
    fn test_empty_clipboard_is_no_text() {
        let err = acquire_text(None, &mut clipboard(None)).unwrap_err();
        assert_eq!(err.to_string(), "No text found");
    }

    #[test]
    fn test_unreadable_clipboard_is_no_text() {
        let mut broken = FakeClipboard {
            content: Err("no display".to_string()),
        };
        let err = acquire_text(None, &mut broken).unwrap_err();
        assert_eq!(err.downcast_ref::<InputError>(), Some(&InputError::NoText));
    }
}
