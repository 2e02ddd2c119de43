use anyhow::{Context, Result};

/// Read/write access to a clipboard.
pub trait ClipboardAccess {
    /// Current text content, `None` when the clipboard holds no text.
    fn read_text(&mut self) -> Result<Option<String>>;

    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard, opened on first use.
///
/// On Linux (X11 and Wayland) the process that copied owns the clipboard
/// content. Once `deepl` exits, copied text only survives if a clipboard
/// manager took it over. Without one, use stdout delivery instead of `--copy`.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().context("Clipboard unavailable")?);
        }
        self.inner.as_mut().context("Clipboard unavailable")
    }
}

impl ClipboardAccess for SystemClipboard {
    fn read_text(&mut self) -> Result<Option<String>> {
        match self.handle()?.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(err) => Err(err).context("Failed to read clipboard"),
        }
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.handle()?
            .set_text(text.to_string())
            .context("Failed to write clipboard")
    }
}
