use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, IsTerminal, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

pub struct InputReader;

impl InputReader {
    /// Reads the "selected" text: an explicit argument, a file, or piped stdin.
    ///
    /// Returns `None` when none of them provides anything, so the caller can
    /// fall back to the clipboard. Blank explicit text is still returned.
    pub fn read_selection(text: Option<&str>, file: Option<&str>) -> Result<Option<String>> {
        if let Some(text) = text {
            return Ok(Some(text.to_string()));
        }

        if let Some(path) = file {
            return Self::read_file(path).map(Some);
        }

        if io::stdin().is_terminal() {
            return Ok(None);
        }

        let piped = Self::read_stdin()?;
        Ok(Some(piped).filter(|s| !s.is_empty()))
    }

    pub fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(
                "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                 Consider splitting the file into smaller parts.",
                size as f64 / 1024.0 / 1024.0
            );
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    #[allow(clippy::significant_drop_tightening)]
    pub fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                     Consider splitting the input into smaller parts.",
                    buffer.len() as f64 / 1024.0 / 1024.0
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
