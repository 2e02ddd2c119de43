//! Glossary management command handler.

use anyhow::{Context, Result};
use inquire::{Confirm, Editor};
use std::path::Path;

use crate::config::ConfigManager;
use crate::deepl::{
    CredentialsProvider, DeepLClient, Glossary, parse_entries, validate_glossary,
};
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::status;
use crate::ui::{Notifier, Spinner, Style, TerminalNotifier, handle_prompt_cancellation};

fn client() -> Result<DeepLClient<ConfigManager>> {
    Ok(DeepLClient::new(ConfigManager::new()?))
}

/// Keeps the glossaries usable for a `from` → `to` translation.
pub fn filter_glossaries(
    glossaries: Vec<Glossary>,
    from: Option<&str>,
    to: Option<&str>,
) -> Vec<Glossary> {
    glossaries
        .into_iter()
        .filter(|g| g.matches(from, to))
        .collect()
}

/// Lists glossaries, optionally only those matching a language pair.
pub async fn list_glossaries(from: Option<&str>, to: Option<&str>) -> Result<()> {
    let client = client()?;
    let glossaries = {
        let _spinner = Spinner::new("Loading glossaries...");
        client.list_glossaries().await?
    };
    let glossaries = filter_glossaries(glossaries, from, to);

    if glossaries.is_empty() {
        println!("No glossaries found.");
        println!("{}", Style::hint("Create one with 'deepl glossary create'"));
        return Ok(());
    }

    println!("{}", Style::header("Glossaries"));
    for glossary in &glossaries {
        print_glossary_line(glossary);
    }

    Ok(())
}

fn print_glossary_line(glossary: &Glossary) {
    let status = if glossary.ready {
        Style::success(glossary.status_label())
    } else {
        Style::warning(glossary.status_label())
    };

    println!(
        "  {}  {} → {}  {}  {}",
        Style::value(&glossary.name),
        Style::code(glossary.source_lang.to_uppercase()),
        Style::code(glossary.target_lang.to_uppercase()),
        Style::secondary(format!("{} entries", glossary.entry_count)),
        status
    );
    println!("    {}", Style::secondary(&glossary.glossary_id));
}

/// Shows glossary metadata followed by its parsed entries.
pub async fn show_glossary(id: &str) -> Result<()> {
    let client = client()?;
    let (glossary, entries) = {
        let _spinner = Spinner::new("Loading glossary...");
        let glossary = client.get_glossary(id).await?;
        let entries = client.get_glossary_entries(id).await?;
        (glossary, parse_entries(&entries))
    };

    println!("{}", Style::header(&glossary.name));
    println!();
    println!("  {}  {}", Style::label("ID:     "), Style::value(&glossary.glossary_id));
    println!(
        "  {}  {} → {}",
        Style::label("Langs:  "),
        Style::code(glossary.source_lang.to_uppercase()),
        Style::code(glossary.target_lang.to_uppercase())
    );
    println!("  {}  {}", Style::label("Status: "), glossary.status_label());
    println!("  {}  {}", Style::label("Entries:"), glossary.entry_count);
    println!(
        "  {}  {}",
        Style::label("Created:"),
        glossary.creation_time.format("%Y-%m-%d %H:%M UTC")
    );
    println!();

    for entry in &entries {
        println!("  {}  {}", entry.source, Style::secondary(format!("→ {}", entry.target)));
    }

    Ok(())
}

/// Prints a glossary's entries as TSV, or writes them to `output`.
pub async fn export_entries(id: &str, output: Option<&str>) -> Result<()> {
    let client = client()?;
    let tsv = client.get_glossary_entries(id).await?;

    match output {
        Some(path) => {
            atomic_write(Path::new(path), &tsv)
                .with_context(|| format!("Failed to write entries to {path}"))?;
            status!(
                "{} Saved {} entries to {}",
                Style::success("✓"),
                parse_entries(&tsv).len(),
                Style::secondary(path)
            );
        }
        None => {
            print!("{tsv}");
            if !tsv.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}

/// Validates a new glossary and uploads it.
///
/// Nothing is sent when validation fails. Entries are trimmed before upload.
pub async fn create_validated<P: CredentialsProvider>(
    client: &DeepLClient<P>,
    name: &str,
    source_lang: &str,
    target_lang: &str,
    entries_tsv: &str,
) -> Result<Glossary> {
    validate_glossary(name, entries_tsv)?;

    Ok(client
        .create_glossary(name.trim(), source_lang, target_lang, entries_tsv.trim())
        .await?)
}

/// Reads entries from a file, piped stdin, or an editor.
///
/// Returns `None` when the editor prompt was cancelled.
fn read_entries(file: Option<&str>) -> Result<Option<String>> {
    if let Some(text) = InputReader::read_selection(None, file)? {
        return Ok(Some(text));
    }

    let mut entries = None;
    handle_prompt_cancellation(|| {
        let text = Editor::new("Entries (opens editor):")
            .with_help_message("One source<TAB>target pair per line. Save and close editor when done.")
            .prompt()?;
        entries = Some(text);
        Ok(())
    })?;

    Ok(entries)
}

pub async fn create_glossary(
    name: Option<&str>,
    from: &str,
    to: &str,
    file: Option<&str>,
) -> Result<()> {
    let Some(entries) = read_entries(file)? else {
        status!("Cancelled");
        return Ok(());
    };

    let client = client()?;
    let glossary = {
        let _spinner = Spinner::new("Creating glossary...");
        create_validated(&client, name.unwrap_or_default(), from, to, &entries).await?
    };

    TerminalNotifier.success(
        "Glossary created",
        Some(&format!(
            "{} ({} entries) {}",
            glossary.name, glossary.entry_count, glossary.glossary_id
        )),
    );

    Ok(())
}

fn confirm_delete(id: &str) -> Result<bool> {
    let mut confirmed = false;
    handle_prompt_cancellation(|| {
        confirmed = Confirm::new(&format!("Delete glossary '{id}'?"))
            .with_default(false)
            .prompt()?;
        Ok(())
    })?;
    Ok(confirmed)
}

pub async fn delete_glossary(id: &str, yes: bool) -> Result<()> {
    if !yes && !confirm_delete(id)? {
        status!("Cancelled");
        return Ok(());
    }

    let client = client()?;
    {
        let _spinner = Spinner::new("Deleting glossary...");
        client.delete_glossary(id).await?;
    }

    TerminalNotifier.success("Glossary deleted", Some(id));
    Ok(())
}
