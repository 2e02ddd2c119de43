//! Configure command handler for API access and default options.

use anyhow::Result;
use clap::ValueEnum;
use inquire::{Confirm, Password, PasswordDisplayMode, Select};

use crate::config::{ConfigManager, PreferenceStore, Preferences};
use crate::deepl::{
    ApiTier, Formality, ModelType, REWRITE_LANGUAGES, TARGET_LANGUAGES, Tone, WritingStyle,
    language_name,
};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current configuration. Otherwise edits it
/// interactively.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;

    if show {
        let preferences = manager.preferences()?;
        print_configuration(&preferences, &manager);
        return Ok(());
    }

    handle_prompt_cancellation(|| run_configure_inner(&manager))
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut preferences = manager.preferences()?;

    print_configuration(&preferences, manager);

    let auth = &mut preferences.auth;
    auth.api_type = select_variant("API plan:", auth.api_type, ApiTier::as_str)?;
    if let Some(key) = prompt_api_key(auth.api_key.is_some(), auth.api_key_env())? {
        auth.api_key = Some(key);
    }

    let translate = &mut preferences.translate;
    translate.target_lang =
        select_language("Translate to:", TARGET_LANGUAGES, &translate.target_lang)?;
    translate.formality = select_variant("Formality:", translate.formality, Formality::as_str)?;
    translate.model_type = select_model_type(translate.model_type)?;
    translate.preserve_formatting = Confirm::new("Preserve formatting?")
        .with_default(translate.preserve_formatting)
        .prompt()?;
    translate.show_billed_characters = Confirm::new("Show billed characters?")
        .with_default(translate.show_billed_characters)
        .prompt()?;

    let rewrite = &mut preferences.rewrite;
    rewrite.target_lang = select_language("Rewrite in:", REWRITE_LANGUAGES, &rewrite.target_lang)?;
    rewrite.writing_style =
        select_variant("Writing style:", rewrite.writing_style, WritingStyle::as_str)?;
    rewrite.tone = select_variant("Tone:", rewrite.tone, Tone::as_str)?;

    manager.save(&preferences)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

/// Masks all but the last four characters of an API key.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}

fn print_configuration(preferences: &Preferences, manager: &ConfigManager) {
    let auth = &preferences.auth;
    let key = auth.get_api_key().map_or_else(
        || Style::warning(format!("(not set, export {})", auth.api_key_env())),
        |k| Style::value(mask_key(&k)),
    );

    println!(
        "{} {}",
        Style::header("Current configuration"),
        Style::secondary(manager.config_path().display().to_string())
    );
    println!("  {}       {}", Style::label("api_key"), key);
    println!("  {}      {}", Style::label("api_type"), Style::value(auth.api_type.as_str()));
    if let Some(endpoint) = &auth.endpoint {
        println!("  {}      {}", Style::label("endpoint"), Style::value(endpoint));
    }

    let translate = &preferences.translate;
    println!();
    println!("  {}", Style::header("[translate]"));
    println!("  {}   {}", Style::label("target_lang"), Style::value(&translate.target_lang));
    println!("  {}     {}", Style::label("formality"), Style::value(translate.formality.as_str()));
    println!(
        "  {}    {}",
        Style::label("model_type"),
        translate
            .model_type
            .map_or_else(|| Style::secondary("(not set)"), |m| Style::value(m.as_str()))
    );
    println!(
        "  {}  {}",
        Style::label("preserve_fmt"),
        Style::value(translate.preserve_formatting)
    );
    println!(
        "  {}  {}",
        Style::label("billed_chars"),
        Style::value(translate.show_billed_characters)
    );

    let rewrite = &preferences.rewrite;
    println!();
    println!("  {}", Style::header("[rewrite]"));
    println!("  {}   {}", Style::label("target_lang"), Style::value(&rewrite.target_lang));
    println!(
        "  {} {}",
        Style::label("writing_style"),
        Style::value(rewrite.writing_style.as_str())
    );
    println!("  {}          {}", Style::label("tone"), Style::value(rewrite.tone.as_str()));
    println!();
}

fn prompt_api_key(has_stored_key: bool, env_var: &str) -> Result<Option<String>> {
    let help = if has_stored_key {
        "Leave empty to keep the current key".to_string()
    } else {
        format!("Leave empty to use ${env_var}")
    };

    let key = Password::new("API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message(&help)
        .prompt()?;

    let key = key.trim();
    Ok((!key.is_empty()).then(|| key.to_string()))
}

fn select_variant<T>(message: &str, current: T, label: fn(T) -> &'static str) -> Result<T>
where
    T: ValueEnum + Copy + PartialEq,
{
    let variants = T::value_variants();
    let options: Vec<&str> = variants.iter().map(|v| label(*v)).collect();
    let start = variants.iter().position(|v| *v == current).unwrap_or(0);

    let choice = Select::new(message, options)
        .with_starting_cursor(start)
        .raw_prompt()?;

    Ok(variants.get(choice.index).copied().unwrap_or(current))
}

fn select_model_type(current: Option<ModelType>) -> Result<Option<ModelType>> {
    let variants = ModelType::value_variants();
    let mut options = vec!["(service default)"];
    options.extend(variants.iter().map(|m| m.as_str()));

    let start = current
        .and_then(|c| variants.iter().position(|m| *m == c))
        .map_or(0, |i| i + 1);

    let choice = Select::new("Model type:", options)
        .with_starting_cursor(start)
        .raw_prompt()?;

    Ok(choice
        .index
        .checked_sub(1)
        .and_then(|i| variants.get(i).copied()))
}

fn select_language(message: &str, codes: &[&str], current: &str) -> Result<String> {
    // Build options with format "code - Name"
    let options: Vec<String> = codes
        .iter()
        .map(|code| format!("{code} - {}", language_name(code)))
        .collect();

    let start = codes
        .iter()
        .position(|code| code.eq_ignore_ascii_case(current))
        .unwrap_or(0);

    let choice = Select::new(message, options)
        .with_starting_cursor(start)
        .raw_prompt()?;

    Ok(codes
        .get(choice.index)
        .map_or_else(|| current.to_string(), |code| (*code).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key_keeps_last_four() {
        assert_eq!(mask_key("0123456789abcdef:fx"), "****f:fx");
        assert_eq!(mask_key("abcd"), "****");
        assert_eq!(mask_key(""), "****");
    }

    #[test]
    fn test_mask_key_handles_multibyte() {
        assert_eq!(mask_key("ключ-пример"), "****имер");
    }
}
