//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::error::{MenagerieError, Result};

use super::{Prompt, PromptType};

/// Convert dialoguer errors to MenagerieError.
fn map_dialoguer_err(e: dialoguer::Error) -> MenagerieError {
    MenagerieError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    match &prompt.prompt_type {
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Select { options } => prompt_select(prompt, options, term),
    }
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<String> {
    let theme = prompt_theme();
    let input = Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(true);

    let result = if let Some(default) = &prompt.default {
        input
            .default(default.clone())
            .show_default(false)
            .interact_text_on(term)
            .map_err(map_dialoguer_err)?
    } else {
        input.interact_text_on(term).map_err(map_dialoguer_err)?
    };

    Ok(result)
}

fn prompt_select(prompt: &Prompt, options: &[String], term: &Term) -> Result<String> {
    let default_idx = prompt
        .default
        .as_ref()
        .and_then(|d| options.iter().position(|o| o == d))
        .unwrap_or(0);

    let selection = Select::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(options)
        .default(default_idx)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(options[selection].clone())
}
