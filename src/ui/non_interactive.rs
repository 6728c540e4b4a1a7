//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{MenagerieError, Result};

use super::theme::MenagerieTheme;
use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `MENAGERIE_PROMPT_*` environment variables or
/// the prompt's default; a prompt with neither is an error instead of a
/// hang waiting on stdin nobody is attached to.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        // Collect MENAGERIE_PROMPT_* env vars
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("MENAGERIE_PROMPT_"))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        // Check environment override
        let env_key = format!("MENAGERIE_PROMPT_{}", prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            return Ok(value.clone());
        }

        // Use default
        if let Some(default) = &prompt.default {
            return Ok(default.clone());
        }

        Err(MenagerieError::Other(anyhow::anyhow!(
            "Cannot prompt for '{}' in non-interactive mode (no default value)",
            prompt.key
        )))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that does nothing (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        let theme = MenagerieTheme::new();
        println!("{}", theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        let theme = MenagerieTheme::new();
        println!("{}", theme.format_error(msg));
    }
}
