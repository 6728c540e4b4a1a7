//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use menagerie::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("skin_type", "fur");
//!
//! // Use ui in code under test...
//! ui.message("Available skin types: Fur, N/A");
//! ui.success("Wrote animals.html");
//!
//! // Assert on captured interactions
//! assert!(ui.successes().contains(&"Wrote animals.html".to_string()));
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::Result;

use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt responses.
/// Supports both single responses (via `set_prompt_response`) and queued
/// responses (via `queue_prompt_responses`) for keys prompted repeatedly,
/// e.g. a re-prompt loop fed an invalid answer first.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    spinners: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    ///
    /// When `prompt()` is called with this key, it returns the configured
    /// response.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are consumed in order; once the queue is drained, the
    /// single response (if any) or the prompt default is used.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: &[&str]) {
        self.prompt_queues.insert(
            key.to_string(),
            responses.iter().map(|s| s.to_string()).collect(),
        );
    }

    /// Captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Keys of prompts that were shown, in order.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());

        if let Some(queue) = self.prompt_queues.get_mut(&prompt.key) {
            if let Some(response) = queue.pop_front() {
                return Ok(response);
            }
        }

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Ok(response.clone());
        }

        if let Some(default) = &prompt.default {
            return Ok(default.clone());
        }

        Err(crate::error::MenagerieError::Other(anyhow::anyhow!(
            "MockUI has no response for prompt '{}'",
            prompt.key
        )))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Spinner that records nothing.
struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
}
