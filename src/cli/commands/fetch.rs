//! Fetch command implementation.
//!
//! The `menagerie fetch` command looks an animal up on the remote API and
//! feeds the result through the same card/template pipeline as `generate`,
//! or dumps it as JSON with `--json`.

use crate::api::AnimalsClient;
use crate::cli::args::FetchArgs;
use crate::dataset::load_template;
use crate::error::{MenagerieError, Result};
use crate::render::{render_card, render_page, write_page};
use crate::ui::{SpinnerHandle, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The fetch command implementation.
pub struct FetchCommand {
    args: FetchArgs,
}

impl FetchCommand {
    /// Create a new fetch command.
    pub fn new(args: FetchArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &FetchArgs {
        &self.args
    }

    fn build_client(&self) -> Result<AnimalsClient> {
        let api_key = self
            .args
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(MenagerieError::ApiKeyMissing)?;

        match &self.args.api_url {
            Some(api_url) => AnimalsClient::with_api_url(api_key, api_url),
            None => AnimalsClient::new(api_key),
        }
    }
}

impl Command for FetchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = match self.build_client() {
            Ok(client) => client,
            Err(MenagerieError::ApiKeyMissing) => {
                ui.error(&MenagerieError::ApiKeyMissing.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let name = &self.args.name;
        let mut spinner = ui.start_spinner(&format!("Fetching records for '{}'...", name));
        let records = match client.fetch(name) {
            Ok(records) => {
                let record_label = if records.len() == 1 { "record" } else { "records" };
                spinner.finish_success(&format!(
                    "Fetched {} {} for '{}'",
                    records.len(),
                    record_label,
                    name
                ));
                records
            }
            Err(e) => {
                spinner.finish_error(&format!("Fetch failed for '{}'", name));
                return Err(e);
            }
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&records)
                .map_err(|e| MenagerieError::Other(e.into()))?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        if records.is_empty() {
            ui.warning(&format!("No records found for '{}', nothing to render", name));
            return Ok(CommandResult::success());
        }

        let template = match load_template(&self.args.template) {
            Ok(template) => template,
            Err(MenagerieError::TemplateNotFound { path }) => {
                ui.error(&format!(
                    "Template {} doesn't exist. Run 'menagerie init' for a starter template.",
                    path.display()
                ));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let mut cards = String::new();
        let mut rendered = 0usize;
        for record in &records {
            match render_card(record) {
                Some(card) => {
                    cards.push_str(&card);
                    rendered += 1;
                }
                None => ui.warning("Skipping a record with no name or locations"),
            }
        }

        let page = render_page(&template, &self.args.template, &cards)?;
        write_page(&self.args.out, &page)?;

        let card_label = if rendered == 1 { "card" } else { "cards" };
        ui.success(&format!(
            "Wrote {} ({} {})",
            self.args.out.display(),
            rendered,
            card_label
        ));

        Ok(CommandResult::success())
    }
}
