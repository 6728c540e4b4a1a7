//! Generate command implementation.
//!
//! The `menagerie generate` command renders the animals page: load the
//! dataset and template, settle on a skin-type filter, serialize the
//! matching records, and substitute them into the template.

use std::collections::BTreeSet;

use crate::cli::args::GenerateArgs;
use crate::dataset::{load_dataset, load_template, matches_skin_type, unique_skin_types};
use crate::error::{MenagerieError, Result};
use crate::render::{render_card, render_page, write_page};
use crate::ui::{Prompt, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The generate command implementation.
pub struct GenerateCommand {
    args: GenerateArgs,
}

/// Outcome of settling on a skin-type filter.
enum Selection {
    /// The filter value; empty means no filter. Answers matching an
    /// available skin type carry that set member's exact casing, so the
    /// "N/A" sentinel survives a lower-cased answer.
    Chosen(String),
    /// The choice could not be settled; the error was already reported.
    Rejected,
}

impl GenerateCommand {
    /// Create a new generate command.
    pub fn new(args: GenerateArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &GenerateArgs {
        &self.args
    }

    /// Settle on the skin-type filter: the CLI flag when given, otherwise
    /// an interactive prompt that re-asks while the answer is invalid.
    /// Blank always means "no filter". Matching is case-insensitive.
    fn select_skin_type(
        &self,
        ui: &mut dyn UserInterface,
        skin_types: &BTreeSet<String>,
    ) -> Result<Selection> {
        let available: Vec<&str> = skin_types.iter().map(String::as_str).collect();

        // The flag is a direct filter value: a skin type nobody in the
        // dataset has simply yields an empty page. Only the prompt loop
        // validates against the available set.
        if let Some(flag_value) = &self.args.skin_type {
            let chosen = canonical_choice(flag_value, skin_types)
                .unwrap_or(flag_value.as_str())
                .to_string();
            return Ok(Selection::Chosen(chosen));
        }

        ui.message(&format!("Available skin types: {}\n", available.join(", ")));

        let prompt = Prompt {
            key: "skin_type".to_string(),
            question: "Please choose a skin type (leave blank for no filter):".to_string(),
            prompt_type: PromptType::Input,
            default: Some(String::new()),
        };

        loop {
            let answer = ui.prompt(&prompt)?.trim().to_string();
            if answer.is_empty() {
                return Ok(Selection::Chosen(answer));
            }
            if let Some(canonical) = canonical_choice(&answer, skin_types) {
                return Ok(Selection::Chosen(canonical.to_string()));
            }

            ui.warning(&format!(
                "Invalid selection! Please select an available skin type: {}",
                available.join(", ")
            ));

            // A non-interactive answer comes from an env override and never
            // changes between iterations; re-asking would loop forever.
            if !ui.is_interactive() {
                return Ok(Selection::Rejected);
            }
        }
    }
}

/// Resolve a case-insensitive answer to the set member's exact casing.
fn canonical_choice<'a>(chosen: &str, skin_types: &'a BTreeSet<String>) -> Option<&'a str> {
    let chosen = chosen.to_lowercase();
    skin_types
        .iter()
        .map(String::as_str)
        .find(|skin_type| skin_type.to_lowercase() == chosen)
}

impl Command for GenerateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // Load both inputs up front: a missing template must terminate
        // before the prompt, and long before anything is written.
        let records = match load_dataset(&self.args.data) {
            Ok(records) => records,
            Err(MenagerieError::DatasetNotFound { path }) => {
                ui.error(&format!(
                    "Dataset {} doesn't exist. Run 'menagerie init' for a starter dataset.",
                    path.display()
                ));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

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

        let skin_types = unique_skin_types(&records);

        let chosen = match self.select_skin_type(ui, &skin_types)? {
            Selection::Chosen(chosen) => chosen,
            Selection::Rejected => return Ok(CommandResult::failure(1)),
        };

        let mut cards = String::new();
        let mut rendered = 0usize;
        for record in records.iter().filter(|r| matches_skin_type(r, &chosen)) {
            match render_card(record) {
                Some(card) => {
                    if ui.output_mode().shows_details() {
                        let name = record.name.as_deref().unwrap_or_default();
                        ui.message(&format!("  + {}", name));
                    }
                    cards.push_str(&card);
                    rendered += 1;
                }
                None => {
                    ui.warning("Skipping a record with no name or locations");
                }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const DATASET: &str = r#"[
        {"name": "Lion", "locations": ["Africa"], "characteristics": {"diet": "Carnivore", "skin_type": "Fur"}},
        {"name": "Gecko", "locations": ["Asia"], "characteristics": {"skin_type": "Scales"}},
        {"locations": ["Nowhere"]}
    ]"#;

    const TEMPLATE: &str = "<ul class=\"cards\">__REPLACE_ANIMALS_INFO__</ul>";

    fn setup(dataset: &str, template: Option<&str>) -> (TempDir, GenerateArgs) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("animals_data.json"), dataset).unwrap();
        if let Some(template) = template {
            fs::write(temp.path().join("animals_template.html"), template).unwrap();
        }
        let args = GenerateArgs {
            data: temp.path().join("animals_data.json"),
            template: temp.path().join("animals_template.html"),
            out: temp.path().join("animals.html"),
            skin_type: None,
            non_interactive: false,
        };
        (temp, args)
    }

    fn read_output(dir: &Path) -> String {
        fs::read_to_string(dir.join("animals.html")).unwrap()
    }

    #[test]
    fn blank_filter_renders_every_valid_record() {
        let (temp, mut args) = setup(DATASET, Some(TEMPLATE));
        args.skin_type = Some(String::new());

        let mut ui = MockUI::new();
        let result = GenerateCommand::new(args).execute(&mut ui).unwrap();

        assert!(result.success);
        let page = read_output(temp.path());
        assert!(page.contains("Lion"));
        assert!(page.contains("Gecko"));
        assert_eq!(page.matches("cards__item").count(), 2);
        // The record without a name was skipped with a warning.
        assert_eq!(ui.warnings().len(), 1);
    }

    #[test]
    fn unmatched_filter_substitutes_empty_string() {
        let (temp, mut args) = setup(DATASET, Some(TEMPLATE));
        args.skin_type = Some("Feathers".to_string());

        let mut ui = MockUI::new();
        let result = GenerateCommand::new(args).execute(&mut ui).unwrap();

        // No record has feathers: zero fragments, token replaced by "".
        assert!(result.success);
        assert_eq!(read_output(temp.path()), "<ul class=\"cards\"></ul>");
    }

    #[test]
    fn matched_filter_keeps_only_matching_records() {
        let (temp, mut args) = setup(DATASET, Some(TEMPLATE));
        args.skin_type = Some("scales".to_string());

        let mut ui = MockUI::new();
        let result = GenerateCommand::new(args).execute(&mut ui).unwrap();

        assert!(result.success);
        let page = read_output(temp.path());
        assert!(page.contains("Gecko"));
        assert!(!page.contains("Lion"));
    }

    #[test]
    fn prompt_answer_selects_filter() {
        let (temp, args) = setup(DATASET, Some(TEMPLATE));

        let mut ui = MockUI::new();
        ui.set_prompt_response("skin_type", "Fur");
        let result = GenerateCommand::new(args).execute(&mut ui).unwrap();

        assert!(result.success);
        let page = read_output(temp.path());
        assert!(page.contains("Lion"));
        assert!(!page.contains("Gecko"));
        assert_eq!(ui.prompts_shown(), ["skin_type".to_string()]);
    }

    #[test]
    fn invalid_prompt_answer_reprompts() {
        let (temp, args) = setup(DATASET, Some(TEMPLATE));

        let mut ui = MockUI::new();
        ui.queue_prompt_responses("skin_type", &["feathers", "fur"]);
        let result = GenerateCommand::new(args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.prompts_shown().len(), 2);
        assert!(ui.warnings().iter().any(|w| w.contains("Invalid selection")));
        assert!(read_output(temp.path()).contains("Lion"));
    }

    #[test]
    fn blank_prompt_answer_means_no_filter() {
        let (temp, args) = setup(DATASET, Some(TEMPLATE));

        let mut ui = MockUI::new();
        ui.set_prompt_response("skin_type", "");
        let result = GenerateCommand::new(args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(read_output(temp.path()).matches("cards__item").count(), 2);
    }

    #[test]
    fn na_filter_selects_records_without_skin_type() {
        let dataset = r#"[
            {"name": "Lion", "locations": ["Africa"], "characteristics": {"skin_type": "Fur"}},
            {"name": "Mystery", "locations": ["Unknown"], "characteristics": {}}
        ]"#;
        let (temp, mut args) = setup(dataset, Some(TEMPLATE));
        args.skin_type = Some("N/A".to_string());

        let mut ui = MockUI::new();
        let result = GenerateCommand::new(args).execute(&mut ui).unwrap();

        assert!(result.success);
        let page = read_output(temp.path());
        assert!(page.contains("Mystery"));
        assert!(!page.contains("Lion"));
    }

    #[test]
    fn lowercase_na_answer_still_selects_missing_skin_type() {
        let dataset = r#"[
            {"name": "Lion", "locations": ["Africa"], "characteristics": {"skin_type": "Fur"}},
            {"name": "Mystery", "locations": ["Unknown"], "characteristics": {}}
        ]"#;
        let (temp, args) = setup(dataset, Some(TEMPLATE));

        let mut ui = MockUI::new();
        ui.set_prompt_response("skin_type", "n/a");
        let result = GenerateCommand::new(args).execute(&mut ui).unwrap();

        assert!(result.success);
        let page = read_output(temp.path());
        assert!(page.contains("Mystery"));
        assert!(!page.contains("Lion"));
    }

    #[test]
    fn skin_type_flag_skips_prompt() {
        let (_temp, mut args) = setup(DATASET, Some(TEMPLATE));
        args.skin_type = Some("Fur".to_string());

        let mut ui = MockUI::new();
        GenerateCommand::new(args).execute(&mut ui).unwrap();
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn missing_dataset_fails_with_diagnostic() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("animals_template.html"), TEMPLATE).unwrap();
        let args = GenerateArgs {
            data: temp.path().join("animals_data.json"),
            template: temp.path().join("animals_template.html"),
            out: temp.path().join("animals.html"),
            skin_type: Some(String::new()),
            non_interactive: true,
        };

        let mut ui = MockUI::new();
        let result = GenerateCommand::new(args).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.errors()[0].contains("doesn't exist"));
        assert!(!temp.path().join("animals.html").exists());
    }

    #[test]
    fn missing_template_fails_before_writing() {
        let (temp, mut args) = setup(DATASET, None);
        args.skin_type = Some(String::new());

        let mut ui = MockUI::new();
        let result = GenerateCommand::new(args).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(!temp.path().join("animals.html").exists());
    }

    #[test]
    fn template_without_token_is_an_error() {
        let (_temp, mut args) = setup(DATASET, Some("<ul></ul>"));
        args.skin_type = Some(String::new());

        let mut ui = MockUI::new();
        let result = GenerateCommand::new(args).execute(&mut ui);
        assert!(matches!(
            result,
            Err(MenagerieError::TemplateMissingToken { .. })
        ));
    }

    #[test]
    fn output_overwrites_previous_page() {
        let (temp, mut args) = setup(DATASET, Some(TEMPLATE));
        fs::write(temp.path().join("animals.html"), "stale").unwrap();
        args.skin_type = Some(String::new());

        let mut ui = MockUI::new();
        GenerateCommand::new(args).execute(&mut ui).unwrap();
        assert!(!read_output(temp.path()).contains("stale"));
    }
}
