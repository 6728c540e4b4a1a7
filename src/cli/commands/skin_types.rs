//! Skin-types command implementation.
//!
//! The `menagerie skin-types` command lists the distinct skin types in a
//! dataset, the same set `generate` offers at its prompt.

use crate::cli::args::SkinTypesArgs;
use crate::dataset::{load_dataset, unique_skin_types};
use crate::error::{MenagerieError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The skin-types command implementation.
pub struct SkinTypesCommand {
    args: SkinTypesArgs,
}

impl SkinTypesCommand {
    /// Create a new skin-types command.
    pub fn new(args: SkinTypesArgs) -> Self {
        Self { args }
    }
}

impl Command for SkinTypesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
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

        let skin_types: Vec<String> = unique_skin_types(&records).into_iter().collect();

        if self.args.json {
            let json = serde_json::to_string_pretty(&skin_types)
                .map_err(|e| MenagerieError::Other(e.into()))?;
            println!("{}", json);
        } else {
            ui.message("Available skin types:");
            for skin_type in &skin_types {
                ui.message(&format!("  {}", skin_type));
            }
        }

        Ok(CommandResult::success())
    }
}
