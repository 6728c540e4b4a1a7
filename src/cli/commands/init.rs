//! Init command implementation.
//!
//! The `menagerie init` command writes a starter template and a small
//! sample dataset into the current directory so `generate` works out of
//! the box.

use std::fs;
use std::path::Path;

use crate::cli::args::InitArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Starter page template, embedded at compile time.
const STARTER_TEMPLATE: &str = include_str!("../../../templates/animals_template.html");

/// Sample dataset, embedded at compile time.
const STARTER_DATASET: &str = include_str!("../../../templates/animals_data.json");

/// The init command implementation.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(args: InitArgs) -> Self {
        Self { args }
    }

    fn write_starter(
        &self,
        ui: &mut dyn UserInterface,
        path: &Path,
        content: &str,
    ) -> Result<bool> {
        if path.exists() && !self.args.force {
            ui.error(&format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ));
            return Ok(false);
        }

        fs::write(path, content)?;
        ui.success(&format!("Created {}", path.display()));
        Ok(true)
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let wrote_template =
            self.write_starter(ui, Path::new("animals_template.html"), STARTER_TEMPLATE)?;
        let wrote_dataset =
            self.write_starter(ui, Path::new("animals_data.json"), STARTER_DATASET)?;

        if wrote_template && wrote_dataset {
            ui.message("Run 'menagerie' to generate animals.html");
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
