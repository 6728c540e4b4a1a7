//! Menagerie - animal fact pages from a dataset or a remote API.
//!
//! Menagerie is a CLI tool that renders animal records into a static HTML
//! page. Records come from a local JSON dataset or from the API Ninjas
//! animals endpoint, optionally filtered by skin type, and are substituted
//! into an HTML template.
//!
//! # Modules
//!
//! - [`api`] - Blocking client for the animals API
//! - [`cli`] - Command-line interface and argument parsing
//! - [`dataset`] - Record model, file loading, and skin-type filtering
//! - [`error`] - Error types and result aliases
//! - [`render`] - HTML card serialization and template substitution
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use menagerie::dataset::{matches_skin_type, AnimalRecord};
//!
//! let record: AnimalRecord = serde_json::from_str(
//!     r#"{"name": "Lion", "locations": ["Africa"], "characteristics": {"skin_type": "Fur"}}"#,
//! )
//! .unwrap();
//! assert!(matches_skin_type(&record, "fur"));
//! assert!(matches_skin_type(&record, ""));
//! ```
//!
//! For end-to-end page generation, see the integration tests.

pub mod api;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod render;
pub mod ui;

pub use error::{MenagerieError, Result};
