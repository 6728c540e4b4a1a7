//! Animal records: model, file loading, and skin-type filtering.

pub mod filter;
pub mod loader;
pub mod record;

pub use filter::{matches_skin_type, unique_skin_types, SKIN_TYPE_SENTINEL};
pub use loader::{load_dataset, load_file, load_template, SourceFile};
pub use record::{AnimalRecord, SKIN_TYPE_KEY};
