//! The animal record model.
//!
//! Records are deserialized from the dataset file or the animals API.
//! Only `name`, `locations`, and `characteristics` are consumed; any other
//! keys in the source JSON are ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Characteristics key holding the skin type.
pub const SKIN_TYPE_KEY: &str = "skin_type";

/// One animal's structured data.
///
/// `name` and `locations` are optional at the model level: records missing
/// either still deserialize, and the serializer decides to skip them. The
/// characteristics map is free-form; the renderer looks up `diet`,
/// `lifespan`, `skin_type`, and `type` by key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    /// Common name of the animal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Regions where the animal is found, in source order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,

    /// Free-form named attributes (diet, lifespan, skin_type, type, ...).
    #[serde(default)]
    pub characteristics: HashMap<String, String>,
}

impl AnimalRecord {
    /// Look up a characteristic by key.
    pub fn characteristic(&self, key: &str) -> Option<&str> {
        self.characteristics.get(key).map(String::as_str)
    }

    /// The record's skin type, if any.
    pub fn skin_type(&self) -> Option<&str> {
        self.characteristic(SKIN_TYPE_KEY)
    }

    /// Whether the record carries a skin type at all.
    pub fn has_skin_type(&self) -> bool {
        self.characteristics.contains_key(SKIN_TYPE_KEY)
    }
}
