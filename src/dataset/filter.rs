//! Skin-type filtering.
//!
//! A blank selection matches everything. The sentinel value `"N/A"` selects
//! records with no skin type at all; any other selection is a
//! case-insensitive equality check against the record's skin type.

use std::collections::BTreeSet;

use crate::dataset::AnimalRecord;

/// Sentinel standing in for "missing skin type", both in the selectable
/// filter set and as the rendered default for absent characteristics.
pub const SKIN_TYPE_SENTINEL: &str = "N/A";

/// Whether a record passes the chosen skin-type filter.
///
/// Selection rules, in order:
/// - `""` matches every record.
/// - `"N/A"` matches records without a `skin_type` characteristic.
/// - any value matches records whose `skin_type` equals it case-insensitively.
///
/// A record whose `skin_type` is literally `"N/A"` also matches the `"N/A"`
/// selection through the equality branch. Kept as-is; see DESIGN.md.
pub fn matches_skin_type(record: &AnimalRecord, chosen: &str) -> bool {
    if chosen.is_empty() {
        return true;
    }

    if chosen == SKIN_TYPE_SENTINEL && !record.has_skin_type() {
        return true;
    }

    if let Some(skin_type) = record.skin_type() {
        if skin_type.to_lowercase() == chosen.to_lowercase() {
            return true;
        }
    }

    false
}

/// Collect the distinct skin types present in the dataset.
///
/// Always contains [`SKIN_TYPE_SENTINEL`], even for an empty dataset, so
/// "no skin type" is a selectable filter. The set iterates in sorted order.
pub fn unique_skin_types(records: &[AnimalRecord]) -> BTreeSet<String> {
    let mut skin_types: BTreeSet<String> = records
        .iter()
        .filter_map(|record| record.skin_type().map(String::from))
        .collect();
    skin_types.insert(SKIN_TYPE_SENTINEL.to_string());
    skin_types
}
