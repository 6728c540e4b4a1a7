//! HTML card serialization.
//!
//! One animal record becomes one `<li class="cards__item">` block: a title
//! div followed by a nested list of characteristic rows in a fixed order
//! (Diet, Location, Life span, Skin type, then Type when present).

use crate::dataset::{AnimalRecord, SKIN_TYPE_SENTINEL};

/// UTF-8 en-dash bytes misread as cp1252 by an upstream exporter. Some
/// lifespan values carry this sequence; it is replaced with a plain hyphen.
/// A literal substitution, not Unicode normalization.
const MOJIBAKE_EN_DASH: &str = "\u{00e2}\u{20ac}\u{201c}";

/// Serialize a record into an HTML card fragment.
///
/// Requires `name` and `locations`; returns `None` (and logs a warning)
/// when either is missing so the caller can skip the record and continue
/// the batch. Absent `diet`, `lifespan`, and `skin_type` characteristics
/// render as the literal `"N/A"`.
pub fn render_card(record: &AnimalRecord) -> Option<String> {
    let (Some(name), Some(locations)) = (record.name.as_deref(), record.locations.as_deref())
    else {
        tracing::warn!(?record, "record missing name or locations, skipping");
        return None;
    };

    let diet = record.characteristic("diet").unwrap_or(SKIN_TYPE_SENTINEL);
    let lifespan = record
        .characteristic("lifespan")
        .unwrap_or(SKIN_TYPE_SENTINEL)
        .replace(MOJIBAKE_EN_DASH, "-");
    let skin_type = record
        .characteristic("skin_type")
        .unwrap_or(SKIN_TYPE_SENTINEL);
    let locations = locations.join(", ");

    let mut card = String::new();
    card.push_str("<li class=\"cards__item\">");
    card.push_str(&format!("<div class=\"card__title\">{}</div>\n", name));
    card.push_str("<div class=\"card__text\"><ul>");
    card.push_str(&format!("<li><strong>Diet:</strong> {}</li>\n", diet));
    card.push_str(&format!("<li><strong>Location:</strong> {}</li>\n", locations));
    card.push_str(&format!("<li><strong>Life span:</strong> {}</li>\n", lifespan));
    card.push_str(&format!("<li><strong>Skin type:</strong> {}</li>\n", skin_type));

    if let Some(animal_type) = record.characteristic("type") {
        card.push_str(&format!("<li><strong>Type:</strong> {}</li>\n", animal_type));
    }
    card.push_str("</ul></div></li>\n");

    Some(card)
}
