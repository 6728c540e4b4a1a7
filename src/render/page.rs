//! Template substitution and page output.

use std::fs;
use std::path::Path;

use crate::error::{MenagerieError, Result};

/// Substitution token the template must contain.
pub const PAGE_TOKEN: &str = "__REPLACE_ANIMALS_INFO__";

/// Substitute the concatenated card fragments into the template.
///
/// # Errors
///
/// Returns `TemplateMissingToken` when the template has no [`PAGE_TOKEN`];
/// a page silently rendered without its cards helps nobody.
pub fn render_page(template: &str, template_path: &Path, cards: &str) -> Result<String> {
    if !template.contains(PAGE_TOKEN) {
        return Err(MenagerieError::TemplateMissingToken {
            path: template_path.to_path_buf(),
            token: PAGE_TOKEN.to_string(),
        });
    }
    Ok(template.replace(PAGE_TOKEN, cards))
}

/// Write the rendered page, overwriting any existing file.
pub fn write_page(path: &Path, page: &str) -> Result<()> {
    fs::write(path, page)?;
    tracing::debug!(path = %path.display(), bytes = page.len(), "wrote page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn substitutes_cards_for_token() {
        let template = "<ul class=\"cards\">__REPLACE_ANIMALS_INFO__</ul>";
        let page = render_page(template, Path::new("t.html"), "<li>Lion</li>").unwrap();
        assert_eq!(page, "<ul class=\"cards\"><li>Lion</li></ul>");
    }

    #[test]
    fn empty_cards_leave_empty_substitution() {
        let template = "<ul>__REPLACE_ANIMALS_INFO__</ul>";
        let page = render_page(template, Path::new("t.html"), "").unwrap();
        assert_eq!(page, "<ul></ul>");
    }

    #[test]
    fn template_without_token_is_an_error() {
        let result = render_page("<ul></ul>", Path::new("t.html"), "<li></li>");
        assert!(matches!(
            result,
            Err(MenagerieError::TemplateMissingToken { .. })
        ));
    }

    #[test]
    fn write_page_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("animals.html");
        std::fs::write(&path, "stale").unwrap();

        write_page(&path, "<html>fresh</html>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html>fresh</html>");
    }
}
