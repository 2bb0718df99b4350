//! Presentation: stable document rendering plus clipboard export.

use anyhow::{Context, Result};
use serde_json::Value;

/// Pretty-print the document with stable key ordering: input keys stay in
/// parse order, generated keys in generation order, so repeated renders diff
/// cleanly.
pub fn render(document: &Value) -> Result<String> {
    serde_json::to_string_pretty(document).context("failed to render document")
}

/// Copy rendered text to the system clipboard. The document itself is never
/// altered by this path.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("clipboard write failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_preserves_input_key_order() {
        let doc: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2}"#).unwrap();
        let rendered = render(&doc).unwrap();
        let zeta = rendered.find("\"zeta\"").unwrap();
        let alpha = rendered.find("\"alpha\"").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn render_is_deterministic() {
        let doc: Value = serde_json::from_str(r#"{"b": [1, 2], "a": {"y": 1, "x": 2}}"#).unwrap();
        assert_eq!(render(&doc).unwrap(), render(&doc).unwrap());
    }
}
