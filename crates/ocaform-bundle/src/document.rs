//! Envelope accessors over raw document values.
//!
//! Two envelope shapes are tolerated: the current
//! `{oca_bundle: {bundle, dependencies}}` wrapper and the legacy flat
//! `{bundle, dependencies}`. Accessors treat `null` like an absent key so a
//! half-written envelope never selects the wrong shape.

use serde_json::Value;

pub const OCA_BUNDLE_KEY: &str = "oca_bundle";
pub const BUNDLE_KEY: &str = "bundle";
pub const DEPENDENCIES_KEY: &str = "dependencies";
pub const EXTENSIONS_KEY: &str = "extensions";
pub const FORM_EXTENSION_KEY: &str = "form";

fn non_null<'a>(value: Option<&'a Value>) -> Option<&'a Value> {
    value.filter(|v| !v.is_null())
}

/// The root bundle value under either envelope.
pub fn bundle_value(doc: &Value) -> Option<&Value> {
    let wrapped = non_null(doc.get(OCA_BUNDLE_KEY)).and_then(|w| non_null(w.get(BUNDLE_KEY)));
    wrapped.or_else(|| non_null(doc.get(BUNDLE_KEY)))
}

/// The dependency list value under either envelope.
pub fn dependencies_value(doc: &Value) -> Option<&Value> {
    let wrapped =
        non_null(doc.get(OCA_BUNDLE_KEY)).and_then(|w| non_null(w.get(DEPENDENCIES_KEY)));
    wrapped.or_else(|| non_null(doc.get(DEPENDENCIES_KEY)))
}

/// Mutable access to the dependency list, wherever the envelope put it.
pub fn dependencies_value_mut(doc: &mut Value) -> Option<&mut Value> {
    let in_wrapper = doc
        .get(OCA_BUNDLE_KEY)
        .filter(|w| !w.is_null())
        .and_then(|w| w.get(DEPENDENCIES_KEY))
        .is_some_and(|d| !d.is_null());
    if in_wrapper {
        return doc
            .get_mut(OCA_BUNDLE_KEY)
            .and_then(|w| w.get_mut(DEPENDENCIES_KEY));
    }
    doc.get_mut(DEPENDENCIES_KEY).filter(|d| !d.is_null())
}

/// The already-generated overlay sequence, if the document carries a
/// non-empty one. An empty or non-array `extensions.form` does not count.
pub fn existing_form_overlays(doc: &Value) -> Option<&Vec<Value>> {
    doc.get(EXTENSIONS_KEY)
        .and_then(|e| e.get(FORM_EXTENSION_KEY))
        .and_then(Value::as_array)
        .filter(|form| !form.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrapped_envelope_wins_over_flat_keys() {
        let doc = json!({
            "oca_bundle": {"bundle": {"capture_base": {"d": "B1"}}, "dependencies": []},
            "bundle": {"capture_base": {"d": "stale"}}
        });
        let id = bundle_value(&doc)
            .and_then(|b| b.pointer("/capture_base/d"))
            .and_then(Value::as_str);
        assert_eq!(id, Some("B1"));
    }

    #[test]
    fn legacy_envelope_is_read_from_flat_keys() {
        let doc = json!({"bundle": {"capture_base": {"d": "B1"}}, "dependencies": [{"d": "X"}]});
        assert!(bundle_value(&doc).is_some());
        assert_eq!(dependencies_value(&doc).and_then(Value::as_array).map(Vec::len), Some(1));
    }

    #[test]
    fn null_wrapper_falls_back_to_legacy() {
        let doc = json!({"oca_bundle": null, "bundle": {"capture_base": {"d": "B1"}}});
        assert!(bundle_value(&doc).is_some());
    }

    #[test]
    fn empty_form_extension_is_ignored() {
        let doc = json!({"extensions": {"form": []}});
        assert!(existing_form_overlays(&doc).is_none());
        let doc = json!({"extensions": {"form": [{"d": "x"}]}});
        assert_eq!(existing_form_overlays(&doc).map(Vec::len), Some(1));
    }

    #[test]
    fn dependencies_value_mut_targets_the_wrapper_list() {
        let mut doc = json!({"oca_bundle": {"bundle": {}, "dependencies": [{"d": "X"}]}});
        let deps = dependencies_value_mut(&mut doc).unwrap();
        deps.as_array_mut().unwrap().push(json!({"d": "Y"}));
        assert_eq!(
            doc.pointer("/oca_bundle/dependencies")
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(2)
        );
    }
}
