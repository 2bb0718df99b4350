//! Entry-code normalization: the one structural repair applied before any
//! traversal. Dependency records may carry
//! `overlays.entry_code.attribute_entry_codes` with absent (`null`) value
//! lists; those become empty arrays so downstream consumers can treat every
//! entry as a sequence. Present values are left untouched, and missing
//! structure at any level is a no-op.

use ocaform_bundle::dependencies_value_mut;
use serde_json::Value;

/// Repair absent entry-code value lists across the document's dependency
/// list, wherever the envelope put it. Operates on the pipeline's owned copy.
pub fn normalize_entry_codes(doc: &mut Value) {
    let Some(dependencies) = dependencies_value_mut(doc).and_then(Value::as_array_mut) else {
        return;
    };

    let mut repaired = 0usize;
    for dependency in dependencies.iter_mut() {
        let Some(codes) = dependency
            .pointer_mut("/overlays/entry_code/attribute_entry_codes")
            .and_then(Value::as_object_mut)
        else {
            continue;
        };
        for value in codes.values_mut() {
            if value.is_null() {
                *value = Value::Array(Vec::new());
                repaired += 1;
            }
        }
    }

    if repaired > 0 {
        tracing::debug!(repaired, "normalized absent entry-code value lists");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_entry_codes_become_empty_arrays() {
        let mut doc = json!({
            "bundle": {},
            "dependencies": [{
                "overlays": {"entry_code": {"attribute_entry_codes": {"a": null, "b": ["X"]}}}
            }]
        });
        normalize_entry_codes(&mut doc);
        assert_eq!(
            doc.pointer("/dependencies/0/overlays/entry_code/attribute_entry_codes"),
            Some(&json!({"a": [], "b": ["X"]}))
        );
    }

    #[test]
    fn missing_structure_is_a_no_op() {
        let mut doc = json!({"bundle": {}, "dependencies": [{}, {"overlays": {}}]});
        let before = doc.clone();
        normalize_entry_codes(&mut doc);
        assert_eq!(doc, before);

        let mut doc = json!({"bundle": {}});
        normalize_entry_codes(&mut doc);
        assert_eq!(doc, json!({"bundle": {}}));
    }

    #[test]
    fn wrapped_envelope_dependencies_are_normalized_too() {
        let mut doc = json!({
            "oca_bundle": {
                "bundle": {},
                "dependencies": [{
                    "overlays": {"entry_code": {"attribute_entry_codes": {"x": null}}}
                }]
            }
        });
        normalize_entry_codes(&mut doc);
        assert_eq!(
            doc.pointer("/oca_bundle/dependencies/0/overlays/entry_code/attribute_entry_codes/x"),
            Some(&json!([]))
        );
    }
}
