//! Pre-order traversal of the bundle graph.

use std::collections::HashSet;

use ocaform_bundle::Bundle;

use crate::overlay::FormOverlay;
use crate::synthesize::synthesize;

/// Produce one overlay per bundle: the root first, then every dependency in
/// depth-first, pre-order, declaration order. Output order is part of the
/// externally observable contract.
///
/// An explicit stack drives the traversal, with a visited set keyed by
/// capture-base id so a cyclic or duplicated dependency record cannot loop
/// the walk. Bundles without a capture-base id are always processed.
pub fn walk(root: &Bundle, dependencies: &[Bundle]) -> Vec<FormOverlay> {
    let mut overlays = vec![synthesize(root, true, dependencies)];

    let mut visited: HashSet<&str> = root.capture_base_id().into_iter().collect();
    let mut stack: Vec<&Bundle> = dependencies.iter().rev().collect();

    while let Some(bundle) = stack.pop() {
        if let Some(id) = bundle.capture_base_id() {
            if !visited.insert(id) {
                tracing::warn!(capture_base = id, "skipping repeated dependency record");
                continue;
            }
        }
        overlays.push(synthesize(bundle, false, dependencies));
        for dep in bundle.dependencies().iter().rev() {
            stack.push(dep);
        }
    }

    overlays
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn deps(value: serde_json::Value) -> Vec<Bundle> {
        Bundle::list_from_value(&value)
    }

    #[test]
    fn preorder_depth_first_over_nested_dependencies() {
        let root = Bundle::from_value(&json!({"capture_base": {"d": "R"}}));
        let dependencies = deps(json!([
            {
                "capture_base": {"d": "A"},
                "dependencies": [
                    {"capture_base": {"d": "A1"}},
                    {"capture_base": {"d": "A2"}}
                ]
            },
            {"capture_base": {"d": "B"}}
        ]));
        let order: Vec<Option<String>> = walk(&root, &dependencies)
            .into_iter()
            .map(|o| o.capture_base)
            .collect();
        let expected: Vec<Option<String>> = ["R", "A", "A1", "A2", "B"]
            .iter()
            .map(|s| Some(s.to_string()))
            .collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn repeated_capture_base_is_walked_once() {
        let root = Bundle::from_value(&json!({"capture_base": {"d": "R"}}));
        let dependencies = deps(json!([
            {"capture_base": {"d": "A"}, "dependencies": [{"capture_base": {"d": "R"}}]},
            {"capture_base": {"d": "A"}}
        ]));
        let order: Vec<Option<String>> = walk(&root, &dependencies)
            .into_iter()
            .map(|o| o.capture_base)
            .collect();
        assert_eq!(order, vec![Some("R".to_string()), Some("A".to_string())]);
    }

    #[test]
    fn bundles_without_ids_are_always_processed() {
        let root = Bundle::from_value(&json!({}));
        let dependencies = deps(json!([{}, {}]));
        assert_eq!(walk(&root, &dependencies).len(), 3);
    }
}
