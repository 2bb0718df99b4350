//! Cross-reference resolution: find the bundle a `refs:` tag points at.

use ocaform_bundle::Bundle;

/// Locate the bundle whose capture-base identifier equals `target_id`.
///
/// Resolution order, first match wins:
/// 1. `current` itself, by capture-base id,
/// 2. any bundle in `dependencies`, by capture-base id,
/// 3. any bundle in `dependencies`, by top-level `d` (reference-only
///    dependency records carry no capture base),
/// 4. the same steps against each dependency subtree, depth-first.
///
/// Implemented with an explicit worklist; the dependency graph is
/// open-ended and arbitrarily deep. `None` means "skip optional reference
/// enrichment", never an error.
pub fn locate<'a>(
    target_id: &str,
    current: &'a Bundle,
    dependencies: &'a [Bundle],
) -> Option<&'a Bundle> {
    let mut stack: Vec<(&Bundle, &[Bundle])> = vec![(current, dependencies)];

    while let Some((bundle, deps)) = stack.pop() {
        if bundle.capture_base_id() == Some(target_id) {
            return Some(bundle);
        }
        if let Some(found) = deps.iter().find(|d| d.capture_base_id() == Some(target_id)) {
            return Some(found);
        }
        if let Some(found) = deps.iter().find(|d| d.d.as_deref() == Some(target_id)) {
            return Some(found);
        }
        // Descend in declaration order: reverse-push so the first subtree is
        // searched first.
        for dep in deps.iter().rev() {
            if !dep.dependencies().is_empty() {
                stack.push((dep, dep.dependencies()));
            }
        }
    }

    None
}
