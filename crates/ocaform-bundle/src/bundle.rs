//! Typed read views of capture-schema bundles.
//!
//! Every field is optional: the upstream schema format leaves most structure
//! optional, and a missing `capture_base`, `attributes`, `overlays.meta` or
//! `dependencies` must degrade to "empty", never to an error. Attribute type
//! tags stay as raw `serde_json::Value` because they are an open union (type
//! name string, `refs:` tag, enumeration array, or anything else).

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// One node in the schema graph.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Bundle {
    /// Top-level identifier, used by reference-only dependency records.
    pub d: Option<String>,
    pub capture_base: Option<CaptureBase>,
    pub overlays: Option<BundleOverlays>,
    pub dependencies: Option<Vec<Bundle>>,
}

/// The structural definition of a bundle: a stable identifier plus an
/// order-significant attribute map.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CaptureBase {
    pub d: Option<String>,
    pub attributes: IndexMap<String, Value>,
}

/// The subset of a bundle's overlays the pipeline reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BundleOverlays {
    pub meta: Vec<MetaRecord>,
}

/// Per-language descriptive record. Records are scoped to a bundle by their
/// `capture_base` field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetaRecord {
    pub language: Option<String>,
    pub capture_base: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
}

impl Bundle {
    /// Parse a bundle view out of a raw document value. Malformed shapes
    /// degrade to the empty bundle rather than failing.
    pub fn from_value(value: &Value) -> Bundle {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Parse a dependency list out of a raw document value.
    pub fn list_from_value(value: &Value) -> Vec<Bundle> {
        match value {
            Value::Array(items) => items.iter().map(Bundle::from_value).collect(),
            _ => Vec::new(),
        }
    }

    /// The capture-base identifier, if the bundle carries one.
    pub fn capture_base_id(&self) -> Option<&str> {
        self.capture_base.as_ref().and_then(|cb| cb.d.as_deref())
    }

    /// The attribute map in its original order; empty when absent.
    pub fn attributes(&self) -> Option<&IndexMap<String, Value>> {
        self.capture_base.as_ref().map(|cb| &cb.attributes)
    }

    /// Metadata records belonging to this bundle: those whose `capture_base`
    /// equals this bundle's capture-base id (`Option` equality, so records
    /// without a capture base attach to bundles without one) and that carry a
    /// language to key label maps by.
    pub fn own_meta(&self) -> Vec<&MetaRecord> {
        let id = self.capture_base_id();
        self.overlays
            .as_ref()
            .map(|o| {
                o.meta
                    .iter()
                    .filter(|m| m.capture_base.as_deref() == id)
                    .filter(|m| m.language.is_some())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Nested dependencies; empty slice when absent.
    pub fn dependencies(&self) -> &[Bundle] {
        self.dependencies.as_deref().unwrap_or_default()
    }
}

impl MetaRecord {
    /// Display name with the fixed fallback used by every label facet.
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Default")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_structure_degrades_to_empty() {
        let bundle = Bundle::from_value(&json!({}));
        assert!(bundle.capture_base_id().is_none());
        assert!(bundle.attributes().is_none());
        assert!(bundle.own_meta().is_empty());
        assert!(bundle.dependencies().is_empty());
    }

    #[test]
    fn attributes_preserve_declaration_order() {
        let bundle = Bundle::from_value(&json!({
            "capture_base": {
                "d": "B1",
                "attributes": {"zeta": "Text", "alpha": "Numeric", "mid": "Boolean"}
            }
        }));
        let keys: Vec<&str> = bundle
            .attributes()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn own_meta_filters_by_capture_base_and_language() {
        let bundle = Bundle::from_value(&json!({
            "capture_base": {"d": "B1", "attributes": {}},
            "overlays": {
                "meta": [
                    {"language": "eng", "capture_base": "B1", "name": "Person"},
                    {"language": "fra", "capture_base": "B2", "name": "Autre"},
                    {"capture_base": "B1", "name": "no language"}
                ]
            }
        }));
        let meta = bundle.own_meta();
        assert_eq!(meta.len(), 1);
        assert_eq!(meta[0].language.as_deref(), Some("eng"));
        assert_eq!(meta[0].name_or_default(), "Person");
    }

    #[test]
    fn meta_without_capture_base_matches_bundle_without_one() {
        let bundle = Bundle::from_value(&json!({
            "overlays": {"meta": [{"language": "eng", "name": "Loose"}]}
        }));
        assert_eq!(bundle.own_meta().len(), 1);
    }

    #[test]
    fn reference_only_dependency_keeps_top_level_id() {
        let bundle = Bundle::from_value(&json!({"d": "REF1"}));
        assert_eq!(bundle.d.as_deref(), Some("REF1"));
        assert!(bundle.capture_base_id().is_none());
    }
}
