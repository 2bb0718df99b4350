//! The generated form-overlay model.
//!
//! One overlay is produced per bundle. The serialized shape follows the
//! presentation-overlay draft: digest and type carry fixed placeholder
//! strings until a registry assigns real values, label facets are keyed
//! language → page, and widget descriptors live in a single `interaction`
//! entry keyed by attribute name in declaration order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const PRESENTATION_DIGEST_PLACEHOLDER: &str = "###presentationDigest###";
pub const PRESENTATION_TYPE_PLACEHOLDER: &str = "###presentationType###";

pub const PAGE_ONE: &str = "page-1";
pub const SECTION_ONE: &str = "section-1";

/// Per-language text map: language code → text.
pub type LanguageMap = IndexMap<String, String>;
/// Label facet: language code → page name → label text.
pub type LabelMap = IndexMap<String, IndexMap<String, String>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormOverlay {
    pub d: String,
    #[serde(rename = "type")]
    pub overlay_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_base: Option<String>,
    pub language: Vec<String>,
    pub pages: Vec<OverlayPage>,
    pub page_order: Vec<String>,
    pub page_labels: LabelMap,
    pub sidebar_label: LabelMap,
    pub subheading: LabelMap,
    /// Root bundle only, and only when at least one language has metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<LanguageMap>,
    pub interaction: Vec<Interaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayPage {
    pub named_section: String,
    pub sections: Vec<OverlaySection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySection {
    pub named_section: String,
    pub attribute_order: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub arguments: IndexMap<String, WidgetSpec>,
}

/// How a single attribute renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSpec {
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    /// Free-text widgets only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<LanguageMap>,
    /// Reference widgets only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_label: Option<LanguageMap>,
    /// Reference widgets only, and only when the target bundle was located
    /// and has at least one attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showing_attribute: Option<Vec<String>>,
}

impl WidgetSpec {
    pub fn plain(kind: WidgetKind) -> WidgetSpec {
        WidgetSpec {
            kind,
            placeholder: None,
            button_label: None,
            showing_attribute: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetKind {
    #[serde(rename = "DateTime")]
    DateTime,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "radio")]
    Radio,
    #[serde(rename = "reference")]
    Reference,
    #[serde(rename = "select")]
    Select,
    #[serde(rename = "textarea")]
    Textarea,
}
