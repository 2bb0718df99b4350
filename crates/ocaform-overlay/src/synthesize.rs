//! Overlay synthesis for a single bundle: the central algorithm.
//!
//! A bundle's overlay is derived entirely from the bundle itself plus, for
//! reference attributes, the top-level dependency list (preview hints). The
//! language set comes from the bundle's own metadata records; when a bundle
//! has no metadata, the overlay simply carries no languages and no labels.
//! No synthetic default languages are invented.

use indexmap::IndexMap;
use ocaform_bundle::{Bundle, MetaRecord};
use serde_json::Value;

use crate::locate::locate;
use crate::overlay::{
    FormOverlay, Interaction, LabelMap, LanguageMap, OverlayPage, OverlaySection, WidgetKind,
    WidgetSpec, PAGE_ONE, PRESENTATION_DIGEST_PLACEHOLDER, PRESENTATION_TYPE_PLACEHOLDER,
    SECTION_ONE,
};

const REFS_PREFIX: &str = "refs:";
/// How many target attributes a reference preview shows.
const PREVIEW_ATTRIBUTES: usize = 2;

/// Derive the form overlay for one bundle.
///
/// `dependencies` is the document's top-level dependency list; it is only
/// consulted to resolve `refs:` targets. `is_root` gates the `title` facet.
pub fn synthesize(bundle: &Bundle, is_root: bool, dependencies: &[Bundle]) -> FormOverlay {
    let meta = bundle.own_meta();
    let languages = languages_of(&meta);

    let mut page_labels = LabelMap::new();
    let mut sidebar_label = LabelMap::new();
    let mut subheading = LabelMap::new();
    for lang in &languages {
        // The find cannot miss: `languages` was derived from `meta`. The
        // fallback keeps a hand-edited document from knocking labels out.
        let name = meta_for(&meta, lang)
            .map(MetaRecord::name_or_default)
            .unwrap_or("Default");
        page_labels.insert(lang.clone(), page_entry(format!("Page 1: {name}")));
        sidebar_label.insert(lang.clone(), page_entry(name.to_string()));
        subheading.insert(lang.clone(), page_entry(format!("{name} details")));
    }

    let title = (is_root && !languages.is_empty()).then(|| {
        languages
            .iter()
            .map(|lang| {
                let text = meta_for(&meta, lang)
                    .and_then(|m| m.title.as_deref().or(m.name.as_deref()))
                    .unwrap_or("Default");
                (lang.clone(), text.to_string())
            })
            .collect::<LanguageMap>()
    });

    let attribute_order: Vec<String> = bundle
        .attributes()
        .map(|attrs| attrs.keys().cloned().collect())
        .unwrap_or_default();

    let pages = vec![OverlayPage {
        named_section: PAGE_ONE.to_string(),
        sections: vec![OverlaySection {
            named_section: SECTION_ONE.to_string(),
            attribute_order,
        }],
    }];
    // Derived mechanically from `pages`, never hand-authored.
    let page_order: Vec<String> = pages.iter().map(|p| p.named_section.clone()).collect();

    let mut arguments: IndexMap<String, WidgetSpec> = IndexMap::new();
    if let Some(attrs) = bundle.attributes() {
        for (attr_name, type_tag) in attrs {
            arguments.insert(
                attr_name.clone(),
                widget_for(attr_name, type_tag, &languages, bundle, dependencies),
            );
        }
    }

    FormOverlay {
        d: PRESENTATION_DIGEST_PLACEHOLDER.to_string(),
        overlay_type: PRESENTATION_TYPE_PLACEHOLDER.to_string(),
        capture_base: bundle.capture_base_id().map(str::to_owned),
        language: languages,
        pages,
        page_order,
        page_labels,
        sidebar_label,
        subheading,
        title,
        interaction: vec![Interaction { arguments }],
    }
}

/// Classify an attribute's type tag. Precedence is fixed: exact primitive
/// names first, then the `refs:` prefix (always a string, so it can never
/// collide with the enumeration case), then enumeration arrays; anything
/// unrecognized renders as free text.
pub fn classify(type_tag: &Value) -> WidgetKind {
    match type_tag {
        Value::String(s) if s == "DateTime" => WidgetKind::DateTime,
        Value::String(s) if s == "Numeric" => WidgetKind::Number,
        Value::String(s) if s == "Boolean" => WidgetKind::Radio,
        Value::String(s) if s.starts_with(REFS_PREFIX) => WidgetKind::Reference,
        Value::Array(_) => WidgetKind::Select,
        _ => WidgetKind::Textarea,
    }
}

fn widget_for(
    attr_name: &str,
    type_tag: &Value,
    languages: &[String],
    bundle: &Bundle,
    dependencies: &[Bundle],
) -> WidgetSpec {
    let mut spec = WidgetSpec::plain(classify(type_tag));
    match spec.kind {
        WidgetKind::Textarea => {
            spec.placeholder = Some(per_language(languages, |_| format!("Enter {attr_name}")));
        }
        WidgetKind::Reference => {
            spec.button_label = Some(per_language(languages, |_| "Select".to_string()));
            let target = type_tag
                .as_str()
                .and_then(|s| s.strip_prefix(REFS_PREFIX))
                .unwrap_or_default();
            if let Some(hit) = locate(target, bundle, dependencies) {
                let preview: Vec<String> = hit
                    .attributes()
                    .map(|attrs| attrs.keys().take(PREVIEW_ATTRIBUTES).cloned().collect())
                    .unwrap_or_default();
                if !preview.is_empty() {
                    spec.showing_attribute = Some(preview);
                }
            }
        }
        _ => {}
    }
    spec
}

/// Distinct languages in first-occurrence order.
fn languages_of(meta: &[&MetaRecord]) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    for record in meta {
        let Some(lang) = record.language.as_deref() else {
            continue;
        };
        if !languages.iter().any(|l| l == lang) {
            languages.push(lang.to_string());
        }
    }
    languages
}

fn meta_for<'a>(meta: &[&'a MetaRecord], lang: &str) -> Option<&'a MetaRecord> {
    meta.iter()
        .find(|m| m.language.as_deref() == Some(lang))
        .copied()
}

fn page_entry(text: String) -> IndexMap<String, String> {
    IndexMap::from([(PAGE_ONE.to_string(), text)])
}

fn per_language(languages: &[String], text: impl Fn(&str) -> String) -> LanguageMap {
    languages
        .iter()
        .map(|lang| (lang.clone(), text(lang)))
        .collect()
}
