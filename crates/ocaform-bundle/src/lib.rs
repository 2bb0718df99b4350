//! Bundle and document model for ocaform
//!
//! A capture-schema document is a root bundle plus a nested dependency graph.
//! Bundles carry typed attributes, optional localized metadata records, and
//! optional entry-code overlays. This crate provides:
//!
//! - typed, Option-bearing read views of bundles (`Bundle`, `CaptureBase`, ...)
//!   that tolerate structurally incomplete input, and
//! - envelope accessors over raw `serde_json::Value` documents, so unknown
//!   document content round-trips losslessly through the pipeline.
//!
//! Nothing here mutates caller-owned data; views borrow or are parsed from a
//! `Value` the pipeline already owns.

pub mod bundle;
pub mod document;

pub use bundle::{Bundle, BundleOverlays, CaptureBase, MetaRecord};
pub use document::{
    bundle_value, dependencies_value, dependencies_value_mut, existing_form_overlays,
    BUNDLE_KEY, DEPENDENCIES_KEY, EXTENSIONS_KEY, FORM_EXTENSION_KEY, OCA_BUNDLE_KEY,
};
