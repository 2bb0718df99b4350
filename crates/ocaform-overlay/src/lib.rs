//! Form-overlay synthesis for capture-schema documents
//!
//! Given a root bundle plus a dependency graph, derive one presentation
//! ("form") overlay per bundle and merge the result back into the document
//! under `extensions.form`. The merge is idempotent: re-running on an
//! already-annotated document is a no-op.
//!
//! Pipeline:
//! - normalize: repair absent entry-code value lists before any traversal
//! - walk: pre-order DFS over root + dependencies, one overlay per bundle
//! - synthesize: pages, widget classification, localized labels, reference
//!   preview hints
//! - apply: the merge/idempotency gate, tolerating two envelope shapes
//!
//! The whole pipeline is synchronous, infallible, and purely functional over
//! its input: structurally incomplete bundles degrade to empty overlays,
//! unresolvable references degrade to widgets without preview hints.

pub mod apply;
pub mod locate;
pub mod normalize;
pub mod overlay;
pub mod synthesize;
pub mod walk;

pub use apply::apply;
pub use locate::locate;
pub use normalize::normalize_entry_codes;
pub use overlay::{
    FormOverlay, Interaction, OverlayPage, OverlaySection, WidgetKind, WidgetSpec,
    PRESENTATION_DIGEST_PLACEHOLDER, PRESENTATION_TYPE_PLACEHOLDER,
};
pub use synthesize::synthesize;
pub use walk::walk;
