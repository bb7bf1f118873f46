//! Named style templates and the process-wide template registry.
//!
//! A [`Template`] bundles an identity (id, display name, description,
//! preview reference) with a [`StyleSet`]: one style group per scope
//! (container / content / heading). Templates are immutable; the catalog is
//! parsed once from an embedded YAML definition and never mutated at
//! runtime.
//!
//! # Lookup semantics
//!
//! [`find_template`] never fails. An unknown id degrades deterministically
//! to the first catalog entry, so a stale or corrupted selection can never
//! block rendering:
//!
//! ```rust
//! use markframe_render::template::{find_template, templates};
//!
//! let fallback = find_template("does-not-exist");
//! assert_eq!(fallback.id, templates()[0].id);
//! ```

mod registry;

use serde::{Deserialize, Serialize};

use crate::style::StyleSet;

pub use registry::{find_template, templates};

/// An immutable, named style preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Template {
    /// Unique identity within the catalog.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// One-line description shown in template selection UIs.
    pub description: String,
    /// Reference to a preview asset.
    pub preview: String,
    /// The style groups this template applies per scope.
    pub styles: StyleSet,
}
