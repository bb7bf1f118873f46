//! Style composition: merging a template with user overrides.
//!
//! [`compose`] produces the effective, render-ready style configuration.
//! The merge is deliberately asymmetric: overrides win only for the four
//! container-scope properties {font size, text color, background color,
//! padding}. Everything else on the container, and the entirety of the
//! heading and content scopes, comes verbatim from the template. A user can
//! tune density and contrast without destroying a template's typographic
//! identity (font family, spacing rhythm, accent borders).
//!
//! The function is pure and total: inputs are pre-validated bounded values,
//! so there is no error path, and identical inputs always yield an identical
//! configuration.

use crate::overrides::OverrideSettings;
use crate::style::StyleGroup;
use crate::template::Template;

/// The merged, render-ready style configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveStyle {
    /// Container surface style: template values with the four override
    /// properties applied on top.
    pub container: StyleGroup,
    /// Body content style, verbatim from the template.
    pub content: StyleGroup,
    /// Heading style (levels 1-6), verbatim from the template.
    pub heading: StyleGroup,
}

/// Merges a template's style set with user overrides.
pub fn compose(template: &Template, overrides: &OverrideSettings) -> EffectiveStyle {
    let mut container = template.styles.container.clone();
    container.font_size = Some(overrides.font_size());
    container.color = Some(overrides.text_color());
    container.background_color = Some(overrides.background_color());
    container.padding = Some(overrides.padding());

    EffectiveStyle {
        container,
        content: template.styles.content.clone(),
        heading: template.styles.heading.clone(),
    }
}
