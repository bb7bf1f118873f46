//! The fixed, ordered template catalog.
//!
//! The catalog is embedded at compile time and parsed exactly once. Its
//! order is the order templates are presented in, and the first entry doubles
//! as the fallback for unknown ids.

use once_cell::sync::Lazy;

use super::Template;

const TEMPLATES_YAML: &str = include_str!("templates.yaml");

static REGISTRY: Lazy<Vec<Template>> = Lazy::new(|| {
    let templates: Vec<Template> =
        serde_yaml::from_str(TEMPLATES_YAML).expect("embedded template catalog must parse");
    assert!(
        !templates.is_empty(),
        "embedded template catalog must not be empty"
    );
    templates
});

/// Returns the full catalog in presentation order.
pub fn templates() -> &'static [Template] {
    &REGISTRY
}

/// Looks up a template by id.
///
/// Unknown ids fall back to the first catalog entry rather than erroring;
/// a selection that no longer resolves must never block rendering.
pub fn find_template(id: &str) -> &'static Template {
    REGISTRY.iter().find(|t| t.id == id).unwrap_or(&REGISTRY[0])
}
