//! Style primitives: typed CSS-like property bags and color values.
//!
//! A [`StyleGroup`] holds the visual properties for one scope of a document
//! (the container surface, body content, or headings). Every field is
//! optional: a template sets only the properties it cares about, and anything
//! left unset falls through to the renderer's defaults.
//!
//! Style groups deserialize from YAML with kebab-case keys, so a template
//! definition reads like a stylesheet:
//!
//! ```yaml
//! container:
//!   font-family: "Georgia, serif"
//!   line-height: 1.6
//!   color: "#333333"
//!   padding: 40
//! ```

mod color;

use serde::{Deserialize, Serialize};

pub use color::{Color, ColorParseError};

/// Visual properties for one style scope.
///
/// Numeric lengths are pixels. Compound properties that have no single
/// numeric form (borders, shadows, margins) are kept as their CSS string
/// representation and interpreted by the export layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct StyleGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
}

impl StyleGroup {
    /// Returns true if no property is set.
    pub fn is_empty(&self) -> bool {
        *self == StyleGroup::default()
    }
}

/// The three style scopes a template defines.
///
/// `container` applies to the whole document surface, `content` to
/// paragraph-level nodes, and `heading` uniformly to heading levels 1-6.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleSet {
    #[serde(default)]
    pub container: StyleGroup,
    #[serde(default)]
    pub content: StyleGroup,
    #[serde(default)]
    pub heading: StyleGroup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_group_default_is_empty() {
        assert!(StyleGroup::default().is_empty());
    }

    #[test]
    fn test_style_group_from_yaml() {
        let group: StyleGroup = serde_yaml::from_str(
            r##"
            font-family: "Georgia, serif"
            line-height: 1.6
            color: "#333333"
            background-color: "#ffffff"
            padding: 40
            max-width: 800
            border: "1px solid #e0e0e0"
            "##,
        )
        .unwrap();

        assert_eq!(group.font_family.as_deref(), Some("Georgia, serif"));
        assert_eq!(group.line_height, Some(1.6));
        assert_eq!(group.color, Some(Color::rgb(0x33, 0x33, 0x33)));
        assert_eq!(group.padding, Some(40));
        assert_eq!(group.max_width, Some(800));
        assert_eq!(group.border.as_deref(), Some("1px solid #e0e0e0"));
        assert!(!group.is_empty());
    }

    #[test]
    fn test_style_group_rejects_unknown_keys() {
        let result: Result<StyleGroup, _> = serde_yaml::from_str("text-shadow: none");
        assert!(result.is_err());
    }

    #[test]
    fn test_style_set_missing_scopes_default_empty() {
        let set: StyleSet = serde_yaml::from_str(
            r#"
            container:
              padding: 10
            "#,
        )
        .unwrap();

        assert_eq!(set.container.padding, Some(10));
        assert!(set.content.is_empty());
        assert!(set.heading.is_empty());
    }
}
