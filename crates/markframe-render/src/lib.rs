//! # markframe-render — style composition and document rendering
//!
//! The pure core of markframe: a fixed catalog of style templates, bounded
//! user overrides, the composition rule that merges the two, and a markdown
//! renderer that maps the composed styles onto structural roles.
//!
//! ## Core concepts
//!
//! - [`Template`]: immutable bundle of container/content/heading style groups
//! - [`OverrideSettings`]: the six user-tunable, range-validated properties
//! - [`compose`]: merges a template with overrides into an [`EffectiveStyle`]
//! - [`render`]: markdown source + effective style to a [`VisualTree`]
//!
//! ## Quick start
//!
//! ```rust
//! use markframe_render::{compose, find_template, render, OverrideSettings};
//!
//! let template = find_template("modern");
//! let mut overrides = OverrideSettings::default();
//! overrides.set_font_size(20).unwrap();
//!
//! let style = compose(template, &overrides);
//! let tree = render("# Hello\n\nSome body text.", &style);
//!
//! assert_eq!(tree.blocks.len(), 2);
//! assert_eq!(tree.container.font_size, Some(20));
//! ```
//!
//! ## Composition precedence
//!
//! Overrides win only for font size, text color, background color, and
//! padding — and only on the container scope. A template's heading and
//! content groups are override-immune, which keeps its typographic identity
//! intact while the user tunes density and contrast.

pub mod compose;
pub mod document;
pub mod overrides;
pub mod style;
pub mod template;

pub use compose::{compose, EffectiveStyle};
pub use document::{parse, render, Block, Role, Span, StyledBlock, VisualTree};
pub use overrides::{
    OverrideSettings, SettingsError, FONT_FAMILIES, FONT_SIZE_RANGE, LINE_HEIGHT_RANGE,
    PADDING_RANGE,
};
pub use style::{Color, ColorParseError, StyleGroup, StyleSet};
pub use template::{find_template, templates, Template};
