//! Editing session state and its transitions.
//!
//! A [`SessionState`] bundles everything a live editing session tracks:
//! the markdown source, the selected template, the style overrides, and
//! which side panel is open. Transitions are pure: [`SessionState::apply`]
//! takes the current state and an [`Action`] and returns the next state,
//! leaving the input untouched. A rejected action (out-of-range override,
//! unparseable color) returns the error and the caller keeps the prior
//! state.

use markframe_render::{OverrideSettings, SettingsError};

/// Which auxiliary panel is visible. At most one panel is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    #[default]
    None,
    SettingsOpen,
    TemplatesOpen,
}

/// A state transition requested by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the markdown source.
    EditSource(String),
    /// Select a template by id. Unknown ids resolve to the catalog
    /// fallback at render time, so selection itself never fails.
    ApplyTemplate(String),
    SetFontSize(u32),
    SetFontFamily(String),
    SetLineHeight(f32),
    /// Color values arrive as text (hex or named) and are parsed here.
    SetTextColor(String),
    SetBackgroundColor(String),
    SetPadding(u32),
    OpenSettings,
    OpenTemplates,
    ClosePanel,
}

/// The complete state of one editing session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub source: String,
    pub template_id: String,
    pub overrides: OverrideSettings,
    pub panel: PanelVisibility,
}

const DEFAULT_SOURCE: &str = "\
# Hello, World!

This is a **styled** _Markdown_ document.

- List item 1
- List item 2

## Features

1. Template-driven styling
2. Customizable overrides
3. Export as SVG or JPEG
";

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            source: DEFAULT_SOURCE.to_string(),
            template_id: "classic".to_string(),
            overrides: OverrideSettings::default(),
            panel: PanelVisibility::None,
        }
    }
}

impl SessionState {
    /// Applies an action, producing the successor state.
    ///
    /// Override actions validate through [`OverrideSettings`]; on rejection
    /// the error is returned and no partial change escapes. Opening one
    /// panel closes the other.
    pub fn apply(&self, action: Action) -> Result<SessionState, SettingsError> {
        let mut next = self.clone();
        match action {
            Action::EditSource(source) => next.source = source,
            Action::ApplyTemplate(id) => next.template_id = id,
            Action::SetFontSize(px) => next.overrides.set_font_size(px)?,
            Action::SetFontFamily(family) => next.overrides.set_font_family(&family)?,
            Action::SetLineHeight(value) => next.overrides.set_line_height(value)?,
            Action::SetTextColor(color) => next.overrides.set_text_color(color.parse()?),
            Action::SetBackgroundColor(color) => {
                next.overrides.set_background_color(color.parse()?)
            }
            Action::SetPadding(px) => next.overrides.set_padding(px)?,
            Action::OpenSettings => next.panel = PanelVisibility::SettingsOpen,
            Action::OpenTemplates => next.panel = PanelVisibility::TemplatesOpen,
            Action::ClosePanel => next.panel = PanelVisibility::None,
        }
        Ok(next)
    }
}
