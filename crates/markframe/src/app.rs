//! The application facade.
//!
//! [`App`] owns a [`SessionState`] and wires the three stages together:
//! template resolution and override composition, markdown rendering, and
//! export capture. The CLI drives it, and integration tests use it as the
//! public entry point.

use markframe_export::{export_surface_with_quality, ExportArtifact, ExportError, ExportKind};
use markframe_render::{
    compose, find_template, render, EffectiveStyle, SettingsError, Template, VisualTree,
};

use crate::session::{Action, SessionState};

/// A live document session with rendering and export.
#[derive(Debug, Default)]
pub struct App {
    state: SessionState,
}

impl App {
    pub fn new(state: SessionState) -> Self {
        App { state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Applies an action to the session. On rejection the session keeps
    /// its prior state and the error is returned.
    pub fn dispatch(&mut self, action: Action) -> Result<(), SettingsError> {
        self.state = self.state.apply(action)?;
        Ok(())
    }

    /// The template the session currently resolves to. Unknown ids fall
    /// back to the first catalog entry.
    pub fn current_template(&self) -> &'static Template {
        find_template(&self.state.template_id)
    }

    /// The composed style configuration: template styles with the
    /// container-scope overrides applied on top.
    pub fn effective_style(&self) -> EffectiveStyle {
        compose(self.current_template(), &self.state.overrides)
    }

    /// Renders the current source into a styled visual tree.
    pub fn visual_tree(&self) -> VisualTree {
        render(&self.state.source, &self.effective_style())
    }

    /// Captures the current surface into an export artifact. The tree is
    /// snapshotted up front, so the session can keep changing while the
    /// capture runs.
    pub async fn export(
        &self,
        kind: ExportKind,
        quality: f32,
    ) -> Result<ExportArtifact, ExportError> {
        export_surface_with_quality(self.visual_tree(), kind, quality).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markframe_export::DEFAULT_QUALITY;

    #[test]
    fn test_unknown_template_falls_back() {
        let mut app = App::default();
        app.dispatch(Action::ApplyTemplate("missing".into())).unwrap();
        assert_eq!(app.current_template().id, "classic");
    }

    #[test]
    fn test_overrides_flow_into_effective_style() {
        let mut app = App::default();
        app.dispatch(Action::SetFontSize(22)).unwrap();
        app.dispatch(Action::SetPadding(10)).unwrap();
        let style = app.effective_style();
        assert_eq!(style.container.font_size, Some(22));
        assert_eq!(style.container.padding, Some(10));
    }

    #[test]
    fn test_rejected_dispatch_keeps_session() {
        let mut app = App::default();
        app.dispatch(Action::SetFontSize(20)).unwrap();
        assert!(app.dispatch(Action::SetFontSize(9)).is_err());
        assert_eq!(app.state().overrides.font_size(), 20);
    }

    #[tokio::test]
    async fn test_export_default_document() {
        let app = App::default();
        let artifact = app
            .export(ExportKind::Vector, DEFAULT_QUALITY)
            .await
            .unwrap();
        let text = String::from_utf8(artifact.bytes).unwrap();
        assert!(text.contains("Hello, World!"));
    }
}
