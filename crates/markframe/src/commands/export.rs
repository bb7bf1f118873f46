//! Export a markdown document as a styled image.

use std::fs;
use std::path::PathBuf;

use markframe_export::{DirectorySink, DownloadSink, ExportKind};

use crate::app::App;
use crate::session::{Action, SessionState};

/// Optional style overrides collected from the command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub font_size: Option<u32>,
    pub font_family: Option<String>,
    pub line_height: Option<f32>,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    pub padding: Option<u32>,
}

impl Overrides {
    fn into_actions(self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(px) = self.font_size {
            actions.push(Action::SetFontSize(px));
        }
        if let Some(family) = self.font_family {
            actions.push(Action::SetFontFamily(family));
        }
        if let Some(value) = self.line_height {
            actions.push(Action::SetLineHeight(value));
        }
        if let Some(color) = self.text_color {
            actions.push(Action::SetTextColor(color));
        }
        if let Some(color) = self.background_color {
            actions.push(Action::SetBackgroundColor(color));
        }
        if let Some(px) = self.padding {
            actions.push(Action::SetPadding(px));
        }
        actions
    }
}

pub async fn run(
    input: PathBuf,
    template: String,
    format: String,
    out: PathBuf,
    quality: f32,
    overrides: Overrides,
) -> anyhow::Result<()> {
    let kinds: &[ExportKind] = match format.as_str() {
        "svg" => &[ExportKind::Vector],
        "jpg" => &[ExportKind::Raster],
        "both" => &[ExportKind::Vector, ExportKind::Raster],
        _ => {
            return Err(anyhow::anyhow!(
                "Unknown format: {format}. Use: svg, jpg, both"
            ));
        }
    };

    let source = fs::read_to_string(&input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.display()))?;

    let mut app = App::new(SessionState::default());
    app.dispatch(Action::EditSource(source))?;
    app.dispatch(Action::ApplyTemplate(template))?;
    for action in overrides.into_actions() {
        app.dispatch(action)
            .map_err(|e| anyhow::anyhow!("Invalid override: {e}"))?;
    }

    println!("Exporting: {}", input.display());
    println!("  Template: {}", app.current_template().name);

    let mut sink = DirectorySink::new(&out);
    for kind in kinds {
        tracing::debug!(?kind, quality, "capturing surface");
        let artifact = app.export(*kind, quality).await?;
        sink.save_as(&artifact.filename, &artifact.bytes)?;
        println!(
            "  Wrote {} ({} bytes)",
            sink.path_for(&artifact.filename).display(),
            artifact.bytes.len()
        );
    }

    Ok(())
}
