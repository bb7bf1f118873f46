//! The asynchronous export pipeline.
//!
//! An export captures a [`VisualTree`] snapshot into downloadable bytes.
//! The tree is moved into the capture, so edits made while an export is in
//! flight never bleed into its output; two exports of different formats can
//! run concurrently without coordinating.
//!
//! Serialization and encoding are CPU-bound, so the work runs on the
//! blocking pool rather than the async executor.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use markframe_render::VisualTree;

use crate::error::{ExportError, Result};
use crate::{raster, svg};

/// Default lossy compression quality for raster exports.
pub const DEFAULT_QUALITY: f32 = 0.95;

/// Filename stem for produced artifacts; the extension comes from the kind.
pub const FILENAME_STEM: &str = "markframe-export";

/// The two supported capture formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Lossy pixel capture (JPEG).
    Raster,
    /// Resolution-independent capture (SVG).
    Vector,
}

impl ExportKind {
    pub fn extension(self) -> &'static str {
        match self {
            ExportKind::Raster => "jpg",
            ExportKind::Vector => "svg",
        }
    }
}

/// A finished export: encoded bytes plus the conventional filename.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub kind: ExportKind,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Captures a surface snapshot with the default raster quality.
pub async fn export_surface(surface: VisualTree, kind: ExportKind) -> Result<ExportArtifact> {
    export_surface_with_quality(surface, kind, DEFAULT_QUALITY).await
}

/// Captures a surface snapshot into an artifact of the given kind.
///
/// Vector output is the serialized SVG itself; raster output rasterizes
/// that SVG and encodes it as JPEG at `quality` (0.0..=1.0, clamped).
pub async fn export_surface_with_quality(
    surface: VisualTree,
    kind: ExportKind,
    quality: f32,
) -> Result<ExportArtifact> {
    tracing::debug!(?kind, blocks = surface.blocks.len(), "starting export capture");

    let bytes = tokio::task::spawn_blocking(move || {
        let document = svg::render_svg(&surface);
        match kind {
            ExportKind::Vector => Ok(document.into_bytes()),
            ExportKind::Raster => raster::rasterize(&document, quality),
        }
    })
    .await
    .map_err(|err| ExportError::Capture(err.to_string()))??;

    let artifact = ExportArtifact {
        kind,
        filename: format!("{}.{}", FILENAME_STEM, kind.extension()),
        bytes,
    };
    tracing::info!(
        filename = %artifact.filename,
        size = artifact.bytes.len(),
        "export complete"
    );
    Ok(artifact)
}

/// Destination for finished artifacts.
///
/// The pipeline produces bytes and a suggested filename; where they land is
/// the sink's concern.
pub trait DownloadSink {
    fn save_as(&mut self, filename: &str, bytes: &[u8]) -> io::Result<()>;
}

/// Sink that writes artifacts into a directory on disk.
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySink { dir: dir.into() }
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

impl DownloadSink for DirectorySink {
    fn save_as(&mut self, filename: &str, bytes: &[u8]) -> io::Result<()> {
        if !self.dir.as_os_str().is_empty() && !Path::new(&self.dir).exists() {
            fs::create_dir_all(&self.dir)?;
        }
        fs::write(self.path_for(filename), bytes)
    }
}
