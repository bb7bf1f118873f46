//! Capture and encode styled document surfaces.
//!
//! This crate turns a [`markframe_render::VisualTree`] into downloadable
//! artifacts in two formats:
//!
//! - **vector**: a standalone SVG document, resolution-independent
//! - **raster**: a JPEG capture of that SVG, lossy at a configurable
//!   quality factor (default 0.95)
//!
//! Capture is asynchronous and snapshot-based: the tree is moved into the
//! export, so concurrent exports and in-flight document edits do not
//! interfere. All failures are typed [`ExportError`] values.
//!
//! ```
//! use markframe_export::{export_surface, ExportKind};
//! use markframe_render::{compose, find_template, render, OverrideSettings};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), markframe_export::ExportError> {
//! let style = compose(find_template("classic"), &OverrideSettings::default());
//! let tree = render("# Hello", &style);
//! let artifact = export_surface(tree, ExportKind::Vector).await?;
//! assert_eq!(artifact.filename, "markframe-export.svg");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod pipeline;
pub mod raster;
pub mod svg;

pub use error::{ExportError, Result};
pub use pipeline::{
    export_surface, export_surface_with_quality, DirectorySink, DownloadSink, ExportArtifact,
    ExportKind, DEFAULT_QUALITY, FILENAME_STEM,
};
pub use svg::render_svg;
