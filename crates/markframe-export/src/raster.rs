//! SVG to JPEG rasterization.
//!
//! The raster path reuses the vector serializer: the visual tree is first
//! rendered to SVG, then parsed and painted to a pixmap with resvg, then
//! encoded as baseline JPEG. Quality is a 0.0..=1.0 factor mapped onto the
//! encoder's 1..=100 scale.

use resvg::{tiny_skia, usvg};

use crate::error::{ExportError, Result};

/// Rasterizes an SVG document into JPEG bytes at the given quality factor.
pub fn rasterize(svg: &str, quality: f32) -> Result<Vec<u8>> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|err| ExportError::Rasterize(err.to_string()))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| ExportError::Rasterize("document surface has zero area".to_string()))?;

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    encode_jpeg(&pixmap, quality)
}

/// Encodes a pixmap as JPEG. The alpha channel is dropped; the surface
/// background was already painted opaque by the serializer.
fn encode_jpeg(pixmap: &tiny_skia::Pixmap, quality: f32) -> Result<Vec<u8>> {
    let mut rgb = Vec::with_capacity(pixmap.pixels().len() * 3);
    for pixel in pixmap.pixels() {
        let pixel = pixel.demultiply();
        rgb.extend_from_slice(&[pixel.red(), pixel.green(), pixel.blue()]);
    }

    let quality = ((quality.clamp(0.0, 1.0) * 100.0).round() as u8).max(1);
    let mut out = Vec::new();
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, quality);
    encoder
        .encode(
            &rgb,
            pixmap.width(),
            pixmap.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|err| ExportError::Encode(err.to_string()))?;

    Ok(out)
}
