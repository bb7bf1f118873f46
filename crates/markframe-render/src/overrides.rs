//! User-adjustable style overrides.
//!
//! [`OverrideSettings`] is the bounded, always-populated record of the six
//! properties a user may tune on top of a template. Values are validated at
//! the setter boundary: an out-of-range value or an unrecognized font is
//! rejected with a [`SettingsError`] and the prior value is retained. There
//! is no clamping and no "unset" state; defaults are fixed and independent
//! of any template.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::style::{Color, ColorParseError};

/// Allowed font size range, in pixels.
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 12..=24;

/// Allowed line height range.
pub const LINE_HEIGHT_RANGE: RangeInclusive<f32> = 1.0..=2.5;

/// Allowed container padding range, in pixels.
pub const PADDING_RANGE: RangeInclusive<u32> = 0..=50;

/// The font stacks a user may select from.
pub const FONT_FAMILIES: &[&str] = &[
    "Inter, sans-serif",
    "Arial, sans-serif",
    "Georgia, serif",
    "Courier New, monospace",
    "Times New Roman, serif",
];

/// Errors produced when an override value fails validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("font size {0}px is outside the allowed range {min}-{max}px", min = FONT_SIZE_RANGE.start(), max = FONT_SIZE_RANGE.end())]
    FontSizeOutOfRange(u32),

    #[error("line height {0} is outside the allowed range {min}-{max}", min = LINE_HEIGHT_RANGE.start(), max = LINE_HEIGHT_RANGE.end())]
    LineHeightOutOfRange(f32),

    #[error("padding {0}px is outside the allowed range {min}-{max}px", min = PADDING_RANGE.start(), max = PADDING_RANGE.end())]
    PaddingOutOfRange(u32),

    #[error("unknown font family '{0}'")]
    UnknownFontFamily(String),

    #[error(transparent)]
    InvalidColor(#[from] ColorParseError),
}

/// The six user-tunable style properties.
///
/// All fields always hold a valid value; mutation happens only through the
/// validated setters.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideSettings {
    font_size: u32,
    font_family: String,
    line_height: f32,
    text_color: Color,
    background_color: Color,
    padding: u32,
}

impl Default for OverrideSettings {
    fn default() -> Self {
        Self {
            font_size: 16,
            font_family: FONT_FAMILIES[0].to_string(),
            line_height: 1.6,
            text_color: Color::BLACK,
            background_color: Color::WHITE,
            padding: 20,
        }
    }
}

impl OverrideSettings {
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// Sets the font size in pixels. Rejects values outside [`FONT_SIZE_RANGE`].
    pub fn set_font_size(&mut self, px: u32) -> Result<(), SettingsError> {
        if !FONT_SIZE_RANGE.contains(&px) {
            return Err(SettingsError::FontSizeOutOfRange(px));
        }
        self.font_size = px;
        Ok(())
    }

    /// Sets the font family. Rejects stacks not in [`FONT_FAMILIES`].
    pub fn set_font_family(&mut self, family: &str) -> Result<(), SettingsError> {
        if !FONT_FAMILIES.contains(&family) {
            return Err(SettingsError::UnknownFontFamily(family.to_string()));
        }
        self.font_family = family.to_string();
        Ok(())
    }

    /// Sets the line height. Rejects values outside [`LINE_HEIGHT_RANGE`].
    pub fn set_line_height(&mut self, value: f32) -> Result<(), SettingsError> {
        if !value.is_finite() || !LINE_HEIGHT_RANGE.contains(&value) {
            return Err(SettingsError::LineHeightOutOfRange(value));
        }
        self.line_height = value;
        Ok(())
    }

    /// Sets the text color. `Color` values are validated at parse time.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Sets the background color.
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    /// Sets the container padding in pixels. Rejects values outside [`PADDING_RANGE`].
    pub fn set_padding(&mut self, px: u32) -> Result<(), SettingsError> {
        if !PADDING_RANGE.contains(&px) {
            return Err(SettingsError::PaddingOutOfRange(px));
        }
        self.padding = px;
        Ok(())
    }
}
