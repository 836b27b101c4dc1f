//! QR rendering of generated payloads
//!
//! The payload text is the contract; this module only draws it. Codes are
//! always built at error-correction level H so a logo or sticker on top of
//! the printed code stays scannable.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ExtendedColorType, ImageEncoder, Luma};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};
use tracing::debug;

use crate::error::RenderError;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    /// Grayscale PNG bytes
    Png,
    /// SVG document
    Svg,
    /// Text for a terminal
    Terminal,
}

/// Rendering options
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Minimum edge length in pixels (PNG and SVG)
    pub size: u32,
    /// Draw the quiet zone around the code
    pub quiet_zone: bool,
    /// Output format
    pub format: RenderFormat,
    /// Dark module color for SVG, e.g. `#000000`
    pub fg_color: String,
    /// Light module color for SVG
    pub bg_color: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 256,
            quiet_zone: true,
            format: RenderFormat::Png,
            fg_color: "#000000".to_string(),
            bg_color: "#ffffff".to_string(),
        }
    }
}

impl RenderOptions {
    /// PNG of at least `size` pixels
    pub fn png(size: u32) -> Self {
        Self {
            size,
            format: RenderFormat::Png,
            ..Self::default()
        }
    }

    /// SVG with default colors
    pub fn svg() -> Self {
        Self {
            format: RenderFormat::Svg,
            ..Self::default()
        }
    }

    /// Terminal text
    pub fn terminal() -> Self {
        Self {
            format: RenderFormat::Terminal,
            ..Self::default()
        }
    }
}

/// Render `payload` as a QR code in the requested format
pub fn render(payload: &str, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)?;
    debug!(
        modules = code.width(),
        format = ?options.format,
        "rendering QR code"
    );

    match options.format {
        RenderFormat::Png => png(&code, options),
        RenderFormat::Svg => Ok(svg_document(&code, options).into_bytes()),
        RenderFormat::Terminal => Ok(terminal(&code, options).into_bytes()),
    }
}

/// PNG as a `data:image/png;base64,...` URI
pub fn data_uri(payload: &str, size: u32) -> Result<String, RenderError> {
    let bytes = render(payload, &RenderOptions::png(size))?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
}

fn png(code: &QrCode, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let image = code
        .render::<Luma<u8>>()
        .quiet_zone(options.quiet_zone)
        .min_dimensions(options.size, options.size)
        .build();

    let mut bytes = Vec::new();
    image::codecs::png::PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::L8,
    )?;
    Ok(bytes)
}

fn svg_document(code: &QrCode, options: &RenderOptions) -> String {
    code.render::<svg::Color<'_>>()
        .quiet_zone(options.quiet_zone)
        .min_dimensions(options.size, options.size)
        .dark_color(svg::Color(&options.fg_color))
        .light_color(svg::Color(&options.bg_color))
        .build()
}

fn terminal(code: &QrCode, options: &RenderOptions) -> String {
    code.render::<char>()
        .quiet_zone(options.quiet_zone)
        .module_dimensions(2, 1)
        .build()
}
