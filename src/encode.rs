//! QR symbol encoding and rasterization.
//!
//! The symbol itself comes from the `qrcode` crate at a pinned version and
//! error correction level. Rendering is done here so the quiet zone and the
//! inverted palette are under our control.

use anyhow::{Context, Result};
use image::{ImageBuffer, RgbaImage};
use log::debug;
use qrcode::{Color, QrCode, Version};

use crate::config::{QrSpec, BACKGROUND, FOREGROUND};

/// Encodes the payload of `spec` at exactly its version and error correction level.
///
/// # Errors
///
/// Fails when the payload does not fit the symbol. The version is never
/// grown to make room.
pub fn encode(spec: &QrSpec) -> Result<QrCode> {
    let version = Version::Normal(spec.version);
    let code = QrCode::with_version(spec.payload.as_bytes(), version, spec.ec_level)
        .with_context(|| {
            format!(
                "payload of {} bytes does not fit version {} at level {:?}",
                spec.payload.len(),
                spec.version,
                spec.ec_level
            )
        })?;
    debug!(
        "encoded {} bytes into a {}x{} symbol",
        spec.payload.len(),
        code.width(),
        code.width()
    );
    Ok(code)
}

/// Rasterizes `code` with `box_size` pixels per module and `border` modules of quiet zone.
///
/// Dark modules are drawn in [`FOREGROUND`], everything else in [`BACKGROUND`].
pub fn render(code: &QrCode, box_size: u32, border: u32) -> RgbaImage {
    let width = code.width() as u32;
    let size = (width + 2 * border) * box_size;

    ImageBuffer::from_fn(size, size, |x, y| {
        let mx = x / box_size;
        let my = y / box_size;
        if mx < border || my < border || mx >= border + width || my >= border + width {
            return BACKGROUND;
        }
        match code[((mx - border) as usize, (my - border) as usize)] {
            Color::Dark => FOREGROUND,
            Color::Light => BACKGROUND,
        }
    })
}

/// Encodes and renders `spec` in one step.
pub fn render_qr(spec: &QrSpec) -> Result<RgbaImage> {
    let code = encode(spec)?;
    Ok(render(&code, spec.box_size, spec.border))
}
