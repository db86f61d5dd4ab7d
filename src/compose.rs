//! Logo placement on a rendered QR code.
//!
//! The logo is scaled to a quarter of the code's width, centered on a square
//! backdrop in the background color, and the backdrop is centered on the
//! code. Both blits are done by hand: [`paste`] copies, [`paste_masked`]
//! blends through the source alpha.

use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{ImageBuffer, RgbaImage};
use log::debug;

use crate::config::BACKGROUND;

/// Loads the logo at `path` as RGBA, keeping any transparency it has.
pub fn load_logo(path: &Path) -> Result<RgbaImage> {
    let logo = image::open(path)
        .with_context(|| format!("failed to load logo from {}", path.display()))?
        .to_rgba8();
    debug!("loaded logo {} ({}x{})", path.display(), logo.width(), logo.height());
    Ok(logo)
}

/// Offset that centers `content` inside `container` on one axis.
///
/// Content larger than its container is pinned to 0.
pub fn center_offset(container: u32, content: u32) -> u32 {
    container.saturating_sub(content) / 2
}

/// Scales `width`x`height` so its longer side is `max_size`, keeping the
/// aspect ratio. The shorter side is rounded down, but never below 1.
pub fn fit_logo(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    let ratio = width as f64 / height as f64;
    let (w, h) = if ratio > 1.0 {
        (max_size, (max_size as f64 / ratio) as u32)
    } else {
        ((max_size as f64 * ratio) as u32, max_size)
    };
    (w.max(1), h.max(1))
}

/// Where everything goes, derived from the QR and logo sizes alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoLayout {
    /// Upper bound for the logo's longer side.
    pub max_size: u32,
    pub logo_width: u32,
    pub logo_height: u32,
    /// Side of the square backdrop.
    pub backdrop_size: u32,
    /// Logo position inside the backdrop.
    pub logo_x: u32,
    pub logo_y: u32,
    /// Backdrop position inside the QR image.
    pub backdrop_x: u32,
    pub backdrop_y: u32,
}

impl LogoLayout {
    pub fn compute(
        qr_width: u32,
        qr_height: u32,
        logo_width: u32,
        logo_height: u32,
        padding: u32,
    ) -> Self {
        let max_size = qr_width / 4;
        let (w, h) = fit_logo(logo_width, logo_height, max_size);
        let backdrop_size = w.max(h) + 2 * padding;

        Self {
            max_size,
            logo_width: w,
            logo_height: h,
            backdrop_size,
            logo_x: center_offset(backdrop_size, w),
            logo_y: center_offset(backdrop_size, h),
            backdrop_x: center_offset(qr_width, backdrop_size),
            backdrop_y: center_offset(qr_height, backdrop_size),
        }
    }
}

/// Copies `src` onto `dst` with its top-left corner at (`x`, `y`).
///
/// Pixels falling outside `dst` are dropped.
pub fn paste(dst: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    for (sx, sy, pixel) in src.enumerate_pixels() {
        let (tx, ty) = (x + sx, y + sy);
        if tx < dst.width() && ty < dst.height() {
            dst.put_pixel(tx, ty, *pixel);
        }
    }
}

/// Pastes `src` onto `dst` using the alpha of `src` as the mask.
///
/// Every channel, alpha included, is interpolated between destination and
/// source by the mask: 0 keeps the destination, 255 takes the source.
pub fn paste_masked(dst: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    for (sx, sy, pixel) in src.enumerate_pixels() {
        let (tx, ty) = (x + sx, y + sy);
        if tx >= dst.width() || ty >= dst.height() {
            continue;
        }
        let mask = pixel[3] as u32;
        let target = dst.get_pixel_mut(tx, ty);
        for c in 0..4 {
            let blended =
                (pixel[c] as u32 * mask + target[c] as u32 * (255 - mask) + 127) / 255;
            target[c] = blended as u8;
        }
    }
}

/// Builds the square backdrop with `logo` centered on it.
pub fn build_backdrop(logo: &RgbaImage, padding: u32) -> RgbaImage {
    let size = logo.width().max(logo.height()) + 2 * padding;
    let mut backdrop: RgbaImage = ImageBuffer::from_pixel(size, size, BACKGROUND);
    paste_masked(
        &mut backdrop,
        logo,
        center_offset(size, logo.width()),
        center_offset(size, logo.height()),
    );
    backdrop
}

/// Scales `logo`, puts it on its backdrop and stamps the result in the
/// middle of `qr`. The backdrop is opaque and hides the modules under it.
pub fn overlay_logo(qr: &mut RgbaImage, logo: &RgbaImage, padding: u32) -> LogoLayout {
    let (width, height) = logo.dimensions();
    let layout = LogoLayout::compute(qr.width(), qr.height(), width, height, padding);
    debug!("logo layout: {:?}", layout);

    let resized =
        imageops::resize(logo, layout.logo_width, layout.logo_height, FilterType::Lanczos3);
    let backdrop = build_backdrop(&resized, padding);
    paste(qr, &backdrop, layout.backdrop_x, layout.backdrop_y);

    layout
}
