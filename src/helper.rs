use crate::compose::{load_logo, overlay_logo};
use crate::config::BrandConfig;
use crate::encode::render_qr;

use anyhow::{Context, Result};
use image::RgbaImage;
use log::info;
use std::path::Path;

/*---- Pipeline ----*/

/// Saves `img` as a PNG at `path`.
///
/// The parent directory must already exist; it is not created.
///
/// # Errors
///
/// Returns an error naming `path` if the file cannot be written.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Renders the QR code described by `config` with its logo in place.
///
/// # Example
///
/// ```rust,no_run
/// use odadee_qr::config::BrandConfig;
/// use odadee_qr::helper::generate_branded_qr;
///
/// let img = generate_branded_qr(&BrandConfig::default()).unwrap();
/// assert_eq!(img.dimensions(), (410, 410));
/// ```
pub fn generate_branded_qr(config: &BrandConfig) -> Result<RgbaImage> {
    let mut qr = render_qr(&config.qr)?;
    info!("rendered {}x{} QR code for {}", qr.width(), qr.height(), config.qr.payload);

    let logo = load_logo(&config.logo_path)?;
    let layout = overlay_logo(&mut qr, &logo, config.padding);
    info!(
        "placed {}x{} logo on a {}px backdrop at ({}, {})",
        layout.logo_width,
        layout.logo_height,
        layout.backdrop_size,
        layout.backdrop_x,
        layout.backdrop_y
    );

    Ok(qr)
}

/// Runs the whole pipeline and writes the result to `config.output_path`.
///
/// Returns the width and height of the saved image.
pub fn generate_and_save(config: &BrandConfig) -> Result<(u32, u32)> {
    let img = generate_branded_qr(config)?;
    save_png(&img, &config.output_path)?;
    info!("wrote {}", config.output_path.display());
    Ok(img.dimensions())
}

/// The two lines printed after a successful run.
pub fn summary(path: &Path, width: u32, height: u32) -> String {
    format!(
        "Dark mode QR code with Presec logo saved to {}\nQR code size: {}x{}",
        path.display(),
        width,
        height
    )
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{QrSpec, BACKGROUND};
    use image::{ImageBuffer, Rgba};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> BrandConfig {
        let logo_path = dir.path().join("logo.png");
        let logo: RgbaImage = ImageBuffer::from_fn(120, 80, |x, _| {
            if x < 60 { Rgba([200, 40, 40, 255]) } else { Rgba([0, 0, 0, 0]) }
        });
        logo.save(&logo_path).unwrap();

        BrandConfig {
            logo_path,
            output_path: dir.path().join("qr.png"),
            ..BrandConfig::default()
        }
    }

    #[test]
    fn test_generate_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        let dimensions = generate_and_save(&config).unwrap();
        assert_eq!(dimensions, (410, 410));

        let saved = image::open(&config.output_path).unwrap();
        assert_eq!(saved.color(), image::ColorType::Rgba8);

        let saved = saved.to_rgba8();
        assert_eq!(saved.dimensions(), (410, 410));
        assert_eq!(*saved.get_pixel(0, 0), BACKGROUND);
    }

    #[test]
    fn test_branded_code_still_decodes() {
        let dir = tempfile::tempdir().unwrap();
        let img = generate_branded_qr(&config_in(&dir)).unwrap();

        // Modules are the bright pixels; the black quiet zone and backdrop read as light.
        let (w, h) = (img.width() as usize, img.height() as usize);
        let mut prepared = rqrr::PreparedImage::prepare_from_bitmap(w, h, |x, y| {
            let p = img.get_pixel(x as u32, y as u32);
            p[0] as u32 + p[1] as u32 + p[2] as u32 > 3 * 128
        });
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1);

        let (meta, content) = grids[0].decode().unwrap();
        assert_eq!(meta.version.0, 4);
        assert_eq!(content, "https://app.odadee.net");
    }

    #[test]
    fn test_output_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let first = config_in(&dir);
        let second = BrandConfig { output_path: dir.path().join("again.png"), ..first.clone() };

        generate_and_save(&first).unwrap();
        generate_and_save(&second).unwrap();
        assert_eq!(fs::read(&first.output_path).unwrap(), fs::read(&second.output_path).unwrap());
    }

    #[test]
    fn test_dimension_law() {
        let dir = tempfile::tempdir().unwrap();
        for &(version, box_size, border) in &[(4, 10, 4), (5, 3, 2), (10, 1, 0)] {
            let config = BrandConfig {
                qr: QrSpec { version, box_size, border, ..QrSpec::default() },
                ..config_in(&dir)
            };
            let img = generate_branded_qr(&config).unwrap();
            let side = ((4 * version as u32 + 17) + 2 * border) * box_size;
            assert_eq!(img.dimensions(), (side, side));
        }
    }

    #[test]
    fn test_missing_logo_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = BrandConfig { logo_path: dir.path().join("nope.webp"), ..config_in(&dir) };
        assert!(generate_and_save(&config).is_err());
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_payload_too_long_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = BrandConfig {
            qr: QrSpec { payload: "x".repeat(200), ..QrSpec::default() },
            ..config_in(&dir)
        };
        assert!(generate_and_save(&config).is_err());
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_missing_output_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = BrandConfig {
            output_path: dir.path().join("missing").join("qr.png"),
            ..config_in(&dir)
        };
        let err = generate_and_save(&config).unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }

    #[test]
    fn test_summary() {
        let path = PathBuf::from("assets/qr_code_odadee.png");
        assert_eq!(
            summary(&path, 410, 410),
            "Dark mode QR code with Presec logo saved to assets/qr_code_odadee.png\n\
             QR code size: 410x410"
        );
    }
}
