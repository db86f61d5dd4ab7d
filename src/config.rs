//! Fixed parameters of the generated QR code.
//!
//! Every value here is hardcoded. [`BrandConfig::default`] is what the binary
//! runs with; tests build their own values through struct literals.

use std::path::PathBuf;

use image::Rgba;
use qrcode::{EcLevel, Version};

/// Color of the quiet zone, light modules and the logo backdrop.
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Color of the dark modules. Inverted for dark-mode display.
pub const FOREGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

pub const PAYLOAD: &str = "https://app.odadee.net";
/// Relative to the working directory. The file lives in the app checkout,
/// not in this crate.
pub const LOGO_PATH: &str = "assets/images/presec_logo.webp";
pub const OUTPUT_PATH: &str = "assets/qr_code_odadee.png";

/// Parameters of the QR symbol and its raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrSpec {
    /// Data to encode.
    pub payload: String,
    /// Symbol version (1-40). Controls the number of modules per side.
    pub version: i16,
    pub ec_level: EcLevel,
    /// Pixels per module.
    pub box_size: u32,
    /// Quiet zone width, in modules.
    pub border: u32,
}

impl Default for QrSpec {
    fn default() -> Self {
        Self {
            payload: PAYLOAD.to_string(),
            version: 4,
            ec_level: EcLevel::H,
            box_size: 10,
            border: 4,
        }
    }
}

impl QrSpec {
    /// Number of modules per side of the symbol, excluding the border.
    pub fn modules_per_side(&self) -> u32 {
        Version::Normal(self.version).width() as u32
    }

    /// Width and height in pixels of the rendered code, border included.
    pub fn image_size(&self) -> u32 {
        (self.modules_per_side() + 2 * self.border) * self.box_size
    }
}

/// Everything a run needs: the symbol, where the logo comes from and where
/// the result goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandConfig {
    pub qr: QrSpec,
    pub logo_path: PathBuf,
    pub output_path: PathBuf,
    /// Pixels of backdrop around the logo on each side.
    pub padding: u32,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            qr: QrSpec::default(),
            logo_path: PathBuf::from(LOGO_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
            padding: 15,
        }
    }
}
