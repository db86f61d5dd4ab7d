//! # odadee-qr
//!
//! Generates the dark-mode Odadee QR code: white modules on a black
//! background, with the Presec logo on a padded black patch in the middle.
//!
//! The symbol is encoded at error correction level H, so the roughly 30%
//! recovery budget absorbs the modules the logo hides.
//!
//! ## Assets
//!
//! The logo is not shipped with this crate. Both paths are relative to the
//! working directory, so run the binary from the app checkout, where
//! `assets/images/presec_logo.webp` exists and `assets/` receives
//! `qr_code_odadee.png`. Elsewhere the run fails on loading the logo.
//!
//! ## Example
//!
//! ```rust,no_run
//! use odadee_qr::{config::BrandConfig, helper::{generate_and_save, summary}};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = BrandConfig::default();
//!     let (width, height) = generate_and_save(&config)?;
//!     println!("{}", summary(&config.output_path, width, height));
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`]: The hardcoded QR parameters, paths and colors.
//! - [`encode`]: QR encoding and rasterization.
//! - [`compose`]: Logo scaling, backdrop and pixel blits.
//! - [`helper`]: The end-to-end pipeline and the PNG writer.

#![forbid(unsafe_code)]

pub mod compose;
pub mod config;
pub mod encode;
pub mod helper;
