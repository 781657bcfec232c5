//! # SFP Firmware Generator (SFG)
//!
//! Builds the A0h EEPROM image of an SFP/SFP+ transceiver carrying a chosen
//! vendor name and serial number, together with the checksums a switch
//! platform uses to accept the module as genuine.
//!
//! The image is made of
//!     1. segments of format constants and identity fields, each closed by a
//!        mod-256 checksum byte.
//!     2. an authentication block binding vendor id, vendor name, serial
//!        number and the vendor key through MD5, wrapped and closed by CRC-32.
//!
//! Which constants go where is profile data (`profiles/*.toml`), so the
//! checksum code never changes when a layout does.
//!
//! Copyrights © 2025, SFG Contributors

pub mod config;
pub mod constants;
pub mod core;
pub mod image;
pub mod prelude;
pub mod sfg_errors;
pub mod utils;

pub use crate::config::Profile;
pub use crate::core::identity_field::IdentityField;
pub use crate::image::Image;
pub use crate::sfg_errors::SFGError;
