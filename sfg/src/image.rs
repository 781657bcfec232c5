//! # SFG Image Module
//!
//! This module assembles the final EEPROM image out of the checksummed
//! segments and the authentication block, and writes it to disk.
//!
//! ## Image Layout (Cisco A0 FC16G, 128 bytes)
//! ```text
//! [64 bytes: segment 1, ends with CC_BASE]
//! [32 bytes: segment 2, ends with CC_EXT]
//! [32 bytes: authentication block]
//! ```
//!
//! The image is a pure function of the profile and the two identity fields:
//! no timestamps, no randomness, the same input always gives the same bytes.
//!
//! ## Usage
//! ```rust,no_run
//! use sfg::{Image, Profile};
//!
//! let profile = Profile::builtin("finisar")?;
//! let image = Image::new(&profile, "FNSR", "ABC123")?;
//! let path = image.write_to_dir(".")?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Copyrights © 2025 SFG Contributors. All rights reserved.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::Profile;
use crate::core::auth_block::AuthBlock;
use crate::core::identity_field::IdentityField;
use crate::utils::{bytes_to_hex, write_image};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub vendor: IdentityField,
    pub serial: IdentityField,
    pub segments: Vec<Vec<u8>>,
    pub auth: AuthBlock,
}

impl Image {
    /// Validates the raw inputs and builds the image.
    pub fn new(profile: &Profile, vendor: &str, serial: &str) -> Result<Self> {
        let vendor = IdentityField::vendor(vendor)?;
        let serial = IdentityField::serial(serial)?;
        Ok(Self::build(profile, vendor, serial))
    }

    pub fn build(profile: &Profile, vendor: IdentityField, serial: IdentityField) -> Self {
        let segments = profile.segments.iter().map(|layout| layout.encode(&vendor, &serial)).collect();
        let auth = AuthBlock::build(&profile.vendor, &vendor, &serial, profile.auth_trail);

        Self { vendor, serial, segments, auth }
    }

    /// Segment checksums in image order.
    pub fn checksums(&self) -> Vec<u8> {
        self.segments.iter().filter_map(|segment| segment.last().copied()).collect()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let size = self.segments.iter().map(Vec::len).sum::<usize>() + self.auth.encoded_len();
        let mut encoded = Vec::with_capacity(size);

        for segment in self.segments.iter() {
            encoded.extend_from_slice(segment);
        }
        encoded.extend_from_slice(&self.auth.to_bytes());

        encoded
    }

    /// `<vendor>_<serial>.bin` from the unpadded inputs.
    pub fn file_name(&self) -> String {
        format!("{}_{}.bin", self.vendor.raw(), self.serial.raw())
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes();
        tracing::trace!(image = %bytes_to_hex(&bytes), "image bytes");
        write_image(&path, &bytes)?;
        tracing::info!(path = %path.as_ref().display(), len = bytes.len(), "image written");
        Ok(())
    }

    /// Writes the image under its derived file name inside `dir`.
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(self.file_name());
        self.write(&path)?;
        Ok(path)
    }
}
