//! # SFG IdentityField Module
//!
//! This module defines the `IdentityField` structure, the fixed-width form of
//! the vendor name and serial number written into the transceiver EEPROM.
//!
//! ## Encoding
//! ```text
//! [N bytes: raw text][16 - N bytes: 0x20]
//! ```
//!
//! Input longer than the field, or empty input, is rejected. Truncating would
//! silently burn a different identity into the module than the one requested.
//!
//! Copyrights © 2025 SFG Contributors. All rights reserved.

use super::super::constants::{FIELD_PAD, FIELD_SIZE, FieldBytes};
use super::super::sfg_errors::SFGError;
use anyhow::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityField {
    raw: String,       // as typed by the operator, used for the output file name
    bytes: FieldBytes, // raw bytes followed by space padding
}

impl IdentityField {
    /// `field` names the input in the error message ("vendor", "serial").
    pub fn new(field: &'static str, raw: &str) -> Result<Self> {
        let length = raw.len();
        if length == 0 || length > FIELD_SIZE {
            return Err(SFGError::InvalidFieldLength {
                field,
                length,
                max: FIELD_SIZE,
            }
            .into());
        }

        let mut bytes = [FIELD_PAD; FIELD_SIZE];
        bytes[..length].copy_from_slice(raw.as_bytes());

        Ok(Self { raw: raw.to_string(), bytes })
    }

    pub fn vendor(raw: &str) -> Result<Self> {
        Self::new("vendor", raw)
    }

    pub fn serial(raw: &str) -> Result<Self> {
        Self::new("serial", raw)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn as_bytes(&self) -> &FieldBytes {
        &self.bytes
    }

    /// Number of padding bytes appended to the raw input.
    pub fn padding(&self) -> usize {
        FIELD_SIZE - self.raw.len()
    }
}
