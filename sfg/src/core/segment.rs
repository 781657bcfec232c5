//! # SFG Segment Module
//!
//! A segment is a run of bytes in the EEPROM page closed by a one byte
//! checksum: the base ID fields (`CC_BASE`) and the extended ID fields
//! (`CC_EXT`) of the A0h page are two such segments.
//!
//! The order of format constants and identity fields inside a segment is
//! described by a `SegmentLayout`, loaded from the profile, never hardcoded.
//!
//! ## Byte Layout (Cisco A0 FC16G)
//! ```text
//! segment 1: [20 bytes: HEADER][16 bytes: vendor][27 bytes: MID1][1 byte: checksum8]
//! segment 2: [4 bytes: MID2][16 bytes: serial][11 bytes: MID3][1 byte: checksum8]
//! ```
//!
//! Copyrights © 2025 SFG Contributors. All rights reserved.

use super::super::constants::{CHECKSUM8_SIZE, FIELD_SIZE};
use super::identity_field::IdentityField;
use serde::Deserialize;

/// Which identity field fills a slot of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Vendor,
    Serial,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentPart {
    Constant { name: String, bytes: Vec<u8> },
    Field(FieldKind),
}

impl SegmentPart {
    pub fn len(&self) -> usize {
        match self {
            SegmentPart::Constant { bytes, .. } => bytes.len(),
            SegmentPart::Field(_) => FIELD_SIZE,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentLayout {
    pub parts: Vec<SegmentPart>,
}

impl SegmentLayout {
    pub fn new(parts: Vec<SegmentPart>) -> Self {
        Self { parts }
    }

    /// Encoded size including the trailing checksum byte.
    pub fn encoded_len(&self) -> usize {
        self.parts.iter().map(SegmentPart::len).sum::<usize>() + CHECKSUM8_SIZE
    }

    /// Builds the segment and closes it with its checksum.
    pub fn encode(&self, vendor: &IdentityField, serial: &IdentityField) -> Vec<u8> {
        append_checksum(assemble(&self.parts, vendor, serial))
    }
}

/// Concatenates `parts` in order, substituting the identity fields for their slots.
pub fn assemble(parts: &[SegmentPart], vendor: &IdentityField, serial: &IdentityField) -> Vec<u8> {
    let size = parts.iter().map(SegmentPart::len).sum::<usize>();
    let mut encoded = Vec::with_capacity(size + CHECKSUM8_SIZE);

    for part in parts {
        match part {
            SegmentPart::Constant { bytes, .. } => encoded.extend_from_slice(bytes),
            SegmentPart::Field(FieldKind::Vendor) => encoded.extend_from_slice(vendor.as_bytes()),
            SegmentPart::Field(FieldKind::Serial) => encoded.extend_from_slice(serial.as_bytes()),
        }
    }

    encoded
}

/// Unsigned sum of all bytes modulo 256.
pub fn checksum8(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

pub fn append_checksum(mut segment: Vec<u8>) -> Vec<u8> {
    let checksum = checksum8(&segment);
    tracing::debug!(len = segment.len(), checksum, "segment checksum");
    segment.push(checksum);
    segment
}
