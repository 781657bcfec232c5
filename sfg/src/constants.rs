//! # SFG Constants Module
//!
//! This file contains the fixed sizes shared by the identity fields, the
//! segment checksummer and the authentication block builder.
//!
//! The byte literals themselves (headers, separators, vendor keys) are not
//! kept here: they belong to a profile and live in the TOML documents under
//! `profiles/`, so a new transceiver/platform pair is a data change only.
//!
//! ## Purpose
//! - Centralize every width the image layout depends on
//! - Keep the padding conventions of the A0h page in one place
//!
//! Copyrights © 2025 SFG Contributors. All rights reserved.

/// Width of a vendor name or serial number field in bytes.
pub const FIELD_SIZE: usize = 16;
/// Identity fields are right-padded with ASCII space.
pub const FIELD_PAD: u8 = 0x20;

pub const CHECKSUM8_SIZE: usize = 1;

pub const VENDOR_ID_SIZE: usize = 1;
pub const VENDOR_KEY_SIZE: usize = 16;
pub const DIGEST_SIZE: usize = 16; // MD5
pub const CRC_SIZE: usize = 4; // CRC-32, little-endian

/// Zero bytes in front of the vendor id inside the authentication block.
pub const AUTH_LEAD_SIZE: usize = 2;

/// Size of the block hashed by CRC-32 for a given trailer width.
pub const fn auth_wrapped_size(trail: usize) -> usize {
    AUTH_LEAD_SIZE + VENDOR_ID_SIZE + DIGEST_SIZE + trail
}

pub type FieldBytes = [u8; FIELD_SIZE];
pub type VendorKey = [u8; VENDOR_KEY_SIZE];
pub type Digest = [u8; DIGEST_SIZE];
