//! # SFG AuthBlock Module
//!
//! This module builds the platform authentication block appended after the
//! checksummed segments. Switch firmware recomputes it with its own copy of
//! the vendor key to decide whether the module is genuine.
//!
//! ## Construction
//! Stage A, the content digest:
//! ```text
//! digest = MD5([1 byte: vendor id][16 bytes: vendor][16 bytes: serial][16 bytes: vendor key])
//! ```
//! Stage B, the wrapped block and its CRC:
//! ```text
//! [2 bytes: 0x00][1 byte: vendor id][16 bytes: digest][trail bytes: 0x00][4 bytes: CRC-32 LE]
//! ```
//! The CRC is the IEEE 802.3 one used by zlib and gzip, computed over every
//! byte in front of it. With the 9 byte trail of the Cisco A0 layout the
//! block is 32 bytes and fills the vendor specific area of the page.
//!
//! Copyrights © 2025 SFG Contributors. All rights reserved.

use super::super::constants::{AUTH_LEAD_SIZE, CRC_SIZE, Digest, VendorKey, auth_wrapped_size};
use super::identity_field::IdentityField;
use crc::{CRC_32_ISO_HDLC, Crc};
use md5::{Digest as _, Md5};

const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Transceiver vendor as the platform knows it: a one byte id and the
/// secret key the platform holds for that vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransceiverVendor {
    pub name: String,
    pub id: u8,
    pub key: VendorKey,
}

impl TransceiverVendor {
    pub fn new(name: &str, id: u8, key: VendorKey) -> Self {
        Self { name: name.to_string(), id, key }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthBlock {
    pub vendor_id: u8,
    pub digest: Digest,
    pub trail: usize, // zero bytes after the digest
    pub crc: u32,
}

impl AuthBlock {
    pub fn build(vendor: &TransceiverVendor, vendor_field: &IdentityField, serial_field: &IdentityField, trail: usize) -> Self {
        let digest = content_digest(vendor, vendor_field, serial_field);
        let crc = crc32(&wrap(vendor.id, &digest, trail));

        tracing::debug!(vendor = %vendor.name, crc = %format!("{crc:08x}"), "authentication block");
        tracing::trace!(digest = %hex::encode(digest), "content digest");

        Self {
            vendor_id: vendor.id,
            digest,
            trail,
            crc,
        }
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn crc(&self) -> u32 {
        self.crc
    }

    pub fn encoded_len(&self) -> usize {
        encoded_len(self.trail)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut encoded = wrap(self.vendor_id, &self.digest, self.trail);
        encoded.extend_from_slice(&self.crc.to_le_bytes());
        encoded
    }
}

/// Size of an authentication block with `trail` zero bytes after the digest.
pub fn encoded_len(trail: usize) -> usize {
    auth_wrapped_size(trail) + CRC_SIZE
}

/// Stage A: MD5 over vendor id, both identity fields and the vendor key.
pub fn content_digest(vendor: &TransceiverVendor, vendor_field: &IdentityField, serial_field: &IdentityField) -> Digest {
    let mut hasher = Md5::new();
    hasher.update([vendor.id]);
    hasher.update(vendor_field.as_bytes());
    hasher.update(serial_field.as_bytes());
    hasher.update(vendor.key);
    hasher.finalize().into()
}

/// Stage B without the CRC: zero lead, vendor id, digest, zero trail.
pub fn wrap(vendor_id: u8, digest: &Digest, trail: usize) -> Vec<u8> {
    let mut wrapped = Vec::with_capacity(encoded_len(trail));
    wrapped.resize(AUTH_LEAD_SIZE, 0);
    wrapped.push(vendor_id);
    wrapped.extend_from_slice(digest);
    wrapped.resize(auth_wrapped_size(trail), 0);
    wrapped
}

/// CRC-32/ISO-HDLC, the zlib/gzip CRC.
pub fn crc32(bytes: &[u8]) -> u32 {
    CRC32.checksum(bytes)
}
