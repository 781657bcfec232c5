//! # SFG Profile Configuration Module
//!
//! A profile is the pair (switch platform, transceiver vendor) that decides
//! which format constants surround the identity fields, in what order, and
//! which vendor id and key go into the authentication block.
//!
//! Platforms are described by TOML documents compiled into the crate from
//! `profiles/`. Each document lists its segment layouts and the vendors the
//! platform knows about; selecting a vendor from it yields a `Profile`.
//!
//! ## Document Shape
//! ```toml
//! platform = "Cisco A0 FC16G"
//! auth_trail = 9
//!
//! [[segments]]
//! parts = [{ constant = "HEADER", hex = "0304..." }, { field = "vendor" }]
//!
//! [[vendors]]
//! name = "finisar"
//! id = "02"
//! key = "8DDA..."
//! ```
//!
//! Hex literals are decoded while loading. A literal that does not decode is
//! a broken build, not bad operator input, and surfaces as
//! `SFGError::InvalidHexConstant`.
//!
//! Copyrights © 2025 SFG Contributors. All rights reserved.

use anyhow::Result;
use serde::Deserialize;

use crate::constants::{CHECKSUM8_SIZE, VENDOR_ID_SIZE, VENDOR_KEY_SIZE};
use crate::core::auth_block::{self, TransceiverVendor};
use crate::core::segment::{FieldKind, SegmentLayout, SegmentPart};
use crate::sfg_errors::SFGError;
use crate::utils::{decode_hex_array, decode_hex_constant};

/// Layout of the Cisco A0h page for 16G FC modules.
pub const CISCO_A0_FC16G: &str = include_str!("../profiles/cisco_a0_fc16g.toml");

pub const DEFAULT_VENDOR: &str = "finisar";

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformDocument {
    pub platform: String,
    pub auth_trail: usize,
    pub segments: Vec<SegmentDocument>,
    pub vendors: Vec<VendorDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SegmentDocument {
    pub parts: Vec<PartDocument>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PartDocument {
    Field { field: FieldKind },
    Constant { constant: String, hex: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct VendorDocument {
    pub name: String,
    pub id: String,
    pub key: String,
}

impl PlatformDocument {
    pub fn from_toml(document: &str) -> Result<Self> {
        toml::from_str(document).map_err(|err| SFGError::InvalidProfile(err.to_string()).into())
    }

    pub fn vendor_names(&self) -> Vec<&str> {
        self.vendors.iter().map(|v| v.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub platform: String,
    pub vendor: TransceiverVendor,
    pub segments: Vec<SegmentLayout>,
    pub auth_trail: usize,
}

impl Profile {
    /// Profile of the built-in Cisco A0 FC16G platform for `vendor`.
    pub fn builtin(vendor: &str) -> Result<Self> {
        Self::from_toml(CISCO_A0_FC16G, vendor)
    }

    /// Vendor names the built-in platform supports.
    pub fn builtin_vendors() -> Result<Vec<String>> {
        let document = PlatformDocument::from_toml(CISCO_A0_FC16G)?;
        Ok(document.vendor_names().into_iter().map(str::to_string).collect())
    }

    pub fn from_toml(document: &str, vendor: &str) -> Result<Self> {
        Self::from_document(&PlatformDocument::from_toml(document)?, vendor)
    }

    pub fn from_document(document: &PlatformDocument, vendor: &str) -> Result<Self> {
        let entry = document
            .vendors
            .iter()
            .find(|v| v.name.eq_ignore_ascii_case(vendor))
            .ok_or_else(|| SFGError::UnknownProfile(format!("{}/{}", document.platform, vendor)))?;

        let id = decode_hex_array::<VENDOR_ID_SIZE>(&format!("{} id", entry.name), &entry.id)?[0];
        let key = decode_hex_array::<VENDOR_KEY_SIZE>(&format!("{} key", entry.name), &entry.key)?;

        let segments = document
            .segments
            .iter()
            .map(decode_segment)
            .collect::<Result<Vec<_>>>()?;

        let profile = Self {
            platform: document.platform.clone(),
            vendor: TransceiverVendor::new(&entry.name, id, key),
            segments,
            auth_trail: document.auth_trail,
        };
        profile.validate()?;

        tracing::debug!(platform = %profile.platform, vendor = %profile.vendor.name, image_len = profile.image_len(), "profile loaded");

        Ok(profile)
    }

    /// Human readable identifier, e.g. `Cisco A0 FC16G/finisar`.
    pub fn name(&self) -> String {
        format!("{}/{}", self.platform, self.vendor.name)
    }

    /// Length of every image built from this profile.
    pub fn image_len(&self) -> usize {
        self.segments.iter().map(SegmentLayout::encoded_len).sum::<usize>() + auth_block::encoded_len(self.auth_trail)
    }

    /// Every identity field must land in the image exactly once.
    fn validate(&self) -> Result<()> {
        if self.segments.is_empty() {
            return Err(SFGError::InvalidProfile(format!("{} has no segments", self.platform)).into());
        }

        for kind in [FieldKind::Vendor, FieldKind::Serial] {
            let count = self
                .segments
                .iter()
                .flat_map(|segment| segment.parts.iter())
                .filter(|part| **part == SegmentPart::Field(kind))
                .count();
            if count != 1 {
                return Err(SFGError::InvalidProfile(format!("{} places the {kind:?} field {count} times", self.platform)).into());
            }
        }

        if self.segments.iter().any(|segment| segment.encoded_len() == CHECKSUM8_SIZE) {
            return Err(SFGError::InvalidProfile(format!("{} has an empty segment", self.platform)).into());
        }

        Ok(())
    }
}

fn decode_segment(segment: &SegmentDocument) -> Result<SegmentLayout> {
    let parts = segment
        .parts
        .iter()
        .map(|part| -> Result<SegmentPart> {
            match part {
                PartDocument::Field { field } => Ok(SegmentPart::Field(*field)),
                PartDocument::Constant { constant, hex } => Ok(SegmentPart::Constant {
                    name: constant.clone(),
                    bytes: decode_hex_constant(constant, hex)?,
                }),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SegmentLayout::new(parts))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_builtin_finisar_profile() {
        let profile = Profile::builtin(DEFAULT_VENDOR).unwrap();

        assert_eq!(profile.platform, "Cisco A0 FC16G");
        assert_eq!(profile.vendor.id, 0x02);
        assert_eq!(hex::encode_upper(profile.vendor.key), "8DDAE6A46EC9DEF6100BF185059C3DAB");
        assert_eq!(profile.segments.len(), 2);
        assert_eq!(profile.auth_trail, 9);
        assert_eq!(profile.name(), "Cisco A0 FC16G/finisar");
    }

    #[test]
    fn test_builtin_constants_are_bit_exact() {
        let profile = Profile::builtin(DEFAULT_VENDOR).unwrap();
        let constants: Vec<(String, String)> = profile
            .segments
            .iter()
            .flat_map(|segment| segment.parts.iter())
            .filter_map(|part| match part {
                SegmentPart::Constant { name, bytes } => Some((name.clone(), hex::encode_upper(bytes))),
                SegmentPart::Field(_) => None,
            })
            .collect();

        assert_eq!(
            constants,
            vec![
                ("HEADER".to_string(), "0304070000000040400C70068C0A00000301000A".to_string()),
                ("MID1".to_string(), "0000176A414642522D35374635505A2D4353312042322020035200".to_string()),
                ("MID2".to_string(), "003A0000".to_string()),
                ("MID3".to_string(), "313530383135202068FA05".to_string()),
            ]
        );
    }

    #[test]
    fn test_image_len_is_fixed() {
        // 20 + 16 + 27 + 1, 4 + 16 + 11 + 1, 28 + 4
        let profile = Profile::builtin(DEFAULT_VENDOR).unwrap();
        assert_eq!(profile.segments[0].encoded_len(), 64);
        assert_eq!(profile.segments[1].encoded_len(), 32);
        assert_eq!(profile.image_len(), 128);
    }

    #[test]
    fn test_builtin_avago_profile() {
        let profile = Profile::builtin("avago").unwrap();

        assert_eq!(profile.vendor.id, 0x06);
        assert_eq!(hex::encode_upper(profile.vendor.key), "175258FEE9B4F0D9EAB6006F7C65A8CB");
        assert_eq!(profile.segments, Profile::builtin("finisar").unwrap().segments);
    }

    #[test]
    fn test_builtin_vendors() {
        assert_eq!(Profile::builtin_vendors().unwrap(), vec!["finisar".to_string(), "avago".to_string()]);
    }

    #[test]
    fn test_unknown_vendor() {
        let err = Profile::builtin("acme").unwrap_err();
        assert!(matches!(err.downcast_ref::<SFGError>(), Some(SFGError::UnknownProfile(_))));
    }

    #[test]
    fn test_bad_hex_constant_is_reported() {
        let document = CISCO_A0_FC16G.replace("003A0000", "003A00ZZ");
        let err = Profile::from_toml(&document, DEFAULT_VENDOR).unwrap_err();

        match err.downcast_ref::<SFGError>() {
            Some(SFGError::InvalidHexConstant { name, .. }) => assert_eq!(name, "MID2"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_short_vendor_key_is_reported() {
        let document = CISCO_A0_FC16G.replace("8DDAE6A46EC9DEF6100BF185059C3DAB", "8DDAE6A4");
        let err = Profile::from_toml(&document, DEFAULT_VENDOR).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SFGError>(),
            Some(SFGError::InvalidConstantLength { expected: 16, length: 4, .. })
        ));
    }

    #[test]
    fn test_layout_must_place_each_field_once() {
        let document = CISCO_A0_FC16G.replace(r#"{ field = "serial" }"#, r#"{ field = "vendor" }"#);
        let err = Profile::from_toml(&document, DEFAULT_VENDOR).unwrap_err();

        assert!(matches!(err.downcast_ref::<SFGError>(), Some(SFGError::InvalidProfile(_))));
    }

    #[test]
    fn test_malformed_document() {
        let err = Profile::from_toml("platform = ", DEFAULT_VENDOR).unwrap_err();
        assert!(matches!(err.downcast_ref::<SFGError>(), Some(SFGError::InvalidProfile(_))));
    }
}
