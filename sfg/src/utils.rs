use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::sfg_errors::SFGError;

/// Convert array slice to hex string
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex literal from a profile.
/// `name` identifies the constant in the error so a broken profile is easy to find.
pub fn decode_hex_constant(name: &str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|_| {
        SFGError::InvalidHexConstant {
            name: name.to_string(),
            value: value.to_string(),
        }
        .into()
    })
}

/// Decode a hex literal that must be exactly `N` bytes long.
pub fn decode_hex_array<const N: usize>(name: &str, value: &str) -> Result<[u8; N]> {
    let bytes = decode_hex_constant(name, value)?;
    let length = bytes.len();
    bytes.try_into().map_err(|_| {
        SFGError::InvalidConstantLength {
            name: name.to_string(),
            expected: N,
            length,
        }
        .into()
    })
}

/// Writes `data` to `path` through a uniquely named temp file in the same
/// directory which is persisted over the target once fully flushed, so
/// `path` never holds a partial image and no sibling file is touched.
/// The image gets mode 0644 on unix regardless of umask.
pub fn write_image<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp_file.as_file().set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    temp_file.write_all(data)?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|err| err.error)?;

    Ok(())
}
