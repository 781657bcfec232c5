//! # SFG Error Definitions Module
//!
//! This module defines the structured errors used across the SFP firmware
//! generator. They fall into two groups:
//!
//! - **Input Errors**: an identity field that is empty or longer than the
//!   field width. The caller can fix these; the CLI shows its usage text.
//! - **Internal Errors**: a profile constant that is not valid hex, a
//!   profile document that does not parse, or a lookup of a profile that is
//!   not built in. These mean the tool itself is broken and must never be
//!   papered over, since a wrong byte ends up in hardware.
//!
//! ## Example
//! ```rust
//! use sfg::{IdentityField, SFGError};
//!
//! let err = IdentityField::new("vendor", "").unwrap_err();
//! assert!(matches!(err.downcast_ref::<SFGError>(), Some(SFGError::InvalidFieldLength { .. })));
//! ```
//!
//! Copyrights © 2025 SFG Contributors. All rights reserved.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SFGError {
    #[error("{field} must be 1 to {max} bytes, got {length}")]
    InvalidFieldLength { field: &'static str, length: usize, max: usize },

    #[error("Can't decode '{value}' in constant {name}")]
    InvalidHexConstant { name: String, value: String },

    #[error("constant {name} must be {expected} bytes, got {length}")]
    InvalidConstantLength { name: String, expected: usize, length: usize },

    #[error("Invalid profile document: {0}")]
    InvalidProfile(String),

    #[error("No built-in profile named '{0}'")]
    UnknownProfile(String),
}

impl SFGError {
    /// True for errors the operator can fix by changing the command line.
    pub fn is_input_error(&self) -> bool {
        matches!(self, SFGError::InvalidFieldLength { .. })
    }
}
