#![allow(unused_imports)]

pub use crate::config::*;
pub use crate::constants::*;
pub use crate::core::auth_block::*;
pub use crate::core::identity_field::*;
pub use crate::core::segment::*;
pub use crate::image::*;
pub use crate::sfg_errors::*;
pub use crate::utils::*;
