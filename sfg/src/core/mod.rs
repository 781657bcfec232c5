pub mod auth_block;
pub mod identity_field;
pub mod segment;
