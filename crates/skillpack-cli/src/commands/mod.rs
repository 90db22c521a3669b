//! Command implementations.

pub mod pack;
pub mod unpack;
pub mod validate;
