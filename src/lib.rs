#![doc = include_str!("../README.md")]

pub mod error;
pub mod manifest;
pub mod migrate;
pub mod scan;

pub use error::*;

/// Root directory both tools operate on, relative to the working directory.
pub const SERVICES_ROOT: &str = "services";
