//! Schema module - Animation data and configuration types.

mod config;
mod data;

pub use config::*;
pub use data::*;
