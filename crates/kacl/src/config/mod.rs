//! Configuration system for kacl

pub mod defaults;
mod loader;
mod types;
pub mod validation;

pub use loader::*;
pub use types::*;
