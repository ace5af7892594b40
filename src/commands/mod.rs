//! Command implementations for clasp CLI

pub mod rebuild;
pub mod version;
