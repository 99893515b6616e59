//! I/O adapters: scaffold rendering, manifest assembly, settings store,
//! git bootstrap.

pub mod git;
pub mod manifest;
pub mod settings;
pub mod templates;
