//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the files a host keeps next to the game:
//! - Combat tuning (data-driven via TOML)
//! - Enemy template catalogs (data-driven via RON)
//! - Player roster saves (JSON, forward-compatible)
//!
//! All loaders use mech-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, SaveLoader, TemplateLoader};
