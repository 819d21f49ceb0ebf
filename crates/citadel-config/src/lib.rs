//! Configuration types and loaders for the Citadel dashboard.
//!
//! This crate owns the on-disk display schema so the binary and tests share a
//! single source of truth.

pub mod display;

pub use display::{default_path, CapMode, DisplayConfig, UiConfig};
