//! Core state machine for the Citadel dashboard.
//!
//! This crate provides everything between raw input lines and render trees:
//! the screen trait and registry, static command tables, the transition type,
//! the screen controller, session snapshot types, operator verification, and
//! the logging subsystem.

pub mod auth;
pub mod command;
pub mod controller;
pub mod error;
pub mod logging;
pub mod screen;
pub mod session;
