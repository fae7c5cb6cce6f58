//! Core types and utilities for the Reef pipeline dashboard.
//!
//! This crate provides the foundation layer shared by the workspace:
//!
//! - **error**: Error handling shared across workspace crates
//! - **logging**: Structured logging setup

pub mod error;
pub mod logging;

pub use error::ReefError;
