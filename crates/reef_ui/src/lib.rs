//! UI assets for the Reef pipeline dashboard.

pub mod icons;

pub use icons::{markup_for, IconName};
