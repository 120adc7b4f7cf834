//! Prelude module for the wheel_date crate.
//!
//! Re-exports the derive_more macros used across modules.

pub use derive_more::Display;
