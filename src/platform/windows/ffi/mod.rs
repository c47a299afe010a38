//! FFI helpers for the Win32 backend.
//!
//! Conversions between the crate's plain types and `windows-rs` types.

pub mod types;

pub use types::*;
