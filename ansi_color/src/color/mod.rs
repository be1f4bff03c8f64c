// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core color types and the hex to ANSI 256 mapping.
//!
//! This module provides:
//! - **Primitive types**: [`RgbColor`] (parsed from hex) and [`AnsiValue`] (256-color
//!   palette index)
//! - **Abstraction**: [`TransformColor`] trait for converting between the two
//! - **Mapping**: [`map_hex_color()`] and friends, which pick one of the three palette
//!   subspaces ([`ColorSpace`])
//! - **Errors**: [`ColorParseError`] for malformed hex input

// Attach.
mod ansi_value;
mod color_parse_error;
mod convert;
mod rgb_color;
mod transform_color;

// Re-export.
pub use ansi_value::*;
pub use color_parse_error::*;
pub use convert::*;
pub use rgb_color::*;
pub use transform_color::*;
