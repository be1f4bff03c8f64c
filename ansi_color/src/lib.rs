// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # hexterm_ansi_color
//!
//! Map hex RGB colors (`ff8000`, `#70f`) onto the ANSI 256 color palette, and write
//! text styled with those colors to the terminal.
//!
//! The mapping picks exactly one of three palette subspaces, in this order:
//! 1. The 16 primary colors, when the hex code is one of a fixed set of spellings.
//! 2. The greyscale ramp (231-255), when red, green, and blue are equal.
//! 3. The 6x6x6 RGB cube (16-231) for everything else.
//!
//! ```
//! use hexterm_ansi_color::{AnsiValue, map_hex_color};
//!
//! assert_eq!(map_hex_color("ff8000").unwrap(), AnsiValue::new(214));
//! assert_eq!(map_hex_color("#f00").unwrap(), AnsiValue::new(9));
//! assert_eq!(map_hex_color("7f7f7f").unwrap(), AnsiValue::new(243));
//! ```
//!
//! Escape sequences are never hard coded by the renderer. They come from a
//! [`TerminalCapabilities`] implementation, either [`SgrCapabilities`] (built in) or
//! [`TputCapabilities`] (the terminfo database via `tput`).
//!
//! ```
//! use hexterm_ansi_color::{Attribute, ColorSupport, SgrCapabilities, StyleRequest,
//!                          format_styled_text};
//!
//! let caps = SgrCapabilities::new(ColorSupport::Ansi256);
//! let request = StyleRequest::default().fg("f00000").attrib(Attribute::Bold);
//! assert_eq!(
//!     format_styled_text(&request, "hi", &caps).unwrap(),
//!     "\x1b[38;5;9m\x1b[1mhi\x1b[0m"
//! );
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach.
mod ansi_escape_codes;
mod capabilities;
mod color;
mod detect_color_support;
mod hex_color_parser;
mod palette_probe;
mod render_error;
mod style_attribute;
mod style_renderer;
mod style_request;

// Re-export.
pub use ansi_escape_codes::*;
pub use capabilities::*;
pub use color::*;
pub use detect_color_support::*;
pub use hex_color_parser::*;
pub use palette_probe::*;
pub use render_error::*;
pub use style_attribute::*;
pub use style_renderer::*;
pub use style_request::*;
