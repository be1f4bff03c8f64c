// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # hexterm
//!
//! Command line front end for [`hexterm_ansi_color`].
//!
//! ```text
//! hexterm test                                  # every palette index in its own color
//! hexterm code ff8000                           # the index of one color, fg and bg
//! hexterm -f ff8000 -b 000 -a bold -- text...   # styled text
//! hexterm ff8000 text...                        # foreground only shorthand
//! ```
//!
//! Logging to `log.txt` is turned on with `-l`.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach.
pub mod clap_config;
pub mod launcher;
pub mod log_support;

// Re-export.
pub use clap_config::*;
pub use launcher::*;
pub use log_support::*;
