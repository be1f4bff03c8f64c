// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Where the escape sequences come from.
//!
//! The renderer and the probe never build escape sequences themselves. They ask a
//! [`TerminalCapabilities`] implementation for them:
//! - [`SgrCapabilities`] builds standard SGR sequences, gated by the detected
//!   [`crate::ColorSupport`].
//! - [`TputCapabilities`] asks the system `tput` program (terminfo database).
//! - [`NoColor`] refuses every lookup.

// Attach.
mod sgr_capabilities;
mod tput_capabilities;

// Re-export.
pub use sgr_capabilities::*;
pub use tput_capabilities::*;

use crate::{AnsiValue, Attribute};

/// Terminal capability lookup. Every method returns the exact bytes to write to the
/// terminal, or a [`CapabilityError`] if the terminal can't do it.
pub trait TerminalCapabilities {
    /// The number of palette entries the terminal supports.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError::NoColors`] when the terminal has no colors.
    fn color_count(&self) -> Result<u32, CapabilityError>;

    /// # Errors
    ///
    /// Returns a [`CapabilityError`] when the sequence can't be produced.
    fn set_foreground(&self, color: AnsiValue) -> Result<String, CapabilityError>;

    /// # Errors
    ///
    /// Returns a [`CapabilityError`] when the sequence can't be produced.
    fn set_background(&self, color: AnsiValue) -> Result<String, CapabilityError>;

    /// # Errors
    ///
    /// Returns a [`CapabilityError`] when the sequence can't be produced.
    fn attribute(&self, attribute: Attribute) -> Result<String, CapabilityError>;

    /// The sequence that turns off all colors and attributes.
    ///
    /// # Errors
    ///
    /// Returns a [`CapabilityError`] when the sequence can't be produced.
    fn reset(&self) -> Result<String, CapabilityError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum CapabilityError {
    #[error("Terminal does not support colors")]
    #[diagnostic(
        code(hexterm::capabilities::no_colors),
        help(
            "Check that TERM names a color terminal and NO_COLOR is not set. \
             Set IGNORE_IS_TERMINAL=1 when output is piped"
        )
    )]
    NoColors,

    #[error("Capability lookup for '{capability}' failed: {message}")]
    #[diagnostic(
        code(hexterm::capabilities::lookup_failed),
        help("Try `--capabilities builtin` if the terminfo database is missing")
    )]
    LookupFailed { capability: String, message: String },
}

/// A terminal without colors. Every lookup fails with [`CapabilityError::NoColors`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoColor;

impl TerminalCapabilities for NoColor {
    fn color_count(&self) -> Result<u32, CapabilityError> { Err(CapabilityError::NoColors) }

    fn set_foreground(&self, _: AnsiValue) -> Result<String, CapabilityError> {
        Err(CapabilityError::NoColors)
    }

    fn set_background(&self, _: AnsiValue) -> Result<String, CapabilityError> {
        Err(CapabilityError::NoColors)
    }

    fn attribute(&self, _: Attribute) -> Result<String, CapabilityError> {
        Err(CapabilityError::NoColors)
    }

    fn reset(&self) -> Result<String, CapabilityError> { Err(CapabilityError::NoColors) }
}
