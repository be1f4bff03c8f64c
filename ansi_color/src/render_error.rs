// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CapabilityError, ColorParseError};

/// Anything that can stop styled text or a palette sample from being written.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum RenderError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ColorParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Capability(#[from] CapabilityError),

    #[error("Failed to write to the terminal: {0}")]
    #[diagnostic(code(hexterm::render::io))]
    Io(#[from] std::io::Error),
}
