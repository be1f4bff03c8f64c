// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Attribute, Attributes};

/// What to apply to a piece of text. Colors are kept as the hex strings the user
/// typed; they are only parsed when the request is rendered.
///
/// ```
/// use hexterm_ansi_color::{Attribute, StyleRequest};
///
/// let request = StyleRequest::default()
///     .fg("ff8000")
///     .attrib(Attribute::Bold)
///     .no_reset();
/// assert_eq!(request.foreground.as_deref(), Some("ff8000"));
/// assert!(request.suppress_reset);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleRequest {
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub attributes: Attributes,
    /// Leave the style active after the text.
    pub suppress_reset: bool,
}

impl StyleRequest {
    #[must_use]
    pub fn fg(mut self, hex: impl Into<String>) -> Self {
        self.foreground = Some(hex.into());
        self
    }

    #[must_use]
    pub fn bg(mut self, hex: impl Into<String>) -> Self {
        self.background = Some(hex.into());
        self
    }

    #[must_use]
    pub fn attrib(mut self, attribute: Attribute) -> Self {
        self.attributes.insert(attribute);
        self
    }

    #[must_use]
    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    #[must_use]
    pub fn no_reset(mut self) -> Self {
        self.suppress_reset = true;
        self
    }
}
