// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::process::Command;

use super::{CapabilityError, TerminalCapabilities};
use crate::{AnsiValue, Attribute};

const DEFAULT_PROGRAM: &str = "tput";

/// Asks the terminfo database, through the `tput` program, for each sequence. The
/// `TERM` environment variable of the current process picks the terminfo entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TputCapabilities {
    pub program: String,
}

impl Default for TputCapabilities {
    fn default() -> Self { Self::new() }
}

impl TputCapabilities {
    #[must_use]
    pub fn new() -> Self { Self::with_program(DEFAULT_PROGRAM) }

    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `tput <capname> [arg]` and return its stdout verbatim.
    fn lookup(&self, capname: &str, arg: Option<u8>) -> Result<String, CapabilityError> {
        let mut command = Command::new(&self.program);
        command.arg(capname);
        if let Some(arg) = arg {
            command.arg(arg.to_string());
        }

        let output = command.output().map_err(|err| CapabilityError::LookupFailed {
            capability: capname.to_string(),
            message: err.to_string(),
        })?;

        if !output.status.success() {
            return Err(CapabilityError::LookupFailed {
                capability: capname.to_string(),
                message: output.status.to_string(),
            });
        }

        let it = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::trace!(message = "tput lookup", capname = %capname, arg = ?arg, output = ?it);
        Ok(it)
    }
}

/// Turn the output of `tput colors` into a color count. `-1` (and anything that is
/// not positive) means no colors. Counts above 256 are clamped since only the 256
/// color palette is addressed.
fn parse_color_count(output: &str) -> Result<u32, CapabilityError> {
    let trimmed = output.trim();
    let count = trimmed
        .parse::<i64>()
        .map_err(|err| CapabilityError::LookupFailed {
            capability: "colors".to_string(),
            message: format!("unexpected output '{trimmed}': {err}"),
        })?;

    match u32::try_from(count.min(256)) {
        Ok(0) | Err(_) => Err(CapabilityError::NoColors),
        Ok(it) => Ok(it),
    }
}

impl TerminalCapabilities for TputCapabilities {
    fn color_count(&self) -> Result<u32, CapabilityError> {
        parse_color_count(&self.lookup("colors", None)?)
    }

    fn set_foreground(&self, color: AnsiValue) -> Result<String, CapabilityError> {
        self.lookup("setaf", Some(color.index))
    }

    fn set_background(&self, color: AnsiValue) -> Result<String, CapabilityError> {
        self.lookup("setab", Some(color.index))
    }

    fn attribute(&self, attribute: Attribute) -> Result<String, CapabilityError> {
        self.lookup(attribute.terminfo_capname(), None)
    }

    fn reset(&self) -> Result<String, CapabilityError> { self.lookup("sgr0", None) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("256\n", Ok(256))]
    #[test_case("8", Ok(8))]
    #[test_case("16777216\n", Ok(256))]
    #[test_case("-1\n", Err(CapabilityError::NoColors))]
    #[test_case("0", Err(CapabilityError::NoColors))]
    fn test_parse_color_count(output: &str, expected: Result<u32, CapabilityError>) {
        assert_eq!(parse_color_count(output), expected);
    }

    #[test]
    fn test_parse_color_count_garbage() {
        let result = parse_color_count("lots");
        assert!(matches!(
            result,
            Err(CapabilityError::LookupFailed { ref capability, .. }) if capability == "colors"
        ));
    }

    #[test]
    fn test_missing_program_is_lookup_failure() {
        let caps = TputCapabilities::with_program("hexterm-no-such-program-4f1c");
        let result = caps.set_foreground(AnsiValue::new(1));
        assert!(matches!(
            result,
            Err(CapabilityError::LookupFailed { ref capability, .. }) if capability == "setaf"
        ));
        assert!(matches!(
            caps.color_count(),
            Err(CapabilityError::LookupFailed { .. })
        ));
    }

    #[test]
    fn test_default_program() {
        assert_eq!(TputCapabilities::default().program, "tput");
    }
}
