// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

/// Global variable which can be used to override the color support.
///
/// This is a global variable because the answer really depends on the environment,
/// which is also global, and the command line needs a way to overrule it.
pub mod global_color_support {
    use super::{AtomicI8, ColorSupport, Ordering, Stream,
                examine_env_vars_to_determine_color_support};

    static COLOR_SUPPORT_GLOBAL: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    const NOT_SET_VALUE: i8 = -1;

    /// This is the main function that is used to determine whether color is supported.
    /// And if so what type of color is supported.
    ///
    /// - If the value has been set using [`set_override`], then that value will be
    ///   returned.
    /// - Otherwise, the value will be determined calling
    ///   [`examine_env_vars_to_determine_color_support`].
    #[must_use]
    pub fn detect() -> ColorSupport {
        match try_get_override() {
            Some(it) => it,
            None => examine_env_vars_to_determine_color_support(Stream::Stdout),
        }
    }

    /// Override the color support. Regardless of the value of the environment variables
    /// the value you set here will be used when you call [`detect()`].
    ///
    /// # Testing support
    ///
    /// The [serial_test](https://crates.io/crates/serial_test) crate is used to test this
    /// function. In any test in which this function is called, please use the `#[serial]`
    /// attribute to annotate that test. Otherwise there will be flakiness in the test
    /// results (tests are run in parallel using many threads).
    pub fn set_override(value: ColorSupport) {
        COLOR_SUPPORT_GLOBAL.store(i8::from(value), Ordering::SeqCst);
    }

    pub fn clear_override() { COLOR_SUPPORT_GLOBAL.store(NOT_SET_VALUE, Ordering::SeqCst); }

    #[must_use]
    pub fn try_get_override() -> Option<ColorSupport> {
        let it = COLOR_SUPPORT_GLOBAL.load(Ordering::SeqCst);
        ColorSupport::try_from(it).ok()
    }
}

/// The environment variables that decide color support, captured in one place so the
/// decision itself is a pure function.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorEnv {
    pub term: Option<String>,
    pub colorterm: Option<String>,
    pub no_color: Option<String>,
    pub ignore_is_terminal: Option<String>,
    pub is_ci: bool,
}

impl ColorEnv {
    #[must_use]
    pub fn from_process_env() -> Self {
        Self {
            term: env::var("TERM").ok(),
            colorterm: env::var("COLORTERM").ok(),
            no_color: env::var("NO_COLOR").ok(),
            ignore_is_terminal: env::var("IGNORE_IS_TERMINAL").ok(),
            is_ci: is_ci::uncached(),
        }
    }
}

/// Determine whether color is supported heuristically. This is based on the environment
/// variables, and whether `stream` is a terminal.
#[must_use]
pub fn examine_env_vars_to_determine_color_support(stream: Stream) -> ColorSupport {
    determine_color_support(&ColorEnv::from_process_env(), is_a_tty(stream))
}

#[must_use]
pub fn determine_color_support(color_env: &ColorEnv, is_tty: bool) -> ColorSupport {
    let term = color_env.term.as_deref();
    let ignore_is_terminal = color_env
        .ignore_is_terminal
        .as_deref()
        .is_some_and(|it| it != "0");

    if env_no_color(color_env.no_color.as_deref())
        || term.is_none_or(|it| it == "dumb")
        || !(is_tty || ignore_is_terminal)
    {
        return ColorSupport::NoColor;
    }

    if term.is_some_and(check_256_color) || color_env.colorterm.is_some() {
        return ColorSupport::Ansi256;
    }

    if term.is_some_and(check_ansi_color) {
        return ColorSupport::Ansi8;
    }

    if color_env.is_ci {
        return ColorSupport::Ansi256;
    }

    ColorSupport::NoColor
}

/// The stream to check for color support.
#[derive(Clone, Copy, Debug)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// The result of the color support check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Ansi256,
    Ansi8,
    NoColor,
}

impl ColorSupport {
    /// How many palette entries the terminal can show.
    #[must_use]
    pub fn color_count(self) -> u32 {
        match self {
            ColorSupport::Ansi256 => 256,
            ColorSupport::Ansi8 => 8,
            ColorSupport::NoColor => 0,
        }
    }
}

/// These trait implementations allow us to use `ColorSupport` and `i8` interchangeably.
mod convert_between_color_and_i8 {
    impl TryFrom<i8> for super::ColorSupport {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(super::ColorSupport::Ansi256),
                2 => Ok(super::ColorSupport::Ansi8),
                3 => Ok(super::ColorSupport::NoColor),
                _ => Err(()),
            }
        }
    }

    impl From<super::ColorSupport> for i8 {
        #[rustfmt::skip]
        fn from(value: super::ColorSupport) -> Self {
            match value {
                super::ColorSupport::Ansi256 => 1,
                super::ColorSupport::Ansi8   => 2,
                super::ColorSupport::NoColor => 3,
            }
        }
    }
}

mod helpers {
    use super::Stream;

    #[must_use]
    pub fn is_a_tty(stream: Stream) -> bool {
        use is_terminal::IsTerminal;
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    #[must_use]
    pub fn check_256_color(term: &str) -> bool {
        term.ends_with("256") || term.ends_with("256color")
    }

    #[must_use]
    pub fn check_ansi_color(term: &str) -> bool {
        term.starts_with("screen")
            || term.starts_with("xterm")
            || term.starts_with("vt100")
            || term.starts_with("vt220")
            || term.starts_with("rxvt")
            || term.contains("color")
            || term.contains("ansi")
            || term.contains("cygwin")
            || term.contains("linux")
    }

    /// `NO_COLOR` is honored when set to anything but `"0"`.
    #[must_use]
    pub fn env_no_color(no_color: Option<&str>) -> bool {
        match no_color {
            Some("0") | None => false,
            Some(_) => true,
        }
    }
}
pub use helpers::*;
