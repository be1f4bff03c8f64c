// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Write, stdout};

use hexterm_ansi_color::{Attributes, SgrCapabilities, StyleRequest,
                         TerminalCapabilities, TputCapabilities, TransformColor,
                         global_color_support, probe_palette, render_code_sample,
                         render_styled_text};

use crate::{CLIArg, CLICommand, CapabilitySource, GlobalOption, StyleOption};

/// What a command line asks for, once clap is done with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Probe,
    Code(String),
    Style { request: StyleRequest, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum CliError {
    #[error("No text to print")]
    #[diagnostic(
        code(hexterm::cli::missing_text),
        help("Use `hexterm -f <hex> <text>...`, or `hexterm <hex> <text>...`")
    )]
    MissingText,
}

/// Turn parsed arguments into a [`Mode`].
///
/// - A subcommand wins over everything else.
/// - With any style flag, all the words are the text.
/// - Without style flags, the first word is the foreground color and the rest is the
///   text.
///
/// # Errors
///
/// [`CliError::MissingText`] when there are no words to print.
pub fn resolve_mode(
    command: Option<&CLICommand>,
    style_options: &StyleOption,
    words: &[String],
) -> Result<Mode, CliError> {
    match command {
        Some(CLICommand::Test) => return Ok(Mode::Probe),
        Some(CLICommand::Code { hex_color }) => return Ok(Mode::Code(hex_color.clone())),
        None => {}
    }

    if style_options.is_any_set() {
        if words.is_empty() {
            return Err(CliError::MissingText);
        }
        let request = StyleRequest {
            foreground: style_options.foreground.clone(),
            background: style_options.background.clone(),
            attributes: Attributes::from_names_lenient(
                style_options.attributes.iter().map(String::as_str),
            ),
            suppress_reset: style_options.no_reset,
        };
        return Ok(Mode::Style {
            request,
            text: words.join(" "),
        });
    }

    match words {
        [hex, rest @ ..] if !rest.is_empty() => Ok(Mode::Style {
            request: StyleRequest::default().fg(hex.as_str()),
            text: rest.join(" "),
        }),
        _ => Err(CliError::MissingText),
    }
}

/// Pick the capability resolver. The `--color-support` override only affects the
/// builtin resolver, since `tput` has its own idea of the terminal.
#[must_use]
pub fn create_capabilities(global_options: &GlobalOption) -> Box<dyn TerminalCapabilities> {
    if let Some(it) = global_options.color_support.as_color_support() {
        global_color_support::set_override(it);
    }

    match global_options.capabilities {
        CapabilitySource::Builtin => Box::new(SgrCapabilities::detect()),
        CapabilitySource::Tput => Box::new(TputCapabilities::new()),
    }
}

/// Run the command line. Output goes to stdout; on failure nothing is written to
/// stdout and the error is returned to be reported on stderr.
///
/// # Errors
///
/// Any [`CliError`] or [`hexterm_ansi_color::RenderError`], as a [`miette::Report`].
pub fn launch(cli_arg: &CLIArg) -> miette::Result<()> {
    let mode = resolve_mode(
        cli_arg.command.as_ref(),
        &cli_arg.style_options,
        &cli_arg.words,
    )?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "Resolved mode", mode = ?mode);

    let caps = create_capabilities(&cli_arg.global_options);
    let mut writer = stdout().lock();
    run_mode(&mode, caps.as_ref(), &mut writer)
}

/// # Errors
///
/// Any [`hexterm_ansi_color::RenderError`], as a [`miette::Report`].
pub fn run_mode(
    mode: &Mode,
    caps: &dyn TerminalCapabilities,
    writer: &mut impl Write,
) -> miette::Result<()> {
    match mode {
        Mode::Probe => probe_palette(caps, writer)?,
        Mode::Code(hex) => {
            let mapped = render_code_sample(hex, caps, writer)?;
            tracing::debug!(
                message = "Mapped color",
                hex = %hex,
                index = mapped.ansi.index,
                color_space = %mapped.color_space,
                shown_as = %mapped.ansi.as_rgb()
            );
        }
        Mode::Style { request, text } => render_styled_text(request, text, caps, writer)?,
    }
    Ok(())
}
