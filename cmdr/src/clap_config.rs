// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand, ValueEnum};
use hexterm_ansi_color::ColorSupport;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "hexterm")]
#[command(about = "🎨 Hex colors in the ANSI 256 color palette")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  hexterm [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n  hexterm -f <hex> [-b <hex>] [-a <attr>]... [--] <text>...\n  hexterm <hex> <text>...\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: Option<CLICommand>,

    #[command(flatten)]
    pub style_options: StyleOption,

    #[arg(
        value_name = "text",
        trailing_var_arg = true,
        help = "Text to print. Without style flags, the first word is the foreground color. \
                Text starting with `-` goes after `--`"
    )]
    pub words: Vec<String>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "🌈 Print every palette index in its own color")]
    Test,

    #[clap(about = "🔎 Show the palette index of a hex color, as foreground and background")]
    Code {
        #[arg(value_name = "hexcolor", allow_hyphen_values = true)]
        hex_color: String,
    },
}

#[derive(Debug, Args)]
pub struct StyleOption {
    #[arg(short = 'f', long = "fg", value_name = "hex", help = "Foreground color")]
    pub foreground: Option<String>,

    #[arg(short = 'b', long = "bg", value_name = "hex", help = "Background color")]
    pub background: Option<String>,

    #[arg(
        short = 'a',
        long = "attr",
        value_name = "attr",
        action = clap::ArgAction::Append,
        help = "Text attribute, repeatable: bold, ul, rev, blink, invis, so"
    )]
    pub attributes: Vec<String>,

    #[arg(short = 'n', long, help = "Leave the style active after the text")]
    pub no_reset: bool,
}

impl StyleOption {
    /// True when any style flag was given on the command line.
    #[must_use]
    pub fn is_any_set(&self) -> bool {
        self.foreground.is_some()
            || self.background.is_some()
            || !self.attributes.is_empty()
            || self.no_reset
    }
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_enum,
        env = "HEXTERM_CAPABILITIES",
        default_value_t = CapabilitySource::Builtin,
        help = "Where escape sequences come from"
    )]
    pub capabilities: CapabilitySource,

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = ColorSupportOverride::Auto,
        help = "Skip color support detection for the builtin capabilities"
    )]
    pub color_support: ColorSupportOverride,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CapabilitySource {
    /// Standard SGR sequences.
    Builtin,
    /// The terminfo database, through `tput`.
    Tput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorSupportOverride {
    /// Look at `TERM`, `COLORTERM`, `NO_COLOR`, and whether stdout is a terminal.
    Auto,
    Ansi256,
    Ansi8,
    None,
}

impl ColorSupportOverride {
    #[must_use]
    pub fn as_color_support(self) -> Option<ColorSupport> {
        match self {
            ColorSupportOverride::Auto => None,
            ColorSupportOverride::Ansi256 => Some(ColorSupport::Ansi256),
            ColorSupportOverride::Ansi8 => Some(ColorSupport::Ansi8),
            ColorSupportOverride::None => Some(ColorSupport::NoColor),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_clap_config_is_valid() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_parse_style_flags() {
        let cli_arg = CLIArg::try_parse_from([
            "hexterm", "-ff00000", "-b", "#000", "-abold", "-a", "ul", "-n", "--", "hello",
            "world",
        ])
        .unwrap();
        assert!(cli_arg.command.is_none());
        assert_eq!(cli_arg.style_options.foreground.as_deref(), Some("f00000"));
        assert_eq!(cli_arg.style_options.background.as_deref(), Some("#000"));
        assert_eq!(cli_arg.style_options.attributes, vec!["bold", "ul"]);
        assert!(cli_arg.style_options.no_reset);
        assert_eq!(cli_arg.words, vec!["hello", "world"]);
    }

    #[test]
    fn test_parse_attached_values() {
        let cli_arg =
            CLIArg::try_parse_from(["hexterm", "-bE0E0E0", "-ainvis", "-f70f", "a", "b"])
                .unwrap();
        assert_eq!(cli_arg.style_options.foreground.as_deref(), Some("70f"));
        assert_eq!(cli_arg.style_options.background.as_deref(), Some("E0E0E0"));
        assert_eq!(cli_arg.style_options.attributes, vec!["invis"]);
        assert_eq!(cli_arg.words, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_shorthand() {
        let cli_arg = CLIArg::try_parse_from(["hexterm", "ff8000", "hi", "there"]).unwrap();
        assert!(cli_arg.command.is_none());
        assert!(!cli_arg.style_options.is_any_set());
        assert_eq!(cli_arg.words, vec!["ff8000", "hi", "there"]);
    }

    #[test]
    fn test_parse_subcommands() {
        let cli_arg = CLIArg::try_parse_from(["hexterm", "test"]).unwrap();
        assert!(matches!(cli_arg.command, Some(CLICommand::Test)));

        let cli_arg = CLIArg::try_parse_from(["hexterm", "code", "70f"]).unwrap();
        let Some(CLICommand::Code { hex_color }) = cli_arg.command else {
            panic!("{cli_arg:?}");
        };
        assert_eq!(hex_color, "70f");
    }

    #[test]
    fn test_parse_global_options() {
        let cli_arg = CLIArg::try_parse_from([
            "hexterm",
            "test",
            "--color-support",
            "ansi8",
            "--capabilities",
            "tput",
        ])
        .unwrap();
        assert_eq!(
            cli_arg.global_options.color_support.as_color_support(),
            Some(ColorSupport::Ansi8)
        );
        assert_eq!(cli_arg.global_options.capabilities, CapabilitySource::Tput);
    }

    #[test]
    fn test_no_args_is_an_error() {
        assert!(CLIArg::try_parse_from(["hexterm"]).is_err());
    }
}
