// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::stdout;

use hexterm_ansi_color::{Attribute, ColorSupport, RenderError, SgrCapabilities,
                         StyleRequest, TransformColor, classify_hex_color,
                         global_color_support, probe_palette, render_styled_text};

fn main() -> Result<(), RenderError> {
    // Print a string styled w/ hex colors.
    {
        let caps = SgrCapabilities::detect();
        let request = StyleRequest::default()
            .fg("323232")
            .bg("64c801")
            .attrib(Attribute::Bold)
            .attrib(Attribute::Underline);
        render_styled_text(&request, "Bold and underlined, hex colors.", &caps, &mut stdout())?;
        println!();
    }

    // Show which part of the palette a few colors land in.
    for hex in ["f00", "ff8000", "7f7f7f", "2a80d4"] {
        let mapped = classify_hex_color(hex)?;
        println!(
            "> {hex:>7} -> {:>3} ({}), shown by xterm as {}",
            mapped.ansi.index,
            mapped.color_space,
            mapped.ansi.as_rgb()
        );
    }

    // Set the color support override to ANSI 8 color mode.
    {
        global_color_support::set_override(ColorSupport::Ansi8);
        println!("> Force ANSI 8 color mode ({:?})", global_color_support::detect());
        probe_palette(&SgrCapabilities::detect(), &mut stdout())?;
    }

    // Use runtime detection to determine the color support.
    {
        global_color_support::clear_override();
        println!(
            "> Runtime detection of color support ({:?})",
            global_color_support::detect()
        );
    }

    Ok(())
}
