use anyhow::{Context, Result};
use std::io::{self, Write};

use crate::sizes::ICONSET_SIZES;

/// Write the icon requirements report to `out`.
///
/// The output is fully deterministic: a fixed preamble naming the SVG
/// rasterizer, one line per required rendition in table order, and the
/// `iconutil` invocation that compiles the finished iconset.
pub fn write_report<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Note: This tool requires librsvg (rsvg-convert) to be installed.")?;
    writeln!(out, "You can install it with: brew install librsvg")?;
    writeln!(out)?;
    writeln!(out, "Alternatively, you can use an online converter or image editing software")?;
    writeln!(out, "to create PNG files at these sizes:")?;
    writeln!(out)?;

    for entry in ICONSET_SIZES {
        writeln!(out, "- {}: {}x{} pixels", entry.filename, entry.dimension, entry.dimension)?;
    }

    writeln!(out)?;
    writeln!(out, "Place the PNG files in assets/helix-gpui.iconset/")?;
    writeln!(out, "Then run: iconutil -c icns assets/helix-gpui.iconset -o assets/helix-gpui.icns")?;

    Ok(())
}

/// Print the report to standard output.
pub fn print_report() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out).context("Failed to write report to stdout")
}
