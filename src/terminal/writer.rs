use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};

use crate::ui::span::SpanLine;
use crate::ui::style::Color;

/// Writes styled lines to `out`, one per row. Plain output (no escape codes)
/// when `colored` is false, e.g. when stdout is not a terminal.
pub fn write_lines<W: Write>(out: &mut W, lines: &[SpanLine], colored: bool) -> io::Result<()> {
    for line in lines {
        for span in line {
            if !colored || span.style.is_plain() {
                queue!(out, Print(&span.text))?;
                continue;
            }

            if let Some(fg) = span.style.color {
                queue!(out, SetForegroundColor(map_color(fg)))?;
            }
            if span.style.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(
                out,
                Print(&span.text),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        writeln!(out)?;
    }
    out.flush()
}

fn map_color(color: Color) -> crossterm::style::Color {
    match color {
        Color::DarkGrey => crossterm::style::Color::DarkGrey,
        Color::Cyan => crossterm::style::Color::Cyan,
    }
}
