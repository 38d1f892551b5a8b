//! Terminal printer for rendered lines

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use super::render::{Line, LineKind};

/// Style applied to the label of each kind of line.
fn style_for(kind: LineKind) -> Option<ColorSpec> {
    let mut spec = ColorSpec::new();
    match kind {
        LineKind::Root => spec.set_fg(Some(Color::Blue)).set_bold(true),
        LineKind::Directory => spec.set_fg(Some(Color::Yellow)),
        LineKind::File => spec.set_fg(Some(Color::Green)),
        LineKind::Truncated => spec.set_fg(Some(Color::Red)),
        LineKind::Summary => return None,
    };
    Some(spec)
}

/// Write lines to a color-capable sink. A blank line separates the tree
/// from the summary.
pub fn write_lines<W: WriteColor>(out: &mut W, lines: &[Line]) -> io::Result<()> {
    let mut in_summary = false;
    for line in lines {
        if line.is_summary() && !in_summary {
            writeln!(out)?;
            in_summary = true;
        }

        write!(out, "{}", line.prefix)?;
        match style_for(line.kind) {
            Some(spec) => {
                out.set_color(&spec)?;
                write!(out, "{}", line.label)?;
                out.reset()?;
            }
            None => write!(out, "{}", line.label)?,
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print lines to stdout using the given color choice.
pub fn print_lines(lines: &[Line], choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    write_lines(&mut stdout, lines)?;
    stdout.flush()
}

/// Format lines as plain text.
pub fn format_lines(lines: &[Line]) -> String {
    let mut out = NoColor::new(Vec::new());
    write_lines(&mut out, lines).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&out.into_inner()).into_owned()
}
