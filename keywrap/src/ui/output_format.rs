//! Formatting for the status lines printed on stdout.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes a status line, colored only when the destination is a terminal.
pub fn print_status_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.cyan())
    } else {
        writeln!(writer, "{}", msg)
    }
}

/// Writes the closing status line.
pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.green().bold())
    } else {
        writeln!(writer, "{}", msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escape_codes() {
        let mut buf = Vec::new();
        print_status_message(&mut buf, "Patching x", false).unwrap();
        print_success_message(&mut buf, "Done.", false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Patching x\nDone.\n");
    }

    #[test]
    fn colored_output_keeps_the_text() {
        let mut buf = Vec::new();
        print_success_message(&mut buf, "Done.", true).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Done."));
        assert!(out.contains('\u{1b}'));
    }
}
