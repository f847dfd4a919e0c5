//! Line-oriented prompting.

use std::io::{self, BufRead, Write};

/// Print `prompt`, flush, and read one line.
///
/// Returns the trimmed line, or `None` once the input is exhausted.
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parse a numeric id typed by the user.
pub fn parse_id(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}
