//! Exit notice shown after an ending.

use std::io::{self, BufRead, Write};

use colored::Color;

use syntec_story::Narrator;

/// Wait for the user to press Enter. End of input counts as Enter.
pub fn wait<R: BufRead, W: Write>(input: &mut R, narrator: &mut Narrator<W>) -> io::Result<()> {
    narrator.blank()?;
    narrator.line("Press Enter to exit...", Color::White)?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
