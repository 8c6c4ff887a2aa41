//! Greeting printed once before the story starts.

use std::io::{self, Write};

use chrono::Local;
use colored::Color;

use syntec_story::Narrator;

const TITLE: &str = r"
   ███████╗ ██╗   ██╗ ███╗   ██╗       ████████╗ ███████╗  ██████╗
   ██╔════╝ ╚██╗ ██╔╝ ████╗  ██║       ╚══██╔══╝ ██╔════╝ ██╔════╝
   ███████╗  ╚████╔╝  ██╔██╗ ██║ █████╗   ██║    █████╗   ██║
   ╚════██║   ╚██╔╝   ██║╚██╗██║ ╚════╝   ██║    ██╔══╝   ██║
   ███████║    ██║    ██║ ╚████║          ██║    ███████╗ ╚██████╗
   ╚══════╝    ╚═╝    ╚═╝  ╚═══╝          ╚═╝    ╚══════╝  ╚═════╝";

/// `ctime`-style timestamp, e.g. `Thu Oct 15 09:41:07 2026`.
fn system_time() -> String {
    Local::now().format("%a %b %e %T %Y").to_string()
}

/// Print the title and the link greeting.
pub fn print<W: Write>(narrator: &mut Narrator<W>) -> io::Result<()> {
    narrator.line(TITLE, Color::BrightBlue)?;
    narrator.blank()?;
    narrator.line("WELCOME, USER. CURRENT SYSTEM TIME:", Color::Cyan)?;
    narrator.line(&system_time(), Color::Green)?;
    narrator.line("REMOTE LINK SUCCESSFUL.", Color::Cyan)?;
    narrator.bell()?;
    narrator.line("=====================================", Color::Cyan)?;
    narrator.line("BEGIN:", Color::Cyan)?;
    narrator.blank()
}
