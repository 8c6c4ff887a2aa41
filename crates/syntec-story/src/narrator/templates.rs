//! Fixed text and layout helpers used by the narrator.

use colored::Color;

/// Printed above every scene after the first, and above endings.
pub const DIVIDER: &str = "-------------------------------------------------------";

/// Printed before the menu.
pub const MENU_PROMPT: &str = "What next?";

/// Separates an ending's closing prose from its epilogue.
pub const EPILOGUE_RULE: &str = "==========================";

/// Heading of the epilogue block.
pub const EPILOGUE_HEADING: &str = "EPILOGUE:";

/// Last line of every ending.
pub const THE_END: &str = "THE END.";

/// The status line shown after a scene's prose.
pub fn hours_line(hours: u32) -> String {
    format!("{hours} hours now remain.")
}

/// Colour for the status line: green, then yellow at six hours, red at three.
pub fn hours_color(hours: u32) -> Color {
    match hours {
        0..=3 => Color::Red,
        4..=6 => Color::Yellow,
        _ => Color::Green,
    }
}

/// Greedy word wrap, applied to each authored line separately.
///
/// Lines that already fit are left untouched; a single word longer than the
/// width gets a line of its own.
pub fn wrap(text: &str, width: Option<usize>) -> String {
    let Some(width) = width else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if line.chars().count() <= width {
            out.push_str(line);
            continue;
        }

        let mut current = 0;
        for word in line.split_whitespace() {
            let len = word.chars().count();
            if current > 0 && current + 1 + len > width {
                out.push('\n');
                current = 0;
            }
            if current > 0 {
                out.push(' ');
                current += 1;
            }
            out.push_str(word);
            current += len;
        }
    }
    out
}
