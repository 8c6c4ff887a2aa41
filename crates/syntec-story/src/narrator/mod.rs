//! Narrator: lays rendered scenes, diagnostics and endings out on a stream.

mod config;
mod templates;

pub use config::NarratorConfig;
pub use templates::{DIVIDER, EPILOGUE_HEADING, MENU_PROMPT, THE_END, hours_line, wrap};

use std::io::{self, Write};
use std::thread;

use colored::{Color, Colorize};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::error::StoryError;
use crate::scene::{Ending, RenderedScene, SceneId};

/// Writes the story to an output stream.
#[derive(Debug)]
pub struct Narrator<W: Write> {
    out: W,
    config: NarratorConfig,
    /// A diagnostic is on screen and must survive the next redraw.
    hold: bool,
}

impl<W: Write> Narrator<W> {
    /// Create a narrator writing to `out`.
    pub fn new(out: W, config: NarratorConfig) -> Self {
        Self {
            out,
            config,
            hold: false,
        }
    }

    /// The narrator configuration.
    pub fn config(&self) -> &NarratorConfig {
        &self.config
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write a scene: divider, prose, status line and menu.
    ///
    /// With clearing enabled the screen is wiped first, except for the entry
    /// scene and for the redraw that follows a diagnostic.
    pub fn scene(&mut self, scene: &RenderedScene) -> io::Result<()> {
        let held = std::mem::take(&mut self.hold);
        if scene.id != SceneId::ENTRY && !held {
            self.clear()?;
        }

        if scene.id != SceneId::ENTRY {
            self.line(DIVIDER, Color::Blue)?;
            self.blank()?;
        }

        self.prose(&scene.text)?;

        if let Some(hours) = scene.hours {
            self.blank()?;
            self.line(&hours_line(hours), templates::hours_color(hours))?;
        }

        self.blank()?;
        self.line(MENU_PROMPT, Color::Cyan)?;
        for entry in &scene.menu {
            self.line(&entry.to_string(), Color::BrightCyan)?;
        }
        self.out.flush()
    }

    /// Write a diagnostic for rejected input.
    pub fn error(&mut self, error: &StoryError) -> io::Result<()> {
        self.bell()?;
        self.line(&error.to_string(), Color::Red)?;
        self.hold = true;
        self.out.flush()
    }

    /// Write an ending: closing prose, epilogue and the final line.
    pub fn ending(&mut self, ending: &Ending) -> io::Result<()> {
        self.clear()?;
        self.bell()?;
        self.line(DIVIDER, Color::Blue)?;
        self.blank()?;
        self.prose(ending.prose)?;

        self.blank()?;
        self.line(templates::EPILOGUE_RULE, Color::Magenta)?;
        self.line(EPILOGUE_HEADING, Color::BrightMagenta)?;
        self.prose(ending.epilogue)?;

        self.blank()?;
        self.line(THE_END, Color::Magenta)?;
        self.out.flush()
    }

    /// Write a line of framing text in the given colour.
    pub fn line(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.config.color {
            writeln!(self.out, "{}", text.color(color))
        } else {
            writeln!(self.out, "{text}")
        }
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Ring the terminal bell, if audible cues are enabled.
    pub fn bell(&mut self) -> io::Result<()> {
        if self.config.bell {
            self.out.write_all(b"\x07")?;
        }
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.config.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn prose(&mut self, text: &str) -> io::Result<()> {
        let text = wrap(text, self.config.width);

        if self.config.typewriter.is_zero() {
            writeln!(self.out, "{text}")?;
            return Ok(());
        }

        let mut buf = [0u8; 4];
        for c in text.chars() {
            self.out.write_all(c.encode_utf8(&mut buf).as_bytes())?;
            self.out.flush()?;
            if !c.is_whitespace() {
                thread::sleep(self.config.typewriter);
            }
        }
        writeln!(self.out)
    }
}
