//! Narrator configuration.

use std::time::Duration;

/// Configuration for the narrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarratorConfig {
    /// Emit ANSI colours.
    pub color: bool,
    /// Wrap prose at this many columns. `None` leaves lines as authored.
    pub width: Option<usize>,
    /// Delay between characters of prose. Zero writes prose at once.
    pub typewriter: Duration,
    /// Clear the terminal before each new scene and before the ending.
    pub clear: bool,
    /// Ring the terminal bell on the link cue, diagnostics and the ending.
    pub bell: bool,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            color: true,
            width: None,
            typewriter: Duration::ZERO,
            clear: false,
            bell: false,
        }
    }
}

impl NarratorConfig {
    /// Create a new narrator config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain output: no colour, no wrapping, no delay, no control sequences.
    pub fn plain() -> Self {
        Self::default().with_color(false)
    }

    /// Enable or disable colour.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set the wrap width. Widths below 20 columns are raised to 20.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width.max(20));
        self
    }

    /// Set the per-character delay.
    pub fn with_typewriter(mut self, delay: Duration) -> Self {
        self.typewriter = delay;
        self
    }

    /// Enable or disable clearing the screen between scenes.
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Enable or disable audible cues.
    pub fn with_bell(mut self, bell: bool) -> Self {
        self.bell = bell;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = NarratorConfig::new();
        assert!(config.color);
        assert_eq!(config.width, None);
        assert_eq!(config.typewriter, Duration::ZERO);
        assert!(!config.clear);
        assert!(!config.bell);
    }

    #[test]
    fn builder_pattern() {
        let config = NarratorConfig::plain()
            .with_width(72)
            .with_typewriter(Duration::from_millis(15))
            .with_clear(true)
            .with_bell(true);
        assert!(!config.color);
        assert!(config.clear);
        assert!(config.bell);
        assert_eq!(config.width, Some(72));
        assert_eq!(config.typewriter, Duration::from_millis(15));
    }

    #[test]
    fn width_has_a_floor() {
        assert_eq!(NarratorConfig::new().with_width(4).width, Some(20));
    }
}
