//! Configuration for a story session.

/// Hours on the clock when a session starts.
pub const DEFAULT_HOURS: u32 = 12;

/// Configuration for a story session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryConfig {
    /// Starting value of the hour counter.
    pub starting_hours: u32,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            starting_hours: DEFAULT_HOURS,
        }
    }
}

impl StoryConfig {
    /// Set the starting hours.
    pub fn with_hours(mut self, hours: u32) -> Self {
        self.starting_hours = hours;
        self
    }
}
