//! The interactive session.
//!
//! `Session` owns the hour counter, flags and current scene. `choose` applies
//! one line of input; `play` runs the whole read-render loop until an ending
//! is reached.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::choice::Target;
use crate::config::StoryConfig;
use crate::error::{StoryError, StoryResult};
use crate::narrator::Narrator;
use crate::scene::{EndingId, RenderedScene, SceneId};
use crate::state::SessionState;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a choice at the current scene.
    Running,
    /// An ending was reached; no further choices are accepted.
    Ended(EndingId),
}

/// Outcome of a valid choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The session moved to another scene.
    Scene(SceneId),
    /// The session reached an ending.
    Ended(EndingId),
}

/// A single run through the story.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    phase: Phase,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(StoryConfig::default())
    }
}

impl Session {
    /// Start a session at the entry scene.
    pub fn new(config: StoryConfig) -> Self {
        Self {
            state: SessionState::new(&config),
            phase: Phase::Running,
        }
    }

    /// Get the session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Get the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether an ending has been reached.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Ended(_))
    }

    /// Render the current scene for the current state.
    pub fn current(&self) -> RenderedScene {
        self.state
            .scene
            .scene()
            .render(&self.state.flags, self.state.hours)
    }

    /// Apply one line of input.
    ///
    /// Anything that is not the number of an offered choice is rejected with
    /// [`StoryError::InvalidChoice`] and leaves the state untouched.
    pub fn choose(&mut self, input: &str) -> StoryResult<Step> {
        if self.is_over() {
            return Err(StoryError::SessionOver);
        }

        let input = input.trim();
        let scene = self.state.scene.scene();
        let Some(choice) = parse_selection(input).and_then(|n| scene.resolve(n, &self.state.flags))
        else {
            debug!(scene = %self.state.scene, input, "rejected selection");
            return Err(StoryError::InvalidChoice {
                input: input.to_string(),
            });
        };

        self.state.spend(choice.cost);
        choice.apply_effects(&mut self.state.flags);

        match choice.target {
            Target::Scene(next) => {
                debug!(
                    from = %self.state.scene,
                    to = %next,
                    cost = choice.cost,
                    hours = self.state.hours,
                    "transition"
                );
                self.state.scene = next;
                Ok(Step::Scene(next))
            }
            Target::Ending(ending) => {
                info!(
                    from = %self.state.scene,
                    %ending,
                    hours = self.state.hours,
                    "ending reached"
                );
                self.phase = Phase::Ended(ending);
                Ok(Step::Ended(ending))
            }
        }
    }

    /// Run the session to an ending, reading one selection per line.
    ///
    /// Rejected input is reported through the narrator and the same scene is
    /// shown again; there is no limit on retries. Running out of input before
    /// an ending yields [`StoryError::InputClosed`].
    pub fn play<R, W>(&mut self, input: &mut R, narrator: &mut Narrator<W>) -> StoryResult<EndingId>
    where
        R: BufRead,
        W: Write,
    {
        if let Phase::Ended(ending) = self.phase {
            return Ok(ending);
        }

        // Raw bytes: a line that is not UTF-8 is still just a bad selection.
        let mut line = Vec::new();
        loop {
            narrator.scene(&self.current())?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                return Err(StoryError::InputClosed);
            }

            match self.choose(&String::from_utf8_lossy(&line)) {
                Ok(Step::Scene(_)) => {}
                Ok(Step::Ended(ending)) => {
                    narrator.ending(&ending.ending())?;
                    return Ok(ending);
                }
                Err(e) if e.is_recoverable() => narrator.error(&e)?,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Parse a menu selection. Only positive integers are selections.
pub fn parse_selection(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|&n| n > 0)
}
