//! Narrative engine for the SYN-TEC remote link.
//!
//! A fixed graph of scenes, each with prose and a numbered menu, driven by a
//! single session loop. The session tracks a depleting hour counter and two
//! one-way flags that change which prose and menu entries are shown later.
//! Content is compiled in; there is no persistence and no randomness.

/// Choice conditions, effects and the menu entries they produce.
pub mod choice;
/// Session and story configuration.
pub mod config;
/// Error types for the story engine.
pub mod error;
/// Output formatting for scenes, errors and endings.
pub mod narrator;
/// Scene and ending definitions.
pub mod scene;
/// The interactive session loop.
pub mod session;
/// Mutable session state: hours and flags.
pub mod state;
/// The fixed story content.
pub mod story;

pub use choice::{Choice, Condition, Effect, Target};
pub use config::StoryConfig;
pub use error::{StoryError, StoryResult};
pub use narrator::{Narrator, NarratorConfig};
pub use scene::{Ending, EndingId, RenderedScene, Scene, SceneId};
pub use session::{Phase, Session, Step};
pub use state::{Flag, Flags, SessionState};
