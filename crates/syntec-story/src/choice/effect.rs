//! Effects applied when a choice is taken.

use crate::state::{Flag, Flags};

/// An effect applied to the session flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Set a flag.
    SetFlag(Flag),
}

impl Effect {
    /// Apply the effect.
    pub fn apply(&self, flags: &mut Flags) {
        match self {
            Effect::SetFlag(flag) => flags.set(*flag),
        }
    }
}
