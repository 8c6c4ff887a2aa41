//! Conditions that decide whether a choice is offered.

use crate::state::{Flag, Flags};

/// A condition evaluated against the session flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Condition {
    /// Holds when the flag is set.
    Flag(Flag),
    /// Logical NOT.
    Not(Box<Condition>),
    /// Always true.
    #[default]
    Always,
}

impl Condition {
    /// Holds when the flag is not set.
    pub fn unset(flag: Flag) -> Self {
        Condition::Not(Box::new(Condition::Flag(flag)))
    }

    /// Evaluate the condition against the current flags.
    pub fn evaluate(&self, flags: &Flags) -> bool {
        match self {
            Condition::Flag(flag) => flags.is_set(*flag),
            Condition::Not(inner) => !inner.evaluate(flags),
            Condition::Always => true,
        }
    }
}
