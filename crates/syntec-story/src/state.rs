//! Session state: the hour counter, the narrative flags and the current scene.

use crate::config::StoryConfig;
use crate::scene::SceneId;

/// A one-way narrative switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// The user has asked "who am I" and heard the first answer.
    IdentityAsked,
    /// The character has stood up at least once.
    HasStood,
}

impl Flag {
    /// Every flag, in declaration order.
    pub const ALL: [Flag; 2] = [Flag::IdentityAsked, Flag::HasStood];
}

/// The pair of narrative flags.
///
/// Flags only ever go from unset to set; there is no way to clear one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    identity_asked: bool,
    has_stood: bool,
}

impl Flags {
    /// Both flags unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a flag is set.
    pub fn is_set(&self, flag: Flag) -> bool {
        match flag {
            Flag::IdentityAsked => self.identity_asked,
            Flag::HasStood => self.has_stood,
        }
    }

    /// Set a flag. Setting an already-set flag is a no-op.
    pub fn set(&mut self, flag: Flag) {
        match flag {
            Flag::IdentityAsked => self.identity_asked = true,
            Flag::HasStood => self.has_stood = true,
        }
    }

    /// Builder form of [`Flags::set`].
    pub fn with(mut self, flag: Flag) -> Self {
        self.set(flag);
        self
    }

    /// All four combinations of the two flags.
    pub fn combinations() -> [Flags; 4] {
        [
            Flags::new(),
            Flags::new().with(Flag::IdentityAsked),
            Flags::new().with(Flag::HasStood),
            Flags::new().with(Flag::IdentityAsked).with(Flag::HasStood),
        ]
    }

    /// Whether every flag set in `earlier` is still set here.
    pub fn includes(&self, earlier: &Flags) -> bool {
        Flag::ALL
            .iter()
            .all(|&flag| !earlier.is_set(flag) || self.is_set(flag))
    }
}

/// Mutable state owned by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Hours remaining. Never below zero.
    pub hours: u32,
    /// Total hours charged so far, without the zero floor.
    pub spent: u32,
    /// Narrative flags.
    pub flags: Flags,
    /// The scene the user is looking at.
    pub scene: SceneId,
}

impl SessionState {
    /// Fresh state at the entry scene.
    pub fn new(config: &StoryConfig) -> Self {
        Self {
            hours: config.starting_hours,
            spent: 0,
            flags: Flags::new(),
            scene: SceneId::ENTRY,
        }
    }

    /// Charge hours against the counter, stopping at zero.
    pub fn spend(&mut self, cost: u32) {
        self.hours = self.hours.saturating_sub(cost);
        self.spent = self.spent.saturating_add(cost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_start_unset() {
        let flags = Flags::new();
        assert!(!flags.is_set(Flag::IdentityAsked));
        assert!(!flags.is_set(Flag::HasStood));
    }

    #[test]
    fn flags_are_independent() {
        let mut flags = Flags::new();
        flags.set(Flag::HasStood);
        assert!(flags.is_set(Flag::HasStood));
        assert!(!flags.is_set(Flag::IdentityAsked));

        flags.set(Flag::HasStood);
        assert!(flags.is_set(Flag::HasStood));
    }

    #[test]
    fn includes_checks_monotonicity() {
        let before = Flags::new().with(Flag::HasStood);
        let after = before.with(Flag::IdentityAsked);
        assert!(after.includes(&before));
        assert!(!before.includes(&after));
    }

    #[test]
    fn spend_saturates_at_zero() {
        let mut state = SessionState::new(&StoryConfig::default().with_hours(2));
        state.spend(1);
        assert_eq!(state.hours, 1);
        state.spend(3);
        assert_eq!(state.hours, 0);
        assert_eq!(state.spent, 4);
    }

    #[test]
    fn new_state_is_at_entry() {
        let state = SessionState::new(&StoryConfig::default());
        assert_eq!(state.hours, 12);
        assert_eq!(state.scene, SceneId::Awaken);
        assert_eq!(state.flags, Flags::new());
    }
}
