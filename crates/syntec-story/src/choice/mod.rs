//! Choices: labeled, costed edges between scenes.
//!
//! A choice is offered only while its condition holds. Scenes list their
//! choices in menu order and the menu numbers the offered ones from 1, so a
//! label that changes with a flag is written as two choices with opposite
//! conditions.

mod condition;
mod effect;

pub use condition::Condition;
pub use effect::Effect;

use crate::scene::{EndingId, SceneId};
use crate::state::Flags;

/// Where a choice leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Another scene.
    Scene(SceneId),
    /// A terminal ending.
    Ending(EndingId),
}

/// A single menu choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// The text shown after the menu number.
    pub label: &'static str,
    /// Condition that must hold for the choice to be offered.
    pub condition: Condition,
    /// Hours consumed by taking this choice.
    pub cost: u32,
    /// Effects applied when the choice is taken.
    pub effects: Vec<Effect>,
    /// The successor.
    pub target: Target,
}

impl Choice {
    /// Create an unconditional, free choice leading to `target`.
    pub fn new(label: &'static str, target: Target) -> Self {
        Self {
            label,
            condition: Condition::Always,
            cost: 0,
            effects: Vec::new(),
            target,
        }
    }

    /// Set the condition.
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    /// Set the hour cost.
    pub fn costing(mut self, hours: u32) -> Self {
        self.cost = hours;
        self
    }

    /// Add an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Whether the choice is on the menu under these flags.
    pub fn is_offered(&self, flags: &Flags) -> bool {
        self.condition.evaluate(flags)
    }

    /// Apply every effect to the flags.
    pub fn apply_effects(&self, flags: &mut Flags) {
        for effect in &self.effects {
            effect.apply(flags);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Flag;

    #[test]
    fn choice_builder() {
        let choice = Choice::new("Stand up.", Target::Scene(SceneId::Stand))
            .costing(1)
            .when(Condition::unset(Flag::HasStood))
            .with_effect(Effect::SetFlag(Flag::HasStood));

        assert_eq!(choice.label, "Stand up.");
        assert_eq!(choice.cost, 1);
        assert_eq!(choice.effects.len(), 1);
        assert_eq!(choice.target, Target::Scene(SceneId::Stand));
    }

    #[test]
    fn effects_set_flags() {
        let choice = Choice::new("Why am I here?", Target::Scene(SceneId::WhyAmIHere))
            .with_effect(Effect::SetFlag(Flag::IdentityAsked))
            .with_effect(Effect::SetFlag(Flag::HasStood));

        let mut flags = Flags::new();
        choice.apply_effects(&mut flags);
        assert!(flags.is_set(Flag::IdentityAsked));
        assert!(flags.is_set(Flag::HasStood));
    }

    #[test]
    fn offered_follows_condition() {
        let choice = Choice::new("Take some steps.", Target::Scene(SceneId::KeepWalking))
            .when(Condition::Flag(Flag::HasStood));
        assert!(!choice.is_offered(&Flags::new()));
        assert!(choice.is_offered(&Flags::new().with(Flag::HasStood)));
    }
}
