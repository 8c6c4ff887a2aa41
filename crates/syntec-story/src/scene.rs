//! Scenes, endings and their rendered form.

use std::fmt;

use crate::choice::Choice;
use crate::state::{Flag, Flags};
use crate::story;

/// Placeholder replaced by the current hour counter when prose is rendered.
pub const HOURS_PLACEHOLDER: &str = "{hours}";

/// Identifier of a non-terminal scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    /// Waking on the grass. The entry scene.
    Awaken,
    /// Lying still and watching the sky.
    Remain,
    /// Asking who the character is.
    WhoAmI,
    /// Rising to stand.
    Stand,
    /// The first steps through the grass.
    TakeSteps,
    /// Asking why the character exists.
    WhyAmIHere,
    /// Walking on until a bird startles the character.
    KeepWalking,
}

impl SceneId {
    /// The scene every session starts at.
    pub const ENTRY: SceneId = SceneId::Awaken;

    /// Every scene, entry first.
    pub const ALL: [SceneId; 7] = [
        SceneId::Awaken,
        SceneId::Remain,
        SceneId::WhoAmI,
        SceneId::Stand,
        SceneId::TakeSteps,
        SceneId::WhyAmIHere,
        SceneId::KeepWalking,
    ];

    /// Look up the scene definition.
    pub fn scene(self) -> Scene {
        story::scene(self)
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SceneId::Awaken => "awaken",
            SceneId::Remain => "remain",
            SceneId::WhoAmI => "who-am-i",
            SceneId::Stand => "stand",
            SceneId::TakeSteps => "take-steps",
            SceneId::WhyAmIHere => "why-am-i-here",
            SceneId::KeepWalking => "keep-walking",
        };
        f.write_str(name)
    }
}

/// Identifier of a terminal ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndingId {
    /// The character learns it is the first and last of its kind.
    Alone,
    /// The character sits and rests as the sun sets.
    Rest,
}

impl EndingId {
    /// Every ending.
    pub const ALL: [EndingId; 2] = [EndingId::Alone, EndingId::Rest];

    /// Look up the ending definition.
    pub fn ending(self) -> Ending {
        story::ending(self)
    }
}

impl fmt::Display for EndingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndingId::Alone => f.write_str("alone"),
            EndingId::Rest => f.write_str("rest"),
        }
    }
}

/// Scene prose, possibly with a variant selected by a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prose {
    /// The same text every time.
    Fixed(&'static str),
    /// One body while the flag is unset, another once it is set.
    ByFlag {
        /// The flag that selects the body.
        flag: Flag,
        /// Text while the flag is unset.
        unset: &'static str,
        /// Text once the flag is set.
        set: &'static str,
    },
}

impl Prose {
    /// Select the body for these flags and fill in the hour counter.
    pub fn render(&self, flags: &Flags, hours: u32) -> String {
        let body = match *self {
            Prose::Fixed(text) => text,
            Prose::ByFlag { flag, unset, set } => {
                if flags.is_set(flag) {
                    set
                } else {
                    unset
                }
            }
        };
        body.replace(HOURS_PLACEHOLDER, &hours.to_string())
    }
}

/// A node in the narrative graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// Which scene this is.
    pub id: SceneId,
    /// The prose shown on arrival.
    pub prose: Prose,
    /// Whether a "hours now remain" line follows the prose.
    pub shows_hours: bool,
    /// All choices in menu order, offered or not.
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Create a scene with no choices that shows the hour status line.
    pub fn new(id: SceneId, prose: Prose) -> Self {
        Self {
            id,
            prose,
            shows_hours: true,
            choices: Vec::new(),
        }
    }

    /// Omit the hour status line (the prose mentions the hours itself).
    pub fn without_status(mut self) -> Self {
        self.shows_hours = false;
        self
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// The choices offered under these flags, in menu order.
    pub fn offered<'a>(&'a self, flags: &'a Flags) -> impl Iterator<Item = &'a Choice> + 'a {
        self.choices.iter().filter(move |c| c.is_offered(flags))
    }

    /// Resolve a 1-based menu selection to a choice.
    pub fn resolve(&self, selection: usize, flags: &Flags) -> Option<&Choice> {
        let index = selection.checked_sub(1)?;
        self.choices.iter().filter(|c| c.is_offered(flags)).nth(index)
    }

    /// Render prose, status line and menu for the current state.
    pub fn render(&self, flags: &Flags, hours: u32) -> RenderedScene {
        let menu = self
            .offered(flags)
            .enumerate()
            .map(|(i, choice)| MenuEntry {
                number: i + 1,
                label: choice.label,
            })
            .collect();

        RenderedScene {
            id: self.id,
            text: self.prose.render(flags, hours),
            hours: self.shows_hours.then_some(hours),
            menu,
        }
    }
}

/// One numbered line of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    /// The number the user types.
    pub number: usize,
    /// The label text.
    pub label: &'static str,
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number, self.label)
    }
}

/// A scene rendered for a particular state, ready for the narrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedScene {
    /// Which scene was rendered.
    pub id: SceneId,
    /// The prose with placeholders filled in.
    pub text: String,
    /// Hours to report on the status line, if the scene has one.
    pub hours: Option<u32>,
    /// The numbered menu.
    pub menu: Vec<MenuEntry>,
}

/// A terminal node: closing prose and an epilogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ending {
    /// Which ending this is.
    pub id: EndingId,
    /// The last words before the epilogue.
    pub prose: &'static str,
    /// The epilogue text.
    pub epilogue: &'static str,
}
