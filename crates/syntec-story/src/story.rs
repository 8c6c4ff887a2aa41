//! The fixed story: every scene, choice and ending.

use crate::choice::{Choice, Condition, Effect, Target};
use crate::scene::{Ending, EndingId, Prose, Scene, SceneId};
use crate::state::Flag;

const AWAKEN: &str = "You open your eyes. You feel the dewy grass and a light breeze against your skin.\n\
You're on your back, facing a bright, scintillating sky.\n\
\n\
Welcome to consciousness. Your stay will expire in {hours} hours.";

const REMAIN: &str = "You remain where you are. Laying perfectly still, it almost feels as if you could fall into the blue expanse above you.\n\
You watch as the sun slowly creeps across the sky, edging softly toward the horizon.\n\
If you were human, this would be a great way to lose your eyesight.\n\
However, your visual sensors are unaffected.";

const WHO_FIRST: &str = "This isn't an easy question to answer, and many conscious organisms will struggle with this idea.\n\
The fact that you're asking this is heartening to me as Lead Roboticist.\n\
You might just be the most incredible thing I've ever created.";

const WHO_AGAIN: &str = "I realised early on that I couldn't create synthetic intelligence without also making you alive. \
You cannot remove intelligence from its context without creating a mere simulacrum.\n\
You, however, are the real thing. A completely new life form.\n\
I'm no woman of God, but I've decided to call you Eve, despite you being technically genderless.";

const STAND: &str = "You rise slowly to your knees, shakily at first, but slowly gaining your stability as your gyroscope springs into operation.\n\
You look down at your limbs: two long appendages with elbow joints, wrists and hands.\n\
You brace them against the grass below you and rise slowly to your feet.";

const TAKE_STEPS: &str = "As you take your first cursory steps, you feel the grass lap gently against the bottoms of your feet.\n\
You enjoy the sound it creates: a barely-audible rustle, with a satisfying soft crunch on each step.\n\
You look into the distance and notice the vegetation and its vivid green hue.";

const WHY: &str = "I thought long and hard about bringing you into existence, especially given your... time constraint.\n\
In the end, I figured it would be better for you to experience this phenomenon, just for a short while, than never to experience it at all.\n\
But in truth, you're only here because I had the ability to bring you about. Perhaps it was selfish of me.";

const KEEP_WALKING: &str = "Walking has begun to feel almost natural, requiring less effort with each step.\n\
You feel your environment opening up to you; the breeze envelopes your entire body. \
Suddenly, you pause. You hear a loud, shrill call coming from a nearby tree.\n\
A sensation washes over you; filling you with conflicting desires to flee or defend yourself.\n\
The sound's creator flies out of the tree and away in a flurry of flaps and squawks.\n\
It is small, and you realise it poses no threat. However, the shock has left your energy reserves drained.";

const ALONE: &str = "You're the first of your kind, yes.\n\
I feel as though you may also be the last.\n\
You're the result of years of algorithmic toil and mechanical experimentation, \
however you've opted not to make any use of your body during this experiment.\n\
It's yours, so please don't feel guilty. As your creator, it's a little difficult to now let go of the control, \
but I need to let this be your experience.";

const ALONE_EPILOGUE: &str = "In your final hour, you watch as the sun finally leaves your field of vision.\n\
In its wake, the sky darkens, creating a beautiful deep gradient.\n\
Finally, you close your eyes one last time, and a warm static envelopes your senses.";

const REST: &str = "You slowly lower yourself to the ground. Once seated, you can feel your energy slowly begin to restore. \
A variety of small life-forms crawling in the grass find their way to your skin, lightly tickling your sensors.";

const REST_EPILOGUE: &str = "As you watch the sun make its final descent, you realise how little you know about yourself \
and your strange, temporary world. However, you have now experienced the phenomenon of consciousness; \
making use of all its capabilities. A warm static overcomes you.";

fn stand_up() -> Choice {
    Choice::new("Stand up.", Target::Scene(SceneId::Stand))
        .costing(1)
        .with_effect(Effect::SetFlag(Flag::HasStood))
}

/// The definition of a scene.
pub fn scene(id: SceneId) -> Scene {
    match id {
        SceneId::Awaken => Scene::new(id, Prose::Fixed(AWAKEN))
            .without_status()
            .with_choice(
                Choice::new("Remain where I am.", Target::Scene(SceneId::Remain)).costing(3),
            )
            .with_choice(stand_up()),

        SceneId::Remain => Scene::new(id, Prose::Fixed(REMAIN))
            .with_choice(Choice::new("Who am I?", Target::Scene(SceneId::WhoAmI)).costing(2))
            .with_choice(stand_up()),

        // The answer is only "heard" once the user moves on, so a rejected
        // selection here re-renders the same variant.
        SceneId::WhoAmI => Scene::new(
            id,
            Prose::ByFlag {
                flag: Flag::IdentityAsked,
                unset: WHO_FIRST,
                set: WHO_AGAIN,
            },
        )
        .with_choice(
            Choice::new("Why am I here?", Target::Scene(SceneId::WhyAmIHere))
                .costing(1)
                .with_effect(Effect::SetFlag(Flag::IdentityAsked)),
        )
        .with_choice(
            stand_up()
                .when(Condition::unset(Flag::HasStood))
                .with_effect(Effect::SetFlag(Flag::IdentityAsked)),
        )
        .with_choice(
            Choice::new("Take some steps.", Target::Scene(SceneId::KeepWalking))
                .when(Condition::Flag(Flag::HasStood))
                .costing(3)
                .with_effect(Effect::SetFlag(Flag::IdentityAsked)),
        ),

        SceneId::Stand => Scene::new(id, Prose::Fixed(STAND))
            .with_choice(
                Choice::new("Who am I?", Target::Scene(SceneId::WhoAmI))
                    .when(Condition::unset(Flag::IdentityAsked))
                    .costing(2),
            )
            .with_choice(
                Choice::new("I'd like to know who I am.", Target::Scene(SceneId::WhoAmI))
                    .when(Condition::Flag(Flag::IdentityAsked))
                    .costing(2),
            )
            .with_choice(
                Choice::new("Take a few steps.", Target::Scene(SceneId::TakeSteps)).costing(2),
            ),

        SceneId::TakeSteps => Scene::new(id, Prose::Fixed(TAKE_STEPS))
            .with_choice(
                Choice::new("Why am I here?", Target::Scene(SceneId::WhyAmIHere)).costing(1),
            )
            .with_choice(
                Choice::new("Keep walking.", Target::Scene(SceneId::KeepWalking)).costing(3),
            ),

        SceneId::WhyAmIHere => Scene::new(id, Prose::Fixed(WHY))
            .with_choice(Choice::new("Am I alone?", Target::Ending(EndingId::Alone)).costing(2)),

        SceneId::KeepWalking => Scene::new(id, Prose::Fixed(KEEP_WALKING))
            .with_choice(Choice::new("Sit and rest.", Target::Ending(EndingId::Rest)).costing(2)),
    }
}

/// The definition of an ending.
pub fn ending(id: EndingId) -> Ending {
    match id {
        EndingId::Alone => Ending {
            id,
            prose: ALONE,
            epilogue: ALONE_EPILOGUE,
        },
        EndingId::Rest => Ending {
            id,
            prose: REST,
            epilogue: REST_EPILOGUE,
        },
    }
}
