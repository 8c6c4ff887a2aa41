//! Full playthroughs driven through `Session::play` with scripted input.

use std::io::Cursor;

use syntec_story::narrator::DIVIDER;
use syntec_story::{
    EndingId, Flag, Narrator, NarratorConfig, SceneId, Session, StoryConfig, StoryError,
};

const DIAGNOSTIC: &str = "REMOTE LINK ERROR: USER INPUT INVALID. TRY AGAIN.";

struct Run {
    session: Session,
    result: Result<EndingId, StoryError>,
    output: String,
}

fn play(input: &str) -> Run {
    play_with(StoryConfig::default(), input)
}

fn play_with(config: StoryConfig, input: &str) -> Run {
    play_bytes(config, input.as_bytes())
}

fn play_bytes(config: StoryConfig, input: &[u8]) -> Run {
    let mut session = Session::new(config);
    let mut narrator = Narrator::new(Vec::new(), NarratorConfig::plain());
    let mut reader = Cursor::new(input.to_vec());
    let result = session.play(&mut reader, &mut narrator);
    let output = String::from_utf8(narrator.into_inner()).unwrap();
    Run {
        session,
        result,
        output,
    }
}

#[test]
fn lying_path_ends_alone() {
    let run = play("1\n1\n1\n1\n");

    assert_eq!(run.result.unwrap(), EndingId::Alone);
    assert_eq!(run.session.state().hours, 12 - 3 - 2 - 1 - 2);
    assert!(run.output.contains("9 hours now remain."));
    assert!(run.output.contains("7 hours now remain."));
    assert!(run.output.contains("6 hours now remain."));
    assert!(run.output.contains("You're the first of your kind, yes."));
    assert!(run.output.trim_end().ends_with("THE END."));
    assert!(!run.output.contains(DIAGNOSTIC));
}

#[test]
fn walking_path_ends_resting() {
    let run = play("2\n2\n2\n1\n");

    assert_eq!(run.result.unwrap(), EndingId::Rest);
    assert_eq!(run.session.state().hours, 12 - 1 - 2 - 3 - 2);
    assert!(run.session.state().flags.is_set(Flag::HasStood));
    assert!(!run.session.state().flags.is_set(Flag::IdentityAsked));
    assert!(run.output.contains("11 hours now remain."));
    assert!(run.output.contains("9 hours now remain."));
    assert!(run.output.contains("6 hours now remain."));
    assert!(run.output.contains("A warm static overcomes you."));
}

#[test]
fn invalid_input_rerenders_the_same_scene() {
    let run = play("2\n9\n1\n1\n1\n");

    assert_eq!(run.result.unwrap(), EndingId::Alone);
    assert_eq!(run.output.matches(DIAGNOSTIC).count(), 1);

    // The stand scene is shown once before and once after the diagnostic,
    // with identical text and menu.
    let stand_menu = "11 hours now remain.\n\nWhat next?\n1. Who am I?\n2. Take a few steps.\n";
    assert_eq!(run.output.matches(stand_menu).count(), 2);

    let (before, after) = run.output.split_once(DIAGNOSTIC).unwrap();
    let rendered_before = &before[before.rfind(DIVIDER).unwrap()..];
    let after = after.trim_start();
    let end = DIVIDER.len() + after[DIVIDER.len()..].find(DIVIDER).unwrap();
    let rendered_after = &after[..end];
    assert_eq!(rendered_before.trim(), rendered_after.trim());

    // Nothing was charged for the rejected input.
    assert_eq!(run.session.state().hours, 12 - 1 - 2 - 1 - 2);
}

#[test]
fn non_numeric_input_is_rejected() {
    let run = play("stand\n\n1\n2\n1\n1\n1\n");
    assert_eq!(run.output.matches(DIAGNOSTIC).count(), 2);
    // awaken -> remain -> stand -> who -> why -> alone
    assert_eq!(run.result.unwrap(), EndingId::Alone);
}

#[test]
fn undecodable_line_is_an_invalid_choice() {
    let run = play_bytes(StoryConfig::default(), b"\xff\xfe\n1\n1\n1\n1\n");

    assert_eq!(run.output.matches(DIAGNOSTIC).count(), 1);
    assert_eq!(run.result.unwrap(), EndingId::Alone);
    assert_eq!(run.session.state().hours, 4);
}

#[test]
fn long_path_floors_hours_at_zero() {
    // remain, who, stand, who again, take some steps, rest
    let run = play("1\n1\n2\n1\n2\n1\n");

    assert_eq!(run.result.unwrap(), EndingId::Rest);
    assert_eq!(run.session.state().hours, 0);
    assert_eq!(run.session.state().spent, 13);
    assert!(run.output.contains("call you Eve"));
    assert!(run.output.contains("1 hours now remain."));
    assert!(!run.output.contains("-1 hours"));
}

#[test]
fn closed_input_is_reported() {
    let run = play("1\n");
    assert!(matches!(run.result, Err(StoryError::InputClosed)));
    assert_eq!(run.session.state().scene, SceneId::Remain);
    assert!(!run.session.is_over());
}

#[test]
fn nothing_is_prompted_after_an_ending() {
    let run = play("2\n2\n2\n1\n1\n1\n");
    assert_eq!(run.result.unwrap(), EndingId::Rest);
    let after_end = run.output.rsplit("THE END.").next().unwrap();
    assert!(after_end.trim().is_empty());
    assert!(!run.output.rsplit("EPILOGUE:").next().unwrap().contains("What next?"));
}

#[test]
fn starting_hours_are_configurable() {
    let run = play_with(StoryConfig::default().with_hours(20), "2\n2\n2\n1\n");
    assert!(run.output.contains("Your stay will expire in 20 hours."));
    assert_eq!(run.session.state().hours, 12);
}

#[test]
fn play_after_ending_returns_the_ending() {
    let mut run = play("1\n1\n1\n1\n");
    let mut narrator = Narrator::new(Vec::new(), NarratorConfig::plain());
    let again = run
        .session
        .play(&mut Cursor::new(Vec::new()), &mut narrator)
        .unwrap();
    assert_eq!(again, EndingId::Alone);
    assert!(narrator.into_inner().is_empty());
}
