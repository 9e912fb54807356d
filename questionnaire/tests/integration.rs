//! Integration tests for questionnaire

use questionnaire::{
    InputEvent, NO_ANSWER, NavState, Phase, QuestionDefinition, QuestionKind, RecordingSurface,
    ResponseKey, ResultLine, Screen, SurveyController, SurveyDefinition, ValidationError, ViewBody,
};

fn two_questions() -> SurveyDefinition {
    SurveyDefinition::new(
        "Two",
        vec![
            QuestionDefinition::new(1, "Q1", QuestionKind::multiple_choice(["A", "B"])).required(),
            QuestionDefinition::new(2, "Q2", QuestionKind::text("")),
        ],
    )
}

fn toggle(value: &str, checked: bool) -> InputEvent {
    InputEvent::Toggle {
        value: value.to_string(),
        checked,
    }
}

#[test]
fn test_two_question_scenario() {
    let mut controller = SurveyController::new(two_questions(), RecordingSurface::new());
    controller.start();

    assert_eq!(
        controller.next(),
        Err(ValidationError::MissingAnswer { question_id: 1 })
    );
    assert_eq!(controller.phase(), Phase::InProgress(0));

    controller.capture(InputEvent::Choose("A".into())).unwrap();
    controller.next().unwrap();
    assert_eq!(controller.phase(), Phase::InProgress(1));

    controller.submit().unwrap();
    assert_eq!(controller.phase(), Phase::Results);

    let surface = controller.surface();
    assert_eq!(surface.screen, Some(Screen::Results));
    assert_eq!(
        surface.results,
        vec![ResultLine::new("Q1", "A"), ResultLine::new("Q2", NO_ANSWER)]
    );
}

#[test]
fn test_checkbox_unchecking() {
    let survey = SurveyDefinition::new(
        "Checkbox",
        vec![QuestionDefinition::new(3, "Features", QuestionKind::checkbox(["X", "Y", "Z"])).required()],
    );
    let mut controller = SurveyController::new(survey, RecordingSurface::new());
    controller.start();

    controller.capture(toggle("X", true)).unwrap();
    controller.capture(toggle("Z", true)).unwrap();
    controller.capture(toggle("X", false)).unwrap();

    assert_eq!(
        controller
            .responses()
            .get_selections(&ResponseKey::Question(3))
            .unwrap(),
        ["Z"]
    );
    assert_eq!(
        controller.surface().mounted.as_ref().unwrap().selected_values(),
        ["Z"]
    );

    controller.submit().unwrap();
    assert_eq!(controller.surface().results[0].answer, "Z");
}

#[test]
fn test_empty_selection_versus_missing_answer() {
    let survey = SurveyDefinition::new(
        "Checkbox",
        vec![QuestionDefinition::new(3, "Features", QuestionKind::checkbox(["X", "Y"])).required()],
    );
    let mut controller = SurveyController::new(survey, RecordingSurface::new());
    controller.start();

    assert_eq!(
        controller.submit(),
        Err(ValidationError::MissingAnswer { question_id: 3 })
    );

    controller.capture(toggle("X", true)).unwrap();
    controller.capture(toggle("X", false)).unwrap();
    assert_eq!(
        controller.submit(),
        Err(ValidationError::EmptySelection { question_id: 3 })
    );
    assert_eq!(
        controller.surface().last_alert(),
        Some("Please select at least one option.")
    );
    assert_eq!(controller.phase(), Phase::InProgress(0));
}

#[test]
fn test_follow_up_survives_navigation_but_not_results() {
    let survey = SurveyDefinition::new(
        "Follow-up",
        vec![
            QuestionDefinition::new(1, "Heard from?", QuestionKind::multiple_choice(["Ad", "Other"]))
                .required()
                .with_follow_up("Other", "Please specify"),
            QuestionDefinition::new(2, "Anything else?", QuestionKind::text("")),
        ],
    );
    let mut controller = SurveyController::new(survey, RecordingSurface::new());
    controller.start();

    controller.capture(InputEvent::Choose("Ad".into())).unwrap();
    assert!(controller.surface().mounted.as_ref().unwrap().follow_up.is_none());

    controller.capture(InputEvent::Choose("Other".into())).unwrap();
    let follow_up = controller
        .surface()
        .mounted
        .as_ref()
        .unwrap()
        .follow_up
        .clone()
        .unwrap();
    assert_eq!(follow_up.prompt, "Please specify");
    assert_eq!(follow_up.field.key.to_string(), "1_followup");

    controller
        .capture(InputEvent::FollowUp("a friend".into()))
        .unwrap();
    controller.next().unwrap();
    controller.previous();

    let view = controller.surface().mounted.clone().unwrap();
    assert_eq!(view.selected_values(), ["Other"]);
    assert_eq!(view.follow_up.unwrap().field.value, "a friend");

    controller.next().unwrap();
    controller.submit().unwrap();
    let results = &controller.surface().results;
    assert_eq!(results.len(), 2);
    assert_eq!(results[0], ResultLine::new("Heard from?", "Other"));
    assert!(results.iter().all(|line| line.answer != "a friend"));
}

#[test]
fn test_follow_ups_are_never_required() {
    let survey = SurveyDefinition::new(
        "Follow-up",
        vec![
            QuestionDefinition::new(1, "Did it work?", QuestionKind::multiple_choice(["Yes", "No"]))
                .required()
                .with_follow_up("No", "What went wrong?"),
        ],
    );
    let mut controller = SurveyController::new(survey, RecordingSurface::new());
    controller.start();
    controller.capture(InputEvent::Choose("No".into())).unwrap();

    controller.submit().unwrap();
    assert_eq!(controller.phase(), Phase::Results);
}

#[test]
fn test_back_navigation_shows_previous_answers() {
    let survey = SurveyDefinition::new(
        "Back",
        vec![
            QuestionDefinition::new(1, "Rate", QuestionKind::rating(1, 10, "Poor", "Excellent")),
            QuestionDefinition::new(2, "Say", QuestionKind::text("Type here...")),
            QuestionDefinition::new(3, "Done?", QuestionKind::multiple_choice(["Yes"])),
        ],
    );
    let mut controller = SurveyController::new(survey, RecordingSurface::new());
    controller.start();
    controller.capture(InputEvent::Slide("8".into())).unwrap();
    controller.next().unwrap();
    controller.capture(InputEvent::Type("hello".into())).unwrap();
    controller.next().unwrap();

    controller.previous();
    let ViewBody::TextField(field) = controller.surface().mounted.clone().unwrap().body else {
        panic!("Expected text field");
    };
    assert_eq!(field.value, "hello");
    assert_eq!(field.placeholder, "Type here...");

    controller.previous();
    let ViewBody::Slider(slider) = controller.surface().mounted.clone().unwrap().body else {
        panic!("Expected slider");
    };
    assert_eq!(slider.value, 8);
    assert_eq!(slider.low_label, "Poor");
}

#[test]
fn test_navigation_controls_and_progress() {
    let survey = SurveyDefinition::new(
        "Nav",
        (1..=4)
            .map(|id| QuestionDefinition::new(id, format!("Q{id}"), QuestionKind::text("")))
            .collect(),
    );
    let mut controller = SurveyController::new(survey, RecordingSurface::new());
    controller.start();

    for index in 0..4 {
        let surface = controller.surface();
        assert_eq!(surface.nav, NavState::at(index, 4));
        assert_eq!(surface.progress, (index + 1) as f64 * 25.0);
        controller.next().unwrap();
    }

    assert_eq!(controller.phase(), Phase::InProgress(3));
    assert!(controller.surface().nav.submit);
    assert!(!controller.surface().nav.next);
}

#[test]
fn test_restart_forgets_everything() {
    let mut controller = SurveyController::new(two_questions(), RecordingSurface::new());
    controller.start();
    controller.capture(InputEvent::Choose("B".into())).unwrap();
    controller.next().unwrap();
    controller.capture(InputEvent::Type("bye".into())).unwrap();
    controller.submit().unwrap();

    controller.restart();
    assert_eq!(controller.phase(), Phase::Welcome);
    assert_eq!(controller.surface().screen, Some(Screen::Welcome));
    assert!(controller.responses().is_empty());

    controller.start();
    assert_eq!(controller.phase(), Phase::InProgress(0));
    assert!(
        controller
            .surface()
            .mounted
            .as_ref()
            .unwrap()
            .selected_values()
            .is_empty()
    );
}

#[test]
fn test_restart_mid_survey() {
    let mut controller = SurveyController::new(two_questions(), RecordingSurface::new());
    controller.start();
    controller.capture(InputEvent::Choose("A".into())).unwrap();
    controller.restart();

    assert_eq!(controller.phase(), Phase::Welcome);
    assert!(controller.responses().is_empty());
}

#[test]
fn test_unknown_question_type_renders_nothing() {
    let survey = questionnaire::config::from_json_str(
        r#"{
            "title": "Mixed",
            "questions": [
                {"id": 1, "type": "matrix", "prompt": "Grid?", "rows": ["a"]},
                {"id": 2, "type": "text", "prompt": "Say"}
            ]
        }"#,
    )
    .unwrap();
    let mut controller = SurveyController::new(survey, RecordingSurface::new());
    controller.start();

    let view = controller.surface().mounted.clone().unwrap();
    assert_eq!(view.body, ViewBody::Empty);
    assert!(view.body.options().is_empty());

    controller.next().unwrap();
    assert_eq!(controller.phase(), Phase::InProgress(1));
}

#[test]
fn test_whitespace_text_counts_as_answer() {
    let survey = SurveyDefinition::new(
        "Text",
        vec![QuestionDefinition::new(1, "Say", QuestionKind::text("")).required()],
    );
    let mut controller = SurveyController::new(survey, RecordingSurface::new());
    controller.start();

    controller.capture(InputEvent::Type(String::new())).unwrap();
    assert!(controller.submit().is_err());

    controller.capture(InputEvent::Type("  ".into())).unwrap();
    controller.submit().unwrap();
    assert_eq!(controller.surface().results[0].answer, "  ");
}
