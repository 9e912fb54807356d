//! Property tests for the survey lifecycle

use proptest::prelude::*;
use questionnaire::{
    InputEvent, Phase, QuestionDefinition, QuestionKind, RecordingSurface, ResponseKey, Screen,
    SurveyController, SurveyDefinition,
};

#[derive(Debug, Clone)]
enum Step {
    Start,
    Next,
    Previous,
    Submit,
    Restart,
    Type(String),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        1 => Just(Step::Start),
        4 => Just(Step::Next),
        2 => Just(Step::Previous),
        1 => Just(Step::Submit),
        1 => Just(Step::Restart),
        2 => "[a-z]{0,3}".prop_map(Step::Type),
    ]
}

fn survey(len: u32, required: bool) -> SurveyDefinition {
    SurveyDefinition::new(
        "Generated",
        (1..=len)
            .map(|id| {
                let question = QuestionDefinition::new(id, format!("Q{id}"), QuestionKind::text(""));
                if required { question.required() } else { question }
            })
            .collect(),
    )
}

proptest! {
    #[test]
    fn index_stays_in_bounds(
        len in 1u32..6,
        required in any::<bool>(),
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let mut controller = SurveyController::new(survey(len, required), RecordingSurface::new());

        for step in steps {
            match step {
                Step::Start => controller.start(),
                Step::Next => { let _ = controller.next(); }
                Step::Previous => controller.previous(),
                Step::Submit => { let _ = controller.submit(); }
                Step::Restart => {
                    controller.restart();
                    prop_assert_eq!(controller.phase(), Phase::Welcome);
                    prop_assert!(controller.responses().is_empty());
                    prop_assert_eq!(controller.session().current_index, 0);
                    prop_assert_eq!(controller.surface().screen, Some(Screen::Welcome));
                }
                Step::Type(text) => { let _ = controller.capture(InputEvent::Type(text)); }
            }

            if let Phase::InProgress(index) = controller.phase() {
                prop_assert!(index < len as usize);
                prop_assert_eq!(controller.session().current_index, index);
                prop_assert_eq!(
                    controller.surface().mounted.as_ref().map(|view| view.question_id),
                    Some(index as u32 + 1)
                );
            }
            if controller.phase() == Phase::Results {
                prop_assert_eq!(controller.surface().results.len(), len as usize);
            }
        }
    }

    #[test]
    fn toggle_on_then_off_restores_selection(
        before in prop::collection::vec(prop::sample::select(vec!["A", "B", "C"]), 0..4),
    ) {
        let survey = SurveyDefinition::new(
            "Toggles",
            vec![QuestionDefinition::new(1, "Pick", QuestionKind::checkbox(["A", "B", "C", "D"]))],
        );
        let mut controller = SurveyController::new(survey, RecordingSurface::new());
        controller.start();

        for value in &before {
            controller
                .capture(InputEvent::Toggle { value: value.to_string(), checked: true })
                .unwrap();
        }
        let snapshot = controller.responses().get(&ResponseKey::Question(1)).cloned();

        controller
            .capture(InputEvent::Toggle { value: "D".into(), checked: true })
            .unwrap();
        controller
            .capture(InputEvent::Toggle { value: "D".into(), checked: false })
            .unwrap();

        let after = controller
            .responses()
            .get_selections(&ResponseKey::Question(1))
            .unwrap()
            .to_vec();
        let expected: Vec<String> = before.iter().map(|value| value.to_string()).collect();
        prop_assert_eq!(after, expected);
        if let Some(snapshot) = snapshot {
            prop_assert_eq!(controller.responses().get(&ResponseKey::Question(1)), Some(&snapshot));
        }
    }

    #[test]
    fn previous_never_alerts(len in 1u32..6, presses in 0usize..10) {
        let mut controller = SurveyController::new(survey(len, true), RecordingSurface::new());
        controller.start();
        for _ in 0..presses {
            controller.previous();
        }
        prop_assert!(controller.surface().alerts.is_empty());
        prop_assert_eq!(controller.phase(), Phase::InProgress(0));
    }
}
