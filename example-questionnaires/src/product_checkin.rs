use questionnaire::{QuestionDefinition, QuestionKind, SurveyDefinition};

/// A short post-visit check-in with an emoji rating and follow-up questions.
pub fn product_checkin() -> SurveyDefinition {
    SurveyDefinition::new(
        "Product Check-in",
        vec![
            QuestionDefinition::new(
                1,
                "Did you find what you were looking for today?",
                QuestionKind::multiple_choice(["Yes", "Partially", "No"]),
            )
            .required()
            .with_follow_up("Partially", "What was missing?")
            .with_follow_up("No", "What were you looking for?"),
            QuestionDefinition::new(
                2,
                "How do you feel about your visit?",
                QuestionKind::emoji_rating(),
            )
            .required(),
            QuestionDefinition::new(
                3,
                "Which parts of the site did you use?",
                QuestionKind::checkbox(["Search", "Product Pages", "Checkout", "Help Center"]),
            ),
            QuestionDefinition::new(
                4,
                "How easy was it to find your way around?",
                QuestionKind::rating(1, 5, "Hard", "Easy"),
            )
            .required(),
            QuestionDefinition::new(
                5,
                "Anything else we should know?",
                QuestionKind::text("Optional comments..."),
            ),
        ],
    )
    .with_welcome("Five quick questions about your visit.")
}
