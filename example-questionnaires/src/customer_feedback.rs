use questionnaire::{QuestionDefinition, QuestionKind, SurveyDefinition};

/// The customer feedback survey: seven questions covering every slider and choice control.
pub fn customer_feedback() -> SurveyDefinition {
    SurveyDefinition::new(
        "Customer Feedback Survey",
        vec![
            QuestionDefinition::new(
                1,
                "How did you hear about us?",
                QuestionKind::multiple_choice([
                    "Social Media",
                    "Friend Recommendation",
                    "Online Advertisement",
                    "Search Engine",
                    "Other",
                ]),
            )
            .required(),
            QuestionDefinition::new(
                2,
                "How would you rate your overall experience?",
                QuestionKind::rating(1, 10, "Poor", "Excellent"),
            )
            .required(),
            QuestionDefinition::new(
                3,
                "Which features do you find most valuable? (Select all that apply)",
                QuestionKind::checkbox([
                    "User Interface",
                    "Performance",
                    "Customer Support",
                    "Documentation",
                    "Pricing",
                    "Integration Options",
                ]),
            )
            .required(),
            QuestionDefinition::new(
                4,
                "What improvements would you like to see?",
                QuestionKind::text("Please share your suggestions..."),
            ),
            QuestionDefinition::new(
                5,
                "How likely are you to recommend us to others?",
                QuestionKind::multiple_choice([
                    "Very Likely",
                    "Likely",
                    "Neutral",
                    "Unlikely",
                    "Very Unlikely",
                ]),
            )
            .required(),
            QuestionDefinition::new(
                6,
                "Rate the quality of our customer service",
                QuestionKind::rating(1, 5, "Poor", "Excellent"),
            )
            .required(),
            QuestionDefinition::new(
                7,
                "Any additional comments or feedback?",
                QuestionKind::text("Your feedback helps us improve..."),
            ),
        ],
    )
    .with_welcome("We value your opinion! This short survey takes about 2 minutes.")
    .with_epilogue("Thank you for taking the time to share your feedback. Here is a summary of your answers:")
}
