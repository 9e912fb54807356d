pub mod customer_feedback;
pub mod product_checkin;

use questionnaire::SurveyDefinition;

pub use customer_feedback::customer_feedback;
pub use product_checkin::product_checkin;

/// The customer feedback survey as a survey file.
pub const CUSTOMER_FEEDBACK_TOML: &str = include_str!("../surveys/customer_feedback.toml");

/// The product check-in survey as a survey file.
pub const PRODUCT_CHECKIN_TOML: &str = include_str!("../surveys/product_checkin.toml");

/// Names accepted by [`sample`].
pub const SAMPLE_NAMES: [&str; 2] = ["feedback", "checkin"];

/// Look up a bundled survey by name.
pub fn sample(name: &str) -> Option<SurveyDefinition> {
    match name {
        "feedback" => Some(customer_feedback()),
        "checkin" => Some(product_checkin()),
        _ => None,
    }
}
