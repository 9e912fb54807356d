//! The customer feedback survey in the terminal.
//!
//! Run with: cargo run -p questionnaire-wizard-ratatui --example feedback

use example_questionnaires::customer_feedback;
use questionnaire_wizard_ratatui::{RatatuiWizard, Theme};
use ratatui::style::Color;

fn main() -> anyhow::Result<()> {
    let theme = Theme {
        primary: Color::LightBlue,
        highlight: Color::LightMagenta,
        ..Theme::default()
    };

    let results = RatatuiWizard::new().with_theme(theme).run(customer_feedback())?;

    println!("\n=== Your answers ===");
    for line in results {
        println!("{}\n  {}", line.prompt, line.answer);
    }

    Ok(())
}
