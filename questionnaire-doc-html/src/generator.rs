//! HTML markup for survey screens.

use questionnaire::{
    FollowUpView, OptionView, QuestionView, ResultLine, SliderView, TextFieldView, ViewBody,
};

/// Options for HTML generation.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Title for the HTML document. Falls back to the survey title.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "survey".to_string(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the screens.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    ///
    /// Only ASCII letters, digits, `-` and `_` are kept, since the prefix is written into
    /// class attributes and selectors unescaped.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix
            .into()
            .chars()
            .filter(|c| is_class_char(*c))
            .collect();
        self
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `c` may appear in a class prefix.
pub fn is_class_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Generate the markup of one question: prompt, required marker, controls and follow-up.
pub fn render_question_html(view: &QuestionView, prefix: &str) -> String {
    let id = view.question_id;
    let mut html = String::new();

    html.push_str(&format!("<div class=\"{prefix}-question\" data-question=\"{id}\">\n"));
    html.push_str(&format!("  <h3>{}</h3>\n", escape_html(&view.prompt)));
    if view.required {
        html.push_str(&format!(
            "  <p class=\"{prefix}-required\"><em>* Required</em></p>\n"
        ));
    }

    html.push_str(&format!("  <div class=\"{prefix}-options\">\n"));
    match &view.body {
        ViewBody::Choices(options) => {
            html.push_str(&options_html(options, id, "radio", &format!("{prefix}-option")))
        }
        ViewBody::Toggles(options) => {
            html.push_str(&options_html(options, id, "checkbox", &format!("{prefix}-option")))
        }
        ViewBody::Emoji(options) => html.push_str(&options_html(
            options,
            id,
            "radio",
            &format!("{prefix}-option {prefix}-emoji-option"),
        )),
        ViewBody::Slider(slider) => html.push_str(&slider_html(slider, id, prefix)),
        ViewBody::TextField(field) => {
            html.push_str(&format!("    <div class=\"{prefix}-option\">\n"));
            html.push_str(&text_input_html(field, id, prefix, "      "));
            html.push_str("    </div>\n");
        }
        ViewBody::Empty => {}
    }
    html.push_str("  </div>\n");

    if let Some(follow_up) = &view.follow_up {
        html.push_str(&follow_up_html(follow_up, id, prefix));
    }

    html.push_str("</div>\n");
    html
}

/// Generate the results summary, one item per line.
pub fn render_results_html(lines: &[ResultLine], prefix: &str) -> String {
    let mut html = String::new();
    for line in lines {
        html.push_str(&format!("<div class=\"{prefix}-result-item\">\n"));
        html.push_str(&format!(
            "  <div class=\"{prefix}-result-question\">{}</div>\n",
            escape_html(&line.prompt)
        ));
        html.push_str(&format!(
            "  <div class=\"{prefix}-result-answer\">{}</div>\n",
            escape_html(&line.answer)
        ));
        html.push_str("</div>\n");
    }
    html
}

/// Radio buttons or checkboxes wrapped in labels.
fn options_html(options: &[OptionView], id: u32, input_type: &str, class: &str) -> String {
    let mut html = String::new();
    for option in options {
        let (selected, checked) = if option.selected {
            (" selected", " checked")
        } else {
            ("", "")
        };
        html.push_str(&format!(
            "    <label class=\"{class}{selected}\">\n"
        ));
        html.push_str(&format!(
            "      <input type=\"{input_type}\" name=\"q{id}\" value=\"{}\"{checked}>\n",
            escape_html(&option.value)
        ));
        html.push_str(&format!("      {}\n", escape_html(&option.label)));
        html.push_str("    </label>\n");
    }
    html
}

fn slider_html(slider: &SliderView, id: u32, prefix: &str) -> String {
    let SliderView {
        min,
        max,
        value,
        low_label,
        high_label,
    } = slider;

    let mut html = String::new();
    html.push_str(&format!("    <div class=\"{prefix}-option\">\n"));
    html.push_str(&format!(
        "      <input type=\"range\" min=\"{min}\" max=\"{max}\" value=\"{value}\" class=\"{prefix}-rating-slider\" data-question=\"{id}\">\n"
    ));
    html.push_str(&format!("      <div class=\"{prefix}-range-labels\">\n"));
    html.push_str(&format!("        <span>{}</span>\n", escape_html(low_label)));
    html.push_str(&format!("        <span>{}</span>\n", escape_html(high_label)));
    html.push_str("      </div>\n");
    html.push_str(&format!(
        "      <div class=\"{prefix}-rating-value\">{value}</div>\n"
    ));
    html.push_str("    </div>\n");
    html
}

fn text_input_html(field: &TextFieldView, id: u32, prefix: &str, ind: &str) -> String {
    let key = field.key;
    format!(
        "{ind}<input type=\"text\" id=\"{key}\" name=\"{key}\" placeholder=\"{}\" value=\"{}\" class=\"{prefix}-text-input\" data-question=\"{id}\">\n",
        escape_html(&field.placeholder),
        escape_html(&field.value)
    )
}

fn follow_up_html(follow_up: &FollowUpView, id: u32, prefix: &str) -> String {
    let mut html = String::new();
    html.push_str(&format!("  <div class=\"{prefix}-follow-up\">\n"));
    html.push_str(&format!(
        "    <label for=\"{}\">{}</label>\n",
        follow_up.field.key,
        escape_html(&follow_up.prompt)
    ));
    html.push_str(&text_input_html(&follow_up.field, id, prefix, "    "));
    html.push_str("  </div>\n");
    html
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
pub(crate) fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-container {{
      max-width: 640px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .hidden {{
      display: none;
    }}
    .{prefix}-welcome, .{prefix}-epilogue {{
      margin: 1rem 0;
      white-space: pre-wrap;
    }}
    .{prefix}-progress-bar {{
      height: 8px;
      background: #e0e0e0;
      border-radius: 4px;
      overflow: hidden;
    }}
    .{prefix}-progress-fill {{
      height: 100%;
      background: #667eea;
      transition: width 0.3s ease;
    }}
    .{prefix}-option {{
      display: block;
      margin: 0.5rem 0;
      padding: 0.75rem;
      border: 2px solid #e0e0e0;
      border-radius: 6px;
      cursor: pointer;
    }}
    .{prefix}-option.selected {{
      border-color: #667eea;
      background: #f0f2ff;
    }}
    .{prefix}-emoji-option {{
      display: inline-block;
      font-size: 2rem;
      margin: 0 0.5rem;
      cursor: pointer;
    }}
    .{prefix}-emoji-option.selected {{
      transform: scale(1.25);
    }}
    .{prefix}-rating-slider, .{prefix}-text-input {{
      width: 100%;
      box-sizing: border-box;
    }}
    .{prefix}-text-input {{
      padding: 0.5rem;
    }}
    .{prefix}-range-labels {{
      display: flex;
      justify-content: space-between;
      font-size: 0.875rem;
      color: #666;
    }}
    .{prefix}-rating-value {{
      text-align: center;
      margin-top: 10px;
      font-weight: 600;
      color: #667eea;
    }}
    .{prefix}-follow-up {{
      margin: 1rem 0 0 1.5rem;
      padding-left: 0.5rem;
      border-left: 2px solid #ccc;
    }}
    .{prefix}-alert {{
      margin: 1rem 0;
      padding: 0.5rem;
      background: #fff3cd;
      border: 1px solid #ffe08a;
    }}
    .{prefix}-navigation {{
      display: flex;
      justify-content: space-between;
      margin-top: 1rem;
    }}
    .{prefix}-btn {{
      padding: 0.5rem 1rem;
    }}
    .{prefix}-result-item {{
      margin: 0.75rem 0;
      padding-bottom: 0.5rem;
      border-bottom: 1px solid #eee;
    }}
    .{prefix}-result-question {{
      font-weight: 600;
    }}
  </style>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire::ResponseKey;

    fn view(body: ViewBody) -> QuestionView {
        QuestionView {
            question_id: 7,
            prompt: "Pick <one>".to_string(),
            required: true,
            body,
            follow_up: None,
        }
    }

    fn option(value: &str, selected: bool) -> OptionView {
        OptionView {
            value: value.to_string(),
            label: value.to_string(),
            selected,
        }
    }

    #[test]
    fn html_options_chaining() {
        let options = HtmlOptions::new()
            .with_title("Test Survey")
            .with_styles(false)
            .full_document(true)
            .with_class_prefix("my-form");

        assert_eq!(options.title, Some("Test Survey".to_string()));
        assert!(!options.include_styles);
        assert!(options.full_document);
        assert_eq!(options.class_prefix, "my-form");
    }

    #[test]
    fn default_matches_new() {
        let options = HtmlOptions::default();
        assert_eq!(options.class_prefix, "survey");
        assert!(options.include_styles);
        assert!(options.full_document);
        assert_eq!(options.title, None);
    }

    #[test]
    fn class_prefix_drops_markup() {
        let options = HtmlOptions::new().with_class_prefix("x\" onclick=\"alert(1)\" <b>");
        assert_eq!(options.class_prefix, "xonclickalert1b");
        assert!(is_class_char('_'));
        assert!(!is_class_char('.'));
    }

    #[test]
    fn choices_mark_selected() {
        let html = render_question_html(
            &view(ViewBody::Choices(vec![option("A", false), option("B", true)])),
            "survey",
        );

        assert!(html.contains("<h3>Pick &lt;one&gt;</h3>"));
        assert!(html.contains("* Required"));
        assert!(html.contains("<label class=\"survey-option selected\">"));
        assert!(html.contains("type=\"radio\" name=\"q7\" value=\"B\" checked"));
        assert!(html.contains("type=\"radio\" name=\"q7\" value=\"A\">"));
    }

    #[test]
    fn toggles_are_checkboxes() {
        let html = render_question_html(
            &view(ViewBody::Toggles(vec![option("X", true), option("Y", false)])),
            "survey",
        );
        assert_eq!(html.matches("type=\"checkbox\"").count(), 2);
        assert_eq!(html.matches(" checked").count(), 1);
    }

    #[test]
    fn slider_with_labels_and_readout() {
        let html = render_question_html(
            &view(ViewBody::Slider(SliderView {
                min: 1,
                max: 10,
                value: 6,
                low_label: "Poor".to_string(),
                high_label: "Excellent".to_string(),
            })),
            "survey",
        );

        assert!(html.contains("type=\"range\" min=\"1\" max=\"10\" value=\"6\""));
        assert!(html.contains("<span>Poor</span>"));
        assert!(html.contains("<span>Excellent</span>"));
        assert!(html.contains("<div class=\"survey-rating-value\">6</div>"));
    }

    #[test]
    fn text_field_prefilled_and_escaped() {
        let html = render_question_html(
            &view(ViewBody::TextField(TextFieldView {
                key: ResponseKey::Question(7),
                placeholder: "Say \"hi\"".to_string(),
                value: "a & b".to_string(),
            })),
            "survey",
        );
        assert!(html.contains("placeholder=\"Say &quot;hi&quot;\""));
        assert!(html.contains("value=\"a &amp; b\""));
    }

    #[test]
    fn empty_body_has_no_inputs() {
        let mut question = view(ViewBody::Empty);
        question.required = false;
        let html = render_question_html(&question, "survey");
        assert!(!html.contains("<input"));
        assert!(!html.contains("* Required"));
    }

    #[test]
    fn follow_up_field() {
        let mut question = view(ViewBody::Choices(vec![option("Other", true)]));
        question.follow_up = Some(FollowUpView {
            prompt: "Which?".to_string(),
            field: TextFieldView {
                key: ResponseKey::FollowUp(7),
                placeholder: String::new(),
                value: "radio".to_string(),
            },
        });

        let html = render_question_html(&question, "survey");
        assert!(html.contains("<label for=\"7_followup\">Which?</label>"));
        assert!(html.contains("name=\"7_followup\""));
        assert!(html.contains("value=\"radio\""));
    }

    #[test]
    fn results_are_escaped() {
        let html = render_results_html(&[ResultLine::new("Q & A", "<b>")], "survey");
        assert!(html.contains("Q &amp; A"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn escape_all_specials() {
        assert_eq!(escape_html("<a href='x'>&\"</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&quot;&lt;/a&gt;");
    }
}
