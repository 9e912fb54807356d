use questionnaire::{
    NavState, QuestionView, RenderSurface, ResultLine, Screen, SurveyDefinition, render_question,
};

use crate::generator::{HtmlOptions, escape_html, generate_styles, render_question_html, render_results_html};

/// Error type for HTML page generation.
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Question {index} is out of range (survey has {len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },
}

/// A [`RenderSurface`] that keeps the page state and renders it as HTML.
///
/// The page has the three screen regions `welcome-screen`, `survey-form` and
/// `results-screen`; exactly one of them is visible.
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    options: HtmlOptions,
    title: String,
    welcome: Option<String>,
    epilogue: Option<String>,
    screen: Screen,
    question: Option<QuestionView>,
    progress: f64,
    nav: NavState,
    alert: Option<String>,
    results: Vec<ResultLine>,
}

impl HtmlSurface {
    /// Create a surface for `definition`, showing its welcome screen.
    pub fn for_survey(definition: &SurveyDefinition, options: HtmlOptions) -> Self {
        let title = options
            .title
            .clone()
            .unwrap_or_else(|| definition.title.clone());

        Self {
            options,
            title,
            welcome: definition.welcome.clone(),
            epilogue: definition.epilogue.clone(),
            screen: Screen::Welcome,
            question: None,
            progress: 0.0,
            nav: NavState::default(),
            alert: None,
            results: Vec::new(),
        }
    }

    /// The visible screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The message from the last blocked navigation, cleared by the next mount.
    pub fn pending_alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Render the current state as HTML.
    pub fn to_html(&self) -> String {
        let options = &self.options;
        let prefix = &options.class_prefix;
        let mut html = String::new();

        if options.full_document {
            html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
            html.push_str("  <meta charset=\"UTF-8\">\n");
            html.push_str(
                "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
            );
            html.push_str(&format!("  <title>{}</title>\n", escape_html(&self.title)));
            if options.include_styles {
                html.push_str(&generate_styles(prefix));
            }
            html.push_str("</head>\n<body>\n");
        }

        html.push_str(&format!("<div class=\"{prefix}-container\">\n"));
        html.push_str(&self.welcome_screen(prefix));
        html.push_str(&self.survey_form(prefix));
        html.push_str(&self.results_screen(prefix));
        html.push_str("</div>\n");

        if options.full_document {
            html.push_str("</body>\n</html>\n");
        }

        html
    }

    fn hidden(&self, screen: Screen) -> &'static str {
        if self.screen == screen { "" } else { " hidden" }
    }

    fn welcome_screen(&self, prefix: &str) -> String {
        let mut html = format!(
            "<div id=\"welcome-screen\" class=\"{prefix}-screen{}\">\n",
            self.hidden(Screen::Welcome)
        );
        html.push_str(&format!(
            "  <h1 class=\"{prefix}-title\">{}</h1>\n",
            escape_html(&self.title)
        ));
        if let Some(welcome) = &self.welcome {
            html.push_str(&format!(
                "  <p class=\"{prefix}-welcome\">{}</p>\n",
                escape_html(welcome)
            ));
        }
        html.push_str(&format!(
            "  <button id=\"start-survey\" class=\"{prefix}-btn\">Start Survey</button>\n"
        ));
        html.push_str("</div>\n");
        html
    }

    fn survey_form(&self, prefix: &str) -> String {
        let mut html = format!(
            "<div id=\"survey-form\" class=\"{prefix}-screen{}\">\n",
            self.hidden(Screen::Survey)
        );
        html.push_str(&format!("  <div class=\"{prefix}-progress-bar\">\n"));
        html.push_str(&format!(
            "    <div id=\"progress-fill\" class=\"{prefix}-progress-fill\" style=\"width: {:.2}%\"></div>\n",
            self.progress
        ));
        html.push_str("  </div>\n");

        if let Some(alert) = &self.alert {
            html.push_str(&format!(
                "  <div class=\"{prefix}-alert\" role=\"alert\">{}</div>\n",
                escape_html(alert)
            ));
        }

        html.push_str("  <div id=\"questions-container\">\n");
        if let Some(view) = &self.question {
            for line in render_question_html(view, prefix).lines() {
                html.push_str(&format!("    {line}\n"));
            }
        }
        html.push_str("  </div>\n");

        let button = |id: &str, label: &str, visible: bool| {
            let hidden = if visible { "" } else { " hidden" };
            format!("    <button id=\"{id}\" class=\"{prefix}-btn{hidden}\">{label}</button>\n")
        };
        html.push_str(&format!("  <div class=\"{prefix}-navigation\">\n"));
        html.push_str(&button("prev-btn", "Previous", self.nav.previous));
        html.push_str(&button("next-btn", "Next", self.nav.next));
        html.push_str(&button("submit-btn", "Submit", self.nav.submit));
        html.push_str("  </div>\n");

        html.push_str("</div>\n");
        html
    }

    fn results_screen(&self, prefix: &str) -> String {
        let mut html = format!(
            "<div id=\"results-screen\" class=\"{prefix}-screen{}\">\n",
            self.hidden(Screen::Results)
        );
        html.push_str("  <h2>Thank you!</h2>\n");
        if let Some(epilogue) = &self.epilogue {
            html.push_str(&format!(
                "  <p class=\"{prefix}-epilogue\">{}</p>\n",
                escape_html(epilogue)
            ));
        }
        html.push_str("  <div id=\"results-summary\">\n");
        for line in render_results_html(&self.results, prefix).lines() {
            html.push_str(&format!("    {line}\n"));
        }
        html.push_str("  </div>\n");
        html.push_str(&format!(
            "  <button id=\"restart-survey\" class=\"{prefix}-btn\">Take Survey Again</button>\n"
        ));
        html.push_str("</div>\n");
        html
    }
}

impl RenderSurface for HtmlSurface {
    fn show_screen(&mut self, screen: Screen) {
        tracing::trace!(screen = screen.name(), "html screen");
        self.screen = screen;
        self.alert = None;
    }

    fn mount(&mut self, view: &QuestionView) {
        self.question = Some(view.clone());
        self.alert = None;
    }

    fn set_progress(&mut self, percent: f64) {
        self.progress = percent;
    }

    fn set_nav_state(&mut self, nav: NavState) {
        self.nav = nav;
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }

    fn show_results(&mut self, lines: &[ResultLine]) {
        self.results = lines.to_vec();
    }
}

/// Render the welcome page of `definition`.
pub fn welcome_page(definition: &SurveyDefinition, options: HtmlOptions) -> String {
    HtmlSurface::for_survey(definition, options).to_html()
}

/// Render the page showing the question at `index`, with no answers given.
pub fn question_page(
    definition: &SurveyDefinition,
    index: usize,
    options: HtmlOptions,
) -> Result<String, HtmlError> {
    let len = definition.len();
    let question = definition
        .question(index)
        .ok_or(HtmlError::QuestionOutOfRange { index, len })?;

    let mut surface = HtmlSurface::for_survey(definition, options);
    surface.show_screen(Screen::Survey);
    surface.mount(&render_question(question, &Default::default()));
    surface.set_progress(questionnaire::progress_percent(index, len));
    surface.set_nav_state(NavState::at(index, len));
    Ok(surface.to_html())
}
