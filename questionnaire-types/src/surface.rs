use crate::QuestionView;

/// The three mutually exclusive screens of a survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Welcome,
    Survey,
    Results,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Survey => "survey",
            Self::Results => "results",
        }
    }
}

/// Visibility of the navigation controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub previous: bool,
    pub next: bool,
    pub submit: bool,
}

impl NavState {
    /// Controls for the question at `index` of `total`.
    ///
    /// "previous" is hidden on the first question, "next" on the last one, where
    /// "submit" takes its place.
    pub fn at(index: usize, total: usize) -> Self {
        let last = index + 1 >= total;
        Self {
            previous: index > 0,
            next: !last,
            submit: last,
        }
    }
}

/// Progress through the survey in percent, counting the current question as done.
pub fn progress_percent(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (index + 1) as f64 / total as f64 * 100.0
}

/// One line of the results summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub prompt: String,
    pub answer: String,
}

impl ResultLine {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }
}

/// The presentation surface a survey controller drives.
///
/// Implementations own all rendering: a browser page, a terminal, or a recorder in tests.
/// Every call is made synchronously from inside a controller transition.
pub trait RenderSurface {
    /// Make `screen` the only visible screen.
    fn show_screen(&mut self, screen: Screen);

    /// Replace the question area with `view`.
    fn mount(&mut self, view: &QuestionView);

    /// Set the progress indicator, in percent.
    fn set_progress(&mut self, percent: f64);

    /// Show or hide the navigation controls.
    fn set_nav_state(&mut self, nav: NavState);

    /// Show a blocking message the user has to acknowledge.
    fn alert(&mut self, message: &str);

    /// Fill the results screen.
    fn show_results(&mut self, lines: &[ResultLine]);
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn show_screen(&mut self, screen: Screen) {
        (**self).show_screen(screen);
    }

    fn mount(&mut self, view: &QuestionView) {
        (**self).mount(view);
    }

    fn set_progress(&mut self, percent: f64) {
        (**self).set_progress(percent);
    }

    fn set_nav_state(&mut self, nav: NavState) {
        (**self).set_nav_state(nav);
    }

    fn alert(&mut self, message: &str) {
        (**self).alert(message);
    }

    fn show_results(&mut self, lines: &[ResultLine]) {
        (**self).show_results(lines);
    }
}
