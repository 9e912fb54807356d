use std::sync::Arc;

use crate::{
    CaptureError, InputEvent, NavState, Phase, QuestionDefinition, QuestionView, RenderSurface,
    ResponseStore, ResultLine, Screen, SurveyDefinition, SurveySession, ValidationError, apply,
    progress_percent, render_question, summarize, validate,
};

/// Steps one user through a survey.
///
/// The controller owns the session (position and answers) and drives a [`RenderSurface`].
/// The definition is shared read-only configuration; several controllers may present the
/// same one independently.
///
/// Lifecycle: `Welcome -> InProgress(0..len) -> Results`, and `restart` back to `Welcome`
/// from anywhere.
#[derive(Debug)]
pub struct SurveyController<S> {
    definition: Arc<SurveyDefinition>,
    session: SurveySession,
    phase: Phase,
    surface: S,
}

impl<S: RenderSurface> SurveyController<S> {
    /// Create a controller and show the welcome screen.
    pub fn new(definition: impl Into<Arc<SurveyDefinition>>, mut surface: S) -> Self {
        surface.show_screen(Screen::Welcome);
        Self {
            definition: definition.into(),
            session: SurveySession::new(),
            phase: Phase::Welcome,
            surface,
        }
    }

    pub fn definition(&self) -> &SurveyDefinition {
        &self.definition
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Position of the question on screen, `None` outside the question screen.
    pub fn current_index(&self) -> Option<usize> {
        self.phase.index()
    }

    pub fn session(&self) -> &SurveySession {
        &self.session
    }

    pub fn responses(&self) -> &ResponseStore {
        &self.session.responses
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The question on screen.
    pub fn current_question(&self) -> Option<&QuestionDefinition> {
        self.definition.question(self.phase.index()?)
    }

    /// The render tree of the question on screen.
    pub fn current_view(&self) -> Option<QuestionView> {
        self.current_question()
            .map(|question| render_question(question, &self.session.responses))
    }

    /// The summary of the answers given so far.
    pub fn results(&self) -> Vec<ResultLine> {
        summarize(&self.definition, &self.session.responses)
    }

    /// Leave the welcome screen for the first question.
    pub fn start(&mut self) {
        if self.phase != Phase::Welcome {
            tracing::debug!(phase = ?self.phase, "start ignored outside the welcome screen");
            return;
        }

        self.surface.show_screen(Screen::Survey);
        if self.definition.is_empty() {
            tracing::warn!(title = %self.definition.title, "survey has no questions");
            self.finish();
            return;
        }

        tracing::debug!(title = %self.definition.title, "survey started");
        self.show_question(0);
    }

    /// Validate the current question and move to the following one.
    ///
    /// On the last question this only validates; `submit` finishes the survey.
    pub fn next(&mut self) -> Result<(), ValidationError> {
        let Phase::InProgress(index) = self.phase else {
            return Ok(());
        };
        self.check(index)?;

        if index + 1 < self.definition.len() {
            self.show_question(index + 1);
        }
        Ok(())
    }

    /// Go back one question. Never validates.
    pub fn previous(&mut self) {
        if let Phase::InProgress(index) = self.phase
            && index > 0
        {
            self.show_question(index - 1);
        }
    }

    /// Validate the last question and show the results.
    pub fn submit(&mut self) -> Result<(), ValidationError> {
        let Phase::InProgress(index) = self.phase else {
            return Ok(());
        };
        if Some(index) != self.definition.last_index() {
            tracing::debug!(index, "submit ignored before the last question");
            return Ok(());
        }
        self.check(index)?;

        self.finish();
        Ok(())
    }

    /// Forget all answers and return to the welcome screen.
    pub fn restart(&mut self) {
        tracing::debug!(phase = ?self.phase, answers = self.session.responses.len(), "survey restarted");
        self.session.reset();
        self.phase = Phase::Welcome;
        self.surface.show_screen(Screen::Welcome);
    }

    /// Apply a user interaction to the question on screen and re-render it.
    ///
    /// Input that does not fit the question is rejected and leaves the answers untouched.
    pub fn capture(&mut self, event: InputEvent) -> Result<(), CaptureError> {
        let index = self.phase.index().ok_or(CaptureError::Inactive)?;
        let Some(question) = self.definition.question(index) else {
            return Err(CaptureError::Inactive);
        };

        if let Err(err) = apply(question, &mut self.session.responses, event) {
            tracing::warn!(question_id = question.id, %err, "input ignored");
            return Err(err);
        }

        self.remount();
        Ok(())
    }

    fn check(&mut self, index: usize) -> Result<(), ValidationError> {
        let Some(question) = self.definition.question(index) else {
            return Ok(());
        };

        if let Err(err) = validate(question, &self.session.responses) {
            tracing::info!(question_id = question.id, %err, "navigation blocked");
            self.surface.alert(&err.to_string());
            return Err(err);
        }
        Ok(())
    }

    fn show_question(&mut self, index: usize) {
        let total = self.definition.len();
        self.phase = Phase::InProgress(index);
        self.session.current_index = index;
        tracing::debug!(index, total, "showing question");

        self.remount();
        self.surface.set_progress(progress_percent(index, total));
        self.surface.set_nav_state(NavState::at(index, total));
    }

    fn remount(&mut self) {
        if let Some(view) = self.current_view() {
            self.surface.mount(&view);
        }
    }

    fn finish(&mut self) {
        let lines = self.results();
        tracing::debug!(lines = lines.len(), "survey finished");
        self.phase = Phase::Results;
        self.surface.show_screen(Screen::Results);
        self.surface.show_results(&lines);
    }
}
