//! Terminal surface state and key handling.

use crossterm::event::KeyCode;
use questionnaire::{
    InputEvent, NavState, QuestionView, RenderSurface, ResultLine, Screen, SurveyController,
    SurveyDefinition, ViewBody,
};

use crate::Theme;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The user left the results screen.
    Finish,
    /// The user pressed Esc before finishing.
    Cancel,
}

/// A [`RenderSurface`] holding everything the terminal draws.
///
/// Besides what the controller pushes, it tracks the keyboard focus: the highlighted
/// option and whether typing goes into the follow-up field.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    pub(crate) title: String,
    pub(crate) welcome: Option<String>,
    pub(crate) epilogue: Option<String>,
    pub(crate) theme: Theme,
    screen: Screen,
    view: Option<QuestionView>,
    progress: f64,
    nav: NavState,
    alert: Option<String>,
    results: Vec<ResultLine>,
    focus: usize,
    follow_up_focused: bool,
}

impl TerminalSurface {
    pub fn for_survey(definition: &SurveyDefinition, theme: Theme) -> Self {
        Self {
            title: definition.title.clone(),
            welcome: definition.welcome.clone(),
            epilogue: definition.epilogue.clone(),
            theme,
            screen: Screen::Welcome,
            view: None,
            progress: 0.0,
            nav: NavState::default(),
            alert: None,
            results: Vec::new(),
            focus: 0,
            follow_up_focused: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn view(&self) -> Option<&QuestionView> {
        self.view.as_ref()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    pub fn alert_message(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn results(&self) -> &[ResultLine] {
        &self.results
    }

    /// Index of the highlighted option.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn follow_up_focused(&self) -> bool {
        self.follow_up_focused
    }

    fn move_focus(&mut self, down: bool) {
        let len = self.view.as_ref().map_or(0, |view| view.body.options().len());
        if down {
            if self.focus + 1 < len {
                self.focus += 1;
            }
        } else {
            self.focus = self.focus.saturating_sub(1);
        }
    }

    fn toggle_follow_up_focus(&mut self) {
        let visible = self.view.as_ref().is_some_and(|view| view.follow_up.is_some());
        self.follow_up_focused = visible && !self.follow_up_focused;
    }
}

impl RenderSurface for TerminalSurface {
    fn show_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    fn mount(&mut self, view: &QuestionView) {
        let same_question = self
            .view
            .as_ref()
            .is_some_and(|current| current.question_id == view.question_id);
        if !same_question {
            self.focus = view
                .body
                .options()
                .iter()
                .position(|option| option.selected)
                .unwrap_or(0);
            self.follow_up_focused = false;
        }
        if view.follow_up.is_none() {
            self.follow_up_focused = false;
        }
        self.view = Some(view.clone());
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

/// Apply one key press to the survey.
///
/// Welcome: Enter starts. Questions: ↑/↓ move the highlight, Space chooses or toggles,
/// ←/→ adjust a slider, typing edits text, Tab switches to the follow-up field, Enter goes
/// forward, Shift+Tab/PageUp (or Backspace outside text fields) goes back. Results: Enter finishes,
/// `r` restarts. Esc cancels anywhere but on the results screen.
pub fn handle_key(controller: &mut SurveyController<TerminalSurface>, key: KeyCode) -> Flow {
    controller.surface_mut().alert = None;

    match controller.surface().screen() {
        Screen::Welcome => match key {
            KeyCode::Enter => controller.start(),
            KeyCode::Esc => return Flow::Cancel,
            _ => {}
        },
        Screen::Survey => return question_key(controller, key),
        Screen::Results => match key {
            KeyCode::Enter | KeyCode::Esc => return Flow::Finish,
            KeyCode::Char('r') => controller.restart(),
            _ => {}
        },
    }
    Flow::Continue
}

fn question_key(controller: &mut SurveyController<TerminalSurface>, key: KeyCode) -> Flow {
    let Some(view) = controller.surface().view().cloned() else {
        return Flow::Continue;
    };
    let surface = controller.surface();
    let (focus, follow_up_focused, nav) = (
        surface.focus(),
        surface.follow_up_focused(),
        surface.nav(),
    );

    let event = match key {
        KeyCode::Esc => return Flow::Cancel,
        KeyCode::Enter => {
            // Blocked navigation is already shown as an alert.
            let _ = if nav.submit {
                controller.submit()
            } else {
                controller.next()
            };
            return Flow::Continue;
        }
        KeyCode::BackTab | KeyCode::PageUp => {
            controller.previous();
            return Flow::Continue;
        }
        KeyCode::Tab => {
            controller.surface_mut().toggle_follow_up_focus();
            return Flow::Continue;
        }
        _ if follow_up_focused => view
            .follow_up
            .as_ref()
            .and_then(|follow_up| edit(&follow_up.field.value, key))
            .map(InputEvent::FollowUp),
        KeyCode::Up | KeyCode::Down if !view.body.options().is_empty() => {
            controller.surface_mut().move_focus(key == KeyCode::Down);
            return Flow::Continue;
        }
        KeyCode::Backspace if !matches!(view.body, ViewBody::TextField(_)) => {
            controller.previous();
            return Flow::Continue;
        }
        _ => body_event(&view.body, focus, key),
    };

    if let Some(event) = event {
        // Rejected input is logged by the controller.
        let _ = controller.capture(event);
    }
    Flow::Continue
}

/// The input event a key produces on a question's controls.
fn body_event(body: &ViewBody, focus: usize, key: KeyCode) -> Option<InputEvent> {
    match (body, key) {
        (ViewBody::Choices(options) | ViewBody::Emoji(options), KeyCode::Char(' ')) => options
            .get(focus)
            .map(|option| InputEvent::Choose(option.value.clone())),
        (ViewBody::Toggles(options), KeyCode::Char(' ')) => {
            options.get(focus).map(|option| InputEvent::Toggle {
                value: option.value.clone(),
                checked: !option.selected,
            })
        }
        (ViewBody::Slider(slider), KeyCode::Left) => {
            Some(InputEvent::Slide(slider.value.saturating_sub(1).to_string()))
        }
        (ViewBody::Slider(slider), KeyCode::Right) => {
            Some(InputEvent::Slide(slider.value.saturating_add(1).to_string()))
        }
        (ViewBody::Slider(slider), KeyCode::Char(' ')) => {
            Some(InputEvent::Slide(slider.value.to_string()))
        }
        (ViewBody::TextField(field), _) => edit(&field.value, key).map(InputEvent::Type),
        _ => None,
    }
}

/// The new content of a text field after `key`, if it changes.
fn edit(value: &str, key: KeyCode) -> Option<String> {
    match key {
        KeyCode::Char(c) => {
            let mut text = value.to_string();
            text.push(c);
            Some(text)
        }
        KeyCode::Backspace => {
            let mut text = value.to_string();
            text.pop().map(|_| text)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire::{Phase, QuestionDefinition, QuestionKind, ResponseKey};

    fn controller(questions: Vec<QuestionDefinition>) -> SurveyController<TerminalSurface> {
        let definition = SurveyDefinition::new("Keys", questions);
        let surface = TerminalSurface::for_survey(&definition, Theme::default());
        SurveyController::new(definition, surface)
    }

    fn press(controller: &mut SurveyController<TerminalSurface>, keys: &[KeyCode]) {
        for &key in keys {
            assert_eq!(handle_key(controller, key), Flow::Continue);
        }
    }

    #[test]
    fn enter_starts_and_esc_cancels() {
        let mut controller = controller(vec![QuestionDefinition::new(
            1,
            "Q",
            QuestionKind::text(""),
        )]);
        press(&mut controller, &[KeyCode::Enter]);
        assert_eq!(controller.phase(), Phase::InProgress(0));
        assert_eq!(handle_key(&mut controller, KeyCode::Esc), Flow::Cancel);
    }

    #[test]
    fn arrows_and_space_choose() {
        let mut controller = controller(vec![
            QuestionDefinition::new(1, "Pick", QuestionKind::multiple_choice(["A", "B", "C"]))
                .required(),
        ]);
        press(
            &mut controller,
            &[KeyCode::Enter, KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Char(' ')],
        );
        assert_eq!(
            controller.responses().get_text(&ResponseKey::Question(1)).unwrap(),
            "C"
        );

        press(&mut controller, &[KeyCode::Up, KeyCode::Char(' ')]);
        assert_eq!(
            controller.responses().get_text(&ResponseKey::Question(1)).unwrap(),
            "B"
        );
    }

    #[test]
    fn space_toggles_checkbox() {
        let mut controller = controller(vec![QuestionDefinition::new(
            3,
            "Features",
            QuestionKind::checkbox(["X", "Y", "Z"]),
        )]);
        press(
            &mut controller,
            &[
                KeyCode::Enter,
                KeyCode::Char(' '),
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Char(' '),
                KeyCode::Up,
                KeyCode::Up,
                KeyCode::Char(' '),
            ],
        );
        assert_eq!(
            controller
                .responses()
                .get_selections(&ResponseKey::Question(3))
                .unwrap(),
            ["Z"]
        );
    }

    #[test]
    fn slider_arrows_clamp() {
        let mut controller = controller(vec![QuestionDefinition::new(
            2,
            "Rate",
            QuestionKind::rating(1, 3, "Low", "High"),
        )]);
        press(
            &mut controller,
            &[KeyCode::Enter, KeyCode::Right, KeyCode::Right, KeyCode::Right],
        );
        assert_eq!(
            controller.responses().get_number(&ResponseKey::Question(2)).unwrap(),
            3
        );

        press(&mut controller, &[KeyCode::Left]);
        assert_eq!(
            controller.responses().get_number(&ResponseKey::Question(2)).unwrap(),
            2
        );
    }

    #[test]
    fn typing_and_backspace() {
        let mut controller = controller(vec![
            QuestionDefinition::new(1, "First", QuestionKind::text("")),
            QuestionDefinition::new(2, "Second", QuestionKind::text("")),
        ]);
        press(&mut controller, &[KeyCode::Enter, KeyCode::Enter]);
        press(
            &mut controller,
            &[KeyCode::Char('h'), KeyCode::Char('i'), KeyCode::Char('!'), KeyCode::Backspace],
        );
        assert_eq!(
            controller.responses().get_text(&ResponseKey::Question(2)).unwrap(),
            "hi"
        );

        press(
            &mut controller,
            &[KeyCode::Backspace, KeyCode::Backspace, KeyCode::Backspace, KeyCode::Backspace],
        );
        assert_eq!(controller.phase(), Phase::InProgress(1));
        assert_eq!(
            controller.responses().get_text(&ResponseKey::Question(2)).unwrap(),
            ""
        );

        press(&mut controller, &[KeyCode::PageUp]);
        assert_eq!(controller.phase(), Phase::InProgress(0));
    }

    #[test]
    fn backspace_goes_back_from_options() {
        let mut controller = controller(vec![
            QuestionDefinition::new(1, "First", QuestionKind::text("")),
            QuestionDefinition::new(2, "Pick", QuestionKind::multiple_choice(["A", "B"])),
        ]);
        press(&mut controller, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Backspace]);
        assert_eq!(controller.phase(), Phase::InProgress(0));
    }

    #[test]
    fn slider_arrows_at_extreme_bounds() {
        let mut controller = controller(vec![
            QuestionDefinition::new(1, "High", QuestionKind::rating(i64::MAX - 1, i64::MAX, "a", "b")),
            QuestionDefinition::new(2, "Low", QuestionKind::rating(i64::MIN, i64::MIN + 1, "a", "b")),
        ]);
        press(&mut controller, &[KeyCode::Enter, KeyCode::Right, KeyCode::Right]);
        assert_eq!(
            controller.responses().get_number(&ResponseKey::Question(1)).unwrap(),
            i64::MAX
        );

        press(&mut controller, &[KeyCode::Enter, KeyCode::Left, KeyCode::Left]);
        assert_eq!(controller.phase(), Phase::InProgress(1));
        assert_eq!(
            controller.responses().get_number(&ResponseKey::Question(2)).unwrap(),
            i64::MIN
        );
    }

    #[test]
    fn tab_edits_follow_up() {
        let mut controller = controller(vec![
            QuestionDefinition::new(1, "Found it?", QuestionKind::multiple_choice(["Yes", "No"]))
                .with_follow_up("No", "What was missing?"),
        ]);
        press(&mut controller, &[KeyCode::Enter, KeyCode::Tab]);
        assert!(!controller.surface().follow_up_focused());

        press(
            &mut controller,
            &[KeyCode::Down, KeyCode::Char(' '), KeyCode::Tab, KeyCode::Char('x')],
        );
        assert!(controller.surface().follow_up_focused());
        assert_eq!(
            controller.responses().get_text(&ResponseKey::FollowUp(1)).unwrap(),
            "x"
        );
        assert_eq!(
            controller.responses().get_text(&ResponseKey::Question(1)).unwrap(),
            "No"
        );
    }

    #[test]
    fn blocked_enter_shows_alert_until_next_key() {
        let mut controller = controller(vec![
            QuestionDefinition::new(1, "Pick", QuestionKind::multiple_choice(["A"])).required(),
        ]);
        press(&mut controller, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(
            controller.surface().alert_message(),
            Some("Please answer this question before continuing.")
        );

        press(&mut controller, &[KeyCode::Down]);
        assert!(controller.surface().alert_message().is_none());
    }

    #[test]
    fn results_restart_and_finish() {
        let mut controller = controller(vec![
            QuestionDefinition::new(1, "Pick", QuestionKind::multiple_choice(["A"])).required(),
        ]);
        press(&mut controller, &[KeyCode::Enter, KeyCode::Char(' '), KeyCode::Enter]);
        assert_eq!(controller.surface().screen(), Screen::Results);
        assert_eq!(controller.surface().results()[0].answer, "A");

        press(&mut controller, &[KeyCode::Char('r')]);
        assert_eq!(controller.phase(), Phase::Welcome);
        assert!(controller.responses().is_empty());

        press(&mut controller, &[KeyCode::Enter, KeyCode::Char(' '), KeyCode::Enter]);
        assert_eq!(handle_key(&mut controller, KeyCode::Enter), Flow::Finish);
    }

    #[test]
    fn focus_starts_on_stored_choice() {
        let mut controller = controller(vec![
            QuestionDefinition::new(1, "Pick", QuestionKind::multiple_choice(["A", "B", "C"])),
            QuestionDefinition::new(2, "Next", QuestionKind::text("")),
        ]);
        press(
            &mut controller,
            &[KeyCode::Enter, KeyCode::Down, KeyCode::Down, KeyCode::Char(' '), KeyCode::Enter],
        );
        press(&mut controller, &[KeyCode::PageUp]);
        assert_eq!(controller.surface().focus(), 2);
    }
}
