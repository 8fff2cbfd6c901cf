use crate::clipboard;
use crate::generator::PasswordSpec;
use crate::ui::events::{AppEvent, EventSender};
use crate::ui::mvi::Reducer;
use crate::ui::password::{FeedbackField, PasswordIntent, PasswordReducer, PasswordWidgetState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::thread;
use std::time::Duration;

/// How long transient action feedback stays on screen before returning to
/// idle.
pub const FEEDBACK_RESET: Duration = Duration::from_millis(2000);

/// Generic MVI dispatch: takes the widget's current state, runs the
/// reducer, stores the result.
macro_rules! dispatch_widget {
    ($self:expr, $widget:expr, $intent:expr) => {
        if let Some(slot) = $self.widgets.get_mut($widget) {
            *slot = PasswordReducer::reduce(std::mem::take(slot), $intent);
        }
    };
}

pub struct App {
    should_quit: bool,
    /// Generation configuration, shared by every widget.
    spec: PasswordSpec,
    /// One state per widget (MVI pattern); widgets never share state.
    widgets: Vec<PasswordWidgetState>,
    focused: usize,
    /// Channel that reset timers and copy workers post back into.
    events: EventSender,
}

impl App {
    pub fn new(spec: PasswordSpec, widget_count: usize, events: EventSender) -> Self {
        let widgets = (0..widget_count)
            .map(|_| PasswordWidgetState::new(spec.generate()))
            .collect();
        Self {
            should_quit: false,
            spec,
            widgets,
            focused: 0,
            events,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn spec(&self) -> &PasswordSpec {
        &self.spec
    }

    pub fn widgets(&self) -> &[PasswordWidgetState] {
        &self.widgets
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focus_next(&mut self) {
        if !self.widgets.is_empty() {
            self.focused = (self.focused + 1) % self.widgets.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.widgets.is_empty() {
            self.focused = (self.focused + self.widgets.len() - 1) % self.widgets.len();
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.request_quit();
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Char('r') => self.regenerate(self.focused),
            KeyCode::Char('c') | KeyCode::Enter => self.copy(self.focused),
            _ => {}
        }
    }

    /// Replace the widget's secret with a freshly generated one.
    ///
    /// The regen feedback goes `Trying → Success` within this call:
    /// generation is synchronous and infallible. The return to idle is
    /// scheduled against the epoch opened here.
    pub fn regenerate(&mut self, widget: usize) {
        if widget >= self.widgets.len() {
            return;
        }
        dispatch_widget!(self, widget, PasswordIntent::RegenerateStarted);
        let epoch = self.widgets[widget].regen_epoch;
        let password = self.spec.generate();
        dispatch_widget!(self, widget, PasswordIntent::Regenerated { password });
        tracing::debug!(widget, epoch, "regenerated password");
        self.schedule_reset(widget, FeedbackField::Regen, epoch);
    }

    /// Start copying the widget's secret to the system clipboard.
    ///
    /// The write happens on a worker thread so the UI stays responsive;
    /// the worker posts a `CopyResult` tagged with the epoch opened here.
    pub fn copy(&mut self, widget: usize) {
        if widget >= self.widgets.len() {
            return;
        }
        dispatch_widget!(self, widget, PasswordIntent::CopyStarted);
        let epoch = self.widgets[widget].copy_epoch;
        let text = self.widgets[widget].password.clone();
        let events = self.events.clone();
        thread::spawn(move || {
            let ok = match clipboard::write_text(&text) {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(widget, %err, "clipboard write failed");
                    false
                }
            };
            let _ = events.send(AppEvent::CopyResult { widget, ok, epoch });
        });
    }

    /// Handle the worker's clipboard result.
    ///
    /// A result from a superseded copy (stale epoch) is dropped without
    /// scheduling a reset; the newer copy owns the feedback field now.
    pub fn on_copy_result(&mut self, widget: usize, ok: bool, epoch: u64) {
        let Some(state) = self.widgets.get(widget) else {
            return;
        };
        if state.copy_epoch != epoch {
            tracing::debug!(widget, epoch, "discarding stale copy result");
            return;
        }
        dispatch_widget!(self, widget, PasswordIntent::CopyFinished { ok, epoch });
        self.schedule_reset(widget, FeedbackField::Copy, epoch);
    }

    /// Handle an elapsed feedback reset. The reducer discards stale epochs.
    pub fn on_feedback_elapsed(&mut self, widget: usize, field: FeedbackField, epoch: u64) {
        dispatch_widget!(self, widget, PasswordIntent::FeedbackElapsed { field, epoch });
    }

    /// Schedule the delayed return to idle for one feedback field.
    ///
    /// The timer thread posts back into the event channel instead of
    /// touching state; the epoch tag makes a timer from a superseded
    /// action a no-op, so overlapping actions never race.
    fn schedule_reset(&self, widget: usize, field: FeedbackField, epoch: u64) {
        let events = self.events.clone();
        thread::spawn(move || {
            thread::sleep(FEEDBACK_RESET);
            let _ = events.send(AppEvent::FeedbackElapsed {
                widget,
                field,
                epoch,
            });
        });
    }
}
