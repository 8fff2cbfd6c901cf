use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use passforge::generator::PasswordSpec;
use passforge::ui::app::App;
use passforge::ui::events::AppEvent;
use passforge::ui::password::{Feedback, FeedbackField};
use std::sync::mpsc;

fn make_app(widget_count: usize) -> (App, mpsc::Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    let spec = PasswordSpec {
        length: 12,
        numbers: true,
        symbols: false,
    };
    (App::new(spec, widget_count, tx), rx)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn every_widget_starts_with_its_own_secret() {
    let (app, _rx) = make_app(3);
    assert_eq!(app.widgets().len(), 3);
    for state in app.widgets() {
        assert_eq!(state.password.chars().count(), 12);
        assert_eq!(state.copy, Feedback::Idle);
        assert_eq!(state.regen, Feedback::Idle);
    }
    assert_ne!(app.widgets()[0].password, app.widgets()[1].password);
}

#[test]
fn regenerate_replaces_secret_and_reports_success() {
    let (mut app, _rx) = make_app(1);
    let before = app.widgets()[0].password.clone();

    app.regenerate(0);

    let state = &app.widgets()[0];
    assert_ne!(state.password, before);
    assert_eq!(state.password.chars().count(), 12);
    assert_eq!(state.regen, Feedback::Success);
    assert_eq!(state.regen_epoch, 1);
}

#[test]
fn regenerate_leaves_other_widgets_alone() {
    let (mut app, _rx) = make_app(2);
    let other = app.widgets()[1].clone();

    app.regenerate(0);

    assert_eq!(app.widgets()[1], other);
}

#[test]
fn double_regenerate_settles_once_both_timers_fire() {
    let (mut app, _rx) = make_app(1);

    app.regenerate(0);
    let first = app.widgets()[0].password.clone();
    app.regenerate(0);
    let second = app.widgets()[0].password.clone();
    assert_ne!(first, second);

    // First action's reset fires: stale, feedback stays on screen.
    app.on_feedback_elapsed(0, FeedbackField::Regen, 1);
    assert_eq!(app.widgets()[0].regen, Feedback::Success);

    // Second action's reset fires: feedback clears.
    app.on_feedback_elapsed(0, FeedbackField::Regen, 2);
    assert_eq!(app.widgets()[0].regen, Feedback::Idle);
    assert_eq!(app.widgets()[0].password, second);
}

#[test]
fn copy_marks_trying_and_opens_epoch() {
    let (mut app, _rx) = make_app(1);
    app.copy(0);
    assert_eq!(app.widgets()[0].copy, Feedback::Trying);
    assert_eq!(app.widgets()[0].copy_epoch, 1);
}

#[test]
fn copy_worker_posts_a_result_event() {
    let (mut app, rx) = make_app(1);
    app.copy(0);

    // Whether the clipboard is reachable depends on the environment; the
    // worker must report either way.
    match rx.recv_timeout(std::time::Duration::from_secs(10)) {
        Ok(AppEvent::CopyResult { widget, epoch, .. }) => {
            assert_eq!(widget, 0);
            assert_eq!(epoch, 1);
        }
        Ok(other) => panic!("expected CopyResult, got {:?}", other),
        Err(err) => panic!("no copy result: {}", err),
    }
}

#[test]
fn copy_result_drives_feedback_to_outcome_and_back() {
    let (mut app, _rx) = make_app(1);
    app.copy(0);

    app.on_copy_result(0, false, 1);
    assert_eq!(app.widgets()[0].copy, Feedback::Failure);

    app.on_feedback_elapsed(0, FeedbackField::Copy, 1);
    assert_eq!(app.widgets()[0].copy, Feedback::Idle);
}

#[test]
fn stale_copy_result_is_dropped() {
    let (mut app, _rx) = make_app(1);
    app.copy(0);
    app.copy(0);
    assert_eq!(app.widgets()[0].copy_epoch, 2);

    app.on_copy_result(0, true, 1);
    assert_eq!(app.widgets()[0].copy, Feedback::Trying);

    app.on_copy_result(0, true, 2);
    assert_eq!(app.widgets()[0].copy, Feedback::Success);
}

#[test]
fn out_of_range_widget_indices_are_ignored() {
    let (mut app, _rx) = make_app(1);
    app.regenerate(5);
    app.copy(5);
    app.on_copy_result(5, true, 1);
    app.on_feedback_elapsed(5, FeedbackField::Copy, 1);
    assert_eq!(app.widgets()[0].copy, Feedback::Idle);
    assert_eq!(app.widgets()[0].regen, Feedback::Idle);
}

#[test]
fn quit_keys_request_quit() {
    let (mut app, _rx) = make_app(1);
    assert!(!app.should_quit());
    app.on_key(key(KeyCode::Char('q')));
    assert!(app.should_quit());

    let (mut app, _rx) = make_app(1);
    app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn tab_cycles_focus_across_widgets() {
    let (mut app, _rx) = make_app(3);
    assert_eq!(app.focused(), 0);
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.focused(), 1);
    app.on_key(key(KeyCode::Tab));
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.focused(), 0);
    app.on_key(key(KeyCode::BackTab));
    assert_eq!(app.focused(), 2);
}

#[test]
fn regenerate_key_targets_the_focused_widget() {
    let (mut app, _rx) = make_app(2);
    let untouched = app.widgets()[0].password.clone();
    app.on_key(key(KeyCode::Tab));
    app.on_key(key(KeyCode::Char('r')));

    assert_eq!(app.widgets()[0].password, untouched);
    assert_eq!(app.widgets()[1].regen, Feedback::Success);
}
