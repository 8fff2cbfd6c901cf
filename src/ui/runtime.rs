use crate::config::Config;
use crate::generator::PasswordSpec;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let spec = PasswordSpec {
        length: config.defaults.length,
        numbers: config.defaults.numbers,
        symbols: config.defaults.symbols,
    };
    let mut app = App::new(spec, config.defaults.widgets, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => {}
            // ratatui re-measures the backend on the next draw
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::CopyResult { widget, ok, epoch }) => {
                app.on_copy_result(widget, ok, epoch)
            }
            Ok(AppEvent::FeedbackElapsed {
                widget,
                field,
                epoch,
            }) => app.on_feedback_elapsed(widget, field, epoch),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
