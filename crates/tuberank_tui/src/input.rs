//! Keyboard handling.

use crate::app::{App, Focus};
use crate::clipboard::CopyTarget;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tuberank_core::GenerationRequest;

/// What the event loop must do after a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Nothing beyond the state change already applied
    None,
    /// Send this request to the generator
    Submit(GenerationRequest),
    /// Put this text on the clipboard
    Copy(CopyTarget, String),
    /// Leave the application
    Quit,
}

/// Apply `key` to `app`.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
            app.should_quit = true;
            return Action::Quit;
        }
        KeyCode::Esc => {
            app.should_quit = true;
            return Action::Quit;
        }
        KeyCode::Tab => {
            app.focus_next();
            return Action::None;
        }
        KeyCode::BackTab => {
            app.focus_previous();
            return Action::None;
        }
        _ => {}
    }

    match app.focus {
        Focus::Topic | Focus::Audience => match key.code {
            KeyCode::Enter => submit(app),
            KeyCode::Backspace => {
                app.delete_char();
                Action::None
            }
            KeyCode::Char(c) if !ctrl => {
                app.insert_char(c);
                Action::None
            }
            _ => Action::None,
        },
        Focus::Category => match key.code {
            KeyCode::Enter => submit(app),
            KeyCode::Left | KeyCode::Up => {
                app.previous_category();
                Action::None
            }
            KeyCode::Right | KeyCode::Down => {
                app.next_category();
                Action::None
            }
            _ => Action::None,
        },
        Focus::Results => match key.code {
            KeyCode::Up => {
                app.select_previous_target();
                Action::None
            }
            KeyCode::Down => {
                app.select_next_target();
                Action::None
            }
            KeyCode::PageUp => {
                app.scroll_up();
                Action::None
            }
            KeyCode::PageDown => {
                app.scroll_down();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('c') => app
                .selected_copy()
                .map_or(Action::None, |(target, text)| Action::Copy(target, text)),
            _ => Action::None,
        },
    }
}

fn submit(app: &mut App) -> Action {
    app.submit().map_or(Action::None, Action::Submit)
}
