use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Route};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    // Prompt captures all typing while open
    if app.prompt().is_visible() {
        match key.code {
            KeyCode::Esc => app.close_prompt(),
            KeyCode::Enter => app.submit_prompt(),
            KeyCode::Backspace => app.prompt_backspace(),
            KeyCode::Char(ch) => app.prompt_insert(ch),
            _ => {}
        }
        return;
    }

    match app.route() {
        Some(Route::Qr) => match key.code {
            KeyCode::Char('q') => app.request_quit(),
            KeyCode::Char('r') | KeyCode::Enter => {
                app.request_refresh();
            }
            KeyCode::Char('o') => app.open_prompt(),
            _ => {}
        },
        Some(Route::Gallery(_)) => match key.code {
            KeyCode::Char('q') => app.request_quit(),
            KeyCode::Char('r') => {
                app.request_refresh();
            }
            KeyCode::Char('b') | KeyCode::Char('n') | KeyCode::Esc => app.navigate(Route::Qr),
            KeyCode::Char('s') => app.share(),
            KeyCode::Char('o') => app.open_prompt(),
            KeyCode::Right | KeyCode::Char('l') => app.select_next(),
            KeyCode::Left | KeyCode::Char('h') => app.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.select_down(),
            KeyCode::Up | KeyCode::Char('k') => app.select_up(),
            _ => {}
        },
        None => {
            if key.code == KeyCode::Char('q') {
                app.request_quit();
            }
        }
    }
}
