use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::RawKey;

/// What the client should do with one terminal key event.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KeyCommand {
    /// Forward to the session.
    Game(RawKey),
    /// Leave the client.
    Quit,
}

/// Maps a terminal key event to a client command.
///
/// Only key presses count; repeats and releases reported by some terminals
/// are folded into `RawKey::Other`.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> KeyCommand {
    if key.kind != KeyEventKind::Press {
        return KeyCommand::Game(RawKey::Other);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyCommand::Quit;
    }

    match key.code {
        KeyCode::Up => KeyCommand::Game(RawKey::ArrowUp),
        KeyCode::Down => KeyCommand::Game(RawKey::ArrowDown),
        KeyCode::Left => KeyCommand::Game(RawKey::ArrowLeft),
        KeyCode::Right => KeyCommand::Game(RawKey::ArrowRight),
        KeyCode::Char(' ') => KeyCommand::Game(RawKey::Start),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyCommand::Quit,
        _ => KeyCommand::Game(RawKey::Other),
    }
}
