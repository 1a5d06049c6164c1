use crate::core::key::Key;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a terminal event into a canonical key. Events the engine has no
/// key for (mouse, focus, paste, releases) map to `None`.
pub fn into_key(event: Event) -> Option<Key> {
    match event {
        Event::Key(key) => from_key_event(key),
        Event::Resize(..) => Some(Key::RESIZE),
        _ => None,
    }
}

pub fn from_key_event(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    let key = match event.code {
        KeyCode::Char(ch) if ctrl && ch.is_ascii_alphabetic() => Key::ctrl(ch),
        KeyCode::Char(ch) => Key::from(ch),
        KeyCode::Enter => Key::ENTER,
        KeyCode::Tab => Key::TAB,
        KeyCode::BackTab => Key::BACK_TAB,
        KeyCode::Esc => Key::ESC,
        KeyCode::Backspace => Key::BACKSPACE,
        KeyCode::Delete => Key::DELETE,
        KeyCode::Insert => Key::INSERT,
        KeyCode::Up if alt => Key::ALT_UP,
        KeyCode::Down if alt => Key::ALT_DOWN,
        KeyCode::Up => Key::UP,
        KeyCode::Down => Key::DOWN,
        KeyCode::Left => Key::LEFT,
        KeyCode::Right => Key::RIGHT,
        KeyCode::Home if ctrl => Key::CTRL_HOME,
        KeyCode::End if ctrl => Key::CTRL_END,
        KeyCode::Home => Key::HOME,
        KeyCode::End => Key::END,
        KeyCode::PageUp => Key::PAGE_UP,
        KeyCode::PageDown => Key::PAGE_DOWN,
        KeyCode::F(n) => Key::f(n),
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
