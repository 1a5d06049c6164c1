use super::*;
use crossterm::event::KeyEventState;

fn press(code: KeyCode, mods: KeyModifiers) -> Option<Key> {
    into_key(Event::Key(KeyEvent::new(code, mods)))
}

#[test]
fn ctrl_letters_become_control_codes() {
    assert_eq!(
        press(KeyCode::Char('q'), KeyModifiers::CONTROL),
        Some(Key::ctrl('Q'))
    );
    assert_eq!(
        press(KeyCode::Char('c'), KeyModifiers::CONTROL),
        Some(Key::from(3))
    );
}

#[test]
fn plain_chars_keep_their_code_point() {
    assert_eq!(
        press(KeyCode::Char('A'), KeyModifiers::SHIFT),
        Some(Key::from('A'))
    );
    assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE), Some(Key::ENTER));
    assert_eq!(press(KeyCode::Tab, KeyModifiers::NONE), Some(Key::TAB));
}

#[test]
fn modified_navigation_keys() {
    assert_eq!(press(KeyCode::Up, KeyModifiers::ALT), Some(Key::ALT_UP));
    assert_eq!(
        press(KeyCode::Home, KeyModifiers::CONTROL),
        Some(Key::CTRL_HOME)
    );
    assert_eq!(press(KeyCode::End, KeyModifiers::NONE), Some(Key::END));
    assert_eq!(press(KeyCode::F(3), KeyModifiers::NONE), Some(Key::f(3)));
}

#[test]
fn releases_and_mouse_are_dropped() {
    let release = KeyEvent::new_with_kind_and_state(
        KeyCode::Char('a'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
        KeyEventState::NONE,
    );
    assert_eq!(into_key(Event::Key(release)), None);
    assert_eq!(into_key(Event::FocusGained), None);
}

#[test]
fn resize_maps_to_resize_key() {
    assert_eq!(into_key(Event::Resize(80, 24)), Some(Key::RESIZE));
}
