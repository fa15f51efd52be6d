use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};

use crate::shared::{InputEvent, KeyId};

// poll the terminal for one event per frame tick and translate it into an
// InputEvent for the router. Every printable key is forwarded with its
// identifier; deciding what's bound is the router's job, not ours.
pub fn poll_input(timeout: Duration) -> anyhow::Result<Vec<InputEvent>> {
    if !event::poll(timeout)? {
        return Ok(vec![]);
    }

    match event::read()? {
        Event::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return Ok(vec![]);
            }
            Ok(translate_key(key.code))
        }
        Event::Mouse(mouse) => {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                Ok(vec![InputEvent::Click {
                    x: mouse.column,
                    y: mouse.row,
                }])
            } else {
                Ok(vec![])
            }
        }
        _ => Ok(vec![]),
    }
}

fn translate_key(code: KeyCode) -> Vec<InputEvent> {
    match code {
        KeyCode::Esc => vec![InputEvent::Quit],
        KeyCode::Char(c) => vec![InputEvent::KeyDown(KeyId::from_char(c))],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_their_uppercase_identifier() {
        assert_eq!(translate_key(KeyCode::Char('a')), vec![InputEvent::KeyDown(KeyId(65))]);
        assert_eq!(translate_key(KeyCode::Char('A')), vec![InputEvent::KeyDown(KeyId(65))]);
        assert_eq!(translate_key(KeyCode::Char('l')), vec![InputEvent::KeyDown(KeyId(76))]);
    }

    #[test]
    fn unbound_keys_are_still_forwarded() {
        // the router decides what's bound; input just carries the identifier
        assert_eq!(translate_key(KeyCode::Char('z')), vec![InputEvent::KeyDown(KeyId(90))]);
    }

    #[test]
    fn esc_quits_and_non_character_keys_do_nothing() {
        assert_eq!(translate_key(KeyCode::Esc), vec![InputEvent::Quit]);
        assert!(translate_key(KeyCode::Up).is_empty());
        assert!(translate_key(KeyCode::Enter).is_empty());
    }
}
