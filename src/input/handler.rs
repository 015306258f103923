use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    TogglePause,
    Quit,
    None,
}

/// Maps raw keys (real-time) and typed lines (turn-based) to actions
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::GameAction(Action::Move(Direction::Up)),
            KeyCode::Down => KeyAction::GameAction(Action::Move(Direction::Down)),
            KeyCode::Left => KeyAction::GameAction(Action::Move(Direction::Left)),
            KeyCode::Right => KeyAction::GameAction(Action::Move(Direction::Right)),

            KeyCode::Char(c) => self.handle_char(c),
            KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }

    /// Interpret one line of turn-based input
    pub fn handle_line(&self, line: &str) -> KeyAction {
        let mut chars = line.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.handle_char(c),
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, c: char) -> KeyAction {
        match c.to_ascii_lowercase() {
            // Movement - WASD
            'w' => KeyAction::GameAction(Action::Move(Direction::Up)),
            's' => KeyAction::GameAction(Action::Move(Direction::Down)),
            'a' => KeyAction::GameAction(Action::Move(Direction::Left)),
            'd' => KeyAction::GameAction(Action::Move(Direction::Right)),

            // Controls
            'p' => KeyAction::TogglePause,
            'q' => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(up),
            KeyAction::GameAction(Action::Move(Direction::Up))
        );

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(down),
            KeyAction::GameAction(Action::Move(Direction::Down))
        );

        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(left),
            KeyAction::GameAction(Action::Move(Direction::Left))
        );

        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(right),
            KeyAction::GameAction(Action::Move(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        let w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(w),
            KeyAction::GameAction(Action::Move(Direction::Up))
        );

        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(a),
            KeyAction::GameAction(Action::Move(Direction::Left))
        );

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            KeyAction::GameAction(Action::Move(Direction::Up))
        );
    }

    #[test]
    fn test_control_keys() {
        let handler = InputHandler::new();

        let p = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(p), KeyAction::TogglePause);

        let q_upper = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(q_upper), KeyAction::Quit);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(esc), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(x), KeyAction::None);

        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(tab), KeyAction::None);
    }

    #[test]
    fn test_lines() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_line("d\n"),
            KeyAction::GameAction(Action::Move(Direction::Right))
        );
        assert_eq!(handler.handle_line("  S "), KeyAction::GameAction(Action::Move(Direction::Down)));
        assert_eq!(handler.handle_line("P"), KeyAction::TogglePause);
        assert_eq!(handler.handle_line("q"), KeyAction::Quit);

        assert_eq!(handler.handle_line(""), KeyAction::None);
        assert_eq!(handler.handle_line("wd"), KeyAction::None);
        assert_eq!(handler.handle_line("x"), KeyAction::None);
    }
}
