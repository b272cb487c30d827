use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the front end should do about a key press
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Start,
    Help,
    /// Pass the key on to the engine
    Game(KeyCode),
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            (_, KeyCode::Enter) => Some(Command::Start),
            (m, KeyCode::Char('?')) if normal_modifiers.contains(m) => Some(Command::Help),
            (m, code) if normal_modifiers.contains(m) => Some(Command::Game(code)),
            _ => None,
        }
    }
}
