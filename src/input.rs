use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::direction::Direction;
use crate::session::GameOverReply;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
    Ignore,
}

pub fn translate(key: KeyEvent) -> Command {
    if key.kind != KeyEventKind::Press {
        return Command::Ignore;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Turn(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::Turn(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Turn(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Command::Turn(Direction::Right)
        }
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => Command::Ignore,
    }
}

// Keys the game-over prompt reacts to. Steering keys are ignored so a key
// still held from the crash cannot dismiss it.
pub fn prompt_response(key: KeyEvent) -> Option<GameOverReply> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match translate(key) {
        Command::Quit => Some(GameOverReply::Quit),
        Command::Turn(_) => None,
        Command::Ignore => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(GameOverReply::Restart),
            _ => None,
        },
    }
}
