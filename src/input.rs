//! Input handling - key reading and translation

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Tab;
use crate::engine::Flag;

/// Something the user asked the trainer to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the trainer
    Quit,
    /// Switch to a tab
    ShowTab(Tab),
    /// Cycle to the next tab
    NextTab,
    /// Move focus to the next widget on the tab
    FocusNext,
    /// Move focus to the previous widget on the tab
    FocusPrev,
    /// Select the previous list item / lesson example
    Up,
    /// Select the next list item / lesson example
    Down,
    /// Previous lesson
    PageUp,
    /// Next lesson
    PageDown,
    /// Activate the focused item, or a newline in the subject field
    Enter,
    /// Toggle a regex flag
    ToggleFlag(Flag),
    /// Toggle the challenge hint
    ToggleHint,
    /// Put the challenge solution into the pattern field
    ShowSolution,
    /// Insert a character into the focused field
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    /// Clear the focused field
    ClearField,
    /// Redraw the whole screen
    Redraw,
}

/// Translate a crossterm KeyEvent to an action
pub fn translate_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent {
        code, modifiers, kind, ..
    } = event;

    // Presses only; a release or repeat would type into the fields twice
    if kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);

    match code {
        KeyCode::Char(ch) if ctrl => translate_ctrl(ch),
        KeyCode::Char(ch) if alt => translate_meta(ch),
        KeyCode::Char(ch) => Some(Action::Insert(ch)),
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::Delete),
        KeyCode::Home => Some(Action::Home),
        KeyCode::End => Some(Action::End),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Up => Some(Action::Up),
        KeyCode::Down => Some(Action::Down),
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::F(1) => Some(Action::ShowTab(Tab::Learn)),
        KeyCode::F(2) => Some(Action::ShowTab(Tab::Practice)),
        KeyCode::F(3) => Some(Action::ShowTab(Tab::Playground)),
        KeyCode::Esc => Some(Action::FocusPrev),
        _ => None,
    }
}

fn translate_ctrl(ch: char) -> Option<Action> {
    match ch.to_ascii_lowercase() {
        'q' | 'c' => Some(Action::Quit),
        'a' => Some(Action::Home),
        'e' => Some(Action::End),
        'b' => Some(Action::Left),
        'f' => Some(Action::Right),
        'd' => Some(Action::Delete),
        'u' => Some(Action::ClearField),
        'n' => Some(Action::Down),
        'p' => Some(Action::Up),
        't' => Some(Action::NextTab),
        'l' => Some(Action::Redraw),
        _ => None,
    }
}

fn translate_meta(ch: char) -> Option<Action> {
    match ch.to_ascii_lowercase() {
        'h' => Some(Action::ToggleHint),
        'a' => Some(Action::ShowSolution),
        code => Flag::from_code(code).map(Action::ToggleFlag),
    }
}
