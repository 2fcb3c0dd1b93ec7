//! Input processing for the terminal frontend.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent};

/// Commands available on the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    Up,
    Down,
    Select,
    Quit,
    None,
}

pub fn menu_command(key: &KeyEvent) -> MenuCommand {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => MenuCommand::Up,
        KeyCode::Down | KeyCode::Char('j') => MenuCommand::Down,
        KeyCode::Enter => MenuCommand::Select,
        KeyCode::Char('q') | KeyCode::Esc => MenuCommand::Quit,
        _ => MenuCommand::None,
    }
}

/// Commands available in the movie list browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListCommand {
    Up,
    Down,
    Rate,
    Delete,
    Edit,
    Find,
    Sort,
    Back,
    None,
}

pub fn list_command(key: &KeyEvent) -> ListCommand {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => ListCommand::Up,
        KeyCode::Down | KeyCode::Char('j') => ListCommand::Down,
        KeyCode::Char('r') => ListCommand::Rate,
        KeyCode::Char('d') => ListCommand::Delete,
        KeyCode::Char('e') => ListCommand::Edit,
        KeyCode::Char('/') => ListCommand::Find,
        KeyCode::Char('s') => ListCommand::Sort,
        KeyCode::Char('q') | KeyCode::Esc => ListCommand::Back,
        _ => ListCommand::None,
    }
}

/// Commands for free-text entry (form fields, the find prompt).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextCommand {
    Insert(char),
    Backspace,
    Submit,
    Cancel,
    None,
}

pub fn text_command(key: &KeyEvent) -> TextCommand {
    match key.code {
        KeyCode::Char(ch) => TextCommand::Insert(ch),
        KeyCode::Backspace => TextCommand::Backspace,
        KeyCode::Enter => TextCommand::Submit,
        KeyCode::Esc => TextCommand::Cancel,
        _ => TextCommand::None,
    }
}

/// Commands for single-keystroke prompts (rating, delete confirmation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptCommand {
    Key(char),
    Cancel,
    None,
}

pub fn prompt_command(key: &KeyEvent) -> PromptCommand {
    match key.code {
        KeyCode::Char(ch) => PromptCommand::Key(ch),
        KeyCode::Esc => PromptCommand::Cancel,
        _ => PromptCommand::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_menu_keys() {
        assert_eq!(menu_command(&key(KeyCode::Up)), MenuCommand::Up);
        assert_eq!(menu_command(&key(KeyCode::Char('j'))), MenuCommand::Down);
        assert_eq!(menu_command(&key(KeyCode::Enter)), MenuCommand::Select);
        assert_eq!(menu_command(&key(KeyCode::Char('q'))), MenuCommand::Quit);
        assert_eq!(menu_command(&key(KeyCode::Char('x'))), MenuCommand::None);
    }

    #[test]
    fn maps_list_keys() {
        assert_eq!(list_command(&key(KeyCode::Char('r'))), ListCommand::Rate);
        assert_eq!(list_command(&key(KeyCode::Char('d'))), ListCommand::Delete);
        assert_eq!(list_command(&key(KeyCode::Char('e'))), ListCommand::Edit);
        assert_eq!(list_command(&key(KeyCode::Char('/'))), ListCommand::Find);
        assert_eq!(list_command(&key(KeyCode::Char('s'))), ListCommand::Sort);
        assert_eq!(list_command(&key(KeyCode::Esc)), ListCommand::Back);
        assert_eq!(list_command(&key(KeyCode::Char('z'))), ListCommand::None);
    }

    #[test]
    fn text_entry_keeps_raw_characters() {
        assert_eq!(
            text_command(&key(KeyCode::Char('|'))),
            TextCommand::Insert('|')
        );
        assert_eq!(text_command(&key(KeyCode::Backspace)), TextCommand::Backspace);
        assert_eq!(text_command(&key(KeyCode::Enter)), TextCommand::Submit);
        assert_eq!(text_command(&key(KeyCode::Esc)), TextCommand::Cancel);
    }

    #[test]
    fn prompt_passes_keystroke_through() {
        assert_eq!(prompt_command(&key(KeyCode::Char('3'))), PromptCommand::Key('3'));
        assert_eq!(prompt_command(&key(KeyCode::Esc)), PromptCommand::Cancel);
        assert_eq!(prompt_command(&key(KeyCode::Tab)), PromptCommand::None);
    }
}
