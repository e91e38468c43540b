//! Keyboard dispatch.
//!
//! One component owns every key binding and routes to the editor's
//! intent reducer, instead of scattering listener registrations across
//! interactive components.

use crate::commands::EditorCommand;
use crate::editor::EditorState;

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Delete,
}

/// A key press with modifier state. `ctrl` covers both Ctrl and Cmd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyEvent {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            ctrl: true,
            shift: false,
        }
    }
}

/// Maps a key press to an editor intent, honoring the current session
/// state (zoom bindings only fire while the pointer is over the
/// canvas, copy requires a selection, paste requires a clipboard).
pub fn dispatch(event: KeyEvent, state: &EditorState) -> Option<EditorCommand> {
    if event.ctrl {
        return match event.key {
            Key::Char('c') if state.selected_panel.is_some() => {
                Some(EditorCommand::CopySelected)
            }
            Key::Char('v') if state.copied_panel.is_some() => Some(EditorCommand::Paste),
            Key::Char('z') => Some(EditorCommand::Undo),
            Key::Char('y') => Some(EditorCommand::Redo),
            Key::Char('=') | Key::Char('+') if state.pointer_on_canvas => {
                Some(EditorCommand::ZoomIn)
            }
            Key::Char('-') if state.pointer_on_canvas => Some(EditorCommand::ZoomOut),
            Key::Char('0') if state.pointer_on_canvas => Some(EditorCommand::ResetZoom),
            _ => None,
        };
    }

    match event.key {
        Key::Escape if state.interaction.editing_panel().is_some() => {
            Some(EditorCommand::CancelTextEdit)
        }
        Key::Escape => Some(EditorCommand::Escape),
        Key::Enter if !event.shift && state.interaction.editing_panel().is_some() => {
            Some(EditorCommand::CommitTextEdit)
        }
        Key::Delete if state.selected_panel.is_some() => Some(EditorCommand::RemoveSelected),
        _ => None,
    }
}
