//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let table = [
            // Continuous scroll (vim-style)
            (KeyCode::Char('h'), KeyModifiers::NONE, KeyAction::ScrollLeft),
            (KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::ScrollRight),
            // Paging
            (KeyCode::Left, KeyModifiers::NONE, KeyAction::PrevPage),
            (KeyCode::Right, KeyModifiers::NONE, KeyAction::NextPage),
            (KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::FirstPage),
            (KeyCode::Home, KeyModifiers::NONE, KeyAction::FirstPage),
            (KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::LastPage),
            (KeyCode::End, KeyModifiers::NONE, KeyAction::LastPage),
            // Header affordance
            (KeyCode::Char('s'), KeyModifiers::NONE, KeyAction::Scan),
            // Action bar
            (KeyCode::Char('r'), KeyModifiers::NONE, KeyAction::RotateDocument),
            (KeyCode::Char('d'), KeyModifiers::NONE, KeyAction::DeleteDocument),
            // Application
            (KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit),
            (KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit),
        ];

        let bindings = table
            .into_iter()
            .map(|(code, modifiers, action)| (KeyEvent::new(code, modifiers), action))
            .collect();

        Self { bindings }
    }
}
