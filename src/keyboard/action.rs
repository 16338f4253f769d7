// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard actions.
//!
//! A [`KeyboardAction`] is the semantic effect a single button produces:
//! insert a character, delete backwards, switch keyboard type, and so on.
//! The layout engine only decides *which* action sits *where* and how wide
//! its button is; mapping an action to a text-edit operation or a gesture
//! handler is the host's job.

use serde::{Deserialize, Serialize};

use super::types::{KeyboardType, ShiftState};

/// A single semantic key effect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyboardAction {
    /// Insert the given text (one glyph per button).
    Character(String),
    /// Toggle shift; carries the state the keyboard was in when built.
    Shift {
        /// Shift state at composition time.
        current: ShiftState,
    },
    /// Delete backwards.
    Backspace,
    /// Insert a space.
    Space,
    /// Insert a newline / perform the primary action.
    NewLine,
    /// Switch to another keyboard type.
    KeyboardType(KeyboardType),
    /// Switch to the next system keyboard (the globe key).
    NextKeyboard,
    /// Dismiss the keyboard.
    DismissKeyboard,
    /// Start dictation.
    Dictation,
    /// Insert a tab.
    Tab,
    /// Empty spacer slot. Never receives gestures, renders as blank space.
    None,
    /// App-defined action identified by name.
    Custom(String),
}

impl KeyboardAction {
    /// Convenience constructor for a character action.
    pub fn character(text: impl Into<String>) -> Self {
        Self::Character(text.into())
    }

    /// Whether the action inserts a character.
    pub fn is_character(&self) -> bool {
        matches!(self, Self::Character(_))
    }

    /// Whether the action is a non-interactive spacer.
    pub fn is_spacer(&self) -> bool {
        matches!(self, Self::None)
    }
}

// ============================================================================
// Tests
// ============================================================================
