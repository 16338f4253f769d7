// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard type and shift state.
//!
//! A [`KeyboardType`] names which keyboard is currently shown. The three
//! input-bearing types (alphabetic, numeric, symbolic) are the ones the
//! composition engine builds character grids for; every other type produces
//! an empty character grid and only the device bottom row.

use serde::{Deserialize, Serialize};

/// The shift states an alphabetic keyboard can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftState {
    /// No shift applied, characters are lowercase.
    Lowercased,
    /// Shift applied for the next input.
    Uppercased,
    /// Shift locked until explicitly released.
    CapsLocked,
}

impl ShiftState {
    /// Whether characters should be rendered and emitted in uppercase.
    pub fn is_uppercased(self) -> bool {
        match self {
            Self::Lowercased => false,
            Self::Uppercased | Self::CapsLocked => true,
        }
    }
}

/// The keyboard types that can be bound to a switcher action.
///
/// App-specific keyboards that are not represented here can use `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyboardType {
    /// Character keyboard with a shift state.
    Alphabetic(ShiftState),
    /// Digits and common punctuation.
    Numeric,
    /// Symbols and currency characters.
    Symbolic,
    /// Email-optimized keyboard.
    Email,
    /// Emoji picker keyboard.
    Emojis,
    /// Image picker keyboard.
    Images,
    /// App-defined keyboard identified by name.
    Custom(String),
}

impl KeyboardType {
    /// Stable identifier for the keyboard type.
    ///
    /// Alphabetic keyboards share one id regardless of shift state.
    pub fn id(&self) -> &str {
        match self {
            Self::Alphabetic(_) => "alphabetic",
            Self::Numeric => "numeric",
            Self::Symbolic => "symbolic",
            Self::Email => "email",
            Self::Emojis => "emojis",
            Self::Images => "images",
            Self::Custom(name) => name,
        }
    }

    /// Whether the keyboard type is alphabetic, in any shift state.
    pub fn is_alphabetic(&self) -> bool {
        matches!(self, Self::Alphabetic(_))
    }

    /// Whether the keyboard type is alphabetic with a certain shift state.
    pub fn is_alphabetic_with(&self, state: ShiftState) -> bool {
        match self {
            Self::Alphabetic(current) => *current == state,
            _ => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
