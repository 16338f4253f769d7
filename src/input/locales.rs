// SPDX-License-Identifier: GPL-3.0-only

//! Per-locale input-set registries.
//!
//! Each registry defines its locale's top and middle alphabetic rows
//! verbatim, derives the bottom row from a base character string, and names
//! the currency symbols the standard numeric/symbolic tables embed. Nothing
//! else in the engine knows about locales.

use serde::{Deserialize, Serialize};

use super::provider::InputSetProvider;
use super::types::{InputSet, chars};
use crate::keyboard::KeyboardContext;

/// The locales shipped with the standard provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocaleKey {
    /// English ("en").
    English,
    /// German ("de").
    German,
    /// Italian ("it").
    Italian,
    /// Swedish ("sv").
    Swedish,
}

impl LocaleKey {
    /// Every shipped locale, for registration and property tests.
    pub const ALL: [Self; 4] = [Self::English, Self::German, Self::Italian, Self::Swedish];

    /// The locale code used as lookup key.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
            Self::Italian => "it",
            Self::Swedish => "sv",
        }
    }
}

/// English input sets. Also the fallback registry for unknown locales.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInputSetProvider;

impl InputSetProvider for EnglishInputSetProvider {
    fn alphabetic_input_set(&self, context: &KeyboardContext) -> InputSet {
        InputSet::new(vec![
            chars("qwertyuiop"),
            chars("asdfghjkl"),
            InputSet::standard_alphabetic_bottom_row(context.device_class, "zxcvbnm"),
        ])
    }

    fn numeric_input_set(&self, context: &KeyboardContext) -> InputSet {
        InputSet::standard_numeric(context.device_class, "$")
    }

    fn symbolic_input_set(&self, context: &KeyboardContext) -> InputSet {
        InputSet::standard_symbolic(context.device_class, &["€", "£", "¥"])
    }
}

/// German input sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanInputSetProvider;

impl InputSetProvider for GermanInputSetProvider {
    fn alphabetic_input_set(&self, context: &KeyboardContext) -> InputSet {
        InputSet::new(vec![
            chars("qwertzuiopü"),
            chars("asdfghjklöä"),
            InputSet::standard_alphabetic_bottom_row(context.device_class, "yxcvbnm"),
        ])
    }

    fn numeric_input_set(&self, context: &KeyboardContext) -> InputSet {
        InputSet::standard_numeric(context.device_class, "€")
    }

    fn symbolic_input_set(&self, context: &KeyboardContext) -> InputSet {
        InputSet::standard_symbolic(context.device_class, &["$", "£", "¥"])
    }
}

/// Italian input sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItalianInputSetProvider;

impl InputSetProvider for ItalianInputSetProvider {
    fn alphabetic_input_set(&self, context: &KeyboardContext) -> InputSet {
        InputSet::new(vec![
            chars("qwertyuiop"),
            chars("asdfghjkl"),
            InputSet::standard_alphabetic_bottom_row(context.device_class, "zxcvbnm"),
        ])
    }

    fn numeric_input_set(&self, context: &KeyboardContext) -> InputSet {
        InputSet::standard_numeric(context.device_class, "€")
    }

    fn symbolic_input_set(&self, context: &KeyboardContext) -> InputSet {
        InputSet::standard_symbolic(context.device_class, &["$", "£", "¥"])
    }
}

/// Swedish input sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwedishInputSetProvider;

impl InputSetProvider for SwedishInputSetProvider {
    fn alphabetic_input_set(&self, context: &KeyboardContext) -> InputSet {
        InputSet::new(vec![
            chars("qwertyuiopå"),
            chars("asdfghjklöä"),
            InputSet::standard_alphabetic_bottom_row(context.device_class, "zxcvbnm"),
        ])
    }

    fn numeric_input_set(&self, context: &KeyboardContext) -> InputSet {
        InputSet::standard_numeric(context.device_class, "kr")
    }

    fn symbolic_input_set(&self, context: &KeyboardContext) -> InputSet {
        InputSet::standard_symbolic(context.device_class, &["€", "$", "£"])
    }
}

// ============================================================================
// Tests
// ============================================================================
