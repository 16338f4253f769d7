// SPDX-License-Identifier: GPL-3.0-only

//! Action-row builder: lifts raw character rows into typed action rows.
//!
//! For alphabetic keyboards the input rows are selected and shift-cased; for
//! numeric and symbolic keyboards they pass through unchanged; every other
//! keyboard type yields no character rows at all (the composers still add
//! the device bottom row). One character becomes exactly one action, and
//! both row order and character order are preserved.

use crate::input::{InputRow, InputSetProvider};
use crate::keyboard::{KeyboardAction, KeyboardContext, KeyboardType};

/// An ordered row of keyboard actions, one per physical keyboard row.
pub type ActionRow = Vec<KeyboardAction>;

/// The character rows for the context's keyboard type, shift adjusted.
pub fn input_rows(provider: &dyn InputSetProvider, context: &KeyboardContext) -> Vec<InputRow> {
    match &context.keyboard_type {
        KeyboardType::Alphabetic(state) => {
            let rows = provider.alphabetic_input_set(context).rows;
            if state.is_uppercased() { uppercased(&rows) } else { rows }
        }
        KeyboardType::Numeric => provider.numeric_input_set(context).rows,
        KeyboardType::Symbolic => provider.symbolic_input_set(context).rows,
        _ => Vec::new(),
    }
}

/// The action rows for the context's keyboard type.
pub fn action_rows(provider: &dyn InputSetProvider, context: &KeyboardContext) -> Vec<ActionRow> {
    input_rows(provider, context)
        .into_iter()
        .map(|row| row.into_iter().map(KeyboardAction::Character).collect())
        .collect()
}

/// Uppercases every entry of every row.
pub fn uppercased(rows: &[InputRow]) -> Vec<InputRow> {
    rows.iter()
        .map(|row| row.iter().map(|glyph| uppercase_glyph(glyph)).collect())
        .collect()
}

/// Lowercases every entry of every row.
pub fn lowercased(rows: &[InputRow]) -> Vec<InputRow> {
    rows.iter()
        .map(|row| row.iter().map(|glyph| glyph.to_lowercase()).collect())
        .collect()
}

/// Uppercases a single key glyph.
///
/// A key holds exactly one glyph, so mappings that expand to multiple
/// characters (such as `ß` to `SS`) are treated as unmappable and the glyph
/// is kept as-is.
fn uppercase_glyph(glyph: &str) -> String {
    let upper = glyph.to_uppercase();
    if upper.chars().count() == glyph.chars().count() {
        upper
    } else {
        glyph.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{StandardInputSetProvider, chars};
    use crate::keyboard::ShiftState;

    fn provider() -> StandardInputSetProvider {
        StandardInputSetProvider::new()
    }

    fn context(keyboard_type: KeyboardType) -> KeyboardContext {
        KeyboardContext::new().with_keyboard_type(keyboard_type)
    }

    /// Test 1: Lowercased alphabetic rows pass through unchanged
    #[test]
    fn test_alphabetic_lowercased_rows() {
        let rows = input_rows(
            &provider(),
            &context(KeyboardType::Alphabetic(ShiftState::Lowercased)),
        );
        assert_eq!(rows[0][0], "q");
        assert_eq!(rows[2], chars("zxcvbnm"));
    }

    /// Test 2: Uppercased and caps-locked states uppercase every character
    #[test]
    fn test_alphabetic_uppercased_rows() {
        for state in [ShiftState::Uppercased, ShiftState::CapsLocked] {
            let rows = input_rows(&provider(), &context(KeyboardType::Alphabetic(state)));
            assert_eq!(rows[0][0], "Q", "First key should uppercase under {:?}", state);
            assert_eq!(rows[2], chars("ZXCVBNM"));
        }
    }

    /// Test 3: Uppercasing twice is idempotent and lowercasing restores
    #[test]
    fn test_casing_round_trip() {
        let original = provider()
            .alphabetic_input_set(&context(KeyboardType::Alphabetic(ShiftState::Lowercased)))
            .rows;
        let upper = uppercased(&original);
        assert_eq!(uppercased(&upper), upper, "Uppercasing twice should be idempotent");
        assert_eq!(
            lowercased(&upper),
            original,
            "Lowercasing after uppercasing should restore the original rows"
        );
    }

    /// Test 4: Glyphs without a single-glyph uppercase form are kept as-is
    #[test]
    fn test_unmappable_glyph_is_noop() {
        let rows = vec![vec!["ß".to_string(), "a".to_string()]];
        let upper = uppercased(&rows);
        assert_eq!(upper[0][0], "ß", "ß expands to SS and must stay a single ß key");
        assert_eq!(upper[0][1], "A");
    }

    /// Test 5: Numeric and symbolic rows are never shift adjusted
    #[test]
    fn test_numeric_symbolic_pass_through() {
        let provider = provider();
        let numeric = input_rows(&provider, &context(KeyboardType::Numeric));
        assert_eq!(numeric, provider.numeric_input_set(&context(KeyboardType::Numeric)).rows);

        let symbolic = input_rows(&provider, &context(KeyboardType::Symbolic));
        assert_eq!(symbolic[0][0], "[");
    }

    /// Test 6: Non-input keyboard types yield an empty row set
    #[test]
    fn test_other_types_yield_no_rows() {
        for keyboard_type in [
            KeyboardType::Emojis,
            KeyboardType::Images,
            KeyboardType::Email,
            KeyboardType::Custom("notes".to_string()),
        ] {
            let rows = action_rows(&provider(), &context(keyboard_type.clone()));
            assert!(rows.is_empty(), "{:?} should yield no action rows", keyboard_type);
        }
    }

    /// Test 7: One action per character, order preserved, no drops or dupes
    #[test]
    fn test_one_action_per_character() {
        let provider = provider();
        for keyboard_type in [
            KeyboardType::Alphabetic(ShiftState::Uppercased),
            KeyboardType::Numeric,
            KeyboardType::Symbolic,
        ] {
            let context = context(keyboard_type);
            let characters: usize = input_rows(&provider, &context).iter().map(Vec::len).sum();
            let actions = action_rows(&provider, &context);
            let action_count: usize = actions.iter().map(Vec::len).sum();
            assert_eq!(action_count, characters, "Every character maps to one action");
            assert!(
                actions.iter().flatten().all(KeyboardAction::is_character),
                "Builder output should contain only character actions"
            );
        }
    }
}
