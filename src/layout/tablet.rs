// SPDX-License-Identifier: GPL-3.0-only

//! Tablet layout composition.
//!
//! Tablets extend every character row with system keys instead of reserving
//! them for a single edge column: backspace trails the first row, a leading
//! spacer and the primary key frame the second, and the third is framed by
//! the side switcher on both edges with spacers keeping the characters
//! centered. The bottom row ends in a dismiss key and always reserves a
//! dictation slot.
//!
//! Composition expects at least three character rows. Debug builds assert on
//! fewer; release builds log a warning and degrade to a minimal grid so a
//! broken input set still produces a typeable keyboard.

use crate::keyboard::{KeyboardAction, KeyboardContext};
use crate::settings;

use super::actions::ActionRow;
use super::provider::{bottom_row_switcher, input_row_switcher};
use super::types::WidthPolicy;

/// Composes the full tablet action grid from the character rows.
pub fn compose(context: &KeyboardContext, mut rows: Vec<ActionRow>) -> Vec<ActionRow> {
    if rows.is_empty() {
        return vec![bottom_row(context)];
    }
    debug_assert!(
        rows.len() >= 3,
        "tablet composition needs at least 3 character rows, got {}",
        rows.len()
    );
    if rows.len() < 3 {
        tracing::warn!(
            rows = rows.len(),
            locale = %context.locale,
            "tablet composition expects at least 3 character rows, degrading"
        );
        if let Some(last) = rows.last_mut() {
            last.push(KeyboardAction::Backspace);
        }
        rows.push(bottom_row(context));
        return rows;
    }

    // Leading rows (numeric pads with a symbol row on top) pass through
    // untouched; only the last three rows get the system-key treatment.
    let third = rows.pop().unwrap_or_default();
    let second = rows.pop().unwrap_or_default();
    let first = rows.pop().unwrap_or_default();

    let mut first_row = first;
    first_row.push(KeyboardAction::Backspace);
    rows.push(first_row);

    let mut second_row = vec![KeyboardAction::None];
    second_row.extend(second);
    second_row.push(KeyboardAction::NewLine);
    rows.push(second_row);

    let mut third_row = ActionRow::new();
    if let Some(switcher) = input_row_switcher(&context.keyboard_type) {
        third_row.push(switcher.clone());
        third_row.push(KeyboardAction::None);
        third_row.extend(third);
        third_row.push(KeyboardAction::None);
        third_row.push(switcher);
    } else {
        third_row.extend(third);
    }
    rows.push(third_row);

    rows.push(bottom_row(context));
    rows
}

/// Builds the tablet system bottom row.
fn bottom_row(context: &KeyboardContext) -> ActionRow {
    let mut row = ActionRow::new();
    let switcher = bottom_row_switcher(&context.keyboard_type);
    if let Some(switcher) = &switcher {
        row.push(switcher.clone());
    }
    if context.needs_input_switcher {
        row.push(KeyboardAction::NextKeyboard);
    }
    row.push(
        context
            .dictation_replacement
            .clone()
            .unwrap_or(KeyboardAction::None),
    );
    row.push(KeyboardAction::Space);
    if let Some(switcher) = switcher {
        row.push(switcher);
    }
    row.push(KeyboardAction::DismissKeyboard);
    row
}

/// Tablet-specific fixed widths for system buttons.
pub fn width_override(action: &KeyboardAction, _row: usize) -> Option<WidthPolicy> {
    match action {
        KeyboardAction::Shift { .. }
        | KeyboardAction::Backspace
        | KeyboardAction::KeyboardType(_)
        | KeyboardAction::NextKeyboard
        | KeyboardAction::Dictation
        | KeyboardAction::DismissKeyboard => {
            Some(WidthPolicy::Percentage(settings::PAD_SHORT_BUTTON_SHARE))
        }
        KeyboardAction::NewLine => Some(WidthPolicy::Percentage(settings::PAD_LONG_BUTTON_SHARE)),
        KeyboardAction::None => Some(WidthPolicy::Percentage(settings::PAD_SPACER_SHARE)),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
