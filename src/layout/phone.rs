// SPDX-License-Identifier: GPL-3.0-only

//! Phone layout composition.
//!
//! Phones get the compact treatment: the last character row is framed by the
//! side switcher and backspace, then a single system bottom row is appended.
//! The bottom row carries the type switcher, the globe key (or the emoji
//! switcher when the host owns input switching), optional dictation, space
//! and the primary key.

use crate::keyboard::{KeyboardAction, KeyboardContext, KeyboardType, Orientation};
use crate::settings;

use super::actions::ActionRow;
use super::provider::{bottom_row_switcher, input_row_switcher};
use super::types::WidthPolicy;

/// Composes the full phone action grid from the character rows.
pub fn compose(context: &KeyboardContext, mut rows: Vec<ActionRow>) -> Vec<ActionRow> {
    if let Some(mut last) = rows.pop() {
        if let Some(switcher) = input_row_switcher(&context.keyboard_type) {
            last.insert(0, switcher);
        }
        last.push(KeyboardAction::Backspace);
        rows.push(last);
    }
    rows.push(bottom_row(context));
    rows
}

/// Builds the phone system bottom row.
fn bottom_row(context: &KeyboardContext) -> ActionRow {
    let mut row = ActionRow::new();
    if let Some(switcher) = bottom_row_switcher(&context.keyboard_type) {
        row.push(switcher);
    }
    if context.needs_input_switcher {
        row.push(KeyboardAction::NextKeyboard);
    } else {
        row.push(KeyboardAction::KeyboardType(KeyboardType::Emojis));
    }
    if context.orientation == Orientation::Portrait {
        if let Some(dictation) = &context.dictation_replacement {
            row.push(dictation.clone());
        }
    }
    row.push(KeyboardAction::Space);
    row.push(KeyboardAction::NewLine);
    if context.orientation == Orientation::Landscape {
        if let Some(dictation) = &context.dictation_replacement {
            row.push(dictation.clone());
        }
    }
    row
}

/// Phone-specific fixed widths for system buttons.
pub fn width_override(action: &KeyboardAction, _row: usize) -> Option<WidthPolicy> {
    match action {
        KeyboardAction::Shift { .. }
        | KeyboardAction::Backspace
        | KeyboardAction::KeyboardType(_)
        | KeyboardAction::NextKeyboard
        | KeyboardAction::Dictation => {
            Some(WidthPolicy::Percentage(settings::PHONE_SHORT_BUTTON_SHARE))
        }
        KeyboardAction::NewLine => Some(WidthPolicy::Percentage(settings::PHONE_LONG_BUTTON_SHARE)),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
