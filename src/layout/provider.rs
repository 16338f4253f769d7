// SPDX-License-Identifier: GPL-3.0-only

//! Standard layout provider: composes action rows into a full layout.
//!
//! This is the engine's entry point. It builds the action rows for the
//! context, hands them to the phone or tablet composer selected by the
//! context's device class, assigns a width policy to every action, and wraps
//! the result into an immutable [`KeyboardLayout`].
//!
//! # Width policy defaults
//!
//! Absent a device override, `Character` actions on the first row get
//! `Reference(Available)`, `Character` actions on any later row get
//! `UseReference`, and every other action gets `Available`. The composers
//! override this per action (fixed percentage widths for system buttons).

use crate::input::InputSetProvider;
use crate::keyboard::{DeviceClass, KeyboardAction, KeyboardContext, KeyboardType, ShiftState};

use super::actions::{self, ActionRow};
use super::types::{KeyboardLayout, LayoutDimensions, LayoutItem, LayoutRow, WidthPolicy};
use super::{phone, tablet};

/// The switcher action for the device bottom row.
///
/// Alphabetic keyboards switch to numeric; numeric and symbolic keyboards
/// switch back to lowercased alphabetic; other types have no switcher.
pub fn bottom_row_switcher(keyboard_type: &KeyboardType) -> Option<KeyboardAction> {
    match keyboard_type {
        KeyboardType::Alphabetic(_) => {
            Some(KeyboardAction::KeyboardType(KeyboardType::Numeric))
        }
        KeyboardType::Numeric | KeyboardType::Symbolic => Some(KeyboardAction::KeyboardType(
            KeyboardType::Alphabetic(ShiftState::Lowercased),
        )),
        _ => None,
    }
}

/// The switcher action attached to the last character row.
///
/// Shift for alphabetic (carrying the current state), symbolic for numeric,
/// numeric for symbolic; other types have no side switcher.
pub fn input_row_switcher(keyboard_type: &KeyboardType) -> Option<KeyboardAction> {
    match keyboard_type {
        KeyboardType::Alphabetic(state) => Some(KeyboardAction::Shift { current: *state }),
        KeyboardType::Numeric => Some(KeyboardAction::KeyboardType(KeyboardType::Symbolic)),
        KeyboardType::Symbolic => Some(KeyboardAction::KeyboardType(KeyboardType::Numeric)),
        _ => None,
    }
}

/// Default width policy for an action at a row index.
pub(crate) fn default_width(action: &KeyboardAction, row: usize) -> WidthPolicy {
    match action {
        KeyboardAction::Character(_) if row == 0 => WidthPolicy::reference(WidthPolicy::Available),
        KeyboardAction::Character(_) => WidthPolicy::UseReference,
        _ => WidthPolicy::Available,
    }
}

/// Composes the keyboard layout for a context with standard dimensions.
pub fn keyboard_layout(
    context: &KeyboardContext,
    inputs: &dyn InputSetProvider,
) -> KeyboardLayout {
    keyboard_layout_with_dimensions(context, inputs, &LayoutDimensions::default())
}

/// Composes the keyboard layout for a context with explicit dimensions.
pub fn keyboard_layout_with_dimensions(
    context: &KeyboardContext,
    inputs: &dyn InputSetProvider,
    dimensions: &LayoutDimensions,
) -> KeyboardLayout {
    let action_rows = actions::action_rows(inputs, context);
    let composed = match context.device_class {
        DeviceClass::Phone => phone::compose(context, action_rows),
        DeviceClass::Pad => tablet::compose(context, action_rows),
    };
    let width_override: fn(&KeyboardAction, usize) -> Option<WidthPolicy> =
        match context.device_class {
            DeviceClass::Phone => phone::width_override,
            DeviceClass::Pad => tablet::width_override,
        };

    let rows: Vec<LayoutRow> = composed
        .into_iter()
        .enumerate()
        .map(|(row_index, row)| layout_row(row, row_index, width_override, dimensions))
        .collect();

    tracing::trace!(
        locale = %context.locale,
        keyboard_type = context.keyboard_type.id(),
        rows = rows.len(),
        "composed keyboard layout"
    );
    KeyboardLayout::new(rows)
}

/// Decorates one action row with width policies and geometry.
fn layout_row(
    row: ActionRow,
    row_index: usize,
    width_override: fn(&KeyboardAction, usize) -> Option<WidthPolicy>,
    dimensions: &LayoutDimensions,
) -> LayoutRow {
    let items = row
        .into_iter()
        .map(|action| {
            let width = width_override(&action, row_index)
                .unwrap_or_else(|| default_width(&action, row_index));
            LayoutItem {
                action,
                width,
                height: dimensions.row_height,
                insets: dimensions.insets,
            }
        })
        .collect();
    LayoutRow { items }
}

// ============================================================================
// Tests
// ============================================================================
