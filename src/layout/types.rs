// SPDX-License-Identifier: GPL-3.0-only

//! Layout data model.
//!
//! A [`KeyboardLayout`] is the engine's sole output: ordered rows of
//! [`LayoutItem`]s, each pairing a keyboard action with a width policy, a
//! fixed height and edge insets. Layouts are plain immutable values; hosts
//! may clone and splice them freely (for example to insert an extra button
//! next to the space key) and consumers only ever read them.

use serde::{Deserialize, Serialize};

use crate::keyboard::KeyboardAction;
use crate::settings;

/// Width policy for one layout item.
///
/// Policies are resolved per row by the width engine; see
/// [`resolve_row_widths`](crate::layout::resolve_row_widths) for the exact
/// semantics and ordering rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WidthPolicy {
    /// Share the remaining row space equally with other `Available` items.
    Available,
    /// A fraction of the total row width (not of the remaining space).
    Percentage(f32),
    /// A fixed absolute width in points.
    Points(f32),
    /// Resolve the inner policy, use the result, and publish it as the
    /// current reference width for later `UseReference` items.
    Reference(Box<WidthPolicy>),
    /// Use the most recently published reference width. Falls back to
    /// `Available` when nothing has been published yet in this pass.
    UseReference,
}

impl WidthPolicy {
    /// Convenience constructor for a reference policy.
    pub fn reference(inner: WidthPolicy) -> Self {
        Self::Reference(Box::new(inner))
    }
}

/// Edge padding applied identically to every item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Top inset in points.
    pub top: f32,
    /// Leading inset in points.
    pub leading: f32,
    /// Bottom inset in points.
    pub bottom: f32,
    /// Trailing inset in points.
    pub trailing: f32,
}

impl EdgeInsets {
    /// The standard keyboard button insets.
    pub fn standard() -> Self {
        Self {
            top: settings::STANDARD_INSET_VERTICAL,
            leading: settings::STANDARD_INSET_HORIZONTAL,
            bottom: settings::STANDARD_INSET_VERTICAL,
            trailing: settings::STANDARD_INSET_HORIZONTAL,
        }
    }

    /// Combined top and bottom inset.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Combined leading and trailing inset.
    pub fn horizontal(&self) -> f32 {
        self.leading + self.trailing
    }
}

impl Default for EdgeInsets {
    fn default() -> Self {
        Self::standard()
    }
}

/// One rendered button: an action plus its geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    /// The action this button performs.
    pub action: KeyboardAction,
    /// Width policy, resolved later against the row width.
    pub width: WidthPolicy,
    /// Full slot height in points, uniform across the layout.
    pub height: f32,
    /// Edge padding inside the slot.
    pub insets: EdgeInsets,
}

impl LayoutItem {
    /// Visible content height: the slot height minus vertical insets.
    pub fn content_height(&self) -> f32 {
        self.height - self.insets.vertical()
    }
}

/// An ordered row of layout items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRow {
    /// Items left to right.
    pub items: Vec<LayoutItem>,
}

/// The engine's output: ordered rows of sized, typed actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardLayout {
    /// Rows top to bottom.
    pub rows: Vec<LayoutRow>,
}

impl KeyboardLayout {
    /// Creates a layout from rows.
    pub fn new(rows: Vec<LayoutRow>) -> Self {
        Self { rows }
    }

    /// Iterates over every action in row order, left to right.
    pub fn actions(&self) -> impl Iterator<Item = &KeyboardAction> {
        self.rows.iter().flat_map(|row| row.items.iter().map(|item| &item.action))
    }
}

/// Uniform geometry configuration for a layout computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutDimensions {
    /// Slot height for every row in points.
    pub row_height: f32,
    /// Edge padding for every item.
    pub insets: EdgeInsets,
}

impl Default for LayoutDimensions {
    fn default() -> Self {
        Self {
            row_height: settings::STANDARD_ROW_HEIGHT,
            insets: EdgeInsets::standard(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
