// SPDX-License-Identifier: GPL-3.0-only

//! Layout composition pipeline.
//!
//! Turns the character rows delivered by the input module into a complete,
//! device-appropriate [`KeyboardLayout`]:
//!
//! - [`actions`] maps input rows to action rows, applying shift casing.
//! - [`phone`] and [`tablet`] add the system keys for their device class.
//! - [`provider`] drives the pipeline and assigns width policies.
//! - [`width`] resolves width policies to points for a concrete row width.
//! - [`types`] holds the shared layout data model.

pub mod actions;
pub mod phone;
pub mod provider;
pub mod tablet;
pub mod types;
pub mod width;

pub use actions::{ActionRow, action_rows, input_rows, lowercased, uppercased};
pub use provider::{
    bottom_row_switcher, input_row_switcher, keyboard_layout, keyboard_layout_with_dimensions,
};
pub use types::{
    EdgeInsets, KeyboardLayout, LayoutDimensions, LayoutItem, LayoutRow, WidthPolicy,
};
pub use width::{resolve_layout_widths, resolve_row_widths};
