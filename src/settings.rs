// SPDX-License-Identifier: GPL-3.0-only

//! Centralized layout constants.
//!
//! These values define the standard button geometry used when the host does
//! not supply its own [`LayoutDimensions`](crate::layout::LayoutDimensions),
//! plus the percentage shares the device composers assign to system buttons.

/// Standard keyboard row height in points.
pub const STANDARD_ROW_HEIGHT: f32 = 48.0;

/// Standard vertical button inset in points (applied top and bottom).
pub const STANDARD_INSET_VERTICAL: f32 = 4.0;

/// Standard horizontal button inset in points (applied leading and trailing).
pub const STANDARD_INSET_HORIZONTAL: f32 = 3.0;

/// Row-width share of a short system button on phones (shift, backspace).
pub const PHONE_SHORT_BUTTON_SHARE: f32 = 0.13;

/// Row-width share of a long system button on phones (newline).
pub const PHONE_LONG_BUTTON_SHARE: f32 = 0.24;

/// Row-width share of a short system button on tablets.
pub const PAD_SHORT_BUTTON_SHARE: f32 = 0.11;

/// Row-width share of a long system button on tablets (newline).
pub const PAD_LONG_BUTTON_SHARE: f32 = 0.24;

/// Row-width share of a `None` spacer slot on tablets, half a short button.
pub const PAD_SPACER_SHARE: f32 = 0.055;

/// Locale code the input-set registry falls back to for unknown locales.
pub const FALLBACK_LOCALE: &str = "en";
