// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard layout composition for touch devices.
//!
//! Composes a complete soft-keyboard layout from a locale, a keyboard type
//! and a device context. The pipeline runs in pure stages:
//!
//! 1. The [`input`] module resolves the locale to character rows (the
//!    alphabetic, numeric and symbolic input sets).
//! 2. The [`layout`] module maps the characters to actions, adds the system
//!    keys for the device class, and resolves button widths.
//!
//! The engine holds no state: identical [`keyboard::KeyboardContext`]
//! snapshots always produce identical layouts, and the returned
//! [`layout::KeyboardLayout`] is plain data the host can render, splice or
//! serialize freely.
//!
//! # Example
//!
//! ```
//! use tapboard::input::StandardInputSetProvider;
//! use tapboard::keyboard::KeyboardContext;
//! use tapboard::layout;
//!
//! let inputs = StandardInputSetProvider::new();
//! let context = KeyboardContext::new().with_locale("de");
//! let keyboard = layout::keyboard_layout(&context, &inputs);
//! assert_eq!(keyboard.rows.len(), 4);
//! ```

pub mod input;
pub mod keyboard;
pub mod layout;
pub mod settings;

// ============================================================================
// Integration Tests
// ============================================================================
