// SPDX-License-Identifier: GPL-3.0-only

//! Input sets: the raw character rows behind each keyboard.
//!
//! An [`InputSet`] holds the three character rows (top/middle/bottom) for one
//! keyboard kind (alphabetic, numeric or symbolic) before any action or
//! width decoration. Rows vary per locale and per device class, but the row
//! count is always three.
//!
//! # Resolution
//!
//! The [`StandardInputSetProvider`] maps locale codes to per-locale
//! registries and delegates. Unknown locales fall back to the English
//! registry; this is documented default behavior, not an error, and is the
//! only place locale-specific character tables and currency symbols are
//! chosen.
//!
//! # Example
//!
//! ```rust,ignore
//! use tapboard::input::{InputSetProvider, StandardInputSetProvider};
//! use tapboard::keyboard::KeyboardContext;
//!
//! let provider = StandardInputSetProvider::new();
//! let context = KeyboardContext::new().with_locale("sv");
//! let alphabetic = provider.alphabetic_input_set(&context);
//! assert_eq!(alphabetic.rows.len(), 3);
//! ```

// Sub-modules
pub mod locales;
pub mod provider;
pub mod types;

// Re-export public API
pub use locales::{
    EnglishInputSetProvider, GermanInputSetProvider, ItalianInputSetProvider, LocaleKey,
    SwedishInputSetProvider,
};
pub use provider::{InputSetProvider, StandardInputSetProvider};
pub use types::{InputRow, InputSet, chars};
