// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard context snapshot.
//!
//! [`KeyboardContext`] captures everything the layout engine needs to know
//! about the host at one moment: locale, active keyboard type, device class,
//! orientation, whether a system input-switch key must be shown, and the
//! optional action that stands in for dictation. The engine is pure with
//! respect to this snapshot: identical contexts produce identical layouts,
//! and concurrent computations over different snapshots never interfere.

use serde::{Deserialize, Serialize};

use super::action::KeyboardAction;
use super::types::{KeyboardType, ShiftState};
use crate::settings;

/// Device class, the primary axis controlling composition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceClass {
    /// Handset-sized device.
    Phone,
    /// Tablet-sized device.
    Pad,
}

/// Screen orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Taller than wide.
    Portrait,
    /// Wider than tall.
    Landscape,
}

/// Immutable snapshot of the host state for one layout computation.
///
/// Build a fresh context whenever any contributing input changes; the engine
/// holds no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardContext {
    /// Locale code used for input-set lookup (e.g. "en", "de").
    pub locale: String,

    /// Active keyboard type, including shift state for alphabetic keyboards.
    pub keyboard_type: KeyboardType,

    /// Phone or tablet.
    pub device_class: DeviceClass,

    /// Current screen orientation.
    pub orientation: Orientation,

    /// Whether the keyboard must show its own input-switch (globe) key.
    ///
    /// When `false` the OS already provides one and the engine must not add
    /// a duplicate; the phone bottom row shows an emoji-switch button in
    /// that slot instead.
    pub needs_input_switcher: bool,

    /// Action standing in for dictation, when the host supports it.
    ///
    /// `None` omits the slot on phones and inserts a spacer on tablets.
    pub dictation_replacement: Option<KeyboardAction>,
}

impl Default for KeyboardContext {
    fn default() -> Self {
        Self {
            locale: settings::FALLBACK_LOCALE.to_string(),
            keyboard_type: KeyboardType::Alphabetic(ShiftState::Lowercased),
            device_class: DeviceClass::Phone,
            orientation: Orientation::Portrait,
            needs_input_switcher: false,
            dictation_replacement: None,
        }
    }
}

impl KeyboardContext {
    /// Creates a context with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale code.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Sets the keyboard type.
    pub fn with_keyboard_type(mut self, keyboard_type: KeyboardType) -> Self {
        self.keyboard_type = keyboard_type;
        self
    }

    /// Sets the device class.
    pub fn with_device_class(mut self, device_class: DeviceClass) -> Self {
        self.device_class = device_class;
        self
    }

    /// Sets the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets whether the engine must add its own input-switch key.
    pub fn with_needs_input_switcher(mut self, needs: bool) -> Self {
        self.needs_input_switcher = needs;
        self
    }

    /// Sets the dictation replacement action.
    pub fn with_dictation_replacement(mut self, action: KeyboardAction) -> Self {
        self.dictation_replacement = Some(action);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test 1: Default context values
    #[test]
    fn test_default_context() {
        let context = KeyboardContext::default();
        assert_eq!(context.locale, "en");
        assert_eq!(
            context.keyboard_type,
            KeyboardType::Alphabetic(ShiftState::Lowercased)
        );
        assert_eq!(context.device_class, DeviceClass::Phone);
        assert_eq!(context.orientation, Orientation::Portrait);
        assert!(!context.needs_input_switcher);
        assert!(context.dictation_replacement.is_none());
    }

    /// Test 2: Builder chain sets every field
    #[test]
    fn test_builder_chain() {
        let context = KeyboardContext::new()
            .with_locale("sv")
            .with_keyboard_type(KeyboardType::Numeric)
            .with_device_class(DeviceClass::Pad)
            .with_orientation(Orientation::Landscape)
            .with_needs_input_switcher(true)
            .with_dictation_replacement(KeyboardAction::Dictation);

        assert_eq!(context.locale, "sv");
        assert_eq!(context.keyboard_type, KeyboardType::Numeric);
        assert_eq!(context.device_class, DeviceClass::Pad);
        assert_eq!(context.orientation, Orientation::Landscape);
        assert!(context.needs_input_switcher);
        assert_eq!(context.dictation_replacement, Some(KeyboardAction::Dictation));
    }

    /// Test 3: Contexts are plain comparable values
    #[test]
    fn test_context_equality() {
        let a = KeyboardContext::new().with_locale("de");
        let b = KeyboardContext::new().with_locale("de");
        let c = KeyboardContext::new().with_locale("it");
        assert_eq!(a, b, "Identical snapshots should compare equal");
        assert_ne!(a, c, "Different locales should not compare equal");
    }
}
