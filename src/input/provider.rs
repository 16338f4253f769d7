// SPDX-License-Identifier: GPL-3.0-only

//! Input-set provider trait and the standard locale-dispatching provider.

use std::collections::HashMap;

use super::locales::{
    EnglishInputSetProvider, GermanInputSetProvider, ItalianInputSetProvider, LocaleKey,
    SwedishInputSetProvider,
};
use super::types::InputSet;
use crate::keyboard::KeyboardContext;

/// Provides the three input sets for a context.
///
/// Implementations must be pure: the same context yields the same sets, and
/// nothing is cached across context changes.
pub trait InputSetProvider: Send + Sync {
    /// The character rows for the alphabetic keyboard.
    ///
    /// Characters are not shift adjusted; casing is applied later by the
    /// action-row builder.
    fn alphabetic_input_set(&self, context: &KeyboardContext) -> InputSet;

    /// The character rows for the numeric keyboard.
    fn numeric_input_set(&self, context: &KeyboardContext) -> InputSet;

    /// The character rows for the symbolic keyboard.
    fn symbolic_input_set(&self, context: &KeyboardContext) -> InputSet;
}

/// Standard provider: exact locale-code lookup with an English fallback.
///
/// The locale map is fixed at construction. A lookup miss delegates to the
/// English registry; this is the documented default for unknown locales and
/// is logged at debug level, never surfaced as an error.
pub struct StandardInputSetProvider {
    providers: HashMap<String, Box<dyn InputSetProvider>>,
    fallback: EnglishInputSetProvider,
}

impl StandardInputSetProvider {
    /// Creates a provider with every shipped locale registered.
    pub fn new() -> Self {
        let mut providers: HashMap<String, Box<dyn InputSetProvider>> = HashMap::new();
        providers.insert(
            LocaleKey::English.code().to_string(),
            Box::new(EnglishInputSetProvider),
        );
        providers.insert(
            LocaleKey::German.code().to_string(),
            Box::new(GermanInputSetProvider),
        );
        providers.insert(
            LocaleKey::Italian.code().to_string(),
            Box::new(ItalianInputSetProvider),
        );
        providers.insert(
            LocaleKey::Swedish.code().to_string(),
            Box::new(SwedishInputSetProvider),
        );
        Self {
            providers,
            fallback: EnglishInputSetProvider,
        }
    }

    /// Resolves the registry for a locale code, falling back to English.
    fn provider_for(&self, locale: &str) -> &dyn InputSetProvider {
        match self.providers.get(locale) {
            Some(provider) => provider.as_ref(),
            None => {
                tracing::debug!(locale, "no input set registry for locale, using English");
                &self.fallback
            }
        }
    }
}

impl Default for StandardInputSetProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSetProvider for StandardInputSetProvider {
    fn alphabetic_input_set(&self, context: &KeyboardContext) -> InputSet {
        self.provider_for(&context.locale).alphabetic_input_set(context)
    }

    fn numeric_input_set(&self, context: &KeyboardContext) -> InputSet {
        self.provider_for(&context.locale).numeric_input_set(context)
    }

    fn symbolic_input_set(&self, context: &KeyboardContext) -> InputSet {
        self.provider_for(&context.locale).symbolic_input_set(context)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::DeviceClass;

    /// Test 1: Known locales delegate to their registry
    #[test]
    fn test_known_locale_delegation() {
        let provider = StandardInputSetProvider::new();
        let context = KeyboardContext::new().with_locale("de");
        let expected = GermanInputSetProvider.alphabetic_input_set(&context);
        assert_eq!(provider.alphabetic_input_set(&context), expected);
    }

    /// Test 2: Unknown locale falls back to English exactly, row for row
    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        let provider = StandardInputSetProvider::new();
        for device in [DeviceClass::Phone, DeviceClass::Pad] {
            let unknown = KeyboardContext::new()
                .with_locale("xx")
                .with_device_class(device);
            let english = KeyboardContext::new()
                .with_locale("en")
                .with_device_class(device);

            assert_eq!(
                provider.alphabetic_input_set(&unknown),
                provider.alphabetic_input_set(&english),
                "Unknown locale alphabetic rows should equal English on {:?}",
                device
            );
            let numeric = provider.numeric_input_set(&unknown);
            assert_eq!(numeric, provider.numeric_input_set(&english));
            assert!(
                numeric.rows[1].contains(&"$".to_string()),
                "Fallback numeric rows should carry the English $ currency"
            );
            assert_eq!(
                provider.symbolic_input_set(&unknown),
                provider.symbolic_input_set(&english)
            );
        }
    }

    /// Test 3: Lookup is by exact locale code, no prefix matching
    #[test]
    fn test_lookup_is_exact() {
        let provider = StandardInputSetProvider::new();
        let regional = KeyboardContext::new().with_locale("de-AT");
        let english = KeyboardContext::new().with_locale("en");
        assert_eq!(
            provider.alphabetic_input_set(&regional),
            provider.alphabetic_input_set(&english),
            "Regional variants are not registered and should fall back"
        );
    }

    /// Test 4: Resolution is on demand, not cached across context changes
    #[test]
    fn test_resolution_follows_context() {
        let provider = StandardInputSetProvider::new();
        let swedish = KeyboardContext::new().with_locale("sv");
        let italian = KeyboardContext::new().with_locale("it");
        let first = provider.alphabetic_input_set(&swedish);
        let second = provider.alphabetic_input_set(&italian);
        assert_ne!(first, second, "Provider should track the context locale");
        assert_eq!(provider.alphabetic_input_set(&swedish), first);
    }
}
