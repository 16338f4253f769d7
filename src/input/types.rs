// SPDX-License-Identifier: GPL-3.0-only

//! Input set data model and the shared standard row tables.
//!
//! Numeric and symbolic keyboards look the same across locales apart from
//! the currency characters, so their rows are built by `standard_*`
//! constructors parameterized by currency. Alphabetic bottom rows share one
//! rule too: tablets append `,` and `.` after the base characters, phones do
//! not.

use serde::{Deserialize, Serialize};

use crate::keyboard::DeviceClass;

/// One physical keyboard row of single-glyph strings, left to right.
pub type InputRow = Vec<String>;

/// Splits a literal into one entry per character.
pub fn chars(text: &str) -> InputRow {
    text.chars().map(String::from).collect()
}

/// Picks the phone or tablet variant of a row literal.
fn device_row(device: DeviceClass, phone: &str, pad: &str) -> InputRow {
    match device {
        DeviceClass::Phone => chars(phone),
        DeviceClass::Pad => chars(pad),
    }
}

/// The raw character rows for one keyboard kind.
///
/// Always exactly three rows for the sets the registry produces; only the
/// per-row contents vary by locale and device class. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSet {
    /// Top, middle and bottom character rows.
    pub rows: Vec<InputRow>,
}

impl InputSet {
    /// Creates an input set from explicit rows.
    pub fn new(rows: Vec<InputRow>) -> Self {
        Self { rows }
    }

    /// Standard numeric input set for a device class and currency symbol.
    pub fn standard_numeric(device: DeviceClass, currency: &str) -> Self {
        let center = match device {
            DeviceClass::Phone => {
                let mut row = chars("-/:;()");
                row.push(currency.to_string());
                row.extend(chars("&@\""));
                row
            }
            DeviceClass::Pad => {
                let mut row = chars("@#");
                row.push(currency.to_string());
                row.extend(chars("&*()’”+•"));
                row
            }
        };
        Self::new(vec![
            device_row(device, "1234567890", "1234567890`"),
            center,
            device_row(device, ".,?!’", "%_-=/;:,."),
        ])
    }

    /// Standard symbolic input set for a device class and spare currencies.
    pub fn standard_symbolic(device: DeviceClass, currencies: &[&str]) -> Self {
        let center = match device {
            DeviceClass::Phone => {
                let mut row = chars("_\\|~<>");
                row.extend(currencies.iter().map(|c| c.to_string()));
                row.push("•".to_string());
                row
            }
            DeviceClass::Pad => {
                let mut row: InputRow = currencies.iter().map(|c| c.to_string()).collect();
                row.extend(chars("^[]{}—˚…"));
                row
            }
        };
        Self::new(vec![
            device_row(device, "[]{}#%^*+=", "1234567890`"),
            center,
            device_row(device, ".,?!’", "§|~≠\\<>!?"),
        ])
    }

    /// Standard alphabetic bottom row derived from a base character string.
    ///
    /// Tablets append `,` and `.` after the base characters; phones use the
    /// base characters unchanged.
    pub fn standard_alphabetic_bottom_row(device: DeviceClass, base: &str) -> InputRow {
        let mut row = chars(base);
        if device == DeviceClass::Pad {
            row.extend(chars(",."));
        }
        row
    }
}

// ============================================================================
// Tests
// ============================================================================
