// SPDX-License-Identifier: GPL-3.0-only

//! Core keyboard vocabulary for the layout engine.
//!
//! This module defines the shared types every other component speaks in:
//!
//! - **Keyboard types and shift state**: which keyboard is active
//!   ([`KeyboardType`], [`ShiftState`])
//! - **Actions**: the semantic effect of a single button ([`KeyboardAction`])
//! - **Context**: the immutable per-computation snapshot of the host state
//!   ([`KeyboardContext`], [`DeviceClass`], [`Orientation`])
//!
//! The context is deliberately a plain value. The engine never observes the
//! host; the host builds a fresh snapshot whenever locale, keyboard type,
//! shift state, orientation or device traits change, and recomputes the
//! layout from it.

// Sub-modules
pub mod action;
pub mod context;
pub mod types;

// Re-export public API
pub use action::KeyboardAction;
pub use context::{DeviceClass, KeyboardContext, Orientation};
pub use types::{KeyboardType, ShiftState};
