// SPDX-License-Identifier: GPL-3.0-only

//! Width resolution.
//!
//! Resolves every item's [`WidthPolicy`] to points for a given total row
//! width. Resolution is row-by-row, left-to-right, in two passes per row:
//!
//! 1. Fixed widths (`Points`, `Percentage`, `Reference` over a fixed inner
//!    policy, and `UseReference` once a reference has been published) are
//!    resolved and summed.
//! 2. The remaining width is split evenly among the flexible items
//!    (`Available`, `Reference(Available)`, and `UseReference` before any
//!    reference exists).
//!
//! A `Reference` item publishes its resolved width into a slot that later
//! `UseReference` items consume, including on later rows. The slot lives for
//! exactly one layout pass, so character keys on row two and three inherit
//! the width of the top row's keys and two layouts never bleed into each
//! other.

use super::types::{KeyboardLayout, LayoutItem, WidthPolicy};

/// Per-item resolution state between the two passes.
enum Slot {
    /// Width fully known after pass one.
    Fixed(f32),
    /// Takes an even share of the leftover width.
    Flexible,
    /// Flexible, and publishes its share as the reference width.
    FlexibleReference,
}

/// Resolves the widths of one row, in points.
///
/// `reference` is the cross-row reference slot; pass the same slot for every
/// row of one layout and a fresh `None` for the next layout.
pub fn resolve_row_widths(
    items: &[LayoutItem],
    total_width: f32,
    reference: &mut Option<f32>,
) -> Vec<f32> {
    let mut slots = Vec::with_capacity(items.len());
    let mut fixed_sum = 0.0;
    let mut flexible_count = 0usize;

    for item in items {
        let slot = match &item.width {
            WidthPolicy::Points(points) => Slot::Fixed(*points),
            WidthPolicy::Percentage(share) => Slot::Fixed(share * total_width),
            WidthPolicy::Available => Slot::Flexible,
            WidthPolicy::UseReference => match *reference {
                Some(width) => Slot::Fixed(width),
                None => Slot::Flexible,
            },
            WidthPolicy::Reference(inner) => match inner.as_ref() {
                WidthPolicy::Points(points) => {
                    *reference = Some(*points);
                    Slot::Fixed(*points)
                }
                WidthPolicy::Percentage(share) => {
                    let width = share * total_width;
                    *reference = Some(width);
                    Slot::Fixed(width)
                }
                _ => Slot::FlexibleReference,
            },
        };
        match slot {
            Slot::Fixed(width) => fixed_sum += width,
            Slot::Flexible | Slot::FlexibleReference => flexible_count += 1,
        }
        slots.push(slot);
    }

    let leftover = (total_width - fixed_sum).max(0.0);
    let share = if flexible_count > 0 {
        leftover / flexible_count as f32
    } else {
        0.0
    };

    slots
        .into_iter()
        .map(|slot| match slot {
            Slot::Fixed(width) => width,
            Slot::Flexible => share,
            Slot::FlexibleReference => {
                *reference = Some(share);
                share
            }
        })
        .collect()
}

/// Resolves every row of a layout, threading one reference slot through.
pub fn resolve_layout_widths(layout: &KeyboardLayout, total_width: f32) -> Vec<Vec<f32>> {
    let mut reference = None;
    layout
        .rows
        .iter()
        .map(|row| resolve_row_widths(&row.items, total_width, &mut reference))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::KeyboardAction;
    use crate::layout::types::{EdgeInsets, LayoutRow};

    fn item(width: WidthPolicy) -> LayoutItem {
        LayoutItem {
            action: KeyboardAction::character("a"),
            width,
            height: 48.0,
            insets: EdgeInsets::standard(),
        }
    }

    /// Test 1: Ten equal keys on a 320-point row each get 32 points
    #[test]
    fn test_even_split() {
        let items: Vec<_> = (0..10).map(|_| item(WidthPolicy::Available)).collect();
        let widths = resolve_row_widths(&items, 320.0, &mut None);
        assert_eq!(widths, vec![32.0; 10]);
    }

    /// Test 2: Fixed widths are subtracted before the flexible split
    #[test]
    fn test_fixed_before_flexible() {
        let items = vec![
            item(WidthPolicy::Points(50.0)),
            item(WidthPolicy::Percentage(0.25)),
            item(WidthPolicy::Available),
            item(WidthPolicy::Available),
        ];
        let widths = resolve_row_widths(&items, 200.0, &mut None);
        assert_eq!(widths, vec![50.0, 50.0, 50.0, 50.0]);
    }

    /// Test 3: A reference publishes its width for later rows
    #[test]
    fn test_reference_carries_across_rows() {
        let mut reference = None;
        let top: Vec<_> = (0..10)
            .map(|_| item(WidthPolicy::reference(WidthPolicy::Available)))
            .collect();
        let widths = resolve_row_widths(&top, 320.0, &mut reference);
        assert_eq!(widths, vec![32.0; 10]);
        assert_eq!(reference, Some(32.0));

        let home: Vec<_> = (0..9).map(|_| item(WidthPolicy::UseReference)).collect();
        let widths = resolve_row_widths(&home, 320.0, &mut reference);
        assert_eq!(
            widths,
            vec![32.0; 9],
            "A shorter row keeps the reference width instead of growing"
        );
    }

    /// Test 4: UseReference without a published reference acts like Available
    #[test]
    fn test_use_reference_fallback() {
        let items = vec![item(WidthPolicy::UseReference), item(WidthPolicy::UseReference)];
        let widths = resolve_row_widths(&items, 100.0, &mut None);
        assert_eq!(widths, vec![50.0, 50.0]);
    }

    /// Test 5: A fixed reference publishes immediately, in time for items
    /// later in the same row
    #[test]
    fn test_fixed_reference_same_row() {
        let items = vec![
            item(WidthPolicy::reference(WidthPolicy::Points(40.0))),
            item(WidthPolicy::UseReference),
            item(WidthPolicy::Available),
        ];
        let widths = resolve_row_widths(&items, 200.0, &mut None);
        assert_eq!(widths, vec![40.0, 40.0, 120.0]);
    }

    /// Test 6: Over-committed fixed widths clamp the flexible share at zero
    #[test]
    fn test_overflow_clamps_to_zero() {
        let items = vec![item(WidthPolicy::Points(300.0)), item(WidthPolicy::Available)];
        let widths = resolve_row_widths(&items, 200.0, &mut None);
        assert_eq!(widths, vec![300.0, 0.0]);
    }

    /// Test 7: Layout-level resolution threads one reference per pass
    #[test]
    fn test_layout_resolution_scopes_reference() {
        let layout = KeyboardLayout::new(vec![
            LayoutRow {
                items: (0..10)
                    .map(|_| item(WidthPolicy::reference(WidthPolicy::Available)))
                    .collect(),
            },
            LayoutRow {
                items: (0..9).map(|_| item(WidthPolicy::UseReference)).collect(),
            },
        ]);
        let widths = resolve_layout_widths(&layout, 320.0);
        assert_eq!(widths[0], vec![32.0; 10]);
        assert_eq!(widths[1], vec![32.0; 9]);

        // A second pass at a different total starts from a fresh slot.
        let widths = resolve_layout_widths(&layout, 640.0);
        assert_eq!(widths[0], vec![64.0; 10]);
        assert_eq!(widths[1], vec![64.0; 9]);
    }
}
