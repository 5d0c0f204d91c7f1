// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Geom: width cursors and sub-rect allocation within a single row.
//!
//! ## Overview
//!
//! Decorations drawn into one row of a host tree view compete for horizontal
//! space. This crate provides the tiny allocation vocabulary they share:
//!
//! - [`WidthUse`]: three independent running totals of horizontal space
//!   already claimed, one per anchor (row left edge, row right edge, and the
//!   position just after the row's label text).
//! - [`from_left`] / [`from_right`]: compute the next non-overlapping
//!   sub-rect growing inward from an anchor, advancing the matching cursor.
//!
//! Repeated calls sharing one cursor tile strictly inward with no overlap:
//!
//! ```rust
//! use kurbo::Rect;
//! use overstory_geom::from_right;
//!
//! let row = Rect::new(0.0, 0.0, 100.0, 16.0);
//! let mut used = 0.0;
//! let a = from_right(row, 10.0, &mut used);
//! let b = from_right(row, 6.0, &mut used);
//! assert_eq!(a, Rect::new(90.0, 0.0, 100.0, 16.0));
//! assert_eq!(b, Rect::new(84.0, 0.0, 90.0, 16.0));
//! assert_eq!(used, 16.0);
//! ```
//!
//! ## Anchors
//!
//! The left-anchored helpers come in two flavors. [`from_left`] offsets from
//! the base rect's own left edge. [`from_left_rebased`] first resets the left
//! bound to `x = 0`, so its cursor carries an *absolute* horizontal position;
//! this is the form used with the after-label cursor, which is seeded with
//! the absolute end of the label text.
//!
//! Negative widths are not validated and simply produce degenerate rects;
//! callers own that contract. No allocation failure exists; claiming more
//! width than the row has walks the rects past the opposite edge.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

use kurbo::Rect;

/// Running totals of horizontal space already claimed within one row.
///
/// One value per anchor. Reset to [`WidthUse::ZERO`] once per row, before
/// any decoration executes, then threaded through every claim for that row.
/// Cursors only grow; nothing ever returns claimed space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WidthUse {
    /// Space claimed from the row's left edge.
    pub left: f64,
    /// Space claimed from the row's right edge.
    pub right: f64,
    /// Absolute x position just after the label text (grows rightward).
    pub after_name: f64,
}

impl WidthUse {
    /// All cursors at zero.
    pub const ZERO: Self = Self {
        left: 0.0,
        right: 0.0,
        after_name: 0.0,
    };
}

/// Claims `width` from the left anchor of `base`, advancing `used`.
///
/// The rect is positioned at the *pre*-advance cursor, so the first claim
/// sits flush against `base.x0 + initial_used`. The vertical span is the
/// base rect's.
pub fn from_left(base: Rect, width: f64, used: &mut f64) -> Rect {
    let x0 = base.x0 + *used;
    *used += width;
    Rect::new(x0, base.y0, x0 + width, base.y1)
}

/// Like [`from_left`], but resets the left bound to `x = 0` first.
///
/// With this form the cursor is an absolute horizontal position rather than
/// an offset into `base`; it is the variant used with the after-label
/// cursor.
pub fn from_left_rebased(base: Rect, width: f64, used: &mut f64) -> Rect {
    let x0 = *used;
    *used += width;
    Rect::new(x0, base.y0, x0 + width, base.y1)
}

/// Non-advancing form of [`from_left`], for fixed-position decorations.
pub fn from_left_at(base: Rect, width: f64, used: f64) -> Rect {
    let mut used = used;
    from_left(base, width, &mut used)
}

/// Non-advancing form of [`from_left_rebased`].
pub fn from_left_rebased_at(base: Rect, width: f64, used: f64) -> Rect {
    let mut used = used;
    from_left_rebased(base, width, &mut used)
}

/// Claims `width` from the right anchor of `base`, advancing `used`.
///
/// The cursor advances *before* positioning, so the rect's right edge sits
/// at `base.x1 - initial_used` and claims tile leftward.
pub fn from_right(base: Rect, width: f64, used: &mut f64) -> Rect {
    *used += width;
    let x0 = base.x1 - *used;
    Rect::new(x0, base.y0, x0 + width, base.y1)
}

/// Non-advancing form of [`from_right`].
pub fn from_right_at(base: Rect, width: f64, used: f64) -> Rect {
    let mut used = used;
    from_right(base, width, &mut used)
}
