// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The decoration renderers.
//!
//! Renderers run in a fixed pipeline order because later renderers'
//! available width depends on earlier claims. Every renderer claims its
//! geometry unconditionally for its phase-independent inputs: only draw
//! calls are gated on the paint phase and only hit tests on the input
//! phase, so the same widths are claimed under Paint and Input and painted
//! geometry never diverges from hit-tested geometry.

use kurbo::Rect;

use overstory_host::{
    EngineConfig, FramePhase, HoverGate, InputEvent, MouseButton, Rgba, SceneNode, Theme,
};
use overstory_stream::RowSnapshot;

pub(crate) mod background;
pub(crate) mod badges;
pub(crate) mod grid;
pub(crate) mod icons;
pub(crate) mod separator;
pub(crate) mod strip;
pub(crate) mod tree_lines;

/// Left margin of row content: two icon slots in from the tree edge.
pub(crate) const GLOBAL_LEFT: f64 = 32.0;

/// Per-row inputs shared by every renderer.
pub(crate) struct RowCtx<'a, N: SceneNode> {
    pub config: &'a EngineConfig,
    pub snap: &'a RowSnapshot<N>,
    pub phase: FramePhase,
}

impl<N: SceneNode> RowCtx<'_, N> {
    pub(crate) fn theme(&self) -> &Theme {
        &self.config.theme
    }

    pub(crate) fn is_paint(&self) -> bool {
        self.phase.is_paint()
    }

    pub(crate) fn input(&self) -> Option<InputEvent> {
        self.phase.input().copied()
    }

    /// Whether the hover-only gate suppresses a decoration kind this row.
    pub(crate) fn hover_blocked(&self, kind: HoverGate) -> bool {
        self.config.hover_only && self.config.hover_gate.contains(kind) && !self.snap.is_hovered
    }

    /// Right mouse-down inside `rect`, in the input phase.
    pub(crate) fn right_click_in(&self, rect: Rect) -> bool {
        self.input()
            .is_some_and(|ev| ev.is_mouse_down(MouseButton::Right) && rect.contains(ev.pointer))
    }
}

/// Stripe color for a row, by index parity.
pub(crate) fn stripe_color(theme: &Theme, row_index: i32) -> Rgba {
    if row_index % 2 == 0 {
        theme.row_even
    } else {
        theme.row_odd
    }
}
