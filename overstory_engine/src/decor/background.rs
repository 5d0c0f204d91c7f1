// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alternating row stripes and conditional background overrides.

use kurbo::Rect;

use overstory_host::{DrawSurface, SceneNode};
use overstory_stream::SequenceState;

use super::{RowCtx, stripe_color};

/// Alternating background stripe.
///
/// The stripe paints the slot one row height below the current row, widened
/// one unit left and sixteen right so it reaches under the scrollbar gutter.
/// The depth-seam row is skipped: striping across the group-header
/// transition would tear visually. In isolation mode only root rows stripe,
/// and only once the tracked depth has moved off zero.
pub(crate) fn row_stripe<N: SceneNode>(
    surface: &mut dyn DrawSurface,
    ctx: &RowCtx<'_, N>,
    seq: &SequenceState<N>,
    isolation: bool,
) {
    if !ctx.config.row_background || !ctx.is_paint() {
        return;
    }
    let snap = ctx.snap;
    if seq.at_depth_seam(snap.row_index) {
        return;
    }
    if isolation && (!snap.is_root || seq.deepest_row() == 0) {
        return;
    }

    let rect = snap.rect;
    let below = Rect::new(rect.x0 - 1.0, rect.y1, rect.x1 + 16.0, rect.y1 + rect.height());
    surface.fill_rect(below, stripe_color(ctx.theme(), snap.row_index));
}

/// Conditional background override; the last matching active rule wins.
pub(crate) fn instant_override<N: SceneNode>(
    surface: &mut dyn DrawSurface,
    ctx: &RowCtx<'_, N>,
    node: &N,
    left: f64,
) {
    if !ctx.config.instant_background || !ctx.is_paint() {
        return;
    }

    let name = node.name();
    let tag = node.tag();
    let layer = node.layer();
    let Some(rule) = ctx
        .config
        .rules
        .iter()
        .rev()
        .find(|rule| rule.matches(&name, &tag, layer))
    else {
        return;
    };

    let rect = ctx.snap.rect;
    let rect = Rect::new(left.max(rect.x0), rect.y0, rect.x1 + 16.0, rect.y1);
    surface.fill_rect(rect, rule.color);
}
