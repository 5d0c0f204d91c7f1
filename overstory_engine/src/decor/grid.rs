// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-bottom grid hairline.

use kurbo::Rect;

use overstory_host::{DrawSurface, SceneNode};

use super::RowCtx;

/// One-unit hairline along the row's bottom edge, starting at the content
/// left margin.
pub(crate) fn grid_line<N: SceneNode>(surface: &mut dyn DrawSurface, ctx: &RowCtx<'_, N>, left: f64) {
    if !ctx.config.grid_line || !ctx.is_paint() {
        return;
    }
    let rect = ctx.snap.rect;
    let line = Rect::new(left, rect.y1 - 1.0, rect.x1 + 16.0, rect.y1);
    surface.fill_rect(line, ctx.theme().grid);
}
