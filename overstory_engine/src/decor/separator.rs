// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Group-boundary header and separator-row rendering.

use kurbo::Rect;

use overstory_host::{DrawSurface, GroupInfo, SceneNode, TextStyle};

use super::{GLOBAL_LEFT, RowCtx};

/// Full-width header bar for a separator row, with the marker prefix
/// stripped from the centered title.
pub(crate) fn header_bar<N: SceneNode>(surface: &mut dyn DrawSurface, ctx: &RowCtx<'_, N>) {
    if !ctx.is_paint() {
        return;
    }
    let rect = ctx.snap.rect;
    let bar = Rect::new(GLOBAL_LEFT, rect.y0, rect.x1 + 16.0, rect.y1);
    surface.fill_rect(bar, ctx.theme().header_background);

    let name = ctx.snap.name();
    let title = name
        .strip_prefix(ctx.config.separator_prefix.as_str())
        .unwrap_or(&name);
    surface.label(bar, title, TextStyle::Header, ctx.theme().header_title);
}

/// "(not loaded" suffix after an unloaded group's bold header name.
pub(crate) fn group_suffix<N: SceneNode>(
    surface: &mut dyn DrawSurface,
    ctx: &RowCtx<'_, N>,
    info: &GroupInfo,
) {
    if info.loaded || !ctx.is_paint() {
        return;
    }
    let rect = ctx.snap.rect;
    let x0 = rect.x0 + 16.0 + surface.text_width(&info.name, TextStyle::Bold);
    let suffix = Rect::new(x0, rect.y0, rect.x1, rect.y1);
    surface.label(suffix, "(not loaded", TextStyle::Label, ctx.theme().tag_text);
}
