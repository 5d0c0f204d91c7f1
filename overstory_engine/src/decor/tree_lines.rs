// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ancestor tree-connector lines.

use kurbo::Rect;

use overstory_host::{DrawSurface, ScaleMode, SceneNode};

use super::RowCtx;

/// Depth bound on the ancestor walk. Deeper chains truncate their connector
/// lines instead of growing frame time without bound.
const MAX_DEPTH: usize = 64;

/// Branch glyph width. Glyphs overhang their 14-unit column so the strokes
/// join seamlessly.
const GLYPH_WIDTH: f64 = 40.0;

/// Horizontal step per hierarchy level.
const LEVEL_STEP: f64 = 14.0;

/// Draws the parent-slot branch glyph for the row, then walks the ancestor
/// chain outward drawing continuation glyphs for every ancestor that is not
/// the last sibling of its own parent.
///
/// The walk is structural (parent handles), re-run per row per repaint;
/// depth is small relative to the frame budget. `depth_hint` is the host's
/// explicit row depth when it can supply one, and bounds the walk exactly;
/// otherwise [`MAX_DEPTH`] does.
pub(crate) fn connectors<N: SceneNode>(
    surface: &mut dyn DrawSurface,
    ctx: &RowCtx<'_, N>,
    node: &N,
    depth_hint: Option<u32>,
) {
    if !ctx.config.tree_lines || !ctx.is_paint() || ctx.snap.is_root {
        return;
    }

    let theme = ctx.theme();
    let rect = ctx.snap.rect;
    let mut x = rect.x0 - 34.0;

    let glyph = if node.is_last_sibling() {
        theme.icon_branch_elbow
    } else {
        theme.icon_branch_tee
    };
    let slot = Rect::new(x, rect.y0, x + GLYPH_WIDTH, rect.y1);
    surface.blit(slot, glyph, ScaleMode::Stretch, theme.tree_line);

    let limit = depth_hint.map_or(MAX_DEPTH, |depth| depth as usize);
    let mut ancestor = node.parent();
    let mut depth = 0;
    while let Some(current) = ancestor {
        depth += 1;
        if depth > limit {
            break;
        }
        x -= LEVEL_STEP;
        if !current.is_last_sibling() {
            let slot = Rect::new(x, rect.y0, x + GLYPH_WIDTH, rect.y1);
            surface.blit(slot, theme.icon_branch_straight, ScaleMode::Stretch, theme.tree_line);
        }
        ancestor = current.parent();
    }
}
