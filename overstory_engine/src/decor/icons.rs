// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Object icon, lock icon, and the static marker bar.

use kurbo::Rect;

use overstory_geom::{WidthUse, from_left_rebased};
use overstory_host::{
    DrawSurface, HostAdapter, HostCaps, MenuAction, MenuSpec, Mutation, Preference, Rgba,
    ScaleMode, SceneNode,
};

use super::{RowCtx, stripe_color};

/// Custom object icon, one icon slot right of the label.
///
/// Folders pick the filled or empty folder glyph by child count; other
/// nodes must supply a distinct icon through the facade or the slot is
/// skipped entirely, claiming nothing. Right-click opens the host's icon
/// picker.
pub(crate) fn object_icon<H: HostAdapter>(
    host: &mut H,
    surface: &mut dyn DrawSurface,
    ctx: &RowCtx<'_, H::Node>,
    node: &H::Node,
    widths: &mut WidthUse,
) -> bool {
    let theme = ctx.theme();
    // Folder glyphs are part of the baseline row rendering and ignore the
    // custom-icon toggle; only per-node icons are opt-in.
    let icon = if ctx.snap.is_folder {
        Some(if node.child_count() > 0 {
            theme.icon_folder
        } else {
            theme.icon_folder_empty
        })
    } else if ctx.config.custom_icons {
        node.icon()
    } else {
        None
    };
    let Some(icon) = icon else {
        return false;
    };

    let slot = from_left_rebased(ctx.snap.rect, 16.0, &mut widths.after_name);
    widths.after_name += 1.0;

    if ctx.is_paint() {
        // Backplate in the stripe color so transparent icons read cleanly.
        surface.fill_rect(slot, stripe_color(theme, ctx.snap.row_index));
        surface.blit(slot, icon, ScaleMode::Fit, Rgba::WHITE);
    }
    if ctx.right_click_in(slot) && host.caps().contains(HostCaps::ICON_PICKER) {
        host.show_icon_picker(ctx.snap.id, slot);
        return true;
    }
    false
}

/// Lock icon for non-editable nodes, with an unlock context menu.
pub(crate) fn lock_icon<H: HostAdapter>(
    host: &mut H,
    surface: &mut dyn DrawSurface,
    ctx: &RowCtx<'_, H::Node>,
    node: &H::Node,
    widths: &mut WidthUse,
) -> bool {
    if !ctx.config.lock_icon || !node.is_locked() {
        return false;
    }
    let theme = ctx.theme();
    let slot = from_left_rebased(ctx.snap.rect, 12.0, &mut widths.after_name);

    if ctx.is_paint() {
        surface.blit(slot, theme.icon_lock, ScaleMode::Fit, theme.lock_icon);
    }
    if ctx.right_click_in(slot) {
        let mut menu = MenuSpec::new();
        menu.item(
            "Unlock",
            false,
            MenuAction::Apply(Mutation::SetLocked {
                id: ctx.snap.id,
                locked: false,
            }),
        );
        host.show_menu(slot, menu);
        return true;
    }
    false
}

/// Static marker: a thin bar flush with the row's right edge.
///
/// Claims no width; badges and icons may flow under it.
pub(crate) fn static_marker<H: HostAdapter>(
    host: &mut H,
    surface: &mut dyn DrawSurface,
    ctx: &RowCtx<'_, H::Node>,
) -> bool {
    if !ctx.config.static_marker || !ctx.snap.is_static {
        return false;
    }
    let rect = ctx.snap.rect;
    let bar = Rect::new(rect.x1 - 3.0, rect.y0, rect.x1, rect.y1);

    if ctx.is_paint() {
        surface.fill_rect(bar, ctx.theme().static_marker);
    }
    if ctx.right_click_in(bar) {
        let id = ctx.snap.id;
        let recursive = ctx.config.recursive_static;
        let mut menu = MenuSpec::new();
        menu.item(
            "True",
            true,
            MenuAction::Apply(Mutation::SetStatic {
                id,
                value: true,
                recursive,
            }),
        );
        menu.item(
            "False",
            false,
            MenuAction::Apply(Mutation::SetStatic {
                id,
                value: false,
                recursive,
            }),
        );
        menu.separator();
        menu.item(
            "Apply to children",
            recursive,
            MenuAction::TogglePreference(Preference::RecursiveStatic),
        );
        host.show_menu(bar, menu);
        return true;
    }
    false
}
