// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tag and layer badges.

use alloc::format;
use alloc::string::String;

use kurbo::Rect;

use overstory_geom::{WidthUse, from_left_rebased, from_right};
use overstory_host::{
    Alignment, DrawSurface, HostAdapter, HoverGate, MenuAction, MenuSpec, Mutation, Preference,
    SceneNode, TextStyle,
};

use super::RowCtx;

/// Claims `width` from the anchor the alignment selects.
fn claim(base: Rect, width: f64, align: Alignment, widths: &mut WidthUse) -> Rect {
    match align {
        Alignment::AfterLabel => from_left_rebased(base, width, &mut widths.after_name),
        Alignment::TrailingEdge => from_right(base, width, &mut widths.right),
    }
}

/// Tag badge. Suppressed for the default ("untagged") value.
pub(crate) fn tag_badge<H: HostAdapter>(
    host: &mut H,
    surface: &mut dyn DrawSurface,
    ctx: &RowCtx<'_, H::Node>,
    node: &H::Node,
    widths: &mut WidthUse,
) -> bool {
    if !ctx.config.tag_badge || ctx.hover_blocked(HoverGate::TAG) {
        return false;
    }
    let tag = node.tag();
    if tag == ctx.config.default_tag {
        return false;
    }

    let align = ctx.config.tag_align;
    let width = surface.text_width(&tag, TextStyle::Badge);
    let badge = claim(ctx.snap.rect, width, align, widths);
    let hairline = claim(ctx.snap.rect, 1.0, align, widths);

    if ctx.is_paint() {
        surface.label(badge, &tag, TextStyle::Badge, ctx.theme().tag_text);
        surface.fill_rect(hairline, ctx.theme().grid);
    }
    if ctx.right_click_in(badge) {
        let id = ctx.snap.id;
        let recursive = ctx.config.recursive_tag;
        let mut menu = MenuSpec::new();
        for name in host.tags() {
            let checked = name == tag;
            menu.item(
                name.clone(),
                checked,
                MenuAction::Apply(Mutation::SetTag {
                    id,
                    tag: name,
                    recursive,
                }),
            );
        }
        menu.separator();
        menu.item(
            "Apply to children",
            recursive,
            MenuAction::TogglePreference(Preference::RecursiveTag),
        );
        host.show_menu(badge, menu);
        return true;
    }
    false
}

/// Layer badge. Suppressed for layer 0.
pub(crate) fn layer_badge<H: HostAdapter>(
    host: &mut H,
    surface: &mut dyn DrawSurface,
    ctx: &RowCtx<'_, H::Node>,
    node: &H::Node,
    widths: &mut WidthUse,
) -> bool {
    if !ctx.config.layer_badge || ctx.hover_blocked(HoverGate::LAYER) {
        return false;
    }
    let layer = node.layer();
    if layer == 0 {
        return false;
    }

    let layers = host.layers();
    let display: String = layers
        .iter()
        .find(|(index, _)| *index == layer)
        .map(|(_, name)| name.clone())
        .unwrap_or_else(|| format!("Layer {layer}"));

    let align = ctx.config.layer_align;
    let width = surface.text_width(&display, TextStyle::Badge);
    let badge = claim(ctx.snap.rect, width, align, widths);
    let hairline = claim(ctx.snap.rect, 1.0, align, widths);

    if ctx.is_paint() {
        surface.label(badge, &display, TextStyle::Badge, ctx.theme().layer_text);
        surface.fill_rect(hairline, ctx.theme().grid);
    }
    if ctx.right_click_in(badge) {
        let id = ctx.snap.id;
        let recursive = ctx.config.recursive_layer;
        let mut menu = MenuSpec::new();
        for (index, name) in layers {
            menu.item(
                name,
                index == layer,
                MenuAction::Apply(Mutation::SetLayer {
                    id,
                    layer: index,
                    recursive,
                }),
            );
        }
        menu.separator();
        menu.item(
            "Apply to children",
            recursive,
            MenuAction::TogglePreference(Preference::RecursiveLayer),
        );
        host.show_menu(badge, menu);
        return true;
    }
    false
}
