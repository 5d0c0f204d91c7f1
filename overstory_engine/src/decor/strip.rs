// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The attached-capability icon strip.

use kurbo::Rect;
use smallvec::SmallVec;

use overstory_geom::{WidthUse, from_left_rebased, from_right};
use overstory_host::{
    Alignment, CapabilityInfo, CapabilityRef, ComponentFilter, DrawSurface, EngineConfig,
    HostAdapter, HostCaps, HoverGate, IconId, InputKind, Mutation, ObjectMenuTarget, Rgba,
    ScaleMode, SceneNode,
};
use overstory_select::{StripController, StripHit, StripResponse};

use super::RowCtx;

/// One icon slot of the strip after filtering and sub-resource unfolding.
struct Slot {
    key: u64,
    icon: IconId,
    protected: bool,
}

fn passes_filter(config: &EngineConfig, cap: &CapabilityInfo) -> bool {
    match config.component_filter {
        ComponentFilter::All => true,
        ComponentFilter::ScriptsOnly => cap.is_script,
        ComponentFilter::Allow => config.component_names.contains(cap.type_name.as_str()),
        ComponentFilter::Deny => !config.component_names.contains(cap.type_name.as_str()),
    }
}

/// Flattens the node's capabilities into icon slots.
///
/// Multi-valued sub-resources unfold into extra slots at their owning
/// capability's position. A capability whose icon failed to resolve
/// (`icon == None`) is skipped and claims nothing; the rest of the strip
/// is unaffected.
fn collect_slots(config: &EngineConfig, caps: &[CapabilityInfo]) -> SmallVec<[Slot; 8]> {
    let mut slots = SmallVec::new();
    for cap in caps {
        if !passes_filter(config, cap) {
            continue;
        }
        if let Some(icon) = cap.icon {
            slots.push(Slot {
                key: cap.key,
                icon,
                protected: cap.protected,
            });
        }
        for sub in &cap.sub_resources {
            if let Some(icon) = sub.icon {
                slots.push(Slot {
                    key: sub.key,
                    icon,
                    protected: sub.protected,
                });
            }
        }
    }
    slots
}

/// Maps a controller response onto host effects. Returns whether the event
/// was consumed.
fn route<H: HostAdapter>(
    host: &mut H,
    response: StripResponse<<H::Node as SceneNode>::Id>,
    anchor: Rect,
) -> bool {
    match response {
        StripResponse::Consumed => {
            host.request_repaint();
            true
        }
        StripResponse::Inspect { items, mode } => {
            if host.caps().contains(HostCaps::INSPECTOR) {
                host.open_inspector(items, mode);
            }
            true
        }
        StripResponse::Destroy { targets } => {
            for target in targets {
                host.apply(Mutation::DestroyCapability { target });
            }
            host.request_repaint();
            true
        }
        StripResponse::ObjectMenu { target } => {
            host.show_object_menu(anchor, ObjectMenuTarget::Capability(target));
            true
        }
        StripResponse::Ignored | StripResponse::Cleared => false,
    }
}

/// Draws and hit-tests the capability icon strip.
pub(crate) fn capability_strip<H: HostAdapter>(
    host: &mut H,
    surface: &mut dyn DrawSurface,
    ctx: &RowCtx<'_, H::Node>,
    node: &H::Node,
    widths: &mut WidthUse,
    controller: &mut StripController<<H::Node as SceneNode>::Id>,
) -> bool {
    if !ctx.config.component_icons || ctx.hover_blocked(HoverGate::COMPONENTS) {
        return false;
    }
    let slots = collect_slots(ctx.config, &node.capabilities());
    if slots.is_empty() {
        return false;
    }

    let config = ctx.config;
    let base = ctx.snap.rect;

    if config.component_align == Alignment::AfterLabel {
        let hairline = from_left_rebased(base, 2.0, &mut widths.after_name);
        if ctx.is_paint() {
            surface.fill_rect(hairline, ctx.theme().grid);
        }
    }

    let mut consumed = false;
    for slot in &slots {
        let rect = match config.component_align {
            Alignment::AfterLabel => {
                let rect = from_left_rebased(base, config.icon_size, &mut widths.after_name);
                widths.after_name += config.icon_spacing;
                rect
            }
            Alignment::TrailingEdge => {
                let rect = from_right(base, config.icon_size, &mut widths.right);
                widths.right += config.icon_spacing;
                rect
            }
        };

        if ctx.is_paint() {
            if controller.is_selected(slot.key) {
                surface.fill_rect(rect, ctx.theme().capability_selected);
            }
            surface.blit(rect, slot.icon, ScaleMode::Fit, Rgba::WHITE);
        }
        if let Some(ev) = ctx.input()
            && let InputKind::MouseDown(button) = ev.kind
            && rect.contains(ev.pointer)
        {
            let hit = StripHit {
                target: CapabilityRef {
                    node: ctx.snap.id,
                    key: slot.key,
                },
                protected: slot.protected,
            };
            let response = controller.on_mouse_down(button, ev.mods, Some(hit));
            consumed |= route(host, response, rect);
        }
    }
    consumed
}
