// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-only configuration snapshot the engine decorates from.

use alloc::string::String;
use alloc::string::ToString;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::draw::{IconId, Rgba};
use crate::input::{Chord, KeyCode, Modifiers};

/// Horizontal anchor for a decoration kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Claim from the after-label cursor, flowing right of the name.
    AfterLabel,
    /// Claim from the row's right edge, flowing left.
    TrailingEdge,
}

/// Which capabilities the component icon strip shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentFilter {
    /// Every capability.
    All,
    /// User scripts only.
    ScriptsOnly,
    /// Only type names in [`EngineConfig::component_names`].
    Allow,
    /// Every type name except those in [`EngineConfig::component_names`].
    Deny,
}

bitflags::bitflags! {
    /// Decoration kinds subject to the hover-only gate.
    ///
    /// When [`EngineConfig::hover_only`] is set, a kind whose bit is set
    /// here renders only while the pointer hovers its row; kinds with the
    /// bit clear are exempt and always render.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct HoverGate: u8 {
        /// Tag badge.
        const TAG = 0b001;
        /// Layer badge.
        const LAYER = 0b010;
        /// Component icon strip.
        const COMPONENTS = 0b100;
    }
}

/// One conditional row-background rule. The last matching active rule wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackgroundRule {
    /// Rule participates in matching.
    pub active: bool,
    /// Match rows whose node carries this tag.
    pub tag: Option<String>,
    /// Match rows whose node layer bit intersects this mask (0 = unused).
    pub layer_mask: u32,
    /// Match rows whose node name starts with this prefix.
    pub name_prefix: Option<String>,
    /// Background color painted on a match.
    pub color: Rgba,
}

impl BackgroundRule {
    /// Whether the rule matches a node with the given name, tag, and layer.
    pub fn matches(&self, name: &str, tag: &str, layer: u32) -> bool {
        if !self.active {
            return false;
        }
        if let Some(t) = &self.tag
            && !t.is_empty()
            && tag == t
        {
            return true;
        }
        if self.layer_mask != 0
            && let Some(bit) = 1u32.checked_shl(layer)
            && bit & self.layer_mask != 0
        {
            return true;
        }
        if let Some(p) = &self.name_prefix
            && !p.is_empty()
            && name.starts_with(p.as_str())
        {
            return true;
        }
        false
    }
}

/// Colors and glyph handles for every decoration.
///
/// Defaults carry a neutral dark palette; glyph [`IconId`]s default to 0 and
/// must be assigned by the host glue that loaded the textures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Even-row stripe color.
    pub row_even: Rgba,
    /// Odd-row stripe color.
    pub row_odd: Rgba,
    /// Grid hairline color.
    pub grid: Rgba,
    /// Tree connector line tint.
    pub tree_line: Rgba,
    /// Lock icon tint.
    pub lock_icon: Rgba,
    /// Separator header bar background.
    pub header_background: Rgba,
    /// Separator header title color.
    pub header_title: Rgba,
    /// Tag badge text color.
    pub tag_text: Rgba,
    /// Layer badge text color.
    pub layer_text: Rgba,
    /// Backplate behind selected capability icons.
    pub capability_selected: Rgba,
    /// Static marker bar color.
    pub static_marker: Rgba,
    /// Elbow glyph: parent slot for a last sibling.
    pub icon_branch_elbow: IconId,
    /// Tee glyph: parent slot for a non-last sibling.
    pub icon_branch_tee: IconId,
    /// Straight continuation glyph for pass-through ancestors.
    pub icon_branch_straight: IconId,
    /// Folder icon for folders with children.
    pub icon_folder: IconId,
    /// Folder icon for empty folders.
    pub icon_folder_empty: IconId,
    /// Lock icon.
    pub icon_lock: IconId,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            row_even: Rgba::rgba(255, 255, 255, 8),
            row_odd: Rgba::rgba(0, 0, 0, 24),
            grid: Rgba::rgba(0, 0, 0, 48),
            tree_line: Rgba::rgba(255, 255, 255, 90),
            lock_icon: Rgba::rgb(220, 95, 95),
            header_background: Rgba::rgb(45, 45, 45),
            header_title: Rgba::WHITE,
            tag_text: Rgba::rgb(170, 170, 170),
            layer_text: Rgba::rgb(170, 170, 170),
            capability_selected: Rgba::rgba(62, 125, 231, 120),
            static_marker: Rgba::rgb(255, 0, 255),
            icon_branch_elbow: IconId(0),
            icon_branch_tee: IconId(0),
            icon_branch_straight: IconId(0),
            icon_folder: IconId(0),
            icon_folder_empty: IconId(0),
            icon_lock: IconId(0),
        }
    }
}

/// Hotkey bindings read by the engine driver.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyBindings {
    /// Toggles the whole engine on/off (consumed).
    pub toggle_engine: Chord,
    /// Collapses every row (consumed).
    pub collapse_all: Chord,
    /// Opens rename popups (group header / multi-selection).
    pub rename: Chord,
    /// Chords the engine must leave for the host (e.g. its duplicate
    /// shortcut); rows return early without consuming these.
    pub passthrough: Vec<Chord>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        // Key codes follow the common USB-HID-ish host convention; the host
        // glue replaces them with its own codes.
        let ctrl = Modifiers::CTRL;
        Self {
            toggle_engine: Chord {
                code: KeyCode(0x0B), // H
                mods: ctrl,
            },
            collapse_all: Chord {
                code: KeyCode(0x06), // C
                mods: Modifiers::CTRL | Modifiers::SHIFT | Modifiers::ALT,
            },
            rename: Chord {
                code: KeyCode(0x3B), // F2
                mods: Modifiers::empty(),
            },
            passthrough: alloc::vec![Chord {
                code: KeyCode(0x07), // D
                mods: ctrl,
            }],
        }
    }
}

/// Immutable per-callback configuration snapshot.
///
/// Owned and persisted outside the engine; the owner notifies on change and
/// triggers a host repaint. The engine never writes it.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Alternating row background stripes.
    pub row_background: bool,
    /// Conditional background overrides ([`BackgroundRule`]).
    pub instant_background: bool,
    /// Ancestor tree connector lines.
    pub tree_lines: bool,
    /// Row-bottom grid hairline.
    pub grid_line: bool,
    /// Custom object icon right of the label.
    pub custom_icons: bool,
    /// Lock icon for non-editable nodes.
    pub lock_icon: bool,
    /// Static marker bar at the trailing edge.
    pub static_marker: bool,
    /// Tag badge.
    pub tag_badge: bool,
    /// Layer badge.
    pub layer_badge: bool,
    /// Component icon strip.
    pub component_icons: bool,

    /// Gate the kinds in [`EngineConfig::hover_gate`] behind row hover.
    pub hover_only: bool,
    /// Which kinds the hover gate applies to.
    pub hover_gate: HoverGate,

    /// Component strip filter mode.
    pub component_filter: ComponentFilter,
    /// Type names for the Allow/Deny filter modes.
    pub component_names: HashSet<String>,
    /// Anchor of the component strip.
    pub component_align: Alignment,
    /// Anchor of the tag badge.
    pub tag_align: Alignment,
    /// Anchor of the layer badge.
    pub layer_align: Alignment,

    /// Component icon edge length.
    pub icon_size: f64,
    /// Spacing advanced after each component icon.
    pub icon_spacing: f64,
    /// Gap between the label end and the first after-label decoration.
    pub after_name_offset: f64,

    /// Name prefix marking separator rows (and naming new ones).
    pub separator_prefix: String,
    /// Tag value treated as "untagged" (suppresses the tag badge).
    pub default_tag: String,

    /// Tag menu assignments default to recursive.
    pub recursive_tag: bool,
    /// Layer menu assignments default to recursive.
    pub recursive_layer: bool,
    /// Static menu assignments default to recursive.
    pub recursive_static: bool,

    /// Conditional background rules, in priority order (last match wins).
    pub rules: Vec<BackgroundRule>,
    /// Hotkey bindings.
    pub keys: KeyBindings,
    /// Colors and glyphs.
    pub theme: Theme,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            row_background: true,
            instant_background: false,
            tree_lines: true,
            grid_line: false,
            custom_icons: true,
            lock_icon: true,
            static_marker: true,
            tag_badge: false,
            layer_badge: false,
            component_icons: true,
            hover_only: false,
            hover_gate: HoverGate::empty(),
            component_filter: ComponentFilter::All,
            component_names: HashSet::new(),
            component_align: Alignment::AfterLabel,
            tag_align: Alignment::TrailingEdge,
            layer_align: Alignment::TrailingEdge,
            icon_size: 16.0,
            icon_spacing: 2.0,
            after_name_offset: 4.0,
            separator_prefix: "--- ".to_string(),
            default_tag: "Untagged".to_string(),
            recursive_tag: false,
            recursive_layer: false,
            recursive_static: false,
            rules: Vec::new(),
            keys: KeyBindings::default(),
            theme: Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn rule() -> BackgroundRule {
        BackgroundRule {
            active: true,
            tag: None,
            layer_mask: 0,
            name_prefix: None,
            color: Rgba::rgb(40, 40, 40),
        }
    }

    #[test]
    fn layer_mask_matches_by_bit() {
        let r = BackgroundRule { layer_mask: 0b100, ..rule() };

        assert!(r.matches("Node", "Untagged", 2));
        assert!(!r.matches("Node", "Untagged", 1));
    }

    #[test]
    fn out_of_range_layer_never_matches() {
        // Hosts may report layers past the 32-bit mask; those rows simply
        // fall outside every mask instead of wrapping onto bit zero.
        let r = BackgroundRule { layer_mask: 1, ..rule() };

        assert!(r.matches("Node", "Untagged", 0));
        assert!(!r.matches("Node", "Untagged", 32));
        assert!(!r.matches("Node", "Untagged", u32::MAX));
    }

    #[test]
    fn inactive_rule_matches_nothing() {
        let r = BackgroundRule {
            active: false,
            name_prefix: Some("Ne".to_string()),
            ..rule()
        };

        assert!(!r.matches("Nexus", "Untagged", 0));
    }
}
