// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host adapter: every query and effect the engine is allowed.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::mutation::{CapabilityRef, Mutation};
use crate::node::{GroupInfo, SceneNode};

bitflags::bitflags! {
    /// Hooks the host glue has actually wired up.
    ///
    /// Trait methods always exist; these bits declare which of them are
    /// backed by real host functionality rather than no-op stubs. Engine
    /// activation requires [`HostCaps::required`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HostCaps: u16 {
        /// Draw-primitive sink is functional.
        const DRAW = 1 << 0;
        /// Undoable mutation dispatch is functional.
        const MUTATE = 1 << 1;
        /// Data-driven context menus can be shown.
        const MENUS = 1 << 2;
        /// Repaint requests reach the tree view.
        const REPAINT = 1 << 3;
        /// Multi-object inspector can be opened.
        const INSPECTOR = 1 << 4;
        /// Icon picker popup is available.
        const ICON_PICKER = 1 << 5;
        /// Rename popups are available.
        const RENAME = 1 << 6;
        /// Collapse-all is available.
        const COLLAPSE = 1 << 7;
    }
}

impl HostCaps {
    /// The hooks without which the engine refuses to activate.
    pub fn required() -> Self {
        Self::DRAW | Self::MUTATE | Self::MENUS | Self::REPAINT
    }
}

/// Engine activation failed; the host tree view stays undecorated.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ActivationError {
    /// The adapter lacks required hooks.
    #[error("host adapter is missing required hooks: {missing:?}")]
    MissingHooks {
        /// The required bits that were absent.
        missing: HostCaps,
    },
}

/// How the external inspector merges a new item set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InspectMode {
    /// Replace the inspector's current contents.
    Replace,
    /// Append to the inspector's current contents.
    Append,
}

/// Target of a generic host object context menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectMenuTarget<Id> {
    /// A content node.
    Node(Id),
    /// A single capability.
    Capability(CapabilityRef<Id>),
}

/// Target of a rename popup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenameTarget {
    /// A group header (by group index).
    Group(usize),
    /// The host's current multi-row selection.
    Selection,
}

/// Persisted user preferences some menu entries toggle.
///
/// Preferences live with the configuration owner; the engine only requests
/// flips through [`HostAdapter::set_preference`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preference {
    /// Tag assignment applies to descendants too.
    RecursiveTag,
    /// Layer assignment applies to descendants too.
    RecursiveLayer,
    /// Static assignment applies to descendants too.
    RecursiveStatic,
}

/// What choosing a menu item does.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuAction<Id> {
    /// Apply one undoable mutation.
    Apply(Mutation<Id>),
    /// Apply several mutations, each independently undoable.
    ApplyEach(Vec<Mutation<Id>>),
    /// Toggle a persisted preference.
    TogglePreference(Preference),
}

/// One entry of a data-driven context menu.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuEntry<Id> {
    /// Horizontal separator.
    Separator,
    /// Selectable item.
    Item {
        /// Display label.
        label: String,
        /// Render with a checkmark.
        checked: bool,
        /// Effect when chosen.
        action: MenuAction<Id>,
    },
}

/// A context menu, as data. The host displays it and routes the chosen
/// entry's [`MenuAction`] back through [`HostAdapter::apply`] /
/// [`HostAdapter::set_preference`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuSpec<Id> {
    /// Menu entries, top to bottom.
    pub entries: Vec<MenuEntry<Id>>,
}

impl<Id> MenuSpec<Id> {
    /// Empty menu.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an item.
    pub fn item(&mut self, label: impl Into<String>, checked: bool, action: MenuAction<Id>) {
        self.entries.push(MenuEntry::Item {
            label: label.into(),
            checked,
            action,
        });
    }

    /// Appends a separator.
    pub fn separator(&mut self) {
        self.entries.push(MenuEntry::Separator);
    }
}

/// Everything the engine may ask of, or request from, the host.
///
/// Queries are cheap and side-effect free; effects route through the host's
/// own systems (undo, popups, repaint scheduling). Implementations that
/// cannot back an effect leave the matching [`HostCaps`] bit clear.
pub trait HostAdapter {
    /// The host's node handle type.
    type Node: SceneNode;

    /// Reports which hooks are wired up.
    fn caps(&self) -> HostCaps;

    /// Resolves a row id to a live node. `None` marks a group-boundary row,
    /// not an error.
    fn resolve(&self, id: <Self::Node as SceneNode>::Id) -> Option<Self::Node>;

    /// Whether the node is in the host's row selection.
    fn is_selected(&self, id: <Self::Node as SceneNode>::Id) -> bool;

    /// Whether the node has unsaved modifications.
    fn is_dirty(&self, id: <Self::Node as SceneNode>::Id) -> bool;

    /// The host's current row selection, in host order.
    fn selection(&self) -> Vec<<Self::Node as SceneNode>::Id>;

    /// Number of top-level groups in the tree stream.
    fn group_count(&self) -> usize;

    /// Group metadata by index.
    fn group_at(&self, index: usize) -> Option<GroupInfo>;

    /// Whether `id` belongs to the group at `index`.
    fn node_in_group(&self, id: <Self::Node as SceneNode>::Id, index: usize) -> bool;

    /// Whether a structural row drag is in progress (decorations skip).
    fn drag_in_progress(&self) -> bool;

    /// Explicit hierarchy depth of a row, when the host can provide it.
    ///
    /// Preferred over the positional heuristic whenever `Some`; the default
    /// declares it unavailable.
    fn row_depth(&self, id: <Self::Node as SceneNode>::Id) -> Option<u32> {
        let _ = id;
        None
    }

    /// Whether the host is editing an isolated subtree (prefab-style
    /// isolation mode), which changes striping and left-offset rules.
    fn in_isolation_mode(&self) -> bool {
        false
    }

    /// All tag names the host knows, for the tag menu.
    fn tags(&self) -> Vec<String>;

    /// All named layers `(index, name)`, for the layer menu.
    fn layers(&self) -> Vec<(u32, String)>;

    /// Applies one undoable mutation.
    fn apply(&mut self, mutation: Mutation<<Self::Node as SceneNode>::Id>);

    /// Shows a data-driven context menu anchored at `anchor`.
    fn show_menu(&mut self, anchor: Rect, menu: MenuSpec<<Self::Node as SceneNode>::Id>);

    /// Delegates to the host's generic object context menu.
    fn show_object_menu(
        &mut self,
        anchor: Rect,
        target: ObjectMenuTarget<<Self::Node as SceneNode>::Id>,
    );

    /// Opens (or focuses) the external multi-object inspector.
    fn open_inspector(
        &mut self,
        items: Vec<CapabilityRef<<Self::Node as SceneNode>::Id>>,
        mode: InspectMode,
    );

    /// Opens the host icon picker for a node.
    fn show_icon_picker(&mut self, id: <Self::Node as SceneNode>::Id, anchor: Rect);

    /// Opens a rename popup.
    fn show_rename(&mut self, target: RenameTarget);

    /// Collapses every row of the tree view.
    fn collapse_all(&mut self);

    /// Toggles a persisted preference (the configuration owner repaints).
    fn set_preference(&mut self, pref: Preference, value: bool);

    /// Asks the host to repaint the tree view.
    fn request_repaint(&mut self);
}
