// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click state machine for the capability icon strip.

use alloc::vec::Vec;

use overstory_host::{CapabilityRef, InspectMode, Modifiers, MouseButton};

use crate::set::SelectionSet;

/// A hit-tested capability icon, as reported by the strip renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StripHit<Id> {
    /// The capability under the pointer.
    pub target: CapabilityRef<Id>,
    /// Protected capabilities (shared sub-resources) are exempt from
    /// batch destruction.
    pub protected: bool,
}

/// What a processed click asks the caller to do.
///
/// The controller never talks to the host itself; the driver maps these
/// onto adapter effects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StripResponse<Id> {
    /// Not a strip interaction; let the host handle the event.
    Ignored,
    /// Selection changed; consume the event and repaint.
    Consumed,
    /// Outside click cleared the selection; repaint, but do not consume.
    Cleared,
    /// Open or focus the external multi-object inspector.
    Inspect {
        /// Capabilities to seed the inspector with.
        items: Vec<CapabilityRef<Id>>,
        /// Replace or append to the inspector's current contents.
        mode: InspectMode,
    },
    /// Destroy each target as an independently undoable mutation.
    Destroy {
        /// The selected, non-protected capabilities.
        targets: Vec<CapabilityRef<Id>>,
    },
    /// Delegate to the host's generic object context menu.
    ObjectMenu {
        /// The clicked capability only; the selection set is bypassed.
        target: CapabilityRef<Id>,
    },
}

/// State machine over {empty, one-or-more-selected} for strip icons.
///
/// Process-lifetime; only clicks mutate it. Selection keys are the
/// capability identity hashes ([`CapabilityRef::key`]), which the host
/// guarantees unique across nodes.
#[derive(Clone, Debug, Default)]
pub struct StripController<Id> {
    selection: SelectionSet<StripHit<Id>>,
}

impl<Id: Copy> StripController<Id> {
    /// Empty controller.
    pub fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
        }
    }

    /// Whether the capability with identity `key` is selected.
    pub fn is_selected(&self, key: u64) -> bool {
        self.selection.contains(key)
    }

    /// Key of the active (most recently added) selection entry.
    pub fn active_key(&self) -> Option<u64> {
        self.selection.active_key()
    }

    /// Number of selected capabilities.
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    /// `true` when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Processes a mouse-down. `hit` is the icon under the pointer, or
    /// `None` when the press landed outside every interactive region.
    pub fn on_mouse_down(
        &mut self,
        button: MouseButton,
        mods: Modifiers,
        hit: Option<StripHit<Id>>,
    ) -> StripResponse<Id> {
        let Some(hit) = hit else {
            if button == MouseButton::Left && mods.is_empty() && !self.selection.is_empty() {
                self.selection.clear();
                return StripResponse::Cleared;
            }
            return StripResponse::Ignored;
        };

        match button {
            MouseButton::Left => {
                if mods.contains(Modifiers::CTRL) {
                    self.selection.toggle(hit.target.key, hit);
                } else {
                    self.selection.select_only(hit.target.key, hit);
                }
                StripResponse::Consumed
            }
            MouseButton::Middle => {
                let mut items: Vec<CapabilityRef<Id>> =
                    self.selection.iter().map(|(_, entry)| entry.target).collect();
                if !self.selection.contains(hit.target.key) {
                    items.push(hit.target);
                }
                let mode = if mods.contains(Modifiers::SHIFT) {
                    InspectMode::Append
                } else {
                    InspectMode::Replace
                };
                StripResponse::Inspect { items, mode }
            }
            MouseButton::Right => {
                if mods.contains(Modifiers::CTRL) {
                    let targets: Vec<CapabilityRef<Id>> = self
                        .selection
                        .iter()
                        .filter(|(_, entry)| !entry.protected)
                        .map(|(_, entry)| entry.target)
                        .collect();
                    self.selection.clear();
                    StripResponse::Destroy { targets }
                } else {
                    StripResponse::ObjectMenu { target: hit.target }
                }
            }
        }
    }
}
