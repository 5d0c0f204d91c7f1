// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural edits, expressed as data and dispatched through the host.

use alloc::string::String;

/// Addresses one capability on one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CapabilityRef<Id> {
    /// Owning node.
    pub node: Id,
    /// Capability identity hash (see [`crate::CapabilityInfo::key`]).
    pub key: u64,
}

/// A structural edit requested by the engine.
///
/// The host wraps each applied mutation so it is independently undoable;
/// the engine never trades that reversibility away. Recursive variants
/// apply to the node and its whole subtree.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation<Id> {
    /// Rename a node.
    Rename {
        /// Target node.
        id: Id,
        /// New name.
        name: String,
    },
    /// Activate or deactivate a node.
    SetActive {
        /// Target node.
        id: Id,
        /// New active state.
        active: bool,
    },
    /// Assign a tag.
    SetTag {
        /// Target node.
        id: Id,
        /// Tag to assign.
        tag: String,
        /// Also apply to all descendants.
        recursive: bool,
    },
    /// Assign a layer.
    SetLayer {
        /// Target node.
        id: Id,
        /// Layer index to assign.
        layer: u32,
        /// Also apply to all descendants.
        recursive: bool,
    },
    /// Set or clear the static flag.
    SetStatic {
        /// Target node.
        id: Id,
        /// New static state.
        value: bool,
        /// Also apply to all descendants.
        recursive: bool,
    },
    /// Lock or unlock a node (and its capabilities).
    SetLocked {
        /// Target node.
        id: Id,
        /// New lock state.
        locked: bool,
    },
    /// Destroy one capability.
    DestroyCapability {
        /// The capability to destroy.
        target: CapabilityRef<Id>,
    },
    /// Reparent a node (`None` makes it a root). Structural drags resolve
    /// to this once the host's drag machinery hands back the drop target.
    Reparent {
        /// Target node.
        id: Id,
        /// New parent, or `None` for root level.
        new_parent: Option<Id>,
    },
    /// Move a node among its siblings by `delta` positions (negative = up).
    MoveSibling {
        /// Target node.
        id: Id,
        /// Signed sibling-index offset.
        delta: i32,
    },
    /// Create a new root-level group-boundary (separator) node.
    CreateGroupBoundary {
        /// Name for the new node, already carrying the separator prefix.
        name: String,
    },
}
