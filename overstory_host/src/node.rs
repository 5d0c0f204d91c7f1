// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The node facade: the only view the engine has of the host's scene model.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use crate::draw::IconId;

/// Narrow facade over one content node of the host tree.
///
/// Handles are cheap clones (the host typically wraps an id plus a model
/// reference). The engine reads through this trait and never mutates: all
/// edits go through [`crate::Mutation`] so the host can make them undoable.
///
/// Ancestor walks use [`SceneNode::parent`] handles, so hierarchy queries
/// are structural; row indexes are never used to infer parentage.
pub trait SceneNode: Clone {
    /// Stable node identifier, as supplied to the per-row callback.
    type Id: Copy + Eq + Hash + Debug;

    /// The node's stable identifier.
    fn id(&self) -> Self::Id;

    /// Display name of the node.
    fn name(&self) -> String;

    /// Parent handle, or `None` for a root node.
    fn parent(&self) -> Option<Self>;

    /// Number of direct children.
    fn child_count(&self) -> usize;

    /// Whether this node is the last (or only) child of its parent.
    ///
    /// Roots report `true`. Drives the elbow-vs-tee choice in the tree
    /// connector lines.
    fn is_last_sibling(&self) -> bool;

    /// Whether the node carries the designated folder capability.
    fn is_folder(&self) -> bool;

    /// Whether the node is active (participates in the scene).
    fn is_active(&self) -> bool;

    /// Whether the node carries the host's static flag.
    fn is_static(&self) -> bool;

    /// Whether the node is locked (not editable).
    fn is_locked(&self) -> bool;

    /// Whether the node is an instance of a reusable asset (prefab-like).
    fn is_prefab(&self) -> bool;

    /// Whether the backing asset of a prefab-like instance is missing.
    fn is_prefab_missing(&self) -> bool;

    /// The node's tag. The default tag (see
    /// [`crate::EngineConfig::default_tag`]) suppresses the tag badge.
    fn tag(&self) -> String;

    /// The node's layer index. Layer 0 suppresses the layer badge.
    fn layer(&self) -> u32;

    /// Distinct icon for this node, if it has one.
    ///
    /// `None` means the node only has the host's generic object icon, which
    /// the custom-icon decoration leaves alone.
    fn icon(&self) -> Option<IconId>;

    /// Attached capabilities, in host order.
    fn capabilities(&self) -> Vec<CapabilityInfo>;
}

/// One capability (component-like unit of behavior/data) attached to a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapabilityInfo {
    /// Identity hash of the capability instance. Stable for its lifetime,
    /// unique within the process.
    pub key: u64,
    /// The capability's type name, used for filtering and tooltips.
    pub type_name: String,
    /// Whether this is a user script (as opposed to a built-in capability).
    pub is_script: bool,
    /// Protected capabilities survive batch-destroy (shared sub-resources,
    /// e.g. a material referenced by several nodes).
    pub protected: bool,
    /// Resolved icon, or `None` when resolution failed. A failed resolution
    /// skips just this entry; it never aborts the rest of the icon strip.
    pub icon: Option<IconId>,
    /// Multi-valued sub-resources (e.g. the materials of a renderer-like
    /// capability), unfolded into extra icons at this capability's position.
    pub sub_resources: Vec<CapabilityInfo>,
}

impl CapabilityInfo {
    /// Convenience constructor for a plain, unprotected capability.
    pub fn new(key: u64, type_name: impl Into<String>, icon: Option<IconId>) -> Self {
        Self {
            key,
            type_name: type_name.into(),
            is_script: false,
            protected: false,
            icon,
            sub_resources: Vec::new(),
        }
    }
}

/// One top-level group (root collection) in the host tree stream.
///
/// Group boundary rows do not resolve to a node; the sequence machine maps
/// them onto these records instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupInfo {
    /// Display name of the group.
    pub name: String,
    /// Whether the group's content is loaded. Unloaded groups render their
    /// header with a "(not loaded" suffix.
    pub loaded: bool,
}
