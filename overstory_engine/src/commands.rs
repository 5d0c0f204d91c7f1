// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tool commands for the surrounding environment to bind to menus or
//! shortcuts. None of these run inside the row callback; all mutations
//! route through [`HostAdapter::apply`] so the host keeps them undoable.

use overstory_host::{EngineConfig, HostAdapter, HostCaps, Mutation, SceneNode};

use crate::driver::Engine;

/// Flips decorating on or off and repaints.
pub fn toggle_enabled<N, H>(engine: &mut Engine<N>, host: &mut H)
where
    N: SceneNode,
    H: HostAdapter<Node = N>,
{
    engine.set_enabled(!engine.enabled());
    host.request_repaint();
}

/// Collapses every row of the tree view, when the host supports it.
pub fn collapse_all<H: HostAdapter>(host: &mut H) {
    if host.caps().contains(HostCaps::COLLAPSE) {
        host.collapse_all();
    }
}

/// Moves every selected node up one sibling position.
pub fn move_selection_up<H: HostAdapter>(host: &mut H) {
    move_selection(host, -1);
}

/// Moves every selected node down one sibling position.
pub fn move_selection_down<H: HostAdapter>(host: &mut H) {
    move_selection(host, 1);
}

fn move_selection<H: HostAdapter>(host: &mut H, delta: i32) {
    for id in host.selection() {
        host.apply(Mutation::MoveSibling { id, delta });
    }
    host.request_repaint();
}

/// Creates a new root-level group-boundary (separator) node named with the
/// configured prefix.
pub fn create_group_boundary<H: HostAdapter>(host: &mut H, config: &EngineConfig) {
    let mut name = config.separator_prefix.clone();
    name.push_str("New Group");
    host.apply(Mutation::CreateGroupBoundary { name });
    host.request_repaint();
}

/// Locks every selected node.
pub fn lock_selection<H: HostAdapter>(host: &mut H) {
    set_selection_locked(host, true);
}

/// Unlocks every selected node.
pub fn unlock_selection<H: HostAdapter>(host: &mut H) {
    set_selection_locked(host, false);
}

fn set_selection_locked<H: HostAdapter>(host: &mut H, locked: bool) {
    for id in host.selection() {
        host.apply(Mutation::SetLocked { id, locked });
    }
    host.request_repaint();
}
