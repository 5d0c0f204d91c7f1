// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Host: the adapter seam between the decoration engine and a
//! host-owned tree view.
//!
//! ## Overview
//!
//! Overstory augments a pre-existing tree view it does not own. Everything
//! the engine needs from that host flows through the explicit interfaces in
//! this crate, never through host internals:
//!
//! - [`SceneNode`]: the narrow facade over one content node: identity,
//!   name, parent handle, flags, tag/layer, and attached [`CapabilityInfo`]
//!   records.
//! - [`HostAdapter`]: id→node resolution, selection/dirty predicates, group
//!   bookkeeping, and every outbound effect (undoable [`Mutation`] dispatch,
//!   data-driven [`MenuSpec`] menus, inspector/icon-picker/rename requests,
//!   repaints).
//! - [`DrawSurface`]: the draw-primitive sink (filled rects, icon blits,
//!   text labels) plus text measurement.
//! - [`FramePhase`] / [`InputEvent`]: the per-row callback's phase argument.
//! - [`EngineConfig`]: the read-only configuration snapshot (feature
//!   toggles, alignments, theme, filters, key bindings). The configuration
//!   owner is responsible for change notification and repaint requests.
//!
//! The engine performs no structural mutation itself: every edit is a
//! [`Mutation`] value handed to [`HostAdapter::apply`], which the host wraps
//! in its own undo system. Menus are likewise data ([`MenuSpec`]); the host
//! displays them and feeds a chosen [`MenuAction`] back through the same
//! `apply` path.
//!
//! ## Activation
//!
//! [`HostAdapter::caps`] reports which hooks the host glue actually wired
//! up. Engine activation checks the required set and refuses to start on a
//! partial host (see [`ActivationError`]), leaving the tree view in its
//! unmodified default appearance rather than partially decorated.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod config;
mod draw;
mod input;
mod mutation;
mod node;

pub use adapter::{
    ActivationError, HostAdapter, HostCaps, InspectMode, MenuAction, MenuEntry, MenuSpec,
    ObjectMenuTarget, Preference, RenameTarget,
};
pub use config::{
    Alignment, BackgroundRule, ComponentFilter, EngineConfig, HoverGate, KeyBindings, Theme,
};
pub use draw::{DrawSurface, IconId, Rgba, ScaleMode, TextStyle};
pub use input::{Chord, FramePhase, InputEvent, InputKind, KeyCode, Modifiers, MouseButton};
pub use mutation::{CapabilityRef, Mutation};
pub use node::{CapabilityInfo, GroupInfo, SceneNode};
