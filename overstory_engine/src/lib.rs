// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Engine: incremental row decorations for a host-owned tree view.
//!
//! The host owns the tree widget, its rows, and the event loop; it calls
//! [`Engine::on_row`] once per visible row per frame phase with nothing but
//! a node id and the row rectangle. The engine rebuilds the missing context
//! (row order, group boundaries, depth) from those positional signals and
//! runs a fixed pipeline of decoration renderers over each row: background
//! stripes, group and separator headers, tree connector lines, object and
//! lock icons, tag/layer badges, the capability icon strip, and grid lines.
//!
//! Everything flows through the [`HostAdapter`](overstory_host::HostAdapter)
//! seam: draw primitives go out through a
//! [`DrawSurface`](overstory_host::DrawSurface), and every structural edit
//! is a [`Mutation`](overstory_host::Mutation) the host applies undoably.
//! The engine never spawns threads, performs I/O, or touches host state
//! directly.
//!
//! A decoration failure never aborts the row or the frame: unresolvable
//! rows are group boundaries, unresolvable capability icons are skipped
//! items, and ordering violations are ignored after an optional `tracing`
//! warning.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod commands;
mod decor;
mod driver;

pub use driver::{Engine, RowOutcome};
