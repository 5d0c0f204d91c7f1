// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Stream: per-row snapshots and streaming tree-context
//! reconstruction.
//!
//! ## Overview
//!
//! The host invokes the engine once per visible row, top to bottom, with
//! nothing but a node id and the row's rectangle. There is no visible-row
//! list, no hierarchy depth, and no stable row index, only positional
//! signals. This crate rebuilds the missing cross-row context in O(1)
//! memory per callback:
//!
//! - [`RowSnapshot`]: everything known about the current row for the
//!   duration of one callback: identity, geometry, the resolved node (or
//!   `None` for a group-boundary row), and derived classification flags.
//!   Exactly one snapshot is current at a time; decorations may only read
//!   the immutable previous copy held by the sequence state.
//! - [`SequenceState`]: the cross-callback machine tracking the deepest row
//!   seen, the previous row/snapshot/group, and the current group index, so
//!   the engine can detect group boundaries, stream restarts, and striping
//!   seams from row rectangles alone.
//!
//! ## Depth is a best-effort offset
//!
//! The row index resets to 0 at the top of every visible window while the
//! logical tree does not, so `deepest_row` is a continuously re-based
//! relative offset, not an absolute depth. Hosts that can supply explicit
//! depth should do so via `HostAdapter::row_depth`; the heuristic here is
//! the documented fallback, never an exact structural guarantee.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod sequence;
mod snapshot;

pub use sequence::SequenceState;
pub use snapshot::{RowSnapshot, row_index_of};
