// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-callback sequencing: deepest-row tracking and group resolution.
//!
//! ## Transition order
//!
//! Once per callback, in this order:
//!
//! 1. First row of a redraw pass: group index resets to 0 and the tracked
//!    depth shrinks to the previous row index.
//! 2. Boundary (null) row: single-group hosts resolve the one active group;
//!    multi-group hosts advance the group index by one per boundary row
//!    (except the very first), capped at `group_count - 1`. The index only
//!    ever moves forward; the stream is a strict top-to-bottom single pass.
//! 3. Content row after a stream restart: the depth is re-based relative to
//!    the new window's first content row; multi-group hosts re-resolve the
//!    group by scanning for the row's owner (group counts are small).
//! 4. At callback end ([`SequenceState::commit`]): the snapshot, row index,
//!    and group become the immutable "previous" values, and the deepest row
//!    ratchets up to the committed index.

use overstory_host::{HostAdapter, SceneNode};

use crate::snapshot::RowSnapshot;

/// Cross-callback state reconstructing row-to-row relationships.
///
/// Lives for one host frame at a time; the first-row transition doubles as
/// the frame reset, so a single long-lived instance serves every frame.
#[derive(Clone, Debug)]
pub struct SequenceState<N: SceneNode> {
    deepest_row: i32,
    previous_row: i32,
    previous: Option<RowSnapshot<N>>,
    current_group: usize,
    previous_group: Option<usize>,
}

impl<N: SceneNode> Default for SequenceState<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: SceneNode> SequenceState<N> {
    /// Fresh state, as before the first callback ever.
    pub fn new() -> Self {
        Self {
            deepest_row: i32::MIN,
            previous_row: i32::MIN,
            previous: None,
            current_group: 0,
            previous_group: None,
        }
    }

    /// The deepest (largest) re-based row index observed.
    pub fn deepest_row(&self) -> i32 {
        self.deepest_row
    }

    /// Row index committed by the previous callback.
    pub fn previous_row(&self) -> i32 {
        self.previous_row
    }

    /// Index of the group owning the current run of rows.
    pub fn current_group(&self) -> usize {
        self.current_group
    }

    /// Group committed by the previous callback.
    pub fn previous_group(&self) -> Option<usize> {
        self.previous_group
    }

    /// The immutable previous snapshot. Decorations read this, never
    /// another row's live snapshot.
    pub fn previous(&self) -> Option<&RowSnapshot<N>> {
        self.previous.as_ref()
    }

    /// Whether `row_index` sits on the depth seam where the background
    /// stripe would visually tear (the group-header transition row).
    pub fn at_depth_seam(&self, row_index: i32) -> bool {
        self.deepest_row == row_index
    }

    /// Runs transitions 1–3 for the snapshot under construction.
    pub fn begin_row<H>(&mut self, snapshot: &RowSnapshot<N>, host: &H)
    where
        H: HostAdapter<Node = N>,
    {
        if snapshot.is_first_row {
            self.current_group = 0;
            if self.deepest_row > self.previous_row {
                self.deepest_row = self.previous_row;
            }
        }

        let group_count = host.group_count();
        if snapshot.is_null() {
            if group_count > 1 && !snapshot.is_first_row && self.current_group + 1 < group_count {
                self.current_group += 1;
            }
        } else if snapshot.is_stream_restart {
            if self.deepest_row > self.previous_row {
                self.deepest_row = self.previous_row;
            }
            // Re-base relative to the new window's first content row.
            self.deepest_row -= snapshot.row_index;

            if group_count > 1 {
                let previous_was_content = self.previous.as_ref().is_some_and(|p| !p.is_null());
                if previous_was_content {
                    for index in 0..group_count {
                        if host.node_in_group(snapshot.id, index) {
                            self.current_group = index;
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Transition 4: captures the snapshot as the immutable previous row.
    pub fn commit(&mut self, snapshot: RowSnapshot<N>) {
        self.previous_row = snapshot.row_index;
        self.previous_group = Some(self.current_group);
        self.previous = Some(snapshot);
        if self.previous_row > self.deepest_row {
            self.deepest_row = self.previous_row;
        }
    }
}
