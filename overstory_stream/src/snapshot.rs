// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-callback row snapshot and its derived classifications.

use alloc::string::String;

use kurbo::{Point, Rect};

use overstory_host::{EngineConfig, HostAdapter, SceneNode};

/// Row index derived from the row rectangle, the only ordering signal the
/// host supplies.
pub fn row_index_of(rect: Rect) -> i32 {
    let h = rect.height();
    if h <= 0.0 {
        return 0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "row indexes are small by construction"
    )]
    let idx = (rect.y0 / h).floor() as i32;
    idx
}

/// Everything known about the current row, for one callback.
///
/// Recreated from scratch every callback. `node == None` means the row is a
/// group-boundary header, not a content node. A resolution miss is a
/// classification, never an error.
#[derive(Clone, Debug)]
pub struct RowSnapshot<N: SceneNode> {
    /// Stable id the host passed for this row.
    pub id: N::Id,
    /// Row geometry as given by the host.
    pub rect: Rect,
    /// Sub-rect bounding the label text; valid for content rows once the
    /// driver has measured the name.
    pub name_rect: Rect,
    /// `floor(rect.y / rect.height)`.
    pub row_index: i32,
    /// The resolved node, or `None` for a group-boundary row.
    pub node: Option<N>,
    /// Row 0: the first row of a fresh redraw pass.
    pub is_first_row: bool,
    /// The row stream restarted: this index is not past the previous one.
    pub is_stream_restart: bool,
    /// Root node (or boundary row).
    pub is_root: bool,
    /// In the host's row selection.
    pub is_selected: bool,
    /// Separator row (name-prefix convention, roots only render as bars).
    pub is_separator: bool,
    /// Carries the folder capability.
    pub is_folder: bool,
    /// Has unsaved modifications. Computed lazily: separator rows skip the
    /// host query entirely.
    pub is_dirty: bool,
    /// Instance of a reusable asset. Only computed for dirty content rows.
    pub is_prefab: bool,
    /// Prefab-like instance whose backing asset is missing.
    pub is_prefab_missing: bool,
    /// Pointer is inside the row rect.
    pub is_hovered: bool,
    /// Carries the host's static flag.
    pub is_static: bool,
}

impl<N: SceneNode> RowSnapshot<N> {
    /// Builds and classifies the snapshot for one callback.
    ///
    /// `previous_row` is the sequence state's last committed row index and
    /// only feeds restart detection. Classification is a pure function of
    /// the node, the configuration, and the raw geometry: rebuilding from
    /// the same inputs yields the same flags.
    pub fn build<H>(
        host: &H,
        config: &EngineConfig,
        id: N::Id,
        rect: Rect,
        pointer: Option<Point>,
        previous_row: i32,
    ) -> Self
    where
        H: HostAdapter<Node = N>,
    {
        let row_index = row_index_of(rect);
        let node = host.resolve(id);

        let mut snapshot = Self {
            id,
            rect,
            name_rect: rect,
            row_index,
            is_first_row: row_index == 0,
            is_stream_restart: row_index <= previous_row,
            is_root: true,
            is_selected: host.is_selected(id),
            is_separator: false,
            is_folder: false,
            is_dirty: false,
            is_prefab: false,
            is_prefab_missing: false,
            is_hovered: pointer.is_some_and(|p| rect.contains(p)),
            is_static: false,
            node,
        };

        if let Some(node) = &snapshot.node {
            // Folder capability wins; the name-prefix convention is the
            // separator fallback for hosts without one.
            snapshot.is_folder = node.is_folder();
            if !snapshot.is_folder {
                snapshot.is_separator = node.name().starts_with(config.separator_prefix.as_str());
            }
            snapshot.is_root = node.parent().is_none();
            snapshot.is_static = node.is_static();

            if !snapshot.is_separator {
                snapshot.is_dirty = host.is_dirty(id);
                if snapshot.is_dirty {
                    snapshot.is_prefab = node.is_prefab();
                    if snapshot.is_prefab {
                        snapshot.is_prefab_missing = node.is_prefab_missing();
                    }
                }
            }
        }

        snapshot
    }

    /// `true` for a group-boundary row.
    pub fn is_null(&self) -> bool {
        self.node.is_none()
    }

    /// The node's name, or an empty string for a boundary row.
    pub fn name(&self) -> String {
        self.node
            .as_ref()
            .map(SceneNode::name)
            .unwrap_or_default()
    }

    /// Sets the label sub-rect from a measured text width. The label starts
    /// one icon slot (16 units) right of the row origin.
    pub fn set_name_width(&mut self, width: f64) {
        let x0 = self.rect.x0 + 16.0;
        self.name_rect = Rect::new(x0, self.rect.y0, x0 + width, self.rect.y1);
    }
}
