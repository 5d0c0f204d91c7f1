// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine activation and the per-row entry point.

use core::fmt;

use kurbo::Rect;

use overstory_geom::WidthUse;
use overstory_host::{
    ActivationError, DrawSurface, EngineConfig, FramePhase, HostAdapter, HostCaps, MouseButton,
    Mutation, RenameTarget, SceneNode, TextStyle,
};
use overstory_select::{StripController, StripResponse};
use overstory_stream::{RowSnapshot, SequenceState};

use crate::decor::{self, GLOBAL_LEFT, RowCtx};

/// Result of one row callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowOutcome {
    /// The engine handled the input event; the host must not process it
    /// further and must stop delivering it to later rows.
    pub consumed: bool,
}

impl RowOutcome {
    /// Nothing handled; host default behavior proceeds.
    pub const PASS: Self = Self { consumed: false };
    /// Event consumed.
    pub const CONSUMED: Self = Self { consumed: true };
}

/// The decoration engine.
///
/// One instance per host tree view, constructed by [`Engine::activate`] and
/// threaded through the host glue's row callback. There is no global
/// instance; all cross-callback state lives here.
pub struct Engine<N: SceneNode> {
    config: EngineConfig,
    enabled: bool,
    sequence: SequenceState<N>,
    strip: StripController<N::Id>,
}

impl<N: SceneNode> fmt::Debug for Engine<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl<N: SceneNode> Engine<N> {
    /// Activates the engine against a host adapter.
    ///
    /// Refuses to activate when any required hook is missing, reporting the
    /// absent bits. A refused engine decorates nothing: the host tree view
    /// keeps its unmodified default appearance rather than a partial one.
    pub fn activate<H>(config: EngineConfig, host: &H) -> Result<Self, ActivationError>
    where
        H: HostAdapter<Node = N>,
    {
        let missing = HostCaps::required().difference(host.caps());
        if !missing.is_empty() {
            return Err(ActivationError::MissingHooks { missing });
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(caps = ?host.caps(), "engine activated");
        Ok(Self {
            config,
            enabled: true,
            sequence: SequenceState::new(),
            strip: StripController::new(),
        })
    }

    /// Whether decorations are currently running.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Turns decorating on or off. The caller requests the repaint.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The current configuration snapshot.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replaces the configuration snapshot. The configuration owner is
    /// responsible for triggering a host repaint afterwards.
    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    /// The per-row callback, invoked once per visible row per frame phase.
    ///
    /// Early guards run in a fixed order: the engine toggle chord (always
    /// live, even while disabled), passthrough chords the host must keep,
    /// the disabled flag, the layout phase, and structural drags. Past the
    /// guards, the row is snapshotted, sequenced, and decorated.
    pub fn on_row<H>(
        &mut self,
        host: &mut H,
        surface: &mut dyn DrawSurface,
        id: N::Id,
        rect: Rect,
        phase: FramePhase,
    ) -> RowOutcome
    where
        H: HostAdapter<Node = N>,
    {
        if let Some(ev) = phase.input() {
            if ev.is_chord_down(self.config.keys.toggle_engine) {
                self.enabled = !self.enabled;
                host.request_repaint();
                return RowOutcome::CONSUMED;
            }
            if self
                .config
                .keys
                .passthrough
                .iter()
                .any(|chord| ev.is_chord_down(*chord))
            {
                return RowOutcome::PASS;
            }
        }
        if !self.enabled || matches!(phase, FramePhase::Layout) || host.drag_in_progress() {
            return RowOutcome::PASS;
        }

        let mut snap = RowSnapshot::build(
            host,
            &self.config,
            id,
            rect,
            phase.pointer(),
            self.sequence.previous_row(),
        );

        #[cfg(feature = "tracing")]
        if !snap.is_first_row && snap.row_index == self.sequence.previous_row() {
            tracing::warn!(
                row = snap.row_index,
                "row index repeated within a frame; decorating anyway"
            );
        }

        self.sequence.begin_row(&snap, host);

        if !snap.is_null() {
            let width = surface.text_width(&snap.name(), TextStyle::Label);
            snap.set_name_width(width);
        }

        let Self {
            config,
            sequence,
            strip,
            ..
        } = self;
        let ctx = RowCtx {
            config,
            snap: &snap,
            phase,
        };
        let isolation = host.in_isolation_mode();

        let outcome = if snap.is_null() {
            decorate_boundary(host, surface, &ctx, sequence, isolation)
        } else if snap.is_separator && snap.is_root {
            // Separator rows render as a header bar and short-circuit every
            // other decoration except the grid line.
            decor::background::row_stripe(surface, &ctx, sequence, isolation);
            decor::separator::header_bar(surface, &ctx);
            decor::grid::grid_line(surface, &ctx, GLOBAL_LEFT);
            RowOutcome::PASS
        } else {
            decorate_content(host, surface, &ctx, sequence, strip, isolation)
        };

        sequence.commit(snap);
        outcome
    }
}

fn decorate_boundary<H: HostAdapter>(
    host: &mut H,
    surface: &mut dyn DrawSurface,
    ctx: &RowCtx<'_, H::Node>,
    seq: &SequenceState<H::Node>,
    isolation: bool,
) -> RowOutcome {
    decor::background::row_stripe(surface, ctx, seq, isolation);

    let group = seq.current_group();
    if let Some(info) = host.group_at(group) {
        decor::separator::group_suffix(surface, ctx, &info);
    }

    if let Some(ev) = ctx.input()
        && ev.is_chord_down(ctx.config.keys.rename)
        && ctx.snap.is_hovered
        && host.caps().contains(HostCaps::RENAME)
    {
        host.show_rename(RenameTarget::Group(group));
        return RowOutcome::CONSUMED;
    }

    decor::grid::grid_line(surface, ctx, GLOBAL_LEFT);
    RowOutcome::PASS
}

fn decorate_content<H: HostAdapter>(
    host: &mut H,
    surface: &mut dyn DrawSurface,
    ctx: &RowCtx<'_, H::Node>,
    seq: &SequenceState<H::Node>,
    strip: &mut StripController<<H::Node as SceneNode>::Id>,
    isolation: bool,
) -> RowOutcome {
    let snap = ctx.snap;
    let Some(node) = snap.node.clone() else {
        return RowOutcome::PASS;
    };

    // The after-name cursor is an absolute x position; left is the content
    // margin, pulled in two units while editing an isolated subtree.
    let mut widths = WidthUse {
        left: GLOBAL_LEFT - if isolation { 2.0 } else { 0.0 },
        right: 0.0,
        after_name: snap.name_rect.x1 + ctx.config.after_name_offset,
    };

    decor::background::row_stripe(surface, ctx, seq, isolation);
    decor::background::instant_override(surface, ctx, &node, widths.left);
    decor::tree_lines::connectors(surface, ctx, &node, host.row_depth(snap.id));

    let mut consumed = decor::icons::object_icon(host, surface, ctx, &node, &mut widths);
    consumed |= decor::icons::lock_icon(host, surface, ctx, &node, &mut widths);
    // Fixed gap past the lock slot, claimed whether or not the row is locked.
    widths.after_name += 8.0;
    consumed |= decor::icons::static_marker(host, surface, ctx);
    consumed |= decor::badges::tag_badge(host, surface, ctx, &node, &mut widths);
    consumed |= decor::badges::layer_badge(host, surface, ctx, &node, &mut widths);
    consumed |= decor::strip::capability_strip(host, surface, ctx, &node, &mut widths, strip);
    decor::grid::grid_line(surface, ctx, widths.left);

    if consumed {
        return RowOutcome::CONSUMED;
    }

    if let Some(ev) = ctx.input() {
        if ev.is_mouse_down(MouseButton::Middle) && snap.is_hovered {
            host.apply(Mutation::SetActive {
                id: snap.id,
                active: !node.is_active(),
            });
            host.request_repaint();
            return RowOutcome::CONSUMED;
        }
        if ev.is_chord_down(ctx.config.keys.collapse_all)
            && host.caps().contains(HostCaps::COLLAPSE)
        {
            host.collapse_all();
            return RowOutcome::CONSUMED;
        }
        if ev.is_chord_down(ctx.config.keys.rename)
            && host.caps().contains(HostCaps::RENAME)
            && host.selection().len() > 1
        {
            host.show_rename(RenameTarget::Selection);
            return RowOutcome::CONSUMED;
        }
        // A plain press on the hovered row body, outside every interactive
        // region, deselects the capability strip.
        if ev.is_mouse_down(MouseButton::Left)
            && snap.is_hovered
            && strip.on_mouse_down(MouseButton::Left, ev.mods, None) == StripResponse::Cleared
        {
            host.request_repaint();
        }
    }
    RowOutcome::PASS
}
