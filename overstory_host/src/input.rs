// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame phases and input events as handed to the per-row callback.

use kurbo::Point;

/// Mouse button identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Middle button / wheel click.
    Middle,
    /// Secondary button.
    Right,
}

bitflags::bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        /// Control (or the host's primary command modifier).
        const CTRL = 0b001;
        /// Shift.
        const SHIFT = 0b010;
        /// Alt / Option.
        const ALT = 0b100;
    }
}

/// Opaque host key code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyCode(pub u16);

/// A key plus the modifiers that must be held with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chord {
    /// The key.
    pub code: KeyCode,
    /// Exact modifier set required.
    pub mods: Modifiers,
}

/// What kind of input the current callback carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// A mouse button was pressed.
    MouseDown(MouseButton),
    /// A mouse button was released.
    MouseUp(MouseButton),
    /// A key was pressed.
    KeyDown(KeyCode),
    /// A key was released.
    KeyUp(KeyCode),
}

/// One input event, delivered through the row callback's input phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputEvent {
    /// The event kind.
    pub kind: InputKind,
    /// Pointer position in the same space as row rects (also present for
    /// key events: hover-sensitive decorations read it there too).
    pub pointer: Point,
    /// Held modifiers.
    pub mods: Modifiers,
}

impl InputEvent {
    /// `true` if this is a key-down matching `chord` exactly.
    pub fn is_chord_down(&self, chord: Chord) -> bool {
        matches!(self.kind, InputKind::KeyDown(code) if code == chord.code)
            && self.mods == chord.mods
    }

    /// `true` if this is a mouse-down with `button`.
    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.kind == InputKind::MouseDown(button)
    }

    /// `true` if this is a mouse-up with `button`.
    pub fn is_mouse_up(&self, button: MouseButton) -> bool {
        self.kind == InputKind::MouseUp(button)
    }
}

/// The frame phase a row callback executes under.
///
/// Per row, Layout precedes Paint precedes Input. Decorations must claim
/// identical widths under Paint and Input so geometry never diverges between
/// what was drawn and what is hit-tested; only draw calls are paint-gated
/// and only hit tests are input-gated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FramePhase {
    /// Measuring pass; the engine draws nothing and claims nothing here.
    Layout,
    /// Repaint pass. Carries the pointer so hover-gated decorations render
    /// consistently with the following input pass.
    Paint {
        /// Current pointer position.
        pointer: Point,
    },
    /// Input delivery pass.
    Input(InputEvent),
}

impl FramePhase {
    /// The input event, if this is an input phase.
    pub fn input(&self) -> Option<&InputEvent> {
        match self {
            Self::Input(ev) => Some(ev),
            _ => None,
        }
    }

    /// `true` for the repaint pass.
    pub fn is_paint(&self) -> bool {
        matches!(self, Self::Paint { .. })
    }

    /// Pointer position, when the phase carries one.
    pub fn pointer(&self) -> Option<Point> {
        match self {
            Self::Layout => None,
            Self::Paint { pointer } => Some(*pointer),
            Self::Input(ev) => Some(ev.pointer),
        }
    }
}
