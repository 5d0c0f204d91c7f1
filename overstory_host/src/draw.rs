// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw primitives the engine emits back to the host.

use kurbo::Rect;

/// Opaque handle to a host-loaded texture/icon resource.
///
/// Asset loading is host business; the engine only passes handles around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IconId(pub u32);

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba {
    /// Opaque white, the identity tint for blits.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from RGB.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// How a blit maps the icon onto its destination rect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleMode {
    /// Scale uniformly to fit inside the rect.
    Fit,
    /// Stretch to fill the rect exactly.
    Stretch,
}

/// Text style selector for labels; concrete fonts are host-owned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Regular tree label.
    Label,
    /// Bold tree label (group headers use this for measurement).
    Bold,
    /// Small italic badge text (tag/layer).
    Badge,
    /// Centered separator header text.
    Header,
}

/// Sink for the engine's draw calls, plus text measurement.
///
/// Implementations translate these into the host's immediate-mode drawing.
/// Measurement must be available in every phase: geometry (label width,
/// badge width) is computed identically under Paint and Input.
pub trait DrawSurface {
    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Blits `icon` into `rect` with the given scale mode and tint.
    /// [`Rgba::WHITE`] is the identity tint.
    fn blit(&mut self, rect: Rect, icon: IconId, mode: ScaleMode, tint: Rgba);

    /// Draws `text` inside `rect`.
    fn label(&mut self, rect: Rect, text: &str, style: TextStyle, color: Rgba);

    /// Width of `text` in the given style, in row-rect units.
    fn text_width(&self, text: &str, style: TextStyle) -> f64;
}
