// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Glyph sprite scene node.
//!
//! One node per visible character. The owning label pools nodes across text
//! updates: an existing node is retargeted to a new texture instead of being
//! destroyed and recreated, and the tail of the pool is dropped when the text
//! shrinks.

use crate::util::{PointF32, SizeF32};
use serde::{Deserialize, Serialize};

use super::texture::Texture;

/// RGBA color, components in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// One positioned glyph.
///
/// `position` is the final scene position after alignment and justification;
/// `original_position` keeps the raw layout-pass position that those passes
/// shift from.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphSprite {
    pub texture: Option<Texture>,
    pub size: SizeF32,
    pub position: PointF32,
    pub original_position: PointF32,
    pub color: Color,
    pub color_blend_factor: f32,
}

impl GlyphSprite {
    pub fn new(texture: Option<Texture>) -> Self {
        let mut sprite = Self {
            texture: None,
            size: SizeF32::default(),
            position: PointF32::default(),
            original_position: PointF32::default(),
            color: Color::WHITE,
            color_blend_factor: 1.0,
        };
        sprite.set_texture(texture);
        sprite
    }

    /// Retarget this node to another glyph texture. A glyph with no atlas
    /// entry collapses to a zero-size placeholder.
    pub fn set_texture(&mut self, texture: Option<Texture>) {
        self.size = match &texture {
            Some(t) => SizeF32 {
                width: t.width,
                height: t.height,
            },
            None => SizeF32::default(),
        };
        self.texture = texture;
    }

    pub fn set_pos(&mut self, x: f32, y: f32) {
        self.position = PointF32 { x, y };
    }
}
