// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! pixel_glyph renders bitmap-font text as glyph sprites in a 2d scene.
//! It parses a bitmap-font descriptor (glyph metrics, kerning pairs, line
//! height) and lays out one pooled sprite per character with block alignment
//! and per-line justification.
//!
//! The host engine stays in charge of textures and drawing: it hands in a
//! [`TextureAtlas`](render::TextureAtlas) capability and a device scale
//! factor, and reads back positioned [`GlyphSprite`](render::GlyphSprite)
//! nodes. Several labels can share one parsed [`BitmapFont`](font::BitmapFont)
//! through an `Rc`.
//!
//! Typical flow:
//!
//! ```text
//! descriptor xml --> BitmapFont::parse --> GlyphLabel::new / set_text
//!                                          --> positioned glyph sprites
//! ```

/// descriptor resource location and device-scale suffix selection
pub mod asset;

/// bitmap-font descriptor parsing and metric lookup
pub mod font;

/// glyph label layout: sprite pooling, alignment, justification
pub mod label;

/// log
pub mod log;

/// texture atlas capability and the glyph sprite scene node
pub mod render;

/// common geometry value types
pub mod util;

// Re-export core types
pub use font::{BitmapFont, FontError, FontResult, GlyphMetric};
pub use label::{GlyphLabel, HorizontalAlign, Justify, VerticalAlign};
pub use render::{Color, GlyphSprite, StaticAtlas, Texture, TextureAtlas};
pub use util::{PointF32, SizeF32};
