// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Render module holds the pieces shared with the host engine:
//! - `texture`: the texture atlas capability and the opaque texture handle
//! - `sprite`: the glyph sprite scene node positioned by the label

pub mod sprite;
pub mod texture;

pub use sprite::{Color, GlyphSprite};
pub use texture::{StaticAtlas, Texture, TextureAtlas};
