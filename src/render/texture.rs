// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Texture atlas capability.
//!
//! The crate never touches image data. Glyph textures are opaque handles
//! resolved once at font-parse time through the [`TextureAtlas`] trait, which
//! each host engine implements over its own atlas type. [`StaticAtlas`] is a
//! trivial name-to-size table, enough for headless layout and for tests.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque handle to one glyph image inside a texture atlas.
///
/// Only the entry name and the pixel size travel through layout; drawing
/// stays with the host engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Texture {
    pub name: String,
    pub width: f32,
    pub height: f32,
}

/// Capability the host engine provides for resolving glyph textures.
///
/// Returns `None` when the atlas has no entry for `name`; the caller lays the
/// glyph out as a zero-size placeholder instead of failing.
pub trait TextureAtlas {
    fn texture_named(&self, name: &str) -> Option<Texture>;
}

/// Map-backed atlas with fixed entries.
pub struct StaticAtlas {
    entries: HashMap<String, (f32, f32)>,
}

impl StaticAtlas {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register an entry with its pixel size.
    pub fn insert(&mut self, name: &str, width: f32, height: f32) {
        self.entries.insert(name.to_string(), (width, height));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StaticAtlas {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureAtlas for StaticAtlas {
    fn texture_named(&self, name: &str) -> Option<Texture> {
        self.entries.get(name).map(|&(width, height)| Texture {
            name: name.to_string(),
            width,
            height,
        })
    }
}
