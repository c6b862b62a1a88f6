// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Bitmap-font descriptor parsing and metric lookup.
//!
//! The descriptor is an xml-like markup with three element kinds:
//! `common` (line height), `char` (per-glyph advance and pen offsets) and
//! `kerning` (per-pair horizontal adjustment). Everything else is skipped.
//! Parsing is a single forward pass; element order does not matter.
//!
//! Malformed or absent numeric attributes default to 0 and are never an
//! error. The only failure a caller can see is a descriptor file that does
//! not exist, reported by [`BitmapFont::load`].

use crate::asset::read_descriptor;
use crate::render::texture::{Texture, TextureAtlas};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Font result type
pub type FontResult<T> = Result<T, FontError>;

/// Font error types
#[derive(Debug)]
pub enum FontError {
    /// Descriptor resource could not be located
    DescriptorNotFound(String),
}

impl std::fmt::Display for FontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontError::DescriptorNotFound(path) => {
                write!(f, "font descriptor not found: {}", path)
            }
        }
    }
}

impl std::error::Error for FontError {}

/// Layout metrics of one glyph, in unscaled font units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GlyphMetric {
    /// horizontal cursor advance after drawing this glyph
    pub advance_x: f32,
    /// pen-to-glyph-origin x offset
    pub offset_x: f32,
    /// pen-to-glyph-origin y offset
    pub offset_y: f32,
}

/// Parsed bitmap font: line height, per-glyph metrics, kerning pairs and the
/// glyph textures resolved eagerly from the atlas at parse time.
///
/// Read-only after construction; share one instance across labels with `Rc`.
#[derive(Debug)]
pub struct BitmapFont {
    line_height: f32,
    glyphs: HashMap<u32, GlyphMetric>,
    kernings: HashMap<(u32, u32), f32>,
    textures: HashMap<u32, Texture>,
}

impl BitmapFont {
    /// Locate `<dir>/<name><suffix>.xml` for the device scale factor, read
    /// it and parse it against `atlas`.
    pub fn load<A: TextureAtlas>(
        dir: &str,
        name: &str,
        scale_factor: f32,
        atlas: &A,
    ) -> FontResult<Self> {
        let text = read_descriptor(dir, name, scale_factor)?;
        Ok(Self::parse(&text, atlas))
    }

    /// Parse descriptor text. Never fails: unknown elements are skipped and
    /// bad numeric fields default to 0.
    pub fn parse<A: TextureAtlas>(descriptor: &str, atlas: &A) -> Self {
        let mut font = Self {
            line_height: 0.0,
            glyphs: HashMap::new(),
            kernings: HashMap::new(),
            textures: HashMap::new(),
        };
        for elem in ElementScanner::new(descriptor) {
            match elem.name {
                "common" => {
                    // integer in the descriptor, stored as float
                    font.line_height = elem.attr_int("lineHeight") as f32;
                }
                "char" => {
                    let id = elem.attr_id("id");
                    font.glyphs.insert(
                        id,
                        GlyphMetric {
                            advance_x: elem.attr_f32("xadvance"),
                            offset_x: elem.attr_f32("xoffset"),
                            offset_y: elem.attr_f32("yoffset"),
                        },
                    );
                    match atlas.texture_named(&id.to_string()) {
                        Some(tex) => {
                            font.textures.insert(id, tex);
                        }
                        None => {
                            warn!("no atlas texture for glyph {}", id);
                        }
                    }
                }
                "kerning" => {
                    let first = elem.attr_id("first");
                    let second = elem.attr_id("second");
                    font.kernings
                        .insert((first, second), elem.attr_f32("amount"));
                }
                _ => {}
            }
        }
        debug!(
            "bitmap font parsed: {} glyphs, {} kernings, line height {}",
            font.glyphs.len(),
            font.kernings.len(),
            font.line_height
        );
        font
    }

    /// Vertical distance between baselines, in font units.
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Cursor advance for a glyph; 0 for an unknown id.
    pub fn advance_x(&self, id: u32) -> f32 {
        self.glyphs.get(&id).map_or(0.0, |g| g.advance_x)
    }

    /// Pen x offset for a glyph; 0 for an unknown id.
    pub fn offset_x(&self, id: u32) -> f32 {
        self.glyphs.get(&id).map_or(0.0, |g| g.offset_x)
    }

    /// Pen y offset for a glyph; 0 for an unknown id.
    pub fn offset_y(&self, id: u32) -> f32 {
        self.glyphs.get(&id).map_or(0.0, |g| g.offset_y)
    }

    /// Kerning adjustment applied when `second` immediately follows `first`;
    /// 0 for an unregistered pair.
    pub fn kerning(&self, first: u32, second: u32) -> f32 {
        self.kernings.get(&(first, second)).copied().unwrap_or(0.0)
    }

    /// Atlas texture cached for a glyph at parse time.
    pub fn texture(&self, id: u32) -> Option<&Texture> {
        self.textures.get(&id)
    }

    pub fn glyph(&self, id: u32) -> Option<&GlyphMetric> {
        self.glyphs.get(&id)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

/// One scanned markup element with its raw attributes.
struct Element<'a> {
    name: &'a str,
    attrs: Vec<(&'a str, &'a str)>,
}

impl<'a> Element<'a> {
    fn attr(&self, key: &str) -> Option<&'a str> {
        self.attrs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    fn attr_f32(&self, key: &str) -> f32 {
        self.attr(key)
            .and_then(|v| v.parse::<f32>().ok())
            .unwrap_or(0.0)
    }

    fn attr_int(&self, key: &str) -> i64 {
        self.attr(key)
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(0)
    }

    fn attr_id(&self, key: &str) -> u32 {
        self.attr(key)
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(0)
    }
}

/// Forward scanner over xml-like markup. Yields start elements with their
/// attributes; declarations, comments and closing tags are skipped. Quoting
/// is tolerant: values may be double-quoted or bare.
struct ElementScanner<'a> {
    rest: &'a str,
}

impl<'a> ElementScanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for ElementScanner<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Element<'a>> {
        loop {
            let source = self.rest;
            let lt = source.find('<')?;
            let after = &source[lt + 1..];
            if let Some(comment) = after.strip_prefix("!--") {
                match comment.find("-->") {
                    Some(end) => {
                        self.rest = &comment[end + 3..];
                        continue;
                    }
                    None => {
                        self.rest = "";
                        return None;
                    }
                }
            }
            if after.starts_with('?') || after.starts_with('!') || after.starts_with('/') {
                match after.find('>') {
                    Some(end) => {
                        self.rest = &after[end + 1..];
                        continue;
                    }
                    None => {
                        self.rest = "";
                        return None;
                    }
                }
            }
            let end = match after.find('>') {
                Some(end) => end,
                None => {
                    self.rest = "";
                    return None;
                }
            };
            let body = after[..end].trim_end_matches('/');
            self.rest = &after[end + 1..];

            let mut parts = body.splitn(2, char::is_whitespace);
            let name = parts.next().unwrap_or("").trim();
            if name.is_empty() {
                continue;
            }
            let attrs = parts.next().map(parse_attrs).unwrap_or_default();
            return Some(Element { name, attrs });
        }
    }
}

fn parse_attrs(s: &str) -> Vec<(&str, &str)> {
    let mut out = Vec::new();
    let mut rest = s;
    loop {
        rest = rest.trim_start();
        let eq = match rest.find('=') {
            Some(i) => i,
            None => break,
        };
        let key = rest[..eq].trim();
        let after_eq = rest[eq + 1..].trim_start();
        let value;
        if let Some(quoted) = after_eq.strip_prefix('"') {
            match quoted.find('"') {
                Some(q) => {
                    value = &quoted[..q];
                    rest = &quoted[q + 1..];
                }
                None => {
                    value = quoted;
                    rest = "";
                }
            }
        } else {
            let end = after_eq
                .find(char::is_whitespace)
                .unwrap_or(after_eq.len());
            value = &after_eq[..end];
            rest = &after_eq[end..];
        }
        if !key.is_empty() {
            out.push((key, value));
        }
    }
    out
}
