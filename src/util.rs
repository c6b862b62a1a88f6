// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Geometry value types shared by font metrics and label layout.

use serde::{Deserialize, Serialize};

/// A point in layout space. Positive y points up, matching the scene
/// coordinate convention of the host engines this crate targets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointF32 {
    pub x: f32,
    pub y: f32,
}

/// Width and height of a laid-out text block or a single glyph sprite.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizeF32 {
    pub width: f32,
    pub height: f32,
}
