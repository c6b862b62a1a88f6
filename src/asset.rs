// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Asset module locates and reads bitmap-font descriptor resources.
//! High-density displays ship their own descriptor variants, selected by a
//! filename suffix derived from the device scale factor.

use crate::font::{FontError, FontResult};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Descriptor filename suffix for a device scale factor.
///
/// Exactly 2.0 selects the "@2x" variant and factors strictly between 2 and
/// 3 select "@3x"; every other factor (including exactly 3.0) falls back to
/// the bare name.
pub fn scale_suffix(scale_factor: f32) -> &'static str {
    if scale_factor == 2.0 {
        "@2x"
    } else if scale_factor > 2.0 && scale_factor < 3.0 {
        "@3x"
    } else {
        ""
    }
}

/// Full path of the descriptor file for `name` at the given scale factor.
pub fn descriptor_path(dir: &str, name: &str, scale_factor: f32) -> PathBuf {
    Path::new(dir).join(format!("{}{}.xml", name, scale_suffix(scale_factor)))
}

/// Read the descriptor text for `name` at the given scale factor.
///
/// A descriptor that cannot be located or read is the one fatal error in
/// this crate; malformed descriptor content is handled field by field during
/// parsing and never reported here.
pub fn read_descriptor(dir: &str, name: &str, scale_factor: f32) -> FontResult<String> {
    let path = descriptor_path(dir, name, scale_factor);
    match fs::read_to_string(&path) {
        Ok(text) => {
            info!("descriptor load:{:?}", path);
            Ok(text)
        }
        Err(_) => Err(FontError::DescriptorNotFound(path.display().to_string())),
    }
}
