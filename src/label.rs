// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Glyph label layout.
//!
//! A [`GlyphLabel`] owns one pooled [`GlyphSprite`] per visible character of
//! its text. Changing the text rebuilds the pool in place (`update_label`)
//! and re-justifies; changing an alignment or justification property only
//! re-justifies. Setters compare the old and new value before triggering a
//! pass, so redundant assignments are free.
//!
//! Layout math works in two coordinate domains: glyph advances and kerning
//! stay in unscaled font units, while pen offsets and the line height are
//! converted to scene points through the device scale factor.

use crate::font::BitmapFont;
use crate::render::sprite::{Color, GlyphSprite};
use crate::util::{PointF32, SizeF32};
use std::rc::Rc;
use unicode_segmentation::UnicodeSegmentation;

/// Whole-block horizontal placement relative to the label origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Right,
    Center,
}

/// Whole-block vertical placement relative to the label origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Per-line horizontal distribution, applied on top of block alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Left,
    Right,
    Center,
}

/// A text block rendered as positioned glyph sprites.
pub struct GlyphLabel {
    text: Option<String>,
    horizontal_align: HorizontalAlign,
    vertical_align: VerticalAlign,
    justify: Justify,
    color: Color,
    color_blend_factor: f32,
    total_size: SizeF32,
    sprites: Vec<GlyphSprite>,
    font: Rc<BitmapFont>,
    scale_factor: f32,
}

impl GlyphLabel {
    /// Create a label and run a full layout pass. `scale_factor` is the
    /// host-supplied device pixel ratio (1.0 on fixed-density targets).
    pub fn new(text: Option<&str>, font: Rc<BitmapFont>, scale_factor: f32) -> Self {
        let mut label = Self {
            text: text.map(|t| t.to_string()),
            horizontal_align: HorizontalAlign::Center,
            vertical_align: VerticalAlign::Middle,
            justify: Justify::Left,
            color: Color::WHITE,
            color_blend_factor: 1.0,
            total_size: SizeF32::default(),
            sprites: vec![],
            font,
            scale_factor,
        };
        label.update_label();
        label.justify_text();
        label
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn sprites(&self) -> &[GlyphSprite] {
        &self.sprites
    }

    /// Size of the laid-out block for the current text. Alignment and
    /// justification never change it, only sprite positions.
    pub fn total_size(&self) -> SizeF32 {
        self.total_size
    }

    pub fn font(&self) -> &BitmapFont {
        &self.font
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub fn horizontal_align(&self) -> HorizontalAlign {
        self.horizontal_align
    }

    pub fn vertical_align(&self) -> VerticalAlign {
        self.vertical_align
    }

    pub fn justify(&self) -> Justify {
        self.justify
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn color_blend_factor(&self) -> f32 {
        self.color_blend_factor
    }

    pub fn set_text(&mut self, text: Option<&str>) {
        if self.text.as_deref() != text {
            self.text = text.map(|t| t.to_string());
            self.update_label();
            self.justify_text();
        }
    }

    pub fn set_horizontal_align(&mut self, align: HorizontalAlign) {
        if self.horizontal_align != align {
            self.horizontal_align = align;
            self.justify_text();
        }
    }

    pub fn set_vertical_align(&mut self, align: VerticalAlign) {
        if self.vertical_align != align {
            self.vertical_align = align;
            self.justify_text();
        }
    }

    pub fn set_justify(&mut self, justify: Justify) {
        if self.justify != justify {
            self.justify = justify;
            self.justify_text();
        }
    }

    /// Restyle the label and every live sprite.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        for sprite in &mut self.sprites {
            sprite.color = color;
        }
    }

    /// Restyle with the factor clamped to 0..=1.
    pub fn set_color_blend_factor(&mut self, factor: f32) {
        self.color_blend_factor = factor.clamp(0.0, 1.0);
        for sprite in &mut self.sprites {
            sprite.color_blend_factor = self.color_blend_factor;
        }
    }

    /// Rebuild the sprite pool for the current text and recompute
    /// `total_size`. Sprites beyond the new character count are dropped;
    /// missing ones are appended; the rest are retargeted in place.
    fn update_label(&mut self) {
        let text = match self.text.clone() {
            Some(t) => t,
            None => return,
        };
        let scale = self.scale_factor;
        let line_step = self.font.line_height() / scale;

        let clusters: Vec<&str> = text.graphemes(true).collect();
        let line_count = clusters.iter().filter(|&&c| is_line_break(c)).count();

        let target = clusters.len() - line_count;
        if target < self.sprites.len() {
            self.sprites.truncate(target);
        }

        let mut size = SizeF32::default();
        let mut pos = PointF32::default();
        let mut last_glyph: u32 = 0;

        if !clusters.is_empty() {
            size.height += line_step;
        }

        let mut real_count = 0usize;
        for &cluster in &clusters {
            if is_line_break(cluster) {
                pos.y -= line_step;
                size.height += line_step;
                pos.x = 0.0;
                // last_glyph carries across the break, so the first glyph of
                // the next line can still kern against it
                continue;
            }

            let glyph = glyph_id(cluster);
            let texture = self.font.texture(glyph).cloned();
            if real_count < self.sprites.len() {
                self.sprites[real_count].set_texture(texture);
            } else {
                self.sprites.push(GlyphSprite::new(texture));
            }
            let kern = self.font.kerning(last_glyph, glyph);
            let offset_x = self.font.offset_x(glyph);
            let offset_y = self.font.offset_y(glyph);
            let advance = self.font.advance_x(glyph);

            let sprite = &mut self.sprites[real_count];
            sprite.color = self.color;
            sprite.color_blend_factor = self.color_blend_factor;
            sprite.position = PointF32 {
                x: pos.x + (offset_x + kern) / scale,
                y: pos.y - (sprite.size.height + offset_y / scale),
            };
            sprite.original_position = sprite.position;

            // advance and kerning stay in unscaled font units
            pos.x += advance + kern;
            if size.width < pos.x {
                size.width = pos.x;
            }

            last_glyph = glyph;
            real_count += 1;
        }

        self.total_size = size;
    }

    /// Shift sprites for block alignment, then distribute each line for the
    /// justification mode. Works from `original_position`, so repeated calls
    /// with the same properties land on the same result.
    fn justify_text(&mut self) {
        let text = match self.text.clone() {
            Some(t) => t,
            None => return,
        };

        let shift = PointF32 {
            x: match self.horizontal_align {
                HorizontalAlign::Left => 0.0,
                HorizontalAlign::Right => -self.total_size.width,
                HorizontalAlign::Center => -self.total_size.width / 2.0,
            },
            y: match self.vertical_align {
                VerticalAlign::Top => 0.0,
                VerticalAlign::Bottom => -self.total_size.height,
                VerticalAlign::Middle => -self.total_size.height / 2.0,
            },
        };

        for sprite in &mut self.sprites {
            sprite.position = PointF32 {
                x: sprite.original_position.x + shift.x,
                y: sprite.original_position.y - shift.y,
            };
        }

        if self.justify == Justify::Left {
            return;
        }

        let mut num_nodes = 0usize;
        let mut line_start = 0usize;
        let mut width_for_line = 0.0f32;

        // a synthetic trailing break flushes the last line
        for cluster in text.graphemes(true).chain(std::iter::once("\n")) {
            if is_line_break(cluster) {
                for sprite in &mut self.sprites[line_start..num_nodes] {
                    match self.justify {
                        Justify::Right => {
                            sprite.position.x +=
                                self.total_size.width - width_for_line + shift.x;
                        }
                        _ => {
                            sprite.position.x +=
                                (self.total_size.width - width_for_line) / 2.0 + shift.x / 2.0;
                        }
                    }
                }
                line_start = num_nodes;
                width_for_line = 0.0;
            } else if num_nodes < self.sprites.len() {
                let sprite = &self.sprites[num_nodes];
                width_for_line = sprite.position.x + sprite.size.width;
                num_nodes += 1;
            }
        }
    }
}

fn is_line_break(cluster: &str) -> bool {
    matches!(cluster, "\n" | "\r\n" | "\r")
}

/// Glyph id of a user-perceived character: the value of its first scalar.
fn glyph_id(cluster: &str) -> u32 {
    cluster.chars().next().map_or(0, |c| c as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::BitmapFont;
    use crate::render::texture::StaticAtlas;

    const DESCRIPTOR: &str = r#"<common lineHeight="30"/>
<char id="65" xadvance="10" xoffset="0" yoffset="0"/>
<char id="66" xadvance="12" xoffset="2" yoffset="0"/>"#;

    const KERNED: &str = r#"<common lineHeight="30"/>
<char id="65" xadvance="10" xoffset="0" yoffset="0"/>
<char id="66" xadvance="12" xoffset="2" yoffset="0"/>
<kerning first="65" second="66" amount="-2"/>"#;

    fn demo_atlas() -> StaticAtlas {
        let mut atlas = StaticAtlas::new();
        atlas.insert("65", 10.0, 20.0);
        atlas.insert("66", 12.0, 20.0);
        atlas
    }

    fn demo_font(descriptor: &str) -> Rc<BitmapFont> {
        Rc::new(BitmapFont::parse(descriptor, &demo_atlas()))
    }

    fn left_top_label(text: &str, descriptor: &str) -> GlyphLabel {
        let mut label = GlyphLabel::new(Some(text), demo_font(descriptor), 1.0);
        label.set_horizontal_align(HorizontalAlign::Left);
        label.set_vertical_align(VerticalAlign::Top);
        label
    }

    #[test]
    fn test_single_line_layout() {
        let label = left_top_label("AB", DESCRIPTOR);
        let sprites = label.sprites();
        assert_eq!(sprites.len(), 2);
        assert_eq!(sprites[0].position.x, 0.0);
        // cursor sits at 10 after A, plus B's x offset of 2
        assert_eq!(sprites[1].position.x, 12.0);
        assert_eq!(sprites[0].position.y, -20.0);
        assert_eq!(label.total_size(), SizeF32 { width: 22.0, height: 30.0 });
    }

    #[test]
    fn test_left_top_positions_match_baseline() {
        let label = left_top_label("AB", DESCRIPTOR);
        for sprite in label.sprites() {
            assert_eq!(sprite.position, sprite.original_position);
        }
    }

    #[test]
    fn test_multiline_layout() {
        let label = left_top_label("A\nB", DESCRIPTOR);
        let sprites = label.sprites();
        assert_eq!(sprites.len(), 2);
        assert_eq!(label.total_size().height, 60.0);
        // second line starts at x 2 (B's offset), one line step down, with
        // the sprite top shifted by its own height
        assert_eq!(sprites[1].position.x, 2.0);
        assert_eq!(sprites[1].position.y, -50.0);
    }

    #[test]
    fn test_kerning_adjusts_position_and_advance() {
        let label = left_top_label("AB", KERNED);
        let sprites = label.sprites();
        // offset 2 plus kerning -2
        assert_eq!(sprites[1].position.x, 10.0);
        // advance 10 + 12 with kerning -2
        assert_eq!(label.total_size().width, 20.0);
    }

    #[test]
    fn test_kerning_carries_across_line_break() {
        let label = left_top_label("A\nB", KERNED);
        let sprites = label.sprites();
        // B still kerns against the A that ended the previous line
        assert_eq!(sprites[1].position.x, 0.0);
    }

    #[test]
    fn test_relayout_is_idempotent() {
        let mut label = GlyphLabel::new(Some("AB"), demo_font(DESCRIPTOR), 1.0);
        let before: Vec<_> = label.sprites().iter().map(|s| s.position).collect();
        let size_before = label.total_size();
        label.set_text(Some("A"));
        label.set_text(Some("AB"));
        let after: Vec<_> = label.sprites().iter().map(|s| s.position).collect();
        assert_eq!(before, after);
        assert_eq!(size_before, label.total_size());
    }

    #[test]
    fn test_pool_shrinks_and_keeps_head_sprite() {
        let mut label = GlyphLabel::new(Some("AB"), demo_font(DESCRIPTOR), 1.0);
        assert_eq!(label.sprites().len(), 2);
        let baseline = label.sprites()[0].original_position;
        label.set_text(Some("A"));
        assert_eq!(label.sprites().len(), 1);
        assert_eq!(label.sprites()[0].original_position, baseline);
    }

    #[test]
    fn test_pool_grows_on_demand() {
        let mut label = GlyphLabel::new(Some("A"), demo_font(DESCRIPTOR), 1.0);
        assert_eq!(label.sprites().len(), 1);
        label.set_text(Some("AB"));
        assert_eq!(label.sprites().len(), 2);
    }

    #[test]
    fn test_newlines_consume_no_sprites() {
        let label = left_top_label("A\nB\n", DESCRIPTOR);
        assert_eq!(label.sprites().len(), 2);
        assert_eq!(label.total_size().height, 90.0);
    }

    #[test]
    fn test_center_alignment_shifts_from_baseline() {
        let mut label = left_top_label("AB", DESCRIPTOR);
        label.set_horizontal_align(HorizontalAlign::Center);
        let half = label.total_size().width / 2.0;
        for sprite in label.sprites() {
            assert_eq!(sprite.position.x, sprite.original_position.x - half);
        }
    }

    #[test]
    fn test_vertical_alignment_shifts() {
        let mut label = left_top_label("AB", DESCRIPTOR);
        label.set_vertical_align(VerticalAlign::Middle);
        let half = label.total_size().height / 2.0;
        for sprite in label.sprites() {
            assert_eq!(sprite.position.y, sprite.original_position.y + half);
        }
        label.set_vertical_align(VerticalAlign::Bottom);
        for sprite in label.sprites() {
            assert_eq!(
                sprite.position.y,
                sprite.original_position.y + label.total_size().height
            );
        }
    }

    #[test]
    fn test_right_justification_per_line() {
        let mut label = left_top_label("AB\nA", DESCRIPTOR);
        label.set_justify(Justify::Right);
        let sprites = label.sprites();
        // block width 22; first line's right edge is B at 12 plus width 12,
        // second line's is A at 0 plus width 10
        assert_eq!(sprites[0].position.x, 0.0 + 22.0 - 24.0);
        assert_eq!(sprites[1].position.x, 12.0 + 22.0 - 24.0);
        assert_eq!(sprites[2].position.x, 0.0 + 22.0 - 10.0);
    }

    #[test]
    fn test_center_justification_per_line() {
        let mut label = left_top_label("AB\nA", DESCRIPTOR);
        label.set_justify(Justify::Center);
        let sprites = label.sprites();
        assert_eq!(sprites[0].position.x, (22.0 - 24.0) / 2.0);
        assert_eq!(sprites[2].position.x, (22.0 - 10.0) / 2.0);
    }

    #[test]
    fn test_justification_compounds_with_alignment_shift() {
        let mut label = left_top_label("AB\nA", DESCRIPTOR);
        label.set_horizontal_align(HorizontalAlign::Right);
        label.set_justify(Justify::Right);
        let sprites = label.sprites();
        // pass 1 shifts by -22, pass 2 measures the shifted right edge and
        // adds block width - line width + shift again
        let line1_edge = (12.0 - 22.0) + 12.0;
        assert_eq!(sprites[0].position.x, (0.0 - 22.0) + 22.0 - line1_edge - 22.0);
        let line2_edge = (0.0 - 22.0) + 10.0;
        assert_eq!(sprites[2].position.x, (0.0 - 22.0) + 22.0 - line2_edge - 22.0);
    }

    #[test]
    fn test_scale_factor_divides_offsets_not_advances() {
        let mut label = GlyphLabel::new(Some("AB"), demo_font(DESCRIPTOR), 2.0);
        label.set_horizontal_align(HorizontalAlign::Left);
        label.set_vertical_align(VerticalAlign::Top);
        let sprites = label.sprites();
        // B's x offset of 2 halves; the cursor advance of 10 does not
        assert_eq!(sprites[1].position.x, 11.0);
        // line height halves as well
        assert_eq!(label.total_size().height, 15.0);
        assert_eq!(label.total_size().width, 22.0);
    }

    #[test]
    fn test_unresolved_glyph_is_zero_size_placeholder() {
        let label = left_top_label("AZB", DESCRIPTOR);
        let sprites = label.sprites();
        assert_eq!(sprites.len(), 3);
        assert!(sprites[1].texture.is_none());
        assert_eq!(sprites[1].size, SizeF32::default());
        // unknown glyph contributes no advance, so B lands where it would
        // have without the Z
        assert_eq!(sprites[2].position.x, 12.0);
    }

    #[test]
    fn test_empty_text() {
        let label = GlyphLabel::new(Some(""), demo_font(DESCRIPTOR), 1.0);
        assert!(label.sprites().is_empty());
        assert_eq!(label.total_size(), SizeF32::default());
    }

    #[test]
    fn test_no_text() {
        let mut label = GlyphLabel::new(None, demo_font(DESCRIPTOR), 1.0);
        assert!(label.sprites().is_empty());
        label.set_text(Some("A"));
        assert_eq!(label.sprites().len(), 1);
    }

    #[test]
    fn test_color_restyles_sprites() {
        let mut label = GlyphLabel::new(Some("AB"), demo_font(DESCRIPTOR), 1.0);
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        label.set_color(red);
        for sprite in label.sprites() {
            assert_eq!(sprite.color, red);
        }
    }

    #[test]
    fn test_color_blend_factor_is_clamped() {
        let mut label = GlyphLabel::new(Some("AB"), demo_font(DESCRIPTOR), 1.0);
        label.set_color_blend_factor(2.0);
        assert_eq!(label.color_blend_factor(), 1.0);
        label.set_color_blend_factor(-0.5);
        assert_eq!(label.color_blend_factor(), 0.0);
        for sprite in label.sprites() {
            assert_eq!(sprite.color_blend_factor, 0.0);
        }
    }

    #[test]
    fn test_alignment_never_changes_total_size() {
        let mut label = GlyphLabel::new(Some("AB\nA"), demo_font(DESCRIPTOR), 1.0);
        let size = label.total_size();
        label.set_horizontal_align(HorizontalAlign::Right);
        label.set_vertical_align(VerticalAlign::Bottom);
        label.set_justify(Justify::Center);
        assert_eq!(label.total_size(), size);
    }
}
