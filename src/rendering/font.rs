//! Font faces used by the layout engine.
//!
//! A `FontSet` holds one face per text role. TrueType faces come from the
//! first candidate file that parses; if none does, every role uses the
//! built-in 8x8 bitmap face and size distinctions are lost.

use std::path::{Path, PathBuf};

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use log::{debug, warn};
use rusttype::{point, Font, Scale};

/// Pixel size of one built-in bitmap glyph cell.
pub const BITMAP_CELL: i32 = 8;

/// Text roles on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    /// Verse body
    Large,
    /// Reference label
    Medium,
    /// Slogan and footer
    Small,
}

/// Point sizes for each role
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub large: f32,
    pub medium: f32,
    pub small: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            large: 54.0,
            medium: 38.0,
            small: 22.0,
        }
    }
}

/// A measurable, drawable face at a fixed size
#[derive(Clone)]
pub enum Face {
    TrueType { font: Font<'static>, px: f32 },
    Bitmap,
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::TrueType { px, .. } => write!(f, "TrueType({}px)", px),
            Face::Bitmap => write!(f, "Bitmap"),
        }
    }
}

impl Face {
    /// Height of one line of text, without inter-line spacing.
    pub fn line_height(&self) -> i32 {
        match self {
            Face::TrueType { font, px } => {
                let v = font.v_metrics(Scale::uniform(*px));
                (v.ascent - v.descent).ceil() as i32
            }
            Face::Bitmap => BITMAP_CELL,
        }
    }

    /// Advance width of a single line of text.
    pub fn line_width(&self, text: &str) -> i32 {
        if text.is_empty() {
            return 0;
        }
        match self {
            Face::TrueType { font, px } => {
                let glyphs: Vec<_> = font.layout(text, Scale::uniform(*px), point(0.0, 0.0)).collect();
                glyphs
                    .last()
                    .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
                    .unwrap_or(0.0)
                    .ceil() as i32
            }
            Face::Bitmap => text.chars().count() as i32 * BITMAP_CELL,
        }
    }

    /// Bounding size of a block of newline-separated lines.
    pub fn block_size(&self, text: &str, spacing: i32) -> (i32, i32) {
        if text.is_empty() {
            return (0, 0);
        }
        let lines: Vec<&str> = text.split('\n').collect();
        let width = lines.iter().map(|l| self.line_width(l)).max().unwrap_or(0);
        let n = lines.len() as i32;
        let height = n * self.line_height() + (n - 1) * spacing;
        (width, height)
    }

    /// Rasterize one line with its top-left corner at (`x`, `y`), reporting
    /// each covered pixel as (x, y, coverage in 0.0..=1.0).
    pub fn for_each_pixel<F>(&self, text: &str, x: i32, y: i32, mut f: F)
    where
        F: FnMut(i32, i32, f32),
    {
        match self {
            Face::TrueType { font, px } => {
                let scale = Scale::uniform(*px);
                let ascent = font.v_metrics(scale).ascent;
                let origin = point(x as f32, y as f32 + ascent);
                for glyph in font.layout(text, scale, origin) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        glyph.draw(|gx, gy, v| f(bb.min.x + gx as i32, bb.min.y + gy as i32, v));
                    }
                }
            }
            Face::Bitmap => {
                for (i, ch) in text.chars().enumerate() {
                    let Some(rows) = bitmap_glyph(ch) else {
                        continue;
                    };
                    let cx = x + i as i32 * BITMAP_CELL;
                    for (row_idx, row) in rows.iter().enumerate() {
                        for bit in 0..8 {
                            if row & (1 << bit) != 0 {
                                f(cx + bit, y + row_idx as i32, 1.0);
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Face::Bitmap)
    }
}

fn bitmap_glyph(ch: char) -> Option<[u8; 8]> {
    BASIC_FONTS.get(ch).or_else(|| LATIN_FONTS.get(ch))
}

/// Well-known locations of DejaVu Sans.
pub fn default_font_candidates() -> Vec<PathBuf> {
    [
        "DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/Library/Fonts/DejaVuSans.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// One face per role
#[derive(Debug, Clone)]
pub struct FontSet {
    pub large: Face,
    pub medium: Face,
    pub small: Face,
}

impl FontSet {
    /// Load the first candidate that parses as a TrueType font. Falls back to
    /// the built-in bitmap face for all roles when none does.
    pub fn load(candidates: &[PathBuf], sizes: FontSizes) -> Self {
        for path in candidates {
            if let Some(font) = load_truetype(path) {
                debug!("Using font {}", path.display());
                return Self::from_font(font, sizes);
            }
        }
        warn!(
            "No usable font among {} candidate(s); falling back to built-in bitmap face",
            candidates.len()
        );
        Self::fallback()
    }

    pub fn from_font(font: Font<'static>, sizes: FontSizes) -> Self {
        Self {
            large: Face::TrueType { font: font.clone(), px: sizes.large },
            medium: Face::TrueType { font: font.clone(), px: sizes.medium },
            small: Face::TrueType { font, px: sizes.small },
        }
    }

    pub fn fallback() -> Self {
        Self {
            large: Face::Bitmap,
            medium: Face::Bitmap,
            small: Face::Bitmap,
        }
    }

    pub fn face(&self, role: FontRole) -> &Face {
        match role {
            FontRole::Large => &self.large,
            FontRole::Medium => &self.medium,
            FontRole::Small => &self.small,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.large.is_fallback()
    }
}

fn load_truetype(path: &Path) -> Option<Font<'static>> {
    let bytes = std::fs::read(path).ok()?;
    Font::try_from_vec(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fonts_fall_back() {
        let set = FontSet::load(&[PathBuf::from("/nonexistent/NoSuchFont.ttf")], FontSizes::default());
        assert!(set.is_fallback());
        assert!(set.face(FontRole::Medium).is_fallback());
    }

    #[test]
    fn garbage_file_is_not_a_font() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("broken.ttf");
        std::fs::write(&p, b"not a font").unwrap();
        assert!(FontSet::load(&[p], FontSizes::default()).is_fallback());
    }

    #[test]
    fn bitmap_metrics() {
        let f = Face::Bitmap;
        assert_eq!(f.line_width(""), 0);
        assert_eq!(f.line_width("abc"), 24);
        assert_eq!(f.line_height(), 8);
        assert_eq!(f.block_size("ab\nabcd", 10), (32, 26));
        assert_eq!(f.block_size("", 10), (0, 0));
    }

    #[test]
    fn bitmap_draws_inside_cells() {
        let mut count = 0;
        Face::Bitmap.for_each_pixel("A", 100, 50, |x, y, v| {
            assert!((100..108).contains(&x));
            assert!((50..58).contains(&y));
            assert_eq!(v, 1.0);
            count += 1;
        });
        assert!(count > 0);
    }

    #[test]
    fn unknown_glyphs_draw_nothing() {
        let mut count = 0;
        Face::Bitmap.for_each_pixel("\u{1F4D6}", 0, 0, |_, _, _| count += 1);
        assert_eq!(count, 0);
    }
}
