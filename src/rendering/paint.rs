//! Paint command set produced by the layout pass and consumed by the rasterizer

use crate::rendering::font::FontRole;

/// Straight (non-premultiplied) RGBA color
pub type Rgba = (u8, u8, u8, u8);

pub const SHADOW: Rgba = (0, 0, 0, 160);
pub const HIGHLIGHT: Rgba = (255, 255, 255, 235);
pub const FOOTER: Rgba = (255, 255, 255, 200);

/// Pixel offset of the drop shadow relative to the text it backs.
pub const SHADOW_OFFSET: i32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// A block of newline-separated lines, top-left anchored at (x, y).
    Text {
        x: i32,
        y: i32,
        text: String,
        role: FontRole,
        line_spacing: i32,
        rgba: Rgba,
    },
}

impl PaintCommand {
    pub fn text(&self) -> &str {
        match self {
            PaintCommand::Text { text, .. } => text,
        }
    }
}

/// Commands for a block drawn with the drop-shadow effect: the shadow
/// first, then the text on top.
pub fn shadowed(x: i32, y: i32, text: &str, role: FontRole, line_spacing: i32) -> [PaintCommand; 2] {
    [
        PaintCommand::Text {
            x: x + SHADOW_OFFSET,
            y: y + SHADOW_OFFSET,
            text: text.to_string(),
            role,
            line_spacing,
            rgba: SHADOW,
        },
        PaintCommand::Text {
            x,
            y,
            text: text.to_string(),
            role,
            line_spacing,
            rgba: HIGHLIGHT,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_precedes_text_and_is_offset() {
        let [shadow, top] = shadowed(10, 20, "Amen", FontRole::Small, 0);
        match (&shadow, &top) {
            (
                PaintCommand::Text { x: sx, y: sy, rgba: sc, .. },
                PaintCommand::Text { x, y, rgba, .. },
            ) => {
                assert_eq!((*sx, *sy), (12, 22));
                assert_eq!((*x, *y), (10, 20));
                assert_eq!(*sc, SHADOW);
                assert_eq!(*rgba, HIGHLIGHT);
            }
        }
        assert_eq!(shadow.text(), top.text());
    }
}
