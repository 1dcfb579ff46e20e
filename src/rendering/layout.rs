//! Card layout: word wrapping and block placement.
//!
//! Everything here is pure geometry over font metrics. Centering uses floor
//! division, so a block may sit one pixel left/up of true center, and
//! coordinates go negative when content is larger than the canvas.

use log::debug;

use crate::rendering::font::{FontRole, FontSet};
use crate::rendering::paint::{self, PaintCommand};

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// Fixed layout constants
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Canvases at least this wide use the wide wrap budget.
    pub wide_threshold: u32,
    pub wide_wrap: usize,
    pub narrow_wrap: usize,
    /// Lines past this are dropped.
    pub max_lines: usize,
    pub line_spacing: i32,
    /// Upward bias of the verse block from vertical center.
    pub verse_lift: i32,
    /// Gap between the verse block and the reference label.
    pub reference_gap: i32,
    pub slogan_from_bottom: i32,
    pub footer_from_bottom: i32,
    pub footer_margin: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            wide_threshold: 1080,
            wide_wrap: 34,
            narrow_wrap: 28,
            max_lines: 10,
            line_spacing: 10,
            verse_lift: 60,
            reference_gap: 35,
            slogan_from_bottom: 70,
            footer_from_bottom: 35,
            footer_margin: 40,
        }
    }
}

impl LayoutConfig {
    /// Characters per line for a canvas of the given width.
    pub fn wrap_width_for(&self, canvas_width: u32) -> usize {
        if canvas_width >= self.wide_threshold {
            self.wide_wrap
        } else {
            self.narrow_wrap
        }
    }
}

/// Characters per line with the default thresholds: 34 when `canvas_width`
/// is at least 1080, otherwise 28.
pub fn wrap_width_for(canvas_width: u32) -> usize {
    LayoutConfig::default().wrap_width_for(canvas_width)
}

/// Greedy word wrap by character count.
///
/// All whitespace (newlines included) separates words. Words are never split:
/// one longer than `width` gets a line of its own.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cur = String::new();
    let mut cur_len = 0usize;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if !cur.is_empty() && cur_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut cur));
            cur_len = 0;
        }
        if !cur.is_empty() {
            cur.push(' ');
            cur_len += 1;
        }
        cur.push_str(word);
        cur_len += word_len;
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

/// Label shown under the verse and in the caption, e.g. `Psalm 23:1 (NLT)`.
pub fn reference_label(reference: &str, translation_code: &str) -> String {
    format!("{} ({})", reference, translation_code)
}

/// The four strings drawn on a card
#[derive(Debug, Clone)]
pub struct CardText<'a> {
    pub verse: &'a str,
    pub reference_label: &'a str,
    pub slogan: &'a str,
    pub footer: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placed {
    pub rect: Rect,
    pub text: String,
    pub role: FontRole,
}

/// Where each block goes on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub verse: Placed,
    pub reference: Placed,
    pub slogan: Placed,
    pub footer: Placed,
    pub line_spacing: i32,
}

fn center(outer: u32, inner: i32) -> i32 {
    (outer as i32 - inner).div_euclid(2)
}

/// Lay out a card on a `width` x `height` canvas.
pub fn layout_card(
    card: &CardText<'_>,
    fonts: &FontSet,
    width: u32,
    height: u32,
    cfg: &LayoutConfig,
) -> CardLayout {
    let wrap = cfg.wrap_width_for(width);
    let lines = wrap_words(card.verse, wrap);
    if lines.len() > cfg.max_lines {
        debug!("Dropping {} wrapped line(s) past the cap", lines.len() - cfg.max_lines);
    }
    let wrapped = lines
        .into_iter()
        .take(cfg.max_lines)
        .collect::<Vec<_>>()
        .join("\n");

    let large = fonts.face(FontRole::Large);
    let (vw, vh) = large.block_size(&wrapped, cfg.line_spacing);
    let verse_rect = Rect {
        x: center(width, vw),
        y: (height as i32 - vh).div_euclid(2) - cfg.verse_lift,
        width: vw as u32,
        height: vh as u32,
    };

    let medium = fonts.face(FontRole::Medium);
    let (rw, rh) = medium.block_size(card.reference_label, 0);
    let reference_rect = Rect {
        x: center(width, rw),
        y: verse_rect.bottom() + cfg.reference_gap,
        width: rw as u32,
        height: rh as u32,
    };

    let small = fonts.face(FontRole::Small);
    let (sw, sh) = small.block_size(card.slogan, 0);
    let slogan_rect = Rect {
        x: center(width, sw),
        y: height as i32 - cfg.slogan_from_bottom,
        width: sw as u32,
        height: sh as u32,
    };

    let (fw, fh) = small.block_size(card.footer, 0);
    let footer_rect = Rect {
        x: cfg.footer_margin,
        y: height as i32 - cfg.footer_from_bottom,
        width: fw as u32,
        height: fh as u32,
    };

    debug!(
        "Layout {}x{}: wrap={} verse={:?} reference={:?}",
        width, height, wrap, verse_rect, reference_rect
    );

    CardLayout {
        verse: Placed { rect: verse_rect, text: wrapped, role: FontRole::Large },
        reference: Placed {
            rect: reference_rect,
            text: card.reference_label.to_string(),
            role: FontRole::Medium,
        },
        slogan: Placed { rect: slogan_rect, text: card.slogan.to_string(), role: FontRole::Small },
        footer: Placed { rect: footer_rect, text: card.footer.to_string(), role: FontRole::Small },
        line_spacing: cfg.line_spacing,
    }
}

impl CardLayout {
    /// Paint commands in draw order. Verse, reference and slogan are shadowed;
    /// the footer is drawn once.
    pub fn commands(&self) -> Vec<PaintCommand> {
        let mut cmds = Vec::with_capacity(7);
        for block in [&self.verse, &self.reference, &self.slogan] {
            let spacing = if block.role == FontRole::Large { self.line_spacing } else { 0 };
            cmds.extend(paint::shadowed(block.rect.x, block.rect.y, &block.text, block.role, spacing));
        }
        cmds.push(PaintCommand::Text {
            x: self.footer.rect.x,
            y: self.footer.rect.y,
            text: self.footer.text.clone(),
            role: self.footer.role,
            line_spacing: 0,
            rgba: paint::FOOTER,
        });
        cmds
    }
}
