use image::{Rgba, RgbaImage};
use verseday::rendering::font::FontSet;
use verseday::rendering::layout::{layout_card, wrap_width_for, CardText, LayoutConfig};
use verseday::rendering::render_card;

const VERSE: &str = "For I know the plans I have for you, says the LORD. They are plans for good and not for disaster, to give you a future and a hope.";

fn card() -> CardText<'static> {
    CardText {
        verse: VERSE,
        reference_label: "Jeremiah 29:11 (NLT)",
        slogan: "Faith. Focus. Finish.",
        footer: "footer",
    }
}

#[test]
fn wide_canvas_wraps_at_34() {
    assert_eq!(wrap_width_for(1920), 34);
    let layout = layout_card(&card(), &FontSet::fallback(), 1920, 1080, &LayoutConfig::default());
    let lines: Vec<&str> = layout.verse.text.lines().collect();
    assert!(lines.iter().all(|l| l.chars().count() <= 34));
    assert!(lines.iter().any(|l| l.chars().count() > 28));
}

#[test]
fn narrow_canvas_wraps_at_28() {
    assert_eq!(wrap_width_for(800), 28);
    let layout = layout_card(&card(), &FontSet::fallback(), 800, 600, &LayoutConfig::default());
    assert!(layout.verse.text.lines().all(|l| l.chars().count() <= 28));
}

#[test]
fn smoke_render_keeps_canvas_size() {
    let canvas = RgbaImage::from_pixel(800, 600, Rgba([0, 0, 0, 255]));
    let (_, rendered) = render_card(canvas, &card(), &FontSet::fallback(), &LayoutConfig::default()).unwrap();
    assert_eq!(rendered.width, 800);
    assert_eq!(rendered.height, 600);
    assert!(!rendered.png_data.is_empty());
}
