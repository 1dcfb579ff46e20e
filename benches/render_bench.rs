use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};

use verseday::normalize::{normalize, NormalizeOptions};
use verseday::rendering::font::{default_font_candidates, FontSet, FontSizes};
use verseday::rendering::layout::{layout_card, CardText, LayoutConfig};
use verseday::rendering::render_card;

const PASSAGE: &str = r#"<section><h2>Proverbs 3:5-6, NLT</h2><p><span class="vn">5</span>Trust in the LORD with all your heart;<br />do not depend on your own understanding.<br /><span class="vn">6</span>Seek his will in all you do,<br />and he will show you which path to take.</p></section>"#;

fn card(verse: &str) -> CardText<'_> {
    CardText {
        verse,
        reference_label: "Proverbs 3:5-6 (NLT)",
        slogan: "Faith. Focus. Finish.",
        footer: "Scripture taken from the Holy Bible, New Living Translation (NLT), \u{a9} Tyndale House Foundation.",
    }
}

fn bench_normalize(c: &mut Criterion) {
    let opts = NormalizeOptions::default();
    c.bench_function("normalize_nlt_html", |b| b.iter(|| normalize(PASSAGE, &opts)));
}

fn bench_layout(c: &mut Criterion) {
    let verse = normalize(PASSAGE, &NormalizeOptions::default());
    let fonts = FontSet::load(&default_font_candidates(), FontSizes::default());
    let cfg = LayoutConfig::default();
    c.bench_function("layout_card_1080", |b| {
        b.iter(|| layout_card(&card(&verse), &fonts, 1080, 1080, &cfg).commands())
    });
}

fn bench_render(c: &mut Criterion) {
    let verse = normalize(PASSAGE, &NormalizeOptions::default());
    let fonts = FontSet::load(&default_font_candidates(), FontSizes::default());
    let cfg = LayoutConfig::default();
    let background = RgbaImage::from_pixel(1080, 1080, Rgba([20, 24, 32, 255]));
    c.bench_function("render_card_1080", |b| {
        b.iter(|| render_card(background.clone(), &card(&verse), &fonts, &cfg).unwrap())
    });
}

criterion_group!(benches, bench_normalize, bench_layout, bench_render);
criterion_main!(benches);
