use std::fs;
use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use sha2::{Digest, Sha256};
use verseday::rendering::font::FontSet;
use verseday::rendering::layout::{CardText, LayoutConfig};
use verseday::rendering::render_card;

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

/// Vertical gradient so blending over varied pixels is covered.
fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |_, y| {
        let v = (y * 255 / height.max(1)) as u8;
        Rgba([v / 2, v / 3, v, 255])
    })
}

fn card() -> CardText<'static> {
    CardText {
        verse: "Don't be afraid, for I am with you. Don't be discouraged, for I am your God.",
        reference_label: "Isaiah 41:10 (NLT)",
        slogan: "Faith. Focus. Finish.",
        footer: "Scripture taken from the Holy Bible, New Living Translation (NLT).",
    }
}

#[test]
fn same_inputs_give_identical_bytes() {
    let fonts = FontSet::fallback();
    let cfg = LayoutConfig::default();
    let (la, a) = render_card(gradient(400, 300), &card(), &fonts, &cfg).unwrap();
    let (lb, b) = render_card(gradient(400, 300), &card(), &fonts, &cfg).unwrap();
    assert_eq!(la, lb);
    assert_eq!(a.png_data, b.png_data);
}

/// SHA-256 of the decoded RGBA pixels. Pinning pixels rather than PNG bytes
/// keeps the golden independent of the encoder's compression settings.
fn pixel_digest(png: &[u8]) -> String {
    let pixels = image::load_from_memory(png).expect("decodable PNG").to_rgba8();
    hex::encode(Sha256::digest(pixels.as_raw()))
}

#[test]
fn golden_card_matches_fixture() {
    // The built-in face keeps this independent of installed fonts.
    let (_, rendered) = render_card(gradient(400, 300), &card(), &FontSet::fallback(), &LayoutConfig::default()).unwrap();
    let digest = pixel_digest(&rendered.png_data);

    let expected_path = golden_path("card_fallback.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, format!("{}\n", digest)).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    let exp = fs::read_to_string(&expected_path)
        .unwrap_or_else(|e| panic!("missing golden {:?} ({}); run with UPDATE_GOLDENS=1", expected_path, e));
    assert_eq!(digest, exp.trim());
}

#[test]
fn golden_fixture_is_sensitive_to_layout() {
    let mut moved = LayoutConfig::default();
    moved.verse_lift += 1;
    let (_, a) = render_card(gradient(400, 300), &card(), &FontSet::fallback(), &LayoutConfig::default()).unwrap();
    let (_, b) = render_card(gradient(400, 300), &card(), &FontSet::fallback(), &moved).unwrap();
    assert_ne!(pixel_digest(&a.png_data), pixel_digest(&b.png_data));
}
