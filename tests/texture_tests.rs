// Host-side tests for the procedural floor grain.

use rand::rngs::StdRng;
use rand::SeedableRng;
use raumplaner_core::texture::rasterize;
use raumplaner_core::*;

fn wood_request() -> FloorTextureRequest {
    SceneDescription::from_config(&Configuration::default())
        .floor_texture
        .expect("light wood has grain")
}

#[test]
fn same_seed_gives_the_same_bitmap() {
    let req = wood_request();
    let a = GrainTexture::generate(&req, &mut StdRng::seed_from_u64(7)).expect("grain");
    let b = GrainTexture::generate(&req, &mut StdRng::seed_from_u64(7)).expect("grain");
    assert_eq!(a, b);
    let c = GrainTexture::generate(&req, &mut StdRng::seed_from_u64(8)).expect("grain");
    assert_ne!(a, c);
}

#[test]
fn bitmap_is_square_rgba() {
    let req = wood_request();
    let tex = GrainTexture::generate(&req, &mut StdRng::seed_from_u64(1)).expect("grain");
    assert_eq!(tex.size, 512);
    assert_eq!(tex.bytes_per_row(), 512 * 4);
    assert_eq!(tex.pixels.len(), 512 * 512 * 4);
    assert!(tex.pixels.chunks(4).all(|p| p[3] == 255));
}

#[test]
fn streaks_only_lighten_the_base_colour() {
    let req = wood_request();
    let base = req.style.base.to_array();
    let tex = GrainTexture::generate(&req, &mut StdRng::seed_from_u64(3)).expect("grain");
    let mut lighter = 0;
    for p in tex.pixels.chunks(4) {
        for c in 0..3 {
            assert!(p[c] >= base[c]);
        }
        if p[0] > base[0] {
            lighter += 1;
        }
    }
    assert!(lighter > 0, "expected at least one streak");
}

#[test]
fn streaks_run_the_full_height() {
    let req = wood_request();
    let tex = GrainTexture::generate(&req, &mut StdRng::seed_from_u64(11)).expect("grain");
    for x in (0..tex.size).step_by(17) {
        let top = tex.pixel(x, 0);
        assert_eq!(tex.pixel(x, tex.size / 2), top);
        assert_eq!(tex.pixel(x, tex.size - 1), top);
    }
}

#[test]
fn zero_streaks_is_a_flat_fill() {
    let style = wood_request().style;
    let base = style.base.to_array();
    let tex = rasterize(style, 8, 0, &mut StdRng::seed_from_u64(0)).expect("grain");
    assert_eq!(tex.pixel(3, 5), [base[0], base[1], base[2], 255]);
    assert!(tex
        .pixels
        .chunks(4)
        .all(|p| p == [base[0], base[1], base[2], 255]));
}

#[test]
fn tiny_bitmap_clips_wide_streaks() {
    let style = wood_request().style;
    let tex = rasterize(style, 2, 40, &mut StdRng::seed_from_u64(5)).expect("grain");
    assert_eq!(tex.pixels.len(), 16);
}

#[test]
fn empty_size_yields_nothing() {
    let style = wood_request().style;
    assert!(rasterize(style, 0, 40, &mut StdRng::seed_from_u64(0)).is_none());
}
