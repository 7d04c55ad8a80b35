//! Procedural wood grain for the floor.
//!
//! A square RGBA8 bitmap filled with the preset's base colour, overlaid with
//! randomly placed full-height white streaks at low opacity. Only the
//! statistical look matters (streak count, colour, width range), so callers
//! pass their own RNG: entropy in the browser, a fixed seed in tests.

use crate::color::{blend_over, Srgb8};
use crate::config::GrainStyle;
use crate::constants::{GRAIN_STREAK_COUNT, GRAIN_STREAK_MIN_WIDTH, GRAIN_STREAK_WIDTH_SPAN};
use crate::scene::FloorTextureRequest;
use rand::Rng;

const STREAK_COLOR: Srgb8 = Srgb8::from_hex(0xffffff);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrainTexture {
    pub size: u32,
    /// Row-major RGBA8, sRGB encoded.
    pub pixels: Vec<u8>,
}

impl GrainTexture {
    /// Rasterize the grain for `request`. Returns `None` for an empty size.
    pub fn generate<R: Rng + ?Sized>(request: &FloorTextureRequest, rng: &mut R) -> Option<Self> {
        rasterize(request.style, request.size, GRAIN_STREAK_COUNT, rng)
    }

    pub fn bytes_per_row(&self) -> u32 {
        self.size * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.size + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }
}

pub fn rasterize<R: Rng + ?Sized>(
    style: GrainStyle,
    size: u32,
    streaks: usize,
    rng: &mut R,
) -> Option<GrainTexture> {
    if size == 0 {
        return None;
    }
    let base = style.base.to_array();
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for _ in 0..size * size {
        pixels.extend_from_slice(&[base[0], base[1], base[2], 255]);
    }

    // Streaks are full-height, so blend one row and copy it down.
    let mut row: Vec<[u8; 3]> = vec![base; size as usize];
    let streak = STREAK_COLOR.to_array();
    for _ in 0..streaks {
        let x = rng.gen::<f32>() * size as f32;
        let width = GRAIN_STREAK_MIN_WIDTH + rng.gen::<f32>() * GRAIN_STREAK_WIDTH_SPAN;
        let x0 = x.floor() as u32;
        let x1 = ((x + width).ceil() as u32).min(size);
        for px in &mut row[x0 as usize..x1 as usize] {
            for c in 0..3 {
                px[c] = blend_over(px[c], streak[c], style.streak_alpha);
            }
        }
    }
    for y in 0..size as usize {
        for (x, px) in row.iter().enumerate() {
            let i = (y * size as usize + x) * 4;
            pixels[i..i + 3].copy_from_slice(px);
        }
    }

    Some(GrainTexture { size, pixels })
}
