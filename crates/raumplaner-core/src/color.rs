//! sRGB colour helpers.
//!
//! Palette values are authored as hex sRGB (the way designers hand them over)
//! and converted to linear RGB before they reach the shaders, which light in
//! linear space and rely on the sRGB swapchain for the final encode.

/// An sRGB colour with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Srgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Srgb8 {
    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Linear-light RGB in [0, 1].
    pub fn to_linear(self) -> [f32; 3] {
        [
            srgb_channel_to_linear(self.r),
            srgb_channel_to_linear(self.g),
            srgb_channel_to_linear(self.b),
        ]
    }
}

#[inline]
pub fn srgb_channel_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Source-over blend of `src` onto `dst` at `alpha`, in 8-bit sRGB space
/// (the way a 2D canvas composites a translucent fill).
#[inline]
pub fn blend_over(dst: u8, src: u8, alpha: f32) -> u8 {
    let a = alpha.clamp(0.0, 1.0);
    (dst as f32 * (1.0 - a) + src as f32 * a).round() as u8
}
