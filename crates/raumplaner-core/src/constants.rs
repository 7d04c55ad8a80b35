use crate::color::Srgb8;
use glam::Vec3;

// Shared model/scene tuning constants used by the web frontend and tests.

// Slider bounds (min, max, step) in metres
pub const LENGTH_RANGE: (f64, f64, f64) = (8.0, 20.0, 0.5);
pub const WIDTH_RANGE: (f64, f64, f64) = (6.0, 14.0, 0.5);
pub const WALL_HEIGHT_RANGE: (f64, f64, f64) = (2.4, 4.2, 0.1);
pub const WALL_THICKNESS_RANGE: (f64, f64, f64) = (0.15, 0.5, 0.05);

// Light intensity bounds (min, max, step)
pub const AMBIENT_RANGE: (f64, f64, f64) = (0.0, 1.5, 0.05);
pub const SUN_RANGE: (f64, f64, f64) = (0.4, 2.0, 0.05);

// Defaults for a fresh session
pub const DEFAULT_LENGTH: f64 = 12.0;
pub const DEFAULT_WIDTH: f64 = 8.0;
pub const DEFAULT_WALL_HEIGHT: f64 = 3.0;
pub const DEFAULT_WALL_THICKNESS: f64 = 0.25;
pub const DEFAULT_AMBIENT: f64 = 0.35;
pub const DEFAULT_SUN: f64 = 1.1;

// Stored values are kept at this many decimals
pub const VALUE_DECIMALS: i32 = 2;

// Floor
pub const FLOOR_SEGMENTS: u32 = 32;
pub const FLOOR_TEXTURE_TILE_M: f32 = 2.0; // one grain tile every 2 m

// Grain texture rasterization
pub const GRAIN_TEXTURE_SIZE: u32 = 512;
pub const GRAIN_STREAK_COUNT: usize = 40;
pub const GRAIN_STREAK_MIN_WIDTH: f32 = 4.0;
pub const GRAIN_STREAK_WIDTH_SPAN: f32 = 12.0; // width in [min, min + span)

// Walls
pub const WALL_COLOR: Srgb8 = Srgb8::from_hex(0xe5e7eb);
pub const WALL_ROUGHNESS: f32 = 0.8;
pub const WALL_METALNESS: f32 = 0.01;

// Zoning overlay
pub const ZONE_COLOR: Srgb8 = Srgb8::from_hex(0xffffff);
pub const ZONE_OPACITY: f32 = 0.08;
pub const ZONE_LIFT: f32 = 0.01; // keeps strips off the floor plane
pub const OUTLINE_COLOR: Srgb8 = Srgb8::from_hex(0xf472b6);
pub const OUTLINE_LIFT: f32 = 0.015;

// Furniture
pub const FURNITURE_COLOR: Srgb8 = Srgb8::from_hex(0x9d4edd);
pub const FURNITURE_ROUGHNESS: f32 = 0.5;
pub const FURNITURE_METALNESS: f32 = 0.3;
pub const FURNITURE_BASE_Y: f32 = 0.4;

// Lighting
pub const SUN_POSITION: Vec3 = Vec3::new(12.0, 18.0, 10.0);
pub const SUN_COLOR: Srgb8 = Srgb8::from_hex(0xffffff);
pub const SHADOW_MAP_SIZE: u32 = 2048;
pub const SHADOW_SOFTNESS_TEXELS: f32 = 2.5; // PCF kernel radius
pub const SHADOW_DEPTH_BIAS: f32 = 0.0015;
pub const ENVIRONMENT_INTENSITY: f32 = 0.3; // stand-in for the image-based fill light

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(12.0, 9.0, 12.0);
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI / 2.1; // stay above the horizon
pub const ORBIT_MIN_POLAR: f32 = 0.01;
pub const ORBIT_MIN_DISTANCE: f32 = 3.0;
pub const ORBIT_MAX_DISTANCE: f32 = 60.0;
pub const ORBIT_DAMPING: f32 = 0.05;

pub const BACKGROUND_COLOR: Srgb8 = Srgb8::from_hex(0x0b1221);
