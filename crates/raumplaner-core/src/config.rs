//! The apartment configuration and the vocabularies it is built from.

use crate::color::Srgb8;
use crate::constants::*;
use crate::error::{PlannerError, Result};
use std::fmt;
use std::str::FromStr;

/// Functional zone the user is planning for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoomFunction {
    Living,
    Kitchen,
    Bedroom,
    Bathroom,
    Studio,
}

impl RoomFunction {
    pub const ALL: [RoomFunction; 5] = [
        RoomFunction::Living,
        RoomFunction::Kitchen,
        RoomFunction::Bedroom,
        RoomFunction::Bathroom,
        RoomFunction::Studio,
    ];

    pub fn id(self) -> &'static str {
        match self {
            RoomFunction::Living => "living",
            RoomFunction::Kitchen => "kitchen",
            RoomFunction::Bedroom => "bedroom",
            RoomFunction::Bathroom => "bathroom",
            RoomFunction::Studio => "studio",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoomFunction::Living => "Wohnbereich",
            RoomFunction::Kitchen => "Küche",
            RoomFunction::Bedroom => "Schlafzimmer",
            RoomFunction::Bathroom => "Bad",
            RoomFunction::Studio => "Studio",
        }
    }

    /// Display label for a raw identifier; unknown ids get a neutral label.
    pub fn label_for_id(id: &str) -> &'static str {
        id.parse::<RoomFunction>()
            .map(RoomFunction::label)
            .unwrap_or("Neutral")
    }
}

impl FromStr for RoomFunction {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        RoomFunction::ALL
            .into_iter()
            .find(|r| r.id() == s)
            .ok_or_else(|| PlannerError::UnknownRoom(s.to_string()))
    }
}

impl fmt::Display for RoomFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Procedural grain parameters for wood presets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrainStyle {
    pub base: Srgb8,
    /// Opacity of the white streaks laid over the base colour.
    pub streak_alpha: f32,
}

/// Fixed surface definition a preset maps to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSpec {
    pub color: Srgb8,
    pub roughness: f32,
    pub metalness: f32,
    pub grain: Option<GrainStyle>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialPreset {
    LightWood,
    Concrete,
    DarkWood,
}

impl MaterialPreset {
    pub const ALL: [MaterialPreset; 3] = [
        MaterialPreset::LightWood,
        MaterialPreset::Concrete,
        MaterialPreset::DarkWood,
    ];

    pub fn id(self) -> &'static str {
        match self {
            MaterialPreset::LightWood => "light-wood",
            MaterialPreset::Concrete => "concrete",
            MaterialPreset::DarkWood => "dark-wood",
        }
    }

    /// Card title shown in the control panel.
    pub fn label(self) -> &'static str {
        match self {
            MaterialPreset::LightWood => "Helles Holz",
            MaterialPreset::Concrete => "Beton",
            MaterialPreset::DarkWood => "Dunkles Holz",
        }
    }

    /// Short hint under the card title.
    pub fn hint(self) -> &'static str {
        match self {
            MaterialPreset::LightWood => "Eichenparkett, warm",
            MaterialPreset::Concrete => "Minimalistischer Loft",
            MaterialPreset::DarkWood => "Luxuriöser Kontrast",
        }
    }

    pub fn surface(self) -> SurfaceSpec {
        match self {
            MaterialPreset::LightWood => SurfaceSpec {
                color: Srgb8::from_hex(0xbda27e),
                roughness: 0.6,
                metalness: 0.05,
                grain: Some(GrainStyle {
                    base: Srgb8::from_hex(0xb29a77),
                    streak_alpha: 0.08,
                }),
            },
            MaterialPreset::Concrete => SurfaceSpec {
                color: Srgb8::from_hex(0x757575),
                roughness: 0.85,
                metalness: 0.02,
                grain: None,
            },
            MaterialPreset::DarkWood => SurfaceSpec {
                color: Srgb8::from_hex(0x322f35),
                roughness: 0.5,
                metalness: 0.1,
                grain: Some(GrainStyle {
                    base: Srgb8::from_hex(0x2b262d),
                    streak_alpha: 0.05,
                }),
            },
        }
    }
}

impl FromStr for MaterialPreset {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        MaterialPreset::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| PlannerError::UnknownMaterial(s.to_string()))
    }
}

impl fmt::Display for MaterialPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FurnitureItem {
    Sofa,
    DiningTable,
    KitchenIsland,
    Bed,
    Desk,
}

impl FurnitureItem {
    pub const ALL: [FurnitureItem; 5] = [
        FurnitureItem::Sofa,
        FurnitureItem::DiningTable,
        FurnitureItem::KitchenIsland,
        FurnitureItem::Bed,
        FurnitureItem::Desk,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FurnitureItem::Sofa => "sofa",
            FurnitureItem::DiningTable => "dining-table",
            FurnitureItem::KitchenIsland => "kitchen-island",
            FurnitureItem::Bed => "bed",
            FurnitureItem::Desk => "desk",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FurnitureItem::Sofa => "Sofa",
            FurnitureItem::DiningTable => "Esstisch",
            FurnitureItem::KitchenIsland => "Kücheninsel",
            FurnitureItem::Bed => "Bett",
            FurnitureItem::Desk => "Schreibtisch",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for FurnitureItem {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        FurnitureItem::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| PlannerError::UnknownFurniture(s.to_string()))
    }
}

impl fmt::Display for FurnitureItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Per-item visibility of the furniture blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FurnitureVisibility {
    shown: [bool; FurnitureItem::ALL.len()],
}

impl FurnitureVisibility {
    pub fn is_visible(&self, item: FurnitureItem) -> bool {
        self.shown[item.index()]
    }

    pub fn set(&mut self, item: FurnitureItem, visible: bool) {
        self.shown[item.index()] = visible;
    }

    /// Flip an item and return its new state.
    pub fn toggle(&mut self, item: FurnitureItem) -> bool {
        let slot = &mut self.shown[item.index()];
        *slot = !*slot;
        *slot
    }

    pub fn iter(&self) -> impl Iterator<Item = (FurnitureItem, bool)> + '_ {
        FurnitureItem::ALL
            .into_iter()
            .map(move |item| (item, self.is_visible(item)))
    }

    pub fn visible_count(&self) -> usize {
        self.shown.iter().filter(|v| **v).count()
    }
}

impl Default for FurnitureVisibility {
    fn default() -> Self {
        let mut v = Self {
            shown: [false; FurnitureItem::ALL.len()],
        };
        v.set(FurnitureItem::Sofa, true);
        v.set(FurnitureItem::DiningTable, true);
        v.set(FurnitureItem::Bed, true);
        v
    }
}

/// Numeric dimension fields settable through `set_dimension`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Length,
    Width,
    WallHeight,
    WallThickness,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Length,
        Dimension::Width,
        Dimension::WallHeight,
        Dimension::WallThickness,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Width => "width",
            Dimension::WallHeight => "wall-height",
            Dimension::WallThickness => "wall-thickness",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Length => "Länge",
            Dimension::Width => "Breite",
            Dimension::WallHeight => "Wandhöhe",
            Dimension::WallThickness => "Wandstärke",
        }
    }

    /// `(min, max, step)` as offered by the slider.
    pub fn range(self) -> (f64, f64, f64) {
        match self {
            Dimension::Length => LENGTH_RANGE,
            Dimension::Width => WIDTH_RANGE,
            Dimension::WallHeight => WALL_HEIGHT_RANGE,
            Dimension::WallThickness => WALL_THICKNESS_RANGE,
        }
    }
}

/// Light intensity fields settable through `set_light`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LightChannel {
    Ambient,
    Sun,
}

impl LightChannel {
    pub const ALL: [LightChannel; 2] = [LightChannel::Ambient, LightChannel::Sun];

    pub fn id(self) -> &'static str {
        match self {
            LightChannel::Ambient => "ambient",
            LightChannel::Sun => "sun",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LightChannel::Ambient => "Ambient",
            LightChannel::Sun => "Sonnenlicht",
        }
    }

    pub fn range(self) -> (f64, f64, f64) {
        match self {
            LightChannel::Ambient => AMBIENT_RANGE,
            LightChannel::Sun => SUN_RANGE,
        }
    }
}

/// Every user-adjustable parameter of the apartment.
#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    pub apartment_length: f64,
    pub apartment_width: f64,
    pub wall_height: f64,
    pub wall_thickness: f64,
    pub selected_room: RoomFunction,
    pub material: MaterialPreset,
    pub ambient_light: f64,
    pub sun_light: f64,
    pub furniture: FurnitureVisibility,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            apartment_length: DEFAULT_LENGTH,
            apartment_width: DEFAULT_WIDTH,
            wall_height: DEFAULT_WALL_HEIGHT,
            wall_thickness: DEFAULT_WALL_THICKNESS,
            selected_room: RoomFunction::Living,
            material: MaterialPreset::LightWood,
            ambient_light: DEFAULT_AMBIENT,
            sun_light: DEFAULT_SUN,
            furniture: FurnitureVisibility::default(),
        }
    }
}

impl Configuration {
    pub fn dimension(&self, dim: Dimension) -> f64 {
        match dim {
            Dimension::Length => self.apartment_length,
            Dimension::Width => self.apartment_width,
            Dimension::WallHeight => self.wall_height,
            Dimension::WallThickness => self.wall_thickness,
        }
    }

    pub(crate) fn dimension_mut(&mut self, dim: Dimension) -> &mut f64 {
        match dim {
            Dimension::Length => &mut self.apartment_length,
            Dimension::Width => &mut self.apartment_width,
            Dimension::WallHeight => &mut self.wall_height,
            Dimension::WallThickness => &mut self.wall_thickness,
        }
    }

    pub fn light(&self, channel: LightChannel) -> f64 {
        match channel {
            LightChannel::Ambient => self.ambient_light,
            LightChannel::Sun => self.sun_light,
        }
    }

    pub(crate) fn light_mut(&mut self, channel: LightChannel) -> &mut f64 {
        match channel {
            LightChannel::Ambient => &mut self.ambient_light,
            LightChannel::Sun => &mut self.sun_light,
        }
    }
}

/// Round to the stored precision (two decimals).
#[inline]
pub fn round_to_precision(value: f64) -> f64 {
    let scale = 10f64.powi(VALUE_DECIMALS);
    (value * scale).round() / scale
}
