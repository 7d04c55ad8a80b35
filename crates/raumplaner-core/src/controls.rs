//! View model for the control panel.
//!
//! `ControlsModel` is a pure function of the configuration; the DOM layer
//! renders it and turns widget events back into store `Action`s through
//! [`parse_action`]. Widgets keep no state of their own.

use crate::config::{
    Configuration, Dimension, FurnitureItem, LightChannel, MaterialPreset, RoomFunction,
};
use crate::error::{PlannerError, Result};
use crate::store::Action;

/// Widget groups, as carried in the DOM `data-group` attribute.
pub const GROUP_DIMENSION: &str = "dimension";
pub const GROUP_ROOM: &str = "room";
pub const GROUP_MATERIAL: &str = "material";
pub const GROUP_LIGHT: &str = "light";
pub const GROUP_FURNITURE: &str = "furniture";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionCopy {
    pub title: &'static str,
    pub intro: Option<&'static str>,
}

pub const SECTION_LAYOUT: SectionCopy = SectionCopy {
    title: "Grundriss",
    intro: Some("Konfiguriere die Größe der Wohnung in Metern, um die perfekte Proportion zu finden."),
};
pub const SECTION_ROOMS: SectionCopy = SectionCopy {
    title: "Raumzonen",
    intro: None,
};
pub const SECTION_MATERIALS: SectionCopy = SectionCopy {
    title: "Materialität",
    intro: None,
};
pub const SECTION_LIGHTING: SectionCopy = SectionCopy {
    title: "Beleuchtung",
    intro: None,
};
pub const SECTION_FURNITURE: SectionCopy = SectionCopy {
    title: "Mobiliar",
    intro: None,
};

/// Glyph shown when a material card is active.
pub const CHECK_MARK: &str = "✓";

#[derive(Clone, Debug, PartialEq)]
pub struct SliderModel {
    pub group: &'static str,
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
    pub readout: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceModel {
    pub id: &'static str,
    pub label: &'static str,
    pub hint: Option<&'static str>,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleModel {
    pub id: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ControlsModel {
    pub dimensions: Vec<SliderModel>,
    pub rooms: Vec<ChoiceModel>,
    pub materials: Vec<ChoiceModel>,
    pub lights: Vec<SliderModel>,
    pub furniture: Vec<ToggleModel>,
}

impl ControlsModel {
    pub fn from_config(config: &Configuration) -> Self {
        let dimensions = Dimension::ALL
            .iter()
            .map(|&d| {
                let value = config.dimension(d);
                slider(GROUP_DIMENSION, d.id(), d.label(), None, d.range(), value, dimension_readout(value))
            })
            .collect();
        let lights = LightChannel::ALL
            .iter()
            .map(|&l| {
                let value = config.light(l);
                slider(GROUP_LIGHT, l.id(), l.label(), Some(light_icon(l)), l.range(), value, light_readout(value))
            })
            .collect();
        let rooms = RoomFunction::ALL
            .iter()
            .map(|&r| ChoiceModel {
                id: r.id(),
                label: r.label(),
                hint: None,
                active: r == config.selected_room,
            })
            .collect();
        let materials = MaterialPreset::ALL
            .iter()
            .map(|&m| ChoiceModel {
                id: m.id(),
                label: m.label(),
                hint: Some(m.hint()),
                active: m == config.material,
            })
            .collect();
        let furniture = config
            .furniture
            .iter()
            .map(|(item, checked)| ToggleModel {
                id: item.id(),
                label: item.label(),
                checked,
            })
            .collect();
        Self {
            dimensions,
            rooms,
            materials,
            lights,
            furniture,
        }
    }

    pub fn active_room(&self) -> Option<&ChoiceModel> {
        self.rooms.iter().find(|c| c.active)
    }

    pub fn active_material(&self) -> Option<&ChoiceModel> {
        self.materials.iter().find(|c| c.active)
    }
}

fn slider(
    group: &'static str,
    id: &'static str,
    label: &'static str,
    icon: Option<&'static str>,
    (min, max, step): (f64, f64, f64),
    value: f64,
    readout: String,
) -> SliderModel {
    SliderModel {
        group,
        id,
        label,
        icon,
        min,
        max,
        step,
        value,
        readout,
    }
}

pub fn dimension_readout(value: f64) -> String {
    format!("{:.2} m", value)
}

pub fn light_readout(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn light_icon(channel: LightChannel) -> &'static str {
    match channel {
        LightChannel::Ambient => "💡",
        LightChannel::Sun => "☀",
    }
}

/// Translate a widget event into a store action.
///
/// `raw` is the input's value for sliders and ignored for buttons and
/// checkboxes.
pub fn parse_action(group: &str, id: &str, raw: &str) -> Result<Action> {
    match group {
        GROUP_DIMENSION => {
            let dim = Dimension::ALL
                .into_iter()
                .find(|d| d.id() == id)
                .ok_or_else(|| PlannerError::UnknownControl(format!("{group}:{id}")))?;
            Ok(Action::SetDimension(dim, parse_number(raw)?))
        }
        GROUP_LIGHT => {
            let channel = LightChannel::ALL
                .into_iter()
                .find(|l| l.id() == id)
                .ok_or_else(|| PlannerError::UnknownControl(format!("{group}:{id}")))?;
            Ok(Action::SetLight(channel, parse_number(raw)?))
        }
        GROUP_ROOM => Ok(Action::SetRoom(id.parse()?)),
        GROUP_MATERIAL => Ok(Action::SetMaterial(id.parse()?)),
        GROUP_FURNITURE => Ok(Action::ToggleFurniture(id.parse::<FurnitureItem>()?)),
        _ => Err(PlannerError::UnknownControl(format!("{group}:{id}"))),
    }
}

fn parse_number(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| PlannerError::InvalidNumber(raw.to_string()))
}
