//! Derived read-only statistics for the project analysis panel.

use crate::config::{Configuration, RoomFunction};

pub const METRICS_HEADING: &str = "Projektanalyse";
pub const METRICS_INTRO: &str = "Automatisch generierte Kennzahlen für deinen Grundriss. \
Passe Maße und Materialien an, um die Werte zu optimieren.";

/// Label and narrative shown for the active floor material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaterialDescriptor {
    pub label: &'static str,
    pub note: &'static str,
}

pub const NEUTRAL_DESCRIPTOR: MaterialDescriptor = MaterialDescriptor {
    label: "Neutral",
    note: "Individuell",
};

/// Look up the descriptor for a material identifier. Unknown identifiers get
/// the neutral pair.
pub fn material_descriptor(id: &str) -> MaterialDescriptor {
    match id {
        "light-wood" => MaterialDescriptor {
            label: "Helles Holz",
            note: "Skandinavische Leichtigkeit & Weite",
        },
        "concrete" => MaterialDescriptor {
            label: "Sichtbeton",
            note: "Urbanes Loft-Ambiente",
        },
        "dark-wood" => MaterialDescriptor {
            label: "Geräucherte Eiche",
            note: "Elegante Boutique-Atmosphäre",
        },
        _ => NEUTRAL_DESCRIPTOR,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    /// m²
    pub area: f64,
    /// length / width
    pub ratio: f64,
    /// m³
    pub volume: f64,
    pub room: RoomFunction,
    pub material: MaterialDescriptor,
}

impl Metrics {
    pub fn from_config(config: &Configuration) -> Self {
        let area = config.apartment_length * config.apartment_width;
        Self {
            area,
            ratio: config.apartment_length / config.apartment_width,
            volume: area * config.wall_height,
            room: config.selected_room,
            material: material_descriptor(config.material.id()),
        }
    }

    pub fn area_text(&self) -> String {
        format!("{:.1} m²", self.area)
    }

    pub fn ratio_text(&self) -> String {
        format!("{:.2} : 1", self.ratio)
    }

    pub fn volume_text(&self) -> String {
        format!("{:.1} m³", self.volume)
    }

    pub fn area_note(&self) -> &'static str {
        if self.room == RoomFunction::Living {
            "Optimale Größe für familienfreundliche Grundrisse"
        } else {
            "Optimale Größe für kompakte Grundrisse"
        }
    }

    /// The four cards in display order.
    pub fn stat_cards(&self) -> [StatCard; 4] {
        [
            StatCard {
                label: "Wohnfläche",
                value: self.area_text(),
                note: self.area_note(),
            },
            StatCard {
                label: "Proportion",
                value: self.ratio_text(),
                note: "Für harmonische Raumwirkung zwischen Länge & Breite",
            },
            StatCard {
                label: "Lichtraum",
                value: self.volume_text(),
                note: "Volumen für natürliche Luftzirkulation",
            },
            StatCard {
                label: "Material",
                value: self.material.label.to_string(),
                note: self.material.note,
            },
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub note: &'static str,
}
