//! Observable configuration store.
//!
//! The store owns the one `Configuration` of a session. Widgets mutate it only
//! through `dispatch` (or the typed setters it forwards to); every mutation is
//! followed by a synchronous notification of all subscribers, which receive the
//! new configuration together with a `Change` describing what moved.
//!
//! Subscribers get `&Configuration` and never a handle to the store itself, so a
//! listener can't re-enter the store while it is being mutated.

use crate::config::{
    round_to_precision, Configuration, Dimension, FurnitureItem, LightChannel, MaterialPreset,
    RoomFunction,
};

/// What a single mutation touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Change {
    Dimension(Dimension),
    Room,
    Material,
    Light(LightChannel),
    Furniture(FurnitureItem),
}

impl Change {
    /// Area, proportion, volume and the material descriptor depend on these.
    pub fn affects_metrics(self) -> bool {
        match self {
            Change::Dimension(d) => d != Dimension::WallThickness,
            Change::Room | Change::Material => true,
            Change::Light(_) | Change::Furniture(_) => false,
        }
    }

    /// The grain bitmap depends on the preset only; tiling is a uniform.
    pub fn affects_floor_texture(self) -> bool {
        matches!(self, Change::Material)
    }
}

/// One user intent, as emitted by a control-panel widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    SetDimension(Dimension, f64),
    SetRoom(RoomFunction),
    SetMaterial(MaterialPreset),
    SetLight(LightChannel, f64),
    ToggleFurniture(FurnitureItem),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Configuration, Change)>;

pub struct ConfigStore {
    config: Configuration,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl ConfigStore {
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&Configuration, Change) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not (or no longer) subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SetDimension(dim, value) => self.set_dimension(dim, value),
            Action::SetRoom(room) => self.set_room(room),
            Action::SetMaterial(preset) => self.set_material(preset),
            Action::SetLight(channel, value) => self.set_light(channel, value),
            Action::ToggleFurniture(item) => self.toggle_furniture(item),
        }
    }

    pub fn set_dimension(&mut self, dim: Dimension, value: f64) {
        let Some(v) = sanitize(value, dim.range(), dim.id()) else {
            return;
        };
        *self.config.dimension_mut(dim) = v;
        self.notify(Change::Dimension(dim));
    }

    pub fn set_room(&mut self, room: RoomFunction) {
        self.config.selected_room = room;
        self.notify(Change::Room);
    }

    pub fn set_material(&mut self, preset: MaterialPreset) {
        self.config.material = preset;
        self.notify(Change::Material);
    }

    pub fn set_light(&mut self, channel: LightChannel, value: f64) {
        let Some(v) = sanitize(value, channel.range(), channel.id()) else {
            return;
        };
        *self.config.light_mut(channel) = v;
        self.notify(Change::Light(channel));
    }

    pub fn toggle_furniture(&mut self, item: FurnitureItem) {
        let now = self.config.furniture.toggle(item);
        log::debug!("[store] furniture {} -> {}", item, now);
        self.notify(Change::Furniture(item));
    }

    fn notify(&mut self, change: Change) {
        let config = &self.config;
        for (_, listener) in self.listeners.iter_mut() {
            listener(config, change);
        }
    }
}

/// Clamp into the declared range and round to the stored precision.
/// Non-finite input is rejected.
fn sanitize(value: f64, (min, max, _step): (f64, f64, f64), field: &str) -> Option<f64> {
    if !value.is_finite() {
        log::warn!("[store] ignoring non-finite value for {}: {}", field, value);
        return None;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::warn!(
            "[store] {} value {} outside [{}, {}]; clamped",
            field,
            value,
            min,
            max
        );
    }
    Some(round_to_precision(clamped))
}
