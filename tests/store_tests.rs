// Host-side tests for the configuration store: rounding, clamping,
// notification and the furniture toggle.

use raumplaner_core::*;
use std::cell::RefCell;
use std::rc::Rc;

fn recording_store() -> (ConfigStore, Rc<RefCell<Vec<Change>>>) {
    let mut store = ConfigStore::default();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |_cfg, change| sink.borrow_mut().push(change));
    (store, seen)
}

#[test]
fn defaults_match_a_fresh_session() {
    let store = ConfigStore::default();
    let c = store.config();
    assert_eq!(c.apartment_length, 12.0);
    assert_eq!(c.apartment_width, 8.0);
    assert_eq!(c.wall_height, 3.0);
    assert_eq!(c.wall_thickness, 0.25);
    assert_eq!(c.selected_room, RoomFunction::Living);
    assert_eq!(c.material, MaterialPreset::LightWood);
    assert_eq!(c.ambient_light, 0.35);
    assert_eq!(c.sun_light, 1.1);
    assert!(c.furniture.is_visible(FurnitureItem::Sofa));
    assert!(c.furniture.is_visible(FurnitureItem::DiningTable));
    assert!(!c.furniture.is_visible(FurnitureItem::KitchenIsland));
    assert!(c.furniture.is_visible(FurnitureItem::Bed));
    assert!(!c.furniture.is_visible(FurnitureItem::Desk));
}

#[test]
fn set_dimension_rounds_to_two_decimals() {
    let mut store = ConfigStore::default();
    store.set_dimension(Dimension::Length, 12.3456);
    assert_eq!(store.config().apartment_length, 12.35);
    store.set_dimension(Dimension::WallThickness, 0.2049);
    assert_eq!(store.config().wall_thickness, 0.2);
}

#[test]
fn set_light_rounds_to_two_decimals() {
    let mut store = ConfigStore::default();
    store.set_light(LightChannel::Sun, 1.23456);
    assert_eq!(store.config().sun_light, 1.23);
    store.set_light(LightChannel::Ambient, 0.7777);
    assert_eq!(store.config().ambient_light, 0.78);
}

#[test]
fn out_of_range_values_are_clamped() {
    let mut store = ConfigStore::default();
    store.set_dimension(Dimension::Length, 25.0);
    assert_eq!(store.config().apartment_length, 20.0);
    store.set_dimension(Dimension::Width, 1.0);
    assert_eq!(store.config().apartment_width, 6.0);
    store.set_light(LightChannel::Sun, 0.0);
    assert_eq!(store.config().sun_light, 0.4);
    store.set_light(LightChannel::Ambient, -3.0);
    assert_eq!(store.config().ambient_light, 0.0);
}

#[test]
fn non_finite_values_are_ignored_without_notification() {
    let (mut store, seen) = recording_store();
    store.set_dimension(Dimension::Length, f64::NAN);
    store.set_light(LightChannel::Ambient, f64::INFINITY);
    assert_eq!(store.config().apartment_length, 12.0);
    assert_eq!(store.config().ambient_light, 0.35);
    assert!(seen.borrow().is_empty());
}

#[test]
fn toggle_furniture_is_an_involution() {
    let mut store = ConfigStore::default();
    for item in FurnitureItem::ALL {
        let before = store.config().furniture.is_visible(item);
        store.toggle_furniture(item);
        assert_ne!(store.config().furniture.is_visible(item), before);
        store.toggle_furniture(item);
        assert_eq!(store.config().furniture.is_visible(item), before);
    }
}

#[test]
fn every_mutation_notifies_once_with_its_change() {
    let (mut store, seen) = recording_store();
    store.dispatch(Action::SetDimension(Dimension::Width, 10.0));
    store.dispatch(Action::SetRoom(RoomFunction::Studio));
    store.dispatch(Action::SetMaterial(MaterialPreset::Concrete));
    store.dispatch(Action::SetLight(LightChannel::Sun, 1.5));
    store.dispatch(Action::ToggleFurniture(FurnitureItem::Desk));
    assert_eq!(
        *seen.borrow(),
        vec![
            Change::Dimension(Dimension::Width),
            Change::Room,
            Change::Material,
            Change::Light(LightChannel::Sun),
            Change::Furniture(FurnitureItem::Desk),
        ]
    );
    let c = store.config();
    assert_eq!(c.apartment_width, 10.0);
    assert_eq!(c.selected_room, RoomFunction::Studio);
    assert_eq!(c.material, MaterialPreset::Concrete);
    assert_eq!(c.sun_light, 1.5);
    assert!(c.furniture.is_visible(FurnitureItem::Desk));
}

#[test]
fn setting_the_same_room_still_notifies() {
    let (mut store, seen) = recording_store();
    store.set_room(RoomFunction::Living);
    store.set_room(RoomFunction::Living);
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn listeners_see_the_updated_configuration() {
    let mut store = ConfigStore::default();
    let observed = Rc::new(RefCell::new(None));
    let sink = observed.clone();
    store.subscribe(move |cfg, _| *sink.borrow_mut() = Some(cfg.wall_height));
    store.set_dimension(Dimension::WallHeight, 3.7);
    assert_eq!(*observed.borrow(), Some(3.7));
}

#[test]
fn unsubscribed_listeners_are_not_called() {
    let mut store = ConfigStore::default();
    let calls = Rc::new(RefCell::new(0));
    let sink = calls.clone();
    let id = store.subscribe(move |_, _| *sink.borrow_mut() += 1);
    assert_eq!(store.subscriber_count(), 1);
    store.set_room(RoomFunction::Kitchen);
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.set_room(RoomFunction::Bedroom);
    assert_eq!(*calls.borrow(), 1);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn change_classification() {
    assert!(Change::Dimension(Dimension::Length).affects_metrics());
    assert!(Change::Dimension(Dimension::WallHeight).affects_metrics());
    assert!(!Change::Dimension(Dimension::WallThickness).affects_metrics());
    assert!(Change::Room.affects_metrics());
    assert!(Change::Material.affects_metrics());
    assert!(!Change::Light(LightChannel::Sun).affects_metrics());
    assert!(!Change::Furniture(FurnitureItem::Bed).affects_metrics());

    assert!(Change::Material.affects_floor_texture());
    assert!(!Change::Dimension(Dimension::Length).affects_floor_texture());
}

#[test]
fn identifiers_parse_and_unknown_ids_error() {
    for room in RoomFunction::ALL {
        assert_eq!(room.id().parse::<RoomFunction>(), Ok(room));
    }
    for preset in MaterialPreset::ALL {
        assert_eq!(preset.id().parse::<MaterialPreset>(), Ok(preset));
    }
    for item in FurnitureItem::ALL {
        assert_eq!(item.id().parse::<FurnitureItem>(), Ok(item));
    }
    assert_eq!(
        "marble".parse::<MaterialPreset>(),
        Err(PlannerError::UnknownMaterial("marble".into()))
    );
    assert_eq!(
        "attic".parse::<RoomFunction>(),
        Err(PlannerError::UnknownRoom("attic".into()))
    );
    assert_eq!(RoomFunction::label_for_id("attic"), "Neutral");
    assert_eq!(RoomFunction::label_for_id("kitchen"), "Küche");
}
