// Host-side tests for the control panel model and event parsing.

use raumplaner_core::controls::*;
use raumplaner_core::*;

#[test]
fn default_model_reflects_the_store() {
    let model = ControlsModel::from_config(&Configuration::default());
    let readouts: Vec<_> = model.dimensions.iter().map(|s| s.readout.as_str()).collect();
    assert_eq!(readouts, ["12.00 m", "8.00 m", "3.00 m", "0.25 m"]);
    let lights: Vec<_> = model.lights.iter().map(|s| s.readout.as_str()).collect();
    assert_eq!(lights, ["0.35", "1.10"]);
    assert_eq!(model.lights[0].icon, Some("💡"));
    assert_eq!(model.lights[1].icon, Some("☀"));
    assert!(model.dimensions.iter().all(|s| s.icon.is_none()));
}

#[test]
fn slider_ranges_match_dimensions() {
    let model = ControlsModel::from_config(&Configuration::default());
    let length = &model.dimensions[0];
    assert_eq!((length.min, length.max, length.step), (8.0, 20.0, 0.5));
    let thickness = &model.dimensions[3];
    assert_eq!((thickness.min, thickness.max, thickness.step), (0.15, 0.5, 0.05));
    let sun = &model.lights[1];
    assert_eq!((sun.min, sun.max, sun.step), (0.4, 2.0, 0.05));
}

#[test]
fn exactly_one_room_and_material_are_active() {
    let mut store = ConfigStore::default();
    for room in RoomFunction::ALL {
        store.set_room(room);
        for preset in MaterialPreset::ALL {
            store.set_material(preset);
            let model = ControlsModel::from_config(store.config());
            assert_eq!(model.rooms.iter().filter(|c| c.active).count(), 1);
            assert_eq!(model.materials.iter().filter(|c| c.active).count(), 1);
            assert_eq!(model.active_room().map(|c| c.id), Some(room.id()));
            assert_eq!(model.active_material().map(|c| c.id), Some(preset.id()));
        }
    }
}

#[test]
fn material_cards_carry_hints() {
    let model = ControlsModel::from_config(&Configuration::default());
    assert_eq!(model.materials.len(), 3);
    assert!(model.materials.iter().all(|c| c.hint.is_some()));
    assert!(model.rooms.iter().all(|c| c.hint.is_none()));
}

#[test]
fn furniture_toggles_mirror_visibility() {
    let mut store = ConfigStore::default();
    store.toggle_furniture(FurnitureItem::Sofa);
    let model = ControlsModel::from_config(store.config());
    assert_eq!(model.furniture.len(), 5);
    let sofa = model.furniture.iter().find(|t| t.id == "sofa").expect("sofa");
    assert!(!sofa.checked);
    assert_eq!(model.furniture.iter().filter(|t| t.checked).count(), 2);
}

#[test]
fn readouts_use_two_decimals() {
    assert_eq!(dimension_readout(12.3), "12.30 m");
    assert_eq!(light_readout(0.0), "0.00");
    assert_eq!(light_readout(1.234), "1.23");
}

#[test]
fn parse_slider_events() {
    assert_eq!(
        parse_action(GROUP_DIMENSION, "length", "14.5"),
        Ok(Action::SetDimension(Dimension::Length, 14.5))
    );
    assert_eq!(
        parse_action(GROUP_LIGHT, "ambient", " 0.4 "),
        Ok(Action::SetLight(LightChannel::Ambient, 0.4))
    );
    assert_eq!(
        parse_action(GROUP_LIGHT, "sun", "abc"),
        Err(PlannerError::InvalidNumber("abc".into()))
    );
}

#[test]
fn parse_button_and_checkbox_events() {
    assert_eq!(
        parse_action(GROUP_ROOM, "kitchen", ""),
        Ok(Action::SetRoom(RoomFunction::Kitchen))
    );
    assert_eq!(
        parse_action(GROUP_MATERIAL, "dark-wood", ""),
        Ok(Action::SetMaterial(MaterialPreset::DarkWood))
    );
    assert_eq!(
        parse_action(GROUP_FURNITURE, "kitchen-island", "on"),
        Ok(Action::ToggleFurniture(FurnitureItem::KitchenIsland))
    );
}

#[test]
fn unknown_controls_are_errors() {
    assert_eq!(
        parse_action(GROUP_ROOM, "attic", ""),
        Err(PlannerError::UnknownRoom("attic".into()))
    );
    assert_eq!(
        parse_action(GROUP_DIMENSION, "depth", "3"),
        Err(PlannerError::UnknownControl("dimension:depth".into()))
    );
    assert!(matches!(
        parse_action("volume", "master", "1"),
        Err(PlannerError::UnknownControl(_))
    ));
}

#[test]
fn parsed_actions_drive_the_store() {
    let mut store = ConfigStore::default();
    let action = parse_action(GROUP_DIMENSION, "wall-height", "9").expect("valid");
    store.dispatch(action);
    assert_eq!(store.config().wall_height, 4.2);
}

#[test]
fn section_copy() {
    assert!(SECTION_LAYOUT.intro.is_some());
    for section in [SECTION_ROOMS, SECTION_MATERIALS, SECTION_LIGHTING, SECTION_FURNITURE] {
        assert!(!section.title.is_empty());
    }
}
