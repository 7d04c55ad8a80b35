// Host-side tests for the scene description derived from a configuration.

use raumplaner_core::*;

const EPS: f32 = 1e-4;

fn scene_for(store: &ConfigStore) -> SceneDescription {
    SceneDescription::from_config(store.config())
}

#[test]
fn same_configuration_gives_the_same_scene() {
    let mut store = ConfigStore::default();
    store.set_dimension(Dimension::Length, 15.5);
    store.toggle_furniture(FurnitureItem::Desk);
    assert_eq!(scene_for(&store), scene_for(&store));
}

#[test]
fn default_scene_has_floor_walls_zones_outline_and_three_blocks() {
    let scene = scene_for(&ConfigStore::default());
    assert!(scene.find(ObjectKind::Floor).is_some());
    assert_eq!(scene.walls().count(), 4);
    assert!(scene.find(ObjectKind::ZoneStrip(ZoneSide::Front)).is_some());
    assert!(scene.find(ObjectKind::ZoneStrip(ZoneSide::Back)).is_some());
    assert!(scene.find(ObjectKind::Outline).is_some());
    assert_eq!(scene.furniture().count(), 3);
    // floor + 4 walls + 2 strips + outline + 3 blocks
    assert_eq!(scene.objects().count(), 11);
}

#[test]
fn all_furniture_visible_stays_within_sixteen_objects() {
    let mut store = ConfigStore::default();
    store.toggle_furniture(FurnitureItem::KitchenIsland);
    store.toggle_furniture(FurnitureItem::Desk);
    let scene = scene_for(&store);
    assert_eq!(scene.furniture().count(), 5);
    assert!(scene.objects().count() <= 16);
}

#[test]
fn floor_spans_length_by_width() {
    let mut store = ConfigStore::default();
    store.set_dimension(Dimension::Length, 18.0);
    store.set_dimension(Dimension::Width, 7.5);
    let scene = scene_for(&store);
    let floor = scene.find(ObjectKind::Floor).expect("floor");
    assert!((floor.extent().x - 18.0).abs() < EPS);
    assert!((floor.extent().z - 7.5).abs() < EPS);
    assert!(floor.center.y.abs() < EPS);
    assert!(floor.receives_shadow);
    assert_eq!(floor.uv_repeat, [9.0, 3.75]);
}

#[test]
fn walls_sit_flush_on_the_floor_boundary() {
    let mut store = ConfigStore::default();
    store.set_dimension(Dimension::Length, 14.0);
    store.set_dimension(Dimension::Width, 10.0);
    store.set_dimension(Dimension::WallHeight, 3.5);
    store.set_dimension(Dimension::WallThickness, 0.3);
    let scene = scene_for(&store);

    let wall = |side| scene.find(ObjectKind::Wall(side)).expect("wall");
    assert!((wall(WallSide::Back).min().z + 5.0).abs() < EPS);
    assert!((wall(WallSide::Front).max().z - 5.0).abs() < EPS);
    assert!((wall(WallSide::Left).min().x + 7.0).abs() < EPS);
    assert!((wall(WallSide::Right).max().x - 7.0).abs() < EPS);

    for w in scene.walls() {
        assert!(w.min().y.abs() < EPS, "{:?} should stand on the floor", w.kind);
        assert!((w.max().y - 3.5).abs() < EPS);
        assert!(w.casts_shadow && w.receives_shadow);
    }
    assert!((wall(WallSide::Back).extent().z - 0.3).abs() < EPS);
    assert!((wall(WallSide::Left).extent().x - 0.3).abs() < EPS);
}

#[test]
fn walls_do_not_overlap_at_corners() {
    let scene = scene_for(&ConfigStore::default());
    let back = scene.find(ObjectKind::Wall(WallSide::Back)).expect("back");
    let left = scene.find(ObjectKind::Wall(WallSide::Left)).expect("left");
    assert!(left.min().z >= back.max().z - EPS);
}

#[test]
fn zone_strips_cover_front_and_back_thirds() {
    let mut store = ConfigStore::default();
    store.set_dimension(Dimension::Width, 9.0);
    let scene = scene_for(&store);
    let front = scene.find(ObjectKind::ZoneStrip(ZoneSide::Front)).expect("front");
    let back = scene.find(ObjectKind::ZoneStrip(ZoneSide::Back)).expect("back");
    assert!((front.extent().z - 3.0).abs() < EPS);
    assert!((front.max().z - 4.5).abs() < EPS);
    assert!((back.min().z + 4.5).abs() < EPS);
    assert!(front.center.y > 0.0);
    assert_eq!(front.pass, DrawPass::Translucent);
    assert!(front.material.opacity < 0.1);
}

#[test]
fn zoning_ignores_the_selected_room() {
    let mut store = ConfigStore::default();
    let before = scene_for(&store);
    store.set_room(RoomFunction::Bedroom);
    assert_eq!(scene_for(&store), before);
}

#[test]
fn outline_is_an_unlit_line_loop_above_the_strips() {
    let scene = scene_for(&ConfigStore::default());
    let outline = scene.find(ObjectKind::Outline).expect("outline");
    let strip = scene.find(ObjectKind::ZoneStrip(ZoneSide::Front)).expect("strip");
    assert_eq!(outline.pass, DrawPass::Lines);
    assert_eq!(outline.mesh, MeshKind::UnitOutline);
    assert!(outline.material.unlit);
    assert!(outline.center.y > strip.center.y);
}

#[test]
fn furniture_follows_apartment_size() {
    let mut store = ConfigStore::default();
    let sofa = ObjectKind::Furniture(FurnitureItem::Sofa);
    let small = scene_for(&store).find(sofa).expect("sofa").center;
    store.set_dimension(Dimension::Length, 20.0);
    store.set_dimension(Dimension::Width, 14.0);
    let large = scene_for(&store).find(sofa).expect("sofa").center;
    assert!(large.x < small.x);
    assert!(large.z > small.z);
}

#[test]
fn furniture_blocks_rest_above_the_floor() {
    let mut store = ConfigStore::default();
    store.toggle_furniture(FurnitureItem::KitchenIsland);
    store.toggle_furniture(FurnitureItem::Desk);
    for block in scene_for(&store).furniture() {
        assert!(block.min().y >= -EPS, "{:?}", block.kind);
        assert!(block.casts_shadow);
        assert_eq!(block.mesh, MeshKind::UnitCube);
    }
}

#[test]
fn lighting_follows_sliders() {
    let mut store = ConfigStore::default();
    store.set_light(LightChannel::Ambient, 0.8);
    store.set_light(LightChannel::Sun, 1.9);
    let scene = scene_for(&store);
    assert!((scene.lighting.ambient_intensity - 0.8).abs() < EPS);
    assert!((scene.lighting.sun_intensity - 1.9).abs() < EPS);
    assert_eq!(scene.lighting.shadow_map_size, 2048);
    assert!(scene.lighting.soft_shadows);
}

#[test]
fn wood_presets_request_grain_and_concrete_does_not() {
    let mut store = ConfigStore::default();
    for (preset, textured) in [
        (MaterialPreset::LightWood, true),
        (MaterialPreset::Concrete, false),
        (MaterialPreset::DarkWood, true),
    ] {
        store.set_material(preset);
        let scene = scene_for(&store);
        assert_eq!(scene.floor_texture.is_some(), textured, "{:?}", preset);
        let floor = scene.find(ObjectKind::Floor).expect("floor");
        assert_eq!(floor.material.textured, textured);
        if let Some(req) = scene.floor_texture {
            assert_eq!(req.preset, preset);
            assert_eq!(req.size, 512);
        }
    }
}

#[test]
fn bounds_cover_walls() {
    let scene = scene_for(&ConfigStore::default());
    let (lo, hi) = scene.bounds();
    assert!((lo.x + 6.0).abs() < EPS && (hi.x - 6.0).abs() < EPS);
    assert!((lo.z + 4.0).abs() < EPS && (hi.z - 4.0).abs() < EPS);
    assert!((hi.y - 3.0).abs() < EPS);
}
