//! Control panel DOM.
//!
//! Widgets are built once from a `ControlsModel` and re-synced from a fresh
//! model after every store notification. Every event goes through
//! `parse_action` and `ConfigStore::dispatch`; nothing here caches values.

use crate::constants::ACTIVE_CLASS;
use crate::dom::{add_listener, append, el, js_err, set_attrs, set_class_flag};
use crate::SharedStore;
use raumplaner_core::controls::{
    parse_action, ChoiceModel, ControlsModel, SectionCopy, SliderModel, ToggleModel, CHECK_MARK,
    GROUP_FURNITURE, GROUP_MATERIAL, GROUP_ROOM, SECTION_FURNITURE, SECTION_LAYOUT,
    SECTION_LIGHTING, SECTION_MATERIALS, SECTION_ROOMS,
};
use wasm_bindgen::JsCast;
use web_sys as web;

struct SliderWidget {
    input: web::HtmlInputElement,
    readout: web::Element,
}

struct ChoiceWidget {
    node: web::Element,
    check: Option<web::Element>,
}

struct ToggleWidget {
    row: web::Element,
    input: web::HtmlInputElement,
}

pub struct ControlPanel {
    dimensions: Vec<SliderWidget>,
    lights: Vec<SliderWidget>,
    rooms: Vec<ChoiceWidget>,
    materials: Vec<ChoiceWidget>,
    furniture: Vec<ToggleWidget>,
}

impl ControlPanel {
    pub fn mount(
        document: &web::Document,
        container: &web::Element,
        store: &SharedStore,
    ) -> anyhow::Result<Self> {
        let model = ControlsModel::from_config(store.borrow().config());
        container.set_inner_html("");

        let layout = section(document, container, SECTION_LAYOUT)?;
        let grid = el(document, "div", "slider-grid", None)?;
        append(&layout, &grid)?;
        let dimensions = model
            .dimensions
            .iter()
            .map(|m| slider(document, &grid, m, store, "dimension-control"))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let rooms_section = section(document, container, SECTION_ROOMS)?;
        let row = el(document, "div", "room-row", None)?;
        append(&rooms_section, &row)?;
        let rooms = model
            .rooms
            .iter()
            .map(|m| choice(document, &row, GROUP_ROOM, m, store, "room-button"))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let materials_section = section(document, container, SECTION_MATERIALS)?;
        let cards = el(document, "div", "material-grid", None)?;
        append(&materials_section, &cards)?;
        let materials = model
            .materials
            .iter()
            .map(|m| choice(document, &cards, GROUP_MATERIAL, m, store, "material-card"))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let lights_section = section(document, container, SECTION_LIGHTING)?;
        let light_grid = el(document, "div", "light-grid", None)?;
        append(&lights_section, &light_grid)?;
        let lights = model
            .lights
            .iter()
            .map(|m| slider(document, &light_grid, m, store, "light-control"))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let furniture_section = section(document, container, SECTION_FURNITURE)?;
        let toggles = el(document, "div", "furniture-grid", None)?;
        append(&furniture_section, &toggles)?;
        let furniture = model
            .furniture
            .iter()
            .map(|m| toggle(document, &toggles, m, store))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let panel = Self {
            dimensions,
            lights,
            rooms,
            materials,
            furniture,
        };
        panel.apply(&model);
        Ok(panel)
    }

    /// Bring every widget in line with `model`.
    pub fn apply(&self, model: &ControlsModel) {
        for (w, m) in self.dimensions.iter().zip(&model.dimensions) {
            sync_slider(w, m);
        }
        for (w, m) in self.lights.iter().zip(&model.lights) {
            sync_slider(w, m);
        }
        for (w, m) in self.rooms.iter().zip(&model.rooms) {
            sync_choice(w, m);
        }
        for (w, m) in self.materials.iter().zip(&model.materials) {
            sync_choice(w, m);
        }
        for (w, m) in self.furniture.iter().zip(&model.furniture) {
            w.input.set_checked(m.checked);
            set_class_flag(&w.row, ACTIVE_CLASS, m.checked);
        }
    }
}

fn section(
    document: &web::Document,
    container: &web::Element,
    copy: SectionCopy,
) -> anyhow::Result<web::Element> {
    let s = el(document, "section", "panel-section", None)?;
    append(&s, &el(document, "h2", "panel-title", Some(copy.title))?)?;
    if let Some(intro) = copy.intro {
        append(&s, &el(document, "p", "panel-intro", Some(intro))?)?;
    }
    append(container, &s)?;
    Ok(s)
}

fn dispatch_from(store: &SharedStore, group: &str, id: &str, raw: &str) {
    let action = match parse_action(group, id, raw) {
        Ok(a) => a,
        Err(e) => {
            log::warn!("[panel] {}", e);
            return;
        }
    };
    match store.try_borrow_mut() {
        Ok(mut s) => s.dispatch(action),
        Err(_) => log::warn!("[panel] store busy; dropped {:?}", action),
    }
}

fn slider(
    document: &web::Document,
    parent: &web::Element,
    m: &SliderModel,
    store: &SharedStore,
    class: &str,
) -> anyhow::Result<SliderWidget> {
    let wrap = el(document, "div", class, None)?;
    let head = el(document, "div", "control-head", None)?;
    if let Some(icon) = m.icon {
        append(&head, &el(document, "span", "control-icon", Some(icon))?)?;
    }
    append(&head, &el(document, "span", "control-label", Some(m.label))?)?;
    let readout = el(document, "span", "control-readout", Some(&m.readout))?;
    append(&head, &readout)?;
    append(&wrap, &head)?;

    let input_el = el(document, "input", "range", None)?;
    set_attrs(
        &input_el,
        &[
            ("type", "range"),
            ("min", m.min.to_string().as_str()),
            ("max", m.max.to_string().as_str()),
            ("step", m.step.to_string().as_str()),
            ("data-group", m.group),
            ("data-id", m.id),
            ("aria-label", m.label),
        ],
    )?;
    let input = input_el
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| js_err(e.into()))?;
    append(&wrap, &input)?;
    append(parent, &wrap)?;

    let (group, id) = (m.group, m.id);
    let store = store.clone();
    let source = input.clone();
    add_listener(input.as_ref(), "input", move |_| {
        dispatch_from(&store, group, id, &source.value());
    });

    Ok(SliderWidget { input, readout })
}

fn sync_slider(w: &SliderWidget, m: &SliderModel) {
    w.input.set_value(&m.value.to_string());
    w.readout.set_text_content(Some(&m.readout));
}

fn choice(
    document: &web::Document,
    parent: &web::Element,
    group: &'static str,
    m: &ChoiceModel,
    store: &SharedStore,
    class: &str,
) -> anyhow::Result<ChoiceWidget> {
    let node = el(document, "button", class, None)?;
    set_attrs(&node, &[("type", "button"), ("data-group", group), ("data-id", m.id)])?;
    let check = match m.hint {
        Some(hint) => {
            append(&node, &el(document, "span", "card-title", Some(m.label))?)?;
            append(&node, &el(document, "span", "card-hint", Some(hint))?)?;
            let check = el(document, "span", "card-check", Some(CHECK_MARK))?;
            append(&node, &check)?;
            Some(check)
        }
        None => {
            node.set_text_content(Some(m.label));
            None
        }
    };
    append(parent, &node)?;

    let id = m.id;
    let store = store.clone();
    add_listener(node.as_ref(), "click", move |_| {
        dispatch_from(&store, group, id, "");
    });

    Ok(ChoiceWidget { node, check })
}

fn sync_choice(w: &ChoiceWidget, m: &ChoiceModel) {
    set_class_flag(&w.node, ACTIVE_CLASS, m.active);
    _ = w
        .node
        .set_attribute("aria-pressed", if m.active { "true" } else { "false" });
    if let Some(check) = &w.check {
        _ = if m.active {
            check.remove_attribute("hidden")
        } else {
            check.set_attribute("hidden", "")
        };
    }
}

fn toggle(
    document: &web::Document,
    parent: &web::Element,
    m: &ToggleModel,
    store: &SharedStore,
) -> anyhow::Result<ToggleWidget> {
    let row = el(document, "label", "furniture-toggle", None)?;
    append(&row, &el(document, "span", "toggle-label", Some(m.label))?)?;
    let input_el = el(document, "input", "toggle-input", None)?;
    set_attrs(
        &input_el,
        &[
            ("type", "checkbox"),
            ("data-group", GROUP_FURNITURE),
            ("data-id", m.id),
        ],
    )?;
    let input = input_el
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| js_err(e.into()))?;
    append(&row, &input)?;
    append(parent, &row)?;

    let id = m.id;
    let store = store.clone();
    add_listener(input.as_ref(), "change", move |_| {
        dispatch_from(&store, GROUP_FURNITURE, id, "");
    });

    Ok(ToggleWidget { row, input })
}
