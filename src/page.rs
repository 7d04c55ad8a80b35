//! Static page layout: hero, planner (canvas + control panel), details
//! (metrics) and footer, mounted in that order.

use crate::constants::*;
use crate::dom::{self, append, el, js_err, set_attrs};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Shell {
    pub canvas: web::HtmlCanvasElement,
    pub control_panel: web::Element,
    pub metrics_panel: web::Element,
}

pub fn mount(document: &web::Document) -> anyhow::Result<Shell> {
    let root: web::Element = match document.get_element_by_id(ROOT_ID) {
        Some(r) => r,
        None => document
            .body()
            .map(Into::into)
            .ok_or_else(|| anyhow::anyhow!("no <body> to mount into"))?,
    };
    root.set_inner_html("");

    append(&root, &hero(document)?)?;

    let planner = el(document, "section", "planner", None)?;
    planner.set_id(PLANNER_SECTION_ID);
    let viewport = el(document, "div", "viewport", None)?;
    let canvas_el = el(document, "canvas", "viewport-canvas", None)?;
    canvas_el.set_id(CANVAS_ID);
    set_attrs(&canvas_el, &[("aria-label", "3D-Ansicht der Wohnung")])?;
    append(&viewport, &canvas_el)?;
    append(&planner, &viewport)?;
    let control_panel = el(document, "aside", "control-panel", None)?;
    control_panel.set_id(CONTROL_PANEL_ID);
    append(&planner, &control_panel)?;
    append(&root, &planner)?;

    let details = el(document, "section", "details", None)?;
    details.set_id(DETAILS_SECTION_ID);
    let metrics_panel = el(document, "div", "metrics-panel", None)?;
    metrics_panel.set_id(METRICS_PANEL_ID);
    append(&details, &metrics_panel)?;
    append(&root, &details)?;

    append(&root, &el(document, "footer", "footer", Some(FOOTER_TEXT))?)?;

    let canvas = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| js_err(e.into()))?;
    dom::wire_canvas_resize(&canvas);
    log::info!("[page] shell mounted");

    Ok(Shell {
        canvas,
        control_panel,
        metrics_panel,
    })
}

fn hero(document: &web::Document) -> anyhow::Result<web::Element> {
    let header = el(document, "header", "hero", None)?;
    append(&header, &el(document, "span", "badge", Some(BADGE_TEXT))?)?;
    append(&header, &el(document, "h1", "headline", Some(HEADLINE_TEXT))?)?;
    append(&header, &el(document, "p", "lead", Some(LEAD_TEXT))?)?;

    let cta = el(document, "div", "cta", None)?;
    let plan = el(document, "a", "button button-primary", Some(CTA_PLAN_TEXT))?;
    set_attrs(&plan, &[("href", format!("#{PLANNER_SECTION_ID}").as_str())])?;
    let details = el(document, "a", "button button-ghost", Some(CTA_DETAILS_TEXT))?;
    set_attrs(&details, &[("href", format!("#{DETAILS_SECTION_ID}").as_str())])?;
    append(&cta, &plan)?;
    append(&cta, &details)?;
    append(&header, &cta)?;
    Ok(header)
}
