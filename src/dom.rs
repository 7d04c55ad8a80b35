use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Create `<tag class="...">`, optionally with text content.
pub fn el(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: Option<&str>,
) -> anyhow::Result<web::Element> {
    let node = document.create_element(tag).map_err(js_err)?;
    if !class.is_empty() {
        node.set_class_name(class);
    }
    if let Some(t) = text {
        node.set_text_content(Some(t));
    }
    Ok(node)
}

#[inline]
pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent.append_child(child).map_err(js_err)?;
    Ok(())
}

#[inline]
pub fn set_attrs(node: &web::Element, attrs: &[(&str, &str)]) -> anyhow::Result<()> {
    for (k, v) in attrs {
        node.set_attribute(k, v).map_err(js_err)?;
    }
    Ok(())
}

pub fn set_class_flag(node: &web::Element, class: &str, on: bool) {
    _ = node.class_list().toggle_with_force(class, on);
}

/// Attach a listener for the lifetime of the page.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] addEventListener({}) failed: {:?}", event, e);
    }
    closure.forget();
}

/// Like `add_listener` but non-passive, so the handler may `prevent_default`.
pub fn add_active_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[dom] addEventListener({}) failed: {:?}", event, e);
    }
    closure.forget();
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        add_listener(window.as_ref(), "resize", move |_| {
            sync_canvas_backing_size(&canvas_resize);
        });
    }
}
