use crate::dom::{add_active_listener, add_listener};
use crate::gesture::{drag_mode, wheel_delta_px, DragMode, DragState};
use glam::Vec2;
use raumplaner_core::{Camera, OrbitControls};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Camera plus the controls steering it; shared by input handlers and the
/// frame loop.
pub struct OrbitRig {
    pub camera: Camera,
    pub controls: OrbitControls,
}

impl OrbitRig {
    pub fn new(aspect: f32) -> Self {
        let camera = Camera::apartment_default(aspect);
        let controls = OrbitControls::new(&camera);
        Self { camera, controls }
    }
}

#[inline]
fn pointer_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
fn viewport_height_css(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.get_bounding_client_rect().height() as f32
}

pub fn wire_orbit_handlers(canvas: &web::HtmlCanvasElement, rig: Rc<RefCell<OrbitRig>>) {
    let drag = Rc::new(RefCell::new(DragState::default()));
    let target: &web::EventTarget = canvas.as_ref();

    // pointerdown
    {
        let drag = drag.clone();
        let canvas = canvas.clone();
        add_listener(target, "pointerdown", move |ev| {
            let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let mode = drag_mode(pe.button(), pe.shift_key());
            if drag.borrow_mut().begin(mode, pe.pointer_id(), pointer_client(pe)) {
                _ = canvas.set_pointer_capture(pe.pointer_id());
                pe.prevent_default();
            }
        });
    }

    // pointermove
    {
        let drag = drag.clone();
        let rig = rig.clone();
        let canvas = canvas.clone();
        add_listener(target, "pointermove", move |ev| {
            let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let Some((mode, delta)) = drag.borrow_mut().advance(pe.pointer_id(), pointer_client(pe))
            else {
                return;
            };
            let h = viewport_height_css(&canvas);
            let mut rig = rig.borrow_mut();
            let OrbitRig { camera, controls } = &mut *rig;
            match mode {
                DragMode::Rotate => controls.rotate(delta.x, delta.y, h),
                DragMode::Pan => controls.pan(delta.x, delta.y, h, camera),
                DragMode::Idle => {}
            }
        });
    }

    // pointerup / pointercancel
    for name in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        let canvas = canvas.clone();
        add_listener(target, name, move |ev| {
            let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            if drag.borrow_mut().end(pe.pointer_id()) {
                _ = canvas.release_pointer_capture(pe.pointer_id());
            }
        });
    }

    // right-drag pans, so keep the context menu out of the way
    add_active_listener(target, "contextmenu", |ev| ev.prevent_default());

    // wheel (non-passive so the page doesn't scroll while zooming)
    {
        let canvas = canvas.clone();
        add_active_listener(target, "wheel", move |ev| {
            let Some(we) = ev.dyn_ref::<web::WheelEvent>() else {
                return;
            };
            we.prevent_default();
            let dy = wheel_delta_px(we.delta_y(), we.delta_mode(), viewport_height_css(&canvas));
            rig.borrow_mut().controls.zoom(dy);
        });
    }
}
