use crate::input::OrbitRig;
use crate::render;
use crate::SharedStore;
use instant::Instant;
use raumplaner_core::SceneDescription;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub store: SharedStore,
    /// Set by the store subscriber, consumed by the next frame.
    pub scene_dirty: Rc<Cell<bool>>,
    pub rig: Rc<RefCell<OrbitRig>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub last_instant: Instant,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.frames += 1;
        if self.frames % 600 == 0 {
            log::debug!("[frame] #{} dt={:.1}ms", self.frames, dt.as_secs_f32() * 1000.0);
        }

        let Some(gpu) = &mut self.gpu else {
            return;
        };

        if self.scene_dirty.replace(false) {
            match self.store.try_borrow() {
                Ok(store) => gpu.set_scene(SceneDescription::from_config(store.config())),
                // mid-dispatch; pick it up next frame
                Err(_) => self.scene_dirty.set(true),
            }
        }

        let w = self.canvas.width();
        let h = self.canvas.height();
        gpu.resize_if_needed(w, h);

        let camera = {
            let mut rig = self.rig.borrow_mut();
            let (w, h) = gpu.size();
            let OrbitRig { camera, controls } = &mut *rig;
            camera.set_viewport(w, h);
            controls.update(camera);
            camera.clone()
        };

        match gpu.render(&camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[frame] surface lost/outdated; reconfiguring");
                gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => log::debug!("[frame] surface timeout"),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    let slot = tick.borrow();
    let Some(cb) = slot.as_ref() else {
        return;
    };
    if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
}
