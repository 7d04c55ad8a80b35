#![cfg(target_arch = "wasm32")]
use instant::Instant;
use raumplaner_core::controls::ControlsModel;
use raumplaner_core::ConfigStore;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod gesture;
mod info;
mod input;
mod page;
mod panel;
mod render;

/// The session's one store, handed to every component that needs it.
pub(crate) type SharedStore = Rc<RefCell<ConfigStore>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("raumplaner-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let shell = page::mount(&document)?;
    let store: SharedStore = Rc::new(RefCell::new(ConfigStore::default()));

    // Control panel: every notification re-syncs the widgets
    let panel = Rc::new(panel::ControlPanel::mount(
        &document,
        &shell.control_panel,
        &store,
    )?);
    {
        let panel = panel.clone();
        store.borrow_mut().subscribe(move |config, _change| {
            panel.apply(&ControlsModel::from_config(config));
        });
    }

    // Metrics: only dimensions, room and material move the numbers
    let metrics = info::MetricsPanel::mount(&document, &shell.metrics_panel, store.borrow().config())?;
    store.borrow_mut().subscribe(move |config, change| {
        if change.affects_metrics() {
            metrics.update(config);
        }
    });

    // Scene: mark dirty, the next animation frame rebuilds the description
    let scene_dirty = Rc::new(Cell::new(true));
    {
        let scene_dirty = scene_dirty.clone();
        store.borrow_mut().subscribe(move |_config, change| {
            log::debug!("[scene] {:?}", change);
            scene_dirty.set(true);
        });
    }

    let aspect = shell.canvas.width().max(1) as f32 / shell.canvas.height().max(1) as f32;
    let rig = Rc::new(RefCell::new(input::OrbitRig::new(aspect)));
    input::wire_orbit_handlers(&shell.canvas, rig.clone());

    let gpu = frame::init_gpu(&shell.canvas).await;
    if gpu.is_none() {
        log::warn!("WebGPU unavailable; controls and metrics stay live without a 3D view");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        store,
        scene_dirty,
        rig,
        canvas: shell.canvas.clone(),
        gpu,
        last_instant: Instant::now(),
        frames: 0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
