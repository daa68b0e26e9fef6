#![cfg(target_arch = "wasm32")]
use ambient_core::DisplayMode;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod canvas;
mod cursor_layer;
mod dom;
mod field_layer;
mod frame;
mod hover;
mod style;

pub use cursor_layer::CursorLayer;
pub use field_layer::ParticleFieldLayer;

// Layer mounted from `data-ambient-mode` on <body>, if any
thread_local! {
    static AUTO_LAYER: RefCell<Option<AmbientLayer>> = const { RefCell::new(None) };
}

/// The ambient layer as seen by the host page: a particle backdrop and a
/// custom cursor, both driven by one display mode.
///
/// Construction never throws. A part that cannot start (no 2D context,
/// touch-only device, ...) is logged and left out.
#[wasm_bindgen]
pub struct AmbientLayer {
    mode: DisplayMode,
    field: Option<ParticleFieldLayer>,
    cursor: Option<CursorLayer>,
}

#[wasm_bindgen]
impl AmbientLayer {
    #[wasm_bindgen(constructor)]
    pub fn new(mode: &str) -> AmbientLayer {
        let mode = DisplayMode::parse_or_default(mode);
        let field = match ParticleFieldLayer::mount(mode) {
            Ok(f) => Some(f),
            Err(e) => {
                log::warn!("[field] disabled: {:?}", e);
                None
            }
        };
        let cursor = match CursorLayer::mount(mode) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("[cursor] disabled: {:?}", e);
                None
            }
        };
        AmbientLayer {
            mode,
            field,
            cursor,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.mode.to_string()
    }

    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, mode: &str) {
        let mode = DisplayMode::parse_or_default(mode);
        if mode == self.mode {
            return;
        }
        log::info!("[ambient] mode {} -> {}", self.mode, mode);
        self.mode = mode;
        if let Some(f) = &mut self.field {
            f.set_mode(mode);
        }
        if let Some(c) = &mut self.cursor {
            c.set_mode(mode);
        }
    }

    #[wasm_bindgen(getter, js_name = hasField)]
    pub fn has_field(&self) -> bool {
        self.field.as_ref().map(|f| f.is_running()).unwrap_or(false)
    }

    #[wasm_bindgen(getter, js_name = hasCursor)]
    pub fn has_cursor(&self) -> bool {
        self.cursor.as_ref().map(|c| c.is_running()).unwrap_or(false)
    }

    /// Stop both loops, remove listeners and owned elements. Idempotent.
    pub fn unmount(&mut self) {
        self.field.take();
        self.cursor.take();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web starting");

    let mode = dom::window_document()
        .and_then(|(_, d)| d.body())
        .and_then(|b| b.get_attribute("data-ambient-mode"));
    if let Some(mode) = mode {
        AUTO_LAYER.with(|slot| *slot.borrow_mut() = Some(AmbientLayer::new(&mode)));
    }
    Ok(())
}

/// Tear down the layer mounted from `data-ambient-mode`.
#[wasm_bindgen(js_name = unmountAuto)]
pub fn unmount_auto() {
    // take first so Drop runs outside the borrow
    let layer = AUTO_LAYER.with(|slot| slot.borrow_mut().take());
    drop(layer);
}

/// Change the mode of the layer mounted from `data-ambient-mode`.
#[wasm_bindgen(js_name = setAutoMode)]
pub fn set_auto_mode(mode: &str) {
    AUTO_LAYER.with(|slot| {
        if let Some(layer) = slot.borrow_mut().as_mut() {
            layer.set_mode(mode);
        }
    });
}
