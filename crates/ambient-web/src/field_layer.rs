//! Backdrop canvas running the particle field.

use crate::canvas::CanvasPainter;
use crate::dom::{self, EventListener};
use crate::frame::FrameLoop;
use crate::style;
use ambient_core::{Debouncer, DisplayMode, FieldConfig, FieldTuning, ParticleField, Viewport};
use anyhow::anyhow;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

struct FieldState {
    window: web::Window,
    painter: CanvasPainter,
    field: ParticleField,
    mode: DisplayMode,
    tuning: FieldTuning,
    resize: Debouncer<Viewport>,
    rng: StdRng,
}

impl FieldState {
    fn frame(&mut self, now: Instant) {
        if let Some(viewport) = self.resize.poll(now) {
            self.reinit(viewport);
        }
        self.field.frame(&mut self.painter);
    }

    /// Resize the surface and regenerate the whole population.
    fn reinit(&mut self, viewport: Viewport) {
        let dpr = dom::device_pixel_ratio(&self.window);
        self.painter.sync_backing_size(viewport, dpr);
        let config = FieldConfig::for_viewport(viewport.width, self.mode, &self.tuning);
        log::debug!(
            "[field] reinit {}x{} dpr={:.2} device={:?} count={} dist={}",
            viewport.width,
            viewport.height,
            dpr,
            config.device,
            config.count,
            config.connection_distance
        );
        self.field.reseed(config, viewport, &mut self.rng);
    }
}

pub struct ParticleFieldLayer {
    state: Rc<RefCell<FieldState>>,
    frame: FrameLoop,
    _resize: EventListener,
}

impl ParticleFieldLayer {
    pub fn mount(mode: DisplayMode) -> anyhow::Result<Self> {
        Self::mount_with(mode, FieldTuning::default())
    }

    pub fn mount_with(mode: DisplayMode, tuning: FieldTuning) -> anyhow::Result<Self> {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("[field] {e}; using defaults");
                FieldTuning::default()
            }
        };
        let (window, document) = dom::window_document().ok_or_else(|| anyhow!("no window"))?;

        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow!("createElement(canvas) failed: {:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow!(format!("{:?}", e)))?;
        dom::apply_styles(&canvas, style::FIELD_CANVAS_STYLE);
        _ = canvas.set_attribute("aria-hidden", "true");
        let painter = CanvasPainter::new(canvas.clone())?;

        let viewport = dom::viewport(&window);
        painter.sync_backing_size(viewport, dom::device_pixel_ratio(&window));
        let mut rng = StdRng::from_entropy();
        let config = FieldConfig::for_viewport(viewport.width, mode, &tuning);
        let field = ParticleField::new(config, viewport, &mut rng);

        // canvas goes in last so a failure above leaves the page untouched
        dom::append_to_body(&document, &canvas)?;

        let state = Rc::new(RefCell::new(FieldState {
            window: window.clone(),
            painter,
            field,
            mode,
            resize: Debouncer::new(Duration::from_millis(tuning.resize_debounce_ms)),
            tuning,
            rng,
        }));

        let resize = {
            let state = state.clone();
            let window_resize = window.clone();
            EventListener::new(&window, "resize", move |_ev| {
                let viewport = dom::viewport(&window_resize);
                state.borrow_mut().resize.notify(viewport, Instant::now());
            })
        };
        let resize = match resize {
            Ok(l) => l,
            Err(e) => {
                canvas.remove();
                return Err(e);
            }
        };

        let frame = {
            let state = state.clone();
            FrameLoop::start(&window, move |_ts| {
                state.borrow_mut().frame(Instant::now());
                true
            })
        };

        {
            let s = state.borrow();
            let cfg = s.field.config();
            log::info!(
                "[field] mounted mode={} device={:?} particles={}",
                mode,
                cfg.device,
                cfg.count
            );
        }

        Ok(Self {
            state,
            frame,
            _resize: resize,
        })
    }

    /// A new mode invalidates the current population.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        let mut s = self.state.borrow_mut();
        if s.mode == mode {
            return;
        }
        s.mode = mode;
        s.resize.cancel();
        let viewport = dom::viewport(&s.window);
        s.reinit(viewport);
    }

    pub fn is_running(&self) -> bool {
        self.frame.is_running()
    }
}

impl Drop for ParticleFieldLayer {
    fn drop(&mut self) {
        self.frame.stop();
        self.state.borrow().painter.canvas().remove();
        log::info!("[field] unmounted");
    }
}
