//! Crosshair plus spring-trailing halo drawn over the page.

use crate::dom::{self, EventListener};
use crate::frame::FrameLoop;
use crate::hover::DomHoverProbe;
use crate::style;
use ambient_core::{
    CursorEvent, CursorFrame, CursorHost, CursorMount, CursorTuning, DisplayMode,
    PointerPrecision, PointerTracker,
};
use anyhow::anyhow;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct CursorState {
    tracker: PointerTracker,
    probe: DomHoverProbe,
    last_instant: Option<Instant>,
    last_frame: Option<CursorFrame>,
}

impl CursorState {
    /// Returns `false` once everything has settled and the loop may idle.
    fn frame(&mut self, now: Instant, elements: &CursorElements) -> bool {
        let dt_sec = self
            .last_instant
            .map(|t| (now - t).as_secs_f32())
            .unwrap_or(0.0);
        self.last_instant = Some(now);
        let frame = self.tracker.tick(dt_sec);
        // skip style writes while nothing moves
        if self.last_frame.as_ref() != Some(&frame) {
            elements.render(&frame);
            self.last_frame = Some(frame);
        }
        if self.tracker.is_settled() {
            // no stale dt when woken later
            self.last_instant = None;
            return false;
        }
        true
    }
}

struct CursorElements {
    crosshair: web::HtmlElement,
    halo: web::HtmlElement,
}

impl CursorElements {
    fn create(document: &web::Document) -> anyhow::Result<Self> {
        let crosshair = dom::create_html_element(document, "div")?;
        dom::apply_styles(&crosshair, style::CROSSHAIR_STYLE);
        for bar_style in [style::CROSSHAIR_VERTICAL_BAR, style::CROSSHAIR_HORIZONTAL_BAR] {
            let bar = dom::create_html_element(document, "div")?;
            dom::apply_styles(&bar, bar_style);
            crosshair
                .append_child(&bar)
                .map_err(|e| anyhow!("appendChild failed: {:?}", e))?;
        }

        let halo = dom::create_html_element(document, "div")?;
        dom::apply_styles(&halo, style::HALO_STYLE);

        for el in [&crosshair, &halo] {
            _ = el.set_attribute("aria-hidden", "true");
        }
        Ok(Self { crosshair, halo })
    }

    fn attach(&self, document: &web::Document) -> anyhow::Result<()> {
        dom::append_to_body(document, &self.halo)?;
        dom::append_to_body(document, &self.crosshair)
    }

    fn render(&self, frame: &CursorFrame) {
        _ = self
            .crosshair
            .style()
            .set_property("transform", &style::centered_transform(frame.crosshair));
        let halo_style = self.halo.style();
        for (name, value) in style::halo_properties(frame.halo_center, &frame.halo) {
            _ = halo_style.set_property(name, &value);
        }
    }

    fn remove(&self) {
        self.crosshair.remove();
        self.halo.remove();
    }
}

fn client_point(ev: &web::Event) -> Option<(f32, f32)> {
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| (m.client_x() as f32, m.client_y() as f32))
}

struct Overlay {
    elements: Rc<CursorElements>,
    frame: FrameLoop,
}

/// The DOM side of the cursor: elements, listeners and the frame loop.
struct DomCursorHost {
    window: web::Window,
    document: web::Document,
    state: Rc<RefCell<CursorState>>,
    overlay: Option<Overlay>,
}

impl DomCursorHost {
    fn set_mode(&self, mode: DisplayMode) {
        self.state.borrow_mut().tracker.set_mode(mode);
        if let Some(o) = &self.overlay {
            o.frame.wake();
        }
    }

    fn is_live(&self) -> bool {
        self.overlay
            .as_ref()
            .map(|o| !o.frame.is_stopped())
            .unwrap_or(false)
    }
}

impl CursorHost for DomCursorHost {
    type Listener = EventListener;
    type Error = anyhow::Error;

    fn pointer_precision(&self) -> PointerPrecision {
        dom::pointer_precision(&self.window)
    }

    fn create_overlay(&mut self) -> anyhow::Result<()> {
        let elements = Rc::new(CursorElements::create(&self.document)?);
        let frame = {
            let state = self.state.clone();
            let elements = elements.clone();
            FrameLoop::new(&self.window, move |_ts| {
                state.borrow_mut().frame(Instant::now(), &elements)
            })
        };
        self.overlay = Some(Overlay { elements, frame });
        Ok(())
    }

    fn listen(&mut self, event: CursorEvent) -> anyhow::Result<EventListener> {
        let waker = self
            .overlay
            .as_ref()
            .ok_or_else(|| anyhow!("cursor overlay not created"))?
            .frame
            .waker();
        let state = self.state.clone();
        EventListener::new(&self.window, event.dom_name(), move |ev| {
            {
                let mut s = state.borrow_mut();
                let s = &mut *s;
                if let Some((x, y)) = client_point(&ev) {
                    s.tracker.pointer_moved(x, y);
                }
                if event == CursorEvent::Over {
                    s.tracker.pointer_entered(&s.probe);
                }
            }
            waker.wake();
        })
    }

    fn show_overlay(&mut self) -> anyhow::Result<()> {
        let overlay = self
            .overlay
            .as_ref()
            .ok_or_else(|| anyhow!("cursor overlay not created"))?;
        overlay.elements.attach(&self.document)?;
        overlay.frame.wake();
        Ok(())
    }

    fn remove_overlay(&mut self) {
        if let Some(mut overlay) = self.overlay.take() {
            overlay.frame.stop();
            overlay.elements.remove();
        }
    }
}

pub struct CursorLayer {
    mount: CursorMount<DomCursorHost>,
}

impl CursorLayer {
    /// Mount the cursor, or `Ok(None)` when the device has no fine pointer.
    pub fn mount(mode: DisplayMode) -> anyhow::Result<Option<Self>> {
        Self::mount_with(mode, CursorTuning::default())
    }

    pub fn mount_with(mode: DisplayMode, tuning: CursorTuning) -> anyhow::Result<Option<Self>> {
        let (window, document) = dom::window_document().ok_or_else(|| anyhow!("no window"))?;

        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("[cursor] {e}; using defaults");
                CursorTuning::default()
            }
        };

        let host = DomCursorHost {
            state: Rc::new(RefCell::new(CursorState {
                tracker: PointerTracker::new(mode, tuning),
                probe: DomHoverProbe::new(window.clone(), document.clone()),
                last_instant: None,
                last_frame: None,
            })),
            window,
            document,
            overlay: None,
        };
        let Some(mount) = CursorMount::mount(host)? else {
            return Ok(None);
        };

        log::info!(
            "[cursor] mounted mode={} listeners={}",
            mode,
            mount.listener_count()
        );
        Ok(Some(Self { mount }))
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mount.host().set_mode(mode);
    }

    /// Mounted and not torn down; the frame loop itself idles while the
    /// cursor is at rest.
    pub fn is_running(&self) -> bool {
        self.mount.host().is_live()
    }
}

impl Drop for CursorLayer {
    fn drop(&mut self) {
        log::info!("[cursor] unmounting");
    }
}
