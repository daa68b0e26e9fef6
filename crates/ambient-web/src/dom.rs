use ambient_core::{PointerPrecision, Viewport};
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Device pixel ratio, 1.0 when the platform reports something unusable.
#[inline]
pub fn device_pixel_ratio(window: &web::Window) -> f64 {
    let dpr = window.device_pixel_ratio();
    if dpr.is_finite() && dpr > 0.0 {
        dpr
    } else {
        1.0
    }
}

/// Logical viewport size; falls back to desktop defaults if unreadable.
pub fn viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(read(window.inner_width()), read(window.inner_height())).sanitized()
}

pub fn pointer_precision(window: &web::Window) -> PointerPrecision {
    match window.match_media("(pointer: coarse)") {
        Ok(Some(mql)) if mql.matches() => PointerPrecision::Coarse,
        Ok(Some(_)) => PointerPrecision::Fine,
        _ => PointerPrecision::Unknown,
    }
}

pub fn create_html_element(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow!("createElement({tag}) failed: {:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("<{tag}> is not an HtmlElement: {:?}", e))
}

pub fn apply_styles(el: &web::HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in props {
        _ = style.set_property(name, value);
    }
}

pub fn append_to_body(document: &web::Document, el: &web::Element) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow!("document has no body"))?;
    body.append_child(el)
        .map_err(|e| anyhow!("appendChild failed: {:?}", e))?;
    Ok(())
}

/// An event listener that is removed when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("addEventListener({event}) failed: {:?}", e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
