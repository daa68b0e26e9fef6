//! Mount and teardown order for the cursor overlay.
//!
//! The host supplies the platform pieces through [`CursorHost`]; this module
//! decides when each one is touched. A device without a fine pointer gets
//! nothing: no overlay, no listeners. Everything acquired is released when
//! the [`CursorMount`] drops, including on a failed mount.

use crate::pointer::PointerPrecision;

/// Pointer events the cursor subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorEvent {
    /// Raw position update.
    Move,
    /// Pointer crossed into a new element; re-probe hover.
    Over,
}

impl CursorEvent {
    pub const ALL: [CursorEvent; 2] = [CursorEvent::Move, CursorEvent::Over];

    pub fn dom_name(self) -> &'static str {
        match self {
            CursorEvent::Move => "mousemove",
            CursorEvent::Over => "mouseover",
        }
    }
}

/// Platform side of the cursor overlay.
pub trait CursorHost {
    /// Registration guard; dropping it removes the listener.
    type Listener;
    type Error;

    fn pointer_precision(&self) -> PointerPrecision;
    /// Build the crosshair and halo without inserting them.
    fn create_overlay(&mut self) -> Result<(), Self::Error>;
    fn listen(&mut self, event: CursorEvent) -> Result<Self::Listener, Self::Error>;
    /// Insert the overlay and start animating it.
    fn show_overlay(&mut self) -> Result<(), Self::Error>;
    /// Stop animating and take the overlay out. Must tolerate a partial mount.
    fn remove_overlay(&mut self);
}

/// A mounted cursor overlay together with its listeners.
pub struct CursorMount<H: CursorHost> {
    host: H,
    listeners: Vec<H::Listener>,
}

impl<H: CursorHost> CursorMount<H> {
    /// `Ok(None)` when the device has no fine pointer; the host is dropped
    /// untouched apart from the precision query.
    pub fn mount(host: H) -> Result<Option<Self>, H::Error> {
        let precision = host.pointer_precision();
        if !precision.supports_custom_cursor() {
            log::info!("[cursor] pointer precision {:?}; custom cursor disabled", precision);
            return Ok(None);
        }

        // an early return below drops `mount`, which undoes the partial work
        let mut mount = CursorMount {
            host,
            listeners: Vec::with_capacity(CursorEvent::ALL.len()),
        };
        mount.host.create_overlay()?;
        for event in CursorEvent::ALL {
            let listener = mount.host.listen(event)?;
            mount.listeners.push(listener);
        }
        mount.host.show_overlay()?;
        Ok(Some(mount))
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<H: CursorHost> Drop for CursorMount<H> {
    fn drop(&mut self) {
        self.host.remove_overlay();
        self.listeners.clear();
    }
}
