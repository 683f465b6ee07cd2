//! Scoped DOM event listeners.
//!
//! Each registration keeps its closure alive and removes itself from the
//! target when dropped, so tearing down the app deregisters everything.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        if self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to remove {} listener", self.kind);
        }
    }
}

#[derive(Default)]
pub struct Listeners {
    registered: Vec<Listener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind` events on `target`.
    pub fn on(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        self.registered.push(Listener {
            target: target.clone(),
            kind,
            callback,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// Deregister everything now.
    pub fn clear(&mut self) {
        log::debug!("removing {} listeners", self.registered.len());
        self.registered.clear();
    }
}
