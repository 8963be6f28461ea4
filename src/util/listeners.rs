//! Scoped window event subscriptions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Environmental refresh triggers (focus, storage) register here so every
//! listener added at mount is removed again on cleanup. The JS closure
//! stays alive exactly as long as the subscription value does.

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::closure::Closure;

/// A window event listener that deregisters itself when dropped.
#[cfg(feature = "csr")]
pub struct WindowSubscription {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(feature = "csr")]
impl WindowSubscription {
    /// Attach `handler` to a window event.
    ///
    /// Returns `None` outside a browser window context, or when the
    /// listener cannot be registered.
    pub fn subscribe(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, closure })
    }
}

#[cfg(feature = "csr")]
impl Drop for WindowSubscription {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
