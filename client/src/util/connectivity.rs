//! Browser online/offline tracking.
//!
//! SYSTEM CONTEXT
//! ==============
//! `navigator.onLine` seeds an app-wide `Online` signal; `online`/`offline`
//! window events keep it current. Listeners are installed once at the app
//! root and live as long as the page.

use leptos::prelude::*;

/// App-wide connectivity signal, provided as context.
#[derive(Clone, Copy, Debug)]
pub struct Online(pub RwSignal<bool>);

/// Current `navigator.onLine`. Assumed online outside the browser.
pub fn navigator_online() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_none_or(|w| w.navigator().on_line())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

/// Mirror browser connectivity events into `online`.
pub fn install_listeners(online: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        online.set(navigator_online());
        for (name, value) in [("online", true), ("offline", false)] {
            let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
                leptos::logging::log!("connectivity: {name}");
                online.set(value);
            }) as Box<dyn FnMut(web_sys::Event)>);
            if let Err(e) = window.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref()) {
                leptos::logging::warn!("{name} listener not installed: {e:?}");
            }
            cb.forget();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = online;
    }
}
