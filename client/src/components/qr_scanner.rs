//! Camera QR scanner backed by the `html5-qrcode` browser library.
//!
//! SYSTEM CONTEXT
//! ==============
//! The library is loaded as a global script by the app shell. This component
//! mounts an `Html5QrcodeScanner` into a fixed element id, forwards each
//! decoded payload to `on_scan`, and clears the scanner when the component
//! is disposed. If the global is missing the component shows an error and the
//! page's manual entry stays usable.

use leptos::prelude::*;

/// Element id the scanner renders into.
pub const SCANNER_ELEMENT_ID: &str = "qr-reader";

#[cfg(feature = "hydrate")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type Html5QrcodeScanner;

        #[wasm_bindgen(constructor, catch)]
        pub fn new(element_id: &str, config: &JsValue, verbose: bool) -> Result<Html5QrcodeScanner, JsValue>;

        #[wasm_bindgen(method, catch)]
        pub fn render(
            this: &Html5QrcodeScanner,
            on_success: &js_sys::Function,
            on_error: &js_sys::Function,
        ) -> Result<(), JsValue>;

        #[wasm_bindgen(method, catch)]
        pub fn clear(this: &Html5QrcodeScanner) -> Result<js_sys::Promise, JsValue>;
    }
}

/// Live scanner plus the callbacks it holds; clearing happens on drop.
#[cfg(feature = "hydrate")]
struct ScannerHandle {
    scanner: bindings::Html5QrcodeScanner,
    _on_success: wasm_bindgen::closure::Closure<dyn FnMut(String)>,
    _on_error: wasm_bindgen::closure::Closure<dyn FnMut(String)>,
}

#[cfg(feature = "hydrate")]
impl Drop for ScannerHandle {
    fn drop(&mut self) {
        if let Err(e) = self.scanner.clear() {
            leptos::logging::warn!("qr scanner clear failed: {e:?}");
        }
    }
}

#[cfg(feature = "hydrate")]
fn scanner_config() -> Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue> {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"fps".into(), &10.into())?;
    js_sys::Reflect::set(&config, &"qrbox".into(), &250.into())?;
    Ok(config.into())
}

#[cfg(feature = "hydrate")]
fn mount_scanner(on_scan: Callback<String>) -> Result<ScannerHandle, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let config = scanner_config().map_err(|e| format!("{e:?}"))?;
    let scanner = bindings::Html5QrcodeScanner::new(SCANNER_ELEMENT_ID, &config, false)
        .map_err(|_| "QR scanner library is not loaded. Enter codes manually.".to_owned())?;
    let on_success = Closure::wrap(Box::new(move |decoded: String| on_scan.run(decoded)) as Box<dyn FnMut(String)>);
    // Per-frame "no code found" callbacks are expected noise.
    let on_error = Closure::wrap(Box::new(|_: String| {}) as Box<dyn FnMut(String)>);
    scanner
        .render(on_success.as_ref().unchecked_ref(), on_error.as_ref().unchecked_ref())
        .map_err(|e| format!("Could not start the camera scanner: {e:?}"))?;
    Ok(ScannerHandle { scanner, _on_success: on_success, _on_error: on_error })
}

#[component]
pub fn QrScanner(#[prop(into)] on_scan: Callback<String>) -> impl IntoView {
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let handle = StoredValue::new_local(None::<ScannerHandle>);
        Effect::new(move || {
            if handle.with_value(Option::is_some) {
                return;
            }
            match mount_scanner(on_scan) {
                Ok(scanner) => handle.set_value(Some(scanner)),
                Err(message) => {
                    leptos::logging::warn!("{message}");
                    error.set(Some(message));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_scan;
    }

    view! {
        <div class="qr-scanner">
            <div id=SCANNER_ELEMENT_ID class="qr-scanner__viewport"></div>
            {move || error.get().map(|message| view! { <p class="qr-scanner__error">{message}</p> })}
        </div>
    }
}
