//! Reveal-on-scroll: add `visible` to marked elements once they enter the
//! viewport.

/// Elements animated on first intersection.
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const VISIBLE_CLASS: &str = "visible";
pub const REVEAL_THRESHOLD: f64 = 0.08;

/// Attach an `IntersectionObserver` to every element matching
/// [`REVEAL_SELECTOR`]. Call once after hydration.
pub fn observe_reveal() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_1(VISIBLE_CLASS);
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => observer,
                Err(e) => {
                    leptos::logging::warn!("reveal observer unavailable: {e:?}");
                    return;
                }
            };
        // The observer lives for the page lifetime.
        callback.forget();

        let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
            return;
        };
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                observer.observe(&el);
            }
        }
    }
}
