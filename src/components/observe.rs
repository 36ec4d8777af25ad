use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Watches `element` until it first crosses `threshold` visibility, fires
/// `on_visible` once, then disconnects. The returned closure tears the
/// observer down early (component unmount).
///
/// Without `IntersectionObserver` support `on_visible` fires immediately
/// so content is never stuck hidden.
pub fn observe_once(
    element: &Element,
    threshold: f64,
    on_visible: impl FnMut() + 'static,
) -> Box<dyn FnOnce()> {
    let handler = Rc::new(RefCell::new(on_visible));

    let callback = {
        let handler = handler.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if intersecting {
                    observer.disconnect();
                    (*handler.borrow_mut())();
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Box::new(move || {
                observer.disconnect();
                drop(callback);
            })
        }
        Err(_) => {
            (*handler.borrow_mut())();
            Box::new(|| ())
        }
    }
}
