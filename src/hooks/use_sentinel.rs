use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Calls `on_visible` when the element behind `node_ref` is fully on screen.
/// The observer is rebuilt whenever `deps` change, which re-fires it if the
/// element is still visible after a page landed.
#[hook]
pub fn use_sentinel<D>(node_ref: NodeRef, deps: D, on_visible: Callback<()>)
where
    D: PartialEq + 'static,
{
    use_effect_with(deps, move |_| {
        let mut active = None;

        if let Some(element) = node_ref.cast::<Element>() {
            let closure = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let visible = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if visible {
                    on_visible.emit(());
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(1.0));

            match IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options) {
                Ok(observer) => {
                    observer.observe(&element);
                    active = Some((observer, closure));
                }
                Err(e) => log::error!("❌ IntersectionObserver unavailable: {:?}", e),
            }
        }

        move || {
            if let Some((observer, _closure)) = active {
                observer.disconnect();
            }
        }
    });
}
