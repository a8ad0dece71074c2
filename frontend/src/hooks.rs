use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    AddEventListenerOptions, Element, IntersectionObserver, IntersectionObserverEntry,
    ScrollBehavior, ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::error::{self, DomError};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_intersection(
    node: &NodeRef,
    on_change: impl Fn(bool) + 'static,
) -> Result<Option<(IntersectionObserver, ObserverCallback)>, DomError> {
    let Some(element) = node.cast::<Element>() else {
        return Ok(None);
    };

    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        // Only one target is observed, the newest entry is its current state.
        let latest = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .last();
        if let Some(entry) = latest {
            on_change(entry.is_intersecting());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    observer.observe(&element);
    Ok(Some((observer, callback)))
}

/// Whether the element behind `node` overlaps the viewport right now.
///
/// Starts out `false` and follows every intersection change for as long as
/// the calling component is mounted.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(move |node: &NodeRef| {
            let observer = match observe_intersection(node, move |visible| in_view.set(visible)) {
                Ok(observer) => observer,
                Err(err) => {
                    log::warn!("intersection observer unavailable: {}", err);
                    None
                }
            };

            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        }, node);
    }

    *in_view
}

/// Smooth-scrolls the referenced element into view. Does nothing while the
/// reference is not attached.
pub fn scroll_into_view(node: &NodeRef) {
    if let Some(element) = node.cast::<Element>() {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Runs `handler` on the next `pointerdown` anywhere in the window, once.
pub fn on_next_pointer_down(handler: impl FnOnce() + 'static) -> Result<(), DomError> {
    let window = error::window()?;
    let options = AddEventListenerOptions::new();
    options.set_once(true);

    // Freed by wasm-bindgen after the single invocation.
    let callback = Closure::once_into_js(handler);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "pointerdown",
        callback.unchecked_ref(),
        &options,
    )?;
    Ok(())
}
