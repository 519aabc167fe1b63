use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::motion::latch::RevealState;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// One-shot visibility latch for `node`. Turns `Revealed` the first time the
/// element intersects the viewport grown by `root_margin`, then stops
/// observing. An element that is already on screen at mount is reported on
/// the observer's initial callback.
#[hook]
pub fn use_on_screen(node: NodeRef, root_margin: &'static str) -> RevealState {
    let state = use_state_eq(RevealState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |node| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe_once(&element, root_margin, state));
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *state
}

fn observe_once(
    element: &Element,
    root_margin: &str,
    state: UseStateHandle<RevealState>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let mut latch = RevealState::default();
    let revealed = state.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let intersecting = entries.iter().any(|entry| {
            entry
                .dyn_into::<IntersectionObserverEntry>()
                .map_or(false, |entry| entry.is_intersecting())
        });
        if latch.observe(intersecting) {
            debug!("element revealed");
            observer.disconnect();
            revealed.set(RevealState::Revealed);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable, showing content: {:?}", err);
            state.set(RevealState::Revealed);
            None
        }
    }
}
