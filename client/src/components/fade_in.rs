//! Wrapper that fades and slides its children in the first time they scroll
//! into view.

use leptos::prelude::*;

use crate::util::fade::{Direction, InViewLatch, fade_style};

#[component]
pub fn FadeIn(
    children: Children,
    /// Transition delay in seconds.
    #[prop(default = 0.0)]
    delay: f64,
    #[prop(optional)] direction: Direction,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let latch = RwSignal::new(InViewLatch::default());
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    observe_once(node, latch);

    view! {
        <div
            node_ref=node
            class=class
            style=move || fade_style(latch.get().visible, direction, delay)
        >
            {children()}
        </div>
    }
}

/// Attach an `IntersectionObserver` that flips `latch` on first intersection
/// and then disconnects.
#[cfg(feature = "hydrate")]
fn observe_once(node: NodeRef<leptos::html::Div>, latch: RwSignal<InViewLatch>) {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    use crate::util::fade::ROOT_MARGIN;

    Effect::new(move || {
        let Some(el) = node.get() else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                let mut revealed = false;
                latch.update(|l| revealed = l.observe(intersecting));
                if revealed {
                    observer.disconnect();
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_root_margin(ROOT_MARGIN);
        match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&el);
                // Called back until disconnect, so the closure is leaked.
                callback.forget();
            }
            Err(_) => {
                log::warn!("IntersectionObserver unavailable; revealing immediately");
                latch.update(|l| {
                    l.observe(true);
                });
            }
        }
    });
}
