use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::calendar::{Placement, PlacementPolicy, TriggerRect};

/// Decides where the popover anchored at `anchor` should open, based on the
/// anchor's current viewport rect. An unmounted anchor or an unknown
/// viewport opens below.
pub fn measure_placement(
    anchor: NodeRef<html::Div>,
    policy: PlacementPolicy,
    popover_height: f64,
) -> Placement {
    let rect = anchor.get_untracked().map(|el| {
        let bounds = el.get_bounding_client_rect();
        TriggerRect {
            top: bounds.top(),
            bottom: bounds.bottom(),
        }
    });
    let viewport_height = window()
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64());
    policy.place(rect, viewport_height, popover_height)
}

/// Subscribes to window events while `is_open` is true:
/// a mousedown outside `container` calls `on_outside`, resize and scroll
/// call `on_viewport_change`. Listeners are dropped on close and on unmount.
pub fn use_popover_listeners(
    container: NodeRef<html::Div>,
    is_open: Signal<bool>,
    on_outside: Callback<()>,
    on_viewport_change: Callback<()>,
) {
    let handles = StoredValue::new_local(Vec::<WindowListenerHandle>::new());
    let release = move || {
        handles.try_update_value(|active| {
            for handle in active.drain(..) {
                handle.remove();
            }
        });
    };

    Effect::new(move |_| {
        release();
        if !is_open.get() {
            return;
        }

        let outside = window_event_listener(ev::mousedown, move |event| {
            let inside = match (container.get_untracked(), event.target()) {
                (Some(el), Some(target)) => target
                    .dyn_ref::<web_sys::Node>()
                    .is_some_and(|node| el.contains(Some(node))),
                _ => false,
            };
            if !inside {
                on_outside.run(());
            }
        });
        let resize = window_event_listener(ev::resize, move |_| on_viewport_change.run(()));
        let scroll = window_event_listener(ev::scroll, move |_| on_viewport_change.run(()));

        handles.update_value(|active| active.extend([outside, resize, scroll]));
    });

    on_cleanup(release);
}
