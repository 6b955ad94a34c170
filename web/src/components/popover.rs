use leptos::html;
use leptos::prelude::*;

use crate::calendar::positioning::CALENDAR_POPOVER_HEIGHT;
use crate::calendar::{Placement, PlacementPolicy};
use crate::utils::popover::{measure_placement, use_popover_listeners};

/// Anchors a panel under (or above) its trigger. Visibility is owned by the
/// caller; the popover only reports dismissal.
#[component]
pub fn Popover(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(optional)] policy: PlacementPolicy,
    #[prop(default = CALENDAR_POPOVER_HEIGHT)] height: f64,
    #[prop(into)] on_dismiss: Callback<()>,
    trigger: Children,
    children: ChildrenFn,
) -> impl IntoView {
    let anchor = NodeRef::<html::Div>::new();
    let placement = RwSignal::new(Placement::Below);

    let remeasure = move || placement.set(measure_placement(anchor, policy, height));

    // fresh decision every time it opens
    Effect::new(move |_| {
        if is_open.get() {
            remeasure();
        }
    });

    use_popover_listeners(
        anchor,
        is_open,
        on_dismiss,
        Callback::new(move |_| remeasure()),
    );

    view! {
        <div class="popover-anchor" node_ref=anchor>
            {trigger()}
            {move || {
                is_open.get().then(|| {
                    let class = if placement.get().is_above() {
                        "popover-panel popover-above"
                    } else {
                        "popover-panel popover-below"
                    };
                    view! { <div class=class>{children()}</div> }
                })
            }}
        </div>
    }
}
