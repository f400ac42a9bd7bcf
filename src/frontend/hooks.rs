use web_sys::Element;
use yew::prelude::*;

use super::dom::{listen_window, observe_intersection, viewport_size};
use super::SiteContext;
use crate::lifecycle::MountScope;
use crate::motion::ViewportClass;

#[hook]
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().unwrap_or_default()
}

/// Narrow/wide class of the window, re-derived on every resize.
#[hook]
pub fn use_viewport_class(narrow_breakpoint_px: f64) -> ViewportClass {
    let class = use_state_eq(|| ViewportClass::from_width(viewport_size().0, narrow_breakpoint_px));

    {
        let class = class.clone();
        use_effect_with(narrow_breakpoint_px, move |breakpoint| {
            let breakpoint = *breakpoint;
            let scope = MountScope::new();

            class.set(ViewportClass::from_width(viewport_size().0, breakpoint));
            listen_window(&scope, "resize", move || {
                class.set(ViewportClass::from_width(viewport_size().0, breakpoint));
            });

            move || scope.teardown()
        });
    }

    *class
}

/// Flips to `true` the first time `node` intersects the viewport and stays
/// there.
#[hook]
pub fn use_in_view_once(node: NodeRef) -> bool {
    let seen = use_state_eq(|| false);

    {
        let seen = seen.clone();
        use_effect_with(node, move |node| {
            let scope = MountScope::new();

            if let Some(element) = node.cast::<Element>() {
                observe_intersection(&scope, &element, move |entry| {
                    if entry.is_intersecting() {
                        seen.set(true);
                    }
                });
            }

            move || scope.teardown()
        });
    }

    *seen
}
