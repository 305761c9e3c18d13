use leptos::{html, prelude::*};
use leptos_use::{
    use_element_bounding, use_intersection_observer_with_options, use_window_size,
    UseElementBoundingReturn, UseIntersectionObserverOptions, UseWindowSizeReturn,
};

use crate::tracking::{
    element_progress, keyframes::Keyframes, IntersectionSample, RevealFlag, RevealTrigger,
};

use super::page::use_tracking_config;

fn use_reveal_trigger() -> RevealTrigger {
    let config = use_tracking_config();
    RevealTrigger::new(config.reveal_margin_px, config.reveal_threshold)
}

/// Latches once the element is at least `reveal_threshold` visible. The
/// element is unobserved after it latches; the observer itself goes away with
/// the owning component.
pub fn use_visibility_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let trigger = use_reveal_trigger();
    let flag = RwSignal::new(RevealFlag::default());

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            for entry in entries {
                let mut next = flag.get_untracked();
                let sample = IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if trigger.observe(&mut next, sample) {
                    flag.set(next);
                    observer.unobserve(&entry.target());
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![trigger.threshold]),
    );

    Signal::derive(move || flag.get().is_revealed())
}

/// Latches once the element's top scrolls `reveal_margin_px` above the
/// bottom of the viewport.
pub fn use_scroll_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let trigger = use_reveal_trigger();
    let flag = RwSignal::new(RevealFlag::default());
    let UseElementBoundingReturn {
        top,
        height: el_height,
        ..
    } = use_element_bounding(target);
    let UseWindowSizeReturn { height, .. } = use_window_size();

    Effect::new(move |_| {
        let (top, viewport_height) = (top.get(), height.get());
        // not laid out yet
        if el_height.get() <= 0.0 {
            return;
        }
        let mut next = flag.get_untracked();
        if trigger.poll(&mut next, top, viewport_height) {
            flag.set(next);
        }
    });

    Signal::derive(move || flag.get().is_revealed())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealMode {
    #[default]
    Visibility,
    Scroll,
}

/// Wraps children in a `.reveal` block that gains `.active` once seen.
#[component]
pub fn Reveal(
    #[prop(into, optional)] class: String,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional)] mode: RevealMode,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = match mode {
        RevealMode::Visibility => use_visibility_reveal(node_ref),
        RevealMode::Scroll => use_scroll_reveal(node_ref),
    };

    view! {
        <div
            node_ref=node_ref
            class=format!("reveal {class}")
            class:active=move || revealed.get()
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}

/// Inline style that fades and slides an element with its own scroll
/// progress. Before the element is measured it renders fully visible.
pub fn use_scroll_fade(
    target: NodeRef<html::Section>,
    opacity: Keyframes<4>,
    offset: Keyframes<4>,
) -> Signal<String> {
    let UseElementBoundingReturn {
        top,
        height: el_height,
        ..
    } = use_element_bounding(target);
    let UseWindowSizeReturn { height, .. } = use_window_size();

    Signal::derive(move || {
        match element_progress(top.get(), el_height.get(), height.get()) {
            Some(p) => format!(
                "opacity: {:.3}; transform: translateY({:.1}px)",
                opacity.sample(p),
                offset.sample(p)
            ),
            None => "opacity: 1; transform: none".to_string(),
        }
    })
}
