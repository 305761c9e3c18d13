//! Browser side of scroll tracking: reads geometry into snapshots and feeds
//! the pure tracker, then exposes the results as signals through context.

use leptos::prelude::*;
use leptos_use::{
    use_raf_fn, use_window_scroll, use_window_size, UseRafFnCallbackArgs, UseWindowSizeReturn,
};
use wasm_bindgen::JsCast;

use crate::{
    config::TrackingConfig,
    section::Section,
    tracking::{self, ScrollState, ScrollSurface, ScrollTracker, SectionLayout, Spring, ViewportSnapshot},
};

/// Read-only scroll state for the presentation components.
#[derive(Debug, Clone, Copy)]
pub struct PageTracking {
    pub active: Signal<Section>,
    pub progress: Signal<f64>,
    pub smoothed_progress: Signal<f64>,
    pub header_solid: Signal<bool>,
    pub show_indicator: Signal<bool>,
}

pub fn use_tracking_config() -> TrackingConfig {
    use_context::<TrackingConfig>().unwrap_or_default()
}

pub fn use_page_tracking() -> PageTracking {
    expect_context::<PageTracking>()
}

/// Installs the page controller. Must run once, above every section.
pub fn provide_page_tracking() -> PageTracking {
    let config = use_tracking_config();
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();

    let state = RwSignal::new(ScrollState::default());
    let mut tracker = ScrollTracker::new(&config);
    // effects only run in the browser, so reading the DOM here is safe
    Effect::new(move |_| {
        let snapshot = read_snapshot(scroll_y.get(), height.get());
        let next = tracker.observe(&snapshot, &read_layout());
        if state.get_untracked() != next {
            state.set(next);
        }
    });

    let active = Memo::new(move |_| state.with(|s| s.active));
    let progress = Memo::new(move |_| state.with(|s| s.progress));
    let header_solid = Memo::new(move |_| state.with(|s| s.header_solid));
    let show_indicator = Memo::new(move |_| state.with(|s| s.show_indicator));

    let smoothed = RwSignal::new(0.0);
    let spring = StoredValue::new(Spring::new(config.spring, 0.0));
    use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let target = progress.get_untracked();
        spring.update_value(|s| {
            s.set_target(target);
            s.step(args.delta / 1000.0);
        });
        let next = spring.with_value(|s| s.position()).clamp(0.0, 1.0);
        if smoothed.get_untracked() != next {
            smoothed.set(next);
        }
    });

    let tracking = PageTracking {
        active: active.into(),
        progress: progress.into(),
        smoothed_progress: smoothed.into(),
        header_solid: header_solid.into(),
        show_indicator: show_indicator.into(),
    };
    provide_context(tracking);
    tracking
}

fn read_snapshot(scroll_y: f64, viewport_height: f64) -> ViewportSnapshot {
    let document_height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default();
    ViewportSnapshot::new(scroll_y, viewport_height, document_height)
}

fn read_layout() -> SectionLayout {
    let doc = document();
    SectionLayout::from_fn(|section| {
        doc.get_element_by_id(section.id())?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
            .map(|el| el.offset_top() as f64)
    })
}

struct DocumentSurface;

impl ScrollSurface for DocumentSurface {
    type Target = web_sys::Element;

    fn find(&self, id: &str) -> Option<web_sys::Element> {
        document().get_element_by_id(id)
    }

    fn scroll_into_view(&self, target: &web_sys::Element) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Smooth-scrolls to `section`; does nothing if it isn't rendered.
pub fn scroll_to_section(section: Section) -> bool {
    tracking::navigate(&DocumentSurface, section)
}

pub fn scroll_to_top() {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
