//! DOM-free scroll tracking. The app layer reads browser geometry into a
//! [`ViewportSnapshot`] and a [`SectionLayout`]; everything here is plain
//! computation over those values.

pub mod active;
pub mod keyframes;
pub mod navigation;
pub mod pointer;
pub mod progress;
pub mod reveal;
pub mod spring;
pub mod viewport;

pub use active::ActiveSectionResolver;
pub use navigation::{navigate, ScrollSurface};
pub use pointer::{CardTilt, PointerOffset};
pub use progress::{element_progress, progress_ratio};
pub use reveal::{IntersectionSample, RevealFlag, RevealTrigger};
pub use spring::{Spring, SpringConfig};
pub use viewport::{SectionLayout, ViewportSnapshot};

use crate::{config::TrackingConfig, section::Section};

/// Page-level scroll state, recomputed from each snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub active: Section,
    pub progress: f64,
    pub header_solid: bool,
    pub show_indicator: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            active: Section::first(),
            progress: 0.0,
            header_solid: false,
            show_indicator: false,
        }
    }
}

/// Owns the derived scroll values for the page. Only [`ScrollTracker::observe`]
/// writes them.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    resolver: ActiveSectionResolver,
    header_solid_after_px: f64,
    indicator_after_viewports: f64,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(config: &TrackingConfig) -> Self {
        Self {
            resolver: ActiveSectionResolver::new(config.lookahead_px, config.top_override_px),
            header_solid_after_px: config.header_solid_after_px,
            indicator_after_viewports: config.indicator_after_viewports,
            state: ScrollState::default(),
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn active(&self) -> Section {
        self.state.active
    }

    pub fn observe(&mut self, snapshot: &ViewportSnapshot, layout: &SectionLayout) -> ScrollState {
        let active = self.resolver.resolve(layout, snapshot, self.state.active);
        if active != self.state.active {
            log::debug!("active section {} -> {}", self.state.active, active);
        }
        self.state = ScrollState {
            active,
            progress: progress_ratio(snapshot),
            header_solid: snapshot.scroll_y > self.header_solid_after_px,
            show_indicator: snapshot.scroll_y
                > snapshot.viewport_height * self.indicator_after_viewports,
        };
        self.state
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn layout() -> SectionLayout {
        [
            (Section::Home, 0.0),
            (Section::About, 800.0),
            (Section::Skills, 1600.0),
            (Section::Projects, 2400.0),
            (Section::Contact, 3200.0),
        ]
        .into_iter()
        .collect()
    }

    fn snapshot(scroll_y: f64) -> ViewportSnapshot {
        ViewportSnapshot::new(scroll_y, 800.0, 4000.0)
    }

    #[test]
    fn test_page_scenario() {
        let mut tracker = ScrollTracker::new(&TrackingConfig::default());
        assert_eq!(tracker.active(), Section::Home);

        let state = tracker.observe(&snapshot(750.0), &layout());
        assert_eq!(state.active, Section::About);
        assert!(state.header_solid);
        assert!(state.show_indicator);
        assert!((state.progress - 750.0 / 3200.0).abs() < 1e-12);

        let state = tracker.observe(&snapshot(50.0), &layout());
        assert_eq!(state.active, Section::Home);
        assert!(!state.header_solid);
        assert!(!state.show_indicator);
    }

    #[test]
    fn test_indicator_threshold_follows_viewport() {
        let mut tracker = ScrollTracker::new(&TrackingConfig::default());
        // 0.3 * 800 = 240
        assert!(!tracker.observe(&snapshot(240.0), &layout()).show_indicator);
        assert!(tracker.observe(&snapshot(241.0), &layout()).show_indicator);
    }

    #[test]
    fn test_progress_endpoints() {
        let mut tracker = ScrollTracker::new(&TrackingConfig::default());
        assert_eq!(tracker.observe(&snapshot(0.0), &layout()).progress, 0.0);
        assert_eq!(tracker.observe(&snapshot(3200.0), &layout()).progress, 1.0);
    }

    #[test]
    fn test_missing_navigation_target_keeps_active_section() {
        struct OnlyHome {
            scrolls: Cell<usize>,
        }

        impl ScrollSurface for OnlyHome {
            type Target = ();

            fn find(&self, id: &str) -> Option<()> {
                (id == "home").then_some(())
            }

            fn scroll_into_view(&self, _target: &()) {
                self.scrolls.set(self.scrolls.get() + 1);
            }
        }

        let mut tracker = ScrollTracker::new(&TrackingConfig::default());
        tracker.observe(&snapshot(1700.0), &layout());
        assert_eq!(tracker.active(), Section::Skills);

        let surface = OnlyHome {
            scrolls: Cell::new(0),
        };
        assert!(!navigate(&surface, Section::Projects));
        assert_eq!(surface.scrolls.get(), 0);
        assert_eq!(tracker.active(), Section::Skills);
    }

    #[test]
    fn test_custom_lookahead() {
        let config = TrackingConfig {
            lookahead_px: 0.0,
            ..TrackingConfig::default()
        };
        let mut tracker = ScrollTracker::new(&config);
        assert_eq!(tracker.observe(&snapshot(750.0), &layout()).active, Section::Home);
        assert_eq!(tracker.observe(&snapshot(800.0), &layout()).active, Section::About);
    }
}
