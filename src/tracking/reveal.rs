/// One-way visibility latch for a revealed element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealFlag(bool);

impl RevealFlag {
    pub fn is_revealed(self) -> bool {
        self.0
    }

    /// Sets the flag when `condition` holds. Returns true only on the
    /// transition, so callers can stop observing.
    pub fn latch_if(&mut self, condition: bool) -> bool {
        if condition && !self.0 {
            self.0 = true;
            return true;
        }
        false
    }
}

/// What an intersection observer reported for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Decides when an element has been seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTrigger {
    /// Distance above the viewport's bottom edge an element's top must reach.
    pub margin_px: f64,
    /// Intersection ratio handed to the observer.
    pub threshold: f64,
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self {
            margin_px: 150.0,
            threshold: 0.1,
        }
    }
}

impl RevealTrigger {
    pub fn new(margin_px: f64, threshold: f64) -> Self {
        Self {
            margin_px,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// Scroll polling: `element_top` is relative to the viewport.
    pub fn is_visible(&self, element_top: f64, viewport_height: f64) -> bool {
        element_top < viewport_height - self.margin_px
    }

    pub fn poll(&self, flag: &mut RevealFlag, element_top: f64, viewport_height: f64) -> bool {
        flag.latch_if(self.is_visible(element_top, viewport_height))
    }

    /// Observer callback. The observer only fires around `threshold`, so an
    /// intersecting entry is enough.
    pub fn observe(&self, flag: &mut RevealFlag, sample: IntersectionSample) -> bool {
        flag.latch_if(sample.is_intersecting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_poll_uses_margin() {
        let trigger = RevealTrigger::default();
        let mut flag = RevealFlag::default();

        assert!(!trigger.poll(&mut flag, 700.0, 800.0));
        assert!(!trigger.poll(&mut flag, 650.0, 800.0));
        assert!(!flag.is_revealed());
        assert!(trigger.poll(&mut flag, 649.0, 800.0));
        assert!(flag.is_revealed());
    }

    #[test]
    fn test_latch_reports_transition_once() {
        let trigger = RevealTrigger::default();
        let mut flag = RevealFlag::default();

        assert!(trigger.poll(&mut flag, 10.0, 800.0));
        assert!(!trigger.poll(&mut flag, 10.0, 800.0));
        assert!(flag.is_revealed());
    }

    #[test]
    fn test_flag_never_reverts() {
        let trigger = RevealTrigger::default();
        let mut flag = RevealFlag::default();
        trigger.observe(
            &mut flag,
            IntersectionSample {
                is_intersecting: true,
                ratio: 0.12,
            },
        );

        // scrolled far away, observer reports leaving, viewport shrinks
        let events: [(f64, f64); 4] = [(5000.0, 800.0), (-3000.0, 800.0), (900.0, 100.0), (0.0, 0.0)];
        for (top, height) in events {
            trigger.poll(&mut flag, top, height);
            trigger.observe(
                &mut flag,
                IntersectionSample {
                    is_intersecting: false,
                    ratio: 0.0,
                },
            );
            assert!(flag.is_revealed());
        }
    }

    #[test]
    fn test_observer_ignores_non_intersecting_entries() {
        let trigger = RevealTrigger::new(150.0, 0.1);
        let mut flag = RevealFlag::default();

        assert!(!trigger.observe(
            &mut flag,
            IntersectionSample {
                is_intersecting: false,
                ratio: 0.0,
            },
        ));
        assert!(!flag.is_revealed());
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(RevealTrigger::new(0.0, 4.0).threshold, 1.0);
        assert_eq!(RevealTrigger::new(0.0, -1.0).threshold, 0.0);
    }
}
