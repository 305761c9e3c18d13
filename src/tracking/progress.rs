use super::viewport::ViewportSnapshot;

/// Normalized page scroll completion: 0 at the top, 1 at the bottom.
pub fn progress_ratio(snapshot: &ViewportSnapshot) -> f64 {
    let max_scroll = snapshot.max_scroll();
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (snapshot.scroll_y / max_scroll).clamp(0.0, 1.0)
}

/// How far an element has travelled through the viewport: 0 when its top
/// meets the bottom edge, 1 when its bottom leaves the top edge.
///
/// Returns `None` until the element has been measured, so callers can render
/// the resting frame on the server.
pub fn element_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> Option<f64> {
    let travel = viewport_height + rect_height;
    if rect_height <= 0.0 || travel <= 0.0 {
        return None;
    }
    Some(((viewport_height - rect_top) / travel).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_endpoints() {
        let top = ViewportSnapshot::new(0.0, 800.0, 4000.0);
        let bottom = ViewportSnapshot::new(3200.0, 800.0, 4000.0);
        assert_eq!(progress_ratio(&top), 0.0);
        assert_eq!(progress_ratio(&bottom), 1.0);
    }

    #[test]
    fn test_ratio_stays_in_range() {
        for s in (0..=3200).step_by(50) {
            let r = progress_ratio(&ViewportSnapshot::new(s as f64, 800.0, 4000.0));
            assert!((0.0..=1.0).contains(&r), "ratio {r} out of range at {s}");
        }
        // overscroll past the end on touch devices
        let past = ViewportSnapshot::new(3500.0, 800.0, 4000.0);
        assert_eq!(progress_ratio(&past), 1.0);
    }

    #[test]
    fn test_ratio_is_zero_when_nothing_scrolls() {
        let short = ViewportSnapshot::new(0.0, 900.0, 700.0);
        assert_eq!(progress_ratio(&short), 0.0);
        assert_eq!(progress_ratio(&ViewportSnapshot::default()), 0.0);
    }

    #[test]
    fn test_element_progress() {
        // section 1000px tall, viewport 800px
        assert_eq!(element_progress(800.0, 1000.0, 800.0), Some(0.0));
        assert_eq!(element_progress(-100.0, 1000.0, 800.0), Some(0.5));
        assert_eq!(element_progress(-1000.0, 1000.0, 800.0), Some(1.0));
        assert_eq!(element_progress(2000.0, 1000.0, 800.0), Some(0.0));
        assert_eq!(element_progress(0.0, 0.0, 0.0), None);
    }
}
