use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tracking::spring::SpringConfig;

/// Tunables for scroll tracking, reveals and the contact form.
///
/// The page shell provides `TrackingConfig::default()` through context; every
/// hook reads it from there rather than hard-coding its own constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Added to the scroll offset before resolving the active section, to
    /// compensate for the fixed header.
    pub lookahead_px: f64,
    /// Below this scroll offset the first section is always active.
    pub top_override_px: f64,
    /// Geometry-poll reveals latch once an element's top is this far above
    /// the bottom of the viewport.
    pub reveal_margin_px: f64,
    /// Intersection ratio at which observed elements reveal.
    pub reveal_threshold: f64,
    /// The header turns opaque past this scroll offset.
    pub header_solid_after_px: f64,
    /// The side progress indicator shows past this fraction of a viewport.
    pub indicator_after_viewports: f64,
    pub spring: SpringConfig,
    #[serde(with = "millis")]
    pub submit_delay: Duration,
    #[serde(with = "millis")]
    pub toast_duration: Duration,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            lookahead_px: 100.0,
            top_override_px: 100.0,
            reveal_margin_px: 150.0,
            reveal_threshold: 0.1,
            header_solid_after_px: 50.0,
            indicator_after_viewports: 0.3,
            spring: SpringConfig::default(),
            submit_delay: Duration::from_millis(1500),
            toast_duration: Duration::from_millis(4000),
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: TrackingConfig =
            serde_json::from_str(r#"{ "lookahead_px": 133.0, "submit_delay": 250 }"#)
                .expect("config should parse");

        assert_eq!(config.lookahead_px, 133.0);
        assert_eq!(config.submit_delay, Duration::from_millis(250));
        // untouched fields fall back
        assert_eq!(config.top_override_px, 100.0);
        assert_eq!(config.reveal_margin_px, 150.0);
        assert_eq!(config.spring, SpringConfig::default());
    }

    #[test]
    fn test_config_serializes_durations_as_millis() {
        let json = serde_json::to_value(TrackingConfig::default()).expect("should serialize");
        assert_eq!(json["submit_delay"], 1500);
        assert_eq!(json["toast_duration"], 4000);
    }
}
