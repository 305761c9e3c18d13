use crate::section::Section;

use super::viewport::{SectionLayout, ViewportSnapshot};

/// Maps a scroll position to the section currently being read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSectionResolver {
    pub lookahead_px: f64,
    pub top_override_px: f64,
}

impl Default for ActiveSectionResolver {
    fn default() -> Self {
        Self {
            lookahead_px: 100.0,
            top_override_px: 100.0,
        }
    }
}

impl ActiveSectionResolver {
    pub fn new(lookahead_px: f64, top_override_px: f64) -> Self {
        Self {
            lookahead_px,
            top_override_px,
        }
    }

    /// Returns the last section whose top is at or above the lookahead line.
    /// Near the top of the page the first section wins regardless of layout,
    /// and `previous` is kept when no rendered section qualifies.
    pub fn resolve(
        &self,
        layout: &SectionLayout,
        snapshot: &ViewportSnapshot,
        previous: Section,
    ) -> Section {
        if snapshot.scroll_y < self.top_override_px {
            return Section::first();
        }
        let scroll_position = snapshot.scroll_y + self.lookahead_px;
        layout
            .iter_rev()
            .find(|(_, top)| *top <= scroll_position)
            .map(|(section, _)| section)
            .unwrap_or(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn even_layout() -> SectionLayout {
        Section::ALL
            .into_iter()
            .map(|s| (s, s.index() as f64 * 800.0))
            .collect()
    }

    fn at(scroll_y: f64) -> ViewportSnapshot {
        ViewportSnapshot::new(scroll_y, 800.0, 4000.0)
    }

    #[test]
    fn test_lookahead_scenario() {
        let resolver = ActiveSectionResolver::default();
        let layout = even_layout();

        // 750 + 100 lookahead = 850, past the about section at 800
        assert_eq!(
            resolver.resolve(&layout, &at(750.0), Section::Home),
            Section::About
        );
        assert_eq!(
            resolver.resolve(&layout, &at(50.0), Section::Contact),
            Section::Home
        );
        assert_eq!(
            resolver.resolve(&layout, &at(3150.0), Section::Home),
            Section::Contact
        );
    }

    #[test]
    fn test_top_override_ignores_geometry() {
        let resolver = ActiveSectionResolver::default();
        // every section squeezed to the top; geometry alone would pick contact
        let squeezed: SectionLayout = Section::ALL.into_iter().map(|s| (s, 0.0)).collect();

        for s in 0..100 {
            assert_eq!(
                resolver.resolve(&squeezed, &at(s as f64), Section::Projects),
                Section::Home
            );
        }
        assert_eq!(
            resolver.resolve(&squeezed, &at(100.0), Section::Home),
            Section::Contact
        );
    }

    #[test]
    fn test_matches_last_qualifying_section_everywhere() {
        let resolver = ActiveSectionResolver::default();
        let layout = even_layout();

        for s in (100..4000).step_by(37) {
            let s = s as f64;
            let expected = Section::ALL
                .into_iter()
                .filter(|sec| sec.index() as f64 * 800.0 <= s + 100.0)
                .last()
                .expect("home is always at 0");
            assert_eq!(resolver.resolve(&layout, &at(s), Section::Home), expected);
        }
    }

    #[test]
    fn test_keeps_previous_when_nothing_qualifies() {
        let resolver = ActiveSectionResolver::default();
        let layout: SectionLayout = [(Section::Projects, 5000.0), (Section::Contact, 6000.0)]
            .into_iter()
            .collect();

        assert_eq!(
            resolver.resolve(&layout, &at(1200.0), Section::Skills),
            Section::Skills
        );
        assert_eq!(
            resolver.resolve(&SectionLayout::default(), &at(1200.0), Section::About),
            Section::About
        );
    }

    #[test]
    fn test_skips_unrendered_sections() {
        let resolver = ActiveSectionResolver::default();
        let layout: SectionLayout = [
            (Section::Home, 0.0),
            (Section::About, 800.0),
            (Section::Contact, 3200.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            resolver.resolve(&layout, &at(2500.0), Section::Home),
            Section::About
        );
    }
}
