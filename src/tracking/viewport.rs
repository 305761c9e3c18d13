use crate::section::Section;

/// One reading of the window's scroll geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ViewportSnapshot {
    pub fn new(scroll_y: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_y: scroll_y.max(0.0),
            viewport_height: viewport_height.max(0.0),
            document_height: document_height.max(0.0),
        }
    }

    /// Total scrollable distance.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }
}

/// Document top offset of each section, indexed in page order. Sections
/// without a rendered element are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SectionLayout {
    tops: [Option<f64>; Section::COUNT],
}

impl SectionLayout {
    /// Builds a layout by asking `top_of` for every section.
    pub fn from_fn(mut top_of: impl FnMut(Section) -> Option<f64>) -> Self {
        let mut tops = [None; Section::COUNT];
        for section in Section::ALL {
            tops[section.index()] = top_of(section);
        }
        Self { tops }
    }

    pub fn top(&self, section: Section) -> Option<f64> {
        self.tops[section.index()]
    }

    /// Rendered sections with their tops, last section first.
    pub fn iter_rev(&self) -> impl Iterator<Item = (Section, f64)> + '_ {
        Section::ALL
            .into_iter()
            .rev()
            .filter_map(|s| self.top(s).map(|top| (s, top)))
    }
}

impl FromIterator<(Section, f64)> for SectionLayout {
    fn from_iter<T: IntoIterator<Item = (Section, f64)>>(iter: T) -> Self {
        let mut tops = [None; Section::COUNT];
        for (section, top) in iter {
            tops[section.index()] = Some(top);
        }
        Self { tops }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_clamps_negative_values() {
        // overscroll bounce can report negative offsets
        let snapshot = ViewportSnapshot::new(-40.0, 800.0, 4000.0);
        assert_eq!(snapshot.scroll_y, 0.0);
        assert_eq!(snapshot.max_scroll(), 3200.0);

        let short = ViewportSnapshot::new(0.0, 900.0, 600.0);
        assert_eq!(short.max_scroll(), 0.0);
    }

    #[test]
    fn test_layout_skips_missing_sections() {
        let layout: SectionLayout = [(Section::Home, 0.0), (Section::Skills, 1600.0)]
            .into_iter()
            .collect();

        assert_eq!(layout.top(Section::About), None);
        let rev = layout.iter_rev().collect::<Vec<_>>();
        assert_eq!(rev, vec![(Section::Skills, 1600.0), (Section::Home, 0.0)]);
    }
}
