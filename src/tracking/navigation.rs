use crate::section::Section;

/// Something that can find a section element and scroll it into view.
pub trait ScrollSurface {
    type Target;

    fn find(&self, id: &str) -> Option<Self::Target>;
    fn scroll_into_view(&self, target: &Self::Target);
}

/// Smooth-scrolls to `section`. A section that isn't rendered is skipped,
/// and `false` is returned.
pub fn navigate<S: ScrollSurface>(surface: &S, section: Section) -> bool {
    match surface.find(section.id()) {
        Some(target) => {
            log::debug!("scrolling to #{}", section.id());
            surface.scroll_into_view(&target);
            true
        }
        None => {
            log::warn!("no element for section #{}", section.id());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct FakeSurface {
        rendered: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl ScrollSurface for FakeSurface {
        type Target = String;

        fn find(&self, id: &str) -> Option<String> {
            self.rendered
                .iter()
                .find(|r| **r == id)
                .map(|r| r.to_string())
        }

        fn scroll_into_view(&self, target: &String) {
            self.scrolled.borrow_mut().push(target.clone());
        }
    }

    #[test]
    fn test_navigate_scrolls_rendered_section() {
        let surface = FakeSurface {
            rendered: vec!["home", "about", "contact"],
            scrolled: RefCell::new(Vec::new()),
        };

        assert!(navigate(&surface, Section::Contact));
        assert_eq!(*surface.scrolled.borrow(), vec!["contact".to_string()]);
    }

    #[test]
    fn test_navigate_to_missing_section_is_noop() {
        let surface = FakeSurface {
            rendered: vec!["home"],
            scrolled: RefCell::new(Vec::new()),
        };

        assert!(!navigate(&surface, Section::Projects));
        assert!(surface.scrolled.borrow().is_empty());
    }
}
