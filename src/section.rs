use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One vertically stacked content region of the page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl Section {
    pub const COUNT: usize = 5;

    pub const ALL: [Section; Self::COUNT] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Sections linked from the header; the hero is reached through the brand.
    pub const NAV: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub const fn first() -> Self {
        Section::Home
    }

    /// Position in page order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// DOM id of the section's root element.
    pub const fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().trim_start_matches('#');
        Section::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_index() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
        assert_eq!(Section::first(), Section::ALL[0]);
        assert!(!Section::NAV.contains(&Section::Home));
    }

    #[test]
    fn test_parse_from_id_and_href() {
        assert_eq!("about".parse::<Section>(), Ok(Section::About));
        assert_eq!("#contact".parse::<Section>(), Ok(Section::Contact));
        assert_eq!("Skills".parse::<Section>(), Ok(Section::Skills));
        assert_eq!(
            "blog".parse::<Section>(),
            Err(UnknownSection("blog".to_string()))
        );
    }

    #[test]
    fn test_href_round_trips() {
        for section in Section::ALL {
            assert_eq!(section.href().parse::<Section>(), Ok(section));
        }
    }
}
