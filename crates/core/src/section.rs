//! Section descriptors and the ordered registry that drives the page.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// One scrollable block of the page.
///
/// `id` doubles as the DOM anchor, the scroll target and the element that
/// carries the card's `aria-label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    pub id: String,
    pub title: String,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    pub fn kind(&self) -> SectionKind {
        SectionKind::from_id(&self.id)
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Which authored content block a section renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Contact,
    ExecutiveProfile,
    Skills,
    Accomplishments,
    Experience,
    Education,
    /// No authored content; rendered as a skeleton.
    Placeholder,
}

impl SectionKind {
    /// Maps a section id to its content block. Unknown ids are `Placeholder`.
    pub fn from_id(id: &str) -> Self {
        match id {
            "header" => SectionKind::Contact,
            "executive-profile" => SectionKind::ExecutiveProfile,
            "skills" => SectionKind::Skills,
            "accomplishments" => SectionKind::Accomplishments,
            "experience" => SectionKind::Experience,
            "education" => SectionKind::Education,
            _ => SectionKind::Placeholder,
        }
    }

    /// Canonical id, if this kind has authored content.
    pub fn id(self) -> Option<&'static str> {
        match self {
            SectionKind::Contact => Some("header"),
            SectionKind::ExecutiveProfile => Some("executive-profile"),
            SectionKind::Skills => Some("skills"),
            SectionKind::Accomplishments => Some("accomplishments"),
            SectionKind::Experience => Some("experience"),
            SectionKind::Education => Some("education"),
            SectionKind::Placeholder => None,
        }
    }

    /// Title used by the default registry, if this kind has authored content.
    pub fn default_title(self) -> Option<&'static str> {
        match self {
            SectionKind::Contact => Some("Connect"),
            SectionKind::ExecutiveProfile => Some("Executive Profile"),
            SectionKind::Skills => Some("Skills and Technologies"),
            SectionKind::Accomplishments => Some("Major Accomplishments"),
            SectionKind::Experience => Some("Experience"),
            SectionKind::Education => Some("Education"),
            SectionKind::Placeholder => None,
        }
    }

    /// Authored kinds in default page order.
    pub fn authored() -> &'static [SectionKind] {
        &[
            SectionKind::Contact,
            SectionKind::ExecutiveProfile,
            SectionKind::Skills,
            SectionKind::Accomplishments,
            SectionKind::Experience,
            SectionKind::Education,
        ]
    }
}

/// Validated, ordered, non-empty list of sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    sections: Vec<SectionDescriptor>,
}

impl Registry {
    pub fn new(sections: Vec<SectionDescriptor>) -> Result<Self, SiteError> {
        if sections.is_empty() {
            return Err(SiteError::EmptyRegistry);
        }

        let mut seen = HashSet::with_capacity(sections.len());
        for (index, s) in sections.iter().enumerate() {
            if s.id.trim().is_empty() {
                return Err(SiteError::BlankSectionId { index });
            }
            // Used verbatim as an HTML id and a `#fragment`.
            if s.id.chars().any(char::is_whitespace) {
                return Err(SiteError::InvalidSectionId {
                    index,
                    id: s.id.clone(),
                });
            }
            if !seen.insert(s.id.as_str()) {
                return Err(SiteError::DuplicateSection { id: s.id.clone() });
            }
        }

        Ok(Self { sections })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SectionDescriptor> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Never true for a validated registry.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// First section; the "back to top" target.
    pub fn first(&self) -> &SectionDescriptor {
        &self.sections[0]
    }
}

pub(crate) fn default_sections() -> Vec<SectionDescriptor> {
    SectionKind::authored()
        .iter()
        .filter_map(|&k| Some(SectionDescriptor::new(k.id()?, k.default_title()?)))
        .collect()
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            sections: default_sections(),
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a SectionDescriptor;
    type IntoIter = std::slice::Iter<'a, SectionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_order_is_stable() {
        let reg = Registry::default();
        let ids: Vec<&str> = reg.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "header",
                "executive-profile",
                "skills",
                "accomplishments",
                "experience",
                "education"
            ]
        );
        assert_eq!(reg.first().title, "Connect");
    }

    #[test]
    fn kind_round_trips_through_id() {
        for &k in SectionKind::authored() {
            let id = k.id().unwrap();
            assert_eq!(SectionKind::from_id(id), k);
        }
        assert_eq!(SectionKind::Placeholder.id(), None);
        assert_eq!(SectionKind::Placeholder.default_title(), None);
    }

    #[test]
    fn unknown_ids_are_placeholders() {
        assert_eq!(SectionKind::from_id("projects"), SectionKind::Placeholder);
        assert_eq!(SectionKind::from_id(""), SectionKind::Placeholder);
        assert_eq!(SectionKind::from_id("Skills"), SectionKind::Placeholder);
    }

    #[test]
    fn registry_rejects_empty_blank_and_duplicate() {
        assert!(matches!(Registry::new(vec![]), Err(SiteError::EmptyRegistry)));

        let blank = vec![
            SectionDescriptor::new("header", "Connect"),
            SectionDescriptor::new("  ", "Nothing"),
        ];
        assert!(matches!(
            Registry::new(blank),
            Err(SiteError::BlankSectionId { index: 1 })
        ));

        let dup = vec![
            SectionDescriptor::new("skills", "Skills"),
            SectionDescriptor::new("skills", "Skills again"),
        ];
        match Registry::new(dup) {
            Err(SiteError::DuplicateSection { id }) => assert_eq!(id, "skills"),
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn registry_rejects_ids_with_whitespace() {
        for bad in [" skills", "skills ", "my projects", "tab\tid"] {
            let sections = vec![
                SectionDescriptor::new("header", "Connect"),
                SectionDescriptor::new(bad, "Broken"),
            ];
            match Registry::new(sections) {
                Err(SiteError::InvalidSectionId { index, id }) => {
                    assert_eq!(index, 1);
                    assert_eq!(id, bad);
                }
                other => panic!("expected invalid id error for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn href_targets_anchor() {
        let s = SectionDescriptor::new("education", "Education");
        assert_eq!(s.href(), "#education");
        assert_eq!(s.kind(), SectionKind::Education);
    }
}
