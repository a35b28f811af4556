use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// One navigable region of the page.
///
/// The section's vertical position is deliberately not stored here: layout
/// can change between evaluations, so it is queried from a
/// [`PageGeometry`](crate::geometry::PageGeometry) every time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionAnchor {
    pub id: String,
    pub label: String,
}

impl SectionAnchor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Ordered, non-empty set of anchors with unique ids.
///
/// Anchors are declared in page order (ascending vertical offset).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionRegistry {
    anchors: Vec<SectionAnchor>,
}

impl SectionRegistry {
    pub fn new(anchors: Vec<SectionAnchor>) -> Result<Self> {
        if anchors.is_empty() {
            return Err(FolioError::EmptyRegistry);
        }
        let mut seen = HashSet::with_capacity(anchors.len());
        for anchor in &anchors {
            if !seen.insert(anchor.id.as_str()) {
                return Err(FolioError::DuplicateSection(anchor.id.clone()));
            }
        }
        Ok(Self { anchors })
    }

    /// The six sections of the portfolio page.
    pub fn portfolio() -> Self {
        Self {
            anchors: portfolio_sections(),
        }
    }

    pub fn anchors(&self) -> &[SectionAnchor] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn first(&self) -> &SectionAnchor {
        &self.anchors[0]
    }

    pub fn last(&self) -> &SectionAnchor {
        &self.anchors[self.anchors.len() - 1]
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.anchors.iter().position(|a| a.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionAnchor> {
        self.anchors.iter()
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::portfolio()
    }
}

pub fn portfolio_sections() -> Vec<SectionAnchor> {
    vec![
        SectionAnchor::new("home", "Home"),
        SectionAnchor::new("about", "About"),
        SectionAnchor::new("experience", "Experience"),
        SectionAnchor::new("projects", "Projects"),
        SectionAnchor::new("skills", "Skills"),
        SectionAnchor::new("contact", "Contact"),
    ]
}
