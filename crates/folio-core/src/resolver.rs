use crate::anchor::{SectionAnchor, SectionRegistry};
use crate::config::NavConfig;
use crate::geometry::PageGeometry;

/// Why a section was picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionReason {
    /// The viewport reached the end of the document.
    BottomSnap,
    /// Last section whose top (minus the margin) has been scrolled past.
    Geometric,
    /// Nothing qualified; the first section is used.
    Fallback,
}

impl std::fmt::Display for ResolutionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BottomSnap => write!(f, "bottom snap"),
            Self::Geometric => write!(f, "geometric"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Outcome of one resolution pass. `index` always points into the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub index: usize,
    pub reason: ResolutionReason,
}

impl Resolution {
    pub fn anchor<'a>(&self, registry: &'a SectionRegistry) -> &'a SectionAnchor {
        &registry.anchors()[self.index]
    }
}

/// Pick the single active section for the scroll position `offset`.
///
/// Section offsets and page dimensions are read from `geometry` on every
/// call. Sections the geometry cannot locate are skipped for this pass only.
pub fn resolve(
    registry: &SectionRegistry,
    geometry: &dyn PageGeometry,
    offset: f32,
    config: &NavConfig,
) -> Resolution {
    if is_at_bottom(offset, geometry, config) {
        return Resolution {
            index: registry.len() - 1,
            reason: ResolutionReason::BottomSnap,
        };
    }

    let candidate = registry
        .iter()
        .enumerate()
        .filter_map(|(i, anchor)| geometry.section_offset(&anchor.id).map(|top| (i, top)))
        .filter(|&(_, top)| offset >= top - config.section_margin)
        .map(|(i, _)| i)
        .last();

    match candidate {
        Some(index) => Resolution {
            index,
            reason: ResolutionReason::Geometric,
        },
        None => Resolution {
            index: 0,
            reason: ResolutionReason::Fallback,
        },
    }
}

/// End-of-document test. Zero or negative dimensions simply make it true or
/// false; there is nothing to divide by.
pub fn is_at_bottom(offset: f32, geometry: &dyn PageGeometry, config: &NavConfig) -> bool {
    offset + geometry.viewport_height() >= geometry.document_height() - config.bottom_margin
}
