use std::collections::HashMap;

/// Live page measurements, queried at evaluation time.
///
/// The navigation core never caches any of these: every evaluation asks
/// again, so layout shifts between scroll events are always picked up.
pub trait PageGeometry {
    /// Current vertical scroll position. 0 when there is no scroll container.
    fn scroll_offset(&self) -> f32;

    fn viewport_height(&self) -> f32;

    fn document_height(&self) -> f32;

    /// Top of the section's element in document coordinates, or `None` when
    /// the element is not currently present.
    fn section_offset(&self, id: &str) -> Option<f32>;
}

/// Synthetic geometry with fixed measurements.
#[derive(Clone, Debug, Default)]
pub struct StaticGeometry {
    pub scroll_offset: f32,
    pub viewport_height: f32,
    pub document_height: f32,
    pub sections: HashMap<String, f32>,
}

impl StaticGeometry {
    pub fn new(viewport_height: f32, document_height: f32) -> Self {
        Self {
            viewport_height,
            document_height,
            ..Default::default()
        }
    }

    pub fn with_section(mut self, id: impl Into<String>, offset: f32) -> Self {
        self.sections.insert(id.into(), offset);
        self
    }

    pub fn with_sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        self.sections
            .extend(sections.into_iter().map(|(id, offset)| (id.into(), offset)));
        self
    }

    pub fn at(mut self, scroll_offset: f32) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    pub fn set_scroll_offset(&mut self, scroll_offset: f32) {
        self.scroll_offset = scroll_offset;
    }

    pub fn remove_section(&mut self, id: &str) -> Option<f32> {
        self.sections.remove(id)
    }
}

impl PageGeometry for StaticGeometry {
    fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn document_height(&self) -> f32 {
        self.document_height
    }

    fn section_offset(&self, id: &str) -> Option<f32> {
        self.sections.get(id).copied()
    }
}
