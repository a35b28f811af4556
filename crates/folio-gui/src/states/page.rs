use folio_core::geometry::StaticGeometry;

/// Page measurements taken from the scroll area on the latest frame.
#[derive(Default)]
pub struct PageState {
    /// Serves as the live geometry for the navigation controller.
    pub geometry: StaticGeometry,
    /// Offset delivered with the last scroll event; `None` before the first
    /// measured frame.
    last_emitted_offset: Option<f32>,
}

impl PageState {
    /// Store this frame's measurements. Returns true when the scroll
    /// position moved (or was measured for the first time) and a scroll event
    /// should be delivered. At most one event per frame.
    pub fn update(&mut self, measured: StaticGeometry) -> bool {
        let offset = measured.scroll_offset;
        self.geometry = measured;
        if self.last_emitted_offset == Some(offset) {
            return false;
        }
        self.last_emitted_offset = Some(offset);
        true
    }

    pub fn is_measured(&self) -> bool {
        self.last_emitted_offset.is_some()
    }
}
