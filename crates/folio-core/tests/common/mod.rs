#![allow(dead_code)]

use folio_core::anchor::SectionRegistry;
use folio_core::config::NavConfig;
use folio_core::controller::NavController;
use folio_core::geometry::StaticGeometry;

/// Section tops of the reference portfolio layout.
pub const SECTION_OFFSETS: [(&str, f32); 6] = [
    ("home", 0.0),
    ("about", 800.0),
    ("experience", 1600.0),
    ("projects", 2400.0),
    ("skills", 3200.0),
    ("contact", 4000.0),
];

pub const VIEWPORT_HEIGHT: f32 = 1000.0;
pub const DOCUMENT_HEIGHT: f32 = 4500.0;

/// The six portfolio sections at 800px spacing in a 4500px document.
pub fn portfolio_layout() -> StaticGeometry {
    StaticGeometry::new(VIEWPORT_HEIGHT, DOCUMENT_HEIGHT).with_sections(SECTION_OFFSETS)
}

pub fn mounted_controller(geometry: &StaticGeometry) -> NavController {
    NavController::new(SectionRegistry::portfolio(), NavConfig::default(), geometry)
        .expect("default config is valid")
}

/// Feed a sequence of absolute offsets through the controller.
pub fn scroll_through(nav: &mut NavController, geometry: &mut StaticGeometry, offsets: &[f32]) {
    for &offset in offsets {
        geometry.set_scroll_offset(offset);
        nav.on_scroll(geometry);
    }
}
