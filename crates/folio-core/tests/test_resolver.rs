mod common;

use folio_core::anchor::{SectionAnchor, SectionRegistry};
use folio_core::config::NavConfig;
use folio_core::geometry::StaticGeometry;
use folio_core::resolver::{is_at_bottom, resolve, ResolutionReason};

use common::{portfolio_layout, DOCUMENT_HEIGHT, SECTION_OFFSETS};

fn active_id(geometry: &StaticGeometry, offset: f32) -> String {
    let registry = SectionRegistry::portfolio();
    let r = resolve(&registry, geometry, offset, &NavConfig::default());
    r.anchor(&registry).id.clone()
}

// ---------------------------------------------------------------------------
// Bottom snap
// ---------------------------------------------------------------------------

#[test]
fn test_bottom_snap_selects_last_section() {
    // 3460 + 1000 = 4460 >= 4500 - 50
    let registry = SectionRegistry::portfolio();
    let r = resolve(&registry, &portfolio_layout(), 3460.0, &NavConfig::default());
    assert_eq!(r.anchor(&registry).id, "contact");
    assert_eq!(r.reason, ResolutionReason::BottomSnap);
}

#[test]
fn test_bottom_snap_boundary() {
    let geometry = portfolio_layout();
    let config = NavConfig::default();
    assert!(is_at_bottom(3450.0, &geometry, &config));
    assert!(!is_at_bottom(3449.0, &geometry, &config));
    // Geometrically 3449 is inside "skills" (3200 - 150 = 3050).
    assert_eq!(active_id(&geometry, 3449.0), "skills");
}

#[test]
fn test_bottom_snap_when_document_fits_viewport() {
    let geometry = StaticGeometry::new(1200.0, 900.0).with_sections(SECTION_OFFSETS);
    assert_eq!(active_id(&geometry, 0.0), "contact");
}

// ---------------------------------------------------------------------------
// Margin
// ---------------------------------------------------------------------------

#[test]
fn test_margin_boundary_activates_next_section() {
    let geometry = portfolio_layout();
    assert_eq!(active_id(&geometry, 650.0), "about");
    assert_eq!(active_id(&geometry, 649.0), "home");
}

#[test]
fn test_custom_margin() {
    let registry = SectionRegistry::portfolio();
    let config = NavConfig {
        section_margin: 0.0,
        ..Default::default()
    };
    let r = resolve(&registry, &portfolio_layout(), 799.0, &config);
    assert_eq!(r.anchor(&registry).id, "home");
    let r = resolve(&registry, &portfolio_layout(), 800.0, &config);
    assert_eq!(r.anchor(&registry).id, "about");
}

#[test]
fn test_every_section_reachable_in_order() {
    let geometry = portfolio_layout();
    let mut seen = Vec::new();
    let mut offset = 0.0;
    while offset < DOCUMENT_HEIGHT {
        let id = active_id(&geometry, offset);
        if seen.last() != Some(&id) {
            seen.push(id);
        }
        offset += 10.0;
    }
    let expected: Vec<String> = SECTION_OFFSETS.iter().map(|(id, _)| id.to_string()).collect();
    assert_eq!(seen, expected);
}

// ---------------------------------------------------------------------------
// Missing elements
// ---------------------------------------------------------------------------

#[test]
fn test_missing_section_is_skipped() {
    let mut geometry = portfolio_layout();
    geometry.remove_section("projects");
    // 2500 would be "projects"; with it gone the previous candidate wins.
    assert_eq!(active_id(&geometry, 2500.0), "experience");
}

#[test]
fn test_missing_first_section_falls_back_to_first_id() {
    let mut geometry = portfolio_layout();
    geometry.remove_section("home");
    let registry = SectionRegistry::portfolio();
    let r = resolve(&registry, &geometry, 100.0, &NavConfig::default());
    assert_eq!(r.anchor(&registry).id, "home");
    assert_eq!(r.reason, ResolutionReason::Fallback);
}

#[test]
fn test_no_elements_at_all() {
    let geometry = StaticGeometry::new(1000.0, 4500.0);
    assert_eq!(active_id(&geometry, 2000.0), "home");
}

// ---------------------------------------------------------------------------
// Totality
// ---------------------------------------------------------------------------

#[test]
fn test_resolution_is_total() {
    let registry = SectionRegistry::portfolio();
    let config = NavConfig::default();
    let dims = [(1000.0, 4500.0), (0.0, 0.0), (-10.0, 300.0), (800.0, -1.0)];
    for (viewport, document) in dims {
        let geometry = StaticGeometry::new(viewport, document).with_sections(SECTION_OFFSETS);
        let mut offset = -200.0;
        while offset < 6000.0 {
            let r = resolve(&registry, &geometry, offset, &config);
            assert!(r.index < registry.len());
            assert!(registry.contains(&r.anchor(&registry).id));
            offset += 37.0;
        }
    }
}

#[test]
fn test_registry_size_is_not_fixed() {
    let registry = SectionRegistry::new(vec![
        SectionAnchor::new("intro", "Intro"),
        SectionAnchor::new("work", "Work"),
        SectionAnchor::new("outro", "Outro"),
    ])
    .unwrap();
    let geometry = StaticGeometry::new(600.0, 3000.0)
        .with_section("intro", 0.0)
        .with_section("work", 1000.0)
        .with_section("outro", 2000.0);
    let config = NavConfig::default();

    let r = resolve(&registry, &geometry, 1200.0, &config);
    assert_eq!(r.anchor(&registry).id, "work");
    let r = resolve(&registry, &geometry, 2400.0, &config);
    assert_eq!(r.anchor(&registry).id, "outro");
    assert_eq!(r.reason, ResolutionReason::BottomSnap);
}

#[test]
fn test_overlapping_offsets_resolve_to_later_section() {
    let registry = SectionRegistry::portfolio();
    let geometry = StaticGeometry::new(1000.0, 9000.0)
        .with_section("home", 0.0)
        .with_section("about", 1000.0)
        .with_section("experience", 1000.0);
    let r = resolve(&registry, &geometry, 900.0, &NavConfig::default());
    assert_eq!(r.anchor(&registry).id, "experience");
}
