use tracing::{debug, trace, warn};

use crate::anchor::{SectionAnchor, SectionRegistry};
use crate::config::NavConfig;
use crate::error::Result;
use crate::geometry::PageGeometry;
use crate::resolver::{self, Resolution};
use crate::sampler::{sanitize_offset, ScrollSample, ScrollSampler};
use crate::visibility::{self, Visibility};

/// Externally observed navbar state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavUIState {
    pub scrolled: bool,
    pub hidden: bool,
    /// Always the id of a registered section.
    pub active_section: String,
    pub mobile_menu_open: bool,
}

impl NavUIState {
    fn initial(registry: &SectionRegistry) -> Self {
        Self {
            scrolled: false,
            hidden: false,
            active_section: registry.first().id.clone(),
            mobile_menu_open: false,
        }
    }

    /// The dropdown is only drawn while the bar itself is on screen.
    pub fn mobile_menu_visible(&self) -> bool {
        self.mobile_menu_open && !self.hidden
    }

    fn visibility(&self) -> Visibility {
        Visibility {
            scrolled: self.scrolled,
            hidden: self.hidden,
            mobile_menu_open: self.mobile_menu_open,
        }
    }

    fn apply_visibility(&mut self, v: Visibility) {
        self.scrolled = v.scrolled;
        self.hidden = v.hidden;
        self.mobile_menu_open = v.mobile_menu_open;
    }
}

/// A smooth scroll the rendering layer should perform.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollRequest {
    pub section_id: String,
    /// Section top in document coordinates at the time of the request.
    pub target_offset: f32,
}

/// Owns [`NavUIState`] and wires scroll samples through the visibility
/// tracker and the active-section resolver.
#[derive(Debug)]
pub struct NavController {
    registry: SectionRegistry,
    config: NavConfig,
    sampler: ScrollSampler,
    state: NavUIState,
    last_resolution: Resolution,
    pending_scroll: Option<ScrollRequest>,
}

impl NavController {
    /// Create the controller and resolve the active section once against the
    /// current geometry, so a page that loads pre-scrolled starts correct.
    ///
    /// Visibility is left at its defaults until the first scroll event.
    pub fn new(
        registry: SectionRegistry,
        config: NavConfig,
        geometry: &dyn PageGeometry,
    ) -> Result<Self> {
        config.validate()?;

        let offset = sanitize_offset(geometry.scroll_offset());
        let resolution = resolver::resolve(&registry, geometry, offset, &config);
        let mut state = NavUIState::initial(&registry);
        state.active_section = resolution.anchor(&registry).id.clone();
        debug!(
            section = %state.active_section,
            reason = %resolution.reason,
            offset,
            "Navigation mounted"
        );

        Ok(Self {
            registry,
            config,
            sampler: ScrollSampler::new(),
            state,
            last_resolution: resolution,
            pending_scroll: None,
        })
    }

    pub fn state(&self) -> &NavUIState {
        &self.state
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn last_resolution(&self) -> Resolution {
        self.last_resolution
    }

    pub fn active_anchor(&self) -> &SectionAnchor {
        self.last_resolution.anchor(&self.registry)
    }

    /// Run one evaluation for a scroll event.
    pub fn on_scroll(&mut self, geometry: &dyn PageGeometry) -> &NavUIState {
        let sample = self.sampler.sample_geometry(geometry);
        self.evaluate(sample, geometry);
        &self.state
    }

    fn evaluate(&mut self, sample: ScrollSample, geometry: &dyn PageGeometry) {
        trace!(offset = sample.offset, delta = sample.delta, "Scroll sample");

        let prior = self.state.visibility();
        let next = visibility::evaluate(prior, sample, &self.config);
        if next.hidden != prior.hidden {
            debug!(hidden = next.hidden, offset = sample.offset, "Navbar visibility changed");
        }
        if prior.mobile_menu_open && !next.mobile_menu_open {
            debug!("Mobile menu closed by scroll");
        }
        self.state.apply_visibility(next);

        let resolution = resolver::resolve(&self.registry, geometry, sample.offset, &self.config);
        let anchor = resolution.anchor(&self.registry);
        if anchor.id != self.state.active_section {
            debug!(
                from = %self.state.active_section,
                to = %anchor.id,
                reason = %resolution.reason,
                "Active section changed"
            );
            self.state.active_section = anchor.id.clone();
        }
        self.last_resolution = resolution;
    }

    /// Ask for a smooth scroll to `id`.
    ///
    /// Unknown ids and sections without a live element are ignored and leave
    /// the state untouched. Returns whether a request was queued.
    pub fn scroll_to_section(&mut self, id: &str, geometry: &dyn PageGeometry) -> bool {
        if !self.registry.contains(id) {
            warn!(section = id, "Ignoring navigation to unknown section");
            return false;
        }
        let Some(target_offset) = geometry.section_offset(id) else {
            warn!(section = id, "Ignoring navigation to section without a target");
            return false;
        };

        debug!(section = id, target_offset, "Scroll requested");
        self.pending_scroll = Some(ScrollRequest {
            section_id: id.to_string(),
            target_offset,
        });
        self.state.mobile_menu_open = false;
        true
    }

    pub fn pending_scroll(&self) -> Option<&ScrollRequest> {
        self.pending_scroll.as_ref()
    }

    /// Hand the queued scroll request to the rendering layer.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending_scroll.take()
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.state.mobile_menu_open = !self.state.mobile_menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::StaticGeometry;
    use crate::resolver::ResolutionReason;

    fn geometry() -> StaticGeometry {
        StaticGeometry::new(900.0, 6000.0)
            .with_section("home", 0.0)
            .with_section("about", 1000.0)
            .with_section("experience", 2000.0)
            .with_section("projects", 3000.0)
            .with_section("skills", 4000.0)
            .with_section("contact", 5000.0)
    }

    fn controller(geometry: &StaticGeometry) -> NavController {
        NavController::new(SectionRegistry::portfolio(), NavConfig::default(), geometry).unwrap()
    }

    #[test]
    fn defaults_at_mount() {
        let nav = controller(&geometry());
        assert_eq!(
            nav.state(),
            &NavUIState {
                scrolled: false,
                hidden: false,
                active_section: "home".into(),
                mobile_menu_open: false,
            }
        );
    }

    #[test]
    fn mount_resolves_prescrolled_page() {
        let nav = controller(&geometry().at(2100.0));
        assert_eq!(nav.state().active_section, "experience");
        // Visibility waits for the first scroll event.
        assert!(!nav.state().scrolled);
    }

    #[test]
    fn invalid_config_fails_mount() {
        let config = NavConfig {
            bottom_margin: -5.0,
            ..Default::default()
        };
        assert!(NavController::new(SectionRegistry::portfolio(), config, &geometry()).is_err());
    }

    #[test]
    fn navigation_queues_request_and_closes_menu() {
        let g = geometry();
        let mut nav = controller(&g);
        nav.toggle_mobile_menu();
        assert!(nav.state().mobile_menu_open);

        assert!(nav.scroll_to_section("projects", &g));
        assert!(!nav.state().mobile_menu_open);
        let request = nav.take_scroll_request().unwrap();
        assert_eq!(request.section_id, "projects");
        assert_eq!(request.target_offset, 3000.0);
        assert!(nav.take_scroll_request().is_none());
    }

    #[test]
    fn navigation_to_missing_element_is_noop() {
        let mut g = geometry();
        g.remove_section("skills");
        let mut nav = controller(&g);
        nav.toggle_mobile_menu();
        let before = nav.state().clone();
        assert!(!nav.scroll_to_section("skills", &g));
        assert_eq!(nav.state(), &before);
        assert!(nav.pending_scroll().is_none());
    }

    #[test]
    fn toggle_leaves_scroll_state_alone() {
        let mut g = geometry();
        let mut nav = controller(&g);
        g.set_scroll_offset(400.0);
        nav.on_scroll(&g);
        let hidden = nav.state().hidden;
        let scrolled = nav.state().scrolled;
        nav.toggle_mobile_menu();
        assert_eq!(nav.state().hidden, hidden);
        assert_eq!(nav.state().scrolled, scrolled);
        assert!(nav.state().mobile_menu_open);
    }

    #[test]
    fn menu_visible_only_while_bar_is_shown() {
        let mut g = geometry();
        let mut nav = controller(&g);
        nav.toggle_mobile_menu();
        assert!(nav.state().mobile_menu_visible());
        g.set_scroll_offset(500.0);
        nav.on_scroll(&g);
        assert!(nav.state().hidden);
        assert!(!nav.state().mobile_menu_visible());
    }

    #[test]
    fn last_resolution_tracks_reason() {
        let mut g = geometry();
        let mut nav = controller(&g);
        g.set_scroll_offset(5100.0);
        nav.on_scroll(&g);
        assert_eq!(nav.last_resolution().reason, ResolutionReason::BottomSnap);
        assert_eq!(nav.active_anchor().id, "contact");
    }
}
