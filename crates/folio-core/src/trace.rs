//! Recorded scroll sessions and their deterministic replay.
//!
//! A trace describes a page layout and a sequence of user actions. Replaying
//! it drives a mounted controller exactly like a browser would: scroll events
//! go through [`ScrollEvents`], navigation requests are animated with
//! [`SmoothScroll`] and every animation frame is a scroll event of its own.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::anchor::SectionRegistry;
use crate::config::NavConfig;
use crate::controller::NavUIState;
use crate::error::{FolioError, Result};
use crate::events::{MountedNav, ScrollEvents};
use crate::geometry::StaticGeometry;
use crate::resolver::ResolutionReason;
use crate::smooth::SmoothScroll;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScrollTrace {
    pub layout: PageLayout,
    #[serde(default)]
    pub steps: Vec<TraceStep>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageLayout {
    pub viewport_height: f32,
    pub document_height: f32,
    /// Scroll position when the page loads (anchor links, history restore).
    #[serde(default)]
    pub initial_offset: f32,
    pub sections: Vec<LayoutSection>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LayoutSection {
    pub id: String,
    /// `None` when the section's element is not rendered.
    pub offset: Option<f32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TraceStep {
    Scroll {
        offset: f32,
    },
    Navigate {
        section: String,
    },
    ToggleMenu,
    Resize {
        viewport_height: f32,
        document_height: f32,
    },
    /// Layout shift: a section moves, appears (`Some`) or disappears (`None`).
    Move {
        section: String,
        offset: Option<f32>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum ReplayEvent {
    Mount,
    Scroll,
    /// One animation frame of a smooth scroll.
    SmoothScroll,
    Navigate { section: String, accepted: bool },
    ToggleMenu,
    Resize,
    Move { section: String },
}

impl std::fmt::Display for ReplayEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mount => write!(f, "mount"),
            Self::Scroll => write!(f, "scroll"),
            Self::SmoothScroll => write!(f, "smooth"),
            Self::Navigate { section, accepted } => {
                if *accepted {
                    write!(f, "goto {section}")
                } else {
                    write!(f, "goto {section} (ignored)")
                }
            }
            Self::ToggleMenu => write!(f, "menu"),
            Self::Resize => write!(f, "resize"),
            Self::Move { section } => write!(f, "move {section}"),
        }
    }
}

/// Controller state after one replayed event.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplayFrame {
    /// Index of the trace step that produced this frame; `None` for mount.
    pub step: Option<usize>,
    pub event: ReplayEvent,
    pub offset: f32,
    pub state: NavUIState,
    pub reason: ResolutionReason,
}

#[derive(Clone, Debug, Default)]
pub struct Replay {
    pub frames: Vec<ReplayFrame>,
}

impl Replay {
    pub fn final_state(&self) -> Option<&NavUIState> {
        self.frames.last().map(|f| &f.state)
    }

    /// Frames where the active section differs from the frame before.
    pub fn section_changes(&self) -> impl Iterator<Item = &ReplayFrame> {
        self.frames
            .windows(2)
            .filter(|w| w[0].state.active_section != w[1].state.active_section)
            .map(|w| &w[1])
    }

    /// Frames where any part of the navbar state changed.
    pub fn state_changes(&self) -> impl Iterator<Item = &ReplayFrame> {
        self.frames
            .iter()
            .take(1)
            .chain(self.frames.windows(2).filter(|w| w[0].state != w[1].state).map(|w| &w[1]))
    }
}

impl ScrollTrace {
    /// Every section the layout mentions must be registered.
    pub fn validate(&self, registry: &SectionRegistry) -> Result<()> {
        let layout_ids = self.layout.sections.iter().map(|s| s.id.as_str());
        let moved_ids = self.steps.iter().filter_map(|step| match step {
            TraceStep::Move { section, .. } => Some(section.as_str()),
            _ => None,
        });
        for id in layout_ids.chain(moved_ids) {
            if !registry.contains(id) {
                return Err(FolioError::UnknownTraceSection(id.to_string()));
            }
        }
        Ok(())
    }

    fn initial_geometry(&self) -> StaticGeometry {
        let sections = self
            .layout
            .sections
            .iter()
            .filter_map(|s| s.offset.map(|offset| (s.id.clone(), offset)));
        StaticGeometry::new(self.layout.viewport_height, self.layout.document_height)
            .with_sections(sections)
            .at(self.layout.initial_offset)
    }
}

/// Replay `trace` against a freshly mounted controller.
pub fn replay(trace: &ScrollTrace, registry: SectionRegistry, config: &NavConfig) -> Result<Replay> {
    replay_reported(trace, registry, config, |_, _| {})
}

/// Like [`replay`], calling `on_step(steps_done, steps_total)` after each
/// trace step.
pub fn replay_reported(
    trace: &ScrollTrace,
    registry: SectionRegistry,
    config: &NavConfig,
    mut on_step: impl FnMut(usize, usize),
) -> Result<Replay> {
    trace.validate(&registry)?;
    let total = trace.steps.len();

    let events = ScrollEvents::new();
    let mut geometry = trace.initial_geometry();
    let nav = MountedNav::mount(&events, registry, config.clone(), &geometry)?;
    let mut smooth = SmoothScroll::new(config.smooth_scroll_speed);
    let mut replay = Replay::default();

    let record = |replay: &mut Replay, step, event, geometry: &StaticGeometry| {
        let controller = nav.controller();
        replay.frames.push(ReplayFrame {
            step,
            event,
            offset: geometry.scroll_offset,
            state: controller.state().clone(),
            reason: controller.last_resolution().reason,
        });
    };

    record(&mut replay, None, ReplayEvent::Mount, &geometry);

    for (i, step) in trace.steps.iter().enumerate() {
        let step_index = Some(i);
        match step {
            TraceStep::Scroll { offset } => {
                geometry.set_scroll_offset(*offset);
                events.emit(&geometry);
                record(&mut replay, step_index, ReplayEvent::Scroll, &geometry);
            }
            TraceStep::Navigate { section } => {
                let request = {
                    let mut controller = nav.controller_mut();
                    controller.scroll_to_section(section, &geometry);
                    controller.take_scroll_request()
                };
                let event = ReplayEvent::Navigate {
                    section: section.clone(),
                    accepted: request.is_some(),
                };
                record(&mut replay, step_index, event, &geometry);

                if let Some(request) = request {
                    let max_offset = (geometry.document_height - geometry.viewport_height).max(0.0);
                    smooth.start(geometry.scroll_offset, request.target_offset.min(max_offset));
                    while let Some(offset) = smooth.tick() {
                        geometry.set_scroll_offset(offset);
                        events.emit(&geometry);
                        record(&mut replay, step_index, ReplayEvent::SmoothScroll, &geometry);
                    }
                }
            }
            TraceStep::ToggleMenu => {
                nav.controller_mut().toggle_mobile_menu();
                record(&mut replay, step_index, ReplayEvent::ToggleMenu, &geometry);
            }
            TraceStep::Resize {
                viewport_height,
                document_height,
            } => {
                geometry.viewport_height = *viewport_height;
                geometry.document_height = *document_height;
                record(&mut replay, step_index, ReplayEvent::Resize, &geometry);
            }
            TraceStep::Move { section, offset } => {
                match offset {
                    Some(offset) => {
                        geometry.sections.insert(section.clone(), *offset);
                    }
                    None => {
                        geometry.remove_section(section);
                    }
                }
                debug!(section = %section, offset = ?offset, "Layout shift");
                let event = ReplayEvent::Move {
                    section: section.clone(),
                };
                record(&mut replay, step_index, event, &geometry);
            }
        }
        on_step(i + 1, total);
    }

    info!(
        steps = total,
        frames = replay.frames.len(),
        "Replay finished"
    );
    Ok(replay)
}
