use folio_core::anchor::SectionRegistry;
use folio_core::config::NavConfig;
use folio_core::error::FolioError;
use folio_core::resolver::ResolutionReason;
use folio_core::trace::{replay, ReplayEvent, ScrollTrace, TraceStep};

const SAMPLE_TRACE: &str = include_str!("../../../demos/portfolio_trace.toml");

fn sample_trace() -> ScrollTrace {
    toml::from_str(SAMPLE_TRACE).expect("sample trace parses")
}

fn run(trace: &ScrollTrace) -> folio_core::trace::Replay {
    replay(trace, SectionRegistry::portfolio(), &NavConfig::default()).unwrap()
}

#[test]
fn test_sample_trace_parses() {
    let trace = sample_trace();
    assert_eq!(trace.layout.sections.len(), 6);
    assert_eq!(trace.steps[0], TraceStep::Scroll { offset: 4.0 });
    assert_eq!(trace.steps[6], TraceStep::ToggleMenu);
    assert_eq!(
        trace.steps[7],
        TraceStep::Navigate {
            section: "projects".into()
        }
    );
}

#[test]
fn test_replay_starts_with_mount_frame() {
    let result = run(&sample_trace());
    let mount = &result.frames[0];
    assert_eq!(mount.event, ReplayEvent::Mount);
    assert_eq!(mount.step, None);
    assert_eq!(mount.state.active_section, "home");
}

#[test]
fn test_replay_is_deterministic() {
    let trace = sample_trace();
    assert_eq!(run(&trace).frames, run(&trace).frames);
}

#[test]
fn test_navigation_animates_to_target() {
    let result = run(&sample_trace());

    let nav_index = result
        .frames
        .iter()
        .position(|f| {
            f.event
                == ReplayEvent::Navigate {
                    section: "projects".into(),
                    accepted: true,
                }
        })
        .expect("navigation frame");
    assert!(!result.frames[nav_index].state.mobile_menu_open);

    let smooth: Vec<_> = result.frames[nav_index + 1..]
        .iter()
        .take_while(|f| f.event == ReplayEvent::SmoothScroll)
        .collect();
    assert!(smooth.len() > 1);
    let last = smooth.last().unwrap();
    assert_eq!(last.offset, 2600.0);
    assert_eq!(last.state.active_section, "projects");
    // Scrolling down fast hides the bar during the animation.
    assert!(smooth[0].state.hidden);
}

#[test]
fn test_unknown_navigation_is_recorded_as_ignored() {
    let result = run(&sample_trace());
    let ignored = result
        .frames
        .iter()
        .find(|f| {
            f.event
                == ReplayEvent::Navigate {
                    section: "blog".into(),
                    accepted: false,
                }
        })
        .expect("ignored navigation frame");
    let before = result
        .frames
        .iter()
        .take_while(|f| !std::ptr::eq(*f, ignored))
        .last()
        .unwrap();
    assert_eq!(ignored.state, before.state);
}

#[test]
fn test_replay_ends_on_last_section() {
    let result = run(&sample_trace());
    let last = result.frames.last().unwrap();
    assert_eq!(last.state.active_section, "contact");
    assert_eq!(last.reason, ResolutionReason::BottomSnap);
    assert_eq!(result.final_state().unwrap().active_section, "contact");
}

#[test]
fn test_section_changes_are_in_page_order() {
    let result = run(&sample_trace());
    let changes: Vec<_> = result
        .section_changes()
        .map(|f| f.state.active_section.as_str())
        .collect();
    assert_eq!(changes.first(), Some(&"about"));
    assert_eq!(changes.last(), Some(&"contact"));
    assert!(changes.contains(&"projects"));
}

#[test]
fn test_unknown_layout_section_is_rejected() {
    let mut trace = sample_trace();
    trace.layout.sections[0].id = "intro".into();
    let err = replay(&trace, SectionRegistry::portfolio(), &NavConfig::default()).unwrap_err();
    assert!(matches!(err, FolioError::UnknownTraceSection(ref id) if id == "intro"));
}

#[test]
fn test_missing_section_element_in_layout() {
    let trace: ScrollTrace = toml::from_str(
        r#"
        [layout]
        viewport_height = 600
        document_height = 3000
        sections = [{ id = "home", offset = 0 }, { id = "about" }]

        [[steps]]
        action = "navigate"
        section = "about"

        [[steps]]
        action = "scroll"
        offset = 1200
        "#,
    )
    .unwrap();
    let result = run(&trace);
    assert_eq!(
        result.frames[1].event,
        ReplayEvent::Navigate {
            section: "about".into(),
            accepted: false
        }
    );
    assert_eq!(result.final_state().unwrap().active_section, "home");
}

#[test]
fn test_layout_shift_applies_on_next_scroll() {
    let trace: ScrollTrace = toml::from_str(
        r#"
        [layout]
        viewport_height = 600
        document_height = 4000
        sections = [
            { id = "home", offset = 0 },
            { id = "about", offset = 1000 },
            { id = "experience", offset = 2000 },
        ]

        [[steps]]
        action = "scroll"
        offset = 900

        [[steps]]
        action = "move"
        section = "about"
        offset = 1200

        [[steps]]
        action = "scroll"
        offset = 920
        "#,
    )
    .unwrap();
    let result = run(&trace);
    let active: Vec<_> = result
        .frames
        .iter()
        .map(|f| f.state.active_section.as_str())
        .collect();
    assert_eq!(active, ["home", "about", "about", "home"]);
    assert_eq!(
        result.frames[2].event,
        ReplayEvent::Move {
            section: "about".into()
        }
    );
    assert_eq!(result.frames[3].reason, ResolutionReason::Geometric);
}

#[test]
fn test_resize_snaps_to_bottom_on_next_scroll() {
    let trace: ScrollTrace = toml::from_str(
        r#"
        [layout]
        viewport_height = 800
        document_height = 5000
        sections = [
            { id = "home", offset = 0 },
            { id = "about", offset = 1000 },
            { id = "experience", offset = 2000 },
            { id = "contact", offset = 2500 },
        ]

        [[steps]]
        action = "scroll"
        offset = 2100

        [[steps]]
        action = "resize"
        viewport_height = 800
        document_height = 2950

        [[steps]]
        action = "scroll"
        offset = 2150
        "#,
    )
    .unwrap();
    let result = run(&trace);

    let resized = &result.frames[2];
    assert_eq!(resized.event, ReplayEvent::Resize);
    assert_eq!(resized.offset, 2100.0);
    assert_eq!(resized.state.active_section, "experience");
    assert_eq!(resized.reason, ResolutionReason::Geometric);

    let after = &result.frames[3];
    assert_eq!(after.state.active_section, "contact");
    assert_eq!(after.reason, ResolutionReason::BottomSnap);
}
