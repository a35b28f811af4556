use std::path::Path;

use console::Style;
use folio_core::config::FolioConfig;
use folio_core::trace::{Replay, ReplayFrame, ScrollTrace};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    active: Style,
    flag_on: Style,
    flag_off: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            active: Style::new().green(),
            flag_on: Style::new().yellow(),
            flag_off: Style::new().dim(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_replay_header(path: &Path, trace: &ScrollTrace, config: &FolioConfig) {
    let s = Styles::new();
    let nav = &config.nav;

    println!();
    println!("  {}", s.title.apply_to("Folio Replay"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(12)));
    println!();
    println!("  {:<14}{}", s.label.apply_to("Trace"), s.path.apply_to(path.display()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(format!(
            "{:.0} / {:.0} px",
            trace.layout.viewport_height, trace.layout.document_height
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Sections"),
        s.value.apply_to(config.sections.len())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Steps"),
        s.value.apply_to(trace.steps.len())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Thresholds"),
        s.value.apply_to(format!(
            "hysteresis {:.0}, margin {:.0}, bottom {:.0}",
            nav.hysteresis_threshold, nav.section_margin, nav.bottom_margin
        ))
    );
    println!();
}

pub fn print_frames(frames: &[&ReplayFrame]) {
    let s = Styles::new();

    println!(
        "{:>5}  {:<26}  {:>8}  {:<12}  {:<12}  {}",
        "Step", "Event", "Offset", "Active", "Reason", "Flags"
    );
    println!("{}", "-".repeat(80));

    let mut previous_active: Option<&str> = None;
    for frame in frames {
        let step = frame
            .step
            .map(|i| (i + 1).to_string())
            .unwrap_or_else(|| "-".into());
        let active = format!("{:<12}", frame.state.active_section);
        let active = if previous_active != Some(frame.state.active_section.as_str()) {
            s.active.apply_to(active).to_string()
        } else {
            active
        };
        previous_active = Some(frame.state.active_section.as_str());

        println!(
            "{:>5}  {:<26}  {:>8.1}  {}  {:<12}  {} {} {}",
            step,
            frame.event.to_string(),
            frame.offset,
            active,
            frame.reason.to_string(),
            flag(&s, "scrolled", frame.state.scrolled),
            flag(&s, "hidden", frame.state.hidden),
            flag(&s, "menu", frame.state.mobile_menu_open),
        );
    }
}

fn flag(s: &Styles, name: &str, on: bool) -> String {
    if on {
        s.flag_on.apply_to(name).to_string()
    } else {
        s.flag_off.apply_to("\u{00b7}".repeat(name.len())).to_string()
    }
}

pub fn print_replay_summary(replay: &Replay) {
    let s = Styles::new();

    let Some(last) = replay.frames.last() else {
        return;
    };
    let changes = replay.section_changes().count();
    let hidden_frames = replay.frames.iter().filter(|f| f.state.hidden).count();

    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Frames"),
        s.value.apply_to(replay.frames.len())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Section hops"),
        s.value.apply_to(changes)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Bar hidden"),
        s.value.apply_to(format!("{hidden_frames} frame(s)"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Final"),
        s.active.apply_to(&last.state.active_section)
    );
    println!();
}
