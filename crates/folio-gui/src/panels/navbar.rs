use folio_core::consts::MOBILE_BREAKPOINT;
use tracing::debug;

use crate::app::FolioApp;

const NAVBAR_HEIGHT: f32 = 44.0;
const NAVBAR_MARGIN: f32 = 12.0;
const NAVBAR_MAX_WIDTH: f32 = 860.0;
const NAVBAR_SLIDE_SECS: f32 = 0.3;
const MENU_GAP: f32 = 8.0;

enum NavAction {
    Goto(String),
    ToggleMenu,
}

/// Floating navigation bar over the page, driven by the controller state.
pub fn show(ctx: &egui::Context, app: &mut FolioApp, page_rect: egui::Rect) {
    let Some(nav) = &app.nav else {
        return;
    };
    let state = nav.state();
    let anchors = app.registry.anchors().to_vec();
    let compact = page_rect.width() < MOBILE_BREAKPOINT;

    // 0.0 = fully shown, 1.0 = slid off the top.
    let slide = ctx.animate_bool_with_time(
        egui::Id::new("navbar_hidden"),
        state.hidden,
        NAVBAR_SLIDE_SECS,
    );
    let width = (page_rect.width() - 2.0 * NAVBAR_MARGIN).clamp(0.0, NAVBAR_MAX_WIDTH);
    let left = page_rect.center().x - width / 2.0;
    let top = page_rect.top() + NAVBAR_MARGIN - (NAVBAR_HEIGHT + 2.0 * NAVBAR_MARGIN) * slide;

    let mut action = None;

    egui::Area::new(egui::Id::new("navbar"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(left, top))
        .show(ctx, |ui| {
            ui.set_clip_rect(page_rect);
            bar_frame(ui, state.scrolled).show(ui, |ui| {
                ui.set_width(width - 32.0);
                ui.horizontal(|ui| {
                    let logo = egui::RichText::new("</>").size(20.0).strong();
                    if ui.add(egui::Button::new(logo).frame(false)).clicked() {
                        action = Some(NavAction::Goto(anchors[0].id.clone()));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if compact {
                            let icon = if state.mobile_menu_open { "\u{2715}" } else { "\u{2630}" };
                            if ui
                                .add(egui::Button::new(egui::RichText::new(icon).size(18.0)).frame(false))
                                .on_hover_text("Toggle menu")
                                .clicked()
                            {
                                action = Some(NavAction::ToggleMenu);
                            }
                        } else {
                            for anchor in anchors.iter().rev() {
                                let active = anchor.id == state.active_section;
                                if ui.selectable_label(active, &anchor.label).clicked() {
                                    action = Some(NavAction::Goto(anchor.id.clone()));
                                }
                            }
                        }
                    });
                });
            });
        });

    if compact && state.mobile_menu_visible() {
        let menu_top = top + NAVBAR_HEIGHT + MENU_GAP + NAVBAR_MARGIN;
        egui::Area::new(egui::Id::new("navbar_mobile_menu"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(left, menu_top))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_width(width - 16.0);
                    for anchor in &anchors {
                        let active = anchor.id == state.active_section;
                        if ui.selectable_label(active, &anchor.label).clicked() {
                            action = Some(NavAction::Goto(anchor.id.clone()));
                        }
                    }
                });
            });
    }

    match action {
        Some(NavAction::Goto(id)) => {
            let accepted = nav.controller_mut().scroll_to_section(&id, &app.page.geometry);
            debug!(section = %id, accepted, "Navigation clicked");
            ctx.request_repaint();
        }
        Some(NavAction::ToggleMenu) => {
            nav.controller_mut().toggle_mobile_menu();
        }
        None => {}
    }
}

fn bar_frame(ui: &egui::Ui, scrolled: bool) -> egui::Frame {
    let visuals = ui.visuals();
    let frame = egui::Frame::new()
        .corner_radius(NAVBAR_HEIGHT / 2.0)
        .inner_margin(egui::Margin::symmetric(16, 8))
        .stroke(visuals.widgets.noninteractive.bg_stroke);
    if scrolled {
        frame
            .fill(visuals.panel_fill.gamma_multiply(0.95))
            .shadow(visuals.popup_shadow)
    } else {
        frame.fill(visuals.panel_fill.gamma_multiply(0.75))
    }
}
