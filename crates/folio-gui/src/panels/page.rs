use folio_core::anchor::SectionAnchor;
use folio_core::geometry::StaticGeometry;
use tracing::info;

use crate::app::FolioApp;
use crate::content::section_content;
use crate::panels::navbar;

/// Minimum height of a section block, as a fraction of the viewport.
const SECTION_MIN_HEIGHT_FRACTION: f32 = 0.9;
const SECTION_PADDING: f32 = 96.0;

pub fn show(ctx: &egui::Context, app: &mut FolioApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(egui::Color32::from_gray(24)))
        .show(ctx, |ui| {
            let page_rect = ui.max_rect();
            let anchors = app.registry.anchors().to_vec();
            let request = app
                .nav
                .as_ref()
                .and_then(|nav| nav.controller_mut().take_scroll_request());

            let mut measured = StaticGeometry::default();
            let min_height = page_rect.height() * SECTION_MIN_HEIGHT_FRACTION;

            let output = egui::ScrollArea::vertical()
                .id_salt("page")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let origin = ui.min_rect().top();
                    for (i, anchor) in anchors.iter().enumerate() {
                        let top = ui.cursor().top() - origin;
                        measured.sections.insert(anchor.id.clone(), top);

                        let rect = section_block(ui, anchor, i, min_height);
                        if request.as_ref().is_some_and(|r| r.section_id == anchor.id) {
                            ui.scroll_to_rect(rect, Some(egui::Align::TOP));
                        }
                    }
                });

            measured.scroll_offset = output.state.offset.y;
            measured.viewport_height = output.inner_rect.height();
            measured.document_height = output.content_size.y;

            let moved = app.page.update(measured);
            if app.nav.is_none() {
                app.mount_nav();
            } else if moved {
                app.events.emit(&app.page.geometry);
            }

            let Some(active) = app.nav.as_ref().map(|nav| nav.state().active_section) else {
                return;
            };
            if app.ui_state.note_active_section(&active) {
                info!(section = %active, "Active section");
            }

            navbar::show(ctx, app, output.inner_rect);
        });
}

/// Draw one section and return its rect in screen space.
fn section_block(ui: &mut egui::Ui, anchor: &SectionAnchor, index: usize, min_height: f32) -> egui::Rect {
    let fill = if index % 2 == 0 {
        egui::Color32::from_gray(24)
    } else {
        egui::Color32::from_gray(32)
    };

    let response = egui::Frame::new()
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(32, 0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(min_height);
            ui.add_space(SECTION_PADDING);
            ui.vertical_centered(|ui| match section_content(&anchor.id) {
                Some(content) => {
                    ui.heading(egui::RichText::new(content.heading).size(36.0).strong());
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(content.tagline)
                            .size(18.0)
                            .color(egui::Color32::from_gray(170)),
                    );
                    ui.add_space(24.0);
                    for item in content.items {
                        ui.label(egui::RichText::new(*item).size(16.0));
                        ui.add_space(6.0);
                    }
                }
                None => {
                    ui.heading(egui::RichText::new(&anchor.label).size(36.0).strong());
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(format!("Section {} coming soon", anchor.label))
                            .color(egui::Color32::from_gray(140)),
                    );
                }
            });
            ui.add_space(SECTION_PADDING);
        });
    response.response.rect
}
