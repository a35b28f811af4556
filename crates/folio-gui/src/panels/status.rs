use crate::app::FolioApp;

pub fn show(ctx: &egui::Context, app: &mut FolioApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .id_salt("status_log")
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        let Some(nav) = &app.nav else {
            return;
        };
        let state = nav.state();
        let active = nav.controller().active_anchor().label.clone();
        let geometry = &app.page.geometry;
        ui.horizontal(|ui| {
            ui.label(format!("Offset: {:.0}", geometry.scroll_offset));
            ui.separator();
            ui.label(format!(
                "Page: {:.0}/{:.0}",
                geometry.viewport_height, geometry.document_height
            ));
            ui.separator();
            ui.label(format!("Active: {active}"));
            ui.separator();
            flag(ui, "scrolled", state.scrolled);
            flag(ui, "hidden", state.hidden);
            flag(ui, "menu", state.mobile_menu_open);
        });
    });
}

fn flag(ui: &mut egui::Ui, name: &str, on: bool) {
    let color = if on {
        ui.visuals().warn_fg_color
    } else {
        ui.visuals().weak_text_color()
    };
    ui.colored_label(color, name);
}
