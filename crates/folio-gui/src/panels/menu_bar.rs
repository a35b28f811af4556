use std::path::Path;

use anyhow::Context;
use folio_core::config::FolioConfig;

use crate::app::FolioApp;
use crate::messages::AppMessage;

pub fn show(ctx: &egui::Context, app: &mut FolioApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Back to Top").clicked() {
                    ui.close();
                    back_to_top(app);
                }

                if ui.button("Reset Defaults").clicked() {
                    ui.close();
                    match app.apply_config(FolioConfig::default()) {
                        Ok(()) => app.ui_state.add_log("Config reset to defaults".into()),
                        Err(e) => app.ui_state.add_log(format!("ERROR: {e}")),
                    }
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Home)) {
            back_to_top(app);
        }
    });
}

fn back_to_top(app: &mut FolioApp) {
    if let Some(nav) = &app.nav {
        let first = &app.registry.first().id;
        nav.controller_mut().scroll_to_section(first, &app.page.geometry);
    }
}

fn import_config(app: &mut FolioApp) {
    let msg_tx = app.msg_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let message = match read_config(&path) {
            Ok(config) => AppMessage::ConfigImported { path, config },
            Err(e) => AppMessage::Error {
                message: format!("{e:#}"),
            },
        };
        let _ = msg_tx.send(message);
    });
}

fn export_config(app: &mut FolioApp) {
    let msg_tx = app.msg_tx.clone();
    let config = app.config.clone();

    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("folio.toml")
            .save_file()
        else {
            return;
        };
        let message = match write_config(&path, &config) {
            Ok(()) => AppMessage::ConfigExported { path },
            Err(e) => AppMessage::Error {
                message: format!("{e:#}"),
            },
        };
        let _ = msg_tx.send(message);
    });
}

fn read_config(path: &Path) -> anyhow::Result<FolioConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
}

fn write_config(path: &Path, config: &FolioConfig) -> anyhow::Result<()> {
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to export config to {}", path.display()))
}
