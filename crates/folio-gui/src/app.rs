use std::sync::mpsc;

use folio_core::anchor::SectionRegistry;
use folio_core::config::FolioConfig;
use folio_core::events::{MountedNav, ScrollEvents};
use tracing::{info, warn};

use crate::messages::AppMessage;
use crate::panels;
use crate::states::{PageState, UIState};

pub struct FolioApp {
    pub msg_tx: mpsc::Sender<AppMessage>,
    pub msg_rx: mpsc::Receiver<AppMessage>,
    pub config: FolioConfig,
    pub registry: SectionRegistry,
    pub events: ScrollEvents,
    /// Mounted once the page has been measured.
    pub nav: Option<MountedNav>,
    pub page: PageState,
    pub ui_state: UIState,
    pub show_about: bool,
}

impl FolioApp {
    pub fn new() -> folio_core::error::Result<Self> {
        let (msg_tx, msg_rx) = mpsc::channel();
        let config = FolioConfig::default();
        config.nav.validate()?;
        let registry = config.registry()?;

        Ok(Self {
            msg_tx,
            msg_rx,
            config,
            registry,
            events: ScrollEvents::new(),
            nav: None,
            page: PageState::default(),
            ui_state: UIState::default(),
            show_about: false,
        })
    }

    /// Replace the config and remount navigation. The previous controller's
    /// scroll subscription is released when it is dropped here. An invalid
    /// config leaves the current one in place.
    pub fn apply_config(&mut self, config: FolioConfig) -> folio_core::error::Result<()> {
        config.nav.validate()?;
        self.registry = config.registry()?;
        self.config = config;
        self.nav = None;
        self.ui_state.last_active = None;
        if self.page.is_measured() {
            self.mount_nav();
        }
        Ok(())
    }

    /// Attach a controller to the measured page.
    pub fn mount_nav(&mut self) {
        match MountedNav::mount(
            &self.events,
            self.registry.clone(),
            self.config.nav.clone(),
            &self.page.geometry,
        ) {
            Ok(nav) => self.nav = Some(nav),
            Err(e) => {
                warn!(error = %e, "Failed to mount navigation");
                self.ui_state.add_log(format!("ERROR: {e}"));
            }
        }
    }

    /// Drain all pending results from dialog threads.
    fn poll_messages(&mut self) {
        while let Ok(message) = self.msg_rx.try_recv() {
            match message {
                AppMessage::ConfigImported { path, config } => match self.apply_config(config) {
                    Ok(()) => {
                        info!(path = %path.display(), "Config imported");
                        self.ui_state.add_log(format!("Config imported: {}", path.display()));
                    }
                    Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
                },
                AppMessage::ConfigExported { path } => {
                    self.ui_state.add_log(format!("Config exported: {}", path.display()));
                }
                AppMessage::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    pub fn send_message(&self, message: AppMessage) {
        let _ = self.msg_tx.send(message);
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_messages();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::page::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Folio")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Folio");
                        ui.label("Portfolio with scroll-tracked navigation");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
