use eframe::{App, Frame, egui};
use egui::{Color32, RichText};
use rand::rngs::ThreadRng;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::charset::CharacterClass;
use crate::config::{MAX_LENGTH, MIN_LENGTH};
use crate::controller::Controller;
use crate::settings::AppSettings;

/// The main eframe app struct
pub struct QuickGenApp {
    // Owns length, selected classes and the current password
    pub controller: Controller<ThreadRng>,

    // Application settings
    pub settings: AppSettings,
    pub status_msg: String,

    // Clipboard auto-clear
    pub clipboard_copy_time: Option<Instant>,
}

impl QuickGenApp {
    pub fn new(settings: AppSettings) -> Self {
        let controller = Controller::new(settings.initial_config(), rand::rng());
        Self {
            controller,
            settings,
            status_msg: String::new(),
            clipboard_copy_time: None,
        }
    }
}

impl App for QuickGenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Check clipboard auto-clear (using settings)
        if let Some(copy_time) = self.clipboard_copy_time {
            if copy_time.elapsed().as_secs() >= self.settings.clipboard_timeout_u64() {
                ctx.copy_text(String::new());
                self.clipboard_copy_time = None;
                debug!("clipboard cleared");
            } else {
                ctx.request_repaint_after(Duration::from_secs(1));
            }
        }

        // Ctrl+G: regenerate with the current options
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::G)) {
            self.controller.refresh();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_generator_ui(ui);
        });
    }
}

impl QuickGenApp {
    /// Password card: output, length controls, character sets
    pub fn show_generator_ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(
                RichText::new("Generate Password")
                    .size(22.0)
                    .color(Color32::WHITE),
            );
            ui.label("Create a new password using the options below.");
        });
        ui.separator();

        // (1) Password + copy/refresh
        ui.horizontal(|ui| {
            ui.label("Password:");
            ui.monospace(self.controller.state().password());

            let has_password = !self.controller.state().password().is_empty();
            if ui
                .add_enabled(has_password, egui::Button::new("Copy"))
                .clicked()
            {
                self.copy_password(ui.ctx());
            }
            if ui.button("Refresh (Ctrl+G)").clicked() {
                self.controller.refresh();
            }
        });
        ui.add_space(8.0);

        // (2) Length: -, slider, +
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(format!("Length: {}", self.controller.state().length())).strong());
        });
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.controller.can_decrement(), egui::Button::new("-"))
                .clicked()
            {
                self.controller.decrement();
            }

            let mut length = self.controller.state().length();
            if ui
                .add(egui::Slider::new(&mut length, MIN_LENGTH..=MAX_LENGTH).show_value(false))
                .changed()
            {
                self.controller.set_length(length);
            }

            if ui
                .add_enabled(self.controller.can_increment(), egui::Button::new("+"))
                .clicked()
            {
                self.controller.increment();
            }
        });
        ui.add_space(8.0);

        // (3) Character sets
        ui.label(RichText::new("Character Used:").strong());
        ui.label("Select the character sets you want to use.");
        ui.horizontal(|ui| {
            for class in CharacterClass::ALL {
                let mut checked = self.controller.state().classes().contains(&class);
                if ui.checkbox(&mut checked, class.label()).changed() {
                    self.controller.toggle_class(class, checked);
                }
            }
        });
        if let Some(advisory) = self.controller.state().advisory() {
            ui.colored_label(Color32::RED, advisory.to_string());
        }

        ui.separator();
        ui.collapsing("Settings", |ui| {
            let mut seconds = self.settings.clipboard_clear_seconds;
            ui.horizontal(|ui| {
                ui.label("Clear clipboard after:");
                if ui
                    .add(egui::Slider::new(&mut seconds, 10..=120).suffix(" s"))
                    .changed()
                {
                    self.settings.set_clipboard_timeout(seconds);
                }
            });
            if ui.button("Save current options as defaults").clicked() {
                let config = self.controller.state().config().clone();
                self.settings.remember(&config);
                self.save_settings();
            }
            if !self.status_msg.is_empty() {
                ui.label(self.status_msg.as_str());
            }
        });
    }

    fn copy_password(&mut self, ctx: &egui::Context) {
        ctx.copy_text(self.controller.state().password().to_owned());
        self.clipboard_copy_time = Some(Instant::now());
        debug!(
            clear_after = self.settings.clipboard_clear_seconds,
            "password copied"
        );
    }

    fn save_settings(&mut self) {
        match self.settings.save() {
            Ok(()) => {
                info!(length = self.settings.default_length, "defaults saved");
                self.status_msg = "Defaults saved".into();
            }
            Err(err) => {
                warn!(%err, "could not save settings");
                self.status_msg = format!("Could not save settings: {err}");
            }
        }
    }
}
