use eframe::{NativeOptions, egui};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use quickgen::app::QuickGenApp;
use quickgen::settings::AppSettings;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quickgen=info,wgpu=warn,winit=warn"));
    fmt().with_env_filter(filter).with_target(true).init();
}

fn main() -> eframe::Result<()> {
    init_tracing();

    let settings = AppSettings::load();
    info!(
        length = settings.default_length,
        classes = settings.default_classes.len(),
        "starting QuickGen"
    );

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "QuickGen",
        native_options,
        Box::new(move |_cc: &eframe::CreationContext| Ok(Box::new(QuickGenApp::new(settings)))),
    )
}
