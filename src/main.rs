#![deny(missing_docs)]

//! Entry point for the egui-based fraud dashboard.
use eframe::egui;
use fraudlens::config;
use fraudlens::egui_app::controller::EguiController;
use fraudlens::egui_app::ui::EguiApp;
use fraudlens::logging;
use fraudlens::service::FraudService;

const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(900.0, 640.0);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let service = config::load_or_default()
        .map_err(|err| format!("Failed to load config: {err}"))
        .and_then(|config| {
            tracing::info!(
                model = %config.model_path.display(),
                log = %config.log_path.display(),
                "Starting dashboard"
            );
            FraudService::from_config(&config).map_err(|err| format!("Failed to load model: {err}"))
        })
        .inspect_err(|message| tracing::error!("{message}"));

    let viewport = egui::ViewportBuilder::default()
        .with_title("Insurance Fraud Detection")
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1100.0, 860.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Fraudlens",
        native_options,
        Box::new(move |_cc| match service {
            Ok(service) => Ok(Box::new(EguiApp::new(EguiController::new(service)))),
            Err(message) => Ok(Box::new(LaunchError { message })),
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start the dashboard");
                ui.label(&self.message);
            });
        });
    }
}
