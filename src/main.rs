//! WasteWise - waste prediction dashboard, route map and image classifier.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use wastewise as app;

use app::AppError;
use app::config::{AppConfig, ConfigLoadResult};
use app::models::Page;
use app::ui::MainApp;

/// WasteWise dashboard.
#[derive(Parser)]
#[command(name = "wastewise")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Explicit config file path
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,

    /// Page to open at startup ("Dashboard", "Map View", "Image Classifier")
    #[arg(long, value_name = "NAME")]
    page: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match (cli.config, cli.dev) {
        (Some(path), _) => path,
        (None, true) => PathBuf::from("config.toml"),
        (None, false) => AppConfig::default_path(),
    };

    let load_result = AppConfig::try_load(&config_path);
    let config = match &load_result {
        ConfigLoadResult::Loaded(config) => config.clone(),
        ConfigLoadResult::Missing | ConfigLoadResult::Invalid(_) => AppConfig::default(),
    };
    // One-off override, never written back to the config file
    let start_page = config.resolve_start_page(cli.page.as_deref());

    // Initialize logging
    let _log_guard = app::logging::init(&config.logging).context("failed to initialize logging")?;

    tracing::info!("WasteWise starting...");
    tracing::info!("Config path: {:?}", config_path);

    match load_result {
        ConfigLoadResult::Loaded(_) => tracing::info!("Config loaded successfully"),
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, writing defaults");
            if let Err(e) = config.save(&config_path) {
                tracing::warn!("Could not write default config: {}", e);
            }
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid, using defaults: {}", e);
        }
    }

    // Runtime for classification timers
    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;

    run_main_app(config, start_page, rt)?;

    tracing::info!("WasteWise closed");
    Ok(())
}

/// Run the main application window.
fn run_main_app(config: AppConfig, start_page: Page, rt: tokio::runtime::Runtime) -> app::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("WasteWise")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([800.0, 600.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "WasteWise",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            cc.egui_ctx.set_visuals(egui::Visuals::dark());

            Ok(Box::new(MainApp::new(config, start_page, rt)))
        }),
    )
    .map_err(|e| AppError::gui(e.to_string()))
}
