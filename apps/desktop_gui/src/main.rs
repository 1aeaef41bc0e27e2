mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::config::{load_settings, normalize_api_url};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{DashboardApp, StartupConfig, APP_TITLE};

#[derive(Parser, Debug)]
#[command(about = "Desktop dashboard for a remote user collection")]
struct Args {
    /// Collection endpoint; overrides dashboard.toml and environment settings.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(raw) = args.api_url.as_deref() {
        match normalize_api_url(raw) {
            Ok(url) => settings.api_url = url,
            Err(err) => tracing::warn!("ignoring --api-url '{raw}': {err:#}"),
        }
    }
    tracing::info!(
        api_url = %settings.api_url,
        page_size = %settings.page_size,
        id_assignment = %settings.id_assignment,
        "starting dashboard"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings.api_url.clone());

    let startup = StartupConfig::from(&settings);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([760.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(cmd_tx, ui_rx, startup)))),
    )
}
