mod app;
mod event;
mod screens;
mod storage;
mod tasks;
mod theme;
mod ui;

use app::MochaApp;
use eframe::egui;
use std::sync::mpsc;
use storage::{FileSlotStorage, StorageClient};
use theme::Theme;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (tx, rx) = mpsc::channel();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("mocha-storage")
        .build()?;

    let storage = StorageClient::new(
        FileSlotStorage::default_location(),
        runtime.handle().clone(),
        tx.clone(),
    );

    let app = MochaApp::new(rx, storage);
    let _runtime = runtime;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([360.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Mocha",
        native_options,
        Box::new(move |creation_context| {
            Theme::default().apply_visuals(&creation_context.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
