//! slowPay — a floating salary ticker for the Slow Computer
//!
//! Shows how much of today's wage has been earned so far and how long until
//! clock-out. Dock it against a screen edge and it slides out of the way.

mod app;
mod args;

use anyhow::{anyhow, Result};
use app::{SlowPayApp, WINDOW_SIZE};
use args::Args;
use clap::Parser;
use eframe::NativeOptions;
use paycore::clock::LocalClock;
use paycore::store::{data_dir, JsonFileStore};
use tracing::{error, info};

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = paycore::logging::enable_logging(&data_dir(), args.log, args.log_console) {
        eprintln!("[slowpay] logging disabled: {e}");
    }

    let store = match &args.settings {
        Some(path) => JsonFileStore::open(path),
        None => JsonFileStore::open_default(),
    };
    info!(settings = %store.path().display(), "starting");
    let auto_hide = args.auto_hide();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false)
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top()
            .with_title("slowPay"),
        ..Default::default()
    };

    eframe::run_native(
        "slowPay",
        options,
        Box::new(move |cc| {
            paycore::PayTheme::default().apply(&cc.egui_ctx);
            Box::new(SlowPayApp::new(store, Box::new(LocalClock), auto_hide))
        }),
    )
    .map_err(|e| anyhow!("{e}"))
    .inspect_err(|e| error!("event loop failed: {e}"))
}
