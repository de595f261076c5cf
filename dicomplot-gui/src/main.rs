//! dicomplot: interactive spot map viewer for DICOM RT Ion Plans.

mod app;
mod ui;
mod util;
mod viewer;

use std::path::PathBuf;

use anyhow::Context;
use app::DicomplotApp;
use clap::{ArgAction, Parser};
use dicomplot_core::PlanShape;
use eframe::egui;
use log::{info, LevelFilter};

/// Plot DICOM proton therapy treatment plans.
#[derive(Parser, Debug)]
#[command(name = "dicomplot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input RT Ion Plan file
    inputfile: PathBuf,

    /// Increase output verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbosity: u8,
}

/// Log level for a `-v` count: warnings by default, info with any `-v`.
fn log_level(verbosity: u8) -> LevelFilter {
    if verbosity == 0 {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(log_level(cli.verbosity))
        .init();

    let plan = dicomplot_io::read_plan(&cli.inputfile)
        .with_context(|| format!("failed to load {}", cli.inputfile.display()))?;
    let app = DicomplotApp::new(plan, &cli.inputfile);
    info!(
        "Loaded {} fields ({:?} layers, {} spots), max weight {}",
        app.plan.field_count(),
        app.plan.layer_counts(),
        app.plan.spot_count(),
        app.scale.max()
    );

    let title = format!("dicomplot - {}", app.plan_name());
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.as_str())
            .with_inner_size([1100.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| {
            ui::theme::configure_style(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
