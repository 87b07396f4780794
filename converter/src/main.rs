//#![deny(warnings)]

use anyhow::Context;
use clap::Parser;
use log::info;
use meshconv::conversion::pipeline::{ConversionTargets, convert_file};
use meshconv::config::settings::{ConversionSettings, ExportFormat};
use std::path::PathBuf;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
enum Target {
    Collision,
    DisplayList,
    #[default]
    All,
}

impl From<Target> for ConversionTargets {
    fn from(target: Target) -> Self {
        match target {
            Target::Collision => ConversionTargets { collision: true, display_lists: false },
            Target::DisplayList => ConversionTargets { collision: false, display_lists: true },
            Target::All => ConversionTargets::ALL,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "meshconv", about = "Converts OBJ scenes into Fast3D display lists and SM64 collision data")]
struct Arguments {
    /// Source OBJ scene.
    source: PathBuf,

    /// Output folder; its name prefixes every emitted label.
    output: PathBuf,

    /// JSON settings file; flags below override its values.
    #[arg(long)]
    settings: Option<PathBuf>,

    #[arg(long)]
    scale: Option<i16>,

    #[arg(long)]
    buffer_size: Option<usize>,

    /// Emit `model.inc.c` instead of `model.s`.
    #[arg(long)]
    export_c: bool,

    #[arg(long)]
    two_cycle: bool,

    #[arg(long, default_value = "all", value_enum)]
    target: Target,
}

impl Arguments {
    fn settings(&self) -> anyhow::Result<ConversionSettings> {
        let mut settings = match &self.settings {
            Some(path) => ConversionSettings::load(path).with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => ConversionSettings::default(),
        };
        if let Some(scale) = self.scale {
            settings.scale = scale;
        }
        if let Some(buffer_size) = self.buffer_size {
            settings.buffer_size = buffer_size;
        }
        if self.export_c {
            settings.export_format = ExportFormat::C;
        }
        settings.two_cycle |= self.two_cycle;
        Ok(settings)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let arguments = Arguments::parse();
    let settings = arguments.settings()?;

    let report = convert_file(&arguments.source, &arguments.output, &settings, arguments.target.into())
        .with_context(|| format!("conversion of {} failed", arguments.source.display()))?;

    for file in &report.written_files {
        info!("wrote {}", file.display());
    }
    info!(
        "{}: {} collision vertices ({} merged), {} vertex buffers, {} layers",
        report.asset,
        report.collision_vertices,
        report.merged_vertices,
        report.vertex_buffers,
        report.layers.len()
    );
    Ok(())
}
