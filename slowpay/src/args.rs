use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use paycore::AutoHideConfig;
use tracing::level_filters::LevelFilter;

/// A floating salary ticker that docks to the screen edge
#[derive(Parser, Debug)]
#[command(name = "slowpay", version)]
pub struct Args {
    /// Settings file. Defaults to the per-user config directory.
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Also print logs to stdout
    #[arg(long = "log-console")]
    pub log_console: bool,
    #[arg(long = "log-filter")]
    pub log: Option<LevelFilter>,
    /// Pixels within which a dropped window snaps to an edge
    #[arg(long)]
    pub snap_threshold: Option<f32>,
    /// Pixels left visible while hidden
    #[arg(long)]
    pub margin: Option<f32>,
    #[arg(long = "hide-delay-ms")]
    pub hide_delay_ms: Option<u64>,
    #[arg(long = "animation-ms")]
    pub animation_ms: Option<u64>,
}

impl Args {
    pub fn auto_hide(&self) -> AutoHideConfig {
        let defaults = AutoHideConfig::default();
        AutoHideConfig {
            margin: self.margin.unwrap_or(defaults.margin).max(1.0),
            snap_threshold: self.snap_threshold.unwrap_or(defaults.snap_threshold).max(0.0),
            animation: self.animation_ms.map_or(defaults.animation, Duration::from_millis),
            hide_delay: self.hide_delay_ms.map_or(defaults.hide_delay, Duration::from_millis),
            poll_interval: defaults.poll_interval,
        }
    }
}
