//! Command-line interface definitions for zonetile.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;
use tile_geom::{Rect, Screen};

/// Command-line interface for the `zonetile` binary.
#[derive(Parser, Debug)]
#[command(
    name = "zonetile",
    about = "Inspect zone layouts and replay drag-to-snap sessions",
    version
)]
pub struct Cli {
    /// Logging controls shared across zonetile binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// Settings file (RON).
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Layout store (JSON). Built-in layouts are used when absent.
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the built-in layouts.
    Presets(PresetsArgs),
    /// List the layouts in the store and the per-display selection.
    Layouts,
    /// Print the zones a layout produces on a screen.
    Zones(ZonesArgs),
    /// Pick the zone that best fits a window.
    Best(BestArgs),
    /// Replay a scripted drag session against recording doubles.
    Replay(ReplayArgs),
}

/// Arguments for `presets`.
#[derive(Args, Debug, Clone)]
pub struct PresetsArgs {
    /// Print the layouts as JSON.
    #[arg(long)]
    pub json: bool,
}

/// A single primary screen described on the command line.
#[derive(Args, Debug, Clone)]
pub struct ScreenArgs {
    /// Screen size as WIDTH,HEIGHT.
    #[arg(long, default_value = "1920,1080", value_parser = parse_size)]
    pub screen: (f64, f64),

    /// Height reserved at the top of the screen (menu bar).
    #[arg(long, default_value_t = 25.0)]
    pub menu_bar: f64,
}

impl ScreenArgs {
    /// The described screen.
    pub fn screen(&self) -> Screen {
        let (w, h) = self.screen;
        let visible_h = (h - self.menu_bar).max(0.0);
        Screen::primary(Rect::new(0.0, 0.0, w, h), Rect::new(0.0, 0.0, w, visible_h))
    }
}

/// Arguments for `zones`.
#[derive(Args, Debug, Clone)]
pub struct ZonesArgs {
    /// Layout id or name; defaults to the layout selected for display 1.
    #[arg(long)]
    pub layout: Option<String>,

    /// Screen geometry.
    #[command(flatten)]
    pub screen: ScreenArgs,
}

/// Arguments for `best`.
#[derive(Args, Debug, Clone)]
pub struct BestArgs {
    /// Window frame as X,Y,W,H in global top-left coordinates.
    #[arg(long, value_parser = parse_rect)]
    pub window: Rect,

    /// Layout id or name; defaults to the layout selected for display 1.
    #[arg(long)]
    pub layout: Option<String>,

    /// Screen geometry.
    #[command(flatten)]
    pub screen: ScreenArgs,
}

/// Arguments for `replay`.
#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Script file (RON).
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Screen geometry, used when the script names no displays.
    #[command(flatten)]
    pub screen: ScreenArgs,
}

/// Parse a comma-separated list of exactly `n` numbers.
fn parse_numbers(s: &str, n: usize) -> Result<Vec<f64>, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    if parts.len() != n {
        return Err(format!("expected {n} comma-separated numbers, got {}", parts.len()));
    }
    Ok(parts)
}

/// Parse `WIDTH,HEIGHT`.
pub fn parse_size(s: &str) -> Result<(f64, f64), String> {
    let v = parse_numbers(s, 2)?;
    Ok((v[0], v[1]))
}

/// Parse `X,Y,W,H`.
pub fn parse_rect(s: &str) -> Result<Rect, String> {
    let v = parse_numbers(s, 4)?;
    Ok(Rect::new(v[0], v[1], v[2], v[3]))
}
