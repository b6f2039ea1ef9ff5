//! overlay-scene - replay a scene file onto a headless overlay

mod logging;
mod report;

use anyhow::Context;
use clap::Parser;
use overlay::{DrawList, Overlay, SceneConfig, TargetWindow};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "overlay-scene", about = "Validate and replay an overlay scene")]
struct Args {
    /// Scene file (JSON)
    scene: PathBuf,

    /// Target main window handle, decimal or 0x-prefixed hex
    #[arg(long, value_parser = parse_handle, default_value = "0")]
    hwnd: isize,

    /// Target process id
    #[arg(long, default_value_t = 0)]
    pid: u32,

    /// Override the scene's borderless setting
    #[arg(long)]
    borderless: Option<bool>,

    /// Enable debug logging (honours RUST_LOG)
    #[arg(long)]
    debug: bool,
}

fn parse_handle(s: &str) -> Result<isize, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => isize::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid window handle {s:?}: {e}"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.debug);

    let scene = SceneConfig::load(&args.scene)
        .with_context(|| format!("failed to load scene {}", args.scene.display()))?;

    let target = TargetWindow::new(args.pid, args.hwnd);
    let borderless = args.borderless.unwrap_or(scene.borderless);

    // Keep our own handle so the draw list stays readable after a lock
    let list = Arc::new(Mutex::new(DrawList::new(target, borderless)));
    let mut overlay = Overlay::new(target, list.clone());

    scene
        .apply(&mut overlay)
        .with_context(|| format!("failed to replay scene {}", args.scene.display()))?;

    let summary = report::render(&list.lock(), overlay.is_locked());
    print!("{summary}");

    info!(pid = target.pid, hwnd = target.hwnd, borderless, "done");
    Ok(())
}
