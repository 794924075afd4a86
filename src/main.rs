// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Outliner: replay a recorded editing session and print the outlines

use anyhow::{Context, Result, bail};
use outliner::render::MemorySurface;
use outliner::script::{self, Script};
use outliner::{Manager, ManagerOptions};
use std::path::PathBuf;

fn main() -> Result<()> {
    outliner::init_logging();

    let mut args = std::env::args_os().skip(1);
    let Some(script_path) = args.next().map(PathBuf::from) else {
        bail!("Usage: outliner <script.json> [options.toml]");
    };
    let options = match args.next() {
        Some(path) => ManagerOptions::load(&PathBuf::from(path))?,
        None => ManagerOptions::default(),
    };

    let content = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script {:?}", script_path))?;
    let script: Script = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse script {:?}", script_path))?;
    tracing::info!("Replaying {} steps from {}", script.steps.len(), script_path.display());

    let mut manager = Manager::new(MemorySurface::new(script.canvas_size()), options);
    script::run(&mut manager, script.steps)
        .with_context(|| format!("Replay of {:?} failed", script_path))?;

    println!("{}", manager.export_as_string()?);
    Ok(())
}
