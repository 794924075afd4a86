// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Outliner: trace polygonal outlines over a reference image.
//!
//! Outlines are edited through pointer events, snap to each other's dots
//! while being drawn, and every edit can be undone. Everything is drawn
//! onto a [`render::Surface`], so the same editing core runs against a real
//! canvas or the headless [`render::MemorySurface`].

pub mod config;
pub mod editing;
pub mod error;
pub mod grid;
pub mod layers;
pub mod manager;
pub mod model;
pub mod render;
pub mod script;
pub mod settings;
pub mod theme;

pub use config::ManagerOptions;
pub use error::{Error, Result};
pub use manager::{Manager, ManagerEventKind};

/// Install the global tracing subscriber.
///
/// Controlled through `RUST_LOG`; crate logs default to `info`. Calling this
/// more than once leaves the first subscriber in place.
pub fn init_logging() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "outliner=info".parse() {
        filter = filter.add_directive(directive);
    }
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
