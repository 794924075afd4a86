// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod align;
pub mod background_image;
pub mod edit_types;
pub mod events;
pub mod mouse;
pub mod outline;
pub mod preview;
pub mod segment_view;
pub mod session;
pub mod undo;
pub mod viewport;

pub use align::{AutoAlign, Axis};
pub use background_image::{BackgroundImage, OverlaySizing};
pub use edit_types::EditCommand;
pub use events::{Emitter, EventHandlers, OutlineEventKind, OutlineEventPayload};
pub use mouse::{MouseDelegate, MouseEvent, ViewEventKind};
pub use outline::{Outline, OutlineOptions, OutlineSpec, PartialOutlineOptions};
pub use session::{Palette, Session};
pub use undo::UndoManager;
pub use viewport::ViewPort;
