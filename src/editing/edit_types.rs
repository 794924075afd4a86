// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Reversible outline edits recorded in the undo history

use crate::model::DotId;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// One recorded outline mutation.
///
/// Dot commands keep the dot's position and `DotId`, so a dot brought back
/// by undo or redo is still matched by hit testing afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EditCommand {
    /// A dot was inserted at `index`
    AddDot { index: usize, point: Point, id: DotId },

    /// The dot at `index` was removed
    RemoveDot { index: usize, point: Point, id: DotId },

    /// The path was closed
    Close,

    /// The path was reopened
    Open,
}

impl EditCommand {
    /// The command whose replay undoes this one
    pub fn inverse(&self) -> EditCommand {
        match *self {
            EditCommand::AddDot { index, point, id } => EditCommand::RemoveDot { index, point, id },
            EditCommand::RemoveDot { index, point, id } => EditCommand::AddDot { index, point, id },
            EditCommand::Close => EditCommand::Open,
            EditCommand::Open => EditCommand::Close,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_swaps_add_and_remove() {
        let id = DotId::next();
        let add = EditCommand::AddDot {
            index: 2,
            point: Point::new(1.0, 2.0),
            id,
        };
        assert_eq!(
            add.inverse(),
            EditCommand::RemoveDot {
                index: 2,
                point: Point::new(1.0, 2.0),
                id,
            }
        );
        assert_eq!(add.inverse().inverse(), add);
        assert_eq!(EditCommand::Close.inverse(), EditCommand::Open);
    }

    #[test]
    fn commands_serialize_with_type_tag() {
        let json = serde_json::to_value(EditCommand::Close).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "close" }));

        let id = DotId::next();
        let add: EditCommand = serde_json::from_value(serde_json::json!({
            "type": "addDot",
            "index": 0,
            "point": { "x": 10.0, "y": 20.0 },
            "id": id.raw(),
        }))
        .unwrap();
        assert_eq!(
            add,
            EditCommand::AddDot {
                index: 0,
                point: Point::new(10.0, 20.0),
                id,
            }
        );
    }
}
