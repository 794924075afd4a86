// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Outline events and their subscribers.
//!
//! Every outline mutation is published as a typed event carrying the
//! post-mutation geometry. Listeners subscribe to one kind or to all of them
//! (wildcard). Subscriptions are dropped wholesale on deactivation.

use crate::model::OutlineData;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Kinds of events an outline emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutlineEventKind {
    AddDot,
    RemoveDot,
    Drag,
    Close,
    Open,
    /// Fired after every other event
    Change,
}

impl OutlineEventKind {
    pub const ALL: [OutlineEventKind; 6] = [
        OutlineEventKind::AddDot,
        OutlineEventKind::RemoveDot,
        OutlineEventKind::Drag,
        OutlineEventKind::Close,
        OutlineEventKind::Open,
        OutlineEventKind::Change,
    ];

    /// Name used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            OutlineEventKind::AddDot => "addDot",
            OutlineEventKind::RemoveDot => "removeDot",
            OutlineEventKind::Drag => "drag",
            OutlineEventKind::Close => "close",
            OutlineEventKind::Open => "open",
            OutlineEventKind::Change => "change",
        }
    }
}

impl fmt::Display for OutlineEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data delivered with every outline event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEventPayload {
    pub path: OutlineData,
}

/// Handler for a single event kind
pub type EventHandler = Rc<dyn Fn(&OutlineEventPayload)>;

/// Handler receiving every event kind
pub type AnyEventHandler = Rc<dyn Fn(OutlineEventKind, &OutlineEventPayload)>;

/// Hooks handed to an outline at construction, subscribed on every activation
#[derive(Clone, Default)]
pub struct EventHandlers {
    pub all: Option<AnyEventHandler>,
    pub change: Option<EventHandler>,
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandlers")
            .field("all", &self.all.is_some())
            .field("change", &self.change.is_some())
            .finish()
    }
}

/// Publish/subscribe hub owned by one outline
#[derive(Clone, Default)]
pub struct Emitter {
    handlers: Vec<(OutlineEventKind, EventHandler)>,
    any: Vec<AnyEventHandler>,
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("handlers", &self.handlers.len())
            .field("any", &self.any.len())
            .finish()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to one kind of event
    pub fn on(&mut self, kind: OutlineEventKind, handler: impl Fn(&OutlineEventPayload) + 'static) {
        self.handlers.push((kind, Rc::new(handler)));
    }

    /// Subscribe a shared handler to one kind of event
    pub fn on_shared(&mut self, kind: OutlineEventKind, handler: EventHandler) {
        self.handlers.push((kind, handler));
    }

    /// Subscribe to every event
    pub fn on_any(&mut self, handler: impl Fn(OutlineEventKind, &OutlineEventPayload) + 'static) {
        self.any.push(Rc::new(handler));
    }

    pub fn on_any_shared(&mut self, handler: AnyEventHandler) {
        self.any.push(handler);
    }

    /// Drop every subscription
    pub fn clear(&mut self) {
        self.handlers.clear();
        self.any.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty() && self.any.is_empty()
    }

    /// Deliver `payload` to the kind's handlers, then to wildcard handlers
    pub fn emit(&self, kind: OutlineEventKind, payload: &OutlineEventPayload) {
        for (_, handler) in self.handlers.iter().filter(|(k, _)| *k == kind) {
            handler(payload);
        }
        for handler in &self.any {
            handler(kind, payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn payload() -> OutlineEventPayload {
        OutlineEventPayload {
            path: OutlineData {
                name: "o1".to_string(),
                edges: vec![[1.0, 2.0]],
            },
        }
    }

    #[test]
    fn kinds_use_camel_case_wire_names() {
        for kind in OutlineEventKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.as_str().to_string()));
        }
        assert_eq!(OutlineEventKind::RemoveDot.to_string(), "removeDot");
    }

    #[test]
    fn handlers_receive_matching_kinds_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = Emitter::new();
        let log = seen.clone();
        emitter.on(OutlineEventKind::Close, move |p| {
            log.borrow_mut().push(format!("close {}", p.path.name))
        });
        let log = seen.clone();
        emitter.on_any(move |kind, _| log.borrow_mut().push(format!("any {kind}")));

        emitter.emit(OutlineEventKind::AddDot, &payload());
        emitter.emit(OutlineEventKind::Close, &payload());

        assert_eq!(*seen.borrow(), vec!["any addDot", "close o1", "any close"]);
    }

    #[test]
    fn clear_removes_all_subscriptions() {
        let calls = Rc::new(RefCell::new(0));
        let mut emitter = Emitter::new();
        let counter = calls.clone();
        emitter.on_any(move |_, _| *counter.borrow_mut() += 1);

        emitter.clear();
        emitter.emit(OutlineEventKind::Change, &payload());

        assert!(emitter.is_empty());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn payload_serializes_as_path_object() {
        let json = serde_json::to_value(payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "path": { "name": "o1", "edges": [[1.0, 2.0]] } })
        );
    }
}
