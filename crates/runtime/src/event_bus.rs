use std::collections::VecDeque;

use foundation::time::Time;

use crate::frame::Frame;

/// Structured trace record, stamped with the frame that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub frame_index: u64,
    pub time: Time,
    pub kind: &'static str,
    pub message: String,
}

/// Bounded trace of recent events; the oldest records are dropped first.
#[derive(Debug)]
pub struct EventBus {
    events: VecDeque<Event>,
    limit: usize,
}

impl EventBus {
    pub const DEFAULT_LIMIT: usize = 256;

    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            events: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    pub fn emit(&mut self, frame: Frame, kind: &'static str, message: impl Into<String>) {
        if self.events.len() == self.limit {
            self.events.pop_front();
        }
        self.events.push_back(Event {
            frame_index: frame.index,
            time: frame.time,
            kind,
            message: message.into(),
        });
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Number of retained events of `kind`.
    pub fn count(&self, kind: &str) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    pub fn drain(&mut self) -> Vec<Event> {
        self.events.drain(..).collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
