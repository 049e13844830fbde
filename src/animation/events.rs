//! Editor events and the listener registry that delivers them.

use serde::Serialize;

use crate::schema::Frame;

/// Which stroke operation changed the current frame's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineChange {
    LineStarted,
    LineAddedTo,
    LineFinished,
}

/// Event emitted by the editor. Frame data is borrowed from the animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent<'a> {
    EnterFrame {
        frame: usize,
    },
    ExitFrame {
        frame: usize,
    },
    FrameInserted {
        frame_index: usize,
    },
    FrameRemoved {
        frame_index: usize,
    },
    AnimDataChanged {
        change: LineChange,
        frame_index: usize,
        frame_data: &'a Frame,
    },
}

impl EditorEvent<'_> {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            EditorEvent::EnterFrame { .. } => "ENTER_FRAME",
            EditorEvent::ExitFrame { .. } => "EXIT_FRAME",
            EditorEvent::FrameInserted { .. } => "FRAME_INSERTED",
            EditorEvent::FrameRemoved { .. } => "FRAME_REMOVED",
            EditorEvent::AnimDataChanged { .. } => "ANIM_DATA_CHANGED",
        }
    }

    /// Owned copy of the event, cloning any frame payload.
    pub fn to_record(&self) -> EventRecord {
        match *self {
            EditorEvent::EnterFrame { frame } => EventRecord::EnterFrame { frame },
            EditorEvent::ExitFrame { frame } => EventRecord::ExitFrame { frame },
            EditorEvent::FrameInserted { frame_index } => {
                EventRecord::FrameInserted { frame_index }
            }
            EditorEvent::FrameRemoved { frame_index } => EventRecord::FrameRemoved { frame_index },
            EditorEvent::AnimDataChanged {
                change,
                frame_index,
                frame_data,
            } => EventRecord::AnimDataChanged {
                change,
                frame_index,
                frame_data: frame_data.clone(),
            },
        }
    }
}

/// Owned, serializable form of [`EditorEvent`].
///
/// Serializes as `{"event": "ENTER_FRAME", "frame": 0}` and so on, with
/// camelCase payload keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventRecord {
    EnterFrame {
        frame: usize,
    },
    ExitFrame {
        frame: usize,
    },
    FrameInserted {
        #[serde(rename = "frameIndex")]
        frame_index: usize,
    },
    FrameRemoved {
        #[serde(rename = "frameIndex")]
        frame_index: usize,
    },
    AnimDataChanged {
        #[serde(rename = "type")]
        change: LineChange,
        #[serde(rename = "frameIndex")]
        frame_index: usize,
        #[serde(rename = "frameData")]
        frame_data: Frame,
    },
}

/// Receiver of editor events.
pub trait EventListener {
    fn on_event(&mut self, event: &EditorEvent<'_>);
}

impl<F> EventListener for F
where
    F: FnMut(&EditorEvent<'_>),
{
    fn on_event(&mut self, event: &EditorEvent<'_>) {
        self(event)
    }
}

/// Registered listeners, called in subscription order.
#[derive(Default)]
pub(crate) struct Emitter {
    listeners: Vec<Box<dyn EventListener>>,
}

impl Emitter {
    pub(crate) fn subscribe(&mut self, listener: Box<dyn EventListener>) {
        self.listeners.push(listener);
    }

    pub(crate) fn emit(&mut self, event: &EditorEvent<'_>) {
        log::trace!("emit {}", event.name());
        for listener in &mut self.listeners {
            listener.on_event(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}
