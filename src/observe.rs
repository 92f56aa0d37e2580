//! Viewport-change observation.
//!
//! The preferred mechanism is an event feed the host wires to a channel;
//! hosts that can only report sizes on demand fall back to comparing
//! successive per-frame readings. Both sit behind [`SizeFeed`], so the
//! caller drives them identically.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

/// Host capability for pushing viewport size events.
pub trait EventSource {
    /// Subscribes the sender to size events. Returns false when the host
    /// cannot deliver them.
    fn subscribe(&mut self, tx: Sender<[f32; 2]>) -> bool;
}

/// Source of viewport size changes.
pub enum SizeFeed {
    /// Event-driven feed from the host.
    Events {
        rx: Receiver<[f32; 2]>,
        last: Option<[f32; 2]>,
    },
    /// Per-frame comparison fallback.
    Polling { last: Option<[f32; 2]> },
}

impl SizeFeed {
    /// Probes the host for an event feed, substituting the polling fallback
    /// when none is available. The single fallback branch; never an error.
    pub fn probe(source: Option<&mut dyn EventSource>) -> Self {
        if let Some(source) = source {
            let (tx, rx) = channel();
            if source.subscribe(tx) {
                return Self::Events { rx, last: None };
            }
        }
        log::info!("Size events unavailable - falling back to per-frame polling");
        Self::polling()
    }

    pub fn polling() -> Self {
        Self::Polling { last: None }
    }

    /// Returns the freshest viewport size when it changed since the last
    /// poll. `current` is the caller's own reading, consulted only by the
    /// polling fallback.
    pub fn poll(&mut self, current: [f32; 2]) -> Option<[f32; 2]> {
        match self {
            Self::Events { rx, last } => {
                // Drain pending events, keeping only the most recent
                let mut newest = None;
                loop {
                    match rx.try_recv() {
                        Ok(size) => newest = Some(size),
                        Err(TryRecvError::Empty) => break,
                        Err(TryRecvError::Disconnected) => {
                            log::warn!("Size event channel disconnected");
                            break;
                        }
                    }
                }
                match newest {
                    Some(size) if *last != Some(size) => {
                        *last = Some(size);
                        Some(size)
                    }
                    _ => None,
                }
            }
            Self::Polling { last } => {
                if *last != Some(current) {
                    *last = Some(current);
                    Some(current)
                } else {
                    None
                }
            }
        }
    }
}
