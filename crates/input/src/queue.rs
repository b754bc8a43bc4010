use crossbeam_channel::{Receiver, Sender, TryRecvError, unbounded};
use zerog_common::{Intent, PointerEvent};

use crate::aggregator::ButtonEdge;

/// Upper bound on events handled per tick so a flood of input cannot stall
/// a frame. Anything left over is picked up on the next tick.
pub const MAX_EVENTS_PER_TICK: usize = 256;

/// Input delivered by the host, before any mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Physical keyboard edge, identified by key code name.
    Key { code: String, pressed: bool },
    /// On-screen button edge.
    Button { intent: Intent, edge: ButtonEdge },
    /// Already-mapped intent edge.
    Intent { intent: Intent, active: bool },
    Pointer(PointerEvent),
    /// Host lost focus; every held intent is dropped.
    FocusLost,
}

/// Producer handle. Cheap to clone and safe to move to other threads.
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: Sender<InputEvent>,
}

impl InputSender {
    /// Returns `false` once the owning queue has been dropped.
    pub fn send(&self, event: InputEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    pub fn key(&self, code: impl Into<String>, pressed: bool) -> bool {
        self.send(InputEvent::Key {
            code: code.into(),
            pressed,
        })
    }

    pub fn button(&self, intent: Intent, edge: ButtonEdge) -> bool {
        self.send(InputEvent::Button { intent, edge })
    }

    pub fn intent(&self, intent: Intent, active: bool) -> bool {
        self.send(InputEvent::Intent { intent, active })
    }

    pub fn pointer(&self, event: PointerEvent) -> bool {
        self.send(InputEvent::Pointer(event))
    }
}

/// Consumer end, owned by the simulation loop and drained between ticks.
#[derive(Debug)]
pub struct InputQueue {
    rx: Receiver<InputEvent>,
}

impl InputQueue {
    pub fn channel() -> (InputSender, Self) {
        let (tx, rx) = unbounded();
        (InputSender { tx }, Self { rx })
    }

    /// Hand queued events to `handle` in arrival order, at most
    /// [`MAX_EVENTS_PER_TICK`] of them. Returns how many were handled.
    pub fn drain(&mut self, mut handle: impl FnMut(InputEvent)) -> usize {
        let mut drained = 0;
        while drained < MAX_EVENTS_PER_TICK {
            match self.rx.try_recv() {
                Ok(event) => {
                    handle(event);
                    drained += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        if drained == MAX_EVENTS_PER_TICK && !self.rx.is_empty() {
            tracing::warn!(pending = self.rx.len(), "input backlog carried to next tick");
        }
        drained
    }

    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}
