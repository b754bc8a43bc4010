use zerog_common::CameraPose;
use zerog_input::{InputAggregator, InputEvent, InputQueue, InputSender, KeyBindings};

use crate::simulation::Simulation;

/// Per-frame driver: drain queued input, then advance the simulation once.
///
/// Owns every piece of mutable input state so event handling and the step
/// run back to back on one thread. Hosts keep only an [`InputSender`].
#[derive(Debug)]
pub struct FrameLoop {
    sim: Simulation,
    intents: InputAggregator,
    bindings: KeyBindings,
    queue: InputQueue,
}

impl FrameLoop {
    pub fn new(sim: Simulation, bindings: KeyBindings) -> (Self, InputSender) {
        let (sender, queue) = InputQueue::channel();
        let frame_loop = Self {
            sim,
            intents: InputAggregator::new(),
            bindings,
            queue,
        };
        (frame_loop, sender)
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn intents(&self) -> &InputAggregator {
        &self.intents
    }

    /// Apply queued input, step once, and return the pose to render.
    pub fn frame(&mut self) -> CameraPose {
        let Self {
            sim,
            intents,
            bindings,
            queue,
        } = self;

        queue.drain(|event| match event {
            InputEvent::Key { code, pressed } => match bindings.resolve(&code) {
                Some(intent) => intents.set_intent(intent, pressed),
                None => tracing::trace!(%code, "unbound key"),
            },
            InputEvent::Button { intent, edge } => intents.button(intent, edge),
            InputEvent::Intent { intent, active } => intents.set_intent(intent, active),
            InputEvent::Pointer(pointer) => {
                sim.pointer(&pointer);
            }
            InputEvent::FocusLost => {
                intents.release_all();
                sim.end_drag();
            }
        });

        sim.step(intents.snapshot());
        *sim.pose()
    }
}
