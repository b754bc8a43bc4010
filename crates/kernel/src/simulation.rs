use glam::Vec3;
use serde::{Deserialize, Serialize};
use zerog_common::{CameraPose, ControllerState, PointerEvent, finite_vec_or_zero};

use crate::collision::{Axis, CollisionReport, CollisionResolver, Face};
use crate::config::SimConfig;
use crate::movement::MovementSimulator;
use crate::orientation::OrientationController;

/// A record of every change to simulation state.
///
/// A recorded log is enough to rebuild the exact same state with
/// [`Simulation::replay`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Player placed at a pose with zero velocity.
    Spawned { pose: CameraPose },
    /// Velocity overwritten from outside the integrator.
    VelocitySet { velocity: Vec3 },
    /// One tick advanced with the given intents.
    Stepped { tick: u64, intents: ControllerState },
    /// Orientation changed by the drag controller.
    Looked { yaw: f32, pitch: f32 },
    /// A station boundary was hit during the given tick.
    Collided { tick: u64, axis: Axis, face: Face },
}

/// The player simulation: pose, inertial velocity, drag-to-look and
/// station collision.
///
/// All mutation goes through `step`, `pointer`, `place` and `set_velocity`.
/// The renderer only ever reads [`pose`](Simulation::pose).
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    pose: CameraPose,
    velocity: Vec3,
    movement: MovementSimulator,
    collision: CollisionResolver,
    look: OrientationController,
    tick: u64,
    recording: bool,
    event_log: Vec<SimEvent>,
}

impl Simulation {
    /// Spawn at `config.spawn`, without an event log.
    pub fn new(config: SimConfig) -> Self {
        let pose = CameraPose::new(config.spawn, 0.0, 0.0);
        Self {
            movement: MovementSimulator::new(config.motion),
            collision: CollisionResolver::new(config.station.clone()),
            look: OrientationController::new(config.look),
            config,
            pose,
            velocity: Vec3::ZERO,
            tick: 0,
            recording: false,
            event_log: Vec::new(),
        }
    }

    /// Like [`new`](Self::new) but every mutation is appended to the event log.
    pub fn recorded(config: SimConfig) -> Self {
        let mut sim = Self::new(config);
        sim.recording = true;
        let pose = sim.pose;
        sim.record(SimEvent::Spawned { pose });
        sim
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn is_dragging(&self) -> bool {
        self.look.is_dragging()
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn events(&self) -> &[SimEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Put the player at `pose` and stop it.
    pub fn place(&mut self, pose: CameraPose) {
        let pose = CameraPose::new(finite_vec_or_zero(pose.position), pose.yaw(), pose.pitch());
        self.pose = pose;
        self.velocity = Vec3::ZERO;
        self.record(SimEvent::Spawned { pose });
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = finite_vec_or_zero(velocity);
        self.record(SimEvent::VelocitySet {
            velocity: self.velocity,
        });
    }

    /// Feed a pointer or touch event to the drag-to-look controller.
    /// Returns `true` if the orientation changed.
    pub fn pointer(&mut self, event: &PointerEvent) -> bool {
        let rotated = self.look.handle(event, &mut self.pose);
        if rotated {
            self.record(SimEvent::Looked {
                yaw: self.pose.yaw(),
                pitch: self.pose.pitch(),
            });
        }
        rotated
    }

    /// Abandon any drag in progress (focus loss, window hidden).
    pub fn end_drag(&mut self) {
        self.look.end();
    }

    /// Advance one tick: thrust and friction, then boundary resolution.
    pub fn step(&mut self, intents: ControllerState) -> CollisionReport {
        self.tick += 1;
        let _span = tracing::trace_span!("sim_step", tick = self.tick).entered();

        self.movement.integrate(&mut self.pose, &mut self.velocity, intents);
        let report = self.collision.resolve(&mut self.pose.position, &mut self.velocity);

        self.record(SimEvent::Stepped {
            tick: self.tick,
            intents,
        });
        if self.recording {
            for (axis, face) in report.contacts() {
                self.event_log.push(SimEvent::Collided {
                    tick: self.tick,
                    axis,
                    face,
                });
            }
        }

        tracing::trace!(
            position = ?self.pose.position,
            velocity = ?self.velocity,
            "step complete"
        );
        report
    }

    /// Rebuild a simulation from a recorded log. The result records too, and
    /// its log matches the input when the same config is used.
    pub fn replay(config: SimConfig, events: &[SimEvent]) -> Self {
        let mut sim = Self::new(config);
        sim.recording = true;
        for event in events {
            match event {
                SimEvent::Spawned { pose } => sim.place(*pose),
                SimEvent::VelocitySet { velocity } => sim.set_velocity(*velocity),
                SimEvent::Stepped { tick, intents } => {
                    sim.tick = tick.saturating_sub(1);
                    sim.step(*intents);
                }
                SimEvent::Looked { yaw, pitch } => {
                    sim.pose.set_orientation(*yaw, *pitch);
                    sim.record(SimEvent::Looked {
                        yaw: sim.pose.yaw(),
                        pitch: sim.pose.pitch(),
                    });
                }
                // Re-derived by `step`.
                SimEvent::Collided { .. } => {}
            }
        }
        sim
    }

    /// Deterministic hash of tick, pose and velocity for comparing runs.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &self.tick.to_le_bytes());
        for v in [self.pose.position, self.velocity] {
            mix(&mut h, &v.x.to_le_bytes());
            mix(&mut h, &v.y.to_le_bytes());
            mix(&mut h, &v.z.to_le_bytes());
        }
        mix(&mut h, &self.pose.yaw().to_le_bytes());
        mix(&mut h, &self.pose.pitch().to_le_bytes());
        h
    }

    fn record(&mut self, event: SimEvent) {
        if self.recording {
            self.event_log.push(event);
        }
    }
}
