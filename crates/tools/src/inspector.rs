use serde::Serialize;
use zerog_common::PlayerState;
use zerog_kernel::{Axis, SimEvent, Simulation};

/// Simulation inspector for developer tooling.
///
/// Read-only queries for debugging overlays, the CLI and window titles.
pub struct SimInspector;

impl SimInspector {
    /// Produce a summary of the simulation state.
    pub fn summary(sim: &Simulation) -> SimSummary {
        let pose = sim.pose();
        SimSummary {
            tick: sim.tick(),
            position: pose.position.to_array(),
            speed: sim.velocity().length(),
            yaw_degrees: pose.yaw().to_degrees(),
            pitch_degrees: pose.pitch().to_degrees(),
            in_room: sim.config().station.in_room(pose.position),
            dragging: sim.is_dragging(),
            pending_events: sim.events().len(),
        }
    }

    /// One serializable sample for per-tick trace output.
    pub fn trace_point(sim: &Simulation) -> TracePoint {
        TracePoint {
            tick: sim.tick(),
            state: PlayerState::from(sim.pose()),
            velocity: sim.velocity().to_array(),
        }
    }

    /// Count boundary contacts per axis in an event log.
    pub fn contacts(events: &[SimEvent]) -> ContactTally {
        let mut tally = ContactTally::default();
        for event in events {
            if let SimEvent::Collided { axis, .. } = event {
                match axis {
                    Axis::X => tally.x += 1,
                    Axis::Y => tally.y += 1,
                    Axis::Z => tally.z += 1,
                }
            }
        }
        tally
    }
}

/// Summary of simulation state for the inspector.
#[derive(Debug, Clone)]
pub struct SimSummary {
    pub tick: u64,
    pub position: [f32; 3],
    pub speed: f32,
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
    pub in_room: bool,
    pub dragging: bool,
    pub pending_events: usize,
}

impl std::fmt::Display for SimSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tick={} pos=({:.2}, {:.2}, {:.2}) speed={:.3} yaw={:.1} pitch={:.1}{}",
            self.tick,
            self.position[0],
            self.position[1],
            self.position[2],
            self.speed,
            self.yaw_degrees,
            self.pitch_degrees,
            if self.in_room { " [room]" } else { "" },
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TracePoint {
    pub tick: u64,
    #[serde(flatten)]
    pub state: PlayerState,
    pub velocity: [f32; 3],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactTally {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl ContactTally {
    pub fn total(&self) -> usize {
        self.x + self.y + self.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use zerog_common::{CameraPose, ControllerState, Intent};
    use zerog_kernel::SimConfig;

    #[test]
    fn summary_at_spawn() {
        let sim = Simulation::new(SimConfig::default());
        let summary = SimInspector::summary(&sim);
        assert_eq!(summary.tick, 0);
        assert_eq!(summary.position, [0.0, 0.0, 8.0]);
        assert_eq!(summary.speed, 0.0);
        assert!(!summary.in_room);
        assert!(!summary.dragging);
    }

    #[test]
    fn summary_flags_rooms() {
        let mut sim = Simulation::new(SimConfig::default());
        sim.place(CameraPose::new(Vec3::new(-3.0, 0.0, 0.0), 0.0, 0.0));
        let summary = SimInspector::summary(&sim);
        assert!(summary.in_room);
        assert!(summary.to_string().ends_with("[room]"));
    }

    #[test]
    fn summary_display() {
        let sim = Simulation::new(SimConfig::default());
        let s = format!("{}", SimInspector::summary(&sim));
        assert!(s.contains("tick=0"));
        assert!(s.contains("pos=(0.00, 0.00, 8.00)"));
    }

    #[test]
    fn trace_point_follows_steps() {
        let mut sim = Simulation::new(SimConfig::default());
        sim.step(ControllerState::default().with(Intent::Up));
        let point = SimInspector::trace_point(&sim);
        assert_eq!(point.tick, 1);
        assert!(point.state.position[1] > 0.0);
        assert!(point.velocity[1] > 0.0);
    }

    #[test]
    fn contacts_are_tallied_per_axis() {
        let mut sim = Simulation::recorded(SimConfig::default());
        sim.set_velocity(Vec3::new(3.0, 3.0, 0.0));
        sim.step(ControllerState::default());
        let tally = SimInspector::contacts(sim.events());
        assert_eq!(tally, ContactTally { x: 1, y: 1, z: 0 });
        assert_eq!(tally.total(), 2);
    }
}
