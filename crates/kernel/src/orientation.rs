use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use zerog_common::{CameraPose, PointerEvent, PointerPhase, PointerSource, finite_or_zero};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Radians of rotation per pixel of drag.
    pub sensitivity: f32,
    /// Pitch is held within `±pitch_limit`; never more than π/2.
    pub pitch_limit: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.005,
            pitch_limit: FRAC_PI_2,
        }
    }
}

/// Drag session state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: PointerSource,
        last: Vec2,
    },
}

/// Turns pointer and touch drags into yaw/pitch.
///
/// Rotation is applied in full on every move event; there is no smoothing.
#[derive(Debug, Clone, Default)]
pub struct OrientationController {
    config: LookConfig,
    state: DragState,
}

impl OrientationController {
    pub fn new(config: LookConfig) -> Self {
        Self {
            config,
            state: DragState::Idle,
        }
    }

    pub fn config(&self) -> &LookConfig {
        &self.config
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Device that owns the current drag session.
    pub fn source(&self) -> Option<PointerSource> {
        match self.state {
            DragState::Dragging { source, .. } => Some(source),
            DragState::Idle => None,
        }
    }

    /// Feed one pointer event. Returns `true` if the pose was rotated.
    pub fn handle(&mut self, event: &PointerEvent, pose: &mut CameraPose) -> bool {
        let at = Vec2::new(event.x, event.y);
        match event.phase {
            PointerPhase::Start => {
                if event.starts_drag() && at.is_finite() {
                    if !self.is_dragging() {
                        tracing::debug!(source = ?event.source, "drag started");
                    }
                    self.state = DragState::Dragging {
                        source: event.source,
                        last: at,
                    };
                }
                false
            }
            PointerPhase::Move => {
                let DragState::Dragging { source, last } = self.state else {
                    return false;
                };
                // A hovering mouse must not steer a touch drag, and vice versa.
                if !source.same_device(event.source) || !at.is_finite() {
                    return false;
                }
                let delta = at - last;
                self.state = DragState::Dragging { source, last: at };
                self.rotate(pose, delta.x, delta.y);
                true
            }
            PointerPhase::End => {
                if self.source().is_some_and(|s| s.same_device(event.source)) {
                    self.end();
                }
                false
            }
        }
    }

    /// Drop any active drag session.
    pub fn end(&mut self) {
        if self.is_dragging() {
            tracing::debug!("drag ended");
        }
        self.state = DragState::Idle;
    }

    /// Apply a drag delta in pixels. Non-finite deltas count as zero.
    pub fn rotate(&self, pose: &mut CameraPose, dx: f32, dy: f32) {
        let s = self.config.sensitivity;
        let limit = finite_or_zero(self.config.pitch_limit).abs().min(FRAC_PI_2);
        let yaw = pose.yaw() - finite_or_zero(finite_or_zero(dx) * s);
        let pitch = (pose.pitch() - finite_or_zero(finite_or_zero(dy) * s)).clamp(-limit, limit);
        pose.set_orientation(yaw, pitch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use zerog_common::MouseButton;

    fn mouse(phase: PointerPhase, x: f32, y: f32) -> PointerEvent {
        PointerEvent::mouse(phase, MouseButton::Primary, x, y)
    }

    #[test]
    fn move_without_session_is_ignored() {
        let mut look = OrientationController::default();
        let mut pose = CameraPose::default();
        assert!(!look.handle(&mouse(PointerPhase::Move, 50.0, 50.0), &mut pose));
        assert_eq!(pose, CameraPose::default());
    }

    #[test]
    fn drag_rotates_by_delta_times_sensitivity() {
        let mut look = OrientationController::default();
        let mut pose = CameraPose::default();
        look.handle(&mouse(PointerPhase::Start, 100.0, 100.0), &mut pose);
        assert!(look.handle(&mouse(PointerPhase::Move, 120.0, 90.0), &mut pose));
        assert!((pose.yaw() + 0.1).abs() < 1e-6);
        assert!((pose.pitch() - 0.05).abs() < 1e-6);

        // Deltas are relative to the last move, not the press.
        look.handle(&mouse(PointerPhase::Move, 130.0, 90.0), &mut pose);
        assert!((pose.yaw() + 0.15).abs() < 1e-6);
    }

    #[test]
    fn release_returns_to_idle() {
        let mut look = OrientationController::default();
        let mut pose = CameraPose::default();
        look.handle(&mouse(PointerPhase::Start, 0.0, 0.0), &mut pose);
        assert!(look.is_dragging());
        look.handle(&mouse(PointerPhase::End, 0.0, 0.0), &mut pose);
        assert_eq!(look.state(), DragState::Idle);
        assert!(!look.handle(&mouse(PointerPhase::Move, 40.0, 0.0), &mut pose));
    }

    #[test]
    fn secondary_button_does_not_start_a_drag() {
        let mut look = OrientationController::default();
        let mut pose = CameraPose::default();
        look.handle(
            &PointerEvent::mouse(PointerPhase::Start, MouseButton::Secondary, 0.0, 0.0),
            &mut pose,
        );
        assert!(!look.is_dragging());
    }

    #[test]
    fn touch_drag_rotates() {
        let mut look = OrientationController::default();
        let mut pose = CameraPose::default();
        look.handle(&PointerEvent::touch(PointerPhase::Start, 10.0, 10.0), &mut pose);
        look.handle(&PointerEvent::touch(PointerPhase::Move, 10.0, 30.0), &mut pose);
        assert!((pose.pitch() + 0.1).abs() < 1e-6);
        look.handle(&PointerEvent::touch(PointerPhase::End, 10.0, 30.0), &mut pose);
        assert!(!look.is_dragging());
    }

    #[test]
    fn restart_reanchors_session() {
        let mut look = OrientationController::default();
        let mut pose = CameraPose::default();
        look.handle(&mouse(PointerPhase::Start, 0.0, 0.0), &mut pose);
        look.handle(&PointerEvent::touch(PointerPhase::Start, 500.0, 500.0), &mut pose);
        look.handle(&PointerEvent::touch(PointerPhase::Move, 500.0, 500.0), &mut pose);
        assert_eq!(pose.yaw(), 0.0);
        assert_eq!(pose.pitch(), 0.0);
    }

    #[test]
    fn pitch_stays_clamped_for_extreme_deltas() {
        let look = OrientationController::default();
        let mut pose = CameraPose::default();
        for dy in [100_000.0, -100_000.0, 3.0e38, -3.0e38, 100_000.0] {
            look.rotate(&mut pose, 0.0, dy);
            assert!(pose.pitch().abs() <= FRAC_PI_2);
        }
        look.rotate(&mut pose, 0.0, 100_000.0);
        assert_eq!(pose.pitch(), -FRAC_PI_2);
        look.rotate(&mut pose, 0.0, -100_000.0);
        assert_eq!(pose.pitch(), FRAC_PI_2);
    }

    #[test]
    fn pitch_limit_can_be_tighter() {
        let look = OrientationController::new(LookConfig {
            pitch_limit: 1.0,
            ..LookConfig::default()
        });
        let mut pose = CameraPose::default();
        look.rotate(&mut pose, 0.0, -1000.0);
        assert_eq!(pose.pitch(), 1.0);
    }

    #[test]
    fn non_finite_deltas_count_as_zero() {
        let look = OrientationController::default();
        let mut pose = CameraPose::new(Vec3::ZERO, 0.2, 0.1);
        look.rotate(&mut pose, f32::NAN, f32::INFINITY);
        assert_eq!(pose.yaw(), 0.2);
        assert_eq!(pose.pitch(), 0.1);
    }

    #[test]
    fn non_finite_coordinates_are_skipped() {
        let mut look = OrientationController::default();
        let mut pose = CameraPose::default();
        look.handle(&mouse(PointerPhase::Start, 0.0, 0.0), &mut pose);
        assert!(!look.handle(&mouse(PointerPhase::Move, f32::NAN, 0.0), &mut pose));
        look.handle(&mouse(PointerPhase::Move, 10.0, 0.0), &mut pose);
        assert!((pose.yaw() + 0.05).abs() < 1e-6);
    }

    #[test]
    fn roll_is_never_introduced() {
        let mut look = OrientationController::default();
        let mut pose = CameraPose::default();
        look.handle(&mouse(PointerPhase::Start, 0.0, 0.0), &mut pose);
        for i in 1..50 {
            let (x, y) = (i as f32 * 37.0, (i % 7) as f32 * -53.0);
            look.handle(&mouse(PointerPhase::Move, x, y), &mut pose);
            // Camera-right stays horizontal when there is no roll.
            assert!(pose.right().y.abs() < 1e-5);
        }
    }

    #[test]
    fn hover_mouse_does_not_steer_a_touch_drag() {
        let mut look = OrientationController::default();
        let mut pose = CameraPose::default();
        look.handle(&PointerEvent::touch(PointerPhase::Start, 100.0, 100.0), &mut pose);
        assert!(!look.handle(&mouse(PointerPhase::Move, 900.0, 100.0), &mut pose));
        assert_eq!(pose.yaw(), 0.0);

        // The touch keeps its own anchor.
        assert!(look.handle(&PointerEvent::touch(PointerPhase::Move, 120.0, 100.0), &mut pose));
        assert!((pose.yaw() + 0.1).abs() < 1e-6);
    }

    #[test]
    fn end_from_another_device_keeps_the_session() {
        let mut look = OrientationController::default();
        let mut pose = CameraPose::default();
        look.handle(&PointerEvent::touch(PointerPhase::Start, 0.0, 0.0), &mut pose);
        look.handle(&mouse(PointerPhase::End, 0.0, 0.0), &mut pose);
        assert!(look.is_dragging());

        look.handle(&PointerEvent::touch(PointerPhase::End, 0.0, 0.0), &mut pose);
        assert!(!look.is_dragging());
    }

    #[test]
    fn touch_move_does_not_steer_a_mouse_drag() {
        let mut look = OrientationController::default();
        let mut pose = CameraPose::default();
        look.handle(&mouse(PointerPhase::Start, 0.0, 0.0), &mut pose);
        assert!(!look.handle(&PointerEvent::touch(PointerPhase::Move, 50.0, 50.0), &mut pose));
        // Any mouse button release ends a mouse drag.
        let release = PointerEvent::mouse(PointerPhase::End, MouseButton::Secondary, 0.0, 0.0);
        look.handle(&release, &mut pose);
        assert!(!look.is_dragging());
    }

    #[test]
    fn bad_pitch_limits_do_not_panic() {
        for limit in [-1.0, f32::NAN, f32::INFINITY] {
            let look = OrientationController::new(LookConfig {
                pitch_limit: limit,
                ..LookConfig::default()
            });
            let mut pose = CameraPose::default();
            look.rotate(&mut pose, 10.0, -1000.0);
            assert!(pose.pitch().abs() <= FRAC_PI_2);
        }
        let negative = OrientationController::new(LookConfig {
            pitch_limit: -1.0,
            ..LookConfig::default()
        });
        let mut pose = CameraPose::default();
        negative.rotate(&mut pose, 0.0, -1000.0);
        assert_eq!(pose.pitch(), 1.0);
    }
}
