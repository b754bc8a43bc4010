use serde::{Deserialize, Serialize};

/// Phase of a pointer or touch interaction. Pointer-leave and touch-cancel
/// are reported as `End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    Start,
    Move,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerSource {
    Mouse(MouseButton),
    Touch,
}

impl PointerSource {
    /// Whether both sources come from the same device family, ignoring which
    /// mouse button is involved.
    pub fn same_device(self, other: PointerSource) -> bool {
        matches!(
            (self, other),
            (PointerSource::Mouse(_), PointerSource::Mouse(_))
                | (PointerSource::Touch, PointerSource::Touch)
        )
    }
}

/// A pointer or touch event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
    pub source: PointerSource,
}

impl PointerEvent {
    pub fn mouse(phase: PointerPhase, button: MouseButton, x: f32, y: f32) -> Self {
        Self {
            phase,
            x,
            y,
            source: PointerSource::Mouse(button),
        }
    }

    pub fn touch(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            x,
            y,
            source: PointerSource::Touch,
        }
    }

    /// Whether this event may open a drag session: a primary-button press or
    /// any touch start.
    pub fn starts_drag(&self) -> bool {
        self.phase == PointerPhase::Start
            && matches!(
                self.source,
                PointerSource::Touch | PointerSource::Mouse(MouseButton::Primary)
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_press_and_touch_start_open_drags() {
        let press = PointerEvent::mouse(PointerPhase::Start, MouseButton::Primary, 0.0, 0.0);
        assert!(press.starts_drag());
        assert!(PointerEvent::touch(PointerPhase::Start, 0.0, 0.0).starts_drag());
    }

    #[test]
    fn other_buttons_and_phases_do_not() {
        let right = PointerEvent::mouse(PointerPhase::Start, MouseButton::Secondary, 0.0, 0.0);
        let hover = PointerEvent::mouse(PointerPhase::Move, MouseButton::Primary, 0.0, 0.0);
        assert!(!right.starts_drag());
        assert!(!hover.starts_drag());
        assert!(!PointerEvent::touch(PointerPhase::End, 0.0, 0.0).starts_drag());
    }

    #[test]
    fn device_family_ignores_button() {
        let primary = PointerSource::Mouse(MouseButton::Primary);
        assert!(primary.same_device(PointerSource::Mouse(MouseButton::Secondary)));
        assert!(PointerSource::Touch.same_device(PointerSource::Touch));
        assert!(!primary.same_device(PointerSource::Touch));
        assert!(!PointerSource::Touch.same_device(primary));
    }
}
