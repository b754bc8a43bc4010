use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Which corridor wall a room opens through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallSide {
    /// Opens past `-half_width` on X.
    Left,
    /// Opens past `+half_width` on X.
    Right,
}

/// A side room cut into a corridor wall. While the position is inside one,
/// the corridor X clamp is suspended. Rooms have no outer wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomZone {
    pub side: WallSide,
    pub z_center: f32,
    pub z_half_extent: f32,
}

impl RoomZone {
    pub fn contains(&self, position: Vec3, corridor_half_width: f32) -> bool {
        let past_wall = match self.side {
            WallSide::Left => position.x < -corridor_half_width,
            WallSide::Right => position.x > corridor_half_width,
        };
        past_wall && (position.z - self.z_center).abs() < self.z_half_extent
    }
}

/// Read-only station geometry the player is kept inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationBounds {
    pub z_min: f32,
    pub z_max: f32,
    /// Corridor walls sit at `±half_width` on X.
    pub half_width: f32,
    /// Floor and ceiling sit at `±half_height` on Y.
    pub half_height: f32,
    /// Fraction of speed kept (and reversed) on impact.
    pub restitution: f32,
    pub rooms: Vec<RoomZone>,
}

impl Default for StationBounds {
    fn default() -> Self {
        Self {
            z_min: -9.0,
            z_max: 10.0,
            half_width: 1.8,
            half_height: 1.8,
            restitution: 0.5,
            rooms: vec![
                RoomZone {
                    side: WallSide::Left,
                    z_center: 0.0,
                    z_half_extent: 2.0,
                },
                RoomZone {
                    side: WallSide::Right,
                    z_center: 4.0,
                    z_half_extent: 2.0,
                },
            ],
        }
    }
}

impl StationBounds {
    pub fn in_room(&self, position: Vec3) -> bool {
        self.rooms
            .iter()
            .any(|r| r.contains(position, self.half_width))
    }

    /// Whether `position` satisfies every boundary at once.
    pub fn contains(&self, position: Vec3) -> bool {
        let z_ok = (self.z_min..=self.z_max).contains(&position.z);
        let y_ok = (-self.half_height..=self.half_height).contains(&position.y);
        let x_ok =
            (-self.half_width..=self.half_width).contains(&position.x) || self.in_room(position);
        z_ok && y_ok && x_ok
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Min,
    Max,
}

/// Faces hit during one resolution pass, at most one per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub x: Option<Face>,
    pub y: Option<Face>,
    pub z: Option<Face>,
}

impl CollisionReport {
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }

    /// Contacts in resolution order (Z, X, Y).
    pub fn contacts(&self) -> impl Iterator<Item = (Axis, Face)> {
        [(Axis::Z, self.z), (Axis::X, self.x), (Axis::Y, self.y)]
            .into_iter()
            .filter_map(|(axis, face)| face.map(|f| (axis, f)))
    }
}

/// Positional clamp against [`StationBounds`], with bounce damping on the
/// clamped axis. Not swept: a fast enough body can tunnel a thin wall.
#[derive(Debug, Clone, Default)]
pub struct CollisionResolver {
    bounds: StationBounds,
}

impl CollisionResolver {
    pub fn new(bounds: StationBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &StationBounds {
        &self.bounds
    }

    /// Clamp in fixed order: Z, then X unless inside a room, then Y.
    /// A position that already satisfies the bounds is left untouched.
    pub fn resolve(&self, position: &mut Vec3, velocity: &mut Vec3) -> CollisionReport {
        let b = &self.bounds;
        let r = b.restitution;
        let mut report = CollisionReport {
            z: clamp_axis(&mut position.z, &mut velocity.z, b.z_min, b.z_max, r),
            ..CollisionReport::default()
        };

        // Room membership is judged after the Z correction.
        if !b.in_room(*position) {
            report.x = clamp_axis(&mut position.x, &mut velocity.x, -b.half_width, b.half_width, r);
        }

        report.y = clamp_axis(&mut position.y, &mut velocity.y, -b.half_height, b.half_height, r);

        for (axis, face) in report.contacts() {
            tracing::debug!(?axis, ?face, "hit station boundary");
        }
        report
    }
}

fn clamp_axis(
    value: &mut f32,
    velocity: &mut f32,
    min: f32,
    max: f32,
    restitution: f32,
) -> Option<Face> {
    if *value > max {
        *value = max;
        *velocity *= -restitution;
        Some(Face::Max)
    } else if *value < min {
        *value = min;
        *velocity *= -restitution;
        Some(Face::Min)
    } else {
        None
    }
}
