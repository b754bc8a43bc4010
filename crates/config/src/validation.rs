//! Config validation: physical ranges and station geometry consistency.

use std::f32::consts::FRAC_PI_2;

use crate::loader::{ConfigError, ZerogConfig};

/// Run every check, collecting all problems into one error.
pub fn validate(config: &ZerogConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    let sim = &config.simulation;

    // Motion
    validate_range(&mut errors, "motion.speed", sim.motion.speed, 0.0, f32::MAX);
    validate_range(&mut errors, "motion.thrust_scale", sim.motion.thrust_scale, 0.0, f32::MAX);
    validate_range(&mut errors, "motion.friction", sim.motion.friction, 0.0, 1.0);
    if sim.motion.friction == 1.0 {
        errors.push("motion.friction must be below 1.0 or speed grows without bound".into());
    }

    // Look
    validate_range(&mut errors, "look.sensitivity", sim.look.sensitivity, 0.0, 1.0);
    validate_range(&mut errors, "look.pitch_limit", sim.look.pitch_limit, 0.0, FRAC_PI_2);

    // Station
    let st = &sim.station;
    validate_finite(&mut errors, "station.z_min", st.z_min);
    validate_finite(&mut errors, "station.z_max", st.z_max);
    if st.z_min >= st.z_max {
        errors.push(format!(
            "station.z_min ({}) must be below station.z_max ({})",
            st.z_min, st.z_max
        ));
    }
    validate_range(&mut errors, "station.half_width", st.half_width, f32::MIN_POSITIVE, f32::MAX);
    validate_range(&mut errors, "station.half_height", st.half_height, f32::MIN_POSITIVE, f32::MAX);
    validate_range(&mut errors, "station.restitution", st.restitution, 0.0, 1.0);

    for (i, room) in st.rooms.iter().enumerate() {
        let name = format!("station.rooms[{i}]");
        validate_finite(&mut errors, &format!("{name}.z_center"), room.z_center);
        validate_range(
            &mut errors,
            &format!("{name}.z_half_extent"),
            room.z_half_extent,
            f32::MIN_POSITIVE,
            f32::MAX,
        );
        // A room poking past an end wall would let the Z clamp move the
        // player out of it and reintroduce a wall violation.
        let (lo, hi) = (room.z_center - room.z_half_extent, room.z_center + room.z_half_extent);
        if lo < st.z_min || hi > st.z_max {
            errors.push(format!(
                "{name} spans z {lo}..{hi}, outside station z range {}..{}",
                st.z_min, st.z_max
            ));
        }
    }

    if !sim.spawn.is_finite() || !st.contains(sim.spawn) {
        errors.push(format!("spawn {} lies outside the station", sim.spawn));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(errors))
    }
}

fn validate_finite(errors: &mut Vec<String>, field: &str, value: f32) {
    if !value.is_finite() {
        errors.push(format!("{field} must be finite, got {value}"));
    }
}

fn validate_range(errors: &mut Vec<String>, field: &str, value: f32, min: f32, max: f32) {
    if !value.is_finite() || value < min || value > max {
        errors.push(format!("{field} must be within {min}..={max}, got {value}"));
    }
}
