// ---------------------------------------------------------------------------
// Gravity-turn pitch program
// ---------------------------------------------------------------------------

/// Altitude at which the turn completes and thrust points horizontal.
pub const TURN_END_ALTITUDE: f64 = 70_000.0; // m

/// Pitch angle in degrees for the fixed gravity-turn law: 90° on the pad,
/// linearly down to 0° at [`TURN_END_ALTITUDE`], 0° above it. Pure function
/// of altitude.
pub fn pitch_angle(altitude: f64) -> f64 {
    if altitude < TURN_END_ALTITUDE {
        90.0 * (1.0 - altitude / TURN_END_ALTITUDE)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vertical_on_the_pad() {
        assert_relative_eq!(pitch_angle(0.0), 90.0);
    }

    #[test]
    fn midpoint_of_the_turn() {
        assert_relative_eq!(pitch_angle(35_000.0), 45.0);
    }

    #[test]
    fn horizontal_at_and_above_turn_end() {
        assert_relative_eq!(pitch_angle(70_000.0), 0.0);
        assert_relative_eq!(pitch_angle(120_000.0), 0.0);
    }

    #[test]
    fn pitch_is_pure() {
        assert_eq!(pitch_angle(12_345.0), pitch_angle(12_345.0));
    }
}
