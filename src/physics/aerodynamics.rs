/// Aerodynamic drag magnitude (N) from dynamic pressure:
/// F = ½ · Cd · ρ · v² · S.
///
/// Takes the squared speed directly; the dynamics already has it and the
/// square root is never needed.
pub fn drag_force(density: f64, speed_sq: f64, drag_coeff: f64, ref_area: f64) -> f64 {
    0.5 * drag_coeff * density * speed_sq * ref_area
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn no_drag_at_rest() {
        assert_relative_eq!(drag_force(1.2, 0.0, 0.66, 9.42), 0.0);
    }

    #[test]
    fn drag_scales_with_speed_squared() {
        let slow = drag_force(1.2, 100.0 * 100.0, 0.66, 9.42);
        let fast = drag_force(1.2, 200.0 * 200.0, 0.66, 9.42);
        assert_relative_eq!(fast, 4.0 * slow, epsilon = 1e-9);
    }

    #[test]
    fn no_drag_in_vacuum() {
        assert_relative_eq!(drag_force(0.0, 500.0 * 500.0, 0.66, 9.42), 0.0);
    }
}
