use ode_solvers::dop853::Dop853;

use crate::dynamics::state::RocketState;
use crate::dynamics::AscentDynamics;
use crate::error::SimError;

// ---------------------------------------------------------------------------
// Adaptive-step integration of a single stage burn
// ---------------------------------------------------------------------------

pub const DEFAULT_RTOL: f64 = 1e-8;
pub const DEFAULT_ATOL: f64 = 1e-8;

/// Integrates one stage's burn with the Dormand–Prince 8(5,3) adaptive
/// stepper, sampling the result by dense-output interpolation.
#[derive(Debug, Clone, Copy)]
pub struct StageIntegrator {
    pub rtol: f64,
    pub atol: f64,
}

impl Default for StageIntegrator {
    fn default() -> Self {
        Self {
            rtol: DEFAULT_RTOL,
            atol: DEFAULT_ATOL,
        }
    }
}

impl StageIntegrator {
    /// Integrate the stage dynamics over `[0, burn_time]`, returning
    /// `samples` (time, state) pairs from the initial state to burnout,
    /// evenly spaced by dense output.
    ///
    /// The solver chooses its own internal step sequence and evaluates the
    /// dynamics at points that are not the reported samples (including
    /// rejected trial steps). Since each evaluation advances the shared
    /// atmosphere temperature, the temperature trace follows the solver's
    /// evaluation order, not the output sample order.
    pub fn integrate(
        &self,
        dynamics: AscentDynamics<'_>,
        initial: &RocketState,
        burn_time: f64,
        samples: usize,
    ) -> Result<Vec<(f64, RocketState)>, SimError> {
        if samples < 2 {
            return Err(SimError::TooFewSamples(samples));
        }
        if burn_time <= 0.0 {
            return Err(SimError::NonPositiveSpan(burn_time));
        }

        // Shaved by a whisker so the accumulated dense-output grid can never
        // round past the end of the span and lose the burnout sample.
        let dx = burn_time * (1.0 - 1e-12) / (samples - 1) as f64;
        let mut stepper = Dop853::new(
            dynamics,
            0.0,
            burn_time,
            dx,
            initial.to_raw(),
            self.rtol,
            self.atol,
        );
        stepper
            .integrate()
            .map_err(|e| SimError::Solver(format!("{e:?}")))?;

        Ok(stepper
            .x_out()
            .iter()
            .zip(stepper.y_out())
            .map(|(&t, y)| (t, RocketState::from_raw(y)))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::atmosphere::Atmosphere;
    use crate::physics::gravity::Body;
    use approx::assert_relative_eq;
    use std::cell::RefCell;

    fn small_stage<'a>(
        atmosphere: &'a RefCell<Atmosphere>,
        body: &'a Body,
    ) -> AscentDynamics<'a> {
        AscentDynamics {
            thrust: 20_000.0,
            mass_flow: 50.0,
            drag_coeff: 0.66,
            ref_area: 1.0,
            body,
            atmosphere,
        }
    }

    #[test]
    fn rejects_undersized_sample_count() {
        let atmosphere = RefCell::new(Atmosphere::new());
        let body = Body::KERBIN;
        let result = StageIntegrator::default().integrate(
            small_stage(&atmosphere, &body),
            &RocketState::on_pad(1_500.0),
            10.0,
            1,
        );
        assert!(matches!(result, Err(SimError::TooFewSamples(1))));
    }

    #[test]
    fn rejects_non_positive_span() {
        let atmosphere = RefCell::new(Atmosphere::new());
        let body = Body::KERBIN;
        let result = StageIntegrator::default().integrate(
            small_stage(&atmosphere, &body),
            &RocketState::on_pad(1_500.0),
            0.0,
            10,
        );
        assert!(matches!(result, Err(SimError::NonPositiveSpan(_))));
    }

    #[test]
    fn samples_span_the_burn() {
        let atmosphere = RefCell::new(Atmosphere::new());
        let body = Body::KERBIN;
        let segment = StageIntegrator::default()
            .integrate(
                small_stage(&atmosphere, &body),
                &RocketState::on_pad(1_500.0),
                10.0,
                11,
            )
            .unwrap();

        assert!(segment.len() >= 2);
        assert_eq!(segment[0].0, 0.0);
        let (t_end, _) = segment[segment.len() - 1];
        assert_relative_eq!(t_end, 10.0, epsilon = 1e-6);
        for pair in segment.windows(2) {
            assert!(pair[1].0 > pair[0].0, "sample times must increase");
        }
    }

    #[test]
    fn mass_depletes_linearly_to_burnout() {
        let atmosphere = RefCell::new(Atmosphere::new());
        let body = Body::KERBIN;
        let segment = StageIntegrator::default()
            .integrate(
                small_stage(&atmosphere, &body),
                &RocketState::on_pad(1_500.0),
                10.0,
                11,
            )
            .unwrap();

        // dm/dt is constant, so every sample sits on the line m0 − k·t.
        for (t, state) in &segment {
            assert_relative_eq!(state.mass, 1_500.0 - 50.0 * t, max_relative = 1e-9);
        }
        let (_, last) = segment[segment.len() - 1];
        assert_relative_eq!(last.mass, 1_000.0, max_relative = 1e-6);
    }

    #[test]
    fn initial_state_carries_into_first_sample() {
        let atmosphere = RefCell::new(Atmosphere::new());
        let body = Body::KERBIN;
        let initial = RocketState::on_pad(1_500.0);
        let segment = StageIntegrator::default()
            .integrate(small_stage(&atmosphere, &body), &initial, 10.0, 5)
            .unwrap();
        assert_eq!(segment[0].1, initial);
    }
}
