use crate::params::SimulationParameters;

/// Population state at one simulated instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub prey: f32,
    pub predators: f32,
}

/// Starting populations.
pub const INITIAL_TICK: Tick = Tick {
    prey: 40.0,
    predators: 9.0,
};

/// State injected by the "crash" button.
pub const CRASH_TICK: Tick = Tick {
    prey: 2.0,
    predators: 2.0,
};

impl Tick {
    /// One explicit Euler step of the Lotka-Volterra equations over `dt`.
    ///
    /// Both components are clamped to zero, so extinction is absorbing.
    /// Rates are read as-is; zero or negative coefficients just change the
    /// dynamics.
    pub fn step(&self, params: &SimulationParameters, dt: f32) -> Tick {
        // https://en.wikipedia.org/wiki/Lotka%E2%80%93Volterra_equations
        let prey_growth = (params.birth_rate * self.prey
            - params.predation_rate * self.prey * self.predators)
            * dt;
        let predator_growth = (params.reproduction_rate * self.prey * self.predators
            - params.death_rate * self.predators)
            * dt;

        Tick {
            prey: (self.prey + prey_growth).max(0.0),
            predators: (self.predators + predator_growth).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(birth: f32, predation: f32, repro: f32, death: f32) -> SimulationParameters {
        SimulationParameters {
            birth_rate: birth,
            predation_rate: predation,
            reproduction_rate: repro,
            death_rate: death,
            scale: 7.0,
        }
    }

    #[test]
    fn step_matches_hand_computed_scenario() {
        // (0.2*40 - 0.02*40*9) * 1 = 0.8, (0.01*40*9 - 0.1*9) * 1 = 2.7
        let next = INITIAL_TICK.step(&params(0.2, 0.02, 0.01, 0.1), 1.0);
        assert_relative_eq!(next.prey, 40.8, epsilon = 1e-4);
        assert_relative_eq!(next.predators, 11.7, epsilon = 1e-4);
    }

    #[test]
    fn step_never_goes_negative() {
        let starts = [
            Tick { prey: 0.5, predators: 300.0 },
            Tick { prey: 300.0, predators: 0.5 },
            Tick { prey: 1.0, predators: 1.0 },
        ];
        let p = params(0.01, 1.0, 0.01, 1.0);
        for start in starts {
            for dt in [0.0, 0.016, 1.0, 100.0] {
                let next = start.step(&p, dt);
                assert!(next.prey >= 0.0, "prey went negative from {start:?} at dt {dt}");
                assert!(next.predators >= 0.0, "predators went negative from {start:?} at dt {dt}");
            }
        }
    }

    #[test]
    fn extinction_is_absorbing() {
        let dead = Tick { prey: 0.0, predators: 0.0 };
        let next = dead.step(&params(0.9, 0.9, 0.9, 0.9), 5.0);
        assert_eq!(next, dead);
    }

    #[test]
    fn zero_rates_are_a_no_op() {
        let p = params(0.0, 0.0, 0.0, 0.0);
        for dt in [0.0, 1.0, 42.0] {
            assert_eq!(INITIAL_TICK.step(&p, dt), INITIAL_TICK);
        }
    }

    #[test]
    fn zero_dt_keeps_state() {
        let next = INITIAL_TICK.step(&params(0.2, 0.02, 0.01, 0.1), 0.0);
        assert_eq!(next, INITIAL_TICK);
    }

    #[test]
    fn crash_state_feeds_the_next_step() {
        // The button overwrites the current state; the following step must
        // integrate from (2, 2), not from whatever came before.
        let perturbed = CRASH_TICK;
        let next = perturbed.step(&params(0.2, 0.02, 0.01, 0.1), 1.0);
        // (0.2*2 - 0.02*2*2) = 0.32, (0.01*2*2 - 0.1*2) = -0.16
        assert_relative_eq!(next.prey, 2.32, epsilon = 1e-4);
        assert_relative_eq!(next.predators, 1.84, epsilon = 1e-4);
    }

    #[test]
    fn negative_rates_are_accepted() {
        // An exploration tool, not a validated model: the formula just runs.
        let next = INITIAL_TICK.step(&params(-0.2, 0.02, 0.01, 0.1), 1.0);
        assert!(next.prey < INITIAL_TICK.prey);
        assert!(next.prey >= 0.0);
    }
}
