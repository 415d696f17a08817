/// Slider range shared by all four rate coefficients.
pub const RATE_RANGE: (f32, f32) = (0.01, 1.0);
/// Slider range for the display scale.
pub const SCALE_RANGE: (f32, f32) = (0.1, 15.0);

/// Rate coefficients of the Lotka-Volterra model plus the display-only
/// vertical scale. Sliders mutate this struct directly; the integrator reads
/// it every step, so a mid-run change takes effect on the next step.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    /// Prey birth rate (alpha).
    pub birth_rate: f32,
    /// Predation rate (beta).
    pub predation_rate: f32,
    /// Predator reproduction rate (delta).
    pub reproduction_rate: f32,
    /// Predator death rate (gamma).
    pub death_rate: f32,
    /// Vertical plot scale, has no effect on the dynamics.
    pub scale: f32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            birth_rate: 0.2,
            predation_rate: 0.02,
            reproduction_rate: 0.01,
            death_rate: 0.1,
            scale: 7.0,
        }
    }
}
