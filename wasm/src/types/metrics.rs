/// Wall-clock cost of the most recent delivery move and grid derivation, in
/// milliseconds. Stays at 0 on native builds, which have no page clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct BenchmarkMetrics {
    pub last_step_duration_ms: f64,
    pub last_grid_duration_ms: f64,
}

impl BenchmarkMetrics {
    pub fn update_step(&mut self, duration: f64) {
        Self::record(&mut self.last_step_duration_ms, duration);
    }

    pub fn update_grid(&mut self, duration: f64) {
        Self::record(&mut self.last_grid_duration_ms, duration);
    }

    fn record(slot: &mut f64, duration: f64) {
        if duration.is_finite() && duration >= 0.0 {
            *slot = duration;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_negative_and_nan_timings() {
        let mut metrics = BenchmarkMetrics::default();
        metrics.update_step(2.5);
        metrics.update_step(-1.0);
        metrics.update_grid(f64::NAN);
        metrics.update_grid(0.75);
        assert_eq!(metrics.last_step_duration_ms, 2.5);
        assert_eq!(metrics.last_grid_duration_ms, 0.75);
    }
}
