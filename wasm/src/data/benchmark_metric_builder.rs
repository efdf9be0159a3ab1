use crate::dependency::performance_now;

/// Times a delivery move or a grid derivation against the page clock.
pub struct BenchmarkMetricBuilder;

impl BenchmarkMetricBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Runs `f` and returns its result with the elapsed milliseconds (0 when
    /// no clock is available).
    pub fn measure<F, T>(&self, f: F) -> (T, f64)
    where
        F: FnOnce() -> T,
    {
        let started_at = performance_now();
        let result = f();
        (result, millis_since(started_at))
    }
}

impl Default for BenchmarkMetricBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// A zero start means there is no clock; a clock that went backwards counts as 0.
fn millis_since(started_at: f64) -> f64 {
    if started_at > 0.0 {
        (performance_now() - started_at).max(0.0)
    } else {
        0.0
    }
}
