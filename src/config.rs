use crate::constants::*;
use crate::log::warn_log;

/// How the clock and star motion advance per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockMode {
    /// Fixed increment per frame; visual speed follows the display refresh rate.
    #[default]
    FrameLocked,
    /// Increment scaled by elapsed time relative to a 60 Hz frame.
    RefreshScaled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarfieldConfig {
    pub dynamic_count: usize,
    pub static_count: usize,
    pub dynamic_depth: (f64, f64),
    pub static_depth: f64,
    pub time_step: f64,
    pub static_color: &'static str,
    pub dynamic_color: &'static str,
    pub clock: ClockMode,
    /// `None` uses the browser's random source.
    pub seed: Option<u64>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            dynamic_count: DYNAMIC_STAR_COUNT,
            static_count: STATIC_STAR_COUNT,
            dynamic_depth: (DYNAMIC_DEPTH_MIN, DYNAMIC_DEPTH_MAX),
            static_depth: STATIC_DEPTH,
            time_step: TIME_STEP,
            static_color: STATIC_STAR_COLOR,
            dynamic_color: DYNAMIC_STAR_COLOR,
            clock: ClockMode::FrameLocked,
            seed: None,
        }
    }
}

impl StarfieldConfig {
    /// Replaces values that would break star invariants with defaults.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        let (lo, hi) = self.dynamic_depth;
        if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && lo <= hi) {
            warn_log(&format!("starfield: bad dynamic depth band ({}, {}), using default", lo, hi));
            self.dynamic_depth = defaults.dynamic_depth;
        }
        if !(self.static_depth.is_finite() && self.static_depth > 0.0) {
            warn_log(&format!("starfield: bad static depth {}, using default", self.static_depth));
            self.static_depth = defaults.static_depth;
        }
        if !(self.time_step.is_finite() && self.time_step >= 0.0) {
            warn_log(&format!("starfield: bad time step {}, using default", self.time_step));
            self.time_step = defaults.time_step;
        }
        self
    }
}
