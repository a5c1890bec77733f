// Star counts
pub const DYNAMIC_STAR_COUNT: usize = 100;
pub const STATIC_STAR_COUNT: usize = 180;

// Depth (parallax factor). Dynamic stars draw from [min, max), static stars are fixed.
pub const DYNAMIC_DEPTH_MIN: f64 = 0.3;
pub const DYNAMIC_DEPTH_MAX: f64 = 1.5;
pub const STATIC_DEPTH: f64 = 0.2;

// Per-star draws
pub const SPEED_FACTOR: (f64, f64) = (0.05, 0.30);
pub const SIZE_BASE: (f64, f64) = (0.5, 1.5);
pub const BASE_ALPHA: (f64, f64) = (0.2, 0.6);
pub const FLICKER_SPEED: (f64, f64) = (0.02, 0.06);

// Animation
pub const TIME_STEP: f64 = 0.01; // per frame
pub const DRIFT_FREQUENCY: f64 = 0.002;
pub const DRIFT_AMPLITUDE: f64 = 0.2;
pub const WRAP_MARGIN: f64 = 10.0; // px beyond the bottom edge before respawn

// Twinkle: sin in [-1, 1] mapped onto [FLICKER_MIN, FLICKER_MIN + 2 * FLICKER_GAIN]
pub const FLICKER_GAIN: f64 = 0.15;
pub const FLICKER_MIN: f64 = 0.1;

// Refresh-scaled clock
pub const REFERENCE_FRAME_SECS: f64 = 1.0 / 60.0;
pub const MAX_FRAME_SECS: f64 = 0.05;

// Colors
pub const STATIC_STAR_COLOR: &str = "rgba(255,255,255,0.8)";
pub const DYNAMIC_STAR_COLOR: &str = "rgb(124,244,255)"; // cyan tint

// Canvas styling: fixed, full viewport, behind content, non-interactive
pub const CANVAS_STYLE: &str = "pointer-events:none;position:fixed;inset:0;z-index:-10;\
width:100%;height:100%;opacity:0.6;mix-blend-mode:screen;will-change:transform";
