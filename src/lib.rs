//! Animated, layered starfield backdrop for the browser.
//!
//! Dynamic stars drift downward with depth-based speed, dimming and size, and
//! respawn at the top once they leave the bottom edge. Static stars stay put
//! and twinkle. [`galaxy::Galaxy`] mounts the whole thing as a leptos
//! component; [`engine::Engine`] is usable with any [`surface::Surface`] and
//! host.

pub mod app;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod engine;
pub mod galaxy;
pub mod log;
pub mod rng;
pub mod scheduler;
pub mod stars;
pub mod surface;
pub mod viewport;

#[cfg(test)]
mod testing;
