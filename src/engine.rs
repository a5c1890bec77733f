use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::{ClockMode, StarfieldConfig};
use crate::constants::*;
use crate::log::debug_log;
use crate::rng::RandomSource;
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::stars::{populate, DepthSource, Star, StarRole};
use crate::surface::Surface;
use crate::viewport::{Bounds, Viewport, ViewportHost};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

/// Static-star opacity, always within `[0.1, 0.4]`.
pub fn flicker_opacity(time: f64, flicker_speed: f64, flicker_phase: f64) -> f64 {
    let flicker = (time * flicker_speed + flicker_phase).sin();
    (flicker + 1.0) * FLICKER_GAIN + FLICKER_MIN
}

/// Moves a dynamic star one frame and respawns it at the top once it passes
/// the bottom margin. `scale` is 1.0 for a frame-locked clock.
pub fn advance_dynamic_star(star: &mut Star, bounds: Bounds, scale: f64, rng: &mut dyn RandomSource) {
    star.y += star.speed * scale;
    star.x += (star.y * DRIFT_FREQUENCY + star.flicker_phase).sin() * DRIFT_AMPLITUDE * scale;

    if star.y > bounds.height + WRAP_MARGIN {
        star.y = -WRAP_MARGIN;
        star.x = rng.range(0.0, bounds.width);
    }
}

/// Both star collections plus the animation clock.
#[derive(Debug, Clone, Default)]
pub struct Starfield {
    pub dynamic_stars: Vec<Star>,
    pub static_stars: Vec<Star>,
    pub time: f64,
}

impl Starfield {
    pub fn generate(config: &StarfieldConfig, bounds: Bounds, rng: &mut dyn RandomSource) -> Self {
        let (min, max) = config.dynamic_depth;
        Self {
            dynamic_stars: populate(
                config.dynamic_count,
                bounds,
                DepthSource::Band { min, max },
                StarRole::Dynamic,
                rng,
            ),
            static_stars: populate(
                config.static_count,
                bounds,
                DepthSource::Fixed(config.static_depth),
                StarRole::Static,
                rng,
            ),
            time: 0.0,
        }
    }

    /// One frame: clear, tick the clock, static pass, then the dynamic pass
    /// so moving stars layer on top.
    pub fn render<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        bounds: Bounds,
        config: &StarfieldConfig,
        scale: f64,
        rng: &mut dyn RandomSource,
    ) {
        surface.clear_rect(0.0, 0.0, bounds.width, bounds.height);
        self.time += config.time_step * scale;

        // Static stars as squares
        surface.set_fill_color(config.static_color);
        for star in &self.static_stars {
            surface.set_fill_opacity(flicker_opacity(self.time, star.flicker_speed, star.flicker_phase));
            surface.fill_rect(star.x, star.y, star.size, star.size);
        }

        surface.set_fill_color(config.dynamic_color);
        for star in &mut self.dynamic_stars {
            // farther (smaller depth) is dimmer
            surface.set_fill_opacity(star.base_alpha * star.depth);
            advance_dynamic_star(star, bounds, scale, rng);
            surface.fill_circle(star.x, star.y, star.size);
        }
    }
}

struct Core<S> {
    config: StarfieldConfig,
    surface: S,
    viewport: Viewport,
    field: Starfield,
    rng: Box<dyn RandomSource>,
    phase: Phase,
    pending: Option<FrameHandle>,
    last_timestamp: Option<f64>,
    frames: u64,
}

impl<S: Surface> Core<S> {
    fn frame_scale(&mut self, timestamp: f64) -> f64 {
        match self.config.clock {
            ClockMode::FrameLocked => 1.0,
            ClockMode::RefreshScaled => {
                let scale = match self.last_timestamp {
                    Some(last) => {
                        let dt = ((timestamp - last) / 1000.0).clamp(0.0, MAX_FRAME_SECS);
                        dt / REFERENCE_FRAME_SECS
                    }
                    None => 1.0,
                };
                self.last_timestamp = Some(timestamp);
                scale
            }
        }
    }

    fn frame(&mut self, timestamp: f64) {
        let scale = self.frame_scale(timestamp);
        let bounds = self.viewport.current_bounds();
        self.field.render(&mut self.surface, bounds, &self.config, scale, self.rng.as_mut());
        self.frames += 1;
    }

    fn apply_bounds(&mut self, bounds: Bounds) {
        self.viewport.apply(bounds);
        let bounds = self.viewport.current_bounds();
        self.surface.resize(bounds.width, bounds.height);
    }

    fn regenerate(&mut self) {
        let bounds = self.viewport.current_bounds();
        self.field = Starfield::generate(&self.config, bounds, self.rng.as_mut());
        self.last_timestamp = None;
    }
}

/// Owns the starfield and drives it from the host's frame scheduler.
///
/// `start` populates both collections from the current viewport, listens for
/// resizes and arms the first frame; each frame re-arms the next. `stop`
/// removes the resize listener and cancels the pending frame so no callback
/// runs afterwards.
pub struct Engine<S, H>
where
    S: Surface + 'static,
    H: FrameScheduler + ViewportHost + 'static,
{
    core: Rc<RefCell<Core<S>>>,
    host: Rc<H>,
}

impl<S, H> Engine<S, H>
where
    S: Surface + 'static,
    H: FrameScheduler + ViewportHost + 'static,
{
    pub fn new(surface: S, host: Rc<H>, config: StarfieldConfig, rng: Box<dyn RandomSource>) -> Self {
        let viewport = Viewport::new(surface.bounds());
        Self {
            core: Rc::new(RefCell::new(Core {
                config: config.validated(),
                surface,
                viewport,
                field: Starfield::default(),
                rng,
                phase: Phase::Idle,
                pending: None,
                last_timestamp: None,
                frames: 0,
            })),
            host,
        }
    }

    pub fn phase(&self) -> Phase {
        self.core.borrow().phase
    }

    pub fn is_running(&self) -> bool {
        self.phase() == Phase::Running
    }

    pub fn bounds(&self) -> Bounds {
        self.core.borrow().viewport.current_bounds()
    }

    /// Frames rendered since construction.
    pub fn frames_drawn(&self) -> u64 {
        self.core.borrow().frames
    }

    pub fn with_field<R>(&self, f: impl FnOnce(&mut Starfield) -> R) -> R {
        f(&mut self.core.borrow_mut().field)
    }

    /// Idle -> Running. Returns false if already running or the host cannot
    /// report a viewport size.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        let Some(bounds) = self.host.inner_size() else {
            debug_log("starfield: no viewport size, not starting");
            return false;
        };

        {
            let mut core = self.core.borrow_mut();
            core.apply_bounds(bounds);
            core.regenerate();
            core.phase = Phase::Running;
            debug_log(&format!(
                "starfield: start {}x{} with {} dynamic / {} static stars",
                bounds.width,
                bounds.height,
                core.field.dynamic_stars.len(),
                core.field.static_stars.len(),
            ));
        }

        let core = self.core.clone();
        let host: Weak<H> = Rc::downgrade(&self.host);
        self.host.listen_resize(Box::new(move || {
            let Some(host) = host.upgrade() else { return };
            let mut core = core.borrow_mut();
            let bounds = core.viewport.on_resize(&*host);
            core.surface.resize(bounds.width, bounds.height);
        }));

        let core = self.core.clone();
        let host: Weak<H> = Rc::downgrade(&self.host);
        self.host.bind(Box::new(move |timestamp: f64| {
            let Some(host) = host.upgrade() else { return };
            let mut core = core.borrow_mut();
            core.pending = None;
            if core.phase != Phase::Running {
                return;
            }
            core.frame(timestamp);
            core.pending = host.request_frame();
        }));

        let first = self.host.request_frame();
        self.core.borrow_mut().pending = first;
        true
    }

    /// Running -> Idle. No-op when already idle.
    pub fn stop(&mut self) {
        let pending = {
            let mut core = self.core.borrow_mut();
            if core.phase == Phase::Idle {
                return;
            }
            core.phase = Phase::Idle;
            core.pending.take()
        };

        self.host.unlisten_resize();
        if let Some(handle) = pending {
            self.host.cancel_frame(handle);
        }
        self.host.unbind();
        debug_log("starfield: stopped");
    }

    /// Regenerates both collections from the current bounds and zeroes the clock.
    pub fn reset(&mut self) {
        self.core.borrow_mut().regenerate();
    }
}

impl<S, H> Drop for Engine<S, H>
where
    S: Surface + 'static,
    H: FrameScheduler + ViewportHost + 'static,
{
    fn drop(&mut self) {
        self.stop();
    }
}
