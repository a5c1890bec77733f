/// Drawing-surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Negative or NaN dimensions become zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: if width > 0.0 { width } else { 0.0 },
            height: if height > 0.0 { height } else { 0.0 },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Host environment reporting the viewport size and its resize events.
pub trait ViewportHost {
    fn inner_size(&self) -> Option<Bounds>;
    fn listen_resize(&self, callback: Box<dyn FnMut()>);
    /// Removes the listener, if any. Safe to call repeatedly.
    fn unlisten_resize(&self);
}

/// Holds the latest bounds. Resizing never touches star positions; stars
/// outside new bounds are handled by wrap-around.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    bounds: Bounds,
}

impl Viewport {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    pub fn current_bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn apply(&mut self, bounds: Bounds) {
        self.bounds = Bounds::new(bounds.width, bounds.height);
    }

    /// Re-reads the size from the host. Keeps the previous bounds if the host
    /// cannot report one.
    pub fn on_resize<H: ViewportHost + ?Sized>(&mut self, host: &H) -> Bounds {
        if let Some(bounds) = host.inner_size() {
            self.apply(bounds);
        }
        self.bounds
    }
}
