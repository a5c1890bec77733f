//! Host doubles for native tests: a surface that records draw calls, a host
//! whose frames and resizes fire on demand, and a scripted random source.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::rng::RandomSource;
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::surface::Surface;
use crate::viewport::{Bounds, ViewportHost};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear { w: f64, h: f64 },
    Rect { x: f64, y: f64, size: f64, color: String, opacity: f64 },
    Circle { cx: f64, cy: f64, r: f64, color: String, opacity: f64 },
}

#[derive(Default)]
struct SurfaceLog {
    bounds: Bounds,
    color: String,
    opacity: f64,
    ops: Vec<DrawOp>,
}

/// Clones share one log, so a test can keep a probe after handing the
/// surface to an engine.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> Vec<DrawOp> {
        self.log.borrow().ops.clone()
    }

    /// Rects and circles drawn so far.
    pub fn draw_calls(&self) -> usize {
        self.log
            .borrow()
            .ops
            .iter()
            .filter(|op| !matches!(op, DrawOp::Clear { .. }))
            .count()
    }

    pub fn last_clear(&self) -> Option<DrawOp> {
        self.log
            .borrow()
            .ops
            .iter()
            .rev()
            .find(|op| matches!(op, DrawOp::Clear { .. }))
            .cloned()
    }
}

impl Surface for RecordingSurface {
    fn bounds(&self) -> Bounds {
        self.log.borrow().bounds
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.log.borrow_mut().bounds = Bounds::new(width, height);
    }

    fn clear_rect(&mut self, _x: f64, _y: f64, w: f64, h: f64) {
        self.log.borrow_mut().ops.push(DrawOp::Clear { w, h });
    }

    fn set_fill_color(&mut self, color: &str) {
        self.log.borrow_mut().color = color.to_string();
    }

    fn set_fill_opacity(&mut self, opacity: f64) {
        self.log.borrow_mut().opacity = opacity;
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, _h: f64) {
        let mut log = self.log.borrow_mut();
        let op = DrawOp::Rect { x, y, size: w, color: log.color.clone(), opacity: log.opacity };
        log.ops.push(op);
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64) {
        let mut log = self.log.borrow_mut();
        let op = DrawOp::Circle { cx, cy, r, color: log.color.clone(), opacity: log.opacity };
        log.ops.push(op);
    }
}

/// Frame scheduler and viewport whose events fire only when the test says so.
pub struct ManualHost {
    size: Cell<Option<Bounds>>,
    frame_callback: RefCell<Option<Box<dyn FnMut(f64)>>>,
    bound: Cell<bool>,
    pending: Cell<Option<FrameHandle>>,
    next_handle: Cell<FrameHandle>,
    cancelled: Cell<u32>,
    resize_callback: RefCell<Option<Box<dyn FnMut()>>>,
    unlistened: Cell<u32>,
}

impl ManualHost {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Cell::new(Some(Bounds::new(width, height))),
            frame_callback: RefCell::new(None),
            bound: Cell::new(false),
            pending: Cell::new(None),
            next_handle: Cell::new(1),
            cancelled: Cell::new(0),
            resize_callback: RefCell::new(None),
            unlistened: Cell::new(0),
        }
    }

    pub fn set_size(&self, size: Option<Bounds>) {
        self.size.set(size);
    }

    /// Runs the pending frame, if any. Returns whether a callback ran.
    pub fn fire_frame(&self, timestamp: f64) -> bool {
        if self.pending.take().is_none() {
            return false;
        }
        // Taken out while running so the callback can re-request a frame
        let Some(mut callback) = self.frame_callback.borrow_mut().take() else {
            return false;
        };
        callback(timestamp);
        let mut slot = self.frame_callback.borrow_mut();
        if self.bound.get() && slot.is_none() {
            *slot = Some(callback);
        }
        true
    }

    pub fn fire_resize(&self) {
        let Some(mut callback) = self.resize_callback.borrow_mut().take() else {
            return;
        };
        callback();
        let mut slot = self.resize_callback.borrow_mut();
        if slot.is_none() {
            *slot = Some(callback);
        }
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn is_bound(&self) -> bool {
        self.bound.get()
    }

    pub fn is_listening(&self) -> bool {
        self.resize_callback.borrow().is_some()
    }

    pub fn cancelled(&self) -> u32 {
        self.cancelled.get()
    }

    pub fn unlistened(&self) -> u32 {
        self.unlistened.get()
    }
}

impl FrameScheduler for ManualHost {
    fn bind(&self, callback: Box<dyn FnMut(f64)>) {
        *self.frame_callback.borrow_mut() = Some(callback);
        self.bound.set(true);
    }

    fn request_frame(&self) -> Option<FrameHandle> {
        if !self.bound.get() {
            return None;
        }
        let handle = self.next_handle.get();
        self.next_handle.set(handle + 1);
        self.pending.set(Some(handle));
        Some(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        if self.pending.get() == Some(handle) {
            self.pending.set(None);
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    fn unbind(&self) {
        self.bound.set(false);
        self.frame_callback.borrow_mut().take();
    }
}

impl ViewportHost for ManualHost {
    fn inner_size(&self) -> Option<Bounds> {
        self.size.get()
    }

    fn listen_resize(&self, callback: Box<dyn FnMut()>) {
        *self.resize_callback.borrow_mut() = Some(callback);
    }

    fn unlisten_resize(&self) {
        if self.resize_callback.borrow_mut().take().is_some() {
            self.unlistened.set(self.unlistened.get() + 1);
        }
    }
}

/// Returns the given draws in order; panics when exhausted.
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws: draws.into() }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        self.draws.pop_front().expect("scripted random source exhausted")
    }
}
