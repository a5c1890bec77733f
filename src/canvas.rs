use std::cell::RefCell;
use std::f64::consts::TAU;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::surface::Surface;
use crate::viewport::{Bounds, ViewportHost};

pub fn get_canvas_context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()?
        .map(|c| c.unchecked_into())
}

/// `Surface` over a 2D canvas. Opacity maps to `globalAlpha`, color to
/// `fillStyle`.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// None when the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = get_canvas_context(&canvas)?;
        Some(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_fill_opacity(&mut self, opacity: f64) {
        self.ctx.set_global_alpha(opacity);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(cx, cy, r, 0.0, TAU);
        self.ctx.fill();
    }
}

/// Browser window as frame scheduler (`requestAnimationFrame`) and viewport
/// (`innerWidth`/`innerHeight` plus the `resize` event). Owns the JS closures
/// and drops them on unbind/unlisten.
pub struct WindowHost {
    window: Window,
    frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    resize: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>>,
}

impl WindowHost {
    pub fn new() -> Option<Self> {
        Some(Self {
            window: web_sys::window()?,
            frame: RefCell::new(None),
            resize: RefCell::new(None),
        })
    }
}

impl FrameScheduler for WindowHost {
    fn bind(&self, callback: Box<dyn FnMut(f64)>) {
        *self.frame.borrow_mut() = Some(Closure::wrap(callback));
    }

    fn request_frame(&self) -> Option<FrameHandle> {
        let frame = self.frame.borrow();
        let closure = frame.as_ref()?;
        self.window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle);
    }

    fn unbind(&self) {
        self.frame.borrow_mut().take();
    }
}

impl ViewportHost for WindowHost {
    fn inner_size(&self) -> Option<Bounds> {
        let w = self.window.inner_width().ok()?.as_f64()?;
        let h = self.window.inner_height().ok()?.as_f64()?;
        Some(Bounds::new(w, h))
    }

    fn listen_resize(&self, mut callback: Box<dyn FnMut()>) {
        self.unlisten_resize();
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            callback();
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = self
            .window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        *self.resize.borrow_mut() = Some(closure);
    }

    fn unlisten_resize(&self) {
        if let Some(closure) = self.resize.borrow_mut().take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    }
}
