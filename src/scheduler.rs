/// Id of a pending frame request, as returned by `requestAnimationFrame`.
pub type FrameHandle = i32;

/// Host "run this once at the next redraw" primitive. A single callback is
/// bound and each `request_frame` schedules one invocation of it with the
/// host timestamp in milliseconds.
pub trait FrameScheduler {
    fn bind(&self, callback: Box<dyn FnMut(f64)>);
    fn request_frame(&self) -> Option<FrameHandle>;
    fn cancel_frame(&self, handle: FrameHandle);
    /// Drops the bound callback. Safe to call repeatedly.
    fn unbind(&self);
}
