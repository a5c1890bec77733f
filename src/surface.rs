use crate::viewport::Bounds;

/// Minimal 2D drawing contract. Fill color and fill opacity are independent
/// and apply to every following draw call until changed.
pub trait Surface {
    fn bounds(&self) -> Bounds;
    /// Matches the pixel buffer to the viewport.
    fn resize(&mut self, width: f64, height: f64);
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn set_fill_color(&mut self, color: &str);
    fn set_fill_opacity(&mut self, opacity: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64);
}
