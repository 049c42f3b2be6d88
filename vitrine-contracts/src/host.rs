/// How a scroll repositioning request should be animated by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Jump straight to the target offset.
    Instant,
    /// Let the host ease towards the target offset.
    #[default]
    Smooth,
}

/// Element provider for a single slider instance.
///
/// The controller reads both counts once when it is built and never again,
/// so implementations may snapshot their elements up front. Slide `i` and
/// navigation control `i` refer to the same position.
pub trait SlideHost {
    /// Number of slides inside the container.
    fn slide_count(&self) -> usize;

    /// Left edge of slide `index` relative to the container, in pixels.
    ///
    /// Only called with `index < slide_count()`.
    fn slide_offset(&self, index: usize) -> f64;

    /// Request that the container scroll horizontally to `left`.
    /// Fire-and-forget; completion is never observed.
    fn scroll_to(&mut self, left: f64, behavior: ScrollBehavior);

    /// Number of navigation controls bound to this slider.
    fn nav_count(&self) -> usize;

    /// Set or clear the "active" marker on navigation control `index`.
    fn set_nav_active(&mut self, index: usize, active: bool);
}
