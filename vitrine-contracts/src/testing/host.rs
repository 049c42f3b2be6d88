use crate::host::{ScrollBehavior, SlideHost};

/// A single scroll repositioning request seen by [`RecordingHost`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub left: f64,
    pub behavior: ScrollBehavior,
}

/// In-memory [`SlideHost`] that records what the controller asked for.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    offsets: Vec<f64>,
    nav_active: Vec<bool>,
    scrolls: Vec<ScrollRequest>,
}

impl RecordingHost {
    /// `slides` equally wide slides laid out edge to edge, with one
    /// navigation control per slide.
    pub fn uniform(slides: usize, slide_width: f64) -> Self {
        let offsets = (0..slides).map(|i| i as f64 * slide_width).collect();
        Self::with_offsets(offsets)
    }

    /// Slides at explicit left offsets, with one navigation control per slide.
    pub fn with_offsets(offsets: Vec<f64>) -> Self {
        let nav_active = vec![false; offsets.len()];
        Self {
            offsets,
            nav_active,
            scrolls: Vec::new(),
        }
    }

    /// Replace the navigation controls with `count` inactive ones.
    pub fn with_nav_count(mut self, count: usize) -> Self {
        self.nav_active = vec![false; count];
        self
    }

    /// Indices of every control currently marked active.
    pub fn active_nav(&self) -> Vec<usize> {
        self.nav_active
            .iter()
            .enumerate()
            .filter_map(|(i, active)| active.then_some(i))
            .collect()
    }

    pub fn is_nav_active(&self, index: usize) -> bool {
        self.nav_active.get(index).copied().unwrap_or(false)
    }

    pub fn scrolls(&self) -> &[ScrollRequest] {
        &self.scrolls
    }

    pub fn last_scroll(&self) -> Option<ScrollRequest> {
        self.scrolls.last().copied()
    }
}

impl SlideHost for RecordingHost {
    fn slide_count(&self) -> usize {
        self.offsets.len()
    }

    fn slide_offset(&self, index: usize) -> f64 {
        self.offsets[index]
    }

    fn scroll_to(&mut self, left: f64, behavior: ScrollBehavior) {
        self.scrolls.push(ScrollRequest { left, behavior });
    }

    fn nav_count(&self) -> usize {
        self.nav_active.len()
    }

    fn set_nav_active(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.nav_active.get_mut(index) {
            *slot = active;
        }
    }
}
