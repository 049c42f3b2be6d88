//! Input events a slider reacts to

use vitrine_contracts::TimerId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// Navigation control `i` was clicked.
    NavPressed(usize),

    // Touch
    TouchStarted { screen_x: f64 },
    TouchEnded { screen_x: f64 },

    // Hover
    PointerEntered,
    PointerLeft,

    /// A repeating timer fired.
    Tick(TimerId),
}
