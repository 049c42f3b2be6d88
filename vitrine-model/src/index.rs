//! Wrap-around index arithmetic for an infinite carousel.
//!
//! Both helpers return `None` for an empty slide set instead of dividing by
//! zero, so callers can treat navigation on an empty slider as a no-op.

/// Index of the slide after `current`, wrapping to 0 past the end.
pub fn wrap_next(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((current % len + 1) % len)
}

/// Index of the slide before `current`, wrapping to `len - 1` below 0.
pub fn wrap_previous(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((current % len + len - 1) % len)
}
