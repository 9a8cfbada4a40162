//! Render state tracking for panel redraws.
//!
//! The three panels have very different update patterns:
//!
//! | Panel | Update Frequency | Strategy |
//! |-------|-----------------|----------|
//! | Display | On every state change and clock tick | Full clear + redraw |
//! | Buttons | Never changes | Draw once |
//! | Sliders | Never changes | Draw once |
//!
//! The display panel is never patched: a redraw request always clears the
//! whole panel and renders it again from [`HvacState`](crate::state::HvacState).
//! Requests made between two frames are served by a single redraw on the next
//! frame, which shows the same picture as redrawing after each one.

/// Tracks which panels must be drawn on the next frame.
pub struct RenderState {
    /// Whether this is the first frame (everything needs drawing).
    first_frame: bool,

    /// Whether the display panel has a pending redraw request.
    display_dirty: bool,

    /// Whether the static control panels have been drawn.
    controls_drawn: bool,

    /// Redraw requests received since startup.
    requests: u32,

    /// Display redraws actually performed since startup.
    redraws: u32,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self {
            first_frame: true,
            display_dirty: true,
            controls_drawn: false,
            requests: 0,
            redraws: 0,
        }
    }

    /// Ask for a full display redraw on the next frame.
    pub const fn request_display(&mut self) {
        self.display_dirty = true;
        self.requests = self.requests.saturating_add(1);
    }

    /// Check if the display panel needs redrawing.
    #[inline]
    pub const fn need_display(&self) -> bool { self.display_dirty || self.first_frame }

    /// Mark the display panel as redrawn.
    pub const fn mark_display_drawn(&mut self) {
        self.display_dirty = false;
        self.redraws = self.redraws.saturating_add(1);
    }

    /// Check if the button and slider panels need drawing.
    #[inline]
    pub const fn need_controls(&self) -> bool { !self.controls_drawn || self.first_frame }

    /// Mark the button and slider panels as drawn.
    #[inline]
    pub const fn mark_controls_drawn(&mut self) { self.controls_drawn = true; }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Redraw requests received since startup.
    #[inline]
    pub const fn requests(&self) -> u32 { self.requests }

    /// Display redraws performed since startup.
    #[inline]
    pub const fn redraws(&self) -> u32 { self.redraws }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) { self.first_frame = false; }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_state_new() {
        let state = RenderState::new();
        assert!(state.is_first_frame(), "is_first_frame should be true initially");
        assert!(state.need_display(), "Display should be drawn on first frame");
        assert!(state.need_controls(), "Controls should be drawn on first frame");
        assert_eq!(state.requests(), 0);
        assert_eq!(state.redraws(), 0);
    }

    #[test]
    fn test_controls_draw_once() {
        let mut state = RenderState::new();
        state.mark_controls_drawn();
        state.end_frame();
        assert!(!state.need_controls(), "Controls should not redraw after first frame");
    }

    #[test]
    fn test_display_clean_after_draw() {
        let mut state = RenderState::new();
        state.mark_display_drawn();
        state.end_frame();
        assert!(!state.need_display());
        assert_eq!(state.redraws(), 1);
    }

    #[test]
    fn test_request_marks_dirty() {
        let mut state = RenderState::new();
        state.mark_display_drawn();
        state.end_frame();

        state.request_display();
        assert!(state.need_display());
        assert_eq!(state.requests(), 1);

        state.mark_display_drawn();
        assert!(!state.need_display());
        assert_eq!(state.redraws(), 2);
    }

    #[test]
    fn test_requests_between_frames_coalesce() {
        let mut state = RenderState::new();
        state.mark_display_drawn();
        state.end_frame();

        state.request_display();
        state.request_display();
        state.mark_display_drawn();
        state.end_frame();

        assert_eq!(state.requests(), 2);
        assert_eq!(state.redraws(), 2, "two requests served by one redraw");
        assert!(!state.need_display());
    }

    #[test]
    fn test_render_state_default() {
        let default_state = RenderState::default();
        let new_state = RenderState::new();
        assert_eq!(default_state.is_first_frame(), new_state.is_first_frame());
        assert_eq!(default_state.need_display(), new_state.need_display());
        assert_eq!(default_state.need_controls(), new_state.need_controls());
    }
}
