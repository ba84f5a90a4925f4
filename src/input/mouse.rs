use glam::Vec2;

/// Tracks the last cursor position so absolute positions can be turned into
/// offsets. The first position after a reset only seeds the tracker.
#[derive(Debug, Clone, Default)]
pub(crate) struct CursorTracker {
    last: Option<Vec2>,
}

impl CursorTracker {
    /// Record a new position and return the offset from the previous one.
    pub(crate) fn moved(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let pos = Vec2::new(x, y);
        let delta = self.last.map(|last| pos - last);
        self.last = Some(pos);
        delta
    }

    /// Forget the last position (cursor left the window, focus lost).
    pub(crate) fn reset(&mut self) {
        self.last = None;
    }

    pub(crate) fn position(&self) -> Option<Vec2> {
        self.last
    }
}
