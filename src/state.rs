use druid::Data;

use crate::math::{drag_angle, matches_any, Direction, DIRECTION_COUNT};

/// Application state
#[derive(Clone, Data)]
pub struct AppState {
    /// The fixed candidate set; computed once at startup, read-only
    #[data(ignore)]
    pub candidates: [Direction; DIRECTION_COUNT],
    /// The direction the user must rotate the draggable arrow to match
    pub target: Direction,
    /// The live direction controlled by drag input
    pub current: Direction,
    /// Set once a drag ends near a canonical direction; never cleared
    pub matched: bool,
    /// Enable debug overlay
    pub debug: bool,
    /// Per-axis tolerance for the match check
    pub epsilon: f64,
    /// Pixels of horizontal drag per radian of rotation
    pub sensitivity: f64,
}

impl AppState {
    /// Fresh challenge state: the draggable arrow starts at (1, 0), unmatched
    pub fn new(
        candidates: [Direction; DIRECTION_COUNT],
        target: Direction,
        epsilon: f64,
        sensitivity: f64,
        debug: bool,
    ) -> Self {
        AppState {
            candidates,
            target,
            current: Direction { x: 1.0, y: 0.0 },
            matched: false,
            debug,
            epsilon,
            sensitivity,
        }
    }

    /// Drag-changed event: rotates the draggable arrow.
    ///
    /// `delta_px` is the cumulative horizontal displacement since the
    /// gesture started. Each move event rotates the live vector by the
    /// cumulative angle, so a stream of move events compounds; this
    /// mirrors the reference widget's behavior.
    pub fn drag_changed(&mut self, delta_px: f64) {
        self.current = self.current.rotated(drag_angle(delta_px, self.sensitivity));
    }

    /// Drag-ended event: checks the draggable arrow against the candidate
    /// set. A successful match is one-shot; once `matched` is set, later
    /// failed checks do not clear it.
    pub fn drag_ended(&mut self) {
        if !self.matched {
            self.matched = matches_any(self.current, &self.candidates, self.epsilon);
        }
    }
}
