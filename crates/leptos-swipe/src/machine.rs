//! Swipe gesture state machine.
//!
//! Pure transitions over an explicit phase value, kept free of signals and
//! DOM types so the classification logic is testable on the host target.
//! The signal/event glue lives in the crate root.

/// Screen-space point in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Terminal classification of a completed swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Tunable gesture parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal distance a release must exceed to count as a swipe.
    pub threshold_px: f64,
    /// Card rotation per pixel of horizontal offset, in degrees.
    pub rotation_deg_per_px: f64,
    /// Overlay stays hidden until the drag leaves this zone.
    pub overlay_deadzone_px: f64,
    /// Horizontal distance at which the overlay reaches full opacity.
    pub overlay_fade_px: f64,
    /// How long a right-swipe holds in `Settling` before committing.
    pub settle_delay_ms: u32,
    /// Duration of the snap-back transition.
    pub snap_back_ms: u32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold_px: 150.0,
            rotation_deg_per_px: 0.1,
            overlay_deadzone_px: 20.0,
            overlay_fade_px: 100.0,
            settle_delay_ms: 10_000,
            snap_back_ms: 300,
        }
    }
}

/// Live drag state between a pointer-down and its matching release.
///
/// The session is keyed by pointer id; events from any other pointer leave
/// it untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub pointer_id: i32,
    pub origin: Point,
    pub offset: Point,
}

impl DragSession {
    fn start(pointer_id: i32, origin: Point) -> Self {
        Self {
            pointer_id,
            origin,
            offset: Point::ZERO,
        }
    }

    fn moved_to(self, at: Point) -> Self {
        Self {
            offset: Point::new(at.x - self.origin.x, at.y - self.origin.y),
            ..self
        }
    }

    pub fn rotation_deg(&self, config: &SwipeConfig) -> f64 {
        self.offset.x * config.rotation_deg_per_px
    }

    pub fn overlay_opacity(&self, config: &SwipeConfig) -> f64 {
        (self.offset.x.abs() / config.overlay_fade_px).min(1.0)
    }

    pub fn overlay_visible(&self, config: &SwipeConfig) -> bool {
        self.offset.x.abs() > config.overlay_deadzone_px
    }

    /// Match styling when leaning right, pass styling otherwise.
    pub fn leaning_right(&self) -> bool {
        self.offset.x > 0.0
    }
}

/// Gesture interpreter phase for a single card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipePhase {
    Idle,
    Dragging(DragSession),
    /// Right-swipe recognized; holds the final session while the celebration
    /// plays, before the decision is committed.
    Settling(DragSession),
    /// Released inside the threshold; animating back to center.
    SnapBack,
}

/// Pointer-down. Starts a session from `Idle` or `SnapBack`; ignored while a
/// session is active or a match is settling.
pub fn press(phase: SwipePhase, pointer_id: i32, at: Point) -> SwipePhase {
    match phase {
        SwipePhase::Idle | SwipePhase::SnapBack => {
            SwipePhase::Dragging(DragSession::start(pointer_id, at))
        }
        SwipePhase::Dragging(_) | SwipePhase::Settling(_) => phase,
    }
}

/// Pointer-move. Updates the offset continuously while dragging.
pub fn drag_to(phase: SwipePhase, pointer_id: i32, at: Point) -> SwipePhase {
    match phase {
        SwipePhase::Dragging(session) if session.pointer_id == pointer_id => {
            SwipePhase::Dragging(session.moved_to(at))
        }
        _ => phase,
    }
}

/// Pointer-up. Classifies the gesture:
/// right past the threshold enters `Settling` (the decision is emitted later
/// by [`settle_elapsed`]), left past the threshold emits immediately, and
/// anything inside the threshold snaps back. Releasing with no active session
/// is a no-op.
pub fn release(
    phase: SwipePhase,
    pointer_id: i32,
    config: &SwipeConfig,
) -> (SwipePhase, Option<SwipeDirection>) {
    match phase {
        SwipePhase::Dragging(session) if session.pointer_id == pointer_id => {
            if session.offset.x > config.threshold_px {
                (SwipePhase::Settling(session), None)
            } else if session.offset.x < -config.threshold_px {
                (SwipePhase::Idle, Some(SwipeDirection::Left))
            } else {
                (SwipePhase::SnapBack, None)
            }
        }
        _ => (phase, None),
    }
}

/// Pointer-cancel. Drops an active session without a decision.
pub fn cancel(phase: SwipePhase, pointer_id: i32) -> SwipePhase {
    match phase {
        SwipePhase::Dragging(session) if session.pointer_id == pointer_id => SwipePhase::SnapBack,
        _ => phase,
    }
}

/// Settle timer fired: commit the pending right-swipe.
pub fn settle_elapsed(phase: SwipePhase) -> (SwipePhase, Option<SwipeDirection>) {
    match phase {
        SwipePhase::Settling(_) => (SwipePhase::Idle, Some(SwipeDirection::Right)),
        _ => (phase, None),
    }
}

/// Snap-back transition finished.
pub fn snap_elapsed(phase: SwipePhase) -> SwipePhase {
    match phase {
        SwipePhase::SnapBack => SwipePhase::Idle,
        _ => phase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINTER: i32 = 7;

    fn config() -> SwipeConfig {
        SwipeConfig::default()
    }

    fn dragged_to(x: f64, y: f64) -> SwipePhase {
        let phase = press(SwipePhase::Idle, POINTER, Point::new(10.0, 20.0));
        drag_to(phase, POINTER, Point::new(10.0 + x, 20.0 + y))
    }

    fn session(phase: SwipePhase) -> DragSession {
        match phase {
            SwipePhase::Dragging(session) | SwipePhase::Settling(session) => session,
            other => panic!("expected a session-bearing phase, got {other:?}"),
        }
    }

    #[test]
    fn press_records_origin_and_zero_offset() {
        let phase = press(SwipePhase::Idle, POINTER, Point::new(5.0, 9.0));
        let session = session(phase);
        assert_eq!(session.origin, Point::new(5.0, 9.0));
        assert_eq!(session.offset, Point::ZERO);
    }

    #[test]
    fn move_tracks_offset_from_origin() {
        let session = session(dragged_to(40.0, -10.0));
        assert_eq!(session.offset, Point::new(40.0, -10.0));
    }

    #[test]
    fn move_from_other_pointer_is_ignored() {
        let phase = dragged_to(40.0, 0.0);
        let unchanged = drag_to(phase, POINTER + 1, Point::new(500.0, 500.0));
        assert_eq!(unchanged, phase);
    }

    #[test]
    fn release_past_threshold_right_settles_without_decision() {
        let (phase, decision) = release(dragged_to(200.0, 0.0), POINTER, &config());
        assert!(matches!(phase, SwipePhase::Settling(_)));
        assert_eq!(decision, None);
    }

    #[test]
    fn settle_elapsed_commits_right_swipe() {
        let (phase, _) = release(dragged_to(200.0, 0.0), POINTER, &config());
        let (phase, decision) = settle_elapsed(phase);
        assert_eq!(phase, SwipePhase::Idle);
        assert_eq!(decision, Some(SwipeDirection::Right));
    }

    #[test]
    fn release_past_threshold_left_emits_immediately() {
        let (phase, decision) = release(dragged_to(-200.0, 0.0), POINTER, &config());
        assert_eq!(phase, SwipePhase::Idle);
        assert_eq!(decision, Some(SwipeDirection::Left));
    }

    #[test]
    fn release_inside_threshold_snaps_back() {
        let (phase, decision) = release(dragged_to(50.0, 0.0), POINTER, &config());
        assert_eq!(phase, SwipePhase::SnapBack);
        assert_eq!(decision, None);
        assert_eq!(snap_elapsed(phase), SwipePhase::Idle);
    }

    #[test]
    fn release_at_exact_threshold_snaps_back() {
        let (phase, decision) = release(dragged_to(150.0, 0.0), POINTER, &config());
        assert_eq!(phase, SwipePhase::SnapBack);
        assert_eq!(decision, None);
    }

    #[test]
    fn release_without_active_session_is_noop() {
        let (phase, decision) = release(SwipePhase::Idle, POINTER, &config());
        assert_eq!(phase, SwipePhase::Idle);
        assert_eq!(decision, None);
    }

    #[test]
    fn release_from_other_pointer_is_noop() {
        let phase = dragged_to(200.0, 0.0);
        let (unchanged, decision) = release(phase, POINTER + 1, &config());
        assert_eq!(unchanged, phase);
        assert_eq!(decision, None);
    }

    #[test]
    fn press_while_settling_is_ignored() {
        let (settling, _) = release(dragged_to(200.0, 0.0), POINTER, &config());
        let phase = press(settling, POINTER, Point::ZERO);
        assert_eq!(phase, settling);
    }

    #[test]
    fn press_during_snap_back_starts_fresh_session() {
        let (phase, _) = release(dragged_to(50.0, 0.0), POINTER, &config());
        let phase = press(phase, POINTER, Point::new(1.0, 2.0));
        assert_eq!(session(phase).offset, Point::ZERO);
    }

    #[test]
    fn cancel_drops_session_without_decision() {
        assert_eq!(cancel(dragged_to(300.0, 0.0), POINTER), SwipePhase::SnapBack);
        assert_eq!(cancel(SwipePhase::Idle, POINTER), SwipePhase::Idle);
    }

    #[test]
    fn overlay_opacity_scales_and_clamps() {
        let cfg = config();
        assert!((session(dragged_to(80.0, 0.0)).overlay_opacity(&cfg) - 0.8).abs() < 1e-9);
        assert!((session(dragged_to(150.0, 0.0)).overlay_opacity(&cfg) - 1.0).abs() < 1e-9);
        assert!((session(dragged_to(-80.0, 0.0)).overlay_opacity(&cfg) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn overlay_hidden_inside_deadzone() {
        let cfg = config();
        assert!(!session(dragged_to(20.0, 0.0)).overlay_visible(&cfg));
        assert!(session(dragged_to(21.0, 0.0)).overlay_visible(&cfg));
        assert!(session(dragged_to(-21.0, 0.0)).overlay_visible(&cfg));
    }

    #[test]
    fn overlay_side_follows_offset_sign() {
        assert!(session(dragged_to(30.0, 0.0)).leaning_right());
        assert!(!session(dragged_to(-30.0, 0.0)).leaning_right());
    }

    #[test]
    fn rotation_is_linear_in_horizontal_offset() {
        let cfg = config();
        assert!((session(dragged_to(120.0, 55.0)).rotation_deg(&cfg) - 12.0).abs() < 1e-9);
        assert!((session(dragged_to(-40.0, 0.0)).rotation_deg(&cfg) + 4.0).abs() < 1e-9);
    }
}
