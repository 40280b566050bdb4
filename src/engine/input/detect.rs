// Press-stream detectors: double-click and hold-duration tracking
//
// Both are pure time-keeping utilities. They never read the clock themselves;
// the caller passes in monotonic game time so tests (and replays) can drive
// them deterministically.

use super::action::Action;
use std::collections::HashMap;

/// Default window within which two presses count as a double-click (seconds)
pub const DEFAULT_DOUBLE_CLICK_THRESHOLD: f32 = 0.3;

/// Per-action double-click state
#[derive(Debug, Default)]
struct ClickEntry {
    /// Time of the press that may become the first half of a double-click.
    /// Cleared when a double-click fires so a triple-press yields one event.
    last_click: Option<f32>,
}

/// Converts a stream of discrete "pressed this tick" pulses into
/// "double-click fired" pulses, tracked independently per action.
///
/// Entries are created lazily on first sight of an action and persist until
/// explicitly reset.
#[derive(Debug)]
pub struct DoubleClickDetector {
    threshold: f32,
    entries: HashMap<Action, ClickEntry>,
}

impl DoubleClickDetector {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            entries: HashMap::new(),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Feed one tick of press state for an action. Returns true exactly on
    /// the tick where a press lands within `(0, threshold]` seconds of the
    /// previous press for the same action. Firing consumes the tracked
    /// press, so a third press inside the window starts a fresh pair
    /// instead of firing again.
    pub fn detect(&mut self, action: Action, pressed: bool, now: f32) -> bool {
        if !pressed {
            return false;
        }

        let entry = self.entries.entry(action).or_default();
        match entry.last_click {
            Some(last) => {
                let since = now - last;
                if since > 0.0 && since <= self.threshold {
                    entry.last_click = None;
                    true
                } else {
                    entry.last_click = Some(now);
                    false
                }
            }
            None => {
                entry.last_click = Some(now);
                false
            }
        }
    }

    /// Forget any tracked press for an action, without firing
    pub fn reset(&mut self, action: Action) {
        self.entries.remove(&action);
    }

    /// Forget all tracked state
    pub fn reset_all(&mut self) {
        self.entries.clear();
    }
}

impl Default for DoubleClickDetector {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_CLICK_THRESHOLD)
    }
}

/// Tracks how long a button has been continuously held.
///
/// `update` must run exactly once per tick, before any `duration` query for
/// that tick.
#[derive(Debug, Default)]
pub struct HoldTracker {
    hold_start: f32,
    held: bool,
}

impl HoldTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one tick of press state. Records the start time on the
    /// false-to-true edge and clears on release.
    pub fn update(&mut self, pressed: bool, now: f32) {
        if pressed && !self.held {
            self.held = true;
            self.hold_start = now;
        } else if !pressed && self.held {
            self.held = false;
            self.hold_start = 0.0;
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Seconds the button has been held, or 0 when not held
    pub fn duration(&self, now: f32) -> f32 {
        if self.held {
            now - self.hold_start
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn double_click_fires_on_second_press_within_window() {
        let mut detector = DoubleClickDetector::new(0.3);
        assert!(!detector.detect(Action::Attack, true, 0.0));
        assert!(detector.detect(Action::Attack, true, 0.2));
    }

    #[test]
    fn triple_press_fires_only_once() {
        let mut detector = DoubleClickDetector::new(0.3);
        assert!(!detector.detect(Action::Attack, true, 0.0));
        assert!(detector.detect(Action::Attack, true, 0.2));
        // Third press lands inside what would have been the window; the fire
        // at 0.2 consumed the pair, so this starts a new one.
        assert!(!detector.detect(Action::Attack, true, 0.25));
    }

    #[test]
    fn slow_presses_never_fire() {
        let mut detector = DoubleClickDetector::new(0.3);
        assert!(!detector.detect(Action::Attack, true, 0.0));
        assert!(!detector.detect(Action::Attack, true, 0.5));
        // The late press re-arms the window though
        assert!(detector.detect(Action::Attack, true, 0.7));
    }

    #[test]
    fn unpressed_ticks_do_not_fire_or_mutate() {
        let mut detector = DoubleClickDetector::new(0.3);
        assert!(!detector.detect(Action::Attack, true, 0.0));
        assert!(!detector.detect(Action::Attack, false, 0.1));
        assert!(!detector.detect(Action::Attack, false, 0.15));
        assert!(detector.detect(Action::Attack, true, 0.2));
    }

    #[test]
    fn simultaneous_presses_do_not_count() {
        // The window is (0, threshold]: a "pair" at the same instant is one press
        let mut detector = DoubleClickDetector::new(0.3);
        assert!(!detector.detect(Action::Attack, true, 1.0));
        assert!(!detector.detect(Action::Attack, true, 1.0));
    }

    #[test]
    fn actions_are_tracked_independently() {
        let mut detector = DoubleClickDetector::new(0.3);
        assert!(!detector.detect(Action::Attack, true, 0.0));
        assert!(!detector.detect(Action::Jump, true, 0.1));
        // Attack's pair completes; Jump's press did not interfere
        assert!(detector.detect(Action::Attack, true, 0.2));
        assert!(detector.detect(Action::Jump, true, 0.3));
    }

    #[test]
    fn reset_clears_pending_press() {
        let mut detector = DoubleClickDetector::new(0.3);
        assert!(!detector.detect(Action::Attack, true, 0.0));
        detector.reset(Action::Attack);
        assert!(!detector.detect(Action::Attack, true, 0.2));
    }

    #[test]
    fn reset_all_clears_every_action() {
        let mut detector = DoubleClickDetector::new(0.3);
        assert!(!detector.detect(Action::Attack, true, 0.0));
        assert!(!detector.detect(Action::Jump, true, 0.0));
        detector.reset_all();
        assert!(!detector.detect(Action::Attack, true, 0.2));
        assert!(!detector.detect(Action::Jump, true, 0.2));
    }

    #[test]
    fn hold_duration_tracks_press_span() {
        let mut tracker = HoldTracker::new();

        tracker.update(false, 0.5);
        assert_eq!(tracker.duration(0.5), 0.0);

        tracker.update(true, 1.0);
        assert!(tracker.is_held());
        assert_relative_eq!(tracker.duration(2.0), 1.0);
        assert_relative_eq!(tracker.duration(3.5), 2.5);

        tracker.update(false, 3.5);
        assert!(!tracker.is_held());
        assert_eq!(tracker.duration(3.5), 0.0);
        assert_eq!(tracker.duration(4.0), 0.0);
    }

    #[test]
    fn hold_start_is_not_rearmed_while_held() {
        let mut tracker = HoldTracker::new();
        tracker.update(true, 1.0);
        tracker.update(true, 2.0);
        assert_relative_eq!(tracker.duration(2.0), 1.0);
    }
}
