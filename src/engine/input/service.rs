// Game-facing input query service
//
// Sits between the raw binding layer (InputManager/PlayerInput) and game
// logic. Snapshots one player's action state each frame and layers the
// derived queries on top: double-click detection, hold duration, and the
// logical movement vector. Constructed explicitly and passed to whoever
// needs it; there is no global input singleton.

use super::action::Action;
use super::detect::{DoubleClickDetector, HoldTracker};
use super::player::PlayerInput;
use glam::Vec2;
use std::collections::{HashMap, HashSet};

/// Movement below this squared length is treated as "no input"
/// (stick drift / dead zone)
pub const MOVE_INPUT_DEADZONE_SQ: f32 = 0.01;

/// Actions watched for double-clicks
const DOUBLE_CLICK_ACTIONS: [Action; 2] = [Action::Attack, Action::Jump];

/// Actions whose hold duration is tracked
const HOLD_ACTIONS: [Action; 1] = [Action::Attack];

/// Per-frame snapshot of one player's input plus derived detections.
///
/// `update` must run exactly once per frame, after the binding layer has
/// processed its events and before any query. All queries are then
/// read-only and stable for the rest of the frame.
pub struct GameInput {
    triggered: HashSet<Action>,
    held: HashSet<Action>,
    movement: Vec2,
    now: f32,

    double_clicks: DoubleClickDetector,
    fired_double_clicks: HashSet<Action>,
    hold_trackers: HashMap<Action, HoldTracker>,
}

impl GameInput {
    pub fn new() -> Self {
        Self::with_double_click_threshold(super::detect::DEFAULT_DOUBLE_CLICK_THRESHOLD)
    }

    pub fn with_double_click_threshold(threshold: f32) -> Self {
        let mut hold_trackers = HashMap::new();
        for action in HOLD_ACTIONS {
            hold_trackers.insert(action, HoldTracker::new());
        }
        Self {
            triggered: HashSet::new(),
            held: HashSet::new(),
            movement: Vec2::ZERO,
            now: 0.0,
            double_clicks: DoubleClickDetector::new(threshold),
            fired_double_clicks: HashSet::new(),
            hold_trackers,
        }
    }

    /// Snapshot the player's state for this frame and advance the detectors.
    /// `now` is monotonic game time in seconds.
    pub fn update(&mut self, player: &PlayerInput, now: f32) {
        self.now = now;

        self.triggered.clear();
        self.held.clear();
        // A press edge counts as triggered even if the key was released again
        // before this frame's snapshot.
        self.triggered.extend(player.get_just_pressed_actions());
        self.held.extend(player.get_pressed_actions());

        self.movement = player.movement_vector();

        self.fired_double_clicks.clear();
        for action in DOUBLE_CLICK_ACTIONS {
            if self
                .double_clicks
                .detect(action, self.triggered.contains(&action), now)
            {
                self.fired_double_clicks.insert(action);
            }
        }

        for (action, tracker) in &mut self.hold_trackers {
            tracker.update(self.held.contains(action), now);
        }
    }

    // ========== Basic queries ==========

    /// Did this action's press edge land on this frame?
    pub fn triggered(&self, action: Action) -> bool {
        self.triggered.contains(&action)
    }

    /// Is this action currently down?
    pub fn held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    // ========== Movement ==========

    /// Logical movement vector (x: left/right, y: depth axis)
    pub fn movement_vector(&self) -> Vec2 {
        self.movement
    }

    pub fn has_move_input(&self) -> bool {
        self.movement.length_squared() > MOVE_INPUT_DEADZONE_SQ
    }

    // ========== Derived detections ==========

    /// Did a double-click complete on this action this frame?
    pub fn double_clicked(&self, action: Action) -> bool {
        self.fired_double_clicks.contains(&action)
    }

    /// Seconds the action has been continuously held, or 0. Only actions in
    /// the tracked set report a duration.
    pub fn hold_duration(&self, action: Action) -> f32 {
        self.hold_trackers
            .get(&action)
            .map(|t| t.duration(self.now))
            .unwrap_or(0.0)
    }

    /// Reset every detector and snapshot (e.g. on focus loss)
    pub fn reset(&mut self) {
        self.triggered.clear();
        self.held.clear();
        self.movement = Vec2::ZERO;
        self.fired_double_clicks.clear();
        self.double_clicks.reset_all();
        for tracker in self.hold_trackers.values_mut() {
            tracker.update(false, self.now);
        }
    }
}

impl Default for GameInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn press_frame(player: &mut PlayerInput, input: &mut GameInput, action: Action, now: f32) {
        player.press(action);
        input.update(player, now);
        player.update();
        player.release(action);
        player.update();
    }

    #[test]
    fn triggered_and_held_snapshot() {
        let mut player = PlayerInput::new(0);
        let mut input = GameInput::new();

        player.press(Action::Attack);
        input.update(&player, 0.0);
        assert!(input.triggered(Action::Attack));
        assert!(input.held(Action::Attack));

        player.update(); // press edge consumed
        input.update(&player, 0.016);
        assert!(!input.triggered(Action::Attack));
        assert!(input.held(Action::Attack));
    }

    #[test]
    fn movement_vector_and_deadzone() {
        let mut player = PlayerInput::new(0);
        let mut input = GameInput::new();

        input.update(&player, 0.0);
        assert!(!input.has_move_input());

        player.press(Action::MoveRight);
        input.update(&player, 0.016);
        assert!(input.has_move_input());
        assert_eq!(input.movement_vector(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn double_click_through_service() {
        let mut player = PlayerInput::new(0);
        let mut input = GameInput::new();

        press_frame(&mut player, &mut input, Action::Attack, 0.0);
        assert!(!input.double_clicked(Action::Attack));

        press_frame(&mut player, &mut input, Action::Attack, 0.2);
        assert!(input.double_clicked(Action::Attack));

        // Fired flag is per-frame only
        input.update(&player, 0.25);
        assert!(!input.double_clicked(Action::Attack));
    }

    #[test]
    fn hold_duration_through_service() {
        let mut player = PlayerInput::new(0);
        let mut input = GameInput::new();

        player.press(Action::Attack);
        input.update(&player, 1.0);
        assert_eq!(input.hold_duration(Action::Attack), 0.0);

        player.update();
        input.update(&player, 2.5);
        assert_relative_eq!(input.hold_duration(Action::Attack), 1.5);

        player.release(Action::Attack);
        input.update(&player, 3.0);
        assert_eq!(input.hold_duration(Action::Attack), 0.0);
    }

    #[test]
    fn untracked_action_has_zero_hold_duration() {
        let mut player = PlayerInput::new(0);
        let mut input = GameInput::new();
        player.press(Action::Jump);
        input.update(&player, 0.0);
        player.update();
        input.update(&player, 5.0);
        assert_eq!(input.hold_duration(Action::Jump), 0.0);
    }

    #[test]
    fn reset_clears_detectors() {
        let mut player = PlayerInput::new(0);
        let mut input = GameInput::new();

        press_frame(&mut player, &mut input, Action::Attack, 0.0);
        input.reset();
        press_frame(&mut player, &mut input, Action::Attack, 0.2);
        assert!(!input.double_clicked(Action::Attack));
    }
}
