// Per-player input state management

use super::action::Action;
use glam::Vec2;
use std::collections::HashSet;

/// Represents the input state for a single player
#[derive(Debug)]
pub struct PlayerInput {
    /// Player ID (0-3 for up to 4 players)
    player_id: usize,

    /// Actions that are currently pressed
    pressed: HashSet<Action>,

    /// Actions that were just pressed this frame (press events)
    just_pressed: HashSet<Action>,

    /// Actions that were just released this frame (release events)
    just_released: HashSet<Action>,

    /// Actions that were pressed in the previous frame
    previous_pressed: HashSet<Action>,
}

impl PlayerInput {
    /// Create a new player input state
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
            previous_pressed: HashSet::new(),
        }
    }

    /// Get the player ID
    pub fn player_id(&self) -> usize {
        self.player_id
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Check if an action is held (pressed for multiple frames)
    pub fn is_held(&self, action: Action) -> bool {
        self.pressed.contains(&action) && self.previous_pressed.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if !self.pressed.contains(&action) {
            self.just_pressed.insert(action);
            self.pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.contains(&action) {
            self.just_released.insert(action);
            self.pressed.remove(&action);
        }
    }

    /// Update input state for a new frame
    /// Call this once per frame after processing all events
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed = self.pressed.clone();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed.clear();
    }

    /// Get all currently pressed actions
    pub fn get_pressed_actions(&self) -> Vec<Action> {
        self.pressed.iter().copied().collect()
    }

    /// Get all actions that were just pressed this frame
    pub fn get_just_pressed_actions(&self) -> Vec<Action> {
        self.just_pressed.iter().copied().collect()
    }

    /// Movement input on the ground plane as a vector.
    /// X is left/right, Y is toward/away from the camera (2.5D depth).
    /// Diagonals are normalized so depth movement cannot outrun straight runs.
    pub fn movement_vector(&self) -> Vec2 {
        let mut v = Vec2::ZERO;

        if self.is_pressed(Action::MoveLeft) {
            v.x -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            v.x += 1.0;
        }
        if self.is_pressed(Action::MoveDown) {
            v.y -= 1.0;
        }
        if self.is_pressed(Action::MoveUp) {
            v.y += 1.0;
        }

        if v.length_squared() > 1.0 {
            v.normalize_or_zero()
        } else {
            v
        }
    }
}
