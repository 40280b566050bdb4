// Input manager - routes raw window events to per-player action state

use super::action::{Action, InputSource};
use super::config::InputConfigManager;
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Main input manager that coordinates all input for all players
pub struct InputManager {
    /// Configuration manager for all players
    config: InputConfigManager,

    /// Input state for each player
    players: Vec<PlayerInput>,

    /// Maximum number of supported players
    max_players: usize,
}

impl InputManager {
    /// Create a new input manager
    pub fn new(max_players: usize) -> Self {
        let config = InputConfigManager::new(max_players);
        let mut players = Vec::with_capacity(max_players);

        for player_id in 0..max_players {
            players.push(PlayerInput::new(player_id));
        }

        Self {
            config,
            players,
            max_players,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            // Key repeats are OS-level autorepeat, not real presses
            if event.repeat {
                return;
            }
            self.process_source(InputSource::key(key_code), event.state);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.process_source(InputSource::mouse(button), state);
    }

    fn process_source(&mut self, source: InputSource, state: ElementState) {
        for player_id in 0..self.max_players {
            if let Some(action) = self.config.get_action(player_id, source) {
                if let Some(player) = self.players.get_mut(player_id) {
                    match state {
                        ElementState::Pressed => player.press(action),
                        ElementState::Released => player.release(action),
                    }
                }
            }
        }
    }

    /// Update all player input states for a new frame
    /// Call this once per frame after processing all events
    pub fn update(&mut self) {
        for player in &mut self.players {
            player.update();
        }
    }

    /// Get input state for a specific player
    pub fn player(&self, player_id: usize) -> Option<&PlayerInput> {
        self.players.get(player_id)
    }

    /// Get mutable input state for a specific player
    pub fn player_mut(&mut self, player_id: usize) -> Option<&mut PlayerInput> {
        self.players.get_mut(player_id)
    }

    /// Get the configuration manager
    pub fn config(&self) -> &InputConfigManager {
        &self.config
    }

    /// Get mutable configuration manager
    pub fn config_mut(&mut self) -> &mut InputConfigManager {
        &mut self.config
    }

    /// Check if any player pressed a specific action this frame
    pub fn any_player_just_pressed(&self, action: Action) -> bool {
        self.players.iter().any(|p| p.just_pressed(action))
    }

    /// Reset all player input states
    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
    }

    /// Get the number of players
    pub fn num_players(&self) -> usize {
        self.max_players
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_creation() {
        let manager = InputManager::new(2);
        assert_eq!(manager.num_players(), 2);
        assert!(manager.player(0).is_some());
        assert!(manager.player(1).is_some());
        assert!(manager.player(2).is_none());
    }

    #[test]
    fn test_direct_input_manipulation() {
        let mut manager = InputManager::new(1);

        if let Some(player) = manager.player_mut(0) {
            player.press(Action::MoveLeft);
        }

        assert!(manager.player(0).unwrap().is_pressed(Action::MoveLeft));
    }

    #[test]
    fn test_mouse_button_maps_to_attack() {
        let mut manager = InputManager::new(1);
        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(manager.player(0).unwrap().just_pressed(Action::Attack));

        manager.update();
        manager.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert!(manager.player(0).unwrap().just_released(Action::Attack));
    }

    #[test]
    fn test_update_clears_just_pressed() {
        let mut manager = InputManager::new(1);

        if let Some(player) = manager.player_mut(0) {
            player.press(Action::Attack);
        }
        assert!(manager.player(0).unwrap().just_pressed(Action::Attack));

        manager.update();
        assert!(!manager.player(0).unwrap().just_pressed(Action::Attack));
        assert!(manager.player(0).unwrap().is_pressed(Action::Attack));
    }

    #[test]
    fn test_any_player_just_pressed() {
        let mut manager = InputManager::new(2);

        if let Some(player) = manager.player_mut(1) {
            player.press(Action::Jump);
        }

        assert!(manager.any_player_just_pressed(Action::Jump));

        manager.update();
        assert!(!manager.any_player_just_pressed(Action::Jump));
    }

    #[test]
    fn test_reset_all() {
        let mut manager = InputManager::new(1);

        if let Some(player) = manager.player_mut(0) {
            player.press(Action::Attack);
        }
        assert!(manager.player(0).unwrap().is_pressed(Action::Attack));

        manager.reset_all();
        assert!(!manager.player(0).unwrap().is_pressed(Action::Attack));
    }
}
