// Input configuration and remapping system

use super::action::{Action, InputSource};
use std::collections::HashMap;

/// Input configuration for a single player
/// Maps input sources (keys/buttons) to game actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Player ID this config is for
    player_id: usize,

    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            bindings: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(player_id: usize, bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new(player_id);
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Get the player ID
    pub fn player_id(&self) -> usize {
        self.player_id
    }

    /// Bind an input source to an action, replacing any existing binding
    /// for that source. Several sources may map to the same action.
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.bindings.insert(source, action);
    }

    /// Unbind an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        self.bindings.remove(&source);
    }

    /// Unbind all sources for an action
    pub fn unbind_action(&mut self, action: Action) {
        self.bindings.retain(|_, a| *a != action);
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Get all input sources bound to an action
    pub fn get_sources(&self, action: Action) -> Vec<InputSource> {
        self.bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(s, _)| *s)
            .collect()
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.bindings.values().any(|a| *a == action)
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Reset to default bindings for this player
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        let defaults = match self.player_id {
            0 => super::action::default_p1_bindings(),
            _ => Vec::new(), // Players 2+ have no local bindings by default
        };
        for (source, action) in defaults {
            self.bind(source, action);
        }
    }
}

/// Manages input configurations for all players
#[derive(Debug)]
pub struct InputConfigManager {
    configs: Vec<InputConfig>,
}

impl InputConfigManager {
    /// Create configurations for the given number of players, each starting
    /// from its defaults
    pub fn new(max_players: usize) -> Self {
        let mut configs = Vec::with_capacity(max_players);
        for player_id in 0..max_players {
            let mut config = InputConfig::new(player_id);
            config.reset_to_defaults();
            configs.push(config);
        }
        Self { configs }
    }

    /// Get a player's configuration
    pub fn get_config(&self, player_id: usize) -> Option<&InputConfig> {
        self.configs.get(player_id)
    }

    /// Get a player's configuration mutably (for rebinding)
    pub fn get_config_mut(&mut self, player_id: usize) -> Option<&mut InputConfig> {
        self.configs.get_mut(player_id)
    }

    /// Look up the action an input source maps to for a player
    pub fn get_action(&self, player_id: usize, source: InputSource) -> Option<Action> {
        self.configs.get(player_id)?.get_action(source)
    }
}
