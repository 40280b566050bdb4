// Input handling system
//
// Raw winit events flow through a rebindable configuration layer into
// per-player action state, and from there into the game-facing query
// service that the player controller reads.
//
// - `action`: logical game actions and default key bindings
// - `config`: source-to-action binding configuration and remapping
// - `manager`: routes window events to per-player state
// - `player`: per-player pressed / just-pressed / just-released tracking
// - `detect`: double-click and hold-duration detectors
// - `service`: per-frame snapshot with derived queries (the layer game
//   logic talks to)

pub mod action;
pub mod config;
pub mod detect;
pub mod manager;
pub mod player;
pub mod service;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::{InputConfig, InputConfigManager};
pub use detect::{DoubleClickDetector, HoldTracker};
pub use manager::InputManager;
pub use player::PlayerInput;
pub use service::GameInput;
