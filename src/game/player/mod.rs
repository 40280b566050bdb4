// The player character: state machine, body, animation, and controller.

pub mod animation;
pub mod body;
pub mod controller;
pub mod events;
pub mod fsm;
pub mod owner;
pub mod states;
pub mod tuning;

pub use animation::{AnimationClip, AnimationPlayer};
pub use body::{AttackKind, CharacterBody};
pub use controller::PlayerController;
pub use events::AnimationEventType;
pub use fsm::{EventResponse, FsmError, PlayerFsm, PlayerState};
pub use owner::{PlayerOwner, PlayerView};
pub use states::{build_player_fsm, PlayerStateId};
pub use tuning::{CharacterTuning, BASE_TUNING};
