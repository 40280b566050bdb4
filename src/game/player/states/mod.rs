// Player state machine states
//
// One module per state; the transition table is spread across their
// `on_update` methods, first matching condition wins. Event-driven
// transitions (combo windows, clip ends) live in `on_event`.

pub mod attack;
pub mod idle;
pub mod jump_attack;
pub mod jump_fall;
pub mod jump_up;
pub mod run;

pub use attack::{AttackState, COMBO_ANIMATIONS};
pub use idle::IdleState;
pub use jump_attack::JumpAttackState;
pub use jump_fall::JumpFallState;
pub use jump_up::JumpUpState;
pub use run::RunState;

use crate::game::player::fsm::{FsmError, PlayerFsm};
use crate::game::player::owner::PlayerOwner;

/// Identifiers for the player's states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerStateId {
    Idle,
    Run,
    JumpUp,
    JumpFall,
    Attack,
    JumpAttack,
}

/// Downward velocity below which the character counts as falling.
/// Small negative slack so solver jitter while standing doesn't read as a fall.
pub const FALL_VELOCITY_THRESHOLD: f32 = -0.1;

/// Airborne and moving downward faster than the jitter threshold.
pub fn is_falling(ctx: &dyn PlayerOwner) -> bool {
    !ctx.is_grounded() && ctx.velocity().y < FALL_VELOCITY_THRESHOLD
}

/// Build the player state machine with all states registered.
/// Registration errors are configuration bugs, surfaced at construction.
pub fn build_player_fsm() -> Result<PlayerFsm, FsmError> {
    let mut fsm = PlayerFsm::new();
    fsm.add_state(PlayerStateId::Idle, Box::new(IdleState))?;
    fsm.add_state(PlayerStateId::Run, Box::new(RunState))?;
    fsm.add_state(PlayerStateId::JumpUp, Box::new(JumpUpState))?;
    fsm.add_state(PlayerStateId::JumpFall, Box::new(JumpFallState))?;
    fsm.add_state(PlayerStateId::Attack, Box::new(AttackState::new()))?;
    fsm.add_state(PlayerStateId::JumpAttack, Box::new(JumpAttackState::new()))?;
    Ok(fsm)
}
